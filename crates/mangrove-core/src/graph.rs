//! Immutable graph variant: a copy-on-write NodeId → NodeAttributes mapping
//! with a lossless external encoding

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{NodeAttributes, NodeId};

/// One variant's full state: a mapping from node id to attributes.
///
/// A node exists iff it has an entry. Values are never mutated in place:
/// every update goes through [`VariantGraph::with_node_attributes`], which
/// returns a new graph and leaves the old snapshot untouched, so published
/// snapshots can be read freely while successors are built.
#[derive(Debug, Clone, Default)]
pub struct VariantGraph {
    nodes: HashMap<NodeId, NodeAttributes>,
}

impl VariantGraph {
    /// The zero-node graph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ids of all present nodes. Enumeration order is unspecified; display
    /// order is the caller's concern.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Attributes for `id`, or `None` if the node does not exist. Absence is
    /// an expected outcome, not an error.
    pub fn node_attributes(&self, id: NodeId) -> Option<&NodeAttributes> {
        self.nodes.get(&id)
    }

    /// Upsert (`Some`) or remove (`None`) a node, returning the resulting
    /// graph. Removing an absent node is a no-op; `self` is unaffected
    /// either way.
    pub fn with_node_attributes(
        &self,
        id: NodeId,
        attributes: Option<NodeAttributes>,
    ) -> VariantGraph {
        let mut nodes = self.nodes.clone();
        match attributes {
            Some(attributes) => {
                nodes.insert(id, attributes);
            }
            None => {
                nodes.remove(&id);
            }
        }
        VariantGraph { nodes }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// External encoding: a record keyed by node-id text. Sorted keys keep
    /// the encoded form stable across runs.
    pub fn to_encoded(&self) -> EncodedGraph {
        self.nodes
            .iter()
            .map(|(id, attributes)| {
                (
                    id.to_string(),
                    EncodedNode {
                        label: attributes.label.clone(),
                        extract: attributes.extract.map(|e| e.to_string()),
                    },
                )
            })
            .collect()
    }

    /// Decode an external encoding. Fails only on unparsable node-id text;
    /// extracts naming nodes absent from the record are legal (dangling
    /// references are the presentation layer's problem).
    pub fn from_encoded(encoded: &EncodedGraph) -> Result<VariantGraph, CodecError> {
        let mut nodes = HashMap::with_capacity(encoded.len());
        for (id_text, node) in encoded {
            let id = NodeId::parse(id_text)?;
            let extract = match &node.extract {
                Some(text) => Some(NodeId::parse(text)?),
                None => None,
            };
            nodes.insert(
                id,
                NodeAttributes {
                    label: node.label.clone(),
                    extract,
                },
            );
        }
        Ok(VariantGraph { nodes })
    }
}

/// Wire form of one graph: node-id text → encoded attributes.
pub type EncodedGraph = BTreeMap<String, EncodedNode>;

/// Wire form of one node's attributes. `extract` is omitted entirely when
/// the node has no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

/// Decode failure for the per-graph encoding.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid node id text `{0}`")]
    InvalidNodeId(String),
}
