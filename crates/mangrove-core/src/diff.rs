//! Cross-variant grouping: per node, partition the active variant tags by
//! attribute equality

use std::collections::HashSet;

use crate::graph::VariantGraph;
use crate::model::{option_eq_by, GraphColor, NodeAttributes, NodeId};

/// One agreement class for a node: the variants in `colors` all hold
/// `attributes` for that node (`None` = the node is absent in all of them).
#[derive(Debug, Clone)]
pub struct Subgroup {
    pub attributes: Option<NodeAttributes>,
    pub colors: Vec<GraphColor>,
}

/// How the active variants agree and disagree on one node.
///
/// `subgroups` is a partition of the engine's input colors: disjoint,
/// non-empty, covering every color exactly once.
#[derive(Debug, Clone)]
pub struct NodeGrouping {
    pub node_id: NodeId,
    pub subgroups: Vec<Subgroup>,
}

impl NodeGrouping {
    /// True when every active variant agrees on this node.
    pub fn is_unanimous(&self) -> bool {
        self.subgroups.len() <= 1
    }
}

/// Partition `colors` by what each variant holds for `node_id`.
///
/// Two colors land in the same subgroup iff their attributes for the node
/// are equal under the one-level null-aware comparator; "both absent"
/// counts as equal. Subgroups appear in first-encounter order scanning
/// `colors` left to right; that order is a presentation convenience, not a
/// contract. Color uniqueness within `colors` is assumed, not enforced.
pub fn group_node<'a, F>(node_id: NodeId, colors: &[GraphColor], graph_by_color: &F) -> NodeGrouping
where
    F: Fn(GraphColor) -> &'a VariantGraph,
{
    let mut subgroups: Vec<Subgroup> = Vec::new();
    for &color in colors {
        let attributes = graph_by_color(color).node_attributes(node_id);
        let existing = subgroups
            .iter_mut()
            .find(|s| option_eq_by(s.attributes.as_ref(), attributes, NodeAttributes::matches));
        match existing {
            Some(subgroup) => subgroup.colors.push(color),
            None => subgroups.push(Subgroup {
                attributes: attributes.cloned(),
                colors: vec![color],
            }),
        }
    }
    NodeGrouping { node_id, subgroups }
}

/// Group every node in the union of node ids across the active variants.
///
/// Nodes are emitted in first-encounter order over `colors`; O(nodes ×
/// colors²), fine because the palette bounds the number of simultaneous
/// variants.
pub fn group_all<'a, F>(colors: &[GraphColor], graph_by_color: F) -> Vec<NodeGrouping>
where
    F: Fn(GraphColor) -> &'a VariantGraph,
{
    let mut seen = HashSet::new();
    let mut node_ids = Vec::new();
    for &color in colors {
        for id in graph_by_color(color).node_ids() {
            if seen.insert(id) {
                node_ids.push(id);
            }
        }
    }
    tracing::trace!(variants = colors.len(), nodes = node_ids.len(), "grouping variants");
    node_ids
        .into_iter()
        .map(|id| group_node(id, colors, &graph_by_color))
        .collect()
}
