//! Mangrove Store — persistence adapter for named graph collections
//!
//! Serializes a name-keyed collection of [`VariantGraph`]s to a single JSON
//! text blob and back. Where that blob lives is the host's business; the
//! file helpers at the bottom cover hosts that just want a path.

use std::collections::BTreeMap;
use std::path::Path;

use mangrove_core::{CodecError, EncodedGraph, VariantGraph};
use thiserror::Error;


/// A collection of graphs under caller-chosen names.
pub type NamedGraphs = BTreeMap<String, VariantGraph>;

/// Failure while decoding a collection blob.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("collection blob is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("graph entry is malformed: {0}")]
    Codec(#[from] CodecError),
}

/// Serialize a named collection into one JSON blob: an object keyed by graph
/// name, values being per-graph encodings.
pub fn encode_collection(graphs: &NamedGraphs) -> Result<String, StoreError> {
    let encoded: BTreeMap<&String, EncodedGraph> = graphs
        .iter()
        .map(|(name, graph)| (name, graph.to_encoded()))
        .collect();
    Ok(serde_json::to_string(&encoded)?)
}

/// Decode a collection blob. Never panics past this boundary: unparsable
/// JSON, schema mismatches, and malformed node ids all come back as
/// [`StoreError`].
pub fn decode_collection(blob: &str) -> Result<NamedGraphs, StoreError> {
    let encoded: BTreeMap<String, EncodedGraph> = serde_json::from_str(blob)?;
    let mut graphs = NamedGraphs::new();
    for (name, encoded_graph) in encoded {
        graphs.insert(name, VariantGraph::from_encoded(&encoded_graph)?);
    }
    tracing::debug!(graphs = graphs.len(), "decoded graph collection");
    Ok(graphs)
}

/// Decode, substituting the empty collection when the blob is malformed.
pub fn decode_collection_or_default(blob: &str) -> NamedGraphs {
    match decode_collection(blob) {
        Ok(graphs) => graphs,
        Err(err) => {
            tracing::warn!(%err, "malformed graph collection, starting empty");
            NamedGraphs::new()
        }
    }
}

/// Write a collection blob to `path`.
pub fn save_collection(path: &Path, graphs: &NamedGraphs) -> anyhow::Result<()> {
    let blob = encode_collection(graphs)?;
    std::fs::write(path, blob)?;
    tracing::debug!("graph collection saved: {}", path.display());
    Ok(())
}

/// Read a collection blob from `path`. A missing file is `Ok(None)`, not an
/// error; a present-but-malformed file is an error the caller decides about.
pub fn load_collection(path: &Path) -> anyhow::Result<Option<NamedGraphs>> {
    if !path.exists() {
        return Ok(None);
    }
    let blob = std::fs::read_to_string(path)?;
    let graphs = decode_collection(&blob)?;
    tracing::debug!("graph collection loaded from: {}", path.display());
    Ok(Some(graphs))
}
