//! Core data types: node identity, node attributes, variant tags

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::CodecError;

/// Opaque, unique identifier for a graph node.
///
/// Identity is the id value itself, never the node's label or position.
/// No ordering is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh id, expected unique for the process lifetime.
    /// Collisions are an accepted risk; there is no detection.
    pub fn fresh() -> Self {
        NodeId(Uuid::new_v4())
    }

    /// Parse the textual form produced by `Display`.
    pub fn parse(text: &str) -> Result<Self, CodecError> {
        Uuid::parse_str(text)
            .map(NodeId)
            .map_err(|_| CodecError::InvalidNodeId(text.to_string()))
    }
}

impl std::fmt::Display for NodeId {
    /// Deterministic rendering, used for display fallbacks and encoding keys.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A node's editable state: a text label plus an optional reference
/// ("extract") to another node.
///
/// `extract` may dangle, self-reference, or sit on a cycle; none of that is
/// validated here.
///
/// `PartialEq` is intentionally not derived: comparison goes through
/// [`NodeAttributes::matches`] so every call site uses the same one-level
/// null-aware rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub label: String,
    pub extract: Option<NodeId>,
}

impl NodeAttributes {
    /// Attribute equality: labels exact and case-sensitive, extracts under
    /// the null-aware comparator.
    pub fn matches(&self, other: &NodeAttributes) -> bool {
        self.label == other.label
            && option_eq_by(self.extract.as_ref(), other.extract.as_ref(), |a, b| a == b)
    }
}

/// Null-aware equality over optional values: both absent is equal, absent
/// never equals present, otherwise delegate.
///
/// The one shared helper for every optional comparison in the crate
/// (extract-to-extract, attributes-or-absent in the grouping engine).
pub fn option_eq_by<T>(a: Option<&T>, b: Option<&T>, eq: impl Fn(&T, &T) -> bool) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Tag distinguishing one concurrently compared graph variant from another.
///
/// `Baseline` is the "no diff assigned" tag: the current editing target when
/// no explicit diff variants are active. Which graph each tag points at is
/// owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphColor {
    Baseline,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl GraphColor {
    /// Finite ordered palette used to auto-allocate diff variants.
    pub const SAMPLES: [GraphColor; 6] = [
        GraphColor::Red,
        GraphColor::Green,
        GraphColor::Blue,
        GraphColor::Yellow,
        GraphColor::Orange,
        GraphColor::Purple,
    ];

    /// First palette sample not already in use, or `None` when all six are
    /// taken. Callers ignore the allocation request on `None`.
    pub fn allocate(in_use: &[GraphColor]) -> Option<GraphColor> {
        Self::SAMPLES.iter().copied().find(|c| !in_use.contains(c))
    }

    /// CSS color name for the presentation layer. Opaque to core logic.
    pub fn display_color(self) -> &'static str {
        match self {
            GraphColor::Baseline => "transparent",
            GraphColor::Red => "red",
            GraphColor::Green => "green",
            GraphColor::Blue => "blue",
            GraphColor::Yellow => "yellow",
            GraphColor::Orange => "orange",
            GraphColor::Purple => "purple",
        }
    }
}

impl Default for GraphColor {
    fn default() -> Self {
        GraphColor::Baseline
    }
}
