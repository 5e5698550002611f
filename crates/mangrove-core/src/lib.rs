//! Mangrove Core — Graph variant data model, diff/grouping engine, and suggestion ranker

pub mod diff;
pub mod graph;
pub mod model;
pub mod suggest;


pub use diff::{group_all, group_node, NodeGrouping, Subgroup};
pub use graph::{CodecError, EncodedGraph, EncodedNode, VariantGraph};
pub use model::{option_eq_by, GraphColor, NodeAttributes, NodeId};
pub use suggest::{levenshtein, rank, Candidate, Suggestion};
