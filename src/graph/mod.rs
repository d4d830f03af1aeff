//! Core bipartite graph implementation
//!
//! This module implements the subject/grouping data model:
//! - Dense vertex ids shared by both kinds, with name tables per kind
//! - Undirected adjacency lists filled once at load time
//! - A builder that enforces the bipartite invariant on every edge

pub mod builder;
pub mod registry;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::CastGraphBuilder;
pub use registry::IdentifierRegistry;
pub use store::{BipartiteGraph, GraphError, GraphResult};
pub use types::{VertexId, VertexKind};
