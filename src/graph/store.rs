//! In-memory bipartite graph storage
//!
//! Adjacency lists over the shared vertex id space. Filled during the load
//! phase only; [`crate::graph::CastGraphBuilder::build`] freezes it into a CSR
//! view and it is never mutated afterwards.

use super::types::{VertexId, VertexKind};
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Subject '{0}' not found")]
    SubjectNotFound(String),

    #[error("Grouping '{0}' not found")]
    GroupingNotFound(String),

    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Vertex {vertex} is not a {expected}")]
    KindMismatch { vertex: VertexId, expected: VertexKind },

    #[error("Invalid edge: self loop on {0}")]
    SelfLoop(VertexId),

    #[error("Invalid edge: {0} and {1} are the same kind")]
    SameKindEdge(VertexId, VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected adjacency-list graph
///
/// Parallel edges are not collapsed: a repeated co-occurrence adds another
/// entry on both endpoints.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the vertex set so that ids `0..count` exist
    pub fn ensure_vertices(&mut self, count: usize) {
        if self.adjacency.len() < count {
            self.adjacency.resize_with(count, Vec::new);
        }
    }

    /// Add an undirected edge, recorded on both endpoints
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        let n = self.adjacency.len();
        if u.as_usize() >= n {
            return Err(GraphError::VertexNotFound(u));
        }
        if v.as_usize() >= n {
            return Err(GraphError::VertexNotFound(v));
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        self.adjacency[u.as_usize()].push(v);
        self.adjacency[v.as_usize()].push(u);
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbors in insertion order
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency
            .get(v.as_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }
}
