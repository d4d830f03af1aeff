//! Load-phase ingestion interface
//!
//! The ingestion collaborator registers names and inserts grouping/subject
//! edges through [`CastGraphBuilder`], then calls [`CastGraphBuilder::build`]
//! once to obtain the immutable, queryable [`CastGraph`].

use super::registry::IdentifierRegistry;
use super::store::{BipartiteGraph, GraphError, GraphResult};
use super::types::VertexId;
use crate::query::CastGraph;

#[derive(Debug, Default)]
pub struct CastGraphBuilder {
    registry: IdentifierRegistry,
    graph: BipartiteGraph,
}

impl CastGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_subject(&mut self, name: &str) -> VertexId {
        let id = self.registry.register_subject(name);
        self.graph.ensure_vertices(self.registry.vertex_count());
        id
    }

    pub fn register_grouping(&mut self, name: &str) -> VertexId {
        let id = self.registry.register_grouping(name);
        self.graph.ensure_vertices(self.registry.vertex_count());
        id
    }

    /// Connect a grouping and a subject. Endpoint order does not matter, but
    /// the two ids must be of different kinds.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        let ku = self.registry.kind_of(u).ok_or(GraphError::VertexNotFound(u))?;
        let kv = self.registry.kind_of(v).ok_or(GraphError::VertexNotFound(v))?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if ku == kv {
            return Err(GraphError::SameKindEdge(u, v));
        }
        self.graph.add_edge(u, v)
    }

    /// Register one grouping with its members and connect them
    pub fn add_record<'a, I>(&mut self, grouping: &str, subjects: I) -> GraphResult<VertexId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let g = self.register_grouping(grouping);
        for name in subjects {
            let s = self.register_subject(name);
            self.add_edge(g, s)?;
        }
        Ok(g)
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Freeze the graph and label its components
    pub fn build(self) -> CastGraph {
        CastGraph::from_parts(self.registry, &self.graph)
    }
}
