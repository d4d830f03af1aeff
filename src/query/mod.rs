//! Query interface over a frozen cast graph
//!
//! [`CastGraph`] owns the identifier registry, the CSR view and the component
//! labeling. It is immutable once built and can be shared by reference across
//! threads; every per-subject query runs its own BFS and owns the result.

pub mod subject;

use crate::algo::{build_view, ComponentLabels};
use crate::graph::{BipartiteGraph, GraphResult, IdentifierRegistry, VertexId, VertexKind};
use castgraph_algorithms::GraphView;
use tracing::info;

pub use subject::{SubjectQuery, SubjectSummary};

#[derive(Debug, Clone)]
pub struct CastGraph {
    registry: IdentifierRegistry,
    view: GraphView,
    components: ComponentLabels,
}

impl CastGraph {
    pub(crate) fn from_parts(registry: IdentifierRegistry, graph: &BipartiteGraph) -> Self {
        let view = build_view(graph);
        let components = ComponentLabels::label(&view, &registry);

        info!(
            "Built cast graph: {} subjects, {} groupings, {} edges, {} components",
            registry.subject_count(),
            registry.grouping_count(),
            view.edge_count(),
            components.component_count()
        );

        Self {
            registry,
            view,
            components,
        }
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    pub(crate) fn components_labels(&self) -> &ComponentLabels {
        &self.components
    }

    pub fn vertex_count(&self) -> usize {
        self.view.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.view.edge_count()
    }

    pub fn subject_count(&self) -> usize {
        self.registry.subject_count()
    }

    pub fn grouping_count(&self) -> usize {
        self.registry.grouping_count()
    }

    /// Subject names in registration order
    pub fn subjects(&self) -> impl Iterator<Item = &str> + '_ {
        self.registry.subjects()
    }

    /// Neighbors of a vertex in insertion order
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let slice: &[usize] = if v.as_usize() < self.view.node_count {
            self.view.neighbors(v.as_usize())
        } else {
            &[]
        };
        slice.iter().copied().map(VertexId::new)
    }

    pub fn component_id(&self, v: VertexId) -> GraphResult<usize> {
        self.components
            .component_id(v)
            .ok_or(crate::graph::GraphError::VertexNotFound(v))
    }

    pub fn component_count(&self) -> usize {
        self.components.component_count()
    }

    /// One representative subject per component, in component-id order
    pub fn components(&self) -> Vec<&str> {
        self.components
            .representatives()
            .filter_map(|id| self.registry.name_of(id, VertexKind::Subject).ok())
            .collect()
    }

    /// Whether two subjects share a component
    pub fn connected(&self, a: &str, b: &str) -> GraphResult<bool> {
        let a = self.registry.subject_id(a)?;
        let b = self.registry.subject_id(b)?;
        Ok(self.components.connected(a, b))
    }

    /// Groupings a subject belongs to, in adjacency order
    pub fn groupings_of(&self, name: &str) -> GraphResult<Vec<&str>> {
        let id = self.registry.subject_id(name)?;
        self.neighbors(id)
            .map(|g| self.registry.name_of(g, VertexKind::Grouping))
            .collect()
    }

    /// Run a BFS from `name` and return the reusable per-subject query
    pub fn subject_details(&self, name: &str) -> GraphResult<SubjectQuery<'_>> {
        let source = self.registry.subject_id(name)?;
        SubjectQuery::new(self, source)
    }

    pub fn connected_subject_count(&self, name: &str) -> GraphResult<usize> {
        Ok(self.subject_details(name)?.connected_subject_count())
    }

    /// Mean subject-to-subject hop count to every other reachable subject,
    /// `None` when no other subject is reachable
    pub fn average_distance(&self, name: &str) -> GraphResult<Option<f64>> {
        Ok(self.subject_details(name)?.average_distance())
    }

    pub fn maximum_distance(&self, name: &str) -> GraphResult<f64> {
        Ok(self.subject_details(name)?.maximum_distance())
    }

    pub fn furthest_subject(&self, name: &str) -> GraphResult<Option<&str>> {
        Ok(self.subject_details(name)?.furthest_subject())
    }

    /// Subjects on a shortest path, `name` first and `target` last.
    /// `None` when the two are in different components.
    pub fn subject_path(&self, name: &str, target: &str) -> GraphResult<Option<Vec<&str>>> {
        if !self.connected(name, target)? {
            return Ok(None);
        }
        self.subject_details(name)?.subject_path(target)
    }

    /// Alternating subject/grouping names on a shortest path, `name` first
    pub fn grouping_path(&self, name: &str, target: &str) -> GraphResult<Option<Vec<&str>>> {
        if !self.connected(name, target)? {
            return Ok(None);
        }
        self.subject_details(name)?.grouping_path(target)
    }

    /// Subject-to-subject hops between two subjects, `f64::INFINITY` when
    /// they are in different components
    pub fn path_length(&self, name: &str, target: &str) -> GraphResult<f64> {
        if !self.connected(name, target)? {
            return Ok(f64::INFINITY);
        }
        self.subject_details(name)?.path_length(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{CastGraphBuilder, GraphError, VertexId};

    fn chain() -> super::CastGraph {
        let mut builder = CastGraphBuilder::new();
        builder.add_record("M1", ["X", "Y"]).unwrap();
        builder.add_record("M2", ["Y", "Z"]).unwrap();
        builder.build()
    }

    #[test]
    fn test_counts() {
        let graph = chain();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.subject_count(), 3);
        assert_eq!(graph.grouping_count(), 2);
        assert_eq!(graph.subjects().collect::<Vec<_>>(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_groupings_of() {
        let graph = chain();
        assert_eq!(graph.groupings_of("Y").unwrap(), vec!["M1", "M2"]);
        assert_eq!(graph.groupings_of("X").unwrap(), vec!["M1"]);
        assert_eq!(
            graph.groupings_of("Nobody"),
            Err(GraphError::SubjectNotFound("Nobody".to_string()))
        );
    }

    #[test]
    fn test_component_lookup() {
        let graph = chain();
        assert_eq!(graph.component_id(VertexId(0)).unwrap(), 0);
        assert_eq!(
            graph.component_id(VertexId(50)),
            Err(GraphError::VertexNotFound(VertexId(50)))
        );
        assert_eq!(graph.neighbors(VertexId(50)).count(), 0);
    }

    #[test]
    fn test_unknown_names_fail_the_query() {
        let graph = chain();
        assert!(matches!(
            graph.path_length("X", "Ghost"),
            Err(GraphError::SubjectNotFound(name)) if name == "Ghost"
        ));
        assert!(graph.subject_details("Ghost").is_err());
        // Groupings are not subjects
        assert!(graph.average_distance("M1").is_err());
    }
}
