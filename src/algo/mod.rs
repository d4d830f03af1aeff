//! Graph algorithms module
//!
//! Algorithms are implemented in the `castgraph-algorithms` crate over a
//! kind-agnostic CSR view. This module provides the adapter layer that maps
//! [`VertexId`]s and vertex kinds onto it.

pub mod community;

use crate::graph::{BipartiteGraph, GraphError, GraphResult, VertexId};
use castgraph_algorithms::GraphView;

pub use castgraph_algorithms::{bfs_tree, connected_components, BfsTree, ComponentResult};
pub use community::ComponentLabels;

/// Build a CSR GraphView from the load-phase adjacency lists.
///
/// Neighbor order is preserved, so traversals over the view discover
/// vertices in the same order as traversals over the adjacency lists.
pub fn build_view(graph: &BipartiteGraph) -> GraphView {
    GraphView::from_adjacency_list(
        graph
            .adjacency()
            .iter()
            .map(|neighbors| neighbors.iter().map(VertexId::as_usize)),
    )
}

/// Run a full single-source BFS from `source`.
///
/// Every call allocates its own tree, so concurrent calls over the same view
/// never share state.
pub fn run_bfs(view: &GraphView, source: VertexId) -> GraphResult<BfsTree> {
    bfs_tree(view, source.as_usize()).ok_or(GraphError::VertexNotFound(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_preserves_adjacency_order() {
        let mut graph = BipartiteGraph::new();
        graph.ensure_vertices(4);
        graph.add_edge(VertexId(0), VertexId(3)).unwrap();
        graph.add_edge(VertexId(0), VertexId(1)).unwrap();
        graph.add_edge(VertexId(2), VertexId(1)).unwrap();

        let view = build_view(&graph);

        assert_eq!(view.node_count, 4);
        assert_eq!(view.neighbors(0), &[3, 1]);
        assert_eq!(view.neighbors(1), &[0, 2]);
        assert_eq!(view.edge_count(), 3);
    }

    #[test]
    fn test_run_bfs_rejects_unknown_source() {
        let view = GraphView::from_edges(2, &[(0, 1)]);
        assert!(run_bfs(&view, VertexId(0)).is_ok());
        assert_eq!(
            run_bfs(&view, VertexId(2)).unwrap_err(),
            GraphError::VertexNotFound(VertexId(2))
        );
    }
}
