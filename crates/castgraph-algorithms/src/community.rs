//! Community detection algorithms
//!
//! Connected components over an undirected view.

use super::common::{GraphView, VertexIdx};
use std::collections::VecDeque;

/// Result of the connected-components sweep
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentResult {
    /// Vertex index -> Component ID
    pub component_of: Vec<usize>,
    /// Number of components
    pub count: usize,
    /// Order in which the sweep visited vertices
    pub visit_order: Vec<VertexIdx>,
}

impl ComponentResult {
    pub fn connected(&self, u: VertexIdx, v: VertexIdx) -> bool {
        self.component_of[u] == self.component_of[v]
    }

    /// Component sizes indexed by component ID
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &c in &self.component_of {
            sizes[c] += 1;
        }
        sizes
    }
}

/// Connected Components
///
/// Breadth-first sweep: every unvisited vertex, in index order, roots a new
/// component and everything reachable from it gets the same ID. Component IDs
/// are dense and follow the order of their root vertices. Isolated vertices
/// form singleton components.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut marked = vec![false; n];
    let mut component_of = vec![0; n];
    let mut visit_order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();
    let mut count = 0;

    for root in 0..n {
        if marked[root] {
            continue;
        }

        marked[root] = true;
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            component_of[u] = count;
            visit_order.push(u);
            for &v in view.neighbors(u) {
                if !marked[v] {
                    marked[v] = true;
                    queue.push_back(v);
                }
            }
        }

        count += 1;
    }

    ComponentResult {
        component_of,
        count,
        visit_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_components() {
        // Edges: 0-1, 2-3-4, 5 (isolated)
        let view = GraphView::from_edges(6, &[(0, 1), (2, 3), (3, 4)]);
        let result = connected_components(&view);

        assert_eq!(result.count, 3);
        assert!(result.connected(0, 1));
        assert!(result.connected(2, 4));
        assert!(!result.connected(1, 2));
        assert_eq!(result.component_of[5], 2);
        assert_eq!(result.sizes(), vec![2, 3, 1]);
    }

    #[test]
    fn test_components_agree_with_bfs_reachability() {
        let view = GraphView::from_edges(7, &[(0, 4), (4, 1), (2, 5), (5, 3), (3, 6)]);
        let result = connected_components(&view);

        for u in 0..view.node_count {
            let tree = crate::pathfinding::bfs_tree(&view, u).unwrap();
            for v in 0..view.node_count {
                assert_eq!(result.connected(u, v), tree.is_visited(v), "u={u} v={v}");
            }
        }
    }

    #[test]
    fn test_visit_order_covers_every_vertex_once() {
        let view = GraphView::from_edges(4, &[(3, 0), (1, 2)]);
        let result = connected_components(&view);

        assert_eq!(result.visit_order, vec![0, 3, 1, 2]);
    }
}
