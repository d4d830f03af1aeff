//! Pathfinding algorithms
//!
//! Single-source breadth-first search producing a full shortest-path tree.

use super::common::{GraphView, VertexIdx};
use std::collections::VecDeque;

/// Shortest-path tree (in edge count) rooted at a single source.
///
/// Produced once by [`bfs_tree`] and never mutated afterwards. Vertices the
/// search did not reach have `visited == false`, no predecessor and a distance
/// of zero, so always check [`BfsTree::is_visited`] before trusting a distance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfsTree {
    pub source: VertexIdx,
    pub visited: Vec<bool>,
    pub predecessor: Vec<Option<VertexIdx>>,
    pub distance: Vec<usize>,
    /// Discovery order, source first
    pub order: Vec<VertexIdx>,
}

impl BfsTree {
    pub fn is_visited(&self, idx: VertexIdx) -> bool {
        self.visited.get(idx).copied().unwrap_or(false)
    }

    /// Edge-count distance from the source, `None` if unreached
    pub fn distance_to(&self, idx: VertexIdx) -> Option<usize> {
        if self.is_visited(idx) {
            Some(self.distance[idx])
        } else {
            None
        }
    }

    /// Number of vertices reached, source included
    pub fn reached_count(&self) -> usize {
        self.order.len()
    }

    /// Reconstruct the tree path from the source to `target`, source first.
    pub fn path_to(&self, target: VertexIdx) -> Option<Vec<VertexIdx>> {
        if !self.is_visited(target) {
            return None;
        }

        let mut path = Vec::with_capacity(self.distance[target] + 1);
        let mut curr = Some(target);
        while let Some(idx) = curr {
            path.push(idx);
            curr = self.predecessor[idx];
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-First Search (Unweighted Shortest-Path Tree)
///
/// Runs to completion over every vertex reachable from `source`. Returns `None`
/// if `source` is out of range for the view.
pub fn bfs_tree(view: &GraphView, source: VertexIdx) -> Option<BfsTree> {
    if source >= view.node_count {
        return None;
    }

    let n = view.node_count;
    let mut visited = vec![false; n];
    let mut predecessor = vec![None; n];
    let mut distance = vec![0usize; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[source] = true;
    order.push(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in view.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                predecessor[next] = Some(current);
                distance[next] = distance[current] + 1;
                order.push(next);
                queue.push_back(next);
            }
        }
    }

    Some(BfsTree {
        source,
        visited,
        predecessor,
        distance,
        order,
    })
}
