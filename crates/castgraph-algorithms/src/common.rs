//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

/// Dense vertex index (0..N)
pub type VertexIdx = usize;

/// A dense, integer-indexed view of an undirected graph in Compressed Sparse Row (CSR) format.
///
/// Every undirected edge is stored twice, once per endpoint. Neighbor order per vertex
/// is the insertion order of the adjacency lists the view was built from, so traversals
/// over the view are deterministic.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphView {
    /// Number of vertices
    pub node_count: usize,
    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<VertexIdx>,
}

impl GraphView {
    /// Get the degree of a vertex (parallel edges counted separately)
    pub fn degree(&self, idx: VertexIdx) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a vertex
    pub fn neighbors(&self, idx: VertexIdx) -> &[VertexIdx] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Create a GraphView from per-vertex adjacency lists.
    ///
    /// The lists must already be symmetric: if `v` appears in `adjacency[u]`,
    /// `u` appears in `adjacency[v]`.
    pub fn from_adjacency_list<I>(adjacency: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = VertexIdx>,
    {
        let mut offsets = vec![0];
        let mut targets = Vec::new();

        for neighbors in adjacency {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count: offsets.len() - 1,
            offsets,
            targets,
        }
    }

    /// Build a GraphView from an undirected edge list over `node_count` vertices.
    pub fn from_edges(node_count: usize, edges: &[(VertexIdx, VertexIdx)]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        Self::from_adjacency_list(adjacency)
    }
}
