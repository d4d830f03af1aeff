pub mod common;
pub mod community;
pub mod pathfinding;

pub use common::{GraphView, VertexIdx};
pub use community::{connected_components, ComponentResult};
pub use pathfinding::{bfs_tree, BfsTree};
