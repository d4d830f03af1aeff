//! Core type definitions for the cast graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex identifier, shared by subjects and groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        VertexId(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        VertexId(id)
    }
}

/// Which side of the bipartite graph a vertex lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    /// An actor
    Subject,
    /// A movie
    Grouping,
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKind::Subject => write!(f, "subject"),
            VertexKind::Grouping => write!(f, "grouping"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new(42);
        assert_eq!(id.as_usize(), 42);
        assert_eq!(format!("{}", id), "VertexId(42)");

        let id2: VertexId = 100.into();
        assert_eq!(id2.as_usize(), 100);
    }

    #[test]
    fn test_vertex_kind_display() {
        assert_eq!(VertexKind::Subject.to_string(), "subject");
        assert_eq!(VertexKind::Grouping.to_string(), "grouping");
    }
}
