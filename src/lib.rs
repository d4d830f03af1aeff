//! Castgraph
//!
//! Connectivity and distance queries over a bipartite graph of subjects
//! (actors) and groupings (movies). A subject is adjacent to every grouping it
//! belongs to, and never to another subject directly.
//!
//! # Architecture
//!
//! - [`graph`]: identifier registry, load-phase adjacency lists and the builder
//! - [`algo`]: adapter onto the `castgraph-algorithms` CSR view (BFS trees,
//!   connected components)
//! - [`query`]: the immutable [`CastGraph`] and per-subject statistics
//! - [`loader`], [`config`], [`survey`]: ingestion, settings and the budgeted
//!   query run
//!
//! ## Example Usage
//!
//! ```rust
//! use castgraph::graph::CastGraphBuilder;
//!
//! let mut builder = CastGraphBuilder::new();
//! builder.add_record("M1", ["X", "Y"]).unwrap();
//! builder.add_record("M2", ["Y", "Z"]).unwrap();
//! let graph = builder.build();
//!
//! assert_eq!(graph.component_count(), 1);
//! assert_eq!(graph.subject_path("X", "Z").unwrap(), Some(vec!["X", "Y", "Z"]));
//! assert_eq!(graph.path_length("X", "Z").unwrap(), 2.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod loader;
pub mod query;
pub mod survey;

// Re-export main types for convenience
pub use graph::{
    BipartiteGraph, CastGraphBuilder, GraphError, GraphResult, IdentifierRegistry, VertexId,
    VertexKind,
};

pub use query::{CastGraph, SubjectQuery, SubjectSummary};

pub use config::{CastGraphConfig, ConfigError, ConfigResult, LoaderConfig, SurveyConfig};

pub use loader::{load_from_path, load_from_reader, LoadError, LoadResult};

pub use survey::{run_survey, SurveyReport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
