//! Per-subject statistics and path extraction
//!
//! A [`SubjectQuery`] is bound to one source subject and owns the BFS tree
//! computed for it. All statistics are derived from that tree on demand, so
//! no method depends on another having been called first.
//!
//! Because the graph is bipartite and the source is a subject, subjects sit
//! at even edge distances and groupings at odd ones. Halving an edge distance
//! gives the subject-to-subject hop count.

use super::CastGraph;
use crate::algo::{run_bfs, BfsTree};
use crate::graph::{GraphResult, VertexId, VertexKind};
use serde::{Deserialize, Serialize};

pub struct SubjectQuery<'g> {
    graph: &'g CastGraph,
    source: VertexId,
    tree: BfsTree,
}

/// Snapshot of a subject's statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub name: String,
    pub groupings: Vec<String>,
    pub connected_subjects: usize,
    pub average_distance: Option<f64>,
    pub maximum_distance: f64,
    pub furthest_subject: Option<String>,
}

impl<'g> SubjectQuery<'g> {
    pub(crate) fn new(graph: &'g CastGraph, source: VertexId) -> GraphResult<Self> {
        let tree = run_bfs(graph.view(), source)?;
        Ok(Self {
            graph,
            source,
            tree,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn name(&self) -> &'g str {
        self.graph
            .registry()
            .name_of(self.source, VertexKind::Subject)
            .unwrap_or_default()
    }

    pub fn tree(&self) -> &BfsTree {
        &self.tree
    }

    /// Groupings the source belongs to, in adjacency order
    pub fn groupings(&self) -> Vec<&'g str> {
        let registry = self.graph.registry();
        self.graph
            .neighbors(self.source)
            .filter_map(|g| registry.name_of(g, VertexKind::Grouping).ok())
            .collect()
    }

    /// Reachable subjects other than the source with their hop counts, in
    /// discovery order
    fn reachable_subjects(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        let registry = self.graph.registry();
        self.tree
            .order
            .iter()
            .map(|&idx| VertexId::new(idx))
            .filter(move |&v| v != self.source && registry.is_subject(v))
            .map(move |v| (v, self.tree.distance[v.as_usize()] / 2))
    }

    /// Reachable subjects, the source included
    pub fn connected_subject_count(&self) -> usize {
        1 + self.reachable_subjects().count()
    }

    pub fn average_distance(&self) -> Option<f64> {
        let (sum, count) = self
            .reachable_subjects()
            .fold((0usize, 0usize), |(sum, count), (_, hops)| (sum + hops, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum as f64 / count as f64)
        }
    }

    /// First subject at the greatest hop count, in discovery order
    fn furthest(&self) -> Option<(VertexId, usize)> {
        self.reachable_subjects()
            .fold(None, |best: Option<(VertexId, usize)>, (v, hops)| match best {
                Some((_, max)) if hops <= max => best,
                _ => Some((v, hops)),
            })
    }

    /// Greatest subject-to-subject hop count, 0 when no peer is reachable
    pub fn maximum_distance(&self) -> f64 {
        self.furthest().map(|(_, hops)| hops as f64).unwrap_or(0.0)
    }

    pub fn furthest_subject(&self) -> Option<&'g str> {
        let (v, _) = self.furthest()?;
        self.graph.registry().name_of(v, VertexKind::Subject).ok()
    }

    /// Resolve `target` and return its vertex if it shares the source's component
    fn reachable_target(&self, target: &str) -> GraphResult<Option<VertexId>> {
        let id = self.graph.registry().subject_id(target)?;
        if self.graph.components_labels().connected(self.source, id) {
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    fn vertex_path(&self, target: &str) -> GraphResult<Option<Vec<usize>>> {
        Ok(self
            .reachable_target(target)?
            .and_then(|id| self.tree.path_to(id.as_usize())))
    }

    /// Subject names from the source to `target`, both ends included.
    /// `None` when `target` is in another component.
    pub fn subject_path(&self, target: &str) -> GraphResult<Option<Vec<&'g str>>> {
        let Some(path) = self.vertex_path(target)? else {
            return Ok(None);
        };
        debug_assert!(path.len() % 2 == 1);

        let registry = self.graph.registry();
        path.into_iter()
            .step_by(2)
            .map(|idx| registry.name_of(VertexId::new(idx), VertexKind::Subject))
            .collect::<GraphResult<Vec<_>>>()
            .map(Some)
    }

    /// Alternating subject, grouping, subject, ... names from the source to
    /// `target`. `None` when `target` is in another component.
    pub fn grouping_path(&self, target: &str) -> GraphResult<Option<Vec<&'g str>>> {
        let Some(path) = self.vertex_path(target)? else {
            return Ok(None);
        };

        let registry = self.graph.registry();
        path.into_iter()
            .map(|idx| registry.any_name_of(VertexId::new(idx)))
            .collect::<GraphResult<Vec<_>>>()
            .map(Some)
    }

    /// Subject-to-subject hops to `target`, read straight from the distance
    /// array. `f64::INFINITY` when `target` is in another component.
    pub fn path_length(&self, target: &str) -> GraphResult<f64> {
        let hops = self
            .reachable_target(target)?
            .and_then(|id| self.tree.distance_to(id.as_usize()))
            .map(|d| (d / 2) as f64);
        Ok(hops.unwrap_or(f64::INFINITY))
    }

    pub fn summary(&self) -> SubjectSummary {
        SubjectSummary {
            name: self.name().to_string(),
            groupings: self.groupings().into_iter().map(str::to_string).collect(),
            connected_subjects: self.connected_subject_count(),
            average_distance: self.average_distance(),
            maximum_distance: self.maximum_distance(),
            furthest_subject: self.furthest_subject().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::CastGraphBuilder;
    use crate::query::CastGraph;

    // X - M1 - Y - M2 - Z, plus W in M3 with Y, and a solo grouping for Q
    fn sample() -> CastGraph {
        let mut builder = CastGraphBuilder::new();
        builder.add_record("M1", ["X", "Y"]).unwrap();
        builder.add_record("M2", ["Y", "Z"]).unwrap();
        builder.add_record("M3", ["Y", "W"]).unwrap();
        builder.add_record("Solo", ["Q"]).unwrap();
        builder.build()
    }

    #[test]
    fn test_statistics_from_one_tree() {
        let graph = sample();
        let query = graph.subject_details("X").unwrap();

        assert_eq!(query.name(), "X");
        assert_eq!(query.groupings(), vec!["M1"]);
        assert_eq!(query.connected_subject_count(), 4);
        // Y at 1, Z at 2, W at 2
        assert_eq!(query.average_distance(), Some(5.0 / 3.0));
        assert_eq!(query.maximum_distance(), 2.0);
        // Z is discovered before W
        assert_eq!(query.furthest_subject(), Some("Z"));
    }

    #[test]
    fn test_path_length_needs_no_prior_path_walk() {
        let graph = sample();
        let query = graph.subject_details("X").unwrap();

        assert_eq!(query.path_length("W").unwrap(), 2.0);
        assert_eq!(query.path_length("X").unwrap(), 0.0);
        assert_eq!(query.path_length("Q").unwrap(), f64::INFINITY);

        assert_eq!(query.subject_path("W").unwrap(), Some(vec!["X", "Y", "W"]));
        assert_eq!(query.path_length("W").unwrap(), 2.0);
    }

    #[test]
    fn test_grouping_path_alternates() {
        let graph = sample();
        let query = graph.subject_details("X").unwrap();

        assert_eq!(
            query.grouping_path("Z").unwrap(),
            Some(vec!["X", "M1", "Y", "M2", "Z"])
        );
        assert_eq!(query.grouping_path("X").unwrap(), Some(vec!["X"]));
        assert_eq!(query.grouping_path("Q").unwrap(), None);
    }

    #[test]
    fn test_isolated_subject() {
        let graph = sample();
        let query = graph.subject_details("Q").unwrap();

        assert_eq!(query.connected_subject_count(), 1);
        assert_eq!(query.average_distance(), None);
        assert_eq!(query.maximum_distance(), 0.0);
        assert_eq!(query.furthest_subject(), None);
        assert_eq!(query.subject_path("X").unwrap(), None);
    }

    #[test]
    fn test_summary_snapshot() {
        let graph = sample();
        let summary = graph.subject_details("Y").unwrap().summary();

        assert_eq!(summary.name, "Y");
        assert_eq!(summary.groupings, vec!["M1", "M2", "M3"]);
        assert_eq!(summary.connected_subjects, 4);
        assert_eq!(summary.average_distance, Some(1.0));
        assert_eq!(summary.maximum_distance, 1.0);
        assert_eq!(summary.furthest_subject.as_deref(), Some("X"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["connected_subjects"], 4);
    }
}
