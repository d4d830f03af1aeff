//! Bidirectional name <-> vertex id tables
//!
//! Subjects and groupings share one dense id space. Both kinds are
//! deduplicated by name, so re-registering a name always yields the id it
//! was first given.

use super::store::{GraphError, GraphResult};
use super::types::{VertexId, VertexKind};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type NameIndex = IndexMap<String, VertexId, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct IdentifierRegistry {
    subjects: NameIndex,
    groupings: NameIndex,
    /// id -> (kind, position in that kind's name index)
    vertices: Vec<(VertexKind, usize)>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subject, returning the existing id if the name is known
    pub fn register_subject(&mut self, name: &str) -> VertexId {
        Self::register(&mut self.subjects, &mut self.vertices, VertexKind::Subject, name)
    }

    /// Register a grouping, returning the existing id if the name is known
    pub fn register_grouping(&mut self, name: &str) -> VertexId {
        Self::register(&mut self.groupings, &mut self.vertices, VertexKind::Grouping, name)
    }

    fn register(
        index: &mut NameIndex,
        vertices: &mut Vec<(VertexKind, usize)>,
        kind: VertexKind,
        name: &str,
    ) -> VertexId {
        if let Some(&id) = index.get(name) {
            return id;
        }

        let id = VertexId::new(vertices.len());
        let (position, _) = index.insert_full(name.to_string(), id);
        vertices.push((kind, position));
        id
    }

    pub fn subject_id(&self, name: &str) -> GraphResult<VertexId> {
        self.subjects
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::SubjectNotFound(name.to_string()))
    }

    pub fn grouping_id(&self, name: &str) -> GraphResult<VertexId> {
        self.groupings
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::GroupingNotFound(name.to_string()))
    }

    pub fn kind_of(&self, id: VertexId) -> Option<VertexKind> {
        self.vertices.get(id.as_usize()).map(|&(kind, _)| kind)
    }

    pub fn is_subject(&self, id: VertexId) -> bool {
        self.kind_of(id) == Some(VertexKind::Subject)
    }

    /// Resolve an id to its name, checking that it has the expected kind
    pub fn name_of(&self, id: VertexId, kind: VertexKind) -> GraphResult<&str> {
        let &(actual, position) = self
            .vertices
            .get(id.as_usize())
            .ok_or(GraphError::VertexNotFound(id))?;

        if actual != kind {
            return Err(GraphError::KindMismatch { vertex: id, expected: kind });
        }

        self.name_at(actual, position).ok_or(GraphError::VertexNotFound(id))
    }

    /// Resolve an id to its name whatever its kind
    pub fn any_name_of(&self, id: VertexId) -> GraphResult<&str> {
        let &(kind, position) = self
            .vertices
            .get(id.as_usize())
            .ok_or(GraphError::VertexNotFound(id))?;
        self.name_at(kind, position).ok_or(GraphError::VertexNotFound(id))
    }

    fn name_at(&self, kind: VertexKind, position: usize) -> Option<&str> {
        let index = match kind {
            VertexKind::Subject => &self.subjects,
            VertexKind::Grouping => &self.groupings,
        };
        index.get_index(position).map(|(name, _)| name.as_str())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn grouping_count(&self) -> usize {
        self.groupings.len()
    }

    /// Subject names in registration order
    pub fn subjects(&self) -> impl Iterator<Item = &str> + '_ {
        self.subjects.keys().map(String::as_str)
    }

    /// Grouping names in registration order
    pub fn groupings(&self) -> impl Iterator<Item = &str> + '_ {
        self.groupings.keys().map(String::as_str)
    }
}
