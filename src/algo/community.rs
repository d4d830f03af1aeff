//! Component labeling
//!
//! Runs the connected-components sweep once over the frozen view and picks,
//! for every component, the first subject the sweep reached as its
//! representative.

use crate::graph::{IdentifierRegistry, VertexId};
use castgraph_algorithms::{connected_components, ComponentResult, GraphView};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ComponentLabels {
    result: ComponentResult,
    /// Component ID -> representative subject, `None` for subject-free components
    representatives: Vec<Option<VertexId>>,
}

impl ComponentLabels {
    pub fn label(view: &GraphView, registry: &IdentifierRegistry) -> Self {
        let result = connected_components(view);
        let mut representatives = vec![None; result.count];

        for &idx in &result.visit_order {
            let id = VertexId::new(idx);
            let slot = &mut representatives[result.component_of[idx]];
            if slot.is_none() && registry.is_subject(id) {
                *slot = Some(id);
            }
        }

        debug!(
            "Labeled {} components over {} vertices",
            result.count, view.node_count
        );

        Self {
            result,
            representatives,
        }
    }

    pub fn component_id(&self, v: VertexId) -> Option<usize> {
        self.result.component_of.get(v.as_usize()).copied()
    }

    pub fn component_count(&self) -> usize {
        self.result.count
    }

    pub fn connected(&self, u: VertexId, v: VertexId) -> bool {
        match (self.component_id(u), self.component_id(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Representative subjects in component-id order, skipping components
    /// without any subject
    pub fn representatives(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.representatives.iter().flatten().copied()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.result.sizes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representatives_skip_subject_free_components() {
        let mut registry = IdentifierRegistry::new();
        let m1 = registry.register_grouping("M1"); // 0
        let x = registry.register_subject("X"); // 1
        let _lonely = registry.register_grouping("Lonely"); // 2
        let y = registry.register_subject("Y"); // 3

        let view = GraphView::from_edges(4, &[(m1.0, x.0), (m1.0, y.0)]);
        let labels = ComponentLabels::label(&view, &registry);

        assert_eq!(labels.component_count(), 2);
        assert_eq!(labels.representatives().collect::<Vec<_>>(), vec![x]);
        assert!(labels.connected(x, y));
        assert!(!labels.connected(x, VertexId(2)));
        assert!(!labels.connected(x, VertexId(42)));
        assert_eq!(labels.sizes(), vec![3, 1]);
    }
}
