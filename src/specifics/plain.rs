use crate::core::{marker::EdgeType, EdgeRegistry, Identity};

use super::{
    default_edge_set_factory, link_touching, scan_edges_between, unlink_touching, EdgeSetFactory,
    IncidenceMap, Specifics,
};

/// Incidence-only storage. Endpoint lookup scans the incidence set of the
/// source vertex, so [`edges_between`](Specifics::edges_between) is O(deg);
/// in exchange there is no auxiliary index to maintain.
#[derive(Debug, Clone)]
pub struct PlainSpecifics<V, E, Ty> {
    incidence: IncidenceMap<V, E, Ty>,
}

impl<V: Identity, E: Identity, Ty: EdgeType> Specifics<V, E, Ty> for PlainSpecifics<V, E, Ty> {
    fn empty() -> Self {
        Self::with_edge_set_factory(default_edge_set_factory())
    }

    fn with_edge_set_factory(factory: EdgeSetFactory<V, E>) -> Self {
        Self {
            incidence: IncidenceMap::new(factory),
        }
    }

    fn incidence(&self) -> &IncidenceMap<V, E, Ty> {
        &self.incidence
    }

    fn incidence_mut(&mut self) -> &mut IncidenceMap<V, E, Ty> {
        &mut self.incidence
    }

    fn edges_between(
        &self,
        source: &V,
        target: &V,
        registry: &EdgeRegistry<V, E>,
    ) -> Option<Vec<E>> {
        scan_edges_between(&self.incidence, source, target, registry)
            .map(|edges| edges.cloned().collect())
    }

    fn edge_between(&self, source: &V, target: &V, registry: &EdgeRegistry<V, E>) -> Option<E> {
        scan_edges_between(&self.incidence, source, target, registry)?
            .next()
            .cloned()
    }

    fn add_edge_to_touching(&mut self, edge: &E, source: &V, target: &V) {
        link_touching(&mut self.incidence, edge, source, target);
    }

    fn remove_edge_from_touching(&mut self, edge: &E, source: &V, target: &V) {
        unlink_touching(&mut self.incidence, edge, source, target);
    }
}
