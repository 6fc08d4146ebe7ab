use std::fmt;

use rustc_hash::FxHashMap;

use crate::core::{
    marker::EdgeType,
    pair::VertexPair,
    set::ArraySet,
    EdgeRegistry, Identity,
};

use super::{
    default_edge_set_factory, link_touching, unlink_touching, EdgeSetFactory, IncidenceMap,
    Specifics,
};

/// Incidence storage with an auxiliary endpoint-pair index, giving expected
/// O(1) [`edges_between`](Specifics::edges_between) regardless of degree.
///
/// The index maps each endpoint pair with at least one live edge to the set
/// of such edges, in insertion order. Under an undirected marker the pair key
/// hashes and compares symmetrically, so both endpoint orders hit the same
/// entry. An entry whose last edge is removed is dropped from the index
/// entirely, keeping its size proportional to the number of connected pairs.
#[derive(Clone)]
pub struct FastSpecifics<V, E, Ty> {
    incidence: IncidenceMap<V, E, Ty>,
    pair_index: FxHashMap<VertexPair<V, Ty>, ArraySet<E>>,
}

impl<V, E, Ty> fmt::Debug for FastSpecifics<V, E, Ty>
where
    V: fmt::Debug,
    E: fmt::Debug,
    Ty: EdgeType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastSpecifics")
            .field("incidence", &self.incidence)
            .field("pair_index", &self.pair_index)
            .finish()
    }
}

impl<V: Identity, E: Identity, Ty: EdgeType> FastSpecifics<V, E, Ty> {
    #[cfg(test)]
    pub(crate) fn indexed_pair_count(&self) -> usize {
        self.pair_index.len()
    }
}

impl<V: Identity, E: Identity, Ty: EdgeType> Specifics<V, E, Ty> for FastSpecifics<V, E, Ty> {
    fn empty() -> Self {
        Self::with_edge_set_factory(default_edge_set_factory())
    }

    fn with_edge_set_factory(factory: EdgeSetFactory<V, E>) -> Self {
        Self {
            incidence: IncidenceMap::new(factory),
            pair_index: FxHashMap::default(),
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
        _registry: &EdgeRegistry<V, E>,
    ) -> Option<Vec<E>> {
        if !self.incidence.contains(source) || !self.incidence.contains(target) {
            return None;
        }

        let pair = VertexPair::new(source.clone(), target.clone());

        Some(
            self.pair_index
                .get(&pair)
                .map(|edges| edges.iter().cloned().collect())
                .unwrap_or_default(),
        )
    }

    fn edge_between(&self, source: &V, target: &V, _registry: &EdgeRegistry<V, E>) -> Option<E> {
        let pair = VertexPair::new(source.clone(), target.clone());
        self.pair_index.get(&pair)?.first().cloned()
    }

    fn add_edge_to_touching(&mut self, edge: &E, source: &V, target: &V) {
        link_touching(&mut self.incidence, edge, source, target);

        let pair = VertexPair::new(source.clone(), target.clone());
        self.pair_index
            .entry(pair)
            .or_insert_with(ArraySet::new)
            .insert(edge.clone());
    }

    fn remove_edge_from_touching(&mut self, edge: &E, source: &V, target: &V) {
        unlink_touching(&mut self.incidence, edge, source, target);

        let pair = VertexPair::new(source.clone(), target.clone());
        if let Some(edges) = self.pair_index.get_mut(&pair) {
            edges.remove(edge);
            if edges.is_empty() {
                self.pair_index.remove(&pair);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::marker::{Directed, Undirected};
    use crate::specifics::tests::{
        link, test_basic, test_differential, test_loops, test_parallel, unlink, Registry,
    };

    #[test]
    fn basic_directed() {
        test_basic::<Directed, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn basic_undirected() {
        test_basic::<Undirected, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn parallel_directed() {
        test_parallel::<Directed, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn parallel_undirected() {
        test_parallel::<Undirected, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn loops_directed() {
        test_loops::<Directed, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn loops_undirected() {
        test_loops::<Undirected, FastSpecifics<_, _, _>>();
    }

    #[test]
    fn matches_plain_directed() {
        test_differential::<Directed>();
    }

    #[test]
    fn matches_plain_undirected() {
        test_differential::<Undirected>();
    }

    #[test]
    fn index_entry_dropped_with_last_edge() {
        let mut specifics = FastSpecifics::<i32, i32, Undirected>::empty();
        let mut registry = Registry::new();

        for v in 0..3 {
            specifics.incidence_mut().add_vertex(v);
        }

        link(&mut specifics, &mut registry, 10, 0, 1);
        link(&mut specifics, &mut registry, 11, 1, 0);
        link(&mut specifics, &mut registry, 12, 1, 2);

        // Both endpoint orders of an undirected pair share one entry.
        assert_eq!(specifics.indexed_pair_count(), 2);

        unlink(&mut specifics, &mut registry, 10);
        assert_eq!(specifics.indexed_pair_count(), 2);

        unlink(&mut specifics, &mut registry, 11);
        assert_eq!(specifics.indexed_pair_count(), 1);
        assert_eq!(specifics.edges_between(&0, &1, &registry), Some(vec![]));
    }
}
