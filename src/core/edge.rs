use indexmap::IndexMap;

use super::{FxBuildHasher, Identity};
use crate::weight::DEFAULT_EDGE_WEIGHT;

/// Callback that mints a fresh edge identity for the given endpoints. Called
/// at most once per [`add_edge`](crate::graph::Graph::add_edge) call. The
/// graph detects and rejects a returned identity that is already registered.
pub trait EdgeFactory<V, E> {
    fn create_edge(&self, source: &V, target: &V) -> E;
}

impl<V, E, F> EdgeFactory<V, E> for F
where
    F: Fn(&V, &V) -> E,
{
    fn create_edge(&self, source: &V, target: &V) -> E {
        (self)(source, target)
    }
}

/// Internal binding of an edge identity to its endpoints and, for weighted
/// graphs, its weight. `weight: None` marks a record of an unweighted graph:
/// it reports [`DEFAULT_EDGE_WEIGHT`] and rejects writes.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<V> {
    source: V,
    target: V,
    weight: Option<f64>,
}

impl<V> EdgeRecord<V> {
    pub(crate) fn new(source: V, target: V, weighted: bool) -> Self {
        Self {
            source,
            target,
            weight: weighted.then_some(DEFAULT_EDGE_WEIGHT),
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    pub(crate) fn set_weight(&mut self, weight: f64) -> bool {
        match &mut self.weight {
            Some(slot) => {
                *slot = weight;
                true
            }
            None => false,
        }
    }
}

impl<V: Eq> EdgeRecord<V> {
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Insertion-ordered mapping from edge identity to its record. Removal shifts
/// entries so iteration order stays insertion order.
#[derive(Debug, Clone)]
pub struct EdgeRegistry<V, E> {
    map: IndexMap<E, EdgeRecord<V>, FxBuildHasher>,
}

impl<V: Identity, E: Identity> EdgeRegistry<V, E> {
    pub(crate) fn new() -> Self {
        Self {
            map: IndexMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, edge: &E) -> bool {
        self.map.contains_key(edge)
    }

    pub fn record(&self, edge: &E) -> Option<&EdgeRecord<V>> {
        self.map.get(edge)
    }

    pub(crate) fn record_mut(&mut self, edge: &E) -> Option<&mut EdgeRecord<V>> {
        self.map.get_mut(edge)
    }

    pub(crate) fn insert(&mut self, edge: E, record: EdgeRecord<V>) {
        self.map.insert(edge, record);
    }

    pub(crate) fn remove(&mut self, edge: &E) -> Option<EdgeRecord<V>> {
        self.map.shift_remove(edge)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, E, EdgeRecord<V>> {
        self.map.iter()
    }

    pub fn edges(&self) -> indexmap::map::Keys<'_, E, EdgeRecord<V>> {
        self.map.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keeps_insertion_order_across_removal() {
        let mut registry = EdgeRegistry::new();

        for e in 0..5 {
            registry.insert(e, EdgeRecord::new(e, e + 1, false));
        }

        registry.remove(&1);

        assert_eq!(registry.edges().copied().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
    }

    #[test]
    fn unweighted_record_reports_default_and_rejects_writes() {
        let mut record = EdgeRecord::new("u", "v", false);

        assert_eq!(record.weight(), DEFAULT_EDGE_WEIGHT);
        assert!(!record.set_weight(3.0));
        assert_eq!(record.weight(), DEFAULT_EDGE_WEIGHT);
    }

    #[test]
    fn weighted_record_stores_writes() {
        let mut record = EdgeRecord::new("u", "v", true);

        assert_eq!(record.weight(), DEFAULT_EDGE_WEIGHT);
        assert!(record.set_weight(2.5));
        assert_eq!(record.weight(), 2.5);
    }
}
