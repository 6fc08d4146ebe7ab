//! Incidence storage strategies.
//!
//! A _specifics_ realizes the orientation-specific incidence semantics of a
//! graph and is the only seam the graph core dispatches through. Two
//! strategies are available, each usable with both orientation markers:
//!
//! * [`PlainSpecifics`] — incidence only; endpoint lookup scans the incidence
//!   set of the source vertex, O(deg).
//! * [`FastSpecifics`] — adds an endpoint-pair index for expected O(1) edge
//!   lookup at the cost of extra memory.

pub mod fast;
pub mod plain;

#[doc(inline)]
pub use self::{fast::FastSpecifics, plain::PlainSpecifics};

use std::{fmt, marker::PhantomData, sync::Arc};

use indexmap::IndexMap;

use crate::core::{
    marker::{Direction, EdgeType},
    set::ArraySet,
    EdgeRegistry, FxBuildHasher, Identity,
};

/// Produces the incidence set of a newly added vertex. Lets callers pre-size
/// (or pre-promote) per-vertex sets; applies to vertices added after the
/// factory is installed.
pub type EdgeSetFactory<V, E> = Arc<dyn Fn(&V) -> ArraySet<E>>;

pub(crate) fn default_edge_set_factory<V, E>() -> EdgeSetFactory<V, E> {
    Arc::new(|_| ArraySet::new())
}

/// Per-vertex incidence storage: outgoing edges in slot 0, incoming in
/// slot 1. Undirected graphs use slot 0 only.
#[derive(Debug, Clone)]
pub struct EdgeContainer<E> {
    edges: [ArraySet<E>; 2],
}

impl<E> EdgeContainer<E> {
    fn new(outgoing: ArraySet<E>, incoming: ArraySet<E>) -> Self {
        Self {
            edges: [outgoing, incoming],
        }
    }

    pub fn set(&self, dir: Direction) -> &ArraySet<E> {
        &self.edges[dir.index()]
    }
}

impl<E: Identity> EdgeContainer<E> {
    fn add(&mut self, dir: Direction, edge: E) {
        self.edges[dir.index()].insert(edge);
    }

    fn remove(&mut self, dir: Direction, edge: &E) -> bool {
        self.edges[dir.index()].remove(edge)
    }
}

/// Insertion-ordered map from vertex identity to its incidence container.
/// The key set is the graph's vertex set.
#[derive(Clone)]
pub struct IncidenceMap<V, E, Ty> {
    map: IndexMap<V, EdgeContainer<E>, FxBuildHasher>,
    edge_set_factory: EdgeSetFactory<V, E>,
    ty: PhantomData<Ty>,
}

impl<V: Identity, E: Identity, Ty: EdgeType> IncidenceMap<V, E, Ty> {
    pub(crate) fn new(edge_set_factory: EdgeSetFactory<V, E>) -> Self {
        Self {
            map: IndexMap::default(),
            edge_set_factory,
            ty: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.map.contains_key(vertex)
    }

    pub fn vertices(&self) -> indexmap::map::Keys<'_, V, EdgeContainer<E>> {
        self.map.keys()
    }

    pub fn container(&self, vertex: &V) -> Option<&EdgeContainer<E>> {
        self.map.get(vertex)
    }

    pub(crate) fn container_mut(&mut self, vertex: &V) -> Option<&mut EdgeContainer<E>> {
        self.map.get_mut(vertex)
    }

    pub(crate) fn add_vertex(&mut self, vertex: V) -> bool {
        if self.map.contains_key(&vertex) {
            return false;
        }

        let outgoing = (self.edge_set_factory)(&vertex);
        let incoming = if Ty::is_directed() {
            (self.edge_set_factory)(&vertex)
        } else {
            ArraySet::new()
        };

        self.map.insert(vertex, EdgeContainer::new(outgoing, incoming));
        true
    }

    pub(crate) fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.map.shift_remove(vertex).is_some()
    }

    pub(crate) fn edge_set_factory(&self) -> &EdgeSetFactory<V, E> {
        &self.edge_set_factory
    }

    pub(crate) fn set_edge_set_factory(&mut self, factory: EdgeSetFactory<V, E>) {
        self.edge_set_factory = factory;
    }
}

impl<V, E, Ty> fmt::Debug for IncidenceMap<V, E, Ty>
where
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidenceMap").field("map", &self.map).finish()
    }
}

/// The incidence-indexing policy a [`Graph`](crate::graph::Graph) dispatches
/// to for every incidence-sensitive operation.
///
/// Implementations own the vertex set and per-vertex incidence, and keep any
/// auxiliary index of their own consistent with it. Edges passed to the
/// `touching` operations are already validated and registered by the graph
/// core; both endpoints are guaranteed present.
pub trait Specifics<V: Identity, E: Identity, Ty: EdgeType> {
    fn empty() -> Self
    where
        Self: Sized;

    fn with_edge_set_factory(factory: EdgeSetFactory<V, E>) -> Self
    where
        Self: Sized;

    fn incidence(&self) -> &IncidenceMap<V, E, Ty>;

    fn incidence_mut(&mut self) -> &mut IncidenceMap<V, E, Ty>;

    /// All edges between `source` and `target` in insertion order,
    /// direction-aware iff the graph is directed. `None` if either vertex is
    /// absent; an empty vector if both exist but no such edge does.
    fn edges_between(
        &self,
        source: &V,
        target: &V,
        registry: &EdgeRegistry<V, E>,
    ) -> Option<Vec<E>>;

    /// The earliest-inserted edge between `source` and `target`, if any.
    fn edge_between(&self, source: &V, target: &V, registry: &EdgeRegistry<V, E>) -> Option<E>;

    fn add_edge_to_touching(&mut self, edge: &E, source: &V, target: &V);

    fn remove_edge_from_touching(&mut self, edge: &E, source: &V, target: &V);
}

// Incidence updates shared by both strategies. A directed edge lands in
// outgoing(source) and incoming(target); an undirected one in the single
// incident set of both endpoints, with a self-loop stored exactly once.
pub(crate) fn link_touching<V, E, Ty>(
    incidence: &mut IncidenceMap<V, E, Ty>,
    edge: &E,
    source: &V,
    target: &V,
) where
    V: Identity,
    E: Identity,
    Ty: EdgeType,
{
    incidence
        .container_mut(source)
        .expect("vertex does not exist")
        .add(Direction::Outgoing, edge.clone());

    if Ty::is_directed() {
        incidence
            .container_mut(target)
            .expect("vertex does not exist")
            .add(Direction::Incoming, edge.clone());
    } else if source != target {
        incidence
            .container_mut(target)
            .expect("vertex does not exist")
            .add(Direction::Outgoing, edge.clone());
    }
}

pub(crate) fn unlink_touching<V, E, Ty>(
    incidence: &mut IncidenceMap<V, E, Ty>,
    edge: &E,
    source: &V,
    target: &V,
) where
    V: Identity,
    E: Identity,
    Ty: EdgeType,
{
    incidence
        .container_mut(source)
        .expect("vertex does not exist")
        .remove(Direction::Outgoing, edge);

    if Ty::is_directed() {
        incidence
            .container_mut(target)
            .expect("vertex does not exist")
            .remove(Direction::Incoming, edge);
    } else if source != target {
        incidence
            .container_mut(target)
            .expect("vertex does not exist")
            .remove(Direction::Outgoing, edge);
    }
}

// Scan of the source vertex's outgoing/incident set, shared by the plain
// strategy and used as the reference behavior in tests.
pub(crate) fn scan_edges_between<'a, V, E, Ty>(
    incidence: &'a IncidenceMap<V, E, Ty>,
    source: &'a V,
    target: &'a V,
    registry: &'a EdgeRegistry<V, E>,
) -> Option<impl Iterator<Item = &'a E> + 'a>
where
    V: Identity,
    E: Identity,
    Ty: EdgeType,
{
    if !incidence.contains(source) || !incidence.contains(target) {
        return None;
    }

    let container = incidence.container(source).expect("vertex does not exist");

    Some(
        container
            .set(Direction::Outgoing)
            .iter()
            .filter(move |edge| {
                let record = registry.record(edge).expect("edge is not registered");

                let straight = record.source() == source && record.target() == target;

                if Ty::is_directed() {
                    straight
                } else {
                    straight || (record.source() == target && record.target() == source)
                }
            }),
    )
}
