//! The graph container.
//!
//! [`Graph`] owns the edge registry and a storage strategy chosen at
//! construction, and dispatches every incidence-sensitive operation to the
//! strategy. Orientation is a type parameter, so directed-only and
//! undirected-only queries simply do not exist on the other variant.

use std::{fmt, marker::PhantomData, sync::Arc};

use crate::core::{
    marker::{Directed, Direction, EdgeType, Undirected},
    set::ArraySet,
    AddEdgeError, AddEdgeErrorKind, EdgeFactory, EdgeRecord, EdgeRegistry, EdgeWeightError,
    Identity,
};
use crate::specifics::{EdgeContainer, EdgeSetFactory, FastSpecifics, Specifics};

/// A graph whose vertex and edge identities are supplied by the caller.
///
/// Self-loop and parallel-edge permissions are fixed at construction, as is
/// whether edges carry a mutable weight. Vertex and edge iteration order is
/// insertion order and survives unrelated removals.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
///
/// use skein::graph::UnGraph;
///
/// let counter = Cell::new(0u32);
/// let mut graph: UnGraph<&str, u32> = UnGraph::new(
///     move |_: &&str, _: &&str| {
///         let id = counter.get();
///         counter.set(id + 1);
///         id
///     },
///     true,
///     true,
/// );
///
/// graph.add_vertex("a");
/// graph.add_vertex("b");
///
/// let e = graph.add_edge(&"a", &"b").unwrap().unwrap();
/// assert!(graph.contains_edge_between(&"b", &"a"));
/// assert_eq!(graph.endpoints(&e), Some((&"a", &"b")));
/// ```
pub struct Graph<V, E, Ty: EdgeType, S = FastSpecifics<V, E, Ty>> {
    registry: EdgeRegistry<V, E>,
    specifics: S,
    edge_factory: Arc<dyn EdgeFactory<V, E>>,
    allow_multiple_edges: bool,
    allow_loops: bool,
    weighted: bool,
    ty: PhantomData<Ty>,
}

/// Directed graph with the default fast strategy.
pub type DiGraph<V, E, S = FastSpecifics<V, E, Directed>> = Graph<V, E, Directed, S>;

/// Undirected graph with the default fast strategy.
pub type UnGraph<V, E, S = FastSpecifics<V, E, Undirected>> = Graph<V, E, Undirected, S>;

impl<V: Identity, E: Identity, Ty: EdgeType> Graph<V, E, Ty> {
    /// Unweighted graph over the fast storage strategy.
    pub fn new<F>(edge_factory: F, allow_multiple_edges: bool, allow_loops: bool) -> Self
    where
        F: EdgeFactory<V, E> + 'static,
    {
        Self::with_specifics(
            edge_factory,
            allow_multiple_edges,
            allow_loops,
            false,
            FastSpecifics::empty(),
        )
    }

    /// Weighted graph over the fast storage strategy. Edges added to it carry
    /// a mutable weight initialized to
    /// [`DEFAULT_EDGE_WEIGHT`](crate::weight::DEFAULT_EDGE_WEIGHT).
    pub fn new_weighted<F>(edge_factory: F, allow_multiple_edges: bool, allow_loops: bool) -> Self
    where
        F: EdgeFactory<V, E> + 'static,
    {
        Self::with_specifics(
            edge_factory,
            allow_multiple_edges,
            allow_loops,
            true,
            FastSpecifics::empty(),
        )
    }
}

impl<V: Identity, E: Identity, Ty: EdgeType, S: Specifics<V, E, Ty>> Graph<V, E, Ty, S> {
    /// Graph over an explicitly chosen storage strategy.
    pub fn with_specifics<F>(
        edge_factory: F,
        allow_multiple_edges: bool,
        allow_loops: bool,
        weighted: bool,
        specifics: S,
    ) -> Self
    where
        F: EdgeFactory<V, E> + 'static,
    {
        Self {
            registry: EdgeRegistry::new(),
            specifics,
            edge_factory: Arc::new(edge_factory),
            allow_multiple_edges,
            allow_loops,
            weighted,
            ty: PhantomData,
        }
    }

    /// Installs the factory producing per-vertex incidence sets. Applies to
    /// vertices added afterwards.
    #[must_use]
    pub fn with_edge_set_factory(mut self, factory: EdgeSetFactory<V, E>) -> Self {
        self.specifics.incidence_mut().set_edge_set_factory(factory);
        self
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_allowing_loops(&self) -> bool {
        self.allow_loops
    }

    pub fn is_allowing_multiple_edges(&self) -> bool {
        self.allow_multiple_edges
    }

    /// Inserts a vertex. `false` if it is already present; the graph is
    /// unchanged in that case.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.specifics.incidence_mut().add_vertex(vertex)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.specifics.incidence().contains(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.specifics.incidence().len()
    }

    /// Live view over the vertices, in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V, E> {
        Vertices {
            inner: self.specifics.incidence().vertices(),
        }
    }

    /// Mints an edge via the edge factory and inserts it between `source`
    /// and `target`.
    ///
    /// Fails when either endpoint is absent or the edge would be a forbidden
    /// self-loop. Returns `Ok(None)` when the parallel-edge policy rejects
    /// the insertion, or when the factory produced an identity that is
    /// already registered; the graph is unchanged in both cases.
    pub fn add_edge(&mut self, source: &V, target: &V) -> Result<Option<E>, AddEdgeErrorKind> {
        self.check_endpoints(source, target)?;

        if !self.allow_multiple_edges && self.contains_edge_between(source, target) {
            return Ok(None);
        }

        if !self.allow_loops && source == target {
            return Err(AddEdgeErrorKind::LoopNotAllowed);
        }

        let edge = self.edge_factory.create_edge(source, target);

        if self.registry.contains(&edge) {
            return Ok(None);
        }

        self.register(edge.clone(), source, target);
        Ok(Some(edge))
    }

    /// Inserts a caller-supplied edge identity between `source` and `target`.
    ///
    /// Returns `Ok(false)` when the identity is already registered or the
    /// parallel-edge policy rejects the insertion. On failure the identity is
    /// handed back inside the error.
    pub fn add_edge_with(
        &mut self,
        source: &V,
        target: &V,
        edge: E,
    ) -> Result<bool, AddEdgeError<E>> {
        if self.registry.contains(&edge) {
            return Ok(false);
        }

        if let Err(kind) = self.check_endpoints(source, target) {
            return Err(AddEdgeError::new(edge, kind));
        }

        if !self.allow_multiple_edges && self.contains_edge_between(source, target) {
            return Ok(false);
        }

        if !self.allow_loops && source == target {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::LoopNotAllowed));
        }

        self.register(edge, source, target);
        Ok(true)
    }

    /// Removes an edge from the registry and the incidence index. `false` if
    /// it was not present.
    pub fn remove_edge(&mut self, edge: &E) -> bool {
        match self.registry.remove(edge) {
            Some(record) => {
                self.specifics
                    .remove_edge_from_touching(edge, record.source(), record.target());
                true
            }
            None => false,
        }
    }

    /// Removes and returns the earliest-inserted edge between `source` and
    /// `target`, if any.
    pub fn remove_edge_between(&mut self, source: &V, target: &V) -> Option<E> {
        let edge = self.specifics.edge_between(source, target, &self.registry)?;
        self.remove_edge(&edge);
        Some(edge)
    }

    /// Removes a vertex together with all its incident edges. `false` if it
    /// was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        // Snapshot first; removal mutates the sets being walked.
        let Some(edges) = self.edges_of(vertex) else {
            return false;
        };

        for edge in &edges {
            self.remove_edge(edge);
        }

        self.specifics.incidence_mut().remove_vertex(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.registry.contains(edge)
    }

    pub fn contains_edge_between(&self, source: &V, target: &V) -> bool {
        self.specifics
            .edge_between(source, target, &self.registry)
            .is_some()
    }

    pub fn edge_count(&self) -> usize {
        self.registry.len()
    }

    /// Live view over the edges and their endpoints, in insertion order.
    pub fn edges(&self) -> Edges<'_, V, E> {
        Edges {
            inner: self.registry.iter(),
        }
    }

    pub fn edge_source(&self, edge: &E) -> Option<&V> {
        self.registry.record(edge).map(EdgeRecord::source)
    }

    pub fn edge_target(&self, edge: &E) -> Option<&V> {
        self.registry.record(edge).map(EdgeRecord::target)
    }

    pub fn endpoints(&self, edge: &E) -> Option<(&V, &V)> {
        self.registry
            .record(edge)
            .map(|record| (record.source(), record.target()))
    }

    /// The weight of an edge. Unweighted edges report
    /// [`DEFAULT_EDGE_WEIGHT`](crate::weight::DEFAULT_EDGE_WEIGHT).
    pub fn edge_weight(&self, edge: &E) -> Option<f64> {
        self.registry.record(edge).map(EdgeRecord::weight)
    }

    /// Overwrites the weight of an edge of a weighted graph.
    pub fn set_edge_weight(&mut self, edge: &E, weight: f64) -> Result<(), EdgeWeightError> {
        let record = self
            .registry
            .record_mut(edge)
            .ok_or(EdgeWeightError::EdgeAbsent)?;

        if record.set_weight(weight) {
            Ok(())
        } else {
            Err(EdgeWeightError::NotWeighted)
        }
    }

    /// All edges between `source` and `target` in insertion order. `None` if
    /// either vertex is absent. Direction-sensitive iff the graph is
    /// directed.
    pub fn edges_between(&self, source: &V, target: &V) -> Option<Vec<E>> {
        self.specifics.edges_between(source, target, &self.registry)
    }

    /// The earliest-inserted edge between `source` and `target`, if any.
    pub fn edge_between(&self, source: &V, target: &V) -> Option<E> {
        self.specifics.edge_between(source, target, &self.registry)
    }

    /// All edges touching `vertex`, each self-loop listed exactly once.
    /// `None` if the vertex is absent. Directed graphs list incoming edges
    /// first, both halves in per-container insertion order.
    pub fn edges_of(&self, vertex: &V) -> Option<Vec<E>> {
        let container = self.specifics.incidence().container(vertex)?;

        if Ty::is_directed() {
            let mut edges: Vec<E> = container.set(Direction::Incoming).iter().cloned().collect();

            // A loop sits in both slots; keep the incoming copy only.
            for edge in container.set(Direction::Outgoing).iter() {
                let record = self.registry.record(edge).expect("edge is not registered");
                if !record.is_loop() {
                    edges.push(edge.clone());
                }
            }

            Some(edges)
        } else {
            Some(container.set(Direction::Outgoing).iter().cloned().collect())
        }
    }

    fn check_endpoints(&self, source: &V, target: &V) -> Result<(), AddEdgeErrorKind> {
        if !self.contains_vertex(source) {
            return Err(AddEdgeErrorKind::SourceAbsent);
        }

        if !self.contains_vertex(target) {
            return Err(AddEdgeErrorKind::TargetAbsent);
        }

        Ok(())
    }

    fn register(&mut self, edge: E, source: &V, target: &V) {
        self.registry.insert(
            edge.clone(),
            EdgeRecord::new(source.clone(), target.clone(), self.weighted),
        );
        self.specifics.add_edge_to_touching(&edge, source, target);
    }
}

impl<V: Identity, E: Identity, S: Specifics<V, E, Directed>> Graph<V, E, Directed, S> {
    pub fn in_degree_of(&self, vertex: &V) -> Option<usize> {
        self.incoming_edges_of(vertex).map(ArraySet::len)
    }

    pub fn out_degree_of(&self, vertex: &V) -> Option<usize> {
        self.outgoing_edges_of(vertex).map(ArraySet::len)
    }

    pub fn incoming_edges_of(&self, vertex: &V) -> Option<&ArraySet<E>> {
        self.specifics
            .incidence()
            .container(vertex)
            .map(|container| container.set(Direction::Incoming))
    }

    pub fn outgoing_edges_of(&self, vertex: &V) -> Option<&ArraySet<E>> {
        self.specifics
            .incidence()
            .container(vertex)
            .map(|container| container.set(Direction::Outgoing))
    }
}

impl<V: Identity, E: Identity, S: Specifics<V, E, Undirected>> Graph<V, E, Undirected, S> {
    /// The degree of a vertex, each self-loop contributing two when loops
    /// are permitted.
    pub fn degree_of(&self, vertex: &V) -> Option<usize> {
        let incident = self.specifics.incidence().container(vertex)?.set(Direction::Outgoing);

        if !self.allow_loops {
            return Some(incident.len());
        }

        let mut degree = 0;
        for edge in incident.iter() {
            let record = self.registry.record(edge).expect("edge is not registered");
            degree += if record.is_loop() { 2 } else { 1 };
        }

        Some(degree)
    }
}

// The shallow copy: configuration and identities are shared (the factory by
// reference, identities by clone of the caller's type), incidence is rebuilt
// from the registry.
impl<V: Identity, E: Identity, Ty: EdgeType, S: Specifics<V, E, Ty>> Clone for Graph<V, E, Ty, S> {
    fn clone(&self) -> Self {
        let mut specifics =
            S::with_edge_set_factory(self.specifics.incidence().edge_set_factory().clone());

        for vertex in self.specifics.incidence().vertices() {
            specifics.incidence_mut().add_vertex(vertex.clone());
        }

        for (edge, record) in self.registry.iter() {
            specifics.add_edge_to_touching(edge, record.source(), record.target());
        }

        Self {
            registry: self.registry.clone(),
            specifics,
            edge_factory: Arc::clone(&self.edge_factory),
            allow_multiple_edges: self.allow_multiple_edges,
            allow_loops: self.allow_loops,
            weighted: self.weighted,
            ty: PhantomData,
        }
    }
}

impl<V, E, Ty, S> fmt::Debug for Graph<V, E, Ty, S>
where
    V: fmt::Debug,
    E: fmt::Debug,
    Ty: EdgeType,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(if Ty::is_directed() { "DiGraph" } else { "UnGraph" })
            .field("registry", &self.registry)
            .field("specifics", &self.specifics)
            .field("allow_multiple_edges", &self.allow_multiple_edges)
            .field("allow_loops", &self.allow_loops)
            .field("weighted", &self.weighted)
            .finish()
    }
}

/// Iterator over the vertices of a graph, in insertion order.
pub struct Vertices<'a, V, E> {
    inner: indexmap::map::Keys<'a, V, EdgeContainer<E>>,
}

impl<'a, V, E> Iterator for Vertices<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> ExactSizeIterator for Vertices<'_, V, E> {}

/// Iterator over the edges of a graph and their endpoints, in insertion
/// order.
pub struct Edges<'a, V, E> {
    inner: indexmap::map::Iter<'a, E, EdgeRecord<V>>,
}

impl<'a, V, E> Iterator for Edges<'a, V, E> {
    type Item = (&'a E, &'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(edge, record)| (edge, record.source(), record.target()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> ExactSizeIterator for Edges<'_, V, E> {}
