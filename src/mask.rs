//! Masked projections over a graph.
//!
//! A [`MaskSubgraph`] hides the vertices and edges a caller predicate flags,
//! without copying anything. The view borrows the graph, so the underlying
//! graph cannot be mutated while a view is alive.

use crate::core::{marker::EdgeType, Identity};
use crate::graph::Graph;
use crate::specifics::Specifics;

/// Read-only projection of a graph through two mask predicates.
///
/// A vertex is visible when it is present and not masked. An edge is visible
/// when it is present, not masked itself, and neither of its endpoints is
/// masked. Iteration preserves the underlying insertion order.
///
/// The predicates must be deterministic and side-effect free for the duration
/// of any iteration.
pub struct MaskSubgraph<'g, V, E, Ty: EdgeType, S> {
    graph: &'g Graph<V, E, Ty, S>,
    vertex_mask: Box<dyn Fn(&V) -> bool + 'g>,
    edge_mask: Box<dyn Fn(&E) -> bool + 'g>,
}

impl<'g, V, E, Ty, S> MaskSubgraph<'g, V, E, Ty, S>
where
    V: Identity,
    E: Identity,
    Ty: EdgeType,
    S: Specifics<V, E, Ty>,
{
    pub fn new<FV, FE>(graph: &'g Graph<V, E, Ty, S>, vertex_mask: FV, edge_mask: FE) -> Self
    where
        FV: Fn(&V) -> bool + 'g,
        FE: Fn(&E) -> bool + 'g,
    {
        Self {
            graph,
            vertex_mask: Box::new(vertex_mask),
            edge_mask: Box::new(edge_mask),
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex) && !(self.vertex_mask)(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        match self.graph.endpoints(edge) {
            Some((source, target)) => {
                !(self.edge_mask)(edge)
                    && !(self.vertex_mask)(source)
                    && !(self.vertex_mask)(target)
            }
            None => false,
        }
    }

    /// Visible vertices, in the underlying insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph
            .vertices()
            .filter(move |vertex| !(self.vertex_mask)(vertex))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Visible edges with their endpoints, in the underlying insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (&E, &V, &V)> + '_ {
        self.graph.edges().filter(move |(edge, source, target)| {
            !(self.edge_mask)(edge)
                && !(self.vertex_mask)(source)
                && !(self.vertex_mask)(target)
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    fn fixture() -> (UnGraph<i32, u32>, u32, u32) {
        let counter = std::cell::Cell::new(0u32);
        let mut graph: UnGraph<i32, u32> = UnGraph::new(
            move |_: &i32, _: &i32| {
                let id = counter.get();
                counter.set(id + 1);
                id
            },
            false,
            false,
        );

        for v in 1..=4 {
            graph.add_vertex(v);
        }

        let e1 = graph.add_edge(&1, &2).unwrap().unwrap();
        let e2 = graph.add_edge(&2, &3).unwrap().unwrap();

        (graph, e1, e2)
    }

    #[test]
    fn masked_vertex_hides_its_edges() {
        let (graph, e1, e2) = fixture();
        let view = MaskSubgraph::new(&graph, |v: &i32| *v == 1, move |e: &u32| *e == e2);

        assert_eq!(view.vertex_count(), 3);
        assert!(!view.contains_vertex(&1));
        assert!(view.contains_vertex(&2));

        // e1 goes with its masked endpoint, e2 is masked directly.
        assert_eq!(view.edge_count(), 0);
        assert!(!view.contains_edge(&e1));
        assert!(!view.contains_edge(&e2));
    }

    #[test]
    fn unmasked_elements_pass_through() {
        let (graph, e1, e2) = fixture();
        let view = MaskSubgraph::new(&graph, |_: &i32| false, |_: &u32| false);

        assert_eq!(view.vertex_count(), graph.vertex_count());
        assert_eq!(view.edge_count(), graph.edge_count());
        assert_eq!(
            view.edges().map(|(e, ..)| *e).collect::<Vec<_>>(),
            vec![e1, e2]
        );
        assert!(view.contains_edge(&e1));
        assert!(!view.contains_edge(&99));
    }

    #[test]
    fn view_reflects_the_live_graph() {
        let (mut graph, e1, _) = fixture();
        graph.remove_edge(&e1);

        let view = MaskSubgraph::new(&graph, |_: &i32| false, |_: &u32| false);

        assert!(!view.contains_edge(&e1));
        assert_eq!(view.edge_count(), 1);
    }

    #[test]
    fn iteration_skips_masked_in_order() {
        let (graph, ..) = fixture();
        let view = MaskSubgraph::new(&graph, |v: &i32| *v % 2 == 0, |_: &u32| false);

        assert_eq!(view.vertices().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(view.edge_count(), 0);
    }
}
