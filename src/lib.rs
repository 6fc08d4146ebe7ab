//! Skein is a generic in-memory graph data structure library. Vertex and
//! edge identities are caller-supplied types, directed and undirected graphs
//! share one contract, and the incidence storage strategy is pluggable: a
//! plain strategy that scans per-vertex incidence sets, and a fast strategy
//! that adds an endpoint-pair index for constant-time edge lookup.
//!
//! Self-loop and parallel-edge permissions, as well as whether edges carry a
//! mutable weight, are chosen when the graph is constructed. Vertex and edge
//! iteration order is insertion order.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//!
//! use skein::{DiGraph, MaskSubgraph};
//!
//! let counter = Cell::new(0u32);
//! let mut graph: DiGraph<char, u32> = DiGraph::new(
//!     move |_: &char, _: &char| {
//!         let id = counter.get();
//!         counter.set(id + 1);
//!         id
//!     },
//!     true,
//!     false,
//! );
//!
//! for v in ['a', 'b', 'c'] {
//!     graph.add_vertex(v);
//! }
//!
//! let ab = graph.add_edge(&'a', &'b').unwrap().unwrap();
//! let bc = graph.add_edge(&'b', &'c').unwrap().unwrap();
//!
//! assert_eq!(graph.out_degree_of(&'b'), Some(1));
//!
//! let view = MaskSubgraph::new(&graph, |v: &char| *v == 'c', |_: &u32| false);
//! assert!(view.contains_edge(&ab));
//! assert!(!view.contains_edge(&bc));
//! ```

pub mod core;
pub mod graph;
pub mod mask;
pub mod specifics;
pub mod weight;

pub use crate::{
    core::{
        marker::{Directed, Undirected},
        AddEdgeError, AddEdgeErrorKind, EdgeFactory, EdgeWeightError, OrderedPair, UnorderedPair,
    },
    graph::{DiGraph, Graph, UnGraph},
    mask::MaskSubgraph,
    specifics::{FastSpecifics, PlainSpecifics, Specifics},
    weight::{WeightCombiner, DEFAULT_EDGE_WEIGHT},
};
