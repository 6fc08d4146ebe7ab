pub mod marker;
pub mod pair;
pub mod set;

mod edge;
mod error;

pub use edge::{EdgeFactory, EdgeRecord, EdgeRegistry};
pub use error::{AddEdgeError, AddEdgeErrorKind, EdgeWeightError};
pub use pair::{OrderedPair, UnorderedPair, VertexPair};
pub use set::ArraySet;

use std::hash::{BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

pub(crate) type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Capability set required from vertex and edge identity types. Blanket
/// implemented; callers never implement it by hand.
pub trait Identity: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Identity for T {}
