use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use rustc_hash::FxHasher;

use super::marker::{Directed, EdgeType, Undirected};

/// Pair of vertex identities keyed by orientation. For [`Directed`] the pair
/// is ordered: `(a, b) != (b, a)`. For [`Undirected`] equality and hashing are
/// symmetric: `{a, b} == {b, a}`.
pub struct VertexPair<V, Ty> {
    first: V,
    second: V,
    ty: PhantomData<Ty>,
}

pub type OrderedPair<V> = VertexPair<V, Directed>;
pub type UnorderedPair<V> = VertexPair<V, Undirected>;

impl<V, Ty: EdgeType> VertexPair<V, Ty> {
    pub fn new(first: V, second: V) -> Self {
        Self {
            first,
            second,
            ty: PhantomData,
        }
    }

    pub fn first(&self) -> &V {
        &self.first
    }

    pub fn second(&self) -> &V {
        &self.second
    }
}

impl<V: Eq, Ty: EdgeType> VertexPair<V, Ty> {
    pub fn has_vertex(&self, vertex: &V) -> bool {
        *vertex == self.first || *vertex == self.second
    }

    pub fn other(&self, one: &V) -> Option<&V> {
        if *one == self.first {
            Some(&self.second)
        } else if *one == self.second {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<V: Clone, Ty> Clone for VertexPair<V, Ty> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            ty: PhantomData,
        }
    }
}

impl<V: Eq, Ty: EdgeType> PartialEq for VertexPair<V, Ty> {
    fn eq(&self, other: &Self) -> bool {
        let straight = self.first == other.first && self.second == other.second;

        if Ty::is_directed() {
            straight
        } else {
            straight || (self.first == other.second && self.second == other.first)
        }
    }
}

impl<V: Eq, Ty: EdgeType> Eq for VertexPair<V, Ty> {}

impl<V: Hash, Ty: EdgeType> Hash for VertexPair<V, Ty> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h1 = component_hash(&self.first);
        let h2 = component_hash(&self.second);

        if Ty::is_directed() {
            state.write_u64(h1);
            state.write_u64(h2);
        } else {
            // Symmetric combination so that {a, b} and {b, a} collide by
            // construction. Any fixed odd multiplier works.
            let (hi, lo) = if h1 > h2 { (h1, h2) } else { (h2, h1) };
            state.write_u64(hi.wrapping_mul(31).wrapping_add(lo));
        }
    }
}

fn component_hash<V: Hash>(value: &V) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<V: fmt::Debug, Ty: EdgeType> fmt::Debug for VertexPair<V, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Ty::is_directed() {
            write!(f, "({:?}, {:?})", self.first, self.second)
        } else {
            write!(f, "{{{:?}, {:?}}}", self.first, self.second)
        }
    }
}
