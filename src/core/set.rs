use std::hash::Hash;

use indexmap::IndexSet;
use super::FxBuildHasher;

// Degree at which an array-backed set stops being cheaper than hashing.
const SPILL_THRESHOLD: usize = 16;

/// Insertion-ordered set tuned for the common case of low-degree vertices.
///
/// Starts as a plain array with linear membership tests and no allocation
/// when empty, and promotes itself to a hash set once it outgrows
/// [`SPILL_THRESHOLD`]. Removal shifts elements so iteration order remains
/// insertion order in both representations.
#[derive(Debug, Clone)]
pub struct ArraySet<T> {
    repr: Repr<T>,
}

#[derive(Debug, Clone)]
enum Repr<T> {
    Array(Vec<T>),
    Hash(IndexSet<T, FxBuildHasher>),
}

impl<T> ArraySet<T> {
    pub fn new() -> Self {
        Self {
            repr: Repr::Array(Vec::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        if capacity > SPILL_THRESHOLD {
            Self {
                repr: Repr::Hash(IndexSet::with_capacity_and_hasher(
                    capacity,
                    FxBuildHasher::default(),
                )),
            }
        } else {
            Self {
                repr: Repr::Array(Vec::with_capacity(capacity)),
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Array(items) => items.len(),
            Repr::Hash(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match &self.repr {
            Repr::Array(items) => Iter::Array(items.iter()),
            Repr::Hash(items) => Iter::Hash(items.iter()),
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.repr {
            Repr::Array(items) => items.first(),
            Repr::Hash(items) => items.first(),
        }
    }
}

impl<T: Eq + Hash> ArraySet<T> {
    pub fn contains(&self, value: &T) -> bool {
        match &self.repr {
            Repr::Array(items) => items.contains(value),
            Repr::Hash(items) => items.contains(value),
        }
    }

    /// Inserts `value` unless already present. Returns whether it was added.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.repr {
            Repr::Array(items) => {
                if items.contains(&value) {
                    return false;
                }

                items.push(value);

                if items.len() > SPILL_THRESHOLD {
                    self.promote();
                }

                true
            }
            Repr::Hash(items) => items.insert(value),
        }
    }

    /// Removes `value`, shifting later elements down. Returns whether it was
    /// present.
    pub fn remove(&mut self, value: &T) -> bool {
        match &mut self.repr {
            Repr::Array(items) => match items.iter().position(|item| item == value) {
                Some(index) => {
                    items.remove(index);
                    true
                }
                None => false,
            },
            Repr::Hash(items) => items.shift_remove(value),
        }
    }

    fn promote(&mut self) {
        if let Repr::Array(items) = &mut self.repr {
            let mut set = IndexSet::with_capacity_and_hasher(
                items.len() * 2,
                FxBuildHasher::default(),
            );
            set.extend(items.drain(..));
            self.repr = Repr::Hash(set);
        }
    }
}

impl<T> Default for ArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

#[derive(Debug)]
pub enum Iter<'a, T> {
    Array(std::slice::Iter<'a, T>),
    Hash(indexmap::set::Iter<'a, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Array(inner) => inner.next(),
            Iter::Hash(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Array(inner) => inner.size_hint(),
            Iter::Hash(inner) => inner.size_hint(),
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates() {
        let mut set = ArraySet::new();

        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_keeps_order() {
        let mut set: ArraySet<i32> = (0..5).collect();

        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn promotion_preserves_order_and_semantics() {
        let mut set = ArraySet::new();

        for i in 0..100 {
            assert!(set.insert(i));
        }

        assert!(matches!(set.repr, Repr::Hash(_)));
        assert_eq!(set.len(), 100);
        assert!(set.contains(&99));
        assert!(!set.insert(50));

        assert!(set.remove(&0));
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), (1..100).collect::<Vec<_>>());
    }

    #[test]
    fn first_in_insertion_order() {
        let mut set = ArraySet::new();
        set.insert("b");
        set.insert("a");

        assert_eq!(set.first(), Some(&"b"));
    }
}
