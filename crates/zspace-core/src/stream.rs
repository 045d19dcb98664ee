//! Sequence helpers over any finite iterable.
//!
//! [`Streamable`] is blanket-implemented for every [`IntoIterator`], so
//! ranges, coordinate iterators, and plain collections all get the same
//! helpers. Each helper consumes its source exactly once; call
//! [`to_sequence`](Streamable::to_sequence) first when values must be
//! replayed.

use indexmap::IndexMap;
use std::hash::Hash;

/// Pipeline helpers for finite iterables.
pub trait Streamable: IntoIterator + Sized {
    /// Eagerly collect into a `Vec`, preserving iteration order.
    fn to_sequence(self) -> Vec<Self::Item> {
        self.into_iter().collect()
    }

    /// Apply `consumer` to every element, sequentially, in iteration order.
    fn for_each_in_order<F>(self, consumer: F)
    where
        F: FnMut(Self::Item),
    {
        self.into_iter().for_each(consumer);
    }

    /// Map every element and collect the results in iteration order.
    fn map_to_sequence<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        self.into_iter().map(f).collect()
    }

    /// Group elements by `key`.
    ///
    /// Groups appear in first-seen key order and each group keeps its
    /// elements in iteration order.
    fn group_by_key<K, F>(self, mut key: F) -> IndexMap<K, Vec<Self::Item>>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: IndexMap<K, Vec<Self::Item>> = IndexMap::new();
        for item in self {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }
}

impl<I: IntoIterator> Streamable for I {}

/// Free-function form of [`Streamable::to_sequence`].
pub fn to_sequence<I: IntoIterator>(iterable: I) -> Vec<I::Item> {
    iterable.to_sequence()
}

/// Free-function form of [`Streamable::for_each_in_order`].
pub fn for_each_in_order<I, F>(iterable: I, consumer: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    iterable.for_each_in_order(consumer);
}
