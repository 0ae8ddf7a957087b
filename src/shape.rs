//! The container shapes an aggregation can start from.
//!
//! There are exactly four, listed by [`ShapeKind`]. Each one answers two separate
//! questions, which is why there are two traits:
//!
//! - [`Shape`]: what unit does a classifier see? A bare value for sequences and sets,
//!   a `(key, value)` pair for mappings and records.
//! - [`Rebuild`]: what does a group of (possibly projected) units look like? Always the
//!   same shape as the source, even for records, whose units are pairs but whose
//!   groups are records again rather than sequences of pairs.

use std::{fmt, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use crate::{collector::Collector, record::Record};

/// The closed set of source shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Ordered, duplicates allowed: [`Vec`].
    Sequence,
    /// Duplicates collapsed: [`IndexSet`].
    UniqueSet,
    /// Unique keys in insertion order: [`IndexMap`].
    Mapping,
    /// String keys in insertion order: [`Record`].
    Record,
}

impl ShapeKind {
    /// Whether classifiers see `(key, value)` pairs rather than bare values.
    #[inline]
    pub const fn is_associative(self) -> bool {
        matches!(self, Self::Mapping | Self::Record)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequence => "sequence",
            Self::UniqueSet => "unique set",
            Self::Mapping => "mapping",
            Self::Record => "record",
        })
    }
}

/// A container that can be traversed unit by unit.
///
/// Traversal only borrows the container and hands out owned copies of its units,
/// so an aggregation can never change its source.
pub trait Shape {
    /// The run-time tag of this shape.
    const KIND: ShapeKind;

    /// What a classifier or projector receives per element.
    type Unit;

    /// Yields every unit in the container's iteration order.
    fn units(&self) -> impl Iterator<Item = Self::Unit> + '_;

    /// The number of units [`units()`](Shape::units) yields.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the run-time tag of this shape.
    #[inline]
    fn kind(&self) -> ShapeKind {
        Self::KIND
    }
}

/// A [`Shape`] that can build groups of units of type `U` in its own shape.
///
/// # Examples
///
/// ```
/// use indexmap::IndexSet;
/// use groupwise::prelude::*;
///
/// let mut bucket = <IndexSet<u8> as Rebuild<char>>::empty_bucket();
/// bucket.collect('x');
/// bucket.collect('x');
///
/// assert_eq!(bucket.len(), 1);
/// ```
pub trait Rebuild<U>: Shape {
    /// The collection one group is kept in.
    type Bucket: Collector<U, Output = Self::Bucket> + Default;

    /// Creates a group with nothing in it yet.
    #[inline]
    fn empty_bucket() -> Self::Bucket {
        Self::Bucket::default()
    }
}

impl<T: Clone> Shape for Vec<T> {
    const KIND: ShapeKind = ShapeKind::Sequence;

    type Unit = T;

    #[inline]
    fn units(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, U> Rebuild<U> for Vec<T> {
    type Bucket = Vec<U>;
}

impl<T: Clone> Shape for IndexSet<T> {
    const KIND: ShapeKind = ShapeKind::UniqueSet;

    type Unit = T;

    #[inline]
    fn units(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, U: Hash + Eq> Rebuild<U> for IndexSet<T> {
    type Bucket = IndexSet<U>;
}

impl<K: Clone, V: Clone> Shape for IndexMap<K, V> {
    const KIND: ShapeKind = ShapeKind::Mapping;

    type Unit = (K, V);

    #[inline]
    fn units(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|(key, value)| (key.clone(), value.clone()))
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<K: Clone, V: Clone, K2: Hash + Eq, V2> Rebuild<(K2, V2)> for IndexMap<K, V> {
    type Bucket = IndexMap<K2, V2>;
}

impl<V: Clone> Shape for Record<V> {
    const KIND: ShapeKind = ShapeKind::Record;

    type Unit = (String, V);

    #[inline]
    fn units(&self) -> impl Iterator<Item = (String, V)> + '_ {
        self.iter()
            .map(|(key, value)| (key.to_owned(), value.clone()))
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<V: Clone, V2> Rebuild<(String, V2)> for Record<V> {
    type Bucket = Record<V2>;
}
