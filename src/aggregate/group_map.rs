mod into_aggregate;
mod maps;

pub use into_aggregate::*;

use crate::{
    aggregate::{AggregateOp, Group, OccupiedGroup, VacantGroup},
    collector::assert_collector,
};

/// A map that stores one value per group.
///
/// Implemented for [`IndexMap`], [`Record`], [`HashMap`] and [`BTreeMap`].
/// The map decides the order groups come out in: first occurrence for [`IndexMap`]
/// and [`Record`], arbitrary for [`HashMap`], sorted for [`BTreeMap`].
///
/// [`IndexMap`]: indexmap::IndexMap
/// [`Record`]: crate::record::Record
/// [`HashMap`]: std::collections::HashMap
/// [`BTreeMap`]: std::collections::BTreeMap
pub trait GroupMap {
    /// The key of each group.
    type Key;

    /// The value of each group.
    type Value;

    /// An existing group.
    type Occupied<'a>: OccupiedGroup<Key = Self::Key, Value = Self::Value>
    where
        Self: 'a;

    /// A group not existing yet.
    type Vacant<'a>: VacantGroup<Key = Self::Key, Value = Self::Value>
    where
        Self: 'a;

    /// Returns a [`Group`] for the given `key`, representing either an
    /// existing group or a new group that can be created.
    fn group<'a>(&'a mut self, key: Self::Key) -> Group<Self::Occupied<'a>, Self::Vacant<'a>>;

    /// Creates a [`Collector`] that aggregates items into groups.
    ///
    /// This collects `(K, T)`s. Items that have the same key `K` go to the same group, and the way
    /// all items `T` of the same key are combined is determined by the provided `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use groupwise::{
    ///     prelude::*,
    ///     aggregate::{Count, GroupMap},
    /// };
    ///
    /// let mut collector = HashMap::<_, usize>::new().into_aggregate(Count::new());
    ///
    /// assert!(collector.collect(('x', "first")).is_continue());
    /// assert!(collector.collect(('y', "second")).is_continue());
    /// assert!(collector.collect(('x', "third")).is_continue());
    ///
    /// let counts = collector.finish();
    ///
    /// assert_eq!(counts[&'x'], 2);
    /// assert_eq!(counts[&'y'], 1);
    /// ```
    ///
    /// [`Collector`]: crate::collector::Collector
    fn into_aggregate<Op>(self, op: Op) -> IntoAggregate<Self, Op>
    where
        Self: Sized,
        Op: AggregateOp<Key = Self::Key, Value = Self::Value>,
    {
        assert_collector(IntoAggregate::new(self, op))
    }
}
