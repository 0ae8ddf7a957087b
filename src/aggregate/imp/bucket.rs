use std::{fmt::Debug, marker::PhantomData};

use crate::{
    aggregate::{AggregateOp, assert_op},
    collector::Collector,
};

/// An [`AggregateOp`] that collects each group's items into a collection of type `C`.
///
/// A group's collection is created together with its first item, so no group is ever empty.
/// Any [`Collector`] with a [`Default`] works as `C`: [`Vec`] keeps arrival order,
/// [`IndexSet`] collapses duplicates, [`IndexMap`] and [`Record`] take `(key, value)` items.
///
/// # Examples
///
/// ```
/// use indexmap::{IndexMap, IndexSet};
/// use groupwise::{
///     prelude::*,
///     aggregate::{Bucket, GroupMap},
/// };
///
/// let groups = [(true, 1), (false, 2), (true, 1), (true, 3)]
///     .into_iter()
///     .feed_into(IndexMap::<bool, IndexSet<i32>>::new().into_aggregate(Bucket::new()));
///
/// assert_eq!(groups[&true].iter().copied().collect::<Vec<_>>(), [1, 3]);
/// assert_eq!(groups[&false].len(), 1);
/// ```
///
/// [`IndexSet`]: indexmap::IndexSet
/// [`IndexMap`]: indexmap::IndexMap
/// [`Record`]: crate::record::Record
pub struct Bucket<K, T, C> {
    _marker: PhantomData<fn(&K, T) -> C>,
}

impl<K, T, C> Bucket<K, T, C>
where
    C: Collector<T> + Default,
{
    /// Creates a new instance of this aggregate op.
    #[inline]
    pub const fn new() -> Self {
        assert_op(Self {
            _marker: PhantomData,
        })
    }
}

impl<K, T, C> Default for Bucket<K, T, C>
where
    C: Collector<T> + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, C> AggregateOp for Bucket<K, T, C>
where
    C: Collector<T> + Default,
{
    type Key = K;

    type Value = C;

    type Item = T;

    #[inline]
    fn new_value(&mut self, _key: &Self::Key, item: Self::Item) -> Self::Value {
        let mut bucket = C::default();
        // Collections never stop accumulating.
        let _ = bucket.collect(item);
        bucket
    }

    #[inline]
    fn modify(&mut self, bucket: &mut Self::Value, item: Self::Item) {
        let _ = bucket.collect(item);
    }
}

impl<K, T, C> Clone for Bucket<K, T, C> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, T, C> Debug for Bucket<K, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bucket").finish()
    }
}
