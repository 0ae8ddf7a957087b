#![allow(private_bounds)]

use std::{fmt::Debug, marker::PhantomData};

use crate::aggregate::{AggregateOp, assert_op};

/// An [`AggregateOp`] that keeps a tally per group.
///
/// The tally starts at one, since a group only exists once an item opened it,
/// and goes up by one per further item. Items themselves are dropped.
///
/// The tally is a `usize` unless the map says otherwise: any primitive integer works,
/// e.g. `IndexMap<_, u8>`. Overflowing the chosen integer panics in debug builds.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use groupwise::{
///     prelude::*,
///     aggregate::{Count, GroupMap},
/// };
///
/// let tallies = "mississippi"
///     .chars()
///     .map(|ch| (ch, ()))
///     .feed_into(IndexMap::<_, u8>::new().into_aggregate(Count::new()));
///
/// assert_eq!(tallies.into_iter().collect::<Vec<_>>(), [('m', 1), ('i', 4), ('s', 4), ('p', 2)]);
/// ```
pub struct Count<K, T, C: SupportedCountTy = usize> {
    _marker: PhantomData<fn(&K, T, &mut C) -> C>,
}

impl<K, T, C: SupportedCountTy> Count<K, T, C> {
    /// Creates a new instance of this aggregate op.
    #[inline]
    pub const fn new() -> Self {
        assert_op(Self {
            _marker: PhantomData,
        })
    }
}

impl<K, T, C: SupportedCountTy> Default for Count<K, T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, C: SupportedCountTy> AggregateOp for Count<K, T, C> {
    type Key = K;

    type Value = C;

    type Item = T;

    #[inline]
    fn new_value(&mut self, _key: &Self::Key, _item: Self::Item) -> Self::Value {
        C::ONE
    }

    #[inline]
    fn modify(&mut self, tally: &mut Self::Value, _item: Self::Item) {
        tally.bump();
    }
}

impl<K, T, C: SupportedCountTy> Clone for Count<K, T, C> {
    fn clone(&self) -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, T, C: SupportedCountTy> Debug for Count<K, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Count").finish()
    }
}

trait SupportedCountTy {
    const ONE: Self;

    fn bump(&mut self);
}

macro_rules! supported_count_ty_impls {
    ($($int:ty)*) => {
        $(
            impl SupportedCountTy for $int {
                const ONE: Self = 1;

                #[inline]
                fn bump(&mut self) {
                    *self += 1;
                }
            }
        )*
    };
}

supported_count_ty_impls!(i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize);
