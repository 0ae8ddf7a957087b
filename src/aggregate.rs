//! Aggregating `(key, item)` pairs into groups.
//!
//! A [`GroupMap`] decides *where* a key's group lives (an [`IndexMap`], a [`Record`],
//! a [`HashMap`], a [`BTreeMap`]), and an [`AggregateOp`] decides *what* a group
//! holds and how an item is folded into it ([`Count`], [`Bucket`]).
//! [`GroupMap::into_aggregate()`] joins the two into a [`Collector`].
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use groupwise::{
//!     prelude::*,
//!     aggregate::{Bucket, GroupMap},
//! };
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//!
//! let by_initial = words
//!     .into_iter()
//!     .map(|word| (word.as_bytes()[0], word))
//!     .feed_into(BTreeMap::new().into_aggregate(Bucket::<_, _, Vec<_>>::new()));
//!
//! assert_eq!(by_initial[&b'a'], ["apple", "avocado"]);
//! assert_eq!(by_initial[&b'c'], ["cherry"]);
//! ```
//!
//! [`IndexMap`]: indexmap::IndexMap
//! [`Record`]: crate::record::Record
//! [`HashMap`]: std::collections::HashMap
//! [`BTreeMap`]: std::collections::BTreeMap
//! [`Collector`]: crate::collector::Collector

mod aggregate_op;
mod group;
mod group_map;
mod imp;

pub use aggregate_op::*;
pub use group::*;
pub use group_map::*;
pub use imp::*;

#[inline(always)]
pub(crate) const fn assert_op<Op: AggregateOp>(op: Op) -> Op {
    op
}
