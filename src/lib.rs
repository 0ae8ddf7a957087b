//! Shape-preserving count-by and group-by over sequences, sets, maps and records.
//!
//! Grouping usually flattens whatever you started with into `HashMap<K, Vec<T>>`.
//! This crate keeps the shape instead: group a [`Vec`] and each group is a [`Vec`],
//! group an [`IndexSet`] and each group is an [`IndexSet`], group an [`IndexMap`]
//! or a [`Record`] and each group is a map or a record again.
//!
//! ```
//! use indexmap::IndexMap;
//! use groupwise::{count_by, group_by};
//!
//! let counts = count_by(&vec![1, 2, 3, 4, 5], |num| num % 2 == 0);
//! assert_eq!(counts[&false], 3);
//! assert_eq!(counts[&true], 2);
//!
//! let stock = IndexMap::from([("apple", 3), ("pear", 0), ("plum", 8)]);
//! let groups = group_by(&stock, |&(_, count)| count > 0);
//!
//! assert_eq!(groups[&true], IndexMap::from([("apple", 3), ("plum", 8)]));
//! assert_eq!(groups[&false], IndexMap::from([("pear", 0)]));
//! ```
//!
//! # How it fits together
//!
//! - [`shape`] describes the four source shapes: what a classifier sees per element
//!   ([`Shape`]) and what a group is built as ([`Rebuild`]).
//! - [`aggregate`] folds `(key, item)` pairs into a [`GroupMap`](aggregate::GroupMap)
//!   with an [`AggregateOp`](aggregate::AggregateOp) such as counting or bucketing.
//! - [`collector`] is the sink trait both of them are built on.
//! - The functions at the crate root ([`count_by()`], [`group_by()`], ...) join the three
//!   in a single traversal.
//!
//! Beside the aggregations, [`func`] has a few function helpers and [`produce`]
//! keys tagged records through a pluggable copy-on-write facility.
//!
//! # Feature flags
//!
//! - `tracing`: emits `trace` events from each aggregation and a `debug` event when
//!   [`key_by()`](produce::key_by) rejects a record.
//!
//! [`IndexSet`]: indexmap::IndexSet
//! [`IndexMap`]: indexmap::IndexMap
//! [`Record`]: record::Record
//! [`Shape`]: shape::Shape
//! [`Rebuild`]: shape::Rebuild

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
mod collections;
pub mod collector;
mod error;
pub mod func;
mod grouping;
pub mod prelude;
pub mod produce;
pub mod record;
pub mod shape;
#[cfg(test)]
mod test_utils;

pub use error::*;
pub use grouping::*;
