//! Module contains traits and `struct`s for collectors.
//!
//! A [`Collector`] is the "sink half" of a data pipeline: it consumes items one by one
//! and produces an output once [`finish()`](CollectorBase::finish)ed.
//! Every bucket collection and every aggregation in this crate is a collector,
//! so they can be fed by any [`Iterator`] through [`IteratorExt::feed_into()`].
//!
//! # Unspecified behaviors
//!
//! After any of [`Collector::collect()`] or [`Collector::collect_many()`] have
//! returned [`Break(())`] once, behaviors of subsequent calls to any method other than
//! [`finish()`](CollectorBase::finish) are unspecified.
//! None of the collectors in this crate ever break, but adaptors written on top of
//! them should not rely on that.
//!
//! # Example
//!
//! ```
//! use std::{collections::HashMap, ops::ControlFlow};
//! use groupwise::prelude::*;
//!
//! #[derive(Default)]
//! struct Tally {
//!     seen: HashMap<char, usize>,
//! }
//!
//! impl CollectorBase for Tally {
//!     type Output = HashMap<char, usize>;
//!
//!     fn finish(self) -> Self::Output {
//!         self.seen
//!     }
//! }
//!
//! impl Collector<char> for Tally {
//!     fn collect(&mut self, ch: char) -> ControlFlow<()> {
//!         *self.seen.entry(ch).or_default() += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let tally = "abca".chars().feed_into(Tally::default());
//!
//! assert_eq!(tally[&'a'], 2);
//! assert_eq!(tally[&'c'], 1);
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

#[allow(clippy::module_inception)]
mod collector;
mod collector_base;
mod iterator_ext;
mod map;

pub use collector::*;
pub use collector_base::*;
pub use iterator_ext::*;
pub use map::*;

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
