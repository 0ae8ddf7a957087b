use std::ops::ControlFlow;

use super::{CollectorBase, Map, assert_collector};

/// Collects items and produces a final output.
///
/// This trait requires one core method on top of [`CollectorBase`]:
///
/// - [`collect()`](Collector::collect): consumes an item and returns whether the collector
///   continues accumulating further items *after* this operation.
///
/// # Implementing
///
/// Wrap the state you want to accumulate in a struct, implement [`CollectorBase`]
/// to say what it turns into, then implement this trait for every item type it accepts.
/// [`collect_many()`](Collector::collect_many) and
/// [`collect_then_finish()`](Collector::collect_then_finish) may be overridden for optimizations,
/// e.g. by forwarding to [`Extend`].
pub trait Collector<T>: CollectorBase {
    /// Collects an item and returns a [`ControlFlow`] indicating whether the collector is "closed"
    /// - meaning it will no longer accumulate items **right after** this operation.
    ///
    /// Return [`Continue(())`] to indicate the collector can still accumulate more items,
    /// or [`Break(())`] if further feeding is meaningless.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    /// use indexmap::IndexSet;
    ///
    /// let mut set = IndexSet::new();
    ///
    /// assert!(set.collect(2).is_continue());
    /// assert!(set.collect(1).is_continue());
    /// // Duplicates are absorbed, but the set does not stop.
    /// assert!(set.collect(2).is_continue());
    ///
    /// assert_eq!(set.finish().into_iter().collect::<Vec<_>>(), [2, 1]);
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating whether
    /// the collector is "closed" after the last item it took.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    ///
    /// let mut v = vec![1, 2];
    /// v.collect_many([3, 4, 5]);
    ///
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        // `try_for_each` instead of a `for` loop since some iterators
        // (e.g. `chain`) fold faster than they step.
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator, consumes the collector, and produces the accumulated result.
    ///
    /// This is equivalent to calling [`collect_many()`](Collector::collect_many)
    /// followed by [`finish()`](CollectorBase::finish).
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    ///
    /// let v = vec![1, 2];
    ///
    /// assert_eq!(v.collect_then_finish([3, 4, 5]), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        let mut this = self;

        // Whether it breaks does not matter: the collector is finished either way.
        let _ = this.collect_many(items);
        this.finish()
    }

    /// Creates a [`Collector`] that calls a closure on each item before collecting.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    ///
    /// let lengths = ["a", "bcd", "ef"]
    ///     .into_iter()
    ///     .feed_into(vec![].map(str::len));
    ///
    /// assert_eq!(lengths, [1, 3, 2]);
    /// ```
    #[inline]
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(U) -> T,
    {
        assert_collector(Map::new(self, f))
    }
}
