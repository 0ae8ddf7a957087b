use super::Collector;

/// Extends [`Iterator`] with the [`feed_into()`](IteratorExt::feed_into) method
/// for working seamlessly with [`Collector`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Feeds items from this iterator into the provided collector till
    /// the collector stops accumulating or the iterator is exhausted,
    /// and returns the collector's output.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    ///
    /// let evens = (1..=6)
    ///     .filter(|num| num % 2 == 0)
    ///     .feed_into(vec![]);
    ///
    /// assert_eq!(evens, [2, 4, 6]);
    /// ```
    #[inline]
    fn feed_into<C>(self, collector: C) -> C::Output
    where
        Self: Sized,
        C: Collector<Self::Item>,
    {
        collector.collect_then_finish(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
