/// The part of a collector that does not depend on the item type.
///
/// Splitting this from [`Collector`](super::Collector) lets one collector accept
/// several item types while still having a single [`Output`](CollectorBase::Output).
pub trait CollectorBase {
    /// The result this collector yields, via the [`finish()`](CollectorBase::finish) method.
    type Output;

    /// Consumes the collector and returns the accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupwise::prelude::*;
    ///
    /// let mut v = vec![1, 2];
    /// assert!(v.collect(3).is_continue());
    ///
    /// assert_eq!(v.finish(), [1, 2, 3]);
    /// ```
    fn finish(self) -> Self::Output;
}
