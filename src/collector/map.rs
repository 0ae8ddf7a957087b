use std::ops::ControlFlow;

use super::{Collector, CollectorBase};

/// A [`Collector`] that turns each item into something its inner collector accepts.
///
/// The aggregations use it to pair every unit with its group key on the way in.
/// Created by [`Collector::map()`].
pub struct Map<C, F> {
    collector: C,
    f: F,
}

impl<C, F> Map<C, F> {
    pub(in crate::collector) fn new(collector: C, f: F) -> Self {
        Self { collector, f }
    }
}

impl<C, F> CollectorBase for Map<C, F>
where
    C: CollectorBase,
{
    type Output = C::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.collector.finish()
    }
}

impl<C, T, U, F> Collector<T> for Map<C, F>
where
    C: Collector<U>,
    F: FnMut(T) -> U,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.collector.collect((self.f)(item))
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.collector.collect_many(items.into_iter().map(&mut self.f))
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self { collector, f } = self;
        collector.collect_then_finish(items.into_iter().map(f))
    }
}
