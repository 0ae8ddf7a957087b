use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::collector::Collector;

/// An error returned when the collection operations of the collector are not satisfied.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect [`Output`] produced by the collector
    ///
    /// [`Output`]: crate::collector::CollectorBase::Output
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_method(self, name: &'static str) -> TestCaseError {
        TestCaseError::Fail(format!("`{name}()` is implemented incorrectly: {self:?}").into())
    }
}

/// Runs every way of feeding a collector against the same input
/// and checks each output with one predicate.
pub trait CollectorTesterExt {
    fn test_collector(&mut self) -> TestCaseResult;
}

/// Basic collector tester for collectors that never stop accumulating.
pub struct BasicCollectorTester<ItFac, ClFac, Pred, I, C>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub collector_factory: ClFac,
    pub pred: Pred,
}

impl<ItFac, ClFac, Pred, I, C> CollectorTesterExt for BasicCollectorTester<ItFac, ClFac, Pred, I, C>
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    fn test_collector(&mut self) -> TestCaseResult {
        // `collect()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let has_stopped = iter
                .try_for_each(|item| collector.collect(item))
                .is_break();
            prop_assert!(!has_stopped, "`collect()` stopped accumulating");

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect"))?;
        }

        // `collect_many()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let has_stopped = collector.collect_many(&mut iter).is_break();
            prop_assert!(!has_stopped, "`collect_many()` stopped accumulating");

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect_many"))?;
        }

        // `collect_then_finish()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let output = collector.collect_then_finish(&mut iter);

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("collect_then_finish"))?;
        }

        Ok(())
    }
}
