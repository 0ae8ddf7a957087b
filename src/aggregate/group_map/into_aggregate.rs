use std::ops::ControlFlow;

use crate::{
    aggregate::{AggregateOp, Group, GroupMap, OccupiedGroup, VacantGroup},
    collector::{Collector, CollectorBase},
};

/// A [`Collector`] that aggregates items into groups.
///
/// This `struct` is created by [`GroupMap::into_aggregate()`].
/// See its documentation for more.
#[derive(Debug, Clone)]
pub struct IntoAggregate<M, Op> {
    map: M,
    op: Op,
}

impl<M, Op> IntoAggregate<M, Op>
where
    M: GroupMap,
    Op: AggregateOp<Key = M::Key, Value = M::Value>,
{
    #[inline]
    pub(super) fn new(map: M, op: Op) -> Self {
        Self { map, op }
    }

    fn collect_impl(&mut self, key: M::Key, item: Op::Item) {
        match self.map.group(key) {
            Group::Occupied(mut group) => self.op.modify(group.value_mut(), item),
            Group::Vacant(group) => {
                let value = self.op.new_value(group.key(), item);
                group.insert(value);
            }
        }
    }
}

impl<M, Op> CollectorBase for IntoAggregate<M, Op> {
    type Output = M;

    #[inline]
    fn finish(self) -> Self::Output {
        self.map
    }
}

impl<M, Op> Collector<(M::Key, Op::Item)> for IntoAggregate<M, Op>
where
    M: GroupMap,
    Op: AggregateOp<Key = M::Key, Value = M::Value>,
{
    #[inline]
    fn collect(&mut self, (key, item): (M::Key, Op::Item)) -> ControlFlow<()> {
        self.collect_impl(key, item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_many(
        &mut self,
        items: impl IntoIterator<Item = (M::Key, Op::Item)>,
    ) -> ControlFlow<()> {
        items
            .into_iter()
            .for_each(|(key, item)| self.collect_impl(key, item));

        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_then_finish(
        mut self,
        items: impl IntoIterator<Item = (M::Key, Op::Item)>,
    ) -> Self::Output {
        items
            .into_iter()
            .for_each(|(key, item)| self.collect_impl(key, item));

        self.map
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashMap;

    use indexmap::IndexMap;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::aggregate::{Bucket, Count, GroupMap};
    use crate::test_utils::{BasicCollectorTester, CollectorTesterExt, PredError};

    proptest! {
        #[test]
        fn all_collect_methods_count(
            pairs in propvec((0..5_u8, any::<i32>()), ..16),
        ) {
            all_collect_methods_count_impl(pairs)?;
        }
    }

    fn all_collect_methods_count_impl(pairs: Vec<(u8, i32)>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || pairs.iter().copied(),
            collector_factory: || IndexMap::<u8, usize>::new().into_aggregate(Count::new()),
            pred: |iter, output, remaining| {
                let mut expected = IndexMap::<u8, usize>::new();
                for (key, _) in iter {
                    *expected.entry(key).or_default() += 1;
                }

                if !expected.iter().eq(output.iter()) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn all_collect_methods_bucket(
            pairs in propvec((0..5_u8, any::<i32>()), ..16),
        ) {
            all_collect_methods_bucket_impl(pairs)?;
        }
    }

    fn all_collect_methods_bucket_impl(pairs: Vec<(u8, i32)>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || pairs.iter().copied(),
            collector_factory: || {
                HashMap::<u8, Vec<i32>>::new().into_aggregate(Bucket::new())
            },
            pred: |iter, output, remaining| {
                let mut expected = HashMap::<u8, Vec<i32>>::new();
                for (key, num) in iter {
                    expected.entry(key).or_default().push(num);
                }

                if expected != output {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
