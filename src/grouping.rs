//! Count-by and group-by over any [`Shape`].
//!
//! Every function here walks its source exactly once, in the source's iteration order,
//! and returns a freshly allocated result whose keys appear in first-occurrence order.
//! The source is only borrowed, so it is never changed.
//!
//! Results come in two flavors:
//!
//! - keyed by the classifier's own value in an [`IndexMap`] (`count_by`, `group_by`, ...),
//!   which requires the key to be [`Hash`] + [`Eq`];
//! - keyed by the key's string form in a [`Record`] (`count_by_record`, `group_by_record`, ...),
//!   which requires the key to be a [`PropertyKey`]. Keys with the same string form
//!   (`1` and `"1"`) end up in the same group.
//!
//! The `try_` variants take fallible callbacks and stop at the first error, returning it as is.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    aggregate::{AggregateOp, Bucket, Count, GroupMap},
    collector::{Collector, IteratorExt},
    record::{PropertyKey, Record},
    shape::{Rebuild, Shape},
};

/// The one traversal every aggregation in this module goes through.
fn aggregate<S, M, Op, F>(source: &S, map: M, op: Op, keyed: F) -> M
where
    S: Shape,
    M: GroupMap,
    Op: AggregateOp<Key = M::Key, Value = M::Value>,
    F: FnMut(S::Unit) -> (M::Key, Op::Item),
{
    #[cfg(feature = "tracing")]
    tracing::trace!(shape = %S::KIND, units = source.len(), "aggregating");

    source.units().feed_into(map.into_aggregate(op).map(keyed))
}

fn try_aggregate<S, M, Op, F, E>(source: &S, map: M, op: Op, keyed: F) -> Result<M, E>
where
    S: Shape,
    M: GroupMap,
    Op: AggregateOp<Key = M::Key, Value = M::Value>,
    F: FnMut(S::Unit) -> Result<(M::Key, Op::Item), E>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(shape = %S::KIND, units = source.len(), "aggregating fallibly");

    itertools::process_results(source.units().map(keyed), |pairs| {
        pairs.feed_into(map.into_aggregate(op))
    })
}

/// Counts how many units of `source` fall under each key `classify` returns.
///
/// The counts add up to the number of units in `source`.
///
/// # Examples
///
/// ```
/// use groupwise::count_by;
///
/// let counts = count_by(&vec![1, 2, 3, 4, 5], |num| num % 2 == 0);
///
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), [(false, 3), (true, 2)]);
/// ```
pub fn count_by<S, B, F>(source: &S, mut classify: F) -> IndexMap<B, usize>
where
    S: Shape,
    B: Hash + Eq,
    F: FnMut(&S::Unit) -> B,
{
    aggregate(source, IndexMap::new(), Count::new(), |unit| {
        (classify(&unit), unit)
    })
}

/// Same as [`count_by()`], but keyed by the string form of each key.
///
/// # Examples
///
/// ```
/// use groupwise::{count_by_record, record};
///
/// let source = record! { "a" => 1, "b" => 2, "c" => 2, "d" => 4 };
/// let counts = count_by_record(&source, |(_, num)| num % 2 == 0);
///
/// assert_eq!(counts, record! { "false" => 1, "true" => 3 });
/// ```
pub fn count_by_record<S, B, F>(source: &S, mut classify: F) -> Record<usize>
where
    S: Shape,
    B: PropertyKey,
    F: FnMut(&S::Unit) -> B,
{
    aggregate(source, Record::new(), Count::new(), |unit| {
        (classify(&unit).to_property_key(), unit)
    })
}

/// Splits `source` into groups of the same shape, one per key `classify` returns.
///
/// Sequences group into [`Vec`]s, sets into [`IndexSet`]s, mappings into [`IndexMap`]s
/// and records into [`Record`]s. Within a group, units keep their source order.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use groupwise::group_by;
///
/// let source = IndexMap::from([("a", 1), ("b", 2), ("c", 2), ("d", 3)]);
/// let groups = group_by(&source, |&(_, num)| num % 2 == 0);
///
/// assert_eq!(groups[&false], IndexMap::from([("a", 1), ("d", 3)]));
/// assert_eq!(groups[&true], IndexMap::from([("b", 2), ("c", 2)]));
/// ```
///
/// [`IndexSet`]: indexmap::IndexSet
pub fn group_by<S, B, F>(
    source: &S,
    classify: F,
) -> IndexMap<B, <S as Rebuild<<S as Shape>::Unit>>::Bucket>
where
    S: Shape + Rebuild<<S as Shape>::Unit>,
    B: Hash + Eq,
    F: FnMut(&S::Unit) -> B,
{
    group_by_with(source, classify, |unit| unit)
}

/// Same as [`group_by()`], but each unit goes through `project` before landing in its group.
///
/// `project` runs after `classify`, so `classify` always sees the original unit.
/// For mappings and records, `project` receives and returns `(key, value)` pairs.
///
/// # Examples
///
/// ```
/// use groupwise::group_by_with;
///
/// let words = vec!["apple", "bob", "avocado", "cat"];
/// let lengths = group_by_with(&words, |word| word.as_bytes()[0], |word| word.len());
///
/// assert_eq!(lengths[&b'a'], [5, 7]);
/// assert_eq!(lengths[&b'c'], [3]);
/// ```
pub fn group_by_with<S, B, U, F, P>(
    source: &S,
    mut classify: F,
    mut project: P,
) -> IndexMap<B, <S as Rebuild<U>>::Bucket>
where
    S: Rebuild<U>,
    B: Hash + Eq,
    F: FnMut(&S::Unit) -> B,
    P: FnMut(S::Unit) -> U,
{
    aggregate(source, IndexMap::new(), Bucket::new(), |unit| {
        let key = classify(&unit);
        (key, project(unit))
    })
}

/// Same as [`group_by()`], but keyed by the string form of each key.
///
/// # Examples
///
/// ```
/// use groupwise::{group_by_record, record};
///
/// let source = record! { "a" => 1, "b" => 2, "c" => 3 };
/// let groups = group_by_record(&source, |(_, num)| *num > 1);
///
/// assert_eq!(groups["false"], record! { "a" => 1 });
/// assert_eq!(groups["true"], record! { "b" => 2, "c" => 3 });
/// ```
pub fn group_by_record<S, B, F>(
    source: &S,
    classify: F,
) -> Record<<S as Rebuild<<S as Shape>::Unit>>::Bucket>
where
    S: Shape + Rebuild<<S as Shape>::Unit>,
    B: PropertyKey,
    F: FnMut(&S::Unit) -> B,
{
    group_by_record_with(source, classify, |unit| unit)
}

/// Same as [`group_by_with()`], but keyed by the string form of each key.
pub fn group_by_record_with<S, B, U, F, P>(
    source: &S,
    mut classify: F,
    mut project: P,
) -> Record<<S as Rebuild<U>>::Bucket>
where
    S: Rebuild<U>,
    B: PropertyKey,
    F: FnMut(&S::Unit) -> B,
    P: FnMut(S::Unit) -> U,
{
    aggregate(source, Record::new(), Bucket::new(), |unit| {
        let key = classify(&unit).to_property_key();
        (key, project(unit))
    })
}

/// Fallible [`count_by()`]. Returns the first error `classify` produces.
///
/// # Examples
///
/// ```
/// use groupwise::try_count_by;
///
/// let source = vec!["1", "2", "x", "3"];
/// let counts = try_count_by(&source, |text| text.parse::<u8>().map(|num| num % 2));
///
/// assert!(counts.is_err());
/// ```
pub fn try_count_by<S, B, E, F>(source: &S, mut classify: F) -> Result<IndexMap<B, usize>, E>
where
    S: Shape,
    B: Hash + Eq,
    F: FnMut(&S::Unit) -> Result<B, E>,
{
    try_aggregate(source, IndexMap::new(), Count::new(), |unit| {
        Ok((classify(&unit)?, unit))
    })
}

/// Fallible [`count_by_record()`]. Returns the first error `classify` produces.
pub fn try_count_by_record<S, B, E, F>(source: &S, mut classify: F) -> Result<Record<usize>, E>
where
    S: Shape,
    B: PropertyKey,
    F: FnMut(&S::Unit) -> Result<B, E>,
{
    try_aggregate(source, Record::new(), Count::new(), |unit| {
        Ok((classify(&unit)?.to_property_key(), unit))
    })
}

/// Fallible [`group_by_with()`]. Returns the first error `classify` or `project` produces.
///
/// # Examples
///
/// ```
/// use groupwise::try_group_by_with;
///
/// let source = vec!["10", "3", "12"];
/// let groups = try_group_by_with(
///     &source,
///     |text| Ok::<_, std::num::ParseIntError>(text.len()),
///     |text| text.parse::<u32>(),
/// )
/// .unwrap();
///
/// assert_eq!(groups[&2], [10, 12]);
/// assert_eq!(groups[&1], [3]);
/// ```
pub fn try_group_by_with<S, B, U, E, F, P>(
    source: &S,
    mut classify: F,
    mut project: P,
) -> Result<IndexMap<B, <S as Rebuild<U>>::Bucket>, E>
where
    S: Rebuild<U>,
    B: Hash + Eq,
    F: FnMut(&S::Unit) -> Result<B, E>,
    P: FnMut(S::Unit) -> Result<U, E>,
{
    try_aggregate(source, IndexMap::new(), Bucket::new(), |unit| {
        let key = classify(&unit)?;
        Ok((key, project(unit)?))
    })
}

/// Fallible [`group_by_record_with()`]. Returns the first error `classify` or `project` produces.
pub fn try_group_by_record_with<S, B, U, E, F, P>(
    source: &S,
    mut classify: F,
    mut project: P,
) -> Result<Record<<S as Rebuild<U>>::Bucket>, E>
where
    S: Rebuild<U>,
    B: PropertyKey,
    F: FnMut(&S::Unit) -> Result<B, E>,
    P: FnMut(S::Unit) -> Result<U, E>,
{
    try_aggregate(source, Record::new(), Bucket::new(), |unit| {
        let key = classify(&unit)?.to_property_key();
        Ok((key, project(unit)?))
    })
}


#[cfg(test)]
mod proptests {
    use indexmap::{IndexMap, IndexSet};
    use proptest::collection::{hash_set as prophashset, vec as propvec};
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn sequence_partition(
            nums in propvec(any::<i16>(), ..32),
            modulus in 1..6_i16,
        ) {
            let snapshot = nums.clone();
            let groups = group_by(&nums, |num| num.rem_euclid(modulus));

            prop_assert_eq!(&nums, &snapshot);
            prop_assert!(groups.values().all(|bucket| !bucket.is_empty()));
            prop_assert!(groups
                .iter()
                .all(|(key, bucket)| bucket.iter().all(|num| num.rem_euclid(modulus) == *key)));

            // Each bucket is the order-preserving subsequence of its key.
            for (key, bucket) in &groups {
                let expected: Vec<_> = nums
                    .iter()
                    .copied()
                    .filter(|num| num.rem_euclid(modulus) == *key)
                    .collect();
                prop_assert_eq!(bucket, &expected);
            }

            let total: usize = groups.values().map(Vec::len).sum();
            prop_assert_eq!(total, nums.len());
        }

        #[test]
        fn count_conservation(
            nums in propvec(any::<u8>(), ..32),
            modulus in 1..6_u8,
        ) {
            let counts = count_by(&nums, |num| num % modulus);
            prop_assert_eq!(counts.values().sum::<usize>(), nums.len());

            let counts = count_by_record(&nums, |num| num % modulus);
            prop_assert_eq!(counts.values().sum::<usize>(), nums.len());
        }

        #[test]
        fn counts_match_group_sizes(
            nums in propvec(any::<u8>(), ..32),
            modulus in 1..6_u8,
        ) {
            let counts = count_by(&nums, |num| num % modulus);
            let groups = group_by(&nums, |num| num % modulus);

            prop_assert!(counts.keys().eq(groups.keys()));
            prop_assert!(counts
                .values()
                .copied()
                .eq(groups.values().map(Vec::len)));
        }

        #[test]
        fn set_partition(
            nums in prophashset(any::<u8>(), ..32),
            modulus in 1..6_u8,
        ) {
            let source: IndexSet<u8> = nums.into_iter().collect();
            let snapshot = source.clone();
            let groups = group_by(&source, |num| num % modulus);

            prop_assert_eq!(&source, &snapshot);
            prop_assert!(groups.values().all(|bucket| !bucket.is_empty()));

            let mut rejoined: Vec<u8> = groups.values().flatten().copied().collect();
            let mut expected: Vec<u8> = source.iter().copied().collect();
            rejoined.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(rejoined, expected);
        }

        #[test]
        fn mapping_partition(
            pairs in propvec((any::<u16>(), any::<i8>()), ..32),
        ) {
            let source: IndexMap<u16, i8> = pairs.into_iter().collect();
            let snapshot = source.clone();
            let groups = group_by(&source, |(_, value)| value.signum());

            prop_assert_eq!(&source, &snapshot);
            for (sign, bucket) in &groups {
                prop_assert!(!bucket.is_empty());
                let expected: Vec<_> = source
                    .iter()
                    .filter(|(_, value)| value.signum() == *sign)
                    .collect();
                prop_assert!(bucket.iter().eq(expected));
            }
        }

        #[test]
        fn record_partition(
            pairs in propvec(("[a-f]{1,2}", any::<i8>()), ..24),
        ) {
            let source: Record<i8> = pairs.into_iter().collect();
            let snapshot = source.clone();
            let groups = group_by_record(&source, |(_, value)| *value >= 0);

            prop_assert_eq!(&source, &snapshot);
            let total: usize = groups.values().map(Record::len).sum();
            prop_assert_eq!(total, source.len());
            for (key, bucket) in groups.iter() {
                prop_assert!(!bucket.is_empty());
                prop_assert!(bucket
                    .iter()
                    .all(|(_, value)| (*value >= 0).to_property_key() == key));
            }
        }
    }
}
