use std::{
    collections::{BTreeMap, HashMap, btree_map, hash_map},
    hash::{BuildHasher, Hash},
};

use indexmap::{IndexMap, map as index_map};

use crate::{
    aggregate::{Group, GroupMap, OccupiedGroup, VacantGroup},
    record::Record,
};

macro_rules! group_impls {
    ($entry_mod:ident, $($gen:ident),* $(; $($bound:tt)*)?) => {
        impl<'a, $($gen),*> OccupiedGroup for $entry_mod::OccupiedEntry<'a, $($gen),*>
        $(where $($bound)*)?
        {
            type Key = K;

            type Value = V;

            #[inline]
            fn key(&self) -> &Self::Key {
                self.key()
            }

            #[inline]
            fn value(&self) -> &Self::Value {
                self.get()
            }

            #[inline]
            fn value_mut(&mut self) -> &mut Self::Value {
                self.get_mut()
            }
        }

        impl<'a, $($gen),*> VacantGroup for $entry_mod::VacantEntry<'a, $($gen),*>
        $(where $($bound)*)?
        {
            type Key = K;

            type Value = V;

            #[inline]
            fn key(&self) -> &Self::Key {
                self.key()
            }

            #[inline]
            fn insert(self, value: Self::Value) {
                self.insert(value);
            }
        }
    };
}

group_impls!(index_map, K, V);
group_impls!(hash_map, K, V);
group_impls!(btree_map, K, V; K: Ord);

impl<K, V, S> GroupMap for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;

    type Value = V;

    type Occupied<'a>
        = index_map::OccupiedEntry<'a, K, V>
    where
        Self: 'a;

    type Vacant<'a>
        = index_map::VacantEntry<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn group(&mut self, key: Self::Key) -> Group<Self::Occupied<'_>, Self::Vacant<'_>> {
        match self.entry(key) {
            index_map::Entry::Occupied(entry) => Group::Occupied(entry),
            index_map::Entry::Vacant(entry) => Group::Vacant(entry),
        }
    }
}

/// Groups are keyed by the already-coerced property key.
impl<V> GroupMap for Record<V> {
    type Key = String;

    type Value = V;

    type Occupied<'a>
        = index_map::OccupiedEntry<'a, String, V>
    where
        Self: 'a;

    type Vacant<'a>
        = index_map::VacantEntry<'a, String, V>
    where
        Self: 'a;

    #[inline]
    fn group(&mut self, key: Self::Key) -> Group<Self::Occupied<'_>, Self::Vacant<'_>> {
        match self.entry(key) {
            index_map::Entry::Occupied(entry) => Group::Occupied(entry),
            index_map::Entry::Vacant(entry) => Group::Vacant(entry),
        }
    }
}

impl<K, V, S> GroupMap for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;

    type Value = V;

    type Occupied<'a>
        = hash_map::OccupiedEntry<'a, K, V>
    where
        Self: 'a;

    type Vacant<'a>
        = hash_map::VacantEntry<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn group(&mut self, key: Self::Key) -> Group<Self::Occupied<'_>, Self::Vacant<'_>> {
        match self.entry(key) {
            hash_map::Entry::Occupied(entry) => Group::Occupied(entry),
            hash_map::Entry::Vacant(entry) => Group::Vacant(entry),
        }
    }
}

impl<K, V> GroupMap for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;

    type Value = V;

    type Occupied<'a>
        = btree_map::OccupiedEntry<'a, K, V>
    where
        Self: 'a;

    type Vacant<'a>
        = btree_map::VacantEntry<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn group(&mut self, key: Self::Key) -> Group<Self::Occupied<'_>, Self::Vacant<'_>> {
        match self.entry(key) {
            btree_map::Entry::Occupied(entry) => Group::Occupied(entry),
            btree_map::Entry::Vacant(entry) => Group::Vacant(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{
        aggregate::{Bucket, Count, GroupMap},
        prelude::*,
        record::Record,
    };

    #[test]
    fn record_groups_by_coerced_key() {
        let counts = [("1", 'a'), ("2", 'b'), ("1", 'c')]
            .into_iter()
            .map(|(key, ch)| (key.to_owned(), ch))
            .feed_into(Record::<usize>::new().into_aggregate(Count::new()));

        assert_eq!(counts.iter().collect::<Vec<_>>(), [("1", &2), ("2", &1)]);
    }

    #[test]
    fn btree_map_sorts_groups() {
        let groups = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')]
            .into_iter()
            .feed_into(BTreeMap::<i32, Vec<char>>::new().into_aggregate(Bucket::new()));

        assert_eq!(
            groups.into_iter().collect::<Vec<_>>(),
            [(1, vec!['b']), (2, vec!['d']), (3, vec!['a', 'c'])]
        );
    }
}
