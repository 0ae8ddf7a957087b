//! Copy-on-write updates, and keying tagged records by one of their fields.
//!
//! [`Produce`] is the seam to an immutable-update facility: it takes a base value and
//! a recipe that edits a draft of it, and returns the edited value while the base
//! stays untouched. [`CloneOnWrite`] is the plain implementation; a persistent,
//! structurally shared backend can be dropped in by implementing the trait.

use crate::{
    error::{Error, Result},
    record::{PropertyKey, Record},
};

/// An immutable-update facility.
pub trait Produce {
    /// Applies `recipe` to a draft of `base` and returns the result.
    ///
    /// `base` must compare equal to what it was before the call.
    fn produce<T, F>(&self, base: &T, recipe: F) -> T
    where
        T: Clone,
        F: FnOnce(&mut T);
}

/// A [`Produce`] that drafts on a full clone of the base.
///
/// # Examples
///
/// ```
/// use groupwise::produce::{CloneOnWrite, Produce};
///
/// let base = vec![1, 2, 3];
/// let next = CloneOnWrite.produce(&base, |draft| draft.push(4));
///
/// assert_eq!(base, [1, 2, 3]);
/// assert_eq!(next, [1, 2, 3, 4]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CloneOnWrite;

impl Produce for CloneOnWrite {
    #[inline]
    fn produce<T, F>(&self, base: &T, recipe: F) -> T
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        let mut draft = base.clone();
        recipe(&mut draft);
        draft
    }
}

impl<P: Produce + ?Sized> Produce for &P {
    #[inline]
    fn produce<T, F>(&self, base: &T, recipe: F) -> T
    where
        T: Clone,
        F: FnOnce(&mut T),
    {
        (**self).produce(base, recipe)
    }
}

/// Keys each record by the string form of its `field`, and stores it without that field.
///
/// `tag` turns the field's value into a key, or returns [`None`] if that value cannot be one.
/// The other fields are carried over as they are, so they may hold anything [`Clone`].
///
/// Records come out in input order. When two records coerce to the same key, the later
/// one replaces the earlier one's value but keeps its position.
/// The input records are never changed: each stored record is produced through `producer`.
///
/// # Errors
///
/// Stops at the first record that cannot be keyed, returning [`Error::MissingField`] if it
/// lacks `field` and [`Error::NotAKey`] if `tag` rejects the value.
///
/// # Examples
///
/// ```
/// use groupwise::{record, produce::{CloneOnWrite, key_by}};
///
/// let rows = [
///     record! { "id" => "a7", "name" => "left" },
///     record! { "id" => "b2", "name" => "right" },
/// ];
///
/// let by_id = key_by(&CloneOnWrite, &rows, "id", |id| Some(*id)).unwrap();
///
/// assert_eq!(by_id["a7"], record! { "name" => "left" });
/// assert_eq!(by_id["b2"], record! { "name" => "right" });
/// assert!(rows[0].contains_key("id"));
/// ```
pub fn key_by<P, V, K, T>(
    producer: &P,
    records: &[Record<V>],
    field: &str,
    mut tag: T,
) -> Result<Record<Record<V>>>
where
    P: Produce + ?Sized,
    V: Clone,
    K: PropertyKey,
    T: FnMut(&V) -> Option<K>,
{
    let mut keyed = Record::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let key = match record.get(field) {
            Some(value) => tag(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, field, "record has no tag field");

                return Err(Error::MissingField {
                    index,
                    field: field.to_owned(),
                });
            }
        };
        let Some(key) = key else {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, field, "tag field is not a key");

            return Err(Error::NotAKey {
                index,
                field: field.to_owned(),
            });
        };

        let untagged = producer.produce(record, |draft| {
            draft.remove(field);
        });
        keyed.insert(key, untagged);
    }

    Ok(keyed)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::record;

    /// Counts how often it is asked to produce.
    #[derive(Default)]
    struct Counting {
        produced: Cell<usize>,
    }

    impl Produce for Counting {
        fn produce<T, F>(&self, base: &T, recipe: F) -> T
        where
            T: Clone,
            F: FnOnce(&mut T),
        {
            self.produced.set(self.produced.get() + 1);
            CloneOnWrite.produce(base, recipe)
        }
    }

    #[test]
    fn leaves_input_unchanged() {
        let rows = vec![
            record! { "kind" => "x", "size" => "1" },
            record! { "kind" => "y", "size" => "2" },
        ];
        let snapshot = rows.clone();

        let keyed = key_by(&CloneOnWrite, &rows, "kind", |kind| Some(*kind)).unwrap();

        assert_eq!(rows, snapshot);
        assert_eq!(keyed.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert!(keyed.values().all(|row| !row.contains_key("kind")));
    }

    #[test]
    fn goes_through_the_injected_producer() {
        let producer = Counting::default();
        let rows = [record! { "id" => 1 }, record! { "id" => 2 }, record! { "id" => 3 }];

        let keyed = key_by(&producer, &rows, "id", |id| Some(*id)).unwrap();

        assert_eq!(producer.produced.get(), 3);
        assert_eq!(keyed.len(), 3);
        assert!(keyed["2"].is_empty());
    }

    #[test]
    fn later_duplicates_overwrite_in_place() {
        let rows = [
            record! { "id" => "a", "v" => "1" },
            record! { "id" => "b", "v" => "2" },
            record! { "id" => "a", "v" => "3" },
        ];

        let keyed = key_by(&CloneOnWrite, &rows, "id", |id| Some(*id)).unwrap();

        assert_eq!(keyed.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(keyed["a"]["v"], "3");
    }

    #[test]
    fn missing_field_is_reported() {
        let rows = [record! { "id" => "a" }, record! { "name" => "b" }];

        assert_eq!(
            key_by(&CloneOnWrite, &rows, "id", |id| Some(*id)),
            Err(Error::MissingField {
                index: 1,
                field: "id".to_owned(),
            })
        );
        assert_eq!(
            Error::MissingField {
                index: 1,
                field: "id".to_owned(),
            }
            .to_string(),
            "record at index 1 has no `id` field"
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Value {
        Id(u32),
        Text(&'static str),
        List(Vec<u32>),
    }

    #[test]
    fn other_fields_may_be_compound() {
        let rows = [
            record! { "id" => Value::Id(7), "seen" => Value::List(vec![1, 2]) },
            record! { "id" => Value::Id(9), "seen" => Value::List(vec![]) },
        ];

        let keyed = key_by(&CloneOnWrite, &rows, "id", |value| match value {
            Value::Id(id) => Some(*id),
            _ => None,
        })
        .unwrap();

        assert_eq!(keyed.keys().collect::<Vec<_>>(), ["7", "9"]);
        assert_eq!(keyed["7"], record! { "seen" => Value::List(vec![1, 2]) });
    }

    #[test]
    fn rejected_tag_is_reported() {
        let rows = [
            record! { "id" => Value::Id(1) },
            record! { "id" => Value::Text("two") },
            record! { "name" => Value::Text("three") },
        ];

        let keyed = key_by(&CloneOnWrite, &rows, "id", |value| match value {
            Value::Id(id) => Some(*id),
            _ => None,
        });

        assert_eq!(
            keyed,
            Err(Error::NotAKey {
                index: 1,
                field: "id".to_owned(),
            })
        );
    }
}
