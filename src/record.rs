//! A plain key-value record and the coercion of bucket keys into record keys.
//!
//! A [`Record`] is keyed by strings only and remembers insertion order.
//! Anything used as a record key goes through [`PropertyKey`] first, so
//! `true` becomes `"true"` and `1` becomes `"1"`. Keys that coerce to the same
//! string address the same entry.

use std::{borrow::Borrow, borrow::Cow, fmt::Debug, hash::Hash, ops::Index};

use indexmap::{IndexMap, map};

/// An insertion-ordered record with string keys.
///
/// Re-inserting an existing key replaces its value but keeps its position.
///
/// # Examples
///
/// ```
/// use groupwise::{record, record::Record};
///
/// let mut scores = record! { "ann" => 3, "bob" => 5 };
/// scores.insert(true, 1);
/// scores.insert("ann", 4);
///
/// assert_eq!(scores.keys().collect::<Vec<_>>(), ["ann", "bob", "true"]);
/// assert_eq!(scores["ann"], 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Record<V> {
    fields: IndexMap<String, V>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Creates an empty record with room for at least `capacity` fields.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a value under the coerced `key` and returns the value it replaced, if any.
    pub fn insert(&mut self, key: impl PropertyKey, value: V) -> Option<V> {
        self.fields.insert(key.to_property_key(), value)
    }

    /// Returns the value of a field, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.get(key)
    }

    /// Returns a mutable reference to the value of a field, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.get_mut(key)
    }

    /// Whether the record has a field named `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.contains_key(key)
    }

    /// Removes a field, keeping the relative order of the others.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.shift_remove(key)
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + Clone + '_ {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over the field names in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over the field values in insertion order.
    pub fn values(&self) -> map::Values<'_, String, V> {
        self.fields.values()
    }

    pub(crate) fn entry(&mut self, key: String) -> map::Entry<'_, String, V> {
        self.fields.entry(key)
    }
}

impl<V> Default for Record<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for Record<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<V, Q> Index<&Q> for Record<V>
where
    String: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        &self.fields[key]
    }
}

impl<K: PropertyKey, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K: PropertyKey, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.fields.extend(
            iter.into_iter()
                .map(|(key, value)| (key.to_property_key(), value)),
        );
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = map::IntoIter<String, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<V> From<IndexMap<String, V>> for Record<V> {
    #[inline]
    fn from(fields: IndexMap<String, V>) -> Self {
        Self { fields }
    }
}

/// Builds a [`Record`] from `key => value` pairs.
///
/// Keys may be any [`PropertyKey`].
///
/// ```
/// use groupwise::record;
///
/// let flags = record! { true => "yes", 0 => "zero" };
///
/// assert_eq!(flags["true"], "yes");
/// assert_eq!(flags["0"], "zero");
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::record::Record::new();
        $(record.insert($key, $value);)+
        record
    }};
}

/// A value that can be used as a [`Record`] key.
///
/// Coercion follows the usual string form of each type: booleans become
/// `"true"`/`"false"`, integers their decimal digits, strings themselves.
/// It is deliberately not implemented for compound types, so an arbitrary
/// value can never silently collapse into a shared placeholder key.
pub trait PropertyKey {
    /// Returns the string form used as the record key.
    fn to_property_key(&self) -> String;
}

impl PropertyKey for str {
    #[inline]
    fn to_property_key(&self) -> String {
        self.to_owned()
    }
}

impl PropertyKey for String {
    #[inline]
    fn to_property_key(&self) -> String {
        self.clone()
    }
}

impl PropertyKey for Cow<'_, str> {
    #[inline]
    fn to_property_key(&self) -> String {
        self.clone().into_owned()
    }
}

impl<T: PropertyKey + ?Sized> PropertyKey for &T {
    #[inline]
    fn to_property_key(&self) -> String {
        (**self).to_property_key()
    }
}

macro_rules! property_key_impls {
    ($($ty:ty)*) => {
        $(
            impl PropertyKey for $ty {
                #[inline]
                fn to_property_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

property_key_impls!(bool char i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize);
