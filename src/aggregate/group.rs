/// The slot a key lands in when it reaches a [`GroupMap`](super::GroupMap).
///
/// Returned by [`GroupMap::group()`](super::GroupMap::group).
pub enum Group<
    Occupied: OccupiedGroup,
    Vacant: VacantGroup<Key = Occupied::Key, Value = Occupied::Value>,
> {
    /// The key has been seen before.
    Occupied(Occupied),

    /// First sighting of the key.
    Vacant(Vacant),
}

impl<Occupied, Vacant> Group<Occupied, Vacant>
where
    Occupied: OccupiedGroup,
    Vacant: VacantGroup<Key = Occupied::Key, Value = Occupied::Value>,
{
    /// The key this slot belongs to, either way.
    #[inline]
    pub fn key(&self) -> &Occupied::Key {
        match self {
            Self::Occupied(group) => group.key(),
            Self::Vacant(group) => group.key(),
        }
    }

    /// Whether the key had a group already.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }
}

/// A group already holding at least one item.
pub trait OccupiedGroup {
    /// The key the group is stored under.
    type Key;

    /// What the group accumulates into.
    type Value;

    /// Returns the group's key.
    fn key(&self) -> &Self::Key;

    /// Returns the group's current value.
    fn value(&self) -> &Self::Value;

    /// Returns the group's current value for updating in place.
    fn value_mut(&mut self) -> &mut Self::Value;
}

/// A group about to be opened by its first item.
pub trait VacantGroup {
    /// The key the group will be stored under.
    type Key;

    /// What the group will accumulate into.
    type Value;

    /// Returns the key that has no group yet.
    fn key(&self) -> &Self::Key;

    /// Stores the group's initial value.
    fn insert(self, value: Self::Value);
}
