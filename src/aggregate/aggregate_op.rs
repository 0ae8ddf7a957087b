/// Decides what a group holds and how each item lands in it.
///
/// An op never sees an empty group: [`new_value()`](AggregateOp::new_value) is handed
/// the item that opens the group, and [`modify()`](AggregateOp::modify) every item after it.
pub trait AggregateOp {
    /// The key of each group.
    type Key;

    /// The value stored for each group.
    type Value;

    /// The item being aggregated.
    type Item;

    /// Creates the value of a new group from its first item.
    fn new_value(&mut self, key: &Self::Key, item: Self::Item) -> Self::Value;

    /// Folds a further item into an existing group's value.
    fn modify(&mut self, value: &mut Self::Value, item: Self::Item);
}
