//! [`Collector`]s for the collections this crate groups into.
//!
//! Each collection collects into itself, so its [`Output`] is the collection.
//!
//! [`Output`]: crate::collector::CollectorBase::Output

use std::{
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

use indexmap::{IndexMap, IndexSet};

use crate::{
    collector::{Collector, CollectorBase},
    record::Record,
};

macro_rules! collector_impl {
    (
        $name:ident<$($generic:ident),*>, $item_ty:ty,
        $item_pat:pat_param, $push_method_name:ident($($item_args:expr),*),
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<$($generic),*> CollectorBase for $name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Output = Self;

            #[inline]
            fn finish(self) -> Self::Output {
                self
            }
        }

        impl<$($generic),*> Collector<$item_ty> for $name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn collect(&mut self, $item_pat: $item_ty) -> ControlFlow<()> {
                // Sets and maps report whether the item was new.
                // That is not a signal to stop accumulating, so it is ignored.
                self.$push_method_name($($item_args),*);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_many(&mut self, items: impl IntoIterator<Item = $item_ty>) -> ControlFlow<()> {
                self.extend(items);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_then_finish(mut self, items: impl IntoIterator<Item = $item_ty>) -> Self::Output {
                self.extend(items);
                self
            }
        }
    };
}

collector_impl!(Vec<T>, T, item, push(item),);

collector_impl!(
    IndexSet<T, S>, T,
    item, insert(item),
    T: Hash, T: Eq, S: BuildHasher,
);

collector_impl!(
    IndexMap<K, V, S>, (K, V),
    (key, value), insert(key, value),
    K: Hash, K: Eq, S: BuildHasher,
);

collector_impl!(Record<V>, (String, V), (key, value), insert(key, value),);
