use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::info::{FormInfo, GenericInfoCell, MapInfo, Typed};
use crate::ops::{Form, FormKey, FormMut, FormRef, Map, MapIter, impl_cast_fn};

macro_rules! impl_map_common {
    ($map:ty, [$($bounds:tt)*]) => {
        impl<$($bounds)*> Typed for $map {
            fn form_info() -> &'static FormInfo {
                static CELL: GenericInfoCell = GenericInfoCell::new();
                CELL.get_or_insert::<Self>(|| FormInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<$($bounds)*> Form for $map {
            #[inline]
            fn form_ref(&self) -> FormRef<'_> {
                FormRef::Map(self)
            }

            #[inline]
            fn form_mut(&mut self) -> FormMut<'_> {
                FormMut::Map(self)
            }

            impl_cast_fn!();
        }
    };
}

// -----------------------------------------------------------------------------
// HashMap

impl_map_common!(
    HashMap<K, V, S>,
    [K: FormKey + Eq + Hash, V: Form + Default, S: BuildHasher + Default + Send + Sync + 'static]
);

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: FormKey + Eq + Hash,
    V: Form + Default,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn key_is_text(&self) -> bool {
        K::IS_TEXT
    }

    fn get(&self, key: &str) -> Option<&dyn Form> {
        let key = K::from_key(key)?;
        HashMap::get(self, &key).map(|value| value as &dyn Form)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Form> {
        let key = K::from_key(key)?;
        let value: &mut dyn Form = self.entry(key).or_default();
        Some(value)
    }

    fn remove(&mut self, key: &str) -> bool {
        K::from_key(key).is_some_and(|key| HashMap::remove(self, &key).is_some())
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            HashMap::iter(self)
                .filter_map(|(key, value)| Some((key.as_key()?, value as &dyn Form))),
        )
    }
}

// -----------------------------------------------------------------------------
// BTreeMap

impl_map_common!(BTreeMap<K, V>, [K: FormKey + Ord, V: Form + Default]);

impl<K, V> Map for BTreeMap<K, V>
where
    K: FormKey + Ord,
    V: Form + Default,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn key_is_text(&self) -> bool {
        K::IS_TEXT
    }

    fn get(&self, key: &str) -> Option<&dyn Form> {
        let key = K::from_key(key)?;
        BTreeMap::get(self, &key).map(|value| value as &dyn Form)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Form> {
        let key = K::from_key(key)?;
        let value: &mut dyn Form = self.entry(key).or_default();
        Some(value)
    }

    fn remove(&mut self, key: &str) -> bool {
        K::from_key(key).is_some_and(|key| BTreeMap::remove(self, &key).is_some())
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            BTreeMap::iter(self)
                .filter_map(|(key, value)| Some((key.as_key()?, value as &dyn Form))),
        )
    }
}
