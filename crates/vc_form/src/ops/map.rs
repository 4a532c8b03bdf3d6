use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Form;

/// Iterator over the entries of a [`Map`], keys rendered as text.
pub type MapIter<'a> = Box<dyn Iterator<Item = (Cow<'a, str>, &'a dyn Form)> + 'a>;

/// A keyed collection.
///
/// Only maps with text keys take part in decoding and encoding; for any other
/// key type `key_is_text` is `false` and the engines report a structural error.
pub trait Map: Form {
    fn len(&self) -> usize;

    fn key_is_text(&self) -> bool;

    fn get(&self, key: &str) -> Option<&dyn Form>;

    /// The value stored at `key`, inserting a default one first if absent.
    ///
    /// `None` when `key` cannot be turned into the map's key type.
    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Form>;

    /// Remove the entry at `key`, returning whether one was present.
    fn remove(&mut self, key: &str) -> bool;

    fn iter(&self) -> MapIter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// FormKey

/// Conversion between map keys and path segments.
///
/// Text keys convert both ways. Other key types are accepted by the type
/// system so that a map such as `HashMap<i32, String>` has a description, but
/// they report `IS_TEXT = false` and convert neither way.
pub trait FormKey: Send + Sync + 'static {
    const IS_TEXT: bool;

    fn from_key(key: &str) -> Option<Self>
    where
        Self: Sized;

    fn as_key(&self) -> Option<Cow<'_, str>>;
}

macro_rules! impl_text_key {
    ($($ty:ty),* $(,)?) => {$(
        impl FormKey for $ty {
            const IS_TEXT: bool = true;

            #[inline]
            fn from_key(key: &str) -> Option<Self> {
                Some(key.into())
            }

            #[inline]
            fn as_key(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Borrowed(&**self))
            }
        }
    )*};
}

macro_rules! impl_non_text_key {
    ($($ty:ty),* $(,)?) => {$(
        impl FormKey for $ty {
            const IS_TEXT: bool = false;

            #[inline]
            fn from_key(_: &str) -> Option<Self> {
                None
            }

            #[inline]
            fn as_key(&self) -> Option<Cow<'_, str>> {
                None
            }
        }
    )*};
}

impl_text_key!(String, Box<str>, Arc<str>);

impl_non_text_key!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl FormKey for Cow<'static, str> {
    const IS_TEXT: bool = true;

    #[inline]
    fn from_key(key: &str) -> Option<Self> {
        Some(Cow::Owned(key.into()))
    }

    #[inline]
    fn as_key(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}
