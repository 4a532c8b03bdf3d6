use core::any::Any;

use crate::info::Type;
use crate::ops::FormKey;

/// A growable sequence of `item`.
#[derive(Debug)]
pub struct ListInfo {
    ty: Type,
    item: Type,
}

impl ListInfo {
    pub fn new<TList: Any, TItem: Any>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item: Type::of::<TItem>(),
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn item(&self) -> &Type {
        &self.item
    }
}

/// A fixed-size sequence. Encodes like a list, cannot be decoded into.
#[derive(Debug)]
pub struct ArrayInfo {
    ty: Type,
    item: Type,
    capacity: usize,
}

impl ArrayInfo {
    pub fn new<TArray: Any, TItem: Any>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item: Type::of::<TItem>(),
            capacity,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn item(&self) -> &Type {
        &self.item
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A keyed map. Only maps whose keys are text can be decoded or encoded.
#[derive(Debug)]
pub struct MapInfo {
    ty: Type,
    key: Type,
    value: Type,
    key_is_text: bool,
}

impl MapInfo {
    pub fn new<TMap: Any, TKey: FormKey, TValue: Any>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key: Type::of::<TKey>(),
            value: Type::of::<TValue>(),
            key_is_text: TKey::IS_TEXT,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn key(&self) -> &Type {
        &self.key
    }

    #[inline]
    pub const fn value(&self) -> &Type {
        &self.value
    }

    #[inline]
    pub const fn key_is_text(&self) -> bool {
        self.key_is_text
    }
}

/// A slot that may be empty, filled with a default value when decoded into.
#[derive(Debug)]
pub struct OptionalInfo {
    ty: Type,
    inner: Type,
}

impl OptionalInfo {
    pub fn new<TOption: Any, TInner: Any>() -> Self {
        Self {
            ty: Type::of::<TOption>(),
            inner: Type::of::<TInner>(),
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn inner(&self) -> &Type {
        &self.inner
    }
}
