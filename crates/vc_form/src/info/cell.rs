//! Static storage for [`FormInfo`].
//!
//! A `static` declared inside a generic function is shared by every
//! instantiation, so generic types key their info by [`TypeId`] instead of
//! relying on the `static` alone.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::FormInfo;

pub(crate) type TypeIdMap<V> = HashMap<TypeId, V, FixedState>;

const TYPE_ID_SEED: u64 = 0x5f0e_2d1c_9a3b_4c87;

#[inline]
pub(crate) const fn type_id_map<V>() -> TypeIdMap<V> {
    HashMap::with_hasher(FixedState::with_seed(TYPE_ID_SEED))
}

// -----------------------------------------------------------------------------
// NonGenericInfoCell

/// Info storage for a non-generic type.
///
/// ```
/// use vc_form::info::{FieldInfo, FormInfo, NonGenericInfoCell, RecordInfo, Typed};
///
/// struct Point { x: i32, y: i32 }
///
/// impl Typed for Point {
///     fn form_info() -> &'static FormInfo {
///         static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
///         CELL.get_or_init(|| FormInfo::Record(RecordInfo::new::<Self>(&[
///             FieldInfo::new("x", ""),
///             FieldInfo::new("y", ""),
///         ])))
///     }
/// }
///
/// assert_eq!(Point::form_info().as_record().unwrap().field_len(), 2);
/// ```
pub struct NonGenericInfoCell(OnceLock<FormInfo>);

impl NonGenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Return the stored info, computing it on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> FormInfo) -> &FormInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericInfoCell

/// Info storage for generic types, one entry per instantiation.
///
/// Entries are leaked on insertion and live for the rest of the process.
pub struct GenericInfoCell(RwLock<TypeIdMap<&'static FormInfo>>);

impl GenericInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(type_id_map()))
    }

    /// Return the info stored for `G`, computing it on first access.
    ///
    /// Concurrent first accesses may both run `f`; only one result is kept.
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> FormInfo) -> &'static FormInfo {
        let type_id = TypeId::of::<G>();

        let read = self.0.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(&info) = read.get(&type_id) {
            return info;
        }
        drop(read);

        let info = f();
        let mut write = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *write
            .entry(type_id)
            .or_insert_with(|| &*Box::leak(Box::new(info)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{ScalarInfo, ScalarKind};

    #[test]
    fn generic_cell_keys_by_type() {
        static CELL: GenericInfoCell = GenericInfoCell::new();

        let a = CELL.get_or_insert::<u8>(|| {
            FormInfo::Scalar(ScalarInfo::new::<u8>(ScalarKind::Uint(8)))
        });
        let b = CELL.get_or_insert::<u16>(|| {
            FormInfo::Scalar(ScalarInfo::new::<u16>(ScalarKind::Uint(16)))
        });
        let again = CELL.get_or_insert::<u8>(|| unreachable!());

        assert!(core::ptr::eq(a, again));
        assert_eq!(a.type_path(), "u8");
        assert_eq!(b.type_path(), "u16");
    }
}
