use alloc::boxed::Box;
use core::any::Any;

use crate::Value;
use crate::info::{DynamicTyped, FormKind};
use crate::ops::{Array, FormText, List, Map, Optional, Record, Scalar};

/// A value the form codec can decode into and encode from.
///
/// Usually implemented with `#[derive(Form)]` for records and with
/// [`impl_form_text!`](crate::impl_form_text) for types that have their own
/// text representation.
pub trait Form: DynamicTyped + Any + Send + Sync {
    /// Shared access by kind.
    fn form_ref(&self) -> FormRef<'_>;

    /// Exclusive access by kind.
    fn form_mut(&mut self) -> FormMut<'_>;

    fn as_form(&self) -> &dyn Form;

    fn as_form_mut(&mut self) -> &mut dyn Form;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Form {
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// The path of the concrete type, for messages.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.dyn_form_info().type_path()
    }
}

// -----------------------------------------------------------------------------
// FormRef / FormMut

/// Shared reference to a value, split by kind.
pub enum FormRef<'a> {
    Record(&'a dyn Record),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Dynamic(&'a Value),
    Scalar(&'a dyn Scalar),
    Text(&'a dyn FormText),
    Opaque(&'a dyn Form),
}

/// Exclusive reference to a value, split by kind.
pub enum FormMut<'a> {
    Record(&'a mut dyn Record),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Dynamic(&'a mut Value),
    Scalar(&'a mut dyn Scalar),
    Text(&'a mut dyn FormText),
    Opaque(&'a mut dyn Form),
}

macro_rules! impl_kind_fn {
    ($ty:ident) => {
        impl $ty<'_> {
            pub const fn kind(&self) -> FormKind {
                match self {
                    Self::Record(_) => FormKind::Record,
                    Self::List(_) => FormKind::List,
                    Self::Array(_) => FormKind::Array,
                    Self::Map(_) => FormKind::Map,
                    Self::Optional(_) => FormKind::Optional,
                    Self::Dynamic(_) => FormKind::Dynamic,
                    Self::Scalar(_) => FormKind::Scalar,
                    Self::Text(_) => FormKind::Text,
                    Self::Opaque(_) => FormKind::Opaque,
                }
            }
        }
    };
}

impl_kind_fn!(FormRef);
impl_kind_fn!(FormMut);

// -----------------------------------------------------------------------------
// Helper

/// Fill in the casting methods of [`Form`].
macro_rules! impl_cast_fn {
    () => {
        #[inline]
        fn as_form(&self) -> &dyn $crate::Form {
            self
        }

        #[inline]
        fn as_form_mut(&mut self) -> &mut dyn $crate::Form {
            self
        }

        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(
            self: ::alloc::boxed::Box<Self>,
        ) -> ::alloc::boxed::Box<dyn ::core::any::Any> {
            self
        }
    };
}

pub(crate) use impl_cast_fn;
