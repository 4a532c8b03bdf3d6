//! Access traits the engines dispatch on.
//!
//! [`Form::form_ref`] and [`Form::form_mut`] expose a value through one of the
//! kind traits below, mirroring the variants of
//! [`FormInfo`](crate::info::FormInfo).

// -----------------------------------------------------------------------------
// Modules

mod form;
mod list;
mod map;
mod optional;
mod record;
mod scalar;
mod text;

// -----------------------------------------------------------------------------
// Exports

pub use form::{Form, FormMut, FormRef};
pub use list::{Array, ItemIter, List};
pub use map::{FormKey, Map, MapIter};
pub use optional::Optional;
pub use record::{FieldIter, Record};
pub use scalar::Scalar;
pub use text::FormText;

pub(crate) use form::impl_cast_fn;
