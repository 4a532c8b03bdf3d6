//! Per-type descriptions.
//!
//! Every type the codec handles has one [`FormInfo`], computed once and kept
//! for the lifetime of the process. The variant says how the engines treat the
//! type: a record with tagged fields, a sequence, a string-keyed map, an
//! optional slot, a dynamic [`Value`](crate::Value), a scalar, a type with its
//! own text codec, or an unsupported (opaque) kind.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod container_info;
mod form_info;
mod record_info;
mod scalar_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericInfoCell, NonGenericInfoCell};
pub use container_info::{ArrayInfo, ListInfo, MapInfo, OptionalInfo};
pub use form_info::{FormInfo, FormKind, Type};
pub use record_info::{FieldInfo, RecordInfo};
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use typed::{DynamicTyped, Typed};

pub(crate) use cell::{TypeIdMap, type_id_map};
