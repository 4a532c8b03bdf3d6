#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate through an absolute path, which also has to
// resolve inside the crate's own tests.
extern crate self as vc_form;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod error;
mod value;

pub mod de;
pub mod impls;
pub mod info;
pub mod infer;
pub mod multimap;
pub mod ops;
pub mod path;
pub mod schema;
pub mod ser;
pub mod stream;
pub mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use codec::{CodecOptions, FormCodec};
pub use error::{DecodeError, EncodeError, ErrorCategory, PathError, ScalarError, StreamError, TextError};
pub use multimap::Multimap;
pub use ops::{Form, FormText};
pub use value::Value;

#[cfg(feature = "derive")]
pub use vc_form_derive as derive;

#[cfg(feature = "derive")]
pub use vc_form_derive::Form;

// -----------------------------------------------------------------------------
// Convenience

/// Decode `input` into a fresh `T` with the process-wide [`FormCodec`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// let map: BTreeMap<String, Vec<String>> = vc_form::from_str("tags[]=a&tags[]=b").unwrap();
/// assert_eq!(map["tags"], ["a", "b"]);
/// ```
pub fn from_str<T: Form + Default>(input: &str) -> Result<T, DecodeError> {
    from_bytes(input.as_bytes())
}

/// Decode `input` into a fresh `T` with the process-wide [`FormCodec`].
pub fn from_bytes<T: Form + Default>(input: &[u8]) -> Result<T, DecodeError> {
    let mut value = T::default();
    FormCodec::global().decode_bytes(input, &mut value)?;
    Ok(value)
}

/// Decode `input` into an existing value, keeping fields the input does not mention.
pub fn decode_str<T: Form + ?Sized>(input: &str, target: &mut T) -> Result<(), DecodeError> {
    FormCodec::global().decode_bytes(input.as_bytes(), target)
}

/// Byte version of [`decode_str`].
pub fn decode_bytes<T: Form + ?Sized>(input: &[u8], target: &mut T) -> Result<(), DecodeError> {
    FormCodec::global().decode_bytes(input, target)
}

/// Encode `value` into the canonical form-urlencoded string.
///
/// # Examples
///
/// ```
/// use vc_form::Value;
///
/// let value: Value = vc_form::from_str("b=2&a[]=1&a[]=x").unwrap();
/// assert_eq!(vc_form::to_string(&value).unwrap(), "a%5B%5D=1&a%5B%5D=x&b=2");
/// ```
pub fn to_string<T: Form + ?Sized>(value: &T) -> Result<String, EncodeError> {
    FormCodec::global().encode_string(value)
}

/// Encode `value` into its sorted, unescaped pairs.
pub fn to_pairs<T: Form + ?Sized>(value: &T) -> Result<Multimap, EncodeError> {
    FormCodec::global().encode_pairs(value)
}
