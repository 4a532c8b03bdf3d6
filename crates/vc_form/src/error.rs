use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;
use std::io;

use thiserror::Error;

use crate::info::ScalarKind;

/// Error returned by a [`FormText`](crate::FormText) codec.
pub type TextError = Box<dyn Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// ErrorCategory

/// The four kinds of failure a decode or encode call can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A malformed key.
    Syntax,
    /// The input does not fit the shape of the target.
    Structural,
    /// A leaf could not be converted, or a value kind is not supported.
    Type,
    /// The call itself is unusable: empty input, absent target.
    InvalidCall,
}

// -----------------------------------------------------------------------------
// PathError

/// A key that is not valid bracket syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unterminated `[` at byte {offset} of key `{key}`")]
    Unterminated { key: String, offset: usize },
}

// -----------------------------------------------------------------------------
// ScalarError

/// A leaf string that does not parse as the target scalar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    #[error("`{text}` is not a valid {kind}")]
    Invalid { kind: ScalarKind, text: String },
    #[error("`{text}` is out of range for {kind}")]
    OutOfRange { kind: ScalarKind, text: String },
}

// -----------------------------------------------------------------------------
// DecodeError

/// Failure of a decode call.
///
/// The first failing pair aborts the whole call, pairs after it are not
/// applied. Variants tied to a pair carry its raw `key`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("form input is empty")]
    EmptyInput,
    #[error("form input has {count} pairs, more than the limit of {limit}")]
    TooManyPairs { count: usize, limit: usize },
    #[error("cannot decode into `{type_path}`: {reason}")]
    InvalidTarget {
        type_path: &'static str,
        reason: &'static str,
    },
    #[error("top-level value must be a record or a string-keyed map, found `{type_path}`")]
    TopLevel { type_path: &'static str },
    #[error(transparent)]
    Syntax(#[from] PathError),
    #[error("map `{type_path}` does not have string keys")]
    MapKey {
        key: Option<String>,
        type_path: &'static str,
    },
    #[error("key `{key}` does not start with a field name of `{type_path}`")]
    LeadingBracket { key: String, type_path: &'static str },
    #[error("key `{key}`: unknown field `{field}` in `{type_path}`")]
    UnknownField {
        key: String,
        field: String,
        type_path: &'static str,
    },
    #[error("key `{key}`: `[]` cannot address `{type_path}`")]
    UnexpectedIndex { key: String, type_path: &'static str },
    #[error("key `{key}`: expected `[]` for sequence `{type_path}`, found `[{segment}]`")]
    IndexExpected {
        key: String,
        segment: String,
        type_path: &'static str,
    },
    #[error("key `{key}`: fixed-size array `{type_path}` cannot be appended to")]
    FixedLength { key: String, type_path: &'static str },
    #[error("key `{key}`: `{type_path}` has no nested values")]
    NotAddressable { key: String, type_path: &'static str },
    #[error("key `{key}`: cannot assign a single value to `{type_path}`")]
    NotScalar { key: String, type_path: &'static str },
    #[error("key `{key}`: invalid value for `{type_path}`")]
    Scalar {
        key: String,
        type_path: &'static str,
        #[source]
        source: ScalarError,
    },
    #[error("key `{key}`: `{type_path}` rejected its text form")]
    Text {
        key: String,
        type_path: &'static str,
        #[source]
        source: TextError,
    },
    #[error("key `{key}`: `{type_path}` is not supported by form decoding")]
    Unsupported { key: String, type_path: &'static str },
}

impl DecodeError {
    /// Which of the four failure kinds this is.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput | Self::TooManyPairs { .. } | Self::InvalidTarget { .. } => {
                ErrorCategory::InvalidCall
            }
            Self::Syntax(_) => ErrorCategory::Syntax,
            Self::TopLevel { .. }
            | Self::MapKey { .. }
            | Self::LeadingBracket { .. }
            | Self::UnknownField { .. }
            | Self::UnexpectedIndex { .. }
            | Self::IndexExpected { .. }
            | Self::FixedLength { .. }
            | Self::NotAddressable { .. } => ErrorCategory::Structural,
            Self::NotScalar { .. }
            | Self::Scalar { .. }
            | Self::Text { .. }
            | Self::Unsupported { .. } => ErrorCategory::Type,
        }
    }

    /// The raw key of the pair that failed, if the failure belongs to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::EmptyInput
            | Self::TooManyPairs { .. }
            | Self::InvalidTarget { .. }
            | Self::TopLevel { .. } => None,
            Self::Syntax(PathError::Unterminated { key, .. }) => Some(key),
            Self::MapKey { key, .. } => key.as_deref(),
            Self::LeadingBracket { key, .. }
            | Self::UnknownField { key, .. }
            | Self::UnexpectedIndex { key, .. }
            | Self::IndexExpected { key, .. }
            | Self::FixedLength { key, .. }
            | Self::NotAddressable { key, .. }
            | Self::NotScalar { key, .. }
            | Self::Scalar { key, .. }
            | Self::Text { key, .. }
            | Self::Unsupported { key, .. } => Some(key),
        }
    }
}

// -----------------------------------------------------------------------------
// EncodeError

/// Failure of an encode call. `path` is the rendered key reached so far.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("top-level value must be a record or a string-keyed map, found `{type_path}`")]
    TopLevel { type_path: &'static str },
    #[error("at `{path}`: map `{type_path}` does not have string keys")]
    MapKey { path: String, type_path: &'static str },
    #[error("at `{path}`: `{type_path}` is not supported by form encoding")]
    Unsupported { path: String, type_path: &'static str },
    #[error("at `{path}`: `{type_path}` failed to produce its text form")]
    Text {
        path: String,
        type_path: &'static str,
        #[source]
        source: TextError,
    },
}

impl EncodeError {
    /// Which of the four failure kinds this is.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TopLevel { .. } | Self::MapKey { .. } => ErrorCategory::Structural,
            Self::Unsupported { .. } | Self::Text { .. } => ErrorCategory::Type,
        }
    }
}

// -----------------------------------------------------------------------------
// StreamError

/// Failure of a [`stream`](crate::stream) wrapper.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to read form body")]
    Read(#[source] io::Error),
    #[error("failed to write form body")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
