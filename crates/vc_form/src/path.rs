//! Bracket-annotated keys.
//!
//! A flat key such as `user[tags][]` addresses nested structure: text before
//! the first `[` names the root field, every `[name]` group descends one level
//! and every empty `[]` group appends to a sequence.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::PathError;

// -----------------------------------------------------------------------------
// PathSegment

/// One addressing unit of a key.
///
/// Either a named field / mapping key, or the anonymous append marker that is
/// written as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    key: String,
    is_index: bool,
}

impl PathSegment {
    /// A named segment. The name is stored as written, without unescaping.
    #[inline]
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_index: false,
        }
    }

    /// The `[]` append marker.
    #[inline]
    pub const fn index() -> Self {
        Self {
            key: String::new(),
            is_index: true,
        }
    }

    /// The segment name, empty for index markers.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub const fn is_index(&self) -> bool {
        self.is_index
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_index {
            f.write_str("[]")
        } else {
            write!(f, "[{}]", self.key)
        }
    }
}

// -----------------------------------------------------------------------------
// Parsing

/// Split a raw key into its segments.
///
/// Text outside brackets becomes a named segment when it is not empty.
/// Each bracket group becomes one segment, an empty group being an index
/// marker. A `[` without a closing `]` is a syntax error. The empty key is a
/// single segment with an empty name.
///
/// The parser does not reject a key that starts with `[`; `[x]` yields the
/// single named segment `x`.
///
/// # Examples
///
/// ```
/// use vc_form::path::{PathSegment, parse_key};
///
/// let path = parse_key("user[tags][]").unwrap();
/// assert_eq!(path, [
///     PathSegment::named("user"),
///     PathSegment::named("tags"),
///     PathSegment::index(),
/// ]);
///
/// assert!(parse_key("user[tags").is_err());
/// ```
pub fn parse_key(raw: &str) -> Result<Vec<PathSegment>, PathError> {
    if raw.is_empty() {
        return Ok(alloc::vec![PathSegment::named("")]);
    }

    let mut segments = Vec::new();
    let mut rest = raw;
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            segments.push(PathSegment::named(rest));
            break;
        };
        if open > 0 {
            segments.push(PathSegment::named(&rest[..open]));
        }

        let offset = raw.len() - rest.len() + open;
        let group = &rest[open + 1..];
        let Some(close) = group.find(']') else {
            return Err(PathError::Unterminated {
                key: raw.into(),
                offset,
            });
        };
        match &group[..close] {
            "" => segments.push(PathSegment::index()),
            name => segments.push(PathSegment::named(name)),
        }
        rest = &group[close + 1..];
    }

    Ok(segments)
}

// -----------------------------------------------------------------------------
// Rendering

/// Render segments back into a flat key.
///
/// The first segment is written bare, later named segments as `[name]` and
/// index markers as `[]`.
///
/// ```
/// use vc_form::path::{PathSegment, render_path};
///
/// let path = [PathSegment::named("a"), PathSegment::index(), PathSegment::named("b")];
/// assert_eq!(render_path(&path), "a[][b]");
/// ```
pub fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for (index, segment) in path.iter().enumerate() {
        if index == 0 {
            out.push_str(segment.key());
        } else if segment.is_index() {
            out.push_str("[]");
        } else {
            out.push('[');
            out.push_str(segment.key());
            out.push(']');
        }
    }
    out
}
