//! Field tag strings.
//!
//! A tag is written on a record field as `#[form("name,flag,...")]`:
//!
//! | tag             | effect                                   |
//! |-----------------|------------------------------------------|
//! | (none) or `""`  | use the field identifier                 |
//! | `"-"`           | ignore the field                         |
//! | `"name"`        | use `name` as the key                    |
//! | `",omitempty"`  | identifier as key, skip zero on encode   |
//! | `"name,ignore"` | ignore the field                         |
//!
//! Unknown flags are skipped.

use alloc::string::String;

/// Parsed metadata of one record field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTag {
    pub name: String,
    pub omit_if_empty: bool,
    pub ignore: bool,
}

/// Parse a raw tag string. Never fails; malformed parts are skipped.
///
/// The returned name may be empty, in which case the caller substitutes the
/// field identifier.
///
/// ```
/// use vc_form::tag::parse_tag;
///
/// let tag = parse_tag("age,omitempty");
/// assert_eq!(tag.name, "age");
/// assert!(tag.omit_if_empty);
///
/// assert!(parse_tag("-").ignore);
/// assert!(parse_tag(",ignore").ignore);
/// ```
pub fn parse_tag(raw: &str) -> FieldTag {
    let raw = raw.trim();
    let mut tag = FieldTag::default();
    if raw == "-" {
        tag.ignore = true;
        return tag;
    }

    let mut parts = raw.split(',');
    match parts.next().map(str::trim) {
        Some("-") => tag.ignore = true,
        Some(name) => tag.name = name.into(),
        None => {}
    }

    for flag in parts.map(str::trim) {
        match flag {
            "omitempty" => tag.omit_if_empty = true,
            "ignore" => tag.ignore = true,
            "" => {}
            other => log::debug!("ignoring unknown form tag flag `{other}` in `{raw}`"),
        }
    }

    tag
}
