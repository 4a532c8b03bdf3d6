//! Decode engine.
//!
//! Each `(key, leaf)` pair of the input is parsed into a path and assigned
//! into the target, in input order: the last write to a scalar wins and every
//! index marker appends. The first failing pair aborts the whole call and the
//! pairs after it are not applied.

mod assign;

use crate::error::DecodeError;
use crate::multimap::Multimap;
use crate::ops::{Form, FormMut};
use crate::path::{PathSegment, parse_key, render_path};
use crate::schema::SchemaCache;
use crate::value::Value;

use assign::Assigner;

/// Shape of a decode target.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Root {
    Record,
    Map,
    Dynamic,
}

/// Assign one leaf at `path` below `target`.
///
/// Creates every missing level on the way. Errors report the rendered path
/// as their key.
///
/// ```
/// use vc_form::Value;
/// use vc_form::de::assign;
/// use vc_form::path::parse_key;
/// use vc_form::schema::SchemaCache;
///
/// let schema = SchemaCache::new();
/// let mut value = Value::default();
/// assign(&schema, &mut value, &parse_key("a[b][]").unwrap(), "x").unwrap();
/// assert_eq!(value["a"]["b"][0], "x");
/// ```
pub fn assign(
    schema: &SchemaCache,
    target: &mut dyn Form,
    path: &[PathSegment],
    leaf: &str,
) -> Result<(), DecodeError> {
    let key = render_path(path);
    Assigner::new(schema, &key).assign(target, path, leaf)
}

/// Decode every pair of `pairs` into `target`.
///
/// The target must be a record, a map with text keys or a [`Value::Map`].
/// A filled `Option` is decoded through; an empty one is an invalid target.
pub fn decode(
    schema: &SchemaCache,
    target: &mut dyn Form,
    pairs: &Multimap,
) -> Result<(), DecodeError> {
    let type_path = target.dyn_form_info().type_path();

    let root = match target.form_mut() {
        FormMut::Optional(slot) => {
            return match slot.get_mut() {
                Some(inner) => decode(schema, inner, pairs),
                None => Err(DecodeError::InvalidTarget {
                    type_path,
                    reason: "the optional target is empty",
                }),
            };
        }
        FormMut::Record(_) => Root::Record,
        FormMut::Map(map) if map.key_is_text() => Root::Map,
        FormMut::Map(_) => return Err(DecodeError::MapKey { key: None, type_path }),
        FormMut::Dynamic(Value::Map(_)) => Root::Dynamic,
        _ => return Err(DecodeError::TopLevel { type_path }),
    };

    log::trace!("decoding {} form pairs into `{type_path}`", pairs.len());

    for (key, leaf) in pairs {
        if root == Root::Record && key.starts_with('[') {
            return Err(DecodeError::LeadingBracket {
                key: key.into(),
                type_path,
            });
        }
        let path = parse_key(key)?;
        // A dynamic root stays a map: `[]` would turn it into a list.
        if root == Root::Dynamic && path.first().is_some_and(PathSegment::is_index) {
            return Err(DecodeError::UnexpectedIndex {
                key: key.into(),
                type_path,
            });
        }
        Assigner::new(schema, key).assign(target, &path, leaf)?;
    }

    Ok(())
}
