//! Encode engine.
//!
//! A single pre-order walk that writes one `(key, leaf)` pair per scalar,
//! text-coded value or dynamic text it reaches. Keys are rendered paths: the
//! first segment bare, then `[name]` per field or map key and `[]` per
//! sequence element. Positions are never written.

mod emit;

use alloc::string::String;

use crate::error::EncodeError;
use crate::multimap::Multimap;
use crate::ops::{Form, FormRef};
use crate::schema::SchemaCache;
use crate::value::Value;

use emit::Emitter;

/// Encode `value` into pairs, in traversal order.
///
/// An empty `Option` yields no pairs. Otherwise the value must be a record, a
/// map with text keys or a [`Value::Map`].
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_form::ser::encode;
/// use vc_form::schema::SchemaCache;
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("ids"), vec![1u32, 2]);
///
/// let pairs = encode(&SchemaCache::new(), &map).unwrap();
/// let pairs: Vec<(&str, &str)> = pairs.iter().collect();
/// assert_eq!(pairs, [("ids[]", "1"), ("ids[]", "2")]);
/// ```
pub fn encode(schema: &SchemaCache, value: &dyn Form) -> Result<Multimap, EncodeError> {
    let type_path = value.dyn_form_info().type_path();

    match value.form_ref() {
        FormRef::Optional(slot) => {
            return match slot.get() {
                Some(inner) => encode(schema, inner),
                None => Ok(Multimap::new()),
            };
        }
        FormRef::Record(_) | FormRef::Dynamic(Value::Map(_)) => {}
        FormRef::Map(map) if map.key_is_text() => {}
        FormRef::Map(_) => {
            return Err(EncodeError::MapKey {
                path: String::new(),
                type_path,
            });
        }
        _ => return Err(EncodeError::TopLevel { type_path }),
    }

    log::trace!("encoding `{type_path}` as form pairs");

    let mut emitter = Emitter::new(schema);
    emitter.emit(value)?;
    Ok(emitter.finish())
}

/// Whether `value` is skipped by an `omitempty` field.
///
/// Zero scalars, empty `Option`s, lists, maps and dynamic values are empty.
/// Records and text-coded values never are.
pub fn is_empty(value: &dyn Form) -> bool {
    match value.form_ref() {
        FormRef::Scalar(scalar) => scalar.is_zero(),
        FormRef::Optional(slot) => slot.get().is_none(),
        FormRef::List(list) => list.is_empty(),
        FormRef::Array(array) => array.is_empty(),
        FormRef::Map(map) => map.is_empty(),
        FormRef::Dynamic(value) => value.is_empty(),
        FormRef::Record(_) | FormRef::Text(_) | FormRef::Opaque(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn emptiness() {
        assert!(is_empty(&0u8));
        assert!(is_empty(&String::new()));
        assert!(is_empty(&false));
        assert!(is_empty(&None::<u8>));
        assert!(is_empty(&Vec::<u8>::new()));
        assert!(is_empty(&[0u8; 0]));
        assert!(is_empty(&BTreeMap::<String, u8>::new()));
        assert!(is_empty(&Value::default()));

        assert!(!is_empty(&Some(0u8)));
        assert!(!is_empty(&[0u8; 1]));
        assert!(!is_empty(&Value::from("x")));
    }

    #[test]
    fn root_kinds() {
        let schema = SchemaCache::new();
        assert!(encode(&schema, &None::<BTreeMap<String, u8>>).unwrap().is_empty());
        assert!(matches!(
            encode(&schema, &5u8),
            Err(EncodeError::TopLevel { type_path: "u8" })
        ));
        assert!(matches!(
            encode(&schema, &Value::from("x")),
            Err(EncodeError::TopLevel { .. })
        ));
        assert!(matches!(
            encode(&schema, &BTreeMap::<i32, u8>::new()),
            Err(EncodeError::MapKey { .. })
        ));
    }
}
