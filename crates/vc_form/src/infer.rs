//! Shape inference for dynamic values.
//!
//! When a decode reaches a [`Value`] slot, the remaining path alone decides
//! what to build: named segments make maps, index markers make lists, and the
//! leaf is always text.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::Value;
use crate::path::PathSegment;

/// Merge `path = leaf` into `existing`, returning the updated value.
///
/// - An exhausted path yields `Text(leaf)`, never a number or a boolean.
/// - An index marker appends one new element to the existing list (or to a new
///   list if `existing` is not one). Elements are never merged by position.
/// - A named segment updates that key of the existing map (or of a new map),
///   merging into what is already stored there.
///
/// Total: no input makes it fail.
///
/// ```
/// use vc_form::Value;
/// use vc_form::infer::infer;
/// use vc_form::path::parse_key;
///
/// let value = infer(None, &parse_key("a[b]").unwrap(), "1");
/// let value = infer(Some(value), &parse_key("a[c][]").unwrap(), "2");
/// let value = infer(Some(value), &parse_key("a[c][]").unwrap(), "3");
///
/// assert_eq!(value["a"]["b"], "1");
/// assert_eq!(value["a"]["c"], Value::List(vec!["2".into(), "3".into()]));
/// ```
pub fn infer(existing: Option<Value>, path: &[PathSegment], leaf: &str) -> Value {
    let Some((head, rest)) = path.split_first() else {
        return Value::Text(leaf.into());
    };

    if head.is_index() {
        let mut list = match existing {
            Some(Value::List(list)) => list,
            _ => Vec::new(),
        };
        list.push(infer(None, rest, leaf));
        Value::List(list)
    } else {
        let mut map = match existing {
            Some(Value::Map(map)) => map,
            _ => BTreeMap::new(),
        };
        let current = map.remove(head.key());
        map.insert(head.key().into(), infer(current, rest, leaf));
        Value::Map(map)
    }
}

/// In-place form of [`infer`], used by the decode engine.
pub(crate) fn infer_into(slot: &mut Value, path: &[PathSegment], leaf: &str) {
    let existing = core::mem::take(slot);
    *slot = infer(Some(existing), path, leaf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::parse_key;

    fn apply(pairs: &[(&str, &str)]) -> Value {
        pairs.iter().fold(Value::default(), |acc, (key, leaf)| {
            infer(Some(acc), &parse_key(key).unwrap(), leaf)
        })
    }

    #[test]
    fn leaf_is_never_sniffed() {
        assert_eq!(infer(None, &[], "007"), Value::Text("007".into()));
        assert_eq!(infer(Some(Value::default()), &[], "true"), Value::Text("true".into()));
    }

    #[test]
    fn index_markers_append() {
        let value = apply(&[("items[]", "a"), ("items[]", "b"), ("items[]", "c")]);
        assert_eq!(
            value["items"],
            Value::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn nested_lists_never_merge() {
        let value = apply(&[("grid[][]", "1"), ("grid[][]", "2")]);
        assert_eq!(
            value["grid"],
            Value::List(vec![
                Value::List(vec!["1".into()]),
                Value::List(vec!["2".into()]),
            ])
        );
    }

    #[test]
    fn named_segments_merge() {
        let value = apply(&[("a[b][c]", "v"), ("a[b][d]", "w"), ("a[b][c]", "z")]);
        assert_eq!(value["a"]["b"]["c"], "z");
        assert_eq!(value["a"]["b"]["d"], "w");
    }

    #[test]
    fn shape_changes_replace() {
        let value = apply(&[("a", "text"), ("a[k]", "v")]);
        assert_eq!(value["a"]["k"], "v");

        let value = apply(&[("a[]", "x"), ("a", "y")]);
        assert_eq!(value["a"], "y");
    }

    #[test]
    fn list_of_maps() {
        let value = apply(&[
            ("db[][host]", "db1"),
            ("db[][host]", "db2"),
        ]);
        assert_eq!(value["db"][0]["host"], "db1");
        assert_eq!(value["db"][1]["host"], "db2");
    }
}
