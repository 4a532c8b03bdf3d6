use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{FormInfo, NonGenericInfoCell, Type, Typed};
use crate::ops::{Form, FormMut, FormRef, impl_cast_fn};

/// A value whose shape is decided by the input.
///
/// Leaves are always [`Text`](Value::Text): `"007"` stays `"007"` and `"true"`
/// stays `"true"`, so decoding and re-encoding reproduces the input. Keys map
/// to nested values in key order.
///
/// The default value is an empty map, which makes `Value` usable as the
/// top-level decode target.
///
/// ```
/// use vc_form::Value;
///
/// let value: Value = vc_form::from_str("user[name]=ann&user[ids][]=007").unwrap();
///
/// assert_eq!(value["user"]["name"], "ann");
/// assert_eq!(value["user"]["ids"][0], "007");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Map(BTreeMap<String, Value>),
    List(Vec<Value>),
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

impl Value {
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The entry at `key` of a map, `None` for other shapes.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }

    /// Empty text, map or list. Encoding an empty value writes nothing for
    /// maps and lists and one empty leaf for text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(list: Vec<Value>) -> Self {
        Self::List(list)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    #[inline]
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

static NULL: Value = Value::List(Vec::new());

/// Index a map by key. Missing keys and other shapes yield an empty list.
impl core::ops::Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Index a list by position. Out of range and other shapes yield an empty list.
impl core::ops::Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.as_list()
            .and_then(|list| list.get(index))
            .unwrap_or(&NULL)
    }
}

// -----------------------------------------------------------------------------
// Form

impl Typed for Value {
    fn form_info() -> &'static FormInfo {
        static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
        CELL.get_or_init(|| FormInfo::Dynamic(Type::of::<Self>()))
    }
}

impl Form for Value {
    #[inline]
    fn form_ref(&self) -> FormRef<'_> {
        FormRef::Dynamic(self)
    }

    #[inline]
    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Dynamic(self)
    }

    impl_cast_fn!();
}

// -----------------------------------------------------------------------------
// serde

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::fmt;

    use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
    use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::Value;

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Text(text) => serializer.serialize_str(text),
                Value::Map(map) => {
                    let mut out = serializer.serialize_map(Some(map.len()))?;
                    for (key, value) in map {
                        out.serialize_entry(key, value)?;
                    }
                    out.end()
                }
                Value::List(list) => {
                    let mut out = serializer.serialize_seq(Some(list.len()))?;
                    for item in list {
                        out.serialize_element(item)?;
                    }
                    out.end()
                }
            }
        }
    }

    struct ValueVisitor;

    macro_rules! visit_as_text {
        ($($method:ident: $ty:ty),* $(,)?) => {$(
            fn $method<E: de::Error>(self, v: $ty) -> Result<Value, E> {
                Ok(Value::Text(v.to_string()))
            }
        )*};
    }

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, a scalar, a map or a sequence")
        }

        visit_as_text!(
            visit_bool: bool,
            visit_i64: i64,
            visit_u64: u64,
            visit_f64: f64,
            visit_str: &str,
        );

        fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
            Ok(Value::Text(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
            Ok(Value::Text(String::new()))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
            let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element()? {
                list.push(item);
            }
            Ok(Value::List(list))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
            let mut out = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, Value>()? {
                out.insert(key, value);
            }
            Ok(Value::Map(out))
        }
    }

    /// Scalars other than strings become their text; `null` becomes `""`.
    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}
