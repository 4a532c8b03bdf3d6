//! [`Form`](crate::Form) for standard library types.
//!
//! - scalars: `String`, `bool`, `char`, the integer and float primitives;
//! - `Option<T>` as an optional slot and `Box<T>` as its contents;
//! - `Vec<T>` and `VecDeque<T>` as lists, `[T; N]` as arrays;
//! - `HashMap<K, V, S>` and `BTreeMap<K, V>` as maps;
//! - `()` as an opaque kind, rejected by both engines.

mod list;
mod map;
mod opaque;
mod option;
mod scalar;
