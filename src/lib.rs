#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_form as form;

// `Form` brings both the trait and, with the `derive` feature, the derive macro.
pub use vc_form::{Form, FormCodec, Value};
pub use vc_form::{decode_bytes, decode_str, from_bytes, from_str, to_pairs, to_string};
