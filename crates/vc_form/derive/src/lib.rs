//! `#[derive(Form)]` for `vc_form`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static FORM_ATTRIBUTE_NAME: &str = "form";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Form)]` implements `Typed`, `Form` and `Record` for a struct with
/// named fields. Every field type must implement `Form`.
///
/// ## Field Tags
///
/// A field may carry one tag string:
///
/// ```rust, ignore
/// #[derive(Form)]
/// struct Person {
///     // key `name`
///     name: String,
///     // key `age`, skipped on encode when zero
///     #[form("age,omitempty")]
///     age: u32,
///     // key `e-mail`
///     #[form("e-mail")]
///     email: String,
///     // neither decoded nor encoded
///     #[form("-")]
///     password: String,
/// }
/// ```
///
/// The first comma-separated part is the key, empty meaning the field
/// identifier (`r#type` becomes `type`). A lone `-` ignores the field. Later
/// parts are flags: `omitempty` and `ignore`; others are skipped.
///
/// ## Generics
///
/// Type parameters are supported, each field type gets a `Form` bound.
/// Lifetime parameters are not, since `Form` values are `'static`.
///
/// ## Text-coded Types
///
/// Types written as a single leaf do not use this derive; implement
/// `FormText` and call `vc_form::impl_form_text!` instead.
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::FormRecord::from_ast(&ast) {
        Ok(record) => impls::impl_record(&record).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
