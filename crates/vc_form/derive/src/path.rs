//! Paths of the runtime items named by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Access path of the `vc_form` crate from the crate being compiled.
///
/// `::vc_form` for direct dependents, `::vc_forms::form` for crates that only
/// depend on the umbrella crate.
pub(crate) fn vc_form() -> syn::Path {
    vc_macro_utils::Manifest::crate_path("vc_form")
}

#[inline(always)]
pub(crate) fn form_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::Form }
}

#[inline(always)]
pub(crate) fn typed_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::Typed }
}

#[inline(always)]
pub(crate) fn form_info_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::FormInfo }
}

#[inline(always)]
pub(crate) fn record_info_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::RecordInfo }
}

#[inline(always)]
pub(crate) fn field_info_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::FieldInfo }
}

#[inline(always)]
pub(crate) fn non_generic_info_cell_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::NonGenericInfoCell }
}

#[inline(always)]
pub(crate) fn generic_info_cell_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::info::GenericInfoCell }
}

#[inline(always)]
pub(crate) fn record_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::ops::Record }
}

#[inline(always)]
pub(crate) fn form_ref_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::ops::FormRef }
}

#[inline(always)]
pub(crate) fn form_mut_(vc_form: &syn::Path) -> TokenStream {
    quote! { #vc_form::ops::FormMut }
}
