use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{GenericParam, WhereClause, parse_quote};

use crate::derive_data::FormRecord;
use crate::path;

/// Generate `Typed`, `Form` and `Record` for a parsed struct.
pub(crate) fn impl_record(record: &FormRecord) -> TokenStream {
    let vc_form = path::vc_form();

    let typed = impl_typed(record, &vc_form);
    let form = impl_form(record, &vc_form);
    let fields = impl_record_fields(record, &vc_form);

    quote! {
        #typed
        #form
        #fields
    }
}

/// Where clause shared by every generated impl.
///
/// Each type parameter must be shareable across threads and `'static`, and
/// each field type must implement `Form`.
fn where_clause(record: &FormRecord, vc_form: &syn::Path) -> Option<WhereClause> {
    if !record.is_generic() {
        return record.generics.where_clause.clone();
    }

    let form_ = path::form_(vc_form);
    let mut clause = record
        .generics
        .where_clause
        .clone()
        .unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Punctuated::new(),
        });

    for param in &record.generics.params {
        if let GenericParam::Type(param) = param {
            let ident = &param.ident;
            clause
                .predicates
                .push(parse_quote! { #ident: ::core::marker::Send + ::core::marker::Sync + 'static });
        }
    }
    for field in &record.fields {
        let ty = field.ty;
        clause.predicates.push(parse_quote! { #ty: #form_ });
    }

    Some(clause)
}

fn impl_typed(record: &FormRecord, vc_form: &syn::Path) -> TokenStream {
    let ident = record.ident;
    let (impl_generics, ty_generics, _) = record.generics.split_for_impl();
    let where_clause = where_clause(record, vc_form);

    let typed_ = path::typed_(vc_form);
    let form_info_ = path::form_info_(vc_form);
    let record_info_ = path::record_info_(vc_form);
    let field_info_ = path::field_info_(vc_form);

    let field_infos = record.fields.iter().map(|field| {
        let name = &field.name;
        let tag = &field.tag;
        quote! { #field_info_::new(#name, #tag) }
    });

    let build = quote! {
        || #form_info_::Record(#record_info_::new::<Self>(&[#(#field_infos),*]))
    };

    let body = if record.is_generic() {
        let cell_ = path::generic_info_cell_(vc_form);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(#build)
        }
    } else {
        let cell_ = path::non_generic_info_cell_(vc_form);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(#build)
        }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn form_info() -> &'static #form_info_ {
                #body
            }
        }
    }
}

fn impl_form(record: &FormRecord, vc_form: &syn::Path) -> TokenStream {
    let ident = record.ident;
    let (impl_generics, ty_generics, _) = record.generics.split_for_impl();
    let where_clause = where_clause(record, vc_form);

    let form_ = path::form_(vc_form);
    let form_ref_ = path::form_ref_(vc_form);
    let form_mut_ = path::form_mut_(vc_form);

    quote! {
        #[automatically_derived]
        impl #impl_generics #form_ for #ident #ty_generics #where_clause {
            #[inline]
            fn form_ref(&self) -> #form_ref_<'_> {
                #form_ref_::Record(self)
            }

            #[inline]
            fn form_mut(&mut self) -> #form_mut_<'_> {
                #form_mut_::Record(self)
            }

            #[inline]
            fn as_form(&self) -> &dyn #form_ {
                self
            }

            #[inline]
            fn as_form_mut(&mut self) -> &mut dyn #form_ {
                self
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::core::any::Any> {
                self
            }
        }
    }
}

fn impl_record_fields(record: &FormRecord, vc_form: &syn::Path) -> TokenStream {
    let ident = record.ident;
    let (impl_generics, ty_generics, _) = record.generics.split_for_impl();
    let where_clause = where_clause(record, vc_form);

    let form_ = path::form_(vc_form);
    let record_ = path::record_(vc_form);

    let field_len = record.fields.len();
    let indices = (0..field_len).collect::<Vec<usize>>();
    let members = record.fields.iter().map(|f| f.member).collect::<Vec<_>>();

    quote! {
        #[automatically_derived]
        impl #impl_generics #record_ for #ident #ty_generics #where_clause {
            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #form_> {
                match index {
                    #(#indices => ::core::option::Option::Some(#form_::as_form(&self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #form_> {
                match index {
                    #(#indices => ::core::option::Option::Some(#form_::as_form_mut(&mut self.#members)),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
