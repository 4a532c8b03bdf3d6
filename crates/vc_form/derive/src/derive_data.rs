use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Type};

use crate::FORM_ATTRIBUTE_NAME;

/// One named field of the record.
pub(crate) struct FormField<'a> {
    /// Accessor used in generated code, raw prefix kept.
    pub member: &'a Ident,
    /// Identifier reported to the schema, raw prefix removed.
    pub name: String,
    /// Raw tag string, empty when the field has no `#[form]` attribute.
    pub tag: String,
    pub ty: &'a Type,
}

/// The parsed input of `#[derive(Form)]`.
pub(crate) struct FormRecord<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub fields: Vec<FormField<'a>>,
}

impl<'a> FormRecord<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(attr) = ast
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident(FORM_ATTRIBUTE_NAME))
        {
            return Err(syn::Error::new(
                attr.span(),
                "`#[form]` is only accepted on fields",
            ));
        }

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "#[derive(Form)] does not support lifetime parameters",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "#[derive(Form)] requires a struct with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "#[derive(Form)] does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "#[derive(Form)] does not support unions",
                ));
            }
        };

        let fields = named
            .named
            .iter()
            .map(|field| {
                // `Fields::Named` always carries identifiers.
                let member = field.ident.as_ref().ok_or_else(|| {
                    syn::Error::new(Span::call_site(), "expected a named field")
                })?;
                Ok(FormField {
                    member,
                    name: member.unraw().to_string(),
                    tag: parse_field_tag(&field.attrs)?,
                    ty: &field.ty,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            fields,
        })
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}

/// Read the tag string of `#[form("...")]`, rejecting duplicates.
fn parse_field_tag(attrs: &[syn::Attribute]) -> syn::Result<String> {
    let mut tag: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident(FORM_ATTRIBUTE_NAME) {
            continue;
        }
        let lit: LitStr = attr.parse_args().map_err(|err| {
            syn::Error::new(
                err.span(),
                "expected a tag string, such as `#[form(\"name,omitempty\")]`",
            )
        })?;
        if tag.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "duplicate `#[form]` attribute",
            ));
        }
        tag = Some(lit);
    }

    Ok(tag.map(|lit| lit.value()).unwrap_or_default())
}
