use alloc::boxed::Box;
use core::any::Any;

use crate::info::Type;

/// A declared field: its identifier and its raw tag string.
///
/// The tag is kept unparsed here; [`SchemaCache`](crate::schema::SchemaCache)
/// turns it into a [`FieldTag`](crate::tag::FieldTag) on first use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    ident: &'static str,
    tag: &'static str,
}

impl FieldInfo {
    #[inline]
    pub const fn new(ident: &'static str, tag: &'static str) -> Self {
        Self { ident, tag }
    }

    /// The field identifier as declared, without any `r#` prefix.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    #[inline]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }
}

/// Description of a record: a type with named fields in declaration order.
#[derive(Debug)]
pub struct RecordInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
}

impl RecordInfo {
    pub fn new<T: Any>(fields: &[FieldInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }
}
