use crate::Form;
use crate::info::RecordInfo;

/// A value with named fields, addressed by declaration index.
///
/// Field names and tags come from the type's
/// [`RecordInfo`]; `field_at(i)` must return the field described by
/// `record_info().field_at(i)`.
pub trait Record: Form {
    fn field_at(&self, index: usize) -> Option<&dyn Form>;

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Form>;

    fn field_len(&self) -> usize;

    /// The record description, `None` if the type's info is not a record.
    #[inline]
    fn record_info(&self) -> Option<&'static RecordInfo> {
        self.dyn_form_info().as_record()
    }
}

/// Iterator over the fields of a [`Record`], in declaration order.
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> FieldIter<'a> {
    #[inline]
    pub fn new(record: &'a dyn Record) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a dyn Form;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.record.field_at(self.index)?;
        self.index += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.record.field_len().saturating_sub(self.index);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}
