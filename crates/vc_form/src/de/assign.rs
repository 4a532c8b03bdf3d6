use crate::error::DecodeError;
use crate::infer::infer_into;
use crate::ops::{Form, FormMut, List, Map, Record};
use crate::path::PathSegment;
use crate::schema::SchemaCache;

/// Walks one path below a target, creating what is missing.
///
/// `key` is the raw key of the pair being assigned, reported by every error.
pub(super) struct Assigner<'a> {
    schema: &'a SchemaCache,
    key: &'a str,
}

impl<'a> Assigner<'a> {
    #[inline]
    pub(super) fn new(schema: &'a SchemaCache, key: &'a str) -> Self {
        Self { schema, key }
    }

    pub(super) fn assign(
        &self,
        target: &mut dyn Form,
        path: &[PathSegment],
        leaf: &str,
    ) -> Result<(), DecodeError> {
        let type_path = target.dyn_form_info().type_path();

        match target.form_mut() {
            FormMut::Optional(slot) => self.assign(slot.get_or_insert_default(), path, leaf),
            FormMut::Dynamic(value) => {
                infer_into(value, path, leaf);
                Ok(())
            }
            FormMut::Text(text) => {
                if !path.is_empty() {
                    return Err(self.not_addressable(type_path));
                }
                text.set_form_text(leaf).map_err(|source| DecodeError::Text {
                    key: self.key.into(),
                    type_path,
                    source,
                })
            }
            FormMut::Scalar(scalar) => {
                if !path.is_empty() {
                    return Err(self.not_addressable(type_path));
                }
                scalar.set_text(leaf).map_err(|source| DecodeError::Scalar {
                    key: self.key.into(),
                    type_path,
                    source,
                })
            }
            FormMut::Record(record) => match path.split_first() {
                Some((head, rest)) => self.assign_field(record, head, rest, leaf),
                None => Err(self.not_scalar(type_path)),
            },
            FormMut::Map(map) => match path.split_first() {
                Some((head, rest)) => self.assign_entry(map, head, rest, leaf),
                None => Err(self.not_scalar(type_path)),
            },
            FormMut::List(list) => match path.split_first() {
                Some((head, rest)) if head.is_index() => self.append(list, rest, leaf),
                Some((head, _)) => Err(DecodeError::IndexExpected {
                    key: self.key.into(),
                    segment: head.key().into(),
                    type_path,
                }),
                None => Err(self.not_scalar(type_path)),
            },
            FormMut::Array(_) => {
                if path.is_empty() {
                    Err(self.not_scalar(type_path))
                } else {
                    Err(DecodeError::FixedLength {
                        key: self.key.into(),
                        type_path,
                    })
                }
            }
            FormMut::Opaque(_) => Err(DecodeError::Unsupported {
                key: self.key.into(),
                type_path,
            }),
        }
    }

    fn assign_field(
        &self,
        record: &mut dyn Record,
        head: &PathSegment,
        rest: &[PathSegment],
        leaf: &str,
    ) -> Result<(), DecodeError> {
        let type_path = record.dyn_form_info().type_path();
        if head.is_index() {
            return Err(DecodeError::UnexpectedIndex {
                key: self.key.into(),
                type_path,
            });
        }

        let index = record
            .record_info()
            .and_then(|info| self.schema.find_field(info, head.key()));
        let Some(field) = index.and_then(|index| record.field_at_mut(index)) else {
            return Err(DecodeError::UnknownField {
                key: self.key.into(),
                field: head.key().into(),
                type_path,
            });
        };

        self.assign(field, rest, leaf)
    }

    fn assign_entry(
        &self,
        map: &mut dyn Map,
        head: &PathSegment,
        rest: &[PathSegment],
        leaf: &str,
    ) -> Result<(), DecodeError> {
        let type_path = map.dyn_form_info().type_path();
        if !map.key_is_text() {
            return Err(DecodeError::MapKey {
                key: Some(self.key.into()),
                type_path,
            });
        }
        if head.is_index() {
            return Err(DecodeError::UnexpectedIndex {
                key: self.key.into(),
                type_path,
            });
        }

        let existed = map.get(head.key()).is_some();
        let Some(entry) = map.entry_mut(head.key()) else {
            return Err(DecodeError::MapKey {
                key: Some(self.key.into()),
                type_path,
            });
        };
        let result = self.assign_element(entry, rest, leaf);
        // A failed pair must not leave a default entry behind.
        if result.is_err() && !existed {
            map.remove(head.key());
        }
        result
    }

    /// Assign into a map element.
    ///
    /// Sequence elements grow by one item per pair whether or not the key
    /// ends in `[]`: `tags=a` and `tags[]=a` both append.
    fn assign_element(
        &self,
        entry: &mut dyn Form,
        rest: &[PathSegment],
        leaf: &str,
    ) -> Result<(), DecodeError> {
        match entry.form_mut() {
            FormMut::Optional(slot) => self.assign_element(slot.get_or_insert_default(), rest, leaf),
            FormMut::List(list) => {
                let rest = match rest.split_first() {
                    Some((head, tail)) if head.is_index() => tail,
                    _ => rest,
                };
                self.append(list, rest, leaf)
            }
            _ => self.assign(entry, rest, leaf),
        }
    }

    /// Build a default item, assign the rest of the path into it, then push it.
    fn append(
        &self,
        list: &mut dyn List,
        rest: &[PathSegment],
        leaf: &str,
    ) -> Result<(), DecodeError> {
        let type_path = list.dyn_form_info().type_path();
        let mut item = list.new_item();
        self.assign(item.as_form_mut(), rest, leaf)?;
        list.push(item).map_err(|_| DecodeError::Unsupported {
            key: self.key.into(),
            type_path,
        })
    }

    #[inline]
    fn not_addressable(&self, type_path: &'static str) -> DecodeError {
        DecodeError::NotAddressable {
            key: self.key.into(),
            type_path,
        }
    }

    #[inline]
    fn not_scalar(&self, type_path: &'static str) -> DecodeError {
        DecodeError::NotScalar {
            key: self.key.into(),
            type_path,
        }
    }
}
