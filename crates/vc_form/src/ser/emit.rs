use alloc::string::String;
use alloc::vec::Vec;

use crate::error::EncodeError;
use crate::multimap::Multimap;
use crate::ops::{Form, FormRef, ItemIter, Map, Record};
use crate::path::{PathSegment, render_path};
use crate::schema::SchemaCache;
use crate::value::Value;

use super::is_empty;

/// Traversal state: the path walked so far and the pairs written.
pub(super) struct Emitter<'a> {
    schema: &'a SchemaCache,
    path: Vec<PathSegment>,
    out: Multimap,
}

impl<'a> Emitter<'a> {
    pub(super) fn new(schema: &'a SchemaCache) -> Self {
        Self {
            schema,
            path: Vec::new(),
            out: Multimap::new(),
        }
    }

    pub(super) fn finish(self) -> Multimap {
        self.out
    }

    pub(super) fn emit(&mut self, value: &dyn Form) -> Result<(), EncodeError> {
        let type_path = value.dyn_form_info().type_path();

        match value.form_ref() {
            FormRef::Optional(slot) => match slot.get() {
                Some(inner) => self.emit(inner),
                None => Ok(()),
            },
            FormRef::Text(text) => {
                let leaf = text.to_form_text().map_err(|source| EncodeError::Text {
                    path: render_path(&self.path),
                    type_path,
                    source,
                })?;
                self.leaf(leaf);
                Ok(())
            }
            FormRef::Scalar(scalar) => {
                self.leaf(scalar.to_text());
                Ok(())
            }
            FormRef::Dynamic(value) => {
                self.emit_value(value);
                Ok(())
            }
            FormRef::Record(record) => self.emit_record(record),
            FormRef::Map(map) => self.emit_map(map),
            FormRef::List(list) => self.emit_items(ItemIter::list(list)),
            FormRef::Array(array) => self.emit_items(ItemIter::array(array)),
            FormRef::Opaque(_) => Err(EncodeError::Unsupported {
                path: render_path(&self.path),
                type_path,
            }),
        }
    }

    fn leaf(&mut self, text: String) {
        self.out.push(render_path(&self.path), text);
    }

    fn emit_record(&mut self, record: &dyn Record) -> Result<(), EncodeError> {
        let Some(info) = record.record_info() else {
            return Err(EncodeError::Unsupported {
                path: render_path(&self.path),
                type_path: record.dyn_form_info().type_path(),
            });
        };

        let tags = self.schema.fields_of(info);
        for (index, tag) in tags.iter().enumerate() {
            if tag.ignore || tag.name.is_empty() {
                continue;
            }
            let Some(field) = record.field_at(index) else {
                continue;
            };
            if tag.omit_if_empty && is_empty(field) {
                continue;
            }

            self.path.push(PathSegment::named(tag.name.as_str()));
            let result = self.emit(field);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn emit_map(&mut self, map: &dyn Map) -> Result<(), EncodeError> {
        if !map.key_is_text() {
            return Err(EncodeError::MapKey {
                path: render_path(&self.path),
                type_path: map.dyn_form_info().type_path(),
            });
        }

        for (key, value) in map.iter() {
            self.path.push(PathSegment::named(key));
            let result = self.emit(value);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn emit_items(&mut self, items: ItemIter<'_>) -> Result<(), EncodeError> {
        for item in items {
            self.path.push(PathSegment::index());
            let result = self.emit(item);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    /// Dynamic values cannot fail: every leaf is already text.
    fn emit_value(&mut self, value: &Value) {
        match value {
            Value::Text(text) => self.leaf(text.clone()),
            Value::Map(map) => {
                for (key, value) in map {
                    self.path.push(PathSegment::named(key.as_str()));
                    self.emit_value(value);
                    self.path.pop();
                }
            }
            Value::List(list) => {
                for item in list {
                    self.path.push(PathSegment::index());
                    self.emit_value(item);
                    self.path.pop();
                }
            }
        }
    }
}
