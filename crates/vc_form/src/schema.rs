//! Cached field metadata of record types.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use crate::info::{RecordInfo, TypeIdMap, type_id_map};
use crate::tag::{FieldTag, parse_tag};

/// Per-record [`FieldTag`]s, computed once per type and shared afterwards.
///
/// Each [`FormCodec`](crate::FormCodec) owns one cache. Entries are created on
/// the first decode or encode that meets a record type and are never evicted.
/// Under concurrent first access the tags are still computed only once;
/// later readers take the read lock and clone an [`Arc`].
pub struct SchemaCache {
    entries: RwLock<TypeIdMap<Arc<[FieldTag]>>>,
}

impl SchemaCache {
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(type_id_map()),
        }
    }

    /// Tags of every field of `info`, in declaration order.
    ///
    /// Ignored fields are kept so that positions match
    /// [`Record::field_at`](crate::ops::Record::field_at). A tag without a
    /// name takes the field identifier.
    pub fn fields_of(&self, info: &RecordInfo) -> Arc<[FieldTag]> {
        let type_id = info.ty().id();

        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(tags) = entries.get(&type_id) {
            return tags.clone();
        }
        drop(entries);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(type_id)
            .or_insert_with(|| Self::derive(info))
            .clone()
    }

    /// Index of the field that decodes `name`, skipping ignored fields.
    pub fn find_field(&self, info: &RecordInfo, name: &str) -> Option<usize> {
        self.fields_of(info)
            .iter()
            .position(|tag| !tag.ignore && tag.name == name)
    }

    /// Whether the tags of `type_id` have been computed.
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&type_id)
    }

    /// Number of cached record types.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn derive(info: &RecordInfo) -> Arc<[FieldTag]> {
        log::debug!("computing form field tags of `{}`", info.ty().path());

        info.fields()
            .iter()
            .map(|field| {
                let mut tag = parse_tag(field.tag());
                if tag.name.is_empty() && !tag.ignore {
                    tag.name = field.ident().into();
                }
                tag
            })
            .collect::<Vec<_>>()
            .into()
    }
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use super::*;
    use crate::info::{FieldInfo, FormInfo, NonGenericInfoCell, Typed};

    struct Sample;

    impl Typed for Sample {
        fn form_info() -> &'static FormInfo {
            static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
            CELL.get_or_init(|| {
                FormInfo::Record(RecordInfo::new::<Self>(&[
                    FieldInfo::new("id", ""),
                    FieldInfo::new("secret", "-"),
                    FieldInfo::new("user_name", "name,omitempty"),
                    FieldInfo::new("extra", ",ignore"),
                    FieldInfo::new("note", ",omitempty"),
                ]))
            })
        }
    }

    fn sample_info() -> &'static RecordInfo {
        Sample::form_info().as_record().unwrap()
    }

    #[test]
    fn derives_names() {
        let cache = SchemaCache::new();
        let tags = cache.fields_of(sample_info());
        let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
        assert_eq!(names, ["id", "", "name", "", "note"]);
        assert!(tags[1].ignore && tags[3].ignore);
        assert!(tags[2].omit_if_empty && tags[4].omit_if_empty);
    }

    #[test]
    fn find_field_skips_ignored() {
        let cache = SchemaCache::new();
        assert_eq!(cache.find_field(sample_info(), "name"), Some(2));
        assert_eq!(cache.find_field(sample_info(), "user_name"), None);
        assert_eq!(cache.find_field(sample_info(), "secret"), None);
        assert_eq!(cache.find_field(sample_info(), ""), None);
    }

    #[test]
    fn computed_once_under_contention() {
        let cache = SchemaCache::new();
        let barrier = Barrier::new(8);

        let results: Vec<Arc<[FieldTag]>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.fields_of(sample_info())
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.len(), 1);
        assert!(cache.contains(TypeId::of::<Sample>()));
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
