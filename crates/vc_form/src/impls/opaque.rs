use crate::info::{FormInfo, NonGenericInfoCell, Type, Typed};
use crate::ops::{Form, FormMut, FormRef, impl_cast_fn};

// `()` carries no data. It is described so that it can sit in a record, and
// rejected when either engine reaches it.
impl Typed for () {
    fn form_info() -> &'static FormInfo {
        static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
        CELL.get_or_init(|| FormInfo::Opaque(Type::of::<()>()))
    }
}

impl Form for () {
    #[inline]
    fn form_ref(&self) -> FormRef<'_> {
        FormRef::Opaque(self)
    }

    #[inline]
    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Opaque(self)
    }

    impl_cast_fn!();
}
