use alloc::boxed::Box;

use crate::info::{FormInfo, GenericInfoCell, OptionalInfo, Typed};
use crate::ops::{Form, FormMut, FormRef, Optional, impl_cast_fn};

// -----------------------------------------------------------------------------
// Option

impl<T: Form + Default> Typed for Option<T> {
    fn form_info() -> &'static FormInfo {
        static CELL: GenericInfoCell = GenericInfoCell::new();
        CELL.get_or_insert::<Self>(|| FormInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Form + Default> Form for Option<T> {
    #[inline]
    fn form_ref(&self) -> FormRef<'_> {
        FormRef::Optional(self)
    }

    #[inline]
    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Optional(self)
    }

    impl_cast_fn!();
}

impl<T: Form + Default> Optional for Option<T> {
    #[inline]
    fn get(&self) -> Option<&dyn Form> {
        self.as_ref().map(|value| value as &dyn Form)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut dyn Form> {
        self.as_mut().map(|value| value as &mut dyn Form)
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> &mut dyn Form {
        self.get_or_insert_with(T::default)
    }
}

// -----------------------------------------------------------------------------
// Box

// A box is transparent: it shares the description and kind of its contents.
impl<T: Form + Typed> Typed for Box<T> {
    #[inline]
    fn form_info() -> &'static FormInfo {
        T::form_info()
    }
}

impl<T: Form + Typed> Form for Box<T> {
    #[inline]
    fn form_ref(&self) -> FormRef<'_> {
        (**self).form_ref()
    }

    #[inline]
    fn form_mut(&mut self) -> FormMut<'_> {
        (**self).form_mut()
    }

    impl_cast_fn!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::FormKind;

    #[test]
    fn option_slot() {
        let mut slot: Option<u32> = None;
        assert!(Optional::get(&slot).is_none());

        let inner = Optional::get_or_insert_default(&mut slot);
        assert!(inner.is::<u32>());
        assert_eq!(slot, Some(0));

        let info = <Option<u32>>::form_info();
        assert_eq!(info.kind(), FormKind::Optional);
        assert!(info.as_optional().unwrap().inner().is::<u32>());
    }

    #[test]
    fn box_is_transparent() {
        let boxed = Box::new(String::from("x"));
        assert_eq!(boxed.form_ref().kind(), FormKind::Scalar);
        assert_eq!(<Box<String>>::form_info().type_path(), "alloc::string::String");
    }
}
