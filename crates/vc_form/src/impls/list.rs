use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::any::Any;

use crate::info::{ArrayInfo, FormInfo, GenericInfoCell, ListInfo, Typed};
use crate::ops::{Array, Form, FormMut, FormRef, List, impl_cast_fn};

macro_rules! impl_list {
    ($ty:ident, $push:ident, $($get:tt)+) => {
        impl<T: Form + Default> Typed for $ty<T> {
            fn form_info() -> &'static FormInfo {
                static CELL: GenericInfoCell = GenericInfoCell::new();
                CELL.get_or_insert::<Self>(|| FormInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Form + Default> Form for $ty<T> {
            #[inline]
            fn form_ref(&self) -> FormRef<'_> {
                FormRef::List(self)
            }

            #[inline]
            fn form_mut(&mut self) -> FormMut<'_> {
                FormMut::List(self)
            }

            impl_cast_fn!();
        }

        impl<T: Form + Default> List for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Form> {
                $($get)+(self, index).map(|item| item as &dyn Form)
            }

            #[inline]
            fn new_item(&self) -> Box<dyn Form> {
                Box::new(T::default())
            }

            fn push(&mut self, item: Box<dyn Form>) -> Result<(), Box<dyn Any>> {
                let item = item.into_any().downcast::<T>()?;
                self.$push(*item);
                Ok(())
            }
        }
    };
}

impl_list!(Vec, push, <[T]>::get);
impl_list!(VecDeque, push_back, VecDeque::get);

// -----------------------------------------------------------------------------
// Array

impl<T: Form, const N: usize> Typed for [T; N] {
    fn form_info() -> &'static FormInfo {
        static CELL: GenericInfoCell = GenericInfoCell::new();
        CELL.get_or_insert::<Self>(|| FormInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Form, const N: usize> Form for [T; N] {
    #[inline]
    fn form_ref(&self) -> FormRef<'_> {
        FormRef::Array(self)
    }

    #[inline]
    fn form_mut(&mut self) -> FormMut<'_> {
        FormMut::Array(self)
    }

    impl_cast_fn!();
}

impl<T: Form, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Form> {
        self.as_slice().get(index).map(|item| item as &dyn Form)
    }
}
