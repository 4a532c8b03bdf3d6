use crate::info::FormInfo;

/// Static access to a type's [`FormInfo`].
///
/// Implemented by `#[derive(Form)]`, by [`impl_form_text!`](crate::impl_form_text)
/// and for the standard types in [`impls`](crate::impls). Implementations
/// store the info in a [`NonGenericInfoCell`](crate::info::NonGenericInfoCell)
/// or, for generic types, a [`GenericInfoCell`](crate::info::GenericInfoCell).
pub trait Typed: 'static {
    fn form_info() -> &'static FormInfo;
}

/// Object-safe access to [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    fn dyn_form_info(&self) -> &'static FormInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn dyn_form_info(&self) -> &'static FormInfo {
        T::form_info()
    }
}
