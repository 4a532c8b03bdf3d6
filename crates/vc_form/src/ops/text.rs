use alloc::string::String;

use crate::error::TextError;

/// A custom text codec.
///
/// A type implementing this trait is written as a single leaf and read back
/// from one, whatever its internal shape. Both engines check for it before any
/// structural or scalar handling. Register a type with
/// [`impl_form_text!`](crate::impl_form_text).
///
/// # Examples
///
/// ```
/// use vc_form::{FormText, TextError, impl_form_text};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Date { year: u16, month: u8, day: u8 }
///
/// impl FormText for Date {
///     fn to_form_text(&self) -> Result<String, TextError> {
///         Ok(format!("{:04}.{:02}.{:02}", self.year, self.month, self.day))
///     }
///
///     fn set_form_text(&mut self, text: &str) -> Result<(), TextError> {
///         let mut parts = text.split('.');
///         let mut next = || parts.next().ok_or("expected yyyy.mm.dd");
///         self.year = next()?.parse()?;
///         self.month = next()?.parse()?;
///         self.day = next()?.parse()?;
///         Ok(())
///     }
/// }
///
/// impl_form_text!(Date);
///
/// #[derive(vc_form::Form, Default)]
/// struct Event { date: Date }
///
/// let event: Event = vc_form::from_str("date=2025.02.08").unwrap();
/// assert_eq!(event.date, Date { year: 2025, month: 2, day: 8 });
/// assert_eq!(vc_form::to_string(&event).unwrap(), "date=2025.02.08");
/// ```
pub trait FormText: Send + Sync + 'static {
    fn to_form_text(&self) -> Result<String, TextError>;

    fn set_form_text(&mut self, text: &str) -> Result<(), TextError>;
}

/// Implement [`Typed`](crate::info::Typed) and [`Form`](crate::Form) for a
/// non-generic type that implements [`FormText`].
#[macro_export]
macro_rules! impl_form_text {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            fn form_info() -> &'static $crate::info::FormInfo {
                static CELL: $crate::info::NonGenericInfoCell = $crate::info::NonGenericInfoCell::new();
                CELL.get_or_init(|| $crate::info::FormInfo::Text($crate::info::Type::of::<Self>()))
            }
        }

        impl $crate::Form for $ty {
            #[inline]
            fn form_ref(&self) -> $crate::ops::FormRef<'_> {
                $crate::ops::FormRef::Text(self)
            }

            #[inline]
            fn form_mut(&mut self) -> $crate::ops::FormMut<'_> {
                $crate::ops::FormMut::Text(self)
            }

            #[inline]
            fn as_form(&self) -> &dyn $crate::Form {
                self
            }

            #[inline]
            fn as_form_mut(&mut self) -> &mut dyn $crate::Form {
                self
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::core::any::Any> {
                self
            }
        }
    )+};
}
