use alloc::string::{String, ToString};
use core::num::IntErrorKind;

use crate::error::ScalarError;
use crate::info::{FormInfo, NonGenericInfoCell, ScalarInfo, ScalarKind, Typed};
use crate::ops::{Form, FormMut, FormRef, Scalar, impl_cast_fn};

macro_rules! impl_scalar_form {
    ($ty:ty => $kind:expr) => {
        impl Typed for $ty {
            fn form_info() -> &'static FormInfo {
                static CELL: NonGenericInfoCell = NonGenericInfoCell::new();
                CELL.get_or_init(|| FormInfo::Scalar(ScalarInfo::new::<Self>($kind)))
            }
        }

        impl Form for $ty {
            #[inline]
            fn form_ref(&self) -> FormRef<'_> {
                FormRef::Scalar(self)
            }

            #[inline]
            fn form_mut(&mut self) -> FormMut<'_> {
                FormMut::Scalar(self)
            }

            impl_cast_fn!();
        }
    };
}

fn int_error(kind: ScalarKind, text: &str, err: IntErrorKind) -> ScalarError {
    let text = text.into();
    match err {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ScalarError::OutOfRange { kind, text }
        }
        _ => ScalarError::Invalid { kind, text },
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ident => $variant:ident),* $(,)?) => {$(
        impl_scalar_form!($ty => ScalarKind::$variant($ty::BITS as u8));

        impl Scalar for $ty {
            #[inline]
            fn kind(&self) -> ScalarKind {
                ScalarKind::$variant($ty::BITS as u8)
            }

            #[inline]
            fn to_text(&self) -> String {
                self.to_string()
            }

            fn set_text(&mut self, text: &str) -> Result<(), ScalarError> {
                if text.is_empty() {
                    *self = 0;
                    return Ok(());
                }
                *self = text
                    .parse::<$ty>()
                    .map_err(|err| int_error(self.kind(), text, err.kind().clone()))?;
                Ok(())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

impl_integer!(
    i8 => Int, i16 => Int, i32 => Int, i64 => Int, i128 => Int, isize => Int,
    u8 => Uint, u16 => Uint, u32 => Uint, u64 => Uint, u128 => Uint, usize => Uint,
);

// -----------------------------------------------------------------------------
// Floats

/// Whether `text` spells an infinity, as opposed to a finite literal that
/// overflowed into one.
fn is_infinity_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_float {
    ($($ty:ident => $bits:literal),* $(,)?) => {$(
        impl_scalar_form!($ty => ScalarKind::Float($bits));

        impl Scalar for $ty {
            #[inline]
            fn kind(&self) -> ScalarKind {
                ScalarKind::Float($bits)
            }

            /// Shortest text that parses back to the same value, never in
            /// exponent form.
            #[inline]
            fn to_text(&self) -> String {
                self.to_string()
            }

            fn set_text(&mut self, text: &str) -> Result<(), ScalarError> {
                if text.is_empty() {
                    *self = 0.0;
                    return Ok(());
                }
                let kind = self.kind();
                let value = text.parse::<$ty>().map_err(|_| ScalarError::Invalid {
                    kind,
                    text: text.into(),
                })?;
                if value.is_infinite() && !is_infinity_literal(text) {
                    return Err(ScalarError::OutOfRange {
                        kind,
                        text: text.into(),
                    });
                }
                *self = value;
                Ok(())
            }

            /// Only positive zero is the zero value.
            #[inline]
            fn is_zero(&self) -> bool {
                self.to_bits() == 0
            }
        }
    )*};
}

impl_float!(f32 => 32, f64 => 64);

// -----------------------------------------------------------------------------
// bool

impl_scalar_form!(bool => ScalarKind::Bool);

impl Scalar for bool {
    #[inline]
    fn kind(&self) -> ScalarKind {
        ScalarKind::Bool
    }

    #[inline]
    fn to_text(&self) -> String {
        self.to_string()
    }

    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
    fn set_text(&mut self, text: &str) -> Result<(), ScalarError> {
        *self = match text {
            "" => false,
            "1" | "t" | "T" | "TRUE" | "true" | "True" => true,
            "0" | "f" | "F" | "FALSE" | "false" | "False" => false,
            _ => {
                return Err(ScalarError::Invalid {
                    kind: ScalarKind::Bool,
                    text: text.into(),
                });
            }
        };
        Ok(())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

// -----------------------------------------------------------------------------
// char

impl_scalar_form!(char => ScalarKind::Char);

impl Scalar for char {
    #[inline]
    fn kind(&self) -> ScalarKind {
        ScalarKind::Char
    }

    #[inline]
    fn to_text(&self) -> String {
        self.to_string()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ScalarError> {
        let mut chars = text.chars();
        *self = match (chars.next(), chars.next()) {
            (None, _) => '\0',
            (Some(c), None) => c,
            (Some(_), Some(_)) => {
                return Err(ScalarError::Invalid {
                    kind: ScalarKind::Char,
                    text: text.into(),
                });
            }
        };
        Ok(())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

// -----------------------------------------------------------------------------
// String

impl_scalar_form!(String => ScalarKind::String);

impl Scalar for String {
    #[inline]
    fn kind(&self) -> ScalarKind {
        ScalarKind::String
    }

    #[inline]
    fn to_text(&self) -> String {
        self.clone()
    }

    #[inline]
    fn set_text(&mut self, text: &str) -> Result<(), ScalarError> {
        self.clear();
        self.push_str(text);
        Ok(())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: Scalar + Default>(text: &str) -> Result<T, ScalarError> {
        let mut value = T::default();
        value.set_text(text)?;
        Ok(value)
    }

    #[test]
    fn integers() {
        assert_eq!(parse::<i64>("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse::<i64>("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse::<i32>("-0"), Ok(0));
        assert_eq!(parse::<u8>(""), Ok(0));
        assert_eq!(parse::<i8>("+12"), Ok(12));

        assert_eq!(
            parse::<i8>("128"),
            Err(ScalarError::OutOfRange {
                kind: ScalarKind::Int(8),
                text: "128".into()
            })
        );
        assert_eq!(
            parse::<u32>("-1"),
            Err(ScalarError::Invalid {
                kind: ScalarKind::Uint(32),
                text: "-1".into()
            })
        );
        assert!(matches!(parse::<i32>("1.5"), Err(ScalarError::Invalid { .. })));
        assert!(matches!(parse::<i32>(" 1"), Err(ScalarError::Invalid { .. })));
    }

    #[test]
    fn floats() {
        assert_eq!(parse::<f64>("1.5"), Ok(1.5));
        assert_eq!(parse::<f64>(""), Ok(0.0));
        assert_eq!(parse::<f32>("0.1"), Ok(0.1f32));
        assert!(parse::<f64>("inf").unwrap().is_infinite());
        assert!(parse::<f64>("NaN").unwrap().is_nan());
        assert!(matches!(
            parse::<f32>("1e39"),
            Err(ScalarError::OutOfRange { .. })
        ));
        assert!(matches!(parse::<f64>("abc"), Err(ScalarError::Invalid { .. })));

        assert_eq!(0.1f64.to_text(), "0.1");
        assert_eq!(1e21f64.to_text(), "1000000000000000000000");
        assert_eq!(3.0f32.to_text(), "3");
        assert!(0.0f64.is_zero());
        assert!(!(-0.0f64).is_zero());
    }

    #[test]
    fn booleans() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse::<bool>(text), Ok(true), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False", ""] {
            assert_eq!(parse::<bool>(text), Ok(false), "{text}");
        }
        for text in ["yes", "on", "tRuE", "2"] {
            assert!(parse::<bool>(text).is_err(), "{text}");
        }
        assert_eq!(true.to_text(), "true");
    }

    #[test]
    fn chars_and_strings() {
        assert_eq!(parse::<char>("x"), Ok('x'));
        assert_eq!(parse::<char>(""), Ok('\0'));
        assert!(parse::<char>("xy").is_err());

        let mut s = String::from("old");
        s.set_text("new value").unwrap();
        assert_eq!(s, "new value");
        assert!(String::new().is_zero());
    }
}
