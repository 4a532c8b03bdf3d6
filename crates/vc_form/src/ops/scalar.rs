use alloc::string::String;

use crate::Form;
use crate::error::ScalarError;
use crate::info::ScalarKind;

/// A leaf value with a text representation.
pub trait Scalar: Form {
    fn kind(&self) -> ScalarKind;

    /// Render as leaf text.
    fn to_text(&self) -> String;

    /// Parse leaf text. The empty string sets the zero value.
    fn set_text(&mut self, text: &str) -> Result<(), ScalarError>;

    /// Whether this is the zero value, skipped by `omitempty`.
    fn is_zero(&self) -> bool;
}
