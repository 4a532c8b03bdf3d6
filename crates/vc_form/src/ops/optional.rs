use crate::Form;

/// A slot that may hold no value.
///
/// Decoding through an empty slot fills it with a default value first.
/// Encoding an empty slot writes nothing.
pub trait Optional: Form {
    fn get(&self) -> Option<&dyn Form>;

    fn get_mut(&mut self) -> Option<&mut dyn Form>;

    fn get_or_insert_default(&mut self) -> &mut dyn Form;
}
