use alloc::boxed::Box;
use core::any::Any;

use crate::Form;

/// A growable sequence.
///
/// Decoding appends: [`new_item`](List::new_item) builds a default element,
/// the engine assigns into it, and [`push`](List::push) stores it.
pub trait List: Form {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Form>;

    /// A fresh default element, not yet part of the list.
    fn new_item(&self) -> Box<dyn Form>;

    /// Append an element built by [`new_item`](List::new_item).
    ///
    /// A value of another type is handed back unchanged.
    fn push(&mut self, item: Box<dyn Form>) -> Result<(), Box<dyn Any>>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-size sequence. It is only read, never appended to.
pub trait Array: Form {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Form>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// ItemIter

enum Items<'a> {
    List(&'a dyn List),
    Array(&'a dyn Array),
}

/// Iterator over the elements of a [`List`] or an [`Array`].
pub struct ItemIter<'a> {
    items: Items<'a>,
    index: usize,
}

impl<'a> ItemIter<'a> {
    #[inline]
    pub fn list(list: &'a dyn List) -> Self {
        Self {
            items: Items::List(list),
            index: 0,
        }
    }

    #[inline]
    pub fn array(array: &'a dyn Array) -> Self {
        Self {
            items: Items::Array(array),
            index: 0,
        }
    }

    fn total(&self) -> usize {
        match self.items {
            Items::List(list) => list.len(),
            Items::Array(array) => array.len(),
        }
    }
}

impl<'a> Iterator for ItemIter<'a> {
    type Item = &'a dyn Form;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.items {
            Items::List(list) => list.get(self.index),
            Items::Array(array) => array.get(self.index),
        }?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.total().saturating_sub(self.index);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for ItemIter<'_> {}
