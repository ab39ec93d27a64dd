use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

/// Formats the items yielded by an iterator as a debug list. This stands in for
/// `DebugStruct::field_with` so that collections can show their contents as a single field.
pub struct DebugIter<I>(Cell<Option<I>>);

impl<I> DebugIter<I> {
    /// Wraps `iter`, which is consumed by the first format.
    pub const fn new(iter: I) -> DebugIter<I> {
        DebugIter(Cell::new(Some(iter)))
    }
}

impl<I> Debug for DebugIter<I>
where
    I: Iterator,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The iterator is consumed by the first format, any later attempts print an empty list.
        let mut list = f.debug_list();
        if let Some(iter) = self.0.take() {
            list.entries(iter);
        }
        list.finish()
    }
}
