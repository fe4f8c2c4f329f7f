use alloc::vec::Vec;

use crate::cursor::{Cursor, Iter};

/// A random-access sequence whose elements are produced on access.
///
/// This is the one capability both views consume and provide: cursor and
/// boundary sequences are `SequenceView`s, and so are the views themselves,
/// which is what lets one view become the input of another.
///
/// Elements are returned by value. For borrowed slices that means a copy of
/// the element; for views it means a freshly computed [`Position`] or
/// sub-slice.
///
/// [`Position`]: crate::Position
pub trait SequenceView {
    type Item;

    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= self.len()`.
    ///
    /// The element itself is never validated here.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A cursor at the first element.
    fn begin(&self) -> Cursor<Self>
    where
        Self: Copy,
    {
        Cursor::new(*self, 0)
    }

    /// A cursor one past the last element.
    fn end(&self) -> Cursor<Self>
    where
        Self: Copy,
    {
        Cursor::new(*self, self.len())
    }

    fn iter(&self) -> Iter<Self>
    where
        Self: Copy,
    {
        Iter::new(*self)
    }
}

impl<C: Copy> SequenceView for &[C] {
    type Item = C;

    #[inline]
    fn len(&self) -> usize {
        <[C]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<C> {
        <[C]>::get(self, index).copied()
    }
}

impl<C: Copy, const N: usize> SequenceView for &[C; N] {
    type Item = C;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<C> {
        <[C]>::get(self.as_slice(), index).copied()
    }
}

impl<C: Copy> SequenceView for &Vec<C> {
    type Item = C;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<C> {
        <[C]>::get(self.as_slice(), index).copied()
    }
}
