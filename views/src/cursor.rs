//! Random-access cursors and iterators over any [`SequenceView`].
//!
//! [`Cursor`] is the position-like handle both views hand out from `begin`
//! and `end`: it supports offset arithmetic, signed distance and ordering, and
//! dereferences to the view's element. [`Iter`] is the ordinary Rust iterator
//! over a view or over a `[begin, end)` cursor pair.

use core::cmp::Ordering;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::traits::SequenceView;

/// A position within a [`SequenceView`].
///
/// Like [`Position`](crate::Position), arithmetic is unchecked and
/// dereference is checked. Comparing or subtracting cursors over different
/// views is a logic error; only the positions are compared.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor<V> {
    view: V,
    index: usize,
}

impl<V: SequenceView> Cursor<V> {
    #[inline]
    pub fn new(view: V, index: usize) -> Self {
        Cursor { view, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The element under the cursor, or `None` past either end.
    #[inline]
    pub fn get(&self) -> Option<V::Item> {
        self.view.get(self.index)
    }

    /// The element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not over an element of its view.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> V::Item {
        match self.view.get(self.index) {
            Some(item) => item,
            None => past_the_end(self.index, self.view.len()),
        }
    }

    /// The element `n` places away, the same as `(cursor + n).get()`.
    #[inline]
    pub fn at(&self, n: isize) -> Option<V::Item> {
        self.view.get(self.index.wrapping_add_signed(n))
    }

    /// Iterates the elements from this cursor up to, not including, `end`.
    pub fn until(self, end: &Cursor<V>) -> Iter<V> {
        debug_assert!(self.index <= end.index, "cursor range is reversed");
        Iter::range(self.view, self.index, end.index)
    }
}

#[cold]
#[track_caller]
fn past_the_end(index: usize, len: usize) -> ! {
    panic!("cursor {index} is out of range for a view of length {len}")
}

impl<V> PartialEq for Cursor<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<V> Eq for Cursor<V> {}

impl<V> PartialOrd for Cursor<V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Cursor<V> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<V> Add<isize> for Cursor<V> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<V> Sub<isize> for Cursor<V> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<V> AddAssign<isize> for Cursor<V> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }
}

impl<V> SubAssign<isize> for Cursor<V> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n.wrapping_neg());
    }
}

impl<V> Sub for Cursor<V> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Cursor<V>) -> isize {
        (self.index as isize).wrapping_sub(other.index as isize)
    }
}

/// A double-ended iterator over a [`SequenceView`].
///
/// Skipping with `nth`/`nth_back` is O(1).
#[derive(Clone, Debug)]
pub struct Iter<V> {
    view: V,
    front: usize,
    back: usize,
}

impl<V: SequenceView> Iter<V> {
    pub(crate) fn new(view: V) -> Self {
        let back = view.len();
        Iter {
            view,
            front: 0,
            back,
        }
    }

    pub(crate) fn range(view: V, start: usize, end: usize) -> Self {
        let back = end.min(view.len());
        Iter {
            view,
            front: start.min(back),
            back,
        }
    }
}

impl<V: SequenceView> Iterator for Iter<V> {
    type Item = V::Item;

    #[inline]
    fn next(&mut self) -> Option<V::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.view.get(self.front);
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<V::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn count(self) -> usize {
        self.back - self.front
    }

    fn last(mut self) -> Option<V::Item> {
        self.next_back()
    }
}

impl<V: SequenceView> DoubleEndedIterator for Iter<V> {
    #[inline]
    fn next_back(&mut self) -> Option<V::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.view.get(self.back)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<V::Item> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<V: SequenceView> ExactSizeIterator for Iter<V> {}

impl<V: SequenceView> FusedIterator for Iter<V> {}

#[cfg(test)]
mod tests {
    use crate::traits::SequenceView;

    #[test]
    fn begin_plus_n_minus_begin_is_n() {
        let values = [10u16, 20, 30, 40];
        let seq = &values;
        let begin = seq.begin();

        for n in 0..=4isize {
            assert_eq!((begin + n) - begin, n);
        }
        assert_eq!(seq.end() - seq.begin(), 4);
    }

    #[test]
    fn cursor_indexing_matches_offset_dereference() {
        let values = [10u16, 20, 30, 40];
        let seq = &values;
        let second = seq.begin() + 1;

        assert_eq!(second.at(2), (second + 2).get());
        assert_eq!(second.at(-1), Some(10));
        assert_eq!(second.at(3), None);
        assert_eq!(second.value(), 20);
    }

    #[test]
    fn increment_and_decrement() {
        let values = [1, 2, 3];
        let seq = &values;
        let mut cursor = seq.begin();

        cursor += 1;
        cursor += 1;
        assert_eq!(cursor.value(), 3);
        cursor -= 1;
        assert_eq!(cursor.value(), 2);
        assert!(cursor > seq.begin());
        assert!(cursor < seq.end());
        assert_eq!(seq.end() - 1, cursor + 1);
    }

    #[test]
    fn until_iterates_a_cursor_range() {
        let values = [1, 2, 3, 4, 5];
        let seq = &values;
        let collected: Vec<_> = (seq.begin() + 1).until(&(seq.end() - 1)).collect();
        assert_eq!(collected, vec![2, 3, 4]);
    }

    #[test]
    fn iter_is_double_ended_and_exact() {
        let values = [1, 2, 3, 4, 5, 6];
        let seq = &values;

        let mut iter = seq.iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(6));
        assert_eq!(iter.nth(1), Some(3));
        assert_eq!(iter.nth_back(0), Some(5));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn nth_past_the_end_exhausts() {
        let values = [1, 2, 3];
        let seq = &values;
        let mut iter = seq.iter();
        assert_eq!(iter.nth(10), None);
        assert_eq!(iter.len(), 0);
        assert_eq!(seq.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(seq.iter().last(), Some(3));
        assert_eq!(seq.iter().count(), 3);
    }

    #[test]
    #[should_panic(expected = "cursor 3 is out of range for a view of length 3")]
    fn value_at_end_panics() {
        let values = [1, 2, 3];
        let seq = &values;
        let _ = seq.end().value();
    }
}
