//! Views that select elements of a backing slice through a cursor sequence.
//!
//! `IndirectView` neither copies nor reorders the backing data. Element `i`
//! is the [`Position`] `begin(backing) + cursors[i]`; the caller dereferences
//! it for the value or pairs it with another position to form a sub-slice.
//!
//! # Example
//!
//! ```
//! use iview_views::{SequenceView, indirect_view};
//!
//! let items = [3, 5, 7, 11];
//! let selection = [3, 1];
//! let selected = indirect_view(&items, &selection);
//!
//! assert_eq!(selected.len(), 2);
//! assert_eq!(selected.resolve(0), Some(&11));
//! assert_eq!(*selected.get(1).unwrap().value(), 5);
//! ```

use core::fmt::{self, Debug};

use crate::cursor::Iter;
use crate::error::ViewError;
use crate::position::Position;
use crate::traits::{CursorIndex, SequenceView};

/// A sequence of positions into `backing`, one per cursor in `cursors`.
///
/// Holds only a reference to the backing slice and the cursor sequence
/// (itself usually a borrowed slice), so it is `Copy` whenever the cursor
/// sequence is.
pub struct IndirectView<'a, T, S> {
    backing: &'a [T],
    cursors: S,
}

static_assertions::assert_eq_size!(IndirectView<'static, u64, &'static [u32]>, [usize; 4]);
static_assertions::assert_impl_all!(IndirectView<'static, u64, &'static [u32]>: Copy, Send, Sync);

// --- Manual Clone/Copy/Debug/Default to avoid bounds on T ---

impl<T, S: Clone> Clone for IndirectView<'_, T, S> {
    fn clone(&self) -> Self {
        IndirectView {
            backing: self.backing,
            cursors: self.cursors.clone(),
        }
    }
}

impl<T, S: Copy> Copy for IndirectView<'_, T, S> {}

impl<T, S: Debug> Debug for IndirectView<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectView")
            .field("backing_len", &self.backing.len())
            .field("cursors", &self.cursors)
            .finish()
    }
}

/// An unbound placeholder over an empty backing slice.
impl<T, S: Default> Default for IndirectView<'_, T, S> {
    fn default() -> Self {
        IndirectView {
            backing: &[],
            cursors: S::default(),
        }
    }
}

impl<'a, T, S> IndirectView<'a, T, S>
where
    S: SequenceView,
    S::Item: CursorIndex,
{
    /// Creates a view without inspecting the cursors.
    ///
    /// Out-of-range cursors are not detected here; their positions fail to
    /// dereference later. A cursor equal to `backing.len()` is how offsets
    /// arrays spell their final boundary, so it is never rejected eagerly.
    #[inline]
    pub fn new(backing: &'a [T], cursors: S) -> Self {
        IndirectView { backing, cursors }
    }

    /// Creates a view after checking every cursor against the backing slice.
    pub fn try_new(backing: &'a [T], cursors: S) -> Result<Self, ViewError> {
        let view = IndirectView { backing, cursors };
        view.validate()?;
        Ok(view)
    }

    /// Checks that every cursor selects an element of the backing slice.
    pub fn validate(&self) -> Result<(), ViewError> {
        let len = self.backing.len();
        for slot in 0..self.cursors.len() {
            let Some(cursor) = self.cursors.get(slot) else {
                break;
            };
            match cursor.to_index() {
                None => {
                    tracing::debug!(slot, "cursor cannot index a sequence");
                    return Err(ViewError::NegativeCursor { slot });
                }
                Some(index) if index >= len => {
                    tracing::debug!(slot, index, len, "cursor out of range");
                    return Err(ViewError::CursorOutOfRange { slot, index, len });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    #[inline]
    pub fn backing(&self) -> &'a [T] {
        self.backing
    }

    #[inline]
    pub fn cursors(&self) -> &S {
        &self.cursors
    }

    /// The element selected by cursor `slot`, or `None` if `slot` is past
    /// the end of the view or its cursor is out of range.
    #[inline]
    pub fn resolve(&self, slot: usize) -> Option<&'a T> {
        self.get(slot)?.get()
    }

    /// Like [`resolve`](Self::resolve), but says why the lookup failed.
    pub fn try_resolve(&self, slot: usize) -> Result<&'a T, ViewError> {
        let Some(cursor) = self.cursors.get(slot) else {
            return Err(ViewError::SlotOutOfRange {
                slot,
                len: self.cursors.len(),
            });
        };
        let index = cursor
            .to_index()
            .ok_or(ViewError::NegativeCursor { slot })?;
        self.backing.get(index).ok_or(ViewError::CursorOutOfRange {
            slot,
            index,
            len: self.backing.len(),
        })
    }
}

impl<'a, T, S> SequenceView for IndirectView<'a, T, S>
where
    S: SequenceView,
    S::Item: CursorIndex,
{
    type Item = Position<'a, T>;

    #[inline]
    fn len(&self) -> usize {
        self.cursors.len()
    }

    /// The position selected by cursor `index`.
    ///
    /// A cursor that cannot index any sequence yields a position at
    /// `usize::MAX`, which never dereferences.
    #[inline]
    fn get(&self, index: usize) -> Option<Position<'a, T>> {
        let cursor = self.cursors.get(index)?;
        Some(Position::new(
            self.backing,
            cursor.to_index().unwrap_or(usize::MAX),
        ))
    }
}

impl<'a, T, S> IntoIterator for IndirectView<'a, T, S>
where
    S: SequenceView,
    S::Item: CursorIndex,
{
    type Item = Position<'a, T>;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<'a, T, S> IntoIterator for &IndirectView<'a, T, S>
where
    S: SequenceView + Copy,
    S::Item: CursorIndex,
{
    type Item = Position<'a, T>;
    type IntoIter = Iter<IndirectView<'a, T, S>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(*self)
    }
}

/// Creates an [`IndirectView`] of `backing` through `cursors`.
///
/// This is [`IndirectView::new`]: O(1) and unchecked.
#[inline]
pub fn indirect_view<'a, T, S>(backing: &'a [T], cursors: S) -> IndirectView<'a, T, S>
where
    S: SequenceView,
    S::Item: CursorIndex,
{
    IndirectView::new(backing, cursors)
}

#[cfg(test)]
mod tests {
    use super::{IndirectView, indirect_view};
    use crate::error::ViewError;
    use crate::test_utils::init_test_logging;
    use crate::traits::SequenceView;

    #[test]
    fn default_is_an_empty_placeholder() {
        let view: IndirectView<'_, i32, &[u32]> = IndirectView::default();
        assert_eq!(view.len(), 0);
        assert_eq!(view.begin(), view.end());
    }

    #[test]
    fn positions_follow_the_cursors() {
        let items = [3, 5, 7, 11];
        let selection = vec![3usize, 1, 1, 0];
        let view = indirect_view(&items, &selection);

        let indices: Vec<usize> = view.iter().map(|p| p.index()).collect();
        assert_eq!(indices, selection);

        let values: Vec<i32> = view.iter().map(|p| *p.value()).collect();
        assert_eq!(values, vec![11, 5, 5, 3]);
    }

    #[test]
    fn positions_share_the_backing_origin() {
        let items = [3, 5, 7, 11];
        let selection = [0u8, 3];
        let view = indirect_view(&items, &selection);

        let first = view.get(0).unwrap();
        let second = view.get(1).unwrap();
        assert!(first.same_origin(&second));
        assert_eq!(second - first, 3);
        assert_eq!(first.span_to(second), Some(&[3, 5, 7][..]));
    }

    #[test]
    fn resolve_out_of_range_cursor() {
        let items = [3, 5];
        let selection = [1i32, 2, -1];
        let view = IndirectView::new(&items, &selection);

        assert_eq!(view.resolve(0), Some(&5));
        assert_eq!(view.resolve(1), None);
        assert_eq!(view.resolve(2), None);
        assert_eq!(view.resolve(3), None);

        assert_eq!(view.try_resolve(0), Ok(&5));
        assert_eq!(
            view.try_resolve(1),
            Err(ViewError::CursorOutOfRange {
                slot: 1,
                index: 2,
                len: 2
            })
        );
        assert_eq!(view.try_resolve(2), Err(ViewError::NegativeCursor { slot: 2 }));
        assert_eq!(
            view.try_resolve(3),
            Err(ViewError::SlotOutOfRange { slot: 3, len: 3 })
        );
    }

    #[test]
    fn try_new_reports_the_first_bad_cursor() {
        init_test_logging();
        let items = [3, 5, 7, 11];

        assert!(IndirectView::try_new(&items, &[3u32, 0, 2]).is_ok());
        assert_eq!(
            IndirectView::try_new(&items, &[0u32, 4, 9]).unwrap_err(),
            ViewError::CursorOutOfRange {
                slot: 1,
                index: 4,
                len: 4
            }
        );
        assert_eq!(
            IndirectView::try_new(&items, &[-2i64]).unwrap_err(),
            ViewError::NegativeCursor { slot: 0 }
        );
    }

    #[test]
    fn empty_backing_rejects_any_cursor() {
        let items: [u8; 0] = [];
        assert!(IndirectView::try_new(&items, &[] as &[u32; 0]).is_ok());
        assert!(IndirectView::try_new(&items, &[0u32]).is_err());
    }

    #[test]
    fn views_are_copied_into_iterators() {
        let items = ['a', 'b', 'c'];
        let selection = [2u16, 0];
        let view = indirect_view(&items, &selection);

        let by_ref: Vec<char> = (&view).into_iter().map(|p| *p.value()).collect();
        let by_value: Vec<char> = view.into_iter().map(|p| *p.value()).collect();
        assert_eq!(by_ref, vec!['c', 'a']);
        assert_eq!(by_ref, by_value);
    }
}
