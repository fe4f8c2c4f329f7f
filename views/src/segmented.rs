//! Views that cut a backing slice into contiguous segments.
//!
//! A boundary sequence of `N + 1` [`Position`]s describes `N` segments:
//! segment `i` is `[boundaries[i], boundaries[i + 1])`. The last boundary only
//! ever closes a segment. Equal adjacent boundaries give an empty segment.
//!
//! The boundary sequence is any [`SequenceView`] of positions, most often an
//! [`IndirectView`](crate::IndirectView) over an offsets array:
//!
//! ```
//! use iview_views::{SequenceView, indirect_view, segmented_view};
//!
//! let items = [0, 1, 2, 3, 4, 5];
//! let offsets = vec![0u32, 2, 2, 3, 6];
//! let groups = segmented_view(indirect_view(&items, &offsets)).unwrap();
//!
//! let collected: Vec<&[i32]> = groups.iter().collect();
//! assert_eq!(collected, [&[0, 1][..], &[][..], &[2][..], &[3, 4, 5][..]]);
//! ```

use crate::cursor::Iter;
use crate::error::ViewError;
use crate::position::Position;
use crate::traits::SequenceView;

/// A sequence of sub-slices delimited by consecutive boundary positions.
///
/// The default value is an unbound placeholder with no segments.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentedView<B> {
    boundaries: B,
}

static_assertions::assert_eq_size!(
    SegmentedView<crate::IndirectView<'static, u64, &'static [u32]>>,
    [usize; 4]
);

impl<'a, T: 'a, B> SegmentedView<B>
where
    B: SequenceView<Item = Position<'a, T>>,
{
    /// Creates a view over `boundaries` without inspecting them.
    ///
    /// Fails only when there are no boundaries at all. With the `checked`
    /// feature this validates like [`try_new`](Self::try_new).
    pub fn new(boundaries: B) -> Result<Self, ViewError> {
        if boundaries.is_empty() {
            tracing::debug!("rejected empty boundary sequence");
            return Err(ViewError::EmptyBoundaries);
        }
        let view = SegmentedView { boundaries };
        #[cfg(feature = "checked")]
        view.validate()?;
        Ok(view)
    }

    /// Creates a view after checking the whole boundary sequence.
    ///
    /// All boundaries must share one backing slice, lie within
    /// `[0, len(backing)]`, and be non-decreasing.
    pub fn try_new(boundaries: B) -> Result<Self, ViewError> {
        let view = SegmentedView { boundaries };
        view.validate()?;
        Ok(view)
    }

    pub fn validate(&self) -> Result<(), ViewError> {
        let Some(first) = self.boundaries.get(0) else {
            tracing::debug!("rejected empty boundary sequence");
            return Err(ViewError::EmptyBoundaries);
        };
        check_in_range(0, first)?;

        let mut previous = first;
        for slot in 1..self.boundaries.len() {
            let Some(current) = self.boundaries.get(slot) else {
                break;
            };
            if !current.same_origin(&first) {
                tracing::debug!(slot, "boundary refers to a different backing sequence");
                return Err(ViewError::OriginMismatch { slot });
            }
            check_in_range(slot, current)?;
            check_ordered(slot - 1, previous, current)?;
            previous = current;
        }
        Ok(())
    }

    #[inline]
    pub fn boundaries(&self) -> &B {
        &self.boundaries
    }

    /// The boundary positions delimiting segment `slot`.
    #[inline]
    pub fn bounds(&self, slot: usize) -> Option<(Position<'a, T>, Position<'a, T>)> {
        if slot >= self.len() {
            return None;
        }
        Some((self.boundaries.get(slot)?, self.boundaries.get(slot + 1)?))
    }

    /// The length of segment `slot`, measured as the distance between its
    /// boundaries.
    pub fn segment_len(&self, slot: usize) -> Option<usize> {
        let (start, end) = self.bounds(slot)?;
        usize::try_from(end - start).ok()
    }

    /// Segment `slot`, or the reason its boundaries do not form one.
    pub fn try_get(&self, slot: usize) -> Result<&'a [T], ViewError> {
        let Some((start, end)) = self.bounds(slot) else {
            return Err(ViewError::SlotOutOfRange {
                slot,
                len: self.len(),
            });
        };
        if !start.same_origin(&end) {
            return Err(ViewError::OriginMismatch { slot: slot + 1 });
        }
        check_in_range(slot, start)?;
        check_in_range(slot + 1, end)?;
        check_ordered(slot, start, end)?;
        Ok(&start.backing()[start.index()..end.index()])
    }
}

fn check_in_range<T>(slot: usize, boundary: Position<'_, T>) -> Result<(), ViewError> {
    let len = boundary.backing().len();
    let index = boundary.index();
    if index > len {
        tracing::debug!(slot, index, len, "boundary out of range");
        return Err(ViewError::BoundaryOutOfRange { slot, index, len });
    }
    Ok(())
}

fn check_ordered<T>(slot: usize, start: Position<'_, T>, end: Position<'_, T>) -> Result<(), ViewError> {
    if start > end {
        let (start, end) = (start.index(), end.index());
        tracing::debug!(slot, start, end, "boundaries decrease");
        return Err(ViewError::NonMonotonic { slot, start, end });
    }
    Ok(())
}

#[cold]
#[track_caller]
fn malformed_segment(slot: usize, start: usize, end: usize) -> ! {
    panic!("segment {slot} has malformed boundaries [{start}, {end})")
}

impl<'a, T: 'a, B> SequenceView for SegmentedView<B>
where
    B: SequenceView<Item = Position<'a, T>>,
{
    type Item = &'a [T];

    /// One less than the number of boundaries.
    #[inline]
    fn len(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Segment `index`, or `None` if `index >= self.len()`.
    ///
    /// # Panics
    ///
    /// Panics if the two boundaries do not form a sub-slice of one backing
    /// slice. [`SegmentedView::try_get`] reports this as an error instead.
    #[inline]
    #[track_caller]
    fn get(&self, index: usize) -> Option<&'a [T]> {
        let (start, end) = self.bounds(index)?;
        match start.span_to(end) {
            Some(segment) => Some(segment),
            None => malformed_segment(index, start.index(), end.index()),
        }
    }
}

impl<'a, T: 'a, B> IntoIterator for SegmentedView<B>
where
    B: SequenceView<Item = Position<'a, T>>,
{
    type Item = &'a [T];
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Iter<Self> {
        Iter::new(self)
    }
}

impl<'a, T: 'a, B> IntoIterator for &SegmentedView<B>
where
    B: SequenceView<Item = Position<'a, T>> + Copy,
{
    type Item = &'a [T];
    type IntoIter = Iter<SegmentedView<B>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(*self)
    }
}

/// Creates a [`SegmentedView`] over `boundaries`.
///
/// This is [`SegmentedView::new`]: O(1), and it fails only for an empty
/// boundary sequence.
pub fn segmented_view<'a, T: 'a, B>(boundaries: B) -> Result<SegmentedView<B>, ViewError>
where
    B: SequenceView<Item = Position<'a, T>>,
{
    SegmentedView::new(boundaries)
}
