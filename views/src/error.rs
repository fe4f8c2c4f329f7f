//! Contract violations reported by the checked constructors and accessors.
//!
//! Unchecked operations never produce these; they panic at the point of an
//! invalid dereference instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// An element past the end of a view was requested.
    #[error("slot {slot} is past the end of a view of length {len}")]
    SlotOutOfRange { slot: usize, len: usize },

    /// A signed cursor was negative, or a cursor did not fit in `usize`.
    #[error("cursor at slot {slot} cannot index a sequence")]
    NegativeCursor { slot: usize },

    /// A cursor selects an element past the end of the backing sequence.
    #[error("cursor at slot {slot} selects index {index} of a backing sequence of length {len}")]
    CursorOutOfRange { slot: usize, index: usize, len: usize },

    /// A segmented view needs a final boundary to close its last segment.
    #[error("a segmented view needs at least one boundary")]
    EmptyBoundaries,

    /// A boundary lies past the end of the backing sequence.
    #[error("boundary {slot} is at index {index}, past the end of a backing sequence of length {len}")]
    BoundaryOutOfRange { slot: usize, index: usize, len: usize },

    /// Boundary `slot` is after boundary `slot + 1`.
    #[error("boundary {slot} is at index {start} but the boundary after it is at index {end}")]
    NonMonotonic { slot: usize, start: usize, end: usize },

    /// A boundary refers to a different backing sequence than boundary 0.
    #[error("boundary {slot} refers to a different backing sequence")]
    OriginMismatch { slot: usize },
}
