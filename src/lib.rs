//! iview - Indirect and segmented views over borrowed sequences
//!
//! # Overview
//!
//! iview represents sparse, ragged and grouped data without copying it. Two
//! adaptors do all the work:
//!
//! - An **indirect view** selects or reorders the elements of a backing slice
//!   through a sequence of integral cursors. Its elements are positions into
//!   the backing slice.
//! - A **segmented view** cuts a backing slice into contiguous segments using
//!   a sequence of boundary positions.
//!
//! Chaining them is the compressed-sparse-row access pattern: a flat value
//! array plus an offsets array of length `groups + 1` becomes a random-access
//! sequence of per-group slices.
//!
//! # Quick Start
//!
//! ```
//! use iview::{SequenceView, indirect_view, segmented_view};
//!
//! // Adjacency lists of a 4-node graph, stored flat.
//! let neighbors = [1, 2, 2, 0, 3];
//! let offsets = [0u32, 2, 3, 3, 5];
//!
//! let adjacency = segmented_view(indirect_view(&neighbors, &offsets)).unwrap();
//! assert_eq!(adjacency.len(), 4);
//! assert_eq!(adjacency.get(0), Some(&[1, 2][..]));
//! assert_eq!(adjacency.get(2), Some(&[][..]));
//!
//! let degrees: Vec<usize> = adjacency.iter().map(<[i32]>::len).collect();
//! assert_eq!(degrees, [2, 1, 0, 2]);
//! ```
//!
//! # Checked and Unchecked APIs
//!
//! 1. **Unchecked** (`new`, `get`, `value`): O(1), trusts the caller, and
//!    panics at the first invalid dereference.
//! 2. **Checked** (`try_new`, `try_get`, `try_resolve`, `validate`): reports
//!    contract violations as [`ViewError`] values.
//!
//! ```
//! use iview::{IndirectView, ViewError};
//!
//! let items = [3, 5, 7, 11];
//! let err = IndirectView::try_new(&items, &[0u8, 4]).unwrap_err();
//! assert_eq!(err, ViewError::CursorOutOfRange { slot: 1, index: 4, len: 4 });
//! ```

pub use iview_views::{
    Cursor, CursorIndex, IndirectView, Iter, Position, SegmentedView, SequenceView, ViewError,
    indirect_view, segmented_view,
};

// Modules stay reachable for callers that prefer qualified paths.
pub use iview_views::{cursor, error, indirect, position, segmented, traits};
