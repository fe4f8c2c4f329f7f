//! Zero-copy indirect and segmented views over borrowed sequences.
//!
//! Two adaptors, one composition:
//!
//! - [`IndirectView`] presents a sequence of integral cursors as a sequence of
//!   [`Position`]s into a backing slice. Element `i` is `backing[cursors[i]]`'s
//!   position, not its value.
//! - [`SegmentedView`] presents `N + 1` boundary positions as `N` contiguous
//!   sub-slices of the backing slice.
//!
//! Feeding the first into the second turns a flat value array plus an offsets
//! array into a ragged array, with no intermediate allocation:
//!
//! ```
//! use iview_views::{SequenceView, indirect_view, segmented_view};
//!
//! let items = [0, 1, 2, 3, 4, 5];
//! let offsets = [0, 2, 2, 3, 6];
//! let groups = segmented_view(indirect_view(&items, &offsets)).unwrap();
//!
//! assert_eq!(groups.len(), 4);
//! assert_eq!(groups.get(0), Some(&[0, 1][..]));
//! assert_eq!(groups.get(1), Some(&[][..]));
//! assert_eq!(groups.get(3), Some(&[3, 4, 5][..]));
//! ```
//!
//! # Checked and unchecked access
//!
//! Constructors come in pairs. `new` is O(1) and trusts the caller; `try_new`
//! walks the whole input once and reports the first [`ViewError`]. Unchecked
//! views never invoke undefined behavior: dereferencing an invalid position
//! panics instead. Enabling the `checked` feature makes [`SegmentedView::new`]
//! validate its boundaries as well.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod cursor;
pub mod error;
pub mod indirect;
pub mod position;
pub mod segmented;
pub mod traits;

pub use cursor::{Cursor, Iter};
pub use error::ViewError;
pub use indirect::{IndirectView, indirect_view};
pub use position::Position;
pub use segmented::{SegmentedView, segmented_view};
pub use traits::{CursorIndex, SequenceView};
