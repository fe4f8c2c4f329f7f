mod cursor_index;
mod sequence_view;

pub use cursor_index::CursorIndex;
pub use sequence_view::SequenceView;
