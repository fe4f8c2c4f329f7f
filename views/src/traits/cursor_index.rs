/// An integral value that selects an element of a backing sequence.
pub trait CursorIndex: Copy {
    /// Converts the cursor to a slice index.
    ///
    /// Returns `None` for values no slice index can represent (negative
    /// values of signed types, or values wider than `usize`).
    fn to_index(self) -> Option<usize>;
}

macro_rules! impl_cursor_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CursorIndex for $ty {
                #[inline]
                fn to_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_cursor_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
