//! Random-access positions into a borrowed backing slice.
//!
//! A [`Position`] is what an [`IndirectView`] yields and what a
//! [`SegmentedView`] consumes as a boundary. Because both sides agree on this
//! one type, composition is checked by the compiler rather than by convention.
//!
//! Arithmetic on positions is unchecked, like pointer arithmetic: moving a
//! position past either end of its backing slice is allowed and simply
//! produces a position that does not dereference. Dereferencing is checked,
//! either by returning `None` ([`Position::get`]) or by panicking
//! ([`Position::value`]).
//!
//! [`IndirectView`]: crate::IndirectView
//! [`SegmentedView`]: crate::SegmentedView

use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A position in a borrowed backing slice.
///
/// Positions built over different backing slices must not be compared or
/// subtracted; debug builds assert that both operands share an origin.
pub struct Position<'a, T> {
    backing: &'a [T],
    index: usize,
}

static_assertions::assert_eq_size!(Position<'static, u64>, [usize; 3]);
static_assertions::assert_impl_all!(Position<'static, u64>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Position<'static, core::cell::Cell<u8>>: Send, Sync);

// --- Manual Clone/Copy/Debug/Default to avoid T: Clone/Copy/Debug/Default bounds ---

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T> Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("index", &self.index)
            .field("len", &self.backing.len())
            .finish()
    }
}

/// An unbound placeholder over an empty slice. It is both `begin` and `end`
/// of that slice and never dereferences.
impl<T> Default for Position<'_, T> {
    fn default() -> Self {
        Position {
            backing: &[],
            index: 0,
        }
    }
}

impl<'a, T> Position<'a, T> {
    #[inline]
    pub fn new(backing: &'a [T], index: usize) -> Self {
        Position { backing, index }
    }

    #[inline]
    pub fn begin(backing: &'a [T]) -> Self {
        Position { backing, index: 0 }
    }

    #[inline]
    pub fn end(backing: &'a [T]) -> Self {
        Position {
            backing,
            index: backing.len(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn backing(&self) -> &'a [T] {
        self.backing
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.index == self.backing.len()
    }

    /// Whether both positions point into the same backing slice.
    #[inline]
    pub fn same_origin(&self, other: &Self) -> bool {
        core::ptr::eq(self.backing, other.backing)
    }

    /// The element at this position, or `None` if the position is outside
    /// the backing slice.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.backing.get(self.index)
    }

    /// The element at this position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the backing slice.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &'a T {
        match self.backing.get(self.index) {
            Some(value) => value,
            None => out_of_range(self.index, self.backing.len()),
        }
    }

    /// The sub-slice `[self, end)`.
    ///
    /// Returns `None` if the positions have different origins, if `end`
    /// precedes `self`, or if `end` lies past the end of the backing slice.
    #[inline]
    pub fn span_to(self, end: Position<'a, T>) -> Option<&'a [T]> {
        if !self.same_origin(&end) {
            return None;
        }
        self.backing.get(self.index..end.index)
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("position {index} is out of range for a backing sequence of length {len}")
}

// --- Comparison by index within one origin ---

impl<T> PartialEq for Position<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(self.same_origin(other), "compared positions of different sequences");
        self.index == other.index
    }
}

impl<T> Eq for Position<'_, T> {}

impl<T> PartialOrd for Position<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Position<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.same_origin(other), "compared positions of different sequences");
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for Position<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

// --- Arithmetic ---

impl<T> Add<isize> for Position<'_, T> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for Position<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> AddAssign<isize> for Position<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }
}

impl<T> SubAssign<isize> for Position<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n.wrapping_neg());
    }
}

/// The signed distance from `other` to `self`.
impl<'a, T> Sub for Position<'a, T> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Position<'a, T>) -> isize {
        debug_assert!(self.same_origin(&other), "subtracted positions of different sequences");
        (self.index as isize).wrapping_sub(other.index as isize)
    }
}
