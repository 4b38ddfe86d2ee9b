// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use std::ops::Range;

use derive_more::Constructor;
use eyre::{eyre, Result};

/// Trait for fixed-length, random-access, read-only sequences that can be compared and aligned.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if the object is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the object.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Return the reversed version of the alignable object.
    fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }

    /// Return a view over the `[start, end)` region of the alignable object.
    fn window(&self, range: Range<usize>) -> Result<Window<'_, Self>> {
        Window::new(self, range)
    }
}

impl<T> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<A: Alignable + ?Sized> Alignable for &A {
    type Symbol = A::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        (**self).at(pos)
    }
}

/// A helper struct that reverses the order of an alignable object.
#[derive(Constructor, Debug)]
pub struct Reversed<'a, T: Alignable + ?Sized> {
    base: &'a T,
}

impl<T: Alignable + ?Sized> Clone for Reversed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Alignable + ?Sized> Copy for Reversed<'_, T> {}

impl<T: Alignable + ?Sized> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    /// Returns true if the reversed object is empty.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Total length of the reversed object.
    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    /// Returns the symbol at the given position in the reversed object.
    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}

/// A contiguous half-open region [start, end) of an alignable object. Windows never copy the
/// underlying symbols.
#[derive(Debug)]
pub struct Window<'a, T: Alignable + ?Sized> {
    base: &'a T,
    start: usize,
    end: usize,
}

impl<'a, T: Alignable + ?Sized> Window<'a, T> {
    pub fn new(base: &'a T, range: Range<usize>) -> Result<Self> {
        if range.start > range.end || range.end > base.len() {
            return Err(eyre!(
                "Invalid window {:?} for a sequence of length {}",
                range,
                base.len()
            ));
        }
        Ok(Self {
            base,
            start: range.start,
            end: range.end,
        })
    }

    /// A window over [start, end), both bounds are clamped to the valid range.
    pub fn clamped(base: &'a T, start: usize, end: usize) -> Self {
        let end = end.min(base.len());
        Self {
            base,
            start: start.min(end),
            end,
        }
    }

    /// Position of the window start in the underlying object.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position of the window end (exclusive) in the underlying object.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The object this window looks into.
    pub fn base(&self) -> &'a T {
        self.base
    }
}

impl<T: Alignable + ?Sized> Clone for Window<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Alignable + ?Sized> Copy for Window<'_, T> {}

impl<T: Alignable + ?Sized> Alignable for Window<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        debug_assert!(pos < self.len());
        self.base.at(self.start + pos)
    }
}
