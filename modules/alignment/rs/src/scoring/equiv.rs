/// The equality capability used by edit distances and common subsequences.
///
/// Implementations must be pure and behave as an equivalence relation (reflexive, symmetric,
/// transitive), the DP recurrences are only correct under this assumption.
pub trait Identical<T> {
    /// Determines if two symbols are considered identical.
    fn identical(&self, first: &T, second: &T) -> bool;
}

/// An implementation of the `Identical` trait for any function that takes two references to `T`
/// and returns a `bool`.
impl<T, F> Identical<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn identical(&self, first: &T, second: &T) -> bool {
        self(first, second)
    }
}

/// Structural equality, the default capability.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Equality;

impl<T: PartialEq> Identical<T> for Equality {
    #[inline(always)]
    fn identical(&self, first: &T, second: &T) -> bool {
        first == second
    }
}
