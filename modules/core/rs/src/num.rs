use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// Alignment scores are signed primitive integers. Negative values are meaningful (e.g. gap penalties).
pub trait Score: PrimInt + ::num::Signed {}

impl<T: PrimInt + ::num::Signed> Score for T {}

/// Edit costs: integers or floats that can be scaled by a number of edit operations.
///
/// Costs are expected to be non-negative, the DP recurrences over costs are min-based and
/// rely on the total cost being monotone along any path.
pub trait Cost: ::num::Num + Copy + PartialOrd + Debug + Default {
    /// Converts a number of edit operations into the cost domain.
    fn from_count(count: usize) -> Self;
}

macro_rules! impl_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                #[inline(always)]
                fn from_count(count: usize) -> Self {
                    count as $t
                }
            }
        )*
    };
}

impl_cost!(usize, u32, u64, i32, i64, f32, f64);
