pub mod coefficient;
pub mod damerau;
pub mod hamming;
