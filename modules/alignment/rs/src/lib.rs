pub use error::Error;
pub use seqdp_core_rs::num::{Cost, PrimUInt, Score};
pub use seqdp_core_rs::{Alignable, Reversed, Window};

pub mod affix;
pub mod distance;
mod error;
pub mod matrix;
pub mod pairwise;
pub mod scoring;
pub mod subsequence;
mod traceback;
