pub use alignable::{Alignable, Reversed, Window};

mod alignable;
pub mod num;
