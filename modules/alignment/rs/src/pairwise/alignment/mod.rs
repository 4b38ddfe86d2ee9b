pub use alignment::{Aligned, Alignment};
pub use op::Op;
pub use step::Step;

mod alignment;
mod op;
mod step;
