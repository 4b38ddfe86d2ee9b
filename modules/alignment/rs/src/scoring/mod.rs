pub use costs::Costs;
pub use scheme::Scheme;

mod costs;
pub mod equiv;
mod scheme;
pub mod symbols;
