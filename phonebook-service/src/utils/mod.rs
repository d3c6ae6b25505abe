pub mod extract;
pub mod validation;

pub use extract::{PersonIdPath, ValidatedJson};
