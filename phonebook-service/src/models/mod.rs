pub mod person;

pub use person::{Person, PERSONS_COLLECTION};
