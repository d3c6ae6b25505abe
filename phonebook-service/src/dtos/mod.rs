pub mod persons;

pub use persons::{CreatePersonRequest, PersonResponse, UpdatePersonRequest};
