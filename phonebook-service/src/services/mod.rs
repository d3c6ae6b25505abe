pub mod database;
pub mod error;
pub mod memory;
pub mod metrics;
pub mod repository;
pub mod store;

pub use database::{MongoDb, MongoPersonStore};
pub use error::PersonError;
pub use memory::InMemoryPersonStore;
pub use metrics::{get_metrics, init_metrics};
pub use repository::PersonRepository;
pub use store::PersonStore;
