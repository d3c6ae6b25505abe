pub mod health;
pub mod info;
pub mod metrics;
pub mod persons;

pub use health::{health_check, readiness_check};
pub use info::info;
pub use metrics::metrics_endpoint;
pub use persons::{create_person, delete_person, get_person, list_persons, update_person};
