pub mod seed;
pub mod service;

pub use seed::{load_records, parse_seed, SeedSource};
pub use service::ServiceError;
