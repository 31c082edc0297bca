//! Common types and traits for all list-page aggregates

pub mod aggregate_root;
pub mod record_status;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use record_status::RecordStatus;
