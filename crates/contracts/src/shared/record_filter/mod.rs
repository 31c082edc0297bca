//! Shared filter model for every list page of the dashboard.
//!
//! The filter panel produces raw bucket labels, the page keeps them in
//! [`FilterCriteria`], and each domain declares which of its fields the
//! buckets apply to through a [`FilterConfig`].

pub mod buckets;
pub mod config;
pub mod criteria;
pub mod date;
pub mod generic;
pub mod record;

pub use buckets::*;
pub use config::*;
pub use criteria::*;
pub use date::parse_record_date;
pub use generic::GenericRecord;
pub use record::FilterableRecord;
