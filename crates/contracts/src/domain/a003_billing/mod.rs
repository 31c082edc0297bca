pub mod aggregate;

pub use aggregate::{Billing, BillingStatus};
