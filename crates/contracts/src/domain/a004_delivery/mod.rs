pub mod aggregate;

pub use aggregate::{Delivery, DeliveryStatus};
