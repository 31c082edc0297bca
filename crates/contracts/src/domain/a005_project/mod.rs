pub mod aggregate;

pub use aggregate::{Project, ProjectStatus};
