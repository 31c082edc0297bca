pub mod config;
pub mod event_bus;
pub mod format;
pub mod list_page;
pub mod logger;
pub mod record_filter;
pub mod selection;
pub mod store;
