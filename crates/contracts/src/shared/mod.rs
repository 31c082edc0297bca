pub mod record_filter;
