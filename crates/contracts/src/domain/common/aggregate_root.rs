use crate::shared::record_filter::{FilterConfig, FilterableRecord};

use super::RecordStatus;

/// Root trait for records listed on a dashboard page.
///
/// Besides per-record accessors it carries the static description of the
/// domain: its name and the filter configuration of its list page.
pub trait AggregateRoot: FilterableRecord + Clone {
    /// Status enum of the domain
    type Status: RecordStatus;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn status_value(&self) -> Self::Status;

    /// Return a copy with a different status
    fn with_status(&self, status: Self::Status) -> Self;

    /// Return a copy under a new id, reset to the initial status
    fn duplicate_as(&self, id: String) -> Self;

    /// Amount shown in list totals
    fn amount(&self) -> i64;

    /// Derived completion flag
    fn is_completed(&self) -> bool {
        self.status_value() == Self::Status::completed()
    }

    /// Mark done or reopen.
    ///
    /// A record already in the requested state is returned unchanged, so
    /// reopening a cancelled record keeps it cancelled.
    fn with_completion(&self, done: bool) -> Self {
        match (done, self.is_completed()) {
            (true, false) => self.with_status(Self::Status::completed()),
            (false, true) => self.with_status(Self::Status::reopened()),
            _ => self.clone(),
        }
    }

    // ============================================================================
    // Domain metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a002")
    fn aggregate_index() -> &'static str;

    /// Collection key used for seed files and CLI arguments
    fn collection_name() -> &'static str;

    /// List name for UI
    fn list_name() -> &'static str;

    /// Search/date/amount field layout of the list page
    fn filter_config() -> FilterConfig;
}
