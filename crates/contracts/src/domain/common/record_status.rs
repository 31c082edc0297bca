/// Closed status set of one domain.
///
/// Status is the single source of truth for completion: the completion
/// flag shown in the UI is always derived from it.
pub trait RecordStatus: Copy + Eq + std::fmt::Debug + 'static {
    /// Get display label (also the wire value)
    fn label(&self) -> &'static str;

    /// Get all statuses in workflow order
    fn all() -> &'static [Self];

    /// Status a new record starts in
    fn initial() -> Self;

    /// Status set when the record is marked done
    fn completed() -> Self;

    /// Status restored when a done record is reopened
    fn reopened() -> Self;

    /// Statuses that end the workflow (done or abandoned)
    fn is_terminal(&self) -> bool;

    /// Parse from label
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|s| s.label()).collect()
    }

    fn terminal_labels() -> Vec<&'static str> {
        Self::all()
            .iter()
            .filter(|s| s.is_terminal())
            .map(|s| s.label())
            .collect()
    }
}
