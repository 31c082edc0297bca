use serde::{Deserialize, Serialize};

use super::buckets::{AmountRangeBucket, DateRangeBucket, ProgressRangeBucket, ALL_LABEL};

/// Filter dimension a panel control writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Status,
    DateRange,
    AmountRange,
    ProgressRange,
}

impl FilterKind {
    /// Get display name for filter chips
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterKind::Status => "ステータス",
            FilterKind::DateRange => "期日",
            FilterKind::AmountRange => "金額",
            FilterKind::ProgressRange => "進捗",
        }
    }

    pub fn all() -> &'static [FilterKind] {
        &[
            FilterKind::Status,
            FilterKind::DateRange,
            FilterKind::AmountRange,
            FilterKind::ProgressRange,
        ]
    }
}

/// `{type, value}` event emitted by the filter panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEvent {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub value: String,
}

impl FilterEvent {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Active filter chip shown above the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTag {
    pub kind: FilterKind,
    pub value: String,
    pub display_text: String,
}

/// Raw labels currently selected in the filter panel.
///
/// Values are kept exactly as the panel sent them; resolution into buckets
/// happens on read so that unknown labels simply do not filter anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_range: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_date_range(mut self, label: impl Into<String>) -> Self {
        self.date_range = Some(label.into());
        self
    }

    pub fn with_amount_range(mut self, label: impl Into<String>) -> Self {
        self.amount_range = Some(label.into());
        self
    }

    pub fn with_progress_range(mut self, label: impl Into<String>) -> Self {
        self.progress_range = Some(label.into());
        self
    }

    /// Store the value carried by a panel event
    pub fn apply(&mut self, event: &FilterEvent) {
        let slot = match event.kind {
            FilterKind::Status => &mut self.status,
            FilterKind::DateRange => &mut self.date_range,
            FilterKind::AmountRange => &mut self.amount_range,
            FilterKind::ProgressRange => &mut self.progress_range,
        };
        *slot = Some(event.value.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn raw(&self, kind: FilterKind) -> Option<&str> {
        match kind {
            FilterKind::Status => self.status.as_deref(),
            FilterKind::DateRange => self.date_range.as_deref(),
            FilterKind::AmountRange => self.amount_range.as_deref(),
            FilterKind::ProgressRange => self.progress_range.as_deref(),
        }
    }

    /// Status value to compare against, `None` when the dimension is off
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_LABEL)
    }

    pub fn date_bucket(&self) -> Option<DateRangeBucket> {
        self.date_range
            .as_deref()
            .and_then(DateRangeBucket::from_label)
            .filter(|b| *b != DateRangeBucket::All)
    }

    pub fn amount_bucket(&self) -> Option<AmountRangeBucket> {
        self.amount_range
            .as_deref()
            .and_then(AmountRangeBucket::from_label)
            .filter(|b| *b != AmountRangeBucket::All)
    }

    pub fn progress_bucket(&self) -> Option<ProgressRangeBucket> {
        self.progress_range
            .as_deref()
            .and_then(ProgressRangeBucket::from_label)
            .filter(|b| *b != ProgressRangeBucket::All)
    }

    fn is_active(&self, kind: FilterKind, known_statuses: &[String]) -> bool {
        match kind {
            FilterKind::Status => self.status_filter().map_or(false, |s| {
                known_statuses.is_empty() || known_statuses.iter().any(|k| k == s)
            }),
            FilterKind::DateRange => self.date_bucket().is_some(),
            FilterKind::AmountRange => self.amount_bucket().is_some(),
            FilterKind::ProgressRange => self.progress_bucket().is_some(),
        }
    }

    /// Number of dimensions that actually restrict the list (panel badge).
    ///
    /// `known_statuses` is the domain's status set; an empty slice accepts
    /// any non-ALL status value.
    pub fn active_count(&self, known_statuses: &[String]) -> usize {
        FilterKind::all()
            .iter()
            .filter(|k| self.is_active(**k, known_statuses))
            .count()
    }

    /// Chips for every active dimension
    pub fn display_tags(&self, known_statuses: &[String]) -> Vec<FilterTag> {
        FilterKind::all()
            .iter()
            .filter(|k| self.is_active(**k, known_statuses))
            .filter_map(|k| {
                self.raw(*k).map(|value| FilterTag {
                    kind: *k,
                    value: value.to_string(),
                    display_text: format!("{}: {}", k.display_name(), value),
                })
            })
            .collect()
    }
}

/// Complete input of one filtering pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub filters: FilterCriteria,
    #[serde(default)]
    pub incomplete_only: bool,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    pub fn incomplete_only(mut self, on: bool) -> Self {
        self.incomplete_only = on;
        self
    }

    /// Lowercased trimmed search term, `None` for blank input
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
