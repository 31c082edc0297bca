use chrono::NaiveDate;
use contracts::shared::record_filter::{
    parse_record_date, AmountRangeBucket, DateRangeBucket, FilterConfig, FilterCriteria,
    FilterQuery, FilterableRecord, ProgressRangeBucket,
};

use super::date_range::{self, DateWindow};

/// Computes the visible subset of a record list.
///
/// Pure and synchronous: the same records, query, config and `today`
/// always produce the same subsequence, in input order.
#[derive(Debug, Clone, Copy)]
pub struct RecordFilterEngine<'a> {
    config: &'a FilterConfig,
    today: NaiveDate,
}

/// Query resolved once per pass
struct PreparedQuery<'q> {
    status: Option<&'q str>,
    amount: Option<AmountRangeBucket>,
    date: Option<DateCheck>,
    progress: Option<ProgressRangeBucket>,
    needle: Option<String>,
    incomplete_only: bool,
}

enum DateCheck {
    Window(DateWindow),
    Overdue,
}

impl<'a> RecordFilterEngine<'a> {
    pub fn new(config: &'a FilterConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    pub fn config(&self) -> &FilterConfig {
        self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn prepare<'q>(&self, query: &'q FilterQuery) -> PreparedQuery<'q> {
        let filters = &query.filters;
        let date = filters.date_bucket().and_then(|bucket| match bucket {
            DateRangeBucket::Overdue => Some(DateCheck::Overdue),
            other => date_range::resolve(other, self.today).map(DateCheck::Window),
        });
        PreparedQuery {
            status: filters
                .status_filter()
                .filter(|s| self.config.is_known_status(s)),
            amount: filters.amount_bucket(),
            date,
            // Domains without a progress field ignore the dimension
            progress: self
                .config
                .progress_field
                .as_ref()
                .and(filters.progress_bucket()),
            needle: query.search_needle(),
            incomplete_only: query.incomplete_only,
        }
    }

    /// Check a single record against the query
    pub fn matches<R: FilterableRecord>(&self, record: &R, query: &FilterQuery) -> bool {
        self.matches_prepared(record, &self.prepare(query))
    }

    fn matches_prepared<R: FilterableRecord>(&self, record: &R, query: &PreparedQuery<'_>) -> bool {
        if let Some(status) = query.status {
            if record.status() != status {
                return false;
            }
        }

        if let Some(bucket) = query.amount {
            match record.amount_field(&self.config.amount_field) {
                Some(amount) if bucket.contains(amount) => {}
                _ => return false,
            }
        }

        if let Some(check) = &query.date {
            if !self.matches_date(record, check) {
                return false;
            }
        }

        if let (Some(bucket), Some(field)) = (query.progress, &self.config.progress_field) {
            match record.progress_field(field) {
                Some(progress) if bucket.contains(progress) => {}
                _ => return false,
            }
        }

        if let Some(needle) = &query.needle {
            if !self.matches_search(record, needle) {
                return false;
            }
        }

        if query.incomplete_only && self.config.is_terminal(record.status()) {
            return false;
        }

        true
    }

    fn matches_date<R: FilterableRecord>(&self, record: &R, check: &DateCheck) -> bool {
        let Some(date) = record
            .date_field(&self.config.date_field)
            .and_then(parse_record_date)
        else {
            return false;
        };

        match check {
            DateCheck::Window(window) => window.contains(date),
            DateCheck::Overdue => date < self.today && !self.config.is_terminal(record.status()),
        }
    }

    fn matches_search<R: FilterableRecord>(&self, record: &R, needle: &str) -> bool {
        self.config.search_fields.iter().any(|field| {
            record
                .text_field(field)
                .map_or(false, |value| value.to_lowercase().contains(needle))
        })
    }

    /// Positions of the matching records, ascending
    pub fn filter_indices<R: FilterableRecord>(&self, records: &[R], query: &FilterQuery) -> Vec<usize> {
        let prepared = self.prepare(query);
        let indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches_prepared(*record, &prepared))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            "Filtered {} of {} records (today {})",
            indices.len(),
            records.len(),
            self.today
        );
        indices
    }

    /// Matching records, borrowed, in input order
    pub fn filter<'r, R: FilterableRecord>(&self, records: &'r [R], query: &FilterQuery) -> Vec<&'r R> {
        self.filter_indices(records, query)
            .into_iter()
            .map(|i| &records[i])
            .collect()
    }

    /// Matching records, cloned, in input order
    pub fn filter_owned<R: FilterableRecord + Clone>(&self, records: &[R], query: &FilterQuery) -> Vec<R> {
        self.filter(records, query).into_iter().cloned().collect()
    }
}

/// Function-call form of the engine for callers that do not keep a
/// [`RecordFilterEngine`] around.
pub fn filter_records<R: FilterableRecord + Clone>(
    records: &[R],
    search_term: &str,
    filters: &FilterCriteria,
    incomplete_only: bool,
    config: &FilterConfig,
    today: NaiveDate,
) -> Vec<R> {
    let query = FilterQuery {
        search_term: search_term.to_string(),
        filters: filters.clone(),
        incomplete_only,
    };
    RecordFilterEngine::new(config, today).filter_owned(records, &query)
}
