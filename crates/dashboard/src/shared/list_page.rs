use contracts::shared::record_filter::{
    FilterConfig, FilterError, FilterQuery, FilterTag, FilterableRecord,
};

use super::event_bus::PanelEvent;
use super::record_filter::{Clock, MemoizedFilter, RecordFilterEngine};
use super::selection::SelectionState;
use super::store::RecordStore;

/// State behind one list/detail page: records, the current query, the
/// cached visible rows and the selection.
pub struct ListPage<R> {
    store: RecordStore<R>,
    config: FilterConfig,
    clock: Box<dyn Clock>,
    query: FilterQuery,
    memo: MemoizedFilter,
    selection: SelectionState,
}

impl<R: FilterableRecord + Clone> ListPage<R> {
    /// Build a page; the filter config is validated first
    pub fn new(
        records: Vec<R>,
        config: FilterConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, FilterError> {
        config.validate()?;
        let mut page = Self {
            store: RecordStore::new(records),
            config,
            clock,
            query: FilterQuery::default(),
            memo: MemoizedFilter::new(),
            selection: SelectionState::new(),
        };
        page.refresh_selection();
        Ok(page)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Apply one panel event and re-validate the selection
    pub fn handle(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::Search(term) => self.query.search_term = term.clone(),
            PanelEvent::Filter(filter) => self.query.filters.apply(filter),
            PanelEvent::IncompleteOnly(on) => self.query.incomplete_only = *on,
            PanelEvent::ResetFilters => self.query = FilterQuery::default(),
        }
        self.refresh_selection();
    }

    pub fn set_query(&mut self, query: FilterQuery) {
        self.query = query;
        self.refresh_selection();
    }

    fn visible_indices(&mut self) -> &[usize] {
        let engine = RecordFilterEngine::new(&self.config, self.clock.today());
        self.memo.indices(
            &engine,
            self.store.generation(),
            self.store.records(),
            &self.query,
        )
    }

    /// Records passing the current query, in list order
    pub fn visible(&mut self) -> Vec<&R> {
        let indices = self.visible_indices().to_vec();
        let records = self.store.records();
        indices.into_iter().map(|i| &records[i]).collect()
    }

    pub fn visible_ids(&mut self) -> Vec<String> {
        self.visible().iter().map(|r| r.id().to_string()).collect()
    }

    pub fn visible_count(&mut self) -> usize {
        self.visible_indices().len()
    }

    /// Sum of the amount field over visible rows (totals row), saturating
    /// at the i64 bounds
    pub fn visible_amount_total(&mut self) -> i64 {
        let field = self.config.amount_field.clone();
        self.visible()
            .iter()
            .filter_map(|r| r.amount_field(&field))
            .fold(0i64, |acc, amount| acc.saturating_add(amount))
    }

    /// Record counts per status over all records.
    ///
    /// Declared domain statuses come first in their declared order (zero
    /// counts included); undeclared statuses follow in first-seen order.
    pub fn status_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .config
            .statuses
            .iter()
            .map(|s| (s.clone(), 0))
            .collect();
        for record in self.store.records() {
            match counts.iter_mut().find(|(s, _)| s == record.status()) {
                Some((_, n)) => *n += 1,
                None => counts.push((record.status().to_string(), 1)),
            }
        }
        counts
    }

    /// Badge number of the filter panel
    pub fn active_filter_count(&self) -> usize {
        self.query.filters.active_count(&self.config.statuses)
    }

    pub fn filter_tags(&self) -> Vec<FilterTag> {
        self.query.filters.display_tags(&self.config.statuses)
    }

    pub fn active_record(&self) -> Option<&R> {
        self.selection.active().and_then(|id| self.store.get(id))
    }

    /// Make a visible row active; hidden or unknown ids are rejected
    pub fn select(&mut self, id: &str) -> bool {
        if !self.visible_ids().iter().any(|v| v == id) {
            return false;
        }
        self.selection.select(id);
        true
    }

    pub fn toggle_checked(&mut self, id: &str) -> bool {
        self.selection.toggle_checked(id)
    }

    /// Header checkbox over the visible rows
    pub fn set_all_checked(&mut self, on: bool) {
        let visible = self.visible_ids();
        self.selection.set_all_checked(&visible, on);
    }

    pub fn is_all_checked(&mut self) -> bool {
        let visible = self.visible_ids();
        self.selection.is_all_checked(&visible)
    }

    pub fn clear_checked(&mut self) {
        self.selection.clear_checked();
    }

    /// Run a store mutation, then drop dangling selection and re-validate
    pub fn mutate<T>(&mut self, f: impl FnOnce(&mut RecordStore<R>) -> T) -> T {
        let result = f(&mut self.store);
        let store = &self.store;
        self.selection.retain_existing(|id| store.contains(id));
        self.refresh_selection();
        result
    }

    /// Select the first visible row if the active one is gone
    pub fn refresh_selection(&mut self) {
        let visible = self.visible_ids();
        self.selection.reconcile(&visible);
    }
}
