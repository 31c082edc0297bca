use contracts::domain::common::{AggregateRoot, RecordStatus};
use contracts::shared::record_filter::FilterError;
use thiserror::Error;

use crate::shared::list_page::ListPage;
use crate::shared::record_filter::Clock;

/// Errors of list page actions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("record not found: {0}")]
    RecordNotFound(String),

    #[error("no records are checked")]
    NothingChecked,

    #[error("invalid filter config: {0}")]
    InvalidConfig(#[from] FilterError),
}

/// Build the list page of a domain with its declared filter layout
pub fn new_page<R: AggregateRoot>(
    records: Vec<R>,
    clock: Box<dyn Clock>,
) -> Result<ListPage<R>, ServiceError> {
    tracing::debug!("Opening {} page with {} records", R::list_name(), records.len());
    Ok(ListPage::new(records, R::filter_config(), clock)?)
}

/// Flip the completion flag of one record; returns the new flag
pub fn toggle_completion<R: AggregateRoot>(
    page: &mut ListPage<R>,
    id: &str,
) -> Result<bool, ServiceError> {
    let record = page
        .store()
        .get(id)
        .ok_or_else(|| ServiceError::RecordNotFound(id.to_string()))?;
    let done = !record.is_completed();

    page.mutate(|store| store.update(id, |r| r.with_completion(done)));

    let status = page
        .store()
        .get(id)
        .map(|r| r.status_value().label())
        .unwrap_or_default();
    tracing::info!("{} {}: completed={} status={}", R::aggregate_index(), id, done, status);
    Ok(done)
}

/// Set the status of every checked record; returns how many changed
pub fn set_status<R: AggregateRoot>(
    page: &mut ListPage<R>,
    status: R::Status,
) -> Result<usize, ServiceError> {
    let checked = page.selection().checked().clone();
    if checked.is_empty() {
        return Err(ServiceError::NothingChecked);
    }

    let changed = page.mutate(|store| store.update_many(&checked, |r| r.with_status(status)));
    tracing::info!(
        "{}: status {} applied to {} records",
        R::aggregate_index(),
        status.label(),
        changed
    );
    Ok(changed)
}

/// Delete every checked record and clear the checkboxes
pub fn remove_checked<R: AggregateRoot>(page: &mut ListPage<R>) -> Result<usize, ServiceError> {
    let checked = page.selection().checked().clone();
    if checked.is_empty() {
        return Err(ServiceError::NothingChecked);
    }

    let removed = page.mutate(|store| store.remove_many(&checked));
    page.clear_checked();
    tracing::info!("{}: removed {} records", R::aggregate_index(), removed);
    Ok(removed)
}

/// Copy a record right below the original under a fresh id; returns the
/// new id.
///
/// The copy becomes the active row only if the current query shows it.
pub fn duplicate<R: AggregateRoot>(page: &mut ListPage<R>, id: &str) -> Result<String, ServiceError> {
    let source = page
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| ServiceError::RecordNotFound(id.to_string()))?;

    let new_id = uuid::Uuid::new_v4().to_string();
    let copy = source.duplicate_as(new_id.clone());
    page.mutate(|store| store.insert_after(id, copy));
    if !page.select(&new_id) {
        tracing::debug!("{}: copy {} is hidden by the current filter", R::aggregate_index(), new_id);
    }

    tracing::info!("{}: duplicated {} as {}", R::aggregate_index(), id, new_id);
    Ok(new_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SeedSource;
    use crate::shared::event_bus::PanelEvent;
    use crate::shared::record_filter::FixedClock;
    use chrono::NaiveDate;
    use contracts::domain::a001_order::Order;
    use contracts::domain::a002_arrangement::{Arrangement, ArrangementStatus};
    use contracts::domain::a003_billing::Billing;
    use contracts::domain::a004_delivery::Delivery;
    use contracts::domain::a005_project::Project;
    use contracts::shared::record_filter::{FilterEvent, FilterKind, FilterableRecord};

    fn page() -> ListPage<Arrangement> {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap());
        new_page(Arrangement::builtin(), Box::new(clock)).unwrap()
    }

    fn first_open_id(page: &ListPage<Arrangement>) -> String {
        page.store()
            .records()
            .iter()
            .find(|r| r.status == ArrangementStatus::InProgress)
            .map(|r| r.id.clone())
            .unwrap()
    }

    #[test]
    fn test_toggle_completion_round_trip() {
        let mut page = page();
        let id = first_open_id(&page);

        assert_eq!(toggle_completion(&mut page, &id), Ok(true));
        assert_eq!(page.store().get(&id).unwrap().status, ArrangementStatus::Arranged);

        assert_eq!(toggle_completion(&mut page, &id), Ok(false));
        assert_eq!(page.store().get(&id).unwrap().status, ArrangementStatus::InProgress);

        assert_eq!(
            toggle_completion(&mut page, "missing"),
            Err(ServiceError::RecordNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_completed_record_leaves_incomplete_view() {
        let mut page = page();
        page.handle(&PanelEvent::IncompleteOnly(true));
        let id = first_open_id(&page);
        let before = page.visible_count();

        toggle_completion(&mut page, &id).unwrap();
        assert_eq!(page.visible_count(), before - 1);
        assert!(!page.visible_ids().contains(&id));
    }

    #[test]
    fn test_bulk_status_on_checked() {
        let mut page = page();
        assert_eq!(
            set_status(&mut page, ArrangementStatus::Cancelled),
            Err(ServiceError::NothingChecked)
        );

        let ids: Vec<String> = page.store().records().iter().take(2).map(|r| r.id.clone()).collect();
        for id in &ids {
            page.toggle_checked(id);
        }
        assert_eq!(set_status(&mut page, ArrangementStatus::Cancelled), Ok(2));
        for id in &ids {
            assert_eq!(page.store().get(id).unwrap().status(), "キャンセル");
        }
    }

    #[test]
    fn test_remove_checked() {
        let mut page = page();
        let total = page.store().len();
        let id = page.store().records()[0].id.clone();
        page.toggle_checked(&id);

        assert_eq!(remove_checked(&mut page), Ok(1));
        assert_eq!(page.store().len(), total - 1);
        assert!(page.selection().checked().is_empty());
        assert_eq!(remove_checked(&mut page), Err(ServiceError::NothingChecked));
    }

    #[test]
    fn test_duplicate_inserts_below_and_selects() {
        let mut page = page();
        let id = page.store().records()[1].id.clone();

        let new_id = duplicate(&mut page, &id).unwrap();
        let records = page.store().records();
        assert_eq!(records[2].id, new_id);
        assert_eq!(records[2].status, ArrangementStatus::NotArranged);
        assert_eq!(records[2].name, records[1].name);
        assert_eq!(page.selection().active(), Some(new_id.as_str()));
    }

    #[test]
    fn test_duplicate_hidden_by_filter_keeps_visible_selection() {
        let mut page = page();
        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::Status, "手配中")));
        let before = page.visible_ids();

        let new_id = duplicate(&mut page, "arr-003").unwrap();
        assert!(page.store().contains(&new_id));
        assert_eq!(page.visible_ids(), before);

        let active = page.selection().active().map(str::to_string).unwrap();
        assert!(page.visible_ids().contains(&active));
        assert_ne!(active, new_id);
    }

    #[test]
    fn test_every_domain_config_opens() {
        let clock = || Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()));
        assert!(new_page(Order::builtin(), clock()).is_ok());
        assert!(new_page(Arrangement::builtin(), clock()).is_ok());
        assert!(new_page(Billing::builtin(), clock()).is_ok());
        assert!(new_page(Delivery::builtin(), clock()).is_ok());
        assert!(new_page(Project::builtin(), clock()).is_ok());
    }

    #[test]
    fn test_filter_event_through_page() {
        let mut page = page();
        page.handle(&PanelEvent::Filter(FilterEvent::new(FilterKind::Status, "手配中")));
        assert!(page.visible().iter().all(|r| r.status == ArrangementStatus::InProgress));
        assert_eq!(page.active_filter_count(), 1);
    }
}
