use contracts::shared::record_filter::{FilterEvent, FilterKind, FilterQuery};

/// Input coming from the search box and filter panel of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Search(String),
    Filter(FilterEvent),
    IncompleteOnly(bool),
    ResetFilters,
}

impl PanelEvent {
    /// Events that rebuild `query` on a page with default state
    pub fn from_query(query: &FilterQuery) -> Vec<PanelEvent> {
        let mut events = vec![PanelEvent::ResetFilters];
        if !query.search_term.is_empty() {
            events.push(PanelEvent::Search(query.search_term.clone()));
        }
        for kind in FilterKind::all() {
            if let Some(value) = query.filters.raw(*kind) {
                events.push(PanelEvent::Filter(FilterEvent::new(*kind, value)));
            }
        }
        if query.incomplete_only {
            events.push(PanelEvent::IncompleteOnly(true));
        }
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Page-scoped publish/subscribe channel.
///
/// Handlers run synchronously in subscription order on `publish`.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Box<dyn FnMut(&PanelEvent)>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&PanelEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _)| *sid != id);
        self.handlers.len() != before
    }

    pub fn publish(&mut self, event: &PanelEvent) {
        tracing::trace!("Publishing {:?} to {} handlers", event, self.handlers.len());
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::record_filter::FilterCriteria;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = log.clone();
        bus.subscribe(move |e| first.borrow_mut().push(format!("first:{:?}", e)));
        let second = log.clone();
        let id = bus.subscribe(move |e| second.borrow_mut().push(format!("second:{:?}", e)));

        bus.publish(&PanelEvent::IncompleteOnly(true));
        assert_eq!(log.borrow().len(), 2);
        assert!(log.borrow()[0].starts_with("first"));

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&PanelEvent::ResetFilters);
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_from_query() {
        let query = FilterQuery::new()
            .with_search("ポンプ")
            .with_filters(FilterCriteria::new().with_status("手配中").with_date_range("今月"))
            .incomplete_only(true);
        let events = PanelEvent::from_query(&query);
        assert_eq!(
            events,
            vec![
                PanelEvent::ResetFilters,
                PanelEvent::Search("ポンプ".to_string()),
                PanelEvent::Filter(FilterEvent::new(FilterKind::Status, "手配中")),
                PanelEvent::Filter(FilterEvent::new(FilterKind::DateRange, "今月")),
                PanelEvent::IncompleteOnly(true),
            ]
        );
    }
}
