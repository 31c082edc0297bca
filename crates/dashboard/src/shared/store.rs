use std::collections::BTreeSet;

use contracts::shared::record_filter::FilterableRecord;

/// In-memory ordered record list of one page.
///
/// Every mutation builds a new vector and bumps `generation`; readers only
/// ever see whole snapshots.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    generation: u64,
}

impl<R: FilterableRecord + Clone> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            generation: 0,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
        self.generation += 1;
    }

    /// Replace one record by id. Returns false if the id is unknown.
    pub fn update(&mut self, id: &str, f: impl Fn(&R) -> R) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.records = self
            .records
            .iter()
            .map(|r| if r.id() == id { f(r) } else { r.clone() })
            .collect();
        self.generation += 1;
        true
    }

    /// Replace every record whose id is in `ids`; returns how many changed
    pub fn update_many(&mut self, ids: &BTreeSet<String>, f: impl Fn(&R) -> R) -> usize {
        let hits = self.records.iter().filter(|r| ids.contains(r.id())).count();
        if hits == 0 {
            return 0;
        }
        self.records = self
            .records
            .iter()
            .map(|r| if ids.contains(r.id()) { f(r) } else { r.clone() })
            .collect();
        self.generation += 1;
        hits
    }

    /// Drop every record whose id is in `ids`; returns how many were removed
    pub fn remove_many(&mut self, ids: &BTreeSet<String>) -> usize {
        let kept: Vec<R> = self
            .records
            .iter()
            .filter(|r| !ids.contains(r.id()))
            .cloned()
            .collect();
        let removed = self.records.len() - kept.len();
        if removed > 0 {
            self.records = kept;
            self.generation += 1;
        }
        removed
    }

    /// Insert right after the record `after`, or at the end
    pub fn insert_after(&mut self, after: &str, record: R) {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == after)
            .map_or(self.records.len(), |i| i + 1);
        let mut next = self.records.clone();
        next.insert(position, record);
        self.records = next;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::record_filter::GenericRecord;

    fn store() -> RecordStore<GenericRecord> {
        RecordStore::new(vec![
            GenericRecord::new("1", "未請求"),
            GenericRecord::new("2", "請求済"),
            GenericRecord::new("3", "未請求"),
        ])
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_update_bumps_generation() {
        let mut store = store();
        assert!(store.update("2", |r| GenericRecord::new(r.id.clone(), "入金済")));
        assert_eq!(store.get("2").unwrap().status, "入金済");
        assert_eq!(store.generation(), 1);

        assert!(!store.update("missing", |r| r.clone()));
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_update_many_and_remove_many() {
        let mut store = store();
        let changed = store.update_many(&set(&["1", "3", "9"]), |r| {
            GenericRecord::new(r.id.clone(), "キャンセル")
        });
        assert_eq!(changed, 2);
        assert_eq!(store.get("3").unwrap().status, "キャンセル");

        assert_eq!(store.remove_many(&set(&["9"])), 0);
        assert_eq!(store.generation(), 1);

        assert_eq!(store.remove_many(&set(&["1", "2"])), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.generation(), 2);
    }

    #[test]
    fn test_insert_after_keeps_order() {
        let mut store = store();
        store.insert_after("1", GenericRecord::new("1b", "未請求"));
        store.insert_after("missing", GenericRecord::new("z", "未請求"));
        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1b", "2", "3", "z"]);
    }
}
