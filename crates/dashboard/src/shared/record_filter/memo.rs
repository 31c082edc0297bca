use chrono::NaiveDate;
use contracts::shared::record_filter::{FilterQuery, FilterableRecord};

use super::engine::RecordFilterEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    generation: u64,
    query: FilterQuery,
    today: NaiveDate,
}

/// Caches the visible indices of one list.
///
/// The cache is keyed on the store generation, the query and the date, so
/// re-renders that change none of them reuse the previous result.
#[derive(Debug, Default)]
pub struct MemoizedFilter {
    key: Option<MemoKey>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl MemoizedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indices<R: FilterableRecord>(
        &mut self,
        engine: &RecordFilterEngine<'_>,
        generation: u64,
        records: &[R],
        query: &FilterQuery,
    ) -> &[usize] {
        let fresh = self.key.as_ref().map_or(false, |key| {
            key.generation == generation && key.today == engine.today() && key.query == *query
        });

        if !fresh {
            self.indices = engine.filter_indices(records, query);
            self.key = Some(MemoKey {
                generation,
                query: query.clone(),
                today: engine.today(),
            });
            self.recomputations += 1;
        }

        &self.indices
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// How many times the engine actually ran
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::record_filter::{FilterConfig, GenericRecord};

    #[test]
    fn test_reuses_result_until_inputs_change() {
        let config = FilterConfig::new("dueDate", "amount").with_search_fields(&["name"]);
        let today = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let engine = RecordFilterEngine::new(&config, today);
        let records = vec![
            GenericRecord::new("1", "受注").with_field("name", "治具"),
            GenericRecord::new("2", "受注").with_field("name", "架台"),
        ];
        let query = FilterQuery::new().with_search("架台");
        let mut memo = MemoizedFilter::new();

        assert_eq!(memo.indices(&engine, 0, &records, &query), &[1]);
        assert_eq!(memo.indices(&engine, 0, &records, &query), &[1]);
        assert_eq!(memo.recomputations(), 1);

        assert_eq!(memo.indices(&engine, 1, &records, &query), &[1]);
        assert_eq!(memo.recomputations(), 2);

        let other = FilterQuery::new();
        assert_eq!(memo.indices(&engine, 1, &records, &other), &[0, 1]);
        assert_eq!(memo.recomputations(), 3);

        let tomorrow = RecordFilterEngine::new(&config, today.succ_opt().unwrap());
        memo.indices(&tomorrow, 1, &records, &other);
        assert_eq!(memo.recomputations(), 4);

        memo.invalidate();
        memo.indices(&tomorrow, 1, &records, &other);
        assert_eq!(memo.recomputations(), 5);
    }
}
