use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, RecordStatus};
use crate::shared::record_filter::{FilterConfig, FilterableRecord};

/// Procurement ("手配") status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangementStatus {
    #[serde(rename = "未手配")]
    NotArranged,
    #[serde(rename = "手配中")]
    InProgress,
    #[serde(rename = "手配完了")]
    Arranged,
    #[serde(rename = "キャンセル")]
    Cancelled,
}

impl RecordStatus for ArrangementStatus {
    fn label(&self) -> &'static str {
        match self {
            ArrangementStatus::NotArranged => "未手配",
            ArrangementStatus::InProgress => "手配中",
            ArrangementStatus::Arranged => "手配完了",
            ArrangementStatus::Cancelled => "キャンセル",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ArrangementStatus::NotArranged,
            ArrangementStatus::InProgress,
            ArrangementStatus::Arranged,
            ArrangementStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        ArrangementStatus::NotArranged
    }

    fn completed() -> Self {
        ArrangementStatus::Arranged
    }

    fn reopened() -> Self {
        ArrangementStatus::InProgress
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self,
            ArrangementStatus::Arranged | ArrangementStatus::Cancelled
        )
    }
}

/// Procurement line: a part or material that must be arranged for an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    pub id: String,

    /// Arrangement number (e.g. "ARR-2025-0012")
    pub code: String,

    /// Item name
    pub name: String,

    pub supplier: String,

    pub manager: String,

    /// Order this arrangement belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,

    pub quantity: u32,

    /// Date the item is needed (YYYY-MM-DD)
    pub required_date: String,

    /// Amount in yen
    pub amount: i64,

    pub status: ArrangementStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FilterableRecord for Arrangement {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status.label()
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "code" => Some(Cow::Borrowed(self.code.as_str())),
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "supplier" => Some(Cow::Borrowed(self.supplier.as_str())),
            "manager" => Some(Cow::Borrowed(self.manager.as_str())),
            "orderNo" => self.order_no.as_deref().map(Cow::Borrowed),
            "note" => self.note.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        match name {
            "requiredDate" => Some(self.required_date.as_str()),
            _ => None,
        }
    }

    fn amount_field(&self, name: &str) -> Option<i64> {
        match name {
            "amount" => Some(self.amount),
            _ => None,
        }
    }
}

impl AggregateRoot for Arrangement {
    type Status = ArrangementStatus;

    fn status_value(&self) -> Self::Status {
        self.status
    }

    fn with_status(&self, status: Self::Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    fn duplicate_as(&self, id: String) -> Self {
        Self {
            id,
            status: ArrangementStatus::initial(),
            ..self.clone()
        }
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "arrangements"
    }

    fn list_name() -> &'static str {
        "手配管理"
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new("requiredDate", "amount")
            .with_search_fields(&["code", "name", "supplier", "manager", "orderNo", "note"])
            .with_statuses(&ArrangementStatus::labels())
            .with_terminal_statuses(&ArrangementStatus::terminal_labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arrangement {
        Arrangement {
            id: "arr-1".to_string(),
            code: "ARR-2025-0001".to_string(),
            name: "油圧ポンプ".to_string(),
            supplier: "東海油機".to_string(),
            manager: "佐藤".to_string(),
            order_no: None,
            quantity: 2,
            required_date: "2025-04-20".to_string(),
            amount: 500_000,
            status: ArrangementStatus::InProgress,
            note: None,
        }
    }

    #[test]
    fn test_completion_is_derived_from_status() {
        let record = sample();
        assert!(!record.is_completed());

        let done = record.with_completion(true);
        assert_eq!(done.status, ArrangementStatus::Arranged);
        assert!(done.is_completed());

        let reopened = done.with_completion(false);
        assert_eq!(reopened.status, ArrangementStatus::InProgress);
        assert!(!reopened.is_completed());
    }

    #[test]
    fn test_cancelled_is_terminal_but_not_completed() {
        let cancelled = sample().with_status(ArrangementStatus::Cancelled);
        assert!(cancelled.status.is_terminal());
        assert!(!cancelled.is_completed());
        assert_eq!(cancelled.with_completion(false), cancelled);
    }

    #[test]
    fn test_filter_config_is_valid() {
        let config = Arrangement::filter_config();
        assert!(config.validate().is_ok());
        assert!(config.is_terminal("手配完了"));
        assert!(config.is_terminal("キャンセル"));
        assert!(!config.is_terminal("未手配"));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "手配中");
        assert_eq!(json["requiredDate"], "2025-04-20");
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_optional_fields_do_not_match() {
        let record = sample();
        assert_eq!(record.text_field("note"), None);
        assert_eq!(record.text_field("unknown"), None);
    }
}
