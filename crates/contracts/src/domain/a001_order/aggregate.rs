use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, RecordStatus};
use crate::shared::record_filter::{FilterConfig, FilterableRecord};

/// Customer order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "受注")]
    Received,
    #[serde(rename = "製造中")]
    InProduction,
    #[serde(rename = "出荷済")]
    Shipped,
    #[serde(rename = "完了")]
    Completed,
    #[serde(rename = "キャンセル")]
    Cancelled,
}

impl RecordStatus for OrderStatus {
    fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "受注",
            OrderStatus::InProduction => "製造中",
            OrderStatus::Shipped => "出荷済",
            OrderStatus::Completed => "完了",
            OrderStatus::Cancelled => "キャンセル",
        }
    }

    fn all() -> &'static [Self] {
        &[
            OrderStatus::Received,
            OrderStatus::InProduction,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        OrderStatus::Received
    }

    fn completed() -> Self {
        OrderStatus::Completed
    }

    fn reopened() -> Self {
        OrderStatus::Shipped
    }

    fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Customer order (受注)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    /// Order number (e.g. "ORD-2025-001")
    pub order_no: String,

    /// Product name
    pub name: String,

    pub client: String,

    pub manager: String,

    /// Date the order was taken (YYYY-MM-DD)
    pub order_date: String,

    /// Promised delivery date (YYYY-MM-DD)
    pub due_date: String,

    /// Order amount in yen
    pub amount: i64,

    pub status: OrderStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FilterableRecord for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status.label()
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "orderNo" => Some(Cow::Borrowed(self.order_no.as_str())),
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "client" => Some(Cow::Borrowed(self.client.as_str())),
            "manager" => Some(Cow::Borrowed(self.manager.as_str())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        match name {
            "orderDate" => Some(self.order_date.as_str()),
            "dueDate" => Some(self.due_date.as_str()),
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

impl AggregateRoot for Order {
    type Status = OrderStatus;

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
            status: OrderStatus::initial(),
            ..self.clone()
        }
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn list_name() -> &'static str {
        "受注管理"
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new("dueDate", "amount")
            .with_search_fields(&["orderNo", "name", "client", "manager", "description"])
            .with_statuses(&OrderStatus::labels())
            .with_terminal_statuses(&OrderStatus::terminal_labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::from_label("製造中"), Some(OrderStatus::InProduction));
        assert_eq!(OrderStatus::from_label("手配中"), None);
        assert_eq!(OrderStatus::terminal_labels(), vec!["完了", "キャンセル"]);
    }

    #[test]
    fn test_order_json() {
        let json = r#"{
            "id": "o-1",
            "orderNo": "ORD-2025-001",
            "name": "搬送コンベア",
            "client": "北陸機工",
            "manager": "田中",
            "orderDate": "2025-03-01",
            "dueDate": "2025-05-10",
            "amount": 3200000,
            "status": "製造中"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::InProduction);
        assert_eq!(order.description, None);
        assert_eq!(order.date_field("dueDate"), Some("2025-05-10"));
        assert_eq!(order.date_field("requiredDate"), None);
    }

    #[test]
    fn test_reopen_goes_back_to_shipped() {
        let json = r#"{"id":"o-2","orderNo":"ORD-2025-002","name":"治具","client":"A社",
            "manager":"鈴木","orderDate":"2025-01-10","dueDate":"2025-02-01",
            "amount":800000,"status":"完了"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.is_completed());
        assert_eq!(order.with_completion(false).status, OrderStatus::Shipped);
    }
}
