use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, RecordStatus};
use crate::shared::record_filter::{FilterConfig, FilterableRecord};

/// Delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "未出荷")]
    NotShipped,
    #[serde(rename = "配送中")]
    InTransit,
    #[serde(rename = "納品済")]
    Delivered,
    #[serde(rename = "キャンセル")]
    Cancelled,
}

impl RecordStatus for DeliveryStatus {
    fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::NotShipped => "未出荷",
            DeliveryStatus::InTransit => "配送中",
            DeliveryStatus::Delivered => "納品済",
            DeliveryStatus::Cancelled => "キャンセル",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DeliveryStatus::NotShipped,
            DeliveryStatus::InTransit,
            DeliveryStatus::Delivered,
            DeliveryStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        DeliveryStatus::NotShipped
    }

    fn completed() -> Self {
        DeliveryStatus::Delivered
    }

    fn reopened() -> Self {
        DeliveryStatus::InTransit
    }

    fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Cancelled)
    }
}

/// Shipment to a client site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,

    /// Delivery slip number (e.g. "DLV-2025-0103")
    pub delivery_no: String,

    /// Product name
    pub name: String,

    pub client: String,

    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Scheduled delivery date (YYYY-MM-DD)
    pub delivery_date: String,

    /// Shipped goods value in yen
    pub amount: i64,

    pub status: DeliveryStatus,
}

impl FilterableRecord for Delivery {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status.label()
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "deliveryNo" => Some(Cow::Borrowed(self.delivery_no.as_str())),
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "client" => Some(Cow::Borrowed(self.client.as_str())),
            "address" => Some(Cow::Borrowed(self.address.as_str())),
            "carrier" => self.carrier.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        match name {
            "deliveryDate" => Some(self.delivery_date.as_str()),
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

impl AggregateRoot for Delivery {
    type Status = DeliveryStatus;

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
            status: DeliveryStatus::initial(),
            ..self.clone()
        }
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "deliveries"
    }

    fn list_name() -> &'static str {
        "納品管理"
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new("deliveryDate", "amount")
            .with_search_fields(&["deliveryNo", "name", "client", "address", "carrier"])
            .with_statuses(&DeliveryStatus::labels())
            .with_terminal_statuses(&DeliveryStatus::terminal_labels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_toggle() {
        let delivery = Delivery {
            id: "d-1".to_string(),
            delivery_no: "DLV-2025-0001".to_string(),
            name: "制御盤".to_string(),
            client: "東邦精密".to_string(),
            address: "愛知県豊田市".to_string(),
            carrier: None,
            delivery_date: "2025-04-18".to_string(),
            amount: 1_450_000,
            status: DeliveryStatus::InTransit,
        };
        let received = delivery.with_completion(true);
        assert_eq!(received.status, DeliveryStatus::Delivered);
        assert_eq!(received.with_completion(true), received);
        assert_eq!(received.with_completion(false), delivery);
    }
}
