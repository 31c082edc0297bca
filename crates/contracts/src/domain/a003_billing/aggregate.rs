use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, RecordStatus};
use crate::shared::record_filter::{FilterConfig, FilterableRecord};

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingStatus {
    #[serde(rename = "未請求")]
    NotBilled,
    #[serde(rename = "請求済")]
    Billed,
    #[serde(rename = "入金済")]
    Paid,
    #[serde(rename = "キャンセル")]
    Cancelled,
}

impl RecordStatus for BillingStatus {
    fn label(&self) -> &'static str {
        match self {
            BillingStatus::NotBilled => "未請求",
            BillingStatus::Billed => "請求済",
            BillingStatus::Paid => "入金済",
            BillingStatus::Cancelled => "キャンセル",
        }
    }

    fn all() -> &'static [Self] {
        &[
            BillingStatus::NotBilled,
            BillingStatus::Billed,
            BillingStatus::Paid,
            BillingStatus::Cancelled,
        ]
    }

    fn initial() -> Self {
        BillingStatus::NotBilled
    }

    fn completed() -> Self {
        BillingStatus::Paid
    }

    fn reopened() -> Self {
        BillingStatus::Billed
    }

    fn is_terminal(&self) -> bool {
        matches!(self, BillingStatus::Paid | BillingStatus::Cancelled)
    }
}

/// Invoice issued to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    pub id: String,

    /// Invoice number (e.g. "INV-2025-0042")
    pub invoice_no: String,

    pub client: String,

    /// What is billed
    pub subject: String,

    pub manager: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Payment due date (YYYY-MM-DD)
    pub due_date: String,

    /// Billed amount in yen, tax included
    pub amount: i64,

    pub status: BillingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FilterableRecord for Billing {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status.label()
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "invoiceNo" => Some(Cow::Borrowed(self.invoice_no.as_str())),
            "client" => Some(Cow::Borrowed(self.client.as_str())),
            "subject" => Some(Cow::Borrowed(self.subject.as_str())),
            "manager" => Some(Cow::Borrowed(self.manager.as_str())),
            "note" => self.note.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        match name {
            "issueDate" => self.issue_date.as_deref(),
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

impl AggregateRoot for Billing {
    type Status = BillingStatus;

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
            status: BillingStatus::initial(),
            issue_date: None,
            ..self.clone()
        }
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "billings"
    }

    fn list_name() -> &'static str {
        "請求管理"
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new("dueDate", "amount")
            .with_search_fields(&["invoiceNo", "client", "subject", "manager", "note"])
            .with_statuses(&BillingStatus::labels())
            .with_terminal_statuses(&BillingStatus::terminal_labels())
    }
}
