use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, RecordStatus};
use crate::shared::record_filter::{FilterConfig, FilterableRecord};

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "計画中")]
    Planning,
    #[serde(rename = "進行中")]
    Active,
    #[serde(rename = "完了")]
    Completed,
    #[serde(rename = "中止")]
    Aborted,
}

impl RecordStatus for ProjectStatus {
    fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "計画中",
            ProjectStatus::Active => "進行中",
            ProjectStatus::Completed => "完了",
            ProjectStatus::Aborted => "中止",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::Completed,
            ProjectStatus::Aborted,
        ]
    }

    fn initial() -> Self {
        ProjectStatus::Planning
    }

    fn completed() -> Self {
        ProjectStatus::Completed
    }

    fn reopened() -> Self {
        ProjectStatus::Active
    }

    fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Aborted)
    }
}

/// Manufacturing project (line build, retrofit, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    /// Project code (e.g. "PRJ-2025-007")
    pub code: String,

    pub name: String,

    pub client: String,

    pub manager: String,

    pub start_date: String,

    /// Planned end date (YYYY-MM-DD)
    pub end_date: String,

    /// Budget in yen
    pub amount: i64,

    /// Progress in percent (0..=100)
    pub progress: u8,

    pub status: ProjectStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FilterableRecord for Project {
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
            "client" => Some(Cow::Borrowed(self.client.as_str())),
            "manager" => Some(Cow::Borrowed(self.manager.as_str())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        match name {
            "startDate" => Some(self.start_date.as_str()),
            "endDate" => Some(self.end_date.as_str()),
            _ => None,
        }
    }

    fn amount_field(&self, name: &str) -> Option<i64> {
        match name {
            "amount" => Some(self.amount),
            _ => None,
        }
    }

    fn progress_field(&self, name: &str) -> Option<i64> {
        match name {
            "progress" => Some(i64::from(self.progress)),
            _ => None,
        }
    }
}

impl AggregateRoot for Project {
    type Status = ProjectStatus;

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
            status: ProjectStatus::initial(),
            progress: 0,
            ..self.clone()
        }
    }

    fn amount(&self) -> i64 {
        self.amount
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn list_name() -> &'static str {
        "プロジェクト管理"
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new("endDate", "amount")
            .with_search_fields(&["code", "name", "client", "manager", "description"])
            .with_progress_field("progress")
            .with_statuses(&ProjectStatus::labels())
            .with_terminal_statuses(&ProjectStatus::terminal_labels())
    }
}
