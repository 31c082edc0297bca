use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in a domain filter configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("date field name is empty")]
    EmptyDateField,

    #[error("amount field name is empty")]
    EmptyAmountField,

    #[error("terminal status {0:?} is not one of the domain statuses")]
    UnknownTerminalStatus(String),
}

/// Declarative per-domain description of which record fields the
/// filter dimensions read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Fields searched by the free-text box (any match is enough)
    pub search_fields: Vec<String>,
    /// Field the date range bucket applies to
    pub date_field: String,
    /// Field the amount range bucket applies to
    pub amount_field: String,
    /// Field the progress range bucket applies to, if the domain has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_field: Option<String>,
    /// Statuses excluded by "incomplete only" and never counted as overdue
    pub terminal_statuses: Vec<String>,
    /// Closed status set of the domain; empty accepts any status filter value
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl FilterConfig {
    pub fn new(date_field: impl Into<String>, amount_field: impl Into<String>) -> Self {
        Self {
            search_fields: Vec::new(),
            date_field: date_field.into(),
            amount_field: amount_field.into(),
            progress_field: None,
            terminal_statuses: Vec::new(),
            statuses: Vec::new(),
        }
    }

    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_progress_field(mut self, field: impl Into<String>) -> Self {
        self.progress_field = Some(field.into());
        self
    }

    pub fn with_terminal_statuses(mut self, statuses: &[&str]) -> Self {
        self.terminal_statuses = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_statuses(mut self, statuses: &[&str]) -> Self {
        self.statuses = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal_statuses.iter().any(|s| s == status)
    }

    /// Whether a status filter value names a status of this domain
    pub fn is_known_status(&self, status: &str) -> bool {
        self.statuses.is_empty() || self.statuses.iter().any(|s| s == status)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.date_field.trim().is_empty() {
            return Err(FilterError::EmptyDateField);
        }
        if self.amount_field.trim().is_empty() {
            return Err(FilterError::EmptyAmountField);
        }
        if !self.statuses.is_empty() {
            if let Some(unknown) = self
                .terminal_statuses
                .iter()
                .find(|t| !self.statuses.contains(t))
            {
                return Err(FilterError::UnknownTerminalStatus(unknown.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrangement_like() -> FilterConfig {
        FilterConfig::new("requiredDate", "amount")
            .with_search_fields(&["name", "code"])
            .with_statuses(&["未手配", "手配中", "手配完了", "キャンセル"])
            .with_terminal_statuses(&["手配完了", "キャンセル"])
    }

    #[test]
    fn test_terminal_lookup() {
        let config = arrangement_like();
        assert!(config.is_terminal("キャンセル"));
        assert!(!config.is_terminal("手配中"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let config = FilterConfig::new("", "amount");
        assert_eq!(config.validate(), Err(FilterError::EmptyDateField));

        let config = arrangement_like().with_terminal_statuses(&["完了"]);
        assert_eq!(
            config.validate(),
            Err(FilterError::UnknownTerminalStatus("完了".to_string()))
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "searchFields": ["name"],
            "dateField": "dueDate",
            "amountField": "amount",
            "terminalStatuses": ["完了"]
        }"#;
        let config: FilterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.progress_field, None);
        assert!(config.statuses.is_empty());
        assert!(config.is_known_status("anything"));
    }
}
