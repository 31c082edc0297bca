use std::collections::BTreeSet;

/// Row selection of a list page: one active (detail) row plus the
/// checkbox set used by bulk actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: Option<String>,
    checked: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn checked(&self) -> &BTreeSet<String> {
        &self.checked
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.active = Some(id.into());
    }

    /// Flip one checkbox; returns the new state
    pub fn toggle_checked(&mut self, id: &str) -> bool {
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    /// Header checkbox: check or uncheck every visible row
    pub fn set_all_checked(&mut self, visible: &[String], on: bool) {
        for id in visible {
            if on {
                self.checked.insert(id.clone());
            } else {
                self.checked.remove(id);
            }
        }
    }

    /// Header checkbox state: true when every visible row is checked
    pub fn is_all_checked(&self, visible: &[String]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.checked.contains(id))
    }

    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    /// Forget ids that no longer exist at all
    pub fn retain_existing(&mut self, exists: impl Fn(&str) -> bool) {
        self.checked.retain(|id| exists(id.as_str()));
        if self.active.as_deref().map_or(false, |id| !exists(id)) {
            self.active = None;
        }
    }

    /// Keep the active row valid for the current visible list.
    ///
    /// If the active row is missing or filtered out, the first visible row
    /// becomes active (none for an empty list). Checked rows are untouched.
    pub fn reconcile(&mut self, visible: &[String]) {
        let still_visible = self
            .active
            .as_ref()
            .map_or(false, |id| visible.contains(id));
        if !still_visible {
            self.active = visible.first().cloned();
        }
    }
}
