//! Form state: the handle being edited, its validation lifecycle and the theme

use serde::{Deserialize, Serialize};

/// Colour scheme of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Stage of the lookup lifecycle.
///
/// The resolved identifier only exists inside `Valid`, so a form can never
/// carry an id without being valid (or be valid without an id).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Checking,
    /// The service resolved the handle
    Valid { id: String },
    /// The last submission failed for any reason
    Invalid,
}

impl ValidationStatus {
    pub fn resolved_id(&self) -> Option<&str> {
        match self {
            Self::Valid { id } => Some(id),
            _ => None,
        }
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }
}

/// State behind the form, created with defaults when the view mounts.
///
/// Fields are only reachable through the update functions below; the
/// validation status is written exclusively by [`crate::Validator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    handle: String,
    status: ValidationStatus,
    theme: ThemeMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh form using the given starting theme
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn status(&self) -> &ValidationStatus {
        &self.status
    }

    pub fn resolved_id(&self) -> Option<&str> {
        self.status.resolved_id()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_checking(&self) -> bool {
        self.status.is_checking()
    }

    /// Replace the handle text. The validation status is left untouched.
    pub fn set_handle(&mut self, handle: impl Into<String>) {
        self.handle = handle.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.handle.push(c);
    }

    pub fn pop_char(&mut self) {
        self.handle.pop();
    }

    pub fn clear_handle(&mut self) {
        self.handle.clear();
    }

    /// Flip between light and dark. Independent of validation.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub(crate) fn set_status(&mut self, status: ValidationStatus) {
        self.status = status;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mount_state() {
        let form = FormState::new();
        assert_eq!(form.handle(), "");
        assert_eq!(form.status(), &ValidationStatus::Idle);
        assert_eq!(form.theme(), ThemeMode::Light);
        assert_eq!(form.resolved_id(), None);
    }

    #[test]
    fn editing_handle_keeps_status() {
        let mut form = FormState::new();
        form.set_status(ValidationStatus::Valid {
            id: "123".to_string(),
        });

        form.push_char('x');
        form.pop_char();
        form.set_handle("TedTalks");

        assert_eq!(form.handle(), "TedTalks");
        assert_eq!(form.resolved_id(), Some("123"));
    }

    #[test]
    fn pop_char_handles_multibyte_and_empty() {
        let mut form = FormState::new();
        form.set_handle("né");
        form.pop_char();
        assert_eq!(form.handle(), "n");
        form.pop_char();
        form.pop_char();
        assert_eq!(form.handle(), "");
    }

    #[test]
    fn theme_toggle_is_independent_of_status() {
        let mut form = FormState::new();
        form.set_status(ValidationStatus::Checking);

        form.toggle_theme();
        assert_eq!(form.theme(), ThemeMode::Dark);
        assert!(form.is_checking());

        form.toggle_theme();
        assert_eq!(form.theme(), ThemeMode::Light);
        assert!(form.is_checking());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }
}
