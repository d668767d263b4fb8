//! Top-level application state

use super::form::InsightsForm;
use super::message::SummaryMessage;

/// Everything the UI renders from: the form, the summary banner, and the
/// in-flight flag that disables the submit button.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The insights request form
    pub form: InsightsForm,
    /// Summary banner shown after a submit attempt
    pub summary: SummaryMessage,
    /// True while a submission is in flight; the submit button renders
    /// disabled with a pending label
    pub submitting: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_pristine() {
        let state = AppState::default();
        assert!(state.summary.is_hidden());
        assert!(!state.submitting);
        assert_eq!(state.form.active_field_index, 0);
        assert!(state.form.field_errors().is_empty());
    }
}
