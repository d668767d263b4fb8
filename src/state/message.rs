//! Summary banner state

/// The single summary banner below the form. Exactly one of error or
/// success is ever shown; it is cleared at the start of every submit
/// attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryMessage {
    #[default]
    Hidden,
    Error(String),
    Success(String),
}

impl SummaryMessage {
    pub fn error(text: impl Into<String>) -> Self {
        SummaryMessage::Error(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        SummaryMessage::Success(text.into())
    }

    #[allow(dead_code)]
    pub fn is_hidden(&self) -> bool {
        matches!(self, SummaryMessage::Hidden)
    }

    /// The display text, if the banner is visible
    pub fn text(&self) -> Option<&str> {
        match self {
            SummaryMessage::Hidden => None,
            SummaryMessage::Error(text) | SummaryMessage::Success(text) => Some(text),
        }
    }
}
