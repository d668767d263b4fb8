//! Application core: key handling and the submit flow

use crate::config::WebhookConfig;
use crate::payload::SubmissionPayload;
use crate::state::{AppState, SummaryMessage};
use crate::webhook::{WebhookClient, WebhookClientTrait};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Submit button label when idle
pub const SUBMIT_LABEL: &str = "Get my predictions";
/// Submit button label while a submission is in flight
pub const SENDING_LABEL: &str = "Sending…";

pub const CORRECTION_MESSAGE: &str = "Please correct the errors below and try again.";
pub const UNCONFIGURED_MESSAGE: &str =
    "Webhook is not configured. Set STELLAR_WEBHOOK_URL to your n8n webhook URL.";
pub const SUCCESS_MESSAGE: &str = "Request received. Check your email for your personalized \
    predictions. If you don't see it, check your spam folder.";
pub const FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again later, or check that the webhook URL is correct.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Webhook endpoint configuration
    config: WebhookConfig,
    /// Webhook client for HTTP submission
    webhook: Box<dyn WebhookClientTrait>,
}

impl App {
    /// Create a new App instance with the real HTTP client
    pub fn new(config: WebhookConfig) -> Self {
        let webhook = Box::new(WebhookClient::new(&config));
        Self::with_client(config, webhook)
    }

    /// Create an App with an injected client (test doubles)
    pub fn with_client(config: WebhookConfig, webhook: Box<dyn WebhookClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            config,
            webhook,
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.blur_active_field();
                self.state.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_active_field();
                self.state.form.prev_field();
            }
            KeyCode::Left => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_next();
                }
            }
            // Enter submits from anywhere, like Enter in a browser form.
            // Only the pre-network phase runs here; the event loop draws a
            // frame with the pending button and then finishes the attempt.
            KeyCode::Enter => {
                self.begin_submit();
            }
            KeyCode::Esc => self.reset_form(),
            KeyCode::Char(c) => self.input_char(c, key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// One full submission attempt: validate, check configuration, POST,
    /// report. Equivalent to `begin_submit` followed by `finish_submit`.
    pub async fn handle_submit(&mut self) {
        if self.begin_submit() {
            self.finish_submit().await;
        }
    }

    /// Pre-network phase of a submission: guard against a pending attempt,
    /// clear the summary, validate, check configuration. Returns true when
    /// the network phase should follow; the submitting flag is then set so
    /// the next frame renders the disabled button.
    pub fn begin_submit(&mut self) -> bool {
        // Soft guard, the equivalent of the disabled submit button
        if self.state.submitting {
            return false;
        }

        self.state.summary = SummaryMessage::Hidden;

        if !self.state.form.validate_all() {
            self.state.summary = SummaryMessage::error(CORRECTION_MESSAGE);
            return false;
        }

        if !self.config.is_configured() {
            self.state.summary = SummaryMessage::error(UNCONFIGURED_MESSAGE);
            return false;
        }

        self.state.submitting = true;
        true
    }

    /// Network phase of a submission: build the payload, POST it, record
    /// the outcome. Only valid after `begin_submit` returned true.
    pub async fn finish_submit(&mut self) {
        let payload = SubmissionPayload::from_form(&self.state.form);
        match self.webhook.submit(payload).await {
            Ok(_) => {
                self.state.summary = SummaryMessage::success(SUCCESS_MESSAGE);
                self.state.form.reset();
            }
            Err(err) => {
                tracing::error!("Submit error: {err}");
                self.state.summary = SummaryMessage::error(FAILURE_MESSAGE);
            }
        }

        // Both arms fall through here: the button is re-enabled on every
        // exit path of the network phase.
        self.state.submitting = false;
    }

    /// Inline validation when focus leaves a field: re-run only that
    /// field's validator. Never touches the summary banner.
    fn blur_active_field(&mut self) {
        let index = self.state.form.active_field_index;
        self.state.form.validate_field(index);
    }

    /// Reset: clear all values and field errors, hide the summary
    fn reset_form(&mut self) {
        self.state.form.reset();
        self.state.summary = SummaryMessage::Hidden;
    }

    fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.push_char(ch);
        }
    }

    /// Label for the submit button in the current state
    pub fn submit_label(&self) -> &'static str {
        if self.state.submitting {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
