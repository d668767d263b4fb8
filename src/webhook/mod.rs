//! Webhook client module for HTTP submission

mod client;
mod traits;

pub use client::WebhookClient;
pub use traits::{SubmitError, WebhookClientTrait};

#[cfg(test)]
pub use traits::MockWebhookClientTrait;
