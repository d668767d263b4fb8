//! Webhook endpoint configuration

/// Default webhook URL. Replace with your n8n webhook URL (or set
/// `STELLAR_WEBHOOK_URL`) before deploying; the shipped value is the n8n
/// *test* endpoint shape and is treated as unconfigured.
pub const WEBHOOK_URL: &str = "https://example.app.n8n.cloud/webhook-test/astro-form";

/// Path segment that marks an n8n test/placeholder webhook URL.
const PLACEHOLDER_MARKER: &str = "/webhook-test/";

/// Destination for form submissions
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Build from the environment, falling back to the compiled-in URL
    pub fn from_env() -> Self {
        let url = std::env::var("STELLAR_WEBHOOK_URL").unwrap_or_else(|_| WEBHOOK_URL.to_string());
        Self { url }
    }

    /// False when the URL is empty or still points at a test/placeholder
    /// endpoint. Submission halts with a summary error in that case.
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && !url.contains(PLACEHOLDER_MARKER)
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new(WEBHOOK_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_treated_as_unconfigured() {
        assert!(!WebhookConfig::default().is_configured());
    }

    #[test]
    fn empty_url_is_unconfigured() {
        assert!(!WebhookConfig::new("").is_configured());
        assert!(!WebhookConfig::new("   ").is_configured());
    }

    #[test]
    fn test_variant_url_is_unconfigured() {
        let config = WebhookConfig::new("https://acme.app.n8n.cloud/webhook-test/astro-form");
        assert!(!config.is_configured());
    }

    #[test]
    fn production_url_is_configured() {
        let config = WebhookConfig::new("https://acme.app.n8n.cloud/webhook/astro-form");
        assert!(config.is_configured());
    }
}
