//! Notifier trait definition and shared error type.

/// Errors that can occur during notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("SMTP delivery failed: {0}")]
    Smtp(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Trait for notification channel implementations.
///
/// The composer hands over a fully rendered subject and HTML body together
/// with the target address; implementations only move bytes.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a rendered HTML notification to a single recipient.
    async fn send_html(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), NotifyError>;

    /// Human-readable name for this channel (e.g., "email").
    fn channel_name(&self) -> &str;
}
