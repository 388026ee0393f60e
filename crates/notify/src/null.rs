//! Log-only notification channel.
//!
//! Used when `SMTP_FROM` is not configured, so the scheduler loop stays
//! fully exercisable in development without a mail server.

use tracing::info;

use crate::traits::{Notifier, NotifyError};

pub struct NullNotifier;

#[async_trait::async_trait]
impl Notifier for NullNotifier {
    async fn send_html(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), NotifyError> {
        info!(
            channel = "null",
            recipient = %to,
            subject = %subject,
            body_bytes = html_body.len(),
            "notification rendered but not sent (SMTP not configured)"
        );
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_succeeds() {
        let notifier = NullNotifier;
        let result = notifier.send_html("a@x.com", "subject", "<p>body</p>").await;
        assert!(result.is_ok());
        assert_eq!(notifier.channel_name(), "null");
    }
}
