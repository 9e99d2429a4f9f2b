use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A sent email as `(to, subject, body)`.
pub type SentEmail = (String, String, String);

/// Keeps every email in memory instead of delivering it. Used when no SMTP
/// relay is configured and by tests.
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails
            .lock()
            .map(|emails| emails.clone())
            .unwrap_or_default()
    }

    pub fn last_email_to(&self, to: &str) -> Option<SentEmail> {
        self.get_sent_emails()
            .into_iter()
            .rev()
            .find(|(recipient, _, _)| recipient == to)
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        tracing::debug!(to, subject, "Email captured by mock sender");
        self.sent_emails
            .lock()
            .map_err(|e| e.to_string())?
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}
