//! Mock mailer for testing.
//!
//! Provides [`MockMailer`] for unit testing without a transport.

use std::sync::RwLock;

use crate::mailer::{MailError, Mailer};
use crate::message::EmailMessage;

/// Mock mailer recording sent messages in memory.
///
/// # Example
///
/// ```
/// use docpost_email::{EmailMessage, Mailer, MockMailer};
///
/// let mailer = MockMailer::new();
/// let message = EmailMessage {
///     to: "reader@example.com".to_owned(),
///     subject: "notes.html".to_owned(),
///     html_body: "<p>hi</p>".to_owned(),
///     inline_images: Vec::new(),
///     attachments: Vec::new(),
/// };
/// mailer.send(&message).unwrap();
/// assert_eq!(mailer.sent().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockMailer {
    sent: RwLock<Vec<EmailMessage>>,
    failure: Option<String>,
}

impl MockMailer {
    /// Create a mock mailer accepting every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock mailer rejecting every message with the given reason.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Messages sent so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().unwrap().clone()
    }
}

impl Mailer for MockMailer {
    fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        if let Some(reason) = &self.failure {
            return Err(MailError::Rejected(reason.clone()));
        }
        self.sent.write().unwrap().push(message.clone());
        Ok(())
    }
}
