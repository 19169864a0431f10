//! Mail transport trait and error types.

use crate::message::EmailMessage;

/// Error from a mail transport.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MailError {
    /// Transport-level failure (connection, authentication).
    #[error("mail transport failed: {0}")]
    Transport(String),

    /// Message was rejected by the transport.
    #[error("message rejected: {0}")]
    Rejected(String),
}

/// Mail transport abstraction.
///
/// Delivery lives with the embedding application; this workspace only
/// assembles messages. Implementations must attach each
/// [`EmailAttachment`](crate::EmailAttachment) under its `file_name` and
/// register each [`InlinePart`](crate::InlinePart) under its `content_id` so
/// the body's `cid:` references resolve.
pub trait Mailer {
    /// Send one assembled message.
    fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}
