//! Email message assembly for rendered documents.
//!
//! Takes a [`docpost_render::RenderResult`] and packages it as an outbound
//! [`EmailMessage`]: the HTML body, one attachment per extracted image under
//! its assigned `cid` name, the HTML itself as a named attachment, and
//! inline parts so `cid:` references in the body resolve at the recipient.
//!
//! Actual delivery is out of scope: the [`Mailer`] trait is the seam where
//! an embedding application plugs in its transport. [`MockMailer`] (behind
//! the `mock` feature) records sent messages for tests.

mod mailer;
mod message;
#[cfg(feature = "mock")]
mod mock;

pub use mailer::{MailError, Mailer};
pub use message::{EmailAttachment, EmailMessage, InlinePart, compose};
#[cfg(feature = "mock")]
pub use mock::MockMailer;
