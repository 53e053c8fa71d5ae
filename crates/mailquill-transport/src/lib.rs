//! # mailquill-transport
//!
//! Hands composed messages to a local mail delivery primitive.
//!
//! ## Features
//!
//! - **Transport seam**: The [`Transport`] trait isolates the delivery
//!   primitive so tests can substitute a fake without sending mail
//! - **Sendmail**: [`SendmailTransport`] pipes the rendered message to a
//!   sendmail-compatible binary with an `-f` envelope-sender override
//! - **Config-driven sending**: [`Mailer`] composes from [`SenderConfig`]
//!   defaults and forwards to any transport
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailquill_mime::{Headers, MessagePart};
//! use mailquill_transport::{Mailer, SenderConfig, SendmailTransport};
//!
//! let config = SenderConfig {
//!     from_name: "Sender".into(),
//!     from_address: "sender@example.com".into(),
//!     reply_to: String::new(),
//! };
//! let mailer = Mailer::new(config, SendmailTransport::new());
//!
//! let delivered = mailer.send(
//!     "recipient@example.com",
//!     "Greetings",
//!     Headers::new(),
//!     &[MessagePart::plain("Hello, World!")],
//! )?;
//! assert!(delivered);
//! ```
//!
//! Delivery is a single blocking invocation. Failures surface as a plain
//! `false` with no retry and no distinction between soft and hard errors;
//! callers must check the returned boolean.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod mailer;
mod sendmail;

pub use config::SenderConfig;
pub use mailer::Mailer;
pub use sendmail::SendmailTransport;

use mailquill_mime::Email;

/// A mail delivery primitive.
///
/// Implementations take a fully composed message and report a bare
/// success/failure verdict. The verdict is forwarded to callers verbatim;
/// nothing here translates it into an error or retries on `false`.
pub trait Transport {
    /// Delivers a composed message, returning the primitive's verdict.
    fn send(&self, email: &Email) -> bool;
}
