//! Config-driven compose-and-send convenience.

use crate::{SenderConfig, Transport};
use mailquill_mime::{Email, Headers, MessagePart, Result};

/// Composes messages from [`SenderConfig`] defaults and hands them to a
/// transport.
///
/// Each send is self-contained; the mailer keeps no state between calls
/// and is safe to share across threads when the transport is.
#[derive(Debug, Clone)]
pub struct Mailer<T> {
    config: SenderConfig,
    transport: T,
}

impl<T: Transport> Mailer<T> {
    /// Creates a mailer from sender defaults and a transport.
    #[must_use]
    pub const fn new(config: SenderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the sender defaults.
    #[must_use]
    pub const fn config(&self) -> &SenderConfig {
        &self.config
    }

    /// Composes a message for `to` and hands it to the transport.
    ///
    /// Returns the transport's delivery verdict.
    ///
    /// # Errors
    ///
    /// Returns [`mailquill_mime::Error::InvalidAddress`] when `to`, the
    /// configured sender address, or a non-empty configured reply-to fails
    /// syntax validation. Nothing reaches the transport in that case.
    pub fn send(
        &self,
        to: &str,
        subject: &str,
        extra_headers: Headers,
        parts: &[MessagePart],
    ) -> Result<bool> {
        let reply_to =
            (!self.config.reply_to.is_empty()).then_some(self.config.reply_to.as_str());

        let email = Email::compose(
            to,
            &self.config.from_name,
            &self.config.from_address,
            reply_to,
            extra_headers,
            subject,
            parts,
        )?;

        Ok(self.transport.send(&email))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::similar_names
)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records handed-off messages and returns a configured verdict.
    struct MockTransport {
        verdict: bool,
        sent: RefCell<Vec<Email>>,
    }

    impl MockTransport {
        fn accepting() -> Self {
            Self {
                verdict: true,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                verdict: false,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for MockTransport {
        fn send(&self, email: &Email) -> bool {
            self.sent.borrow_mut().push(email.clone());
            self.verdict
        }
    }

    fn config() -> SenderConfig {
        SenderConfig {
            from_name: "Sender".into(),
            from_address: "s@b.com".into(),
            reply_to: String::new(),
        }
    }

    #[test]
    fn test_send_uses_config_defaults() {
        let mailer = Mailer::new(config(), MockTransport::accepting());

        let delivered = mailer
            .send("a@b.com", "Hi", Headers::new(), &[MessagePart::plain("Hello")])
            .unwrap();
        assert!(delivered);

        let sent = mailer.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].headers().get("From"), Some("Sender <s@b.com>"));
        assert!(sent[0].headers().get("Reply-To").is_none());
    }

    #[test]
    fn test_send_applies_configured_reply_to() {
        let mailer = Mailer::new(
            SenderConfig {
                reply_to: "replies@b.com".into(),
                ..config()
            },
            MockTransport::accepting(),
        );

        mailer.send("a@b.com", "Hi", Headers::new(), &[]).unwrap();

        let sent = mailer.transport.sent.borrow();
        assert_eq!(sent[0].headers().get("Reply-To"), Some("replies@b.com"));
    }

    #[test]
    fn test_send_forwards_rejection_verbatim() {
        let mailer = Mailer::new(config(), MockTransport::rejecting());
        let delivered = mailer.send("a@b.com", "Hi", Headers::new(), &[]).unwrap();
        assert!(!delivered);
    }

    #[test]
    fn test_invalid_recipient_never_reaches_transport() {
        let mailer = Mailer::new(config(), MockTransport::accepting());
        assert!(mailer.send("bad-address", "Hi", Headers::new(), &[]).is_err());
        assert!(mailer.transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_invalid_configured_sender_fails() {
        let mailer = Mailer::new(
            SenderConfig {
                from_address: "not-an-address".into(),
                ..config()
            },
            MockTransport::accepting(),
        );
        assert!(mailer.send("a@b.com", "Hi", Headers::new(), &[]).is_err());
    }
}
