//! Delivery through a local sendmail-compatible binary.

use crate::Transport;
use mailquill_mime::Email;
use std::io::Write as _;
use std::process::{Command, Stdio};

/// Default path of the local delivery agent.
const DEFAULT_COMMAND: &str = "/usr/sbin/sendmail";

/// Transport that pipes messages to a sendmail-compatible binary.
///
/// The binary is invoked once per message with `-i`, the envelope sender
/// override `-f <from>`, and the recipient address; the rendered message
/// is written to its stdin. The exit status is the delivery verdict.
#[derive(Debug, Clone)]
pub struct SendmailTransport {
    command: String,
}

impl SendmailTransport {
    /// Creates a transport using the system sendmail path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            command: DEFAULT_COMMAND.into(),
        }
    }

    /// Creates a transport using a custom sendmail-compatible binary.
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for SendmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SendmailTransport {
    fn send(&self, email: &Email) -> bool {
        // -i: a lone dot on a line is not end of input
        let mut child = match Command::new(&self.command)
            .arg("-i")
            .arg("-f")
            .arg(email.from_address().as_str())
            .arg(email.to_address().as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                tracing::warn!(command = %self.command, %err, "failed to spawn delivery agent");
                return false;
            }
        };

        if let Some(mut stdin) = child.stdin.take()
            && let Err(err) = stdin.write_all(render(email).as_bytes())
        {
            // Still reap the child below; a broken pipe means a failed exit
            tracing::warn!(%err, "failed to write message to delivery agent");
        }

        match child.wait() {
            Ok(status) => {
                tracing::debug!(
                    to = %email.to_address(),
                    success = status.success(),
                    "delivery agent finished"
                );
                status.success()
            }
            Err(err) => {
                tracing::warn!(%err, "failed to wait for delivery agent");
                false
            }
        }
    }
}

/// Renders the full wire message: recipient and subject lines, the
/// composed header block, a blank line, then the multipart body.
fn render(email: &Email) -> String {
    format!(
        "To: {}\r\nSubject: {}\r\n{}\r\n{}",
        email.to_address(),
        email.subject(),
        email.header_block(),
        email.body(),
    )
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
    use mailquill_mime::{Headers, MessagePart};

    fn sample_email() -> Email {
        Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[MessagePart::plain("Hello")],
        )
        .unwrap()
    }

    #[test]
    fn test_render_layout() {
        let email = sample_email();
        let rendered = render(&email);

        assert!(rendered.starts_with("To: a@b.com\r\nSubject: Hi\r\nMIME-Version: 1.0\r\n"));

        // Exactly one blank line between the header block and the body
        let (head, body) = rendered.split_once("\r\n\r\n").unwrap();
        assert!(head.lines().all(|line| line.contains(": ")));
        assert_eq!(body, email.body());
    }

    #[test]
    fn test_missing_binary_reports_false() {
        let transport = SendmailTransport::with_command("/nonexistent/mailquill-sendmail");
        assert!(!transport.send(&sample_email()));
    }

    #[test]
    fn test_exit_status_is_the_verdict() {
        let accepting = SendmailTransport::with_command("/bin/true");
        assert!(accepting.send(&sample_email()));

        let rejecting = SendmailTransport::with_command("/bin/false");
        assert!(!rejecting.send(&sample_email()));
    }
}
