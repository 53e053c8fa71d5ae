//! Message parts and composed multipart messages.

use crate::address::Address;
use crate::date;
use crate::encoding::encode_header;
use crate::error::Result;
use crate::header::Headers;
use rand::RngCore;
use rand::rngs::OsRng;
use std::fmt::Write as _;

/// Fixed prefix of every generated boundary token.
const BOUNDARY_PREFIX: &str = "--------";

/// Random bytes behind each boundary token (128 bits of entropy).
const BOUNDARY_BYTES: usize = 16;

/// Preamble line shown by clients that cannot parse multipart bodies.
const MULTIPART_PREAMBLE: &str = "This is a multi-part message in MIME format.\r\n";

/// One alternative rendering of a message's content.
///
/// A pure value carrier: no field is validated here and nothing mutates a
/// part after construction. Callers own parts and hand them to
/// [`Email::compose`] by reference.
#[derive(Debug, Clone)]
pub struct MessagePart {
    body: String,
    content_type: String,
    headers: Headers,
}

impl MessagePart {
    /// Creates a part with an explicit content type and extra headers.
    #[must_use]
    pub fn new(body: impl Into<String>, content_type: impl Into<String>, headers: Headers) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
            headers,
        }
    }

    /// Creates a `text/plain` part with no extra headers.
    #[must_use]
    pub fn plain(body: impl Into<String>) -> Self {
        Self::new(body, "text/plain", Headers::new())
    }

    /// Creates a `text/html` part with no extra headers.
    #[must_use]
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(body, "text/html", Headers::new())
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the content type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the extra headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// A fully composed `multipart/alternative` message.
///
/// Construction validates addresses, encodes the subject, merges headers,
/// and serializes the body; the result is immutable and ready for a single
/// handoff to a transport.
#[derive(Debug, Clone)]
pub struct Email {
    to: Address,
    from_name: String,
    from: Address,
    subject: String,
    headers: Headers,
    body: String,
}

impl Email {
    /// Composes a message from envelope fields and an ordered part list.
    ///
    /// `extra_headers` are merged first; the generated `MIME-Version`,
    /// `Date`, `Content-Transfer-Encoding`, `Content-Type` and `From`
    /// headers overwrite caller entries with matching keys, as does
    /// `Reply-To` when `reply_to` carries a non-empty address. An empty
    /// `parts` slice yields a degenerate body of preamble plus closing
    /// boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`](crate::Error::InvalidAddress) when
    /// `to`, `from`, or a non-empty `reply_to` fails syntax validation.
    /// Validation runs before any header or body construction.
    pub fn compose(
        to: &str,
        from_name: &str,
        from: &str,
        reply_to: Option<&str>,
        extra_headers: Headers,
        subject: &str,
        parts: &[MessagePart],
    ) -> Result<Self> {
        let to = Address::new(to)?;
        let from = Address::new(from)?;
        let reply_to = match reply_to {
            Some(addr) if !addr.is_empty() => Some(Address::new(addr)?),
            _ => None,
        };

        let subject = encode_header(subject);
        let boundary = generate_boundary();

        let mut headers = extra_headers;
        headers.set("MIME-Version", "1.0");
        headers.set("Date", date::rfc2822_now());
        headers.set("Content-Transfer-Encoding", "8bit");
        headers.set(
            "Content-Type",
            format!("multipart/alternative;boundary=\"{boundary}\""),
        );
        headers.set("From", format!("{from_name} <{from}>"));
        if let Some(reply_to) = &reply_to {
            headers.set("Reply-To", reply_to.as_str());
        }

        let body = serialize_body(&boundary, parts);

        Ok(Self {
            to,
            from_name: from_name.into(),
            from,
            subject,
            headers,
            body,
        })
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn to_address(&self) -> &Address {
        &self.to
    }

    /// Returns the sender address.
    #[must_use]
    pub const fn from_address(&self) -> &Address {
        &self.from
    }

    /// Returns the sender display name.
    #[must_use]
    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    /// Returns the subject, RFC 2047 encoded where required.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the merged header map.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the serialized multipart body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Renders the header map as a CRLF-joined block.
    #[must_use]
    pub fn header_block(&self) -> String {
        self.headers.to_string()
    }
}

/// Generates a fresh boundary token: eight literal hyphens followed by the
/// lowercase hex rendering of 16 bytes from the OS entropy source.
fn generate_boundary() -> String {
    let mut bytes = [0u8; BOUNDARY_BYTES];
    OsRng.fill_bytes(&mut bytes);

    let mut token = String::with_capacity(BOUNDARY_PREFIX.len() + BOUNDARY_BYTES * 2);
    token.push_str(BOUNDARY_PREFIX);
    for byte in bytes {
        let _ = write!(token, "{byte:02x}");
    }
    token
}

/// Serializes parts into the wire body. The layout is a compatibility
/// contract: CRLF line endings, the literal preamble sentence, per-part
/// delimiter and headers, and a closing boundary with no trailing CRLF.
fn serialize_body(boundary: &str, parts: &[MessagePart]) -> String {
    let mut body = String::from(MULTIPART_PREAMBLE);
    for part in parts {
        let _ = write!(body, "--{boundary}\r\n");
        let _ = write!(body, "Content-Type: {}; charset=UTF-8\r\n", part.content_type());
        body.push_str("Content-Transfer-Encoding: 8bit\r\n");
        for (name, value) in part.headers().iter() {
            let _ = write!(body, "{name}: {value}\r\n");
        }
        let _ = write!(body, "\r\n{}\r\n\r\n", part.body());
    }
    let _ = write!(body, "--{boundary}--");
    body
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
    use crate::error::Error;
    use proptest::prelude::*;

    fn boundary_of(email: &Email) -> String {
        let content_type = email.headers().get("Content-Type").unwrap();
        let token = content_type
            .strip_prefix("multipart/alternative;boundary=\"")
            .unwrap();
        token.strip_suffix('"').unwrap().to_string()
    }

    #[test]
    fn test_message_part_defaults() {
        let part = MessagePart::plain("Hello");
        assert_eq!(part.body(), "Hello");
        assert_eq!(part.content_type(), "text/plain");
        assert!(part.headers().is_empty());
    }

    #[test]
    fn test_generate_boundary_shape() {
        let token = generate_boundary();
        assert_eq!(token.len(), 40);
        assert_eq!(&token[..8], "--------");
        assert!(token[8..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_boundary_unique() {
        assert_ne!(generate_boundary(), generate_boundary());
    }

    #[test]
    fn test_compose_single_part_body() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[MessagePart::plain("Hello")],
        )
        .unwrap();

        let boundary = boundary_of(&email);
        let expected = format!(
            "This is a multi-part message in MIME format.\r\n\
             --{boundary}\r\n\
             Content-Type: text/plain; charset=UTF-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n\
             \r\n\
             Hello\r\n\
             \r\n\
             --{boundary}--"
        );
        assert_eq!(email.body(), expected);
    }

    #[test]
    fn test_compose_empty_parts_degenerate_body() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[],
        )
        .unwrap();

        let boundary = boundary_of(&email);
        assert_eq!(
            email.body(),
            format!("This is a multi-part message in MIME format.\r\n--{boundary}--")
        );
    }

    #[test]
    fn test_compose_part_order_preserved() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[MessagePart::plain("first"), MessagePart::html("<p>second</p>")],
        )
        .unwrap();

        let plain_at = email.body().find("first").unwrap();
        let html_at = email.body().find("<p>second</p>").unwrap();
        assert!(plain_at < html_at);
    }

    #[test]
    fn test_compose_part_extra_headers_in_order() {
        let mut part_headers = Headers::new();
        part_headers.set("Content-Disposition", "inline");
        part_headers.set("X-Part-Tag", "alt");
        let part = MessagePart::new("Hello", "text/plain", part_headers);

        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[part],
        )
        .unwrap();

        assert!(email.body().contains(
            "Content-Transfer-Encoding: 8bit\r\n\
             Content-Disposition: inline\r\n\
             X-Part-Tag: alt\r\n\
             \r\n\
             Hello"
        ));
    }

    #[test]
    fn test_compose_system_headers_present() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[],
        )
        .unwrap();

        let headers = email.headers();
        assert_eq!(headers.get("MIME-Version"), Some("1.0"));
        assert_eq!(headers.get("Content-Transfer-Encoding"), Some("8bit"));
        assert_eq!(headers.get("From"), Some("Sender <s@b.com>"));
        assert!(headers.get("Date").is_some());
        assert!(headers.get("Reply-To").is_none());
    }

    #[test]
    fn test_compose_system_headers_overwrite_caller_headers() {
        let mut extra = Headers::new();
        extra.set("From", "spoof <x@y.com>");
        extra.set("X-Mailer", "mailquill");

        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            extra,
            "Hi",
            &[],
        )
        .unwrap();

        assert_eq!(email.headers().get("From"), Some("Sender <s@b.com>"));
        assert_eq!(email.headers().get("X-Mailer"), Some("mailquill"));
    }

    #[test]
    fn test_compose_reply_to_header() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            Some("replies@b.com"),
            Headers::new(),
            "Hi",
            &[],
        )
        .unwrap();
        assert_eq!(email.headers().get("Reply-To"), Some("replies@b.com"));
    }

    #[test]
    fn test_compose_empty_reply_to_skips_header() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            Some(""),
            Headers::new(),
            "Hi",
            &[],
        )
        .unwrap();
        assert!(email.headers().get("Reply-To").is_none());
    }

    #[test]
    fn test_compose_invalid_to_address() {
        let err = Email::compose(
            "bad-address",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Hi",
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(addr) if addr == "bad-address"));
    }

    #[test]
    fn test_compose_invalid_from_address() {
        assert!(
            Email::compose("a@b.com", "Sender", "nope", None, Headers::new(), "Hi", &[]).is_err()
        );
    }

    #[test]
    fn test_compose_invalid_reply_to_address() {
        assert!(
            Email::compose(
                "a@b.com",
                "Sender",
                "s@b.com",
                Some("not an address"),
                Headers::new(),
                "Hi",
                &[]
            )
            .is_err()
        );
    }

    #[test]
    fn test_compose_encodes_subject() {
        let email = Email::compose(
            "a@b.com",
            "Sender",
            "s@b.com",
            None,
            Headers::new(),
            "Héllo",
            &[],
        )
        .unwrap();
        assert!(email.subject().starts_with("=?UTF-8?B?"));
    }

    proptest! {
        #[test]
        fn prop_bodies_identical_modulo_boundary(
            part_bodies in proptest::collection::vec("[a-zA-Z0-9 .,!]{0,40}", 0..4),
            subject in "[a-zA-Z0-9 ]{0,20}",
        ) {
            let parts: Vec<MessagePart> =
                part_bodies.iter().map(|body| MessagePart::plain(body.as_str())).collect();

            let first = Email::compose(
                "a@b.com", "Sender", "s@b.com", None, Headers::new(), &subject, &parts,
            ).unwrap();
            let second = Email::compose(
                "a@b.com", "Sender", "s@b.com", None, Headers::new(), &subject, &parts,
            ).unwrap();

            let normalize = |email: &Email| {
                email.body().replace(&boundary_of(email), "<boundary>")
            };
            prop_assert_eq!(normalize(&first), normalize(&second));
        }

        #[test]
        fn prop_body_frame_invariants(
            part_bodies in proptest::collection::vec("[a-zA-Z0-9 ]{0,40}", 0..4),
        ) {
            let parts: Vec<MessagePart> =
                part_bodies.iter().map(|body| MessagePart::plain(body.as_str())).collect();
            let email = Email::compose(
                "a@b.com", "Sender", "s@b.com", None, Headers::new(), "Hi", &parts,
            ).unwrap();

            let boundary = boundary_of(&email);
            prop_assert_eq!(boundary.len(), 40);
            prop_assert!(email.body().starts_with("This is a multi-part message in MIME format.\r\n"));
            let closing = format!("--{boundary}--");
            prop_assert!(email.body().ends_with(&closing));
            prop_assert_eq!(
                email.body().matches(&format!("--{boundary}\r\n")).count(),
                parts.len()
            );
        }
    }
}
