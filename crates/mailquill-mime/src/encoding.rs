//! MIME header encoding.
//!
//! RFC 2047 encoded words for non-ASCII header values.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes a header value as an RFC 2047 encoded word when needed.
///
/// Format: `=?UTF-8?B?encoded-text?=`. Pure-ASCII values free of
/// encoded-word markers pass through unchanged.
#[must_use]
pub fn encode_header(text: &str) -> String {
    if text.chars().all(|c| c.is_ascii() && c != '=' && c != '?') {
        return text.to_string();
    }

    let encoded = STANDARD.encode(text.as_bytes());
    format!("=?UTF-8?B?{encoded}?=")
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

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_header("Hello"), "Hello");
        assert_eq!(encode_header(""), "");
    }

    #[test]
    fn test_non_ascii_becomes_encoded_word() {
        let encoded = encode_header("Héllo");
        assert!(encoded.starts_with("=?UTF-8?B?"));
        assert!(encoded.ends_with("?="));
        assert_eq!(encoded, "=?UTF-8?B?SMOpbGxv?=");
    }

    #[test]
    fn test_marker_characters_force_encoding() {
        // '=' and '?' could be mistaken for encoded-word syntax downstream
        assert!(encode_header("a=b").starts_with("=?UTF-8?B?"));
        assert!(encode_header("what?").starts_with("=?UTF-8?B?"));
    }
}
