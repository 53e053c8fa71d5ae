//! Email address validation.

use crate::error::{Error, Result};
use std::fmt;

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Creates a new address from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the address fails syntax validation.
    pub fn new(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        if is_valid(&addr) {
            Ok(Self(addr))
        } else {
            Err(Error::InvalidAddress(addr))
        }
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks an address against an RFC 5322 subset: a dot-atom local part,
/// exactly one `@`, and a dotted domain of alphanumeric/hyphen labels.
#[must_use]
pub fn is_valid(addr: &str) -> bool {
    addr.split_once('@')
        .is_some_and(|(local, domain)| is_valid_local(local) && is_valid_domain(domain))
}

// atext per RFC 5322 section 3.2.3
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c)
}

fn is_valid_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local.chars().all(|c| c == '.' || is_atext(c))
}

fn is_valid_domain(domain: &str) -> bool {
    domain.contains('.') && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
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
    fn test_valid_address() {
        let addr = Address::new("user@example.com").unwrap();
        assert_eq!(addr.as_str(), "user@example.com");
    }

    #[test]
    fn test_valid_address_with_tags_and_subdomain() {
        assert!(is_valid("first.last+tag@mail.example.co.uk"));
        assert!(is_valid("o'brien@example.com"));
        assert!(is_valid("x@ex-ample.com"));
    }

    #[test]
    fn test_invalid_address_no_at() {
        assert!(Address::new("userexample.com").is_err());
    }

    #[test]
    fn test_invalid_address_empty() {
        assert!(Address::new("").is_err());
    }

    #[test]
    fn test_invalid_address_empty_local() {
        assert!(Address::new("@example.com").is_err());
    }

    #[test]
    fn test_invalid_address_empty_domain() {
        assert!(Address::new("user@").is_err());
    }

    #[test]
    fn test_invalid_address_double_at() {
        assert!(!is_valid("user@host@example.com"));
    }

    #[test]
    fn test_invalid_address_dotless_domain() {
        assert!(!is_valid("user@localhost"));
    }

    #[test]
    fn test_invalid_address_dot_edges() {
        assert!(!is_valid(".user@example.com"));
        assert!(!is_valid("user.@example.com"));
        assert!(!is_valid("us..er@example.com"));
        assert!(!is_valid("user@example..com"));
        assert!(!is_valid("user@.example.com"));
    }

    #[test]
    fn test_invalid_address_whitespace() {
        assert!(!is_valid("us er@example.com"));
        assert!(!is_valid("user@exa mple.com"));
    }

    #[test]
    fn test_invalid_address_label_hyphen_edges() {
        assert!(!is_valid("user@-example.com"));
        assert!(!is_valid("user@example-.com"));
    }

    #[test]
    fn test_error_carries_address() {
        let err = Address::new("bad-address").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email address 'bad-address'");
    }
}
