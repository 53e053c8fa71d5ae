//! Ordered email header handling.

use std::fmt;

/// Insertion-ordered collection of email headers.
///
/// Rendering and iteration follow insertion order exactly; the serialized
/// header block and per-part headers are wire-visible, so nothing here sorts
/// or normalizes key casing.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates a new empty header collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a header value.
    ///
    /// Keys match ASCII case-insensitively. An existing header keeps its
    /// position and takes the new name casing and value; a new header is
    /// appended at the end.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Gets the value for a header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Removes a header.
    pub fn remove(&mut self, name: &str) {
        self.entries
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    }

    /// Returns an iterator over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
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

    #[test]
    fn test_headers_new() {
        let headers = Headers::new();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_headers_set_get() {
        let mut headers = Headers::new();
        headers.set("X-Mailer", "mailquill");
        assert_eq!(headers.get("X-Mailer"), Some("mailquill"));
        assert_eq!(headers.get("x-mailer"), Some("mailquill")); // Case insensitive
    }

    #[test]
    fn test_headers_set_replaces_in_place() {
        let mut headers = Headers::new();
        headers.set("X-First", "1");
        headers.set("x-second", "2");
        headers.set("X-Third", "3");

        headers.set("X-Second", "overwritten");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("X-First", "1"),
                ("X-Second", "overwritten"),
                ("X-Third", "3"),
            ]
        );
    }

    #[test]
    fn test_headers_remove() {
        let mut headers = Headers::new();
        headers.set("X-Priority", "1");
        assert!(headers.get("X-Priority").is_some());

        headers.remove("x-priority");
        assert!(headers.get("X-Priority").is_none());
    }

    #[test]
    fn test_headers_insertion_order_preserved() {
        let mut headers = Headers::new();
        headers.set("Zeta", "z");
        headers.set("Alpha", "a");
        headers.set("Mu", "m");

        let names: Vec<_> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_headers_display_crlf_lines() {
        let mut headers = Headers::new();
        headers.set("MIME-Version", "1.0");
        headers.set("X-Mailer", "mailquill");

        assert_eq!(
            headers.to_string(),
            "MIME-Version: 1.0\r\nX-Mailer: mailquill\r\n"
        );
    }

    #[test]
    fn test_headers_from_iterator() {
        let headers: Headers = [("A", "1"), ("B", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("A"), Some("3"));
    }
}
