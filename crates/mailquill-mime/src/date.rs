//! `Date` header formatting.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// Formats a timestamp for the `Date` header.
///
/// RFC 2822 with a trailing parenthesized zone name, e.g.
/// `Sun, 23 Aug 2026 09:15:04 +0000 (UTC)`.
#[must_use]
pub fn rfc2822<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format("%a, %d %b %Y %H:%M:%S %z (%Z)").to_string()
}

/// Formats the current time for the `Date` header.
#[must_use]
pub fn rfc2822_now() -> String {
    rfc2822(&Utc::now())
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
    fn test_rfc2822_fixed_instant() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 23, 9, 15, 4).unwrap();
        assert_eq!(rfc2822(&dt), "Sun, 23 Aug 2026 09:15:04 +0000 (UTC)");
    }

    #[test]
    fn test_rfc2822_day_is_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap();
        assert_eq!(rfc2822(&dt), "Sat, 05 Sep 2026 00:00:00 +0000 (UTC)");
    }
}
