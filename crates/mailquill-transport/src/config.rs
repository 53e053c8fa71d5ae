//! Sender configuration.

/// Sender identity defaults used by [`Mailer`](crate::Mailer).
///
/// A pure data holder: nothing is validated here. Addresses are checked at
/// compose time, so a bad `from_address` surfaces on the first send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SenderConfig {
    /// Display name for the `From` header.
    pub from_name: String,
    /// Sender address, used for the `From` header and the envelope
    /// sender override.
    pub from_address: String,
    /// Default `Reply-To` address; an empty string disables the header.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reply_to: String,
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
    fn test_default_is_empty() {
        let config = SenderConfig::default();
        assert!(config.from_name.is_empty());
        assert!(config.from_address.is_empty());
        assert!(config.reply_to.is_empty());
    }
}
