//! Localized message lookup.

/// Opaque message formatting collaborator.
///
/// `key` identifies a message template and `args` fill its positional
/// placeholders. Implementations return something displayable for unknown
/// keys rather than failing.
pub trait MessageFormatter: Send + Sync {
    fn t(&self, key: &str, args: &[&str]) -> String;
}
