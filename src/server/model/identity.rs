//! Identity resolved from a verified bearer credential.

/// Caller identity as reported by the identity provider.
///
/// Only the email is used for authorization decisions; it is normalized to lowercase
/// before the identity leaves the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Normalized email address of the caller.
    pub email: String,
    /// Display name, when the provider has one on record.
    pub name: Option<String>,
    /// Raw provider claims for the account.
    pub claims: serde_json::Value,
}
