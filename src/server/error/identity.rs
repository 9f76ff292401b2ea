use thiserror::Error;

/// Failures reported by an identity provider while verifying a bearer credential.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The provider rejected the credential (malformed, expired, revoked).
    #[error("credential rejected: {0}")]
    InvalidToken(String),

    /// The credential is valid but the account has no email address to key users by.
    #[error("verified account has no email address")]
    MissingEmail,

    /// The provider answered with an unexpected HTTP status.
    #[error("identity provider returned status {0}")]
    Unavailable(u16),

    /// The provider could not be reached or returned an unreadable body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl IdentityError {
    /// Whether this failure is the caller's fault rather than the provider's.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::InvalidToken(_) | Self::MissingEmail)
    }
}
