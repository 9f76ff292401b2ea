//! Bearer credential verification against an external identity provider.
//!
//! The production provider calls a Firebase-compatible `accounts:lookup` endpoint, which
//! resolves an ID token to the account it was issued for. The verified email is the only
//! value the rest of the application uses to key users.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::server::{
    error::identity::IdentityError, model::identity::Identity, util::normalize::normalize_email,
};

/// Verifies bearer credentials and resolves them to an identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies `token` and returns the identity it was issued for.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Token is valid and belongs to an enabled account with an email
    /// - `Err(IdentityError::InvalidToken | MissingEmail)` - Token rejected
    /// - `Err(IdentityError::Unavailable | Request)` - Provider could not answer
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError>;
}

/// Identity provider backed by the Identity Toolkit `accounts:lookup` REST endpoint.
pub struct FirebaseIdentityProvider {
    http_client: reqwest::Client,
    lookup_url: Url,
    api_key: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<Value>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

impl FirebaseIdentityProvider {
    pub fn new(http_client: reqwest::Client, lookup_url: Url, api_key: String) -> Self {
        Self {
            http_client,
            lookup_url,
            api_key,
        }
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        let mut url = self.lookup_url.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .http_client
            .post(url)
            .json(&json!({ "idToken": token }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let reason = response
                .json::<ProviderErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "token rejected".to_string());
            return Err(IdentityError::InvalidToken(reason));
        }
        if !status.is_success() {
            return Err(IdentityError::Unavailable(status.as_u16()));
        }

        let body = response.json::<LookupResponse>().await?;
        let account = body
            .users
            .into_iter()
            .next()
            .ok_or_else(|| IdentityError::InvalidToken("no account for token".to_string()))?;

        identity_from_account(account)
    }
}

/// Extracts an identity from an `accounts:lookup` user record.
fn identity_from_account(account: Value) -> Result<Identity, IdentityError> {
    if account.get("disabled").and_then(Value::as_bool).unwrap_or(false) {
        return Err(IdentityError::InvalidToken("account disabled".to_string()));
    }

    let email = account
        .get("email")
        .and_then(Value::as_str)
        .map(normalize_email)
        .filter(|email| !email.is_empty())
        .ok_or(IdentityError::MissingEmail)?;

    let name = account
        .get("displayName")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    Ok(Identity {
        email,
        name,
        claims: account,
    })
}

/// Identity provider that accepts a fixed set of tokens.
#[cfg(test)]
pub struct StaticIdentityProvider {
    identities: std::collections::HashMap<String, Identity>,
}

#[cfg(test)]
impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self {
            identities: std::collections::HashMap::new(),
        }
    }

    /// Accepts `token` as a credential for `email`.
    pub fn with_token(mut self, token: &str, email: &str) -> Self {
        self.identities.insert(
            token.to_string(),
            Identity {
                email: normalize_email(email),
                name: None,
                claims: Value::Null,
            },
        );
        self
    }
}

#[cfg(test)]
#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        self.identities
            .get(token)
            .cloned()
            .ok_or_else(|| IdentityError::InvalidToken("unknown token".to_string()))
    }
}
