use axum::http::{header::AUTHORIZATION, HeaderMap};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{identity::Identity, user::User},
    service::identity::IdentityProvider,
};

/// Checks applied to the caller's stored user record after authentication.
pub enum Permission {
    /// Stored role is `admin`.
    Admin,
    /// Stored status is `active`.
    Active,
}

/// Request-scoped authentication guard.
///
/// Authentication verifies the bearer credential with the identity provider. Permission
/// checks then re-read the caller's stored user record by email, so role and status
/// changes take effect on the next request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        identity: &'a dyn IdentityProvider,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            identity,
            headers,
        }
    }

    /// Verifies the bearer credential and returns the caller's identity.
    pub async fn authenticate(&self) -> Result<Identity, AppError> {
        let token = extract_bearer_token(self.headers)?.ok_or(AuthError::MissingToken)?;

        self.verify(token).await
    }

    /// Like `authenticate`, but a request without an `Authorization` header is anonymous
    /// rather than rejected. A header that is present must still be valid.
    pub async fn authenticate_optional(&self) -> Result<Option<Identity>, AppError> {
        match extract_bearer_token(self.headers)? {
            Some(token) => Ok(Some(self.verify(token).await?)),
            None => Ok(None),
        }
    }

    /// Authenticates the caller and checks `permissions` against their stored record.
    ///
    /// Permissions are checked in order and the first failure is returned.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller's stored user record
    /// - `Err(AuthError::MissingToken | InvalidHeader | InvalidToken)` - 401
    /// - `Err(AuthError::UserNotInDatabase | AccessDenied | AccountBlocked)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let identity = self.authenticate().await?;
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_email(&identity.email).await? else {
            return Err(AuthError::UserNotInDatabase(identity.email).into());
        };
        let user = User::from_entity(entity)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.email,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Active => {
                    if !user.is_active() {
                        return Err(AuthError::AccountBlocked(user.email).into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn verify(&self, token: &str) -> Result<Identity, AppError> {
        match self.identity.verify(token).await {
            Ok(identity) => {
                tracing::debug!(
                    "Verified {} (provider uid {})",
                    identity.email,
                    identity.claims["localId"]
                );
                Ok(identity)
            }
            Err(err) if err.is_credential_error() => {
                Err(AuthError::InvalidToken(err.to_string()).into())
            }
            Err(err) => Err(AppError::IdentityErr(err)),
        }
    }
}

/// Reads the bearer token from the `Authorization` header.
///
/// # Returns
/// - `Ok(Some(token))` - Header present with a non-empty Bearer token
/// - `Ok(None)` - No `Authorization` header
/// - `Err(AuthError::InvalidHeader)` - Header is not UTF-8, not Bearer, or the token is empty
fn extract_bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Invalid header encoding".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            AuthError::InvalidHeader("Authorization header must use Bearer scheme".to_string())
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidHeader("Empty bearer token".to_string()));
    }

    Ok(Some(token))
}
