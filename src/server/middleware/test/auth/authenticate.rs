use super::*;

/// Tests a valid bearer token resolves to the provider's identity.
///
/// Expected: Ok(Identity) with the normalized email
#[tokio::test]
async fn resolves_identity_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new().with_token("good", "Donor@Example.com");
    let headers = bearer("good");

    let identity = AuthGuard::new(db, &provider, &headers).authenticate().await?;

    assert_eq!(identity.email, "donor@example.com");

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &provider, &headers).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token the provider does not recognise is rejected as invalid.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new().with_token("good", "donor@example.com");
    let headers = bearer("forged");

    let result = AuthGuard::new(db, &provider, &headers).authenticate().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests optional authentication treats a missing header as an anonymous caller.
///
/// Expected: Ok(None)
#[tokio::test]
async fn optional_allows_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new();
    let headers = HeaderMap::new();

    let identity = AuthGuard::new(db, &provider, &headers)
        .authenticate_optional()
        .await?;

    assert!(identity.is_none());

    Ok(())
}

/// Tests optional authentication still rejects a header that is present but invalid.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn optional_rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new();
    let headers = bearer("expired");

    let result = AuthGuard::new(db, &provider, &headers)
        .authenticate_optional()
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
