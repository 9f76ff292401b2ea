use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Verifies that the AuthGuard grants access when the caller is authenticated,
/// exists in the database, and has the admin role.
///
/// Expected: Ok(User) with admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .build()
        .await?;

    let provider = StaticIdentityProvider::new().with_token("admin-token", &admin.email);
    let headers = bearer("admin-token");

    let user = AuthGuard::new(db, &provider, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.email, "admin@example.com");
    assert!(user.is_admin());

    Ok(())
}

/// Tests donor is denied admin permission.
///
/// Verifies that the guard re-reads the stored role rather than trusting the token.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_donor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::user::create_user(db).await?;

    let provider = StaticIdentityProvider::new().with_token("donor-token", &donor.email);
    let headers = bearer("donor-token");

    let result = AuthGuard::new(db, &provider, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a verified identity without a stored user record is denied.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_to_unregistered_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = StaticIdentityProvider::new().with_token("token", "stranger@example.com");
    let headers = bearer("token");

    let result = AuthGuard::new(db, &provider, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests a demoted admin loses access on the next request.
///
/// Expected: Err(AuthError::AccessDenied) after the stored role changes
#[tokio::test]
async fn reflects_role_change_immediately() -> Result<(), AppError> {
    use crate::server::{data::user::UserRepository, model::user::UserRole};

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let provider = StaticIdentityProvider::new().with_token("token", &admin.email);
    let headers = bearer("token");
    let guard = AuthGuard::new(db, &provider, &headers);

    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    UserRepository::new(db).set_role(admin.id, UserRole::Donor).await?;

    assert!(matches!(
        guard.require(&[Permission::Admin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
