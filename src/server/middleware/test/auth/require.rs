use super::*;

mod require_admin;

/// Tests empty permission list grants access to any registered caller.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a stored record is granted access, even if blocked.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .status("blocked")
        .build()
        .await?;
    let provider = StaticIdentityProvider::new().with_token("token", &user.email);
    let headers = bearer("token");

    let returned = AuthGuard::new(db, &provider, &headers).require(&[]).await?;

    assert_eq!(returned.email, user.email);

    Ok(())
}
