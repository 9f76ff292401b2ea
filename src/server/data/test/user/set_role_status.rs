use super::*;

/// Tests promoting a donor to admin.
///
/// Expected: Ok(true) and role stored as "admin"
#[tokio::test]
async fn sets_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_role(user.id, UserRole::Admin).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, "admin");
    assert_eq!(stored.status, "active");

    Ok(())
}

/// Tests blocking a user.
///
/// Expected: Ok(true) and status stored as "blocked"
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_status(user.id, UserStatus::Blocked).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.status, "blocked");

    Ok(())
}

/// Tests changing role or status of a missing user.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.set_role(999, UserRole::Admin).await?);
    assert!(!repo.set_status(999, UserStatus::Blocked).await?);

    Ok(())
}
