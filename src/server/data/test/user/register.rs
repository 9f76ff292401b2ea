use super::*;

/// Tests registering a new user.
///
/// Verifies that a first registration inserts a row with the default role and status
/// regardless of anything else in the parameters.
///
/// Expected: Ok with created flag set and donor/active defaults
#[tokio::test]
async fn registers_new_user_as_active_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (user, created) = repo.register(register_param("rahim@example.com")).await?;

    assert!(created);
    assert_eq!(user.email, "rahim@example.com");
    assert_eq!(user.role, "donor");
    assert_eq!(user.status, "active");
    assert_eq!(user.blood_group.as_deref(), Some("O+"));

    Ok(())
}

/// Tests registering an email that already exists.
///
/// Verifies that the second registration leaves the stored record untouched, including
/// a role that was changed after the first registration.
///
/// Expected: Ok with created flag unset and the original record returned
#[tokio::test]
async fn repeat_registration_returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = UserFactory::new(db)
        .email("rahim@example.com")
        .name("Original")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, created) = repo.register(register_param("rahim@example.com")).await?;

    assert!(!created);
    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "Original");
    assert_eq!(user.role, "admin");

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests concurrent registrations for the same email.
///
/// Expected: exactly one row stored and exactly one call reports creation
#[tokio::test]
async fn concurrent_registrations_store_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (first, second) = tokio::join!(
        repo.register(register_param("race@example.com")),
        repo.register(register_param("race@example.com"))
    );
    let (first, first_created) = first?;
    let (second, second_created) = second?;

    assert_eq!(first.id, second.id);
    assert!(first_created ^ second_created);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
