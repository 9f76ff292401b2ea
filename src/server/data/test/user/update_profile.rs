use super::*;

/// Tests updating a subset of profile fields.
///
/// Expected: Ok with only supplied fields changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .blood_group("A+")
        .district("Dhaka")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            &user.email,
            UpdateProfileParam {
                district: Some("Khulna".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.district.as_deref(), Some("Khulna"));
    assert_eq!(updated.blood_group.as_deref(), Some("A+"));
    assert_eq!(updated.name, user.name);
    assert_eq!(updated.role, user.role);
    assert_eq!(updated.created_at, user.created_at);

    Ok(())
}

/// Tests updating the profile of an unregistered email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            "nobody@example.com",
            UpdateProfileParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
