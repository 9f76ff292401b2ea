use super::*;

/// Tests searching donors by blood group and district.
///
/// Verifies that blocked donors and admins are excluded even when they match.
///
/// Expected: Ok with only the active matching donor
#[tokio::test]
async fn excludes_blocked_and_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = UserFactory::new(db)
        .blood_group("O+")
        .district("Dhaka")
        .build()
        .await?;
    UserFactory::new(db)
        .blood_group("O+")
        .district("Dhaka")
        .status("blocked")
        .build()
        .await?;
    UserFactory::new(db)
        .blood_group("O+")
        .district("Dhaka")
        .role("admin")
        .build()
        .await?;
    UserFactory::new(db)
        .blood_group("B+")
        .district("Dhaka")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let donors = repo
        .search_donors(DonorSearchParam::new(
            Some("O+".to_string()),
            Some("Dhaka".to_string()),
            None,
        ))
        .await?;

    assert_eq!(donors.len(), 1);
    assert_eq!(donors[0].id, active.id);

    Ok(())
}

/// Tests searching with no filters.
///
/// Expected: Ok with every active donor ordered by name
#[tokio::test]
async fn returns_all_active_donors_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Zara").build().await?;
    UserFactory::new(db).name("Amin").build().await?;

    let repo = UserRepository::new(db);
    let donors = repo
        .search_donors(DonorSearchParam::new(None, None, None))
        .await?;

    assert_eq!(
        donors.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Amin", "Zara"]
    );

    Ok(())
}
