use super::*;

/// Tests paging through users newest first.
///
/// Expected: Ok with page 2 holding the oldest users and total counting all users
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = UserFactory::new(db).created_at(minutes_ago(30)).build().await?;
    let middle = UserFactory::new(db).created_at(minutes_ago(20)).build().await?;
    let newest = UserFactory::new(db).created_at(minutes_ago(10)).build().await?;

    let repo = UserRepository::new(db);

    let (first_page, total) = repo.get_paginated(None, PageRequest::new(Some(1), Some(2))).await?;
    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );

    let (second_page, _) = repo.get_paginated(None, PageRequest::new(Some(2), Some(2))).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, oldest.id);

    Ok(())
}

/// Tests filtering the user listing by account status.
///
/// Expected: Ok with only blocked users counted and returned
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let blocked = UserFactory::new(db).status("blocked").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(Some(UserStatus::Blocked), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].id, blocked.id);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with empty page and correct total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(None, PageRequest::new(Some(5), Some(10)))
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests requesting the largest page number a caller can send.
///
/// Expected: Ok with no users and the total still counting every user
#[tokio::test]
async fn far_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(
            None,
            PageRequest::from_query(Some("9223372036854775807"), Some("100")),
        )
        .await?;

    assert_eq!(total, 1);
    assert!(users.is_empty());

    Ok(())
}
