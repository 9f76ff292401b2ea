use super::*;

/// Tests listing a requester's own requests.
///
/// Expected: Ok with only the caller's requests, newest first
#[tokio::test]
async fn returns_only_own_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let older = DonationRequestFactory::new(db, &requester.email)
        .created_at(minutes_ago(10))
        .build()
        .await?;
    let newer = DonationRequestFactory::new(db, &requester.email)
        .created_at(minutes_ago(1))
        .build()
        .await?;
    factory::create_donation_request(db, &other.email).await?;

    let repo = DonationRequestRepository::new(db);
    let requests = repo.get_by_requester(&requester.email, None, None).await?;

    assert_eq!(
        requests.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Tests the status filter and limit together.
///
/// Expected: Ok with at most `limit` requests in the given status
#[tokio::test]
async fn applies_status_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_donation_request(db, &requester.email).await?;
    }
    DonationRequestFactory::new(db, &requester.email)
        .status("canceled")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    let requests = repo
        .get_by_requester(&requester.email, Some(DonationStatus::Pending), Some(2))
        .await?;

    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.status == "pending"));

    Ok(())
}
