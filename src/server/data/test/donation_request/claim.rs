use super::*;

/// Tests claiming a pending request.
///
/// Verifies that the status and all donor fields are written together.
///
/// Expected: Ok(true) with request in progress and donor recorded
#[tokio::test]
async fn claims_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_requester, donor, request) = create_request_with_participants(db).await?;
    let donated_at = Utc::now();

    let repo = DonationRequestRepository::new(db);
    assert!(repo.claim(claim_param(request.id, &donor), donated_at).await?);

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, "inprogress");
    assert_eq!(stored.donor_email.as_deref(), Some(donor.email.as_str()));
    assert_eq!(stored.donor_name.as_deref(), Some(donor.name.as_str()));
    assert!(stored.donated_at.is_some());

    Ok(())
}

/// Tests claiming a request that is already in progress.
///
/// Expected: Ok(false) and the original donor unchanged
#[tokio::test]
async fn does_not_claim_taken_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let late_donor = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("inprogress")
        .donor("First Donor", "first@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    assert!(
        !repo
            .claim(claim_param(request.id, &late_donor), Utc::now())
            .await?
    );

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.donor_email.as_deref(), Some("first@example.com"));

    Ok(())
}

/// Tests two donors claiming the same request at once.
///
/// Expected: exactly one claim succeeds and the stored donor is the winner
#[tokio::test]
async fn concurrent_claims_have_one_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_requester, first, request) = create_request_with_participants(db).await?;
    let second = factory::create_user(db).await?;

    let repo = DonationRequestRepository::new(db);
    let (first_won, second_won) = tokio::join!(
        repo.claim(claim_param(request.id, &first), Utc::now()),
        repo.claim(claim_param(request.id, &second), Utc::now())
    );
    let (first_won, second_won) = (first_won?, second_won?);

    assert!(first_won ^ second_won);

    let winner = if first_won { &first } else { &second };
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.donor_email.as_deref(), Some(winner.email.as_str()));

    Ok(())
}

/// Tests claiming a request that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn does_not_claim_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let donor = factory::create_user(db).await?;

    let repo = DonationRequestRepository::new(db);
    assert!(!repo.claim(claim_param(42, &donor), Utc::now()).await?);

    Ok(())
}
