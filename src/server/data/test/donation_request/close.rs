use super::*;

/// Tests completing an in-progress request.
///
/// Expected: Ok(true) with status "done" and donor fields kept
#[tokio::test]
async fn completes_in_progress_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("inprogress")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    assert!(
        repo.close(&close_param(request.id, &requester.email, DonationStatus::Done))
            .await?
    );

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, "done");
    assert_eq!(stored.donor_email.as_deref(), Some("donor@example.com"));

    Ok(())
}

/// Tests completing a request that was never claimed.
///
/// Expected: Ok(false) and status still "pending"
#[tokio::test]
async fn does_not_complete_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = factory::create_donation_request(db, &requester.email).await?;

    let repo = DonationRequestRepository::new(db);
    assert!(
        !repo
            .close(&close_param(request.id, &requester.email, DonationStatus::Done))
            .await?
    );

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

/// Tests canceling from both non-final statuses.
///
/// Expected: Ok(true) for pending and in-progress requests
#[tokio::test]
async fn cancels_pending_and_in_progress_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let pending = factory::create_donation_request(db, &requester.email).await?;
    let in_progress = DonationRequestFactory::new(db, &requester.email)
        .status("inprogress")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    for id in [pending.id, in_progress.id] {
        assert!(
            repo.close(&close_param(id, &requester.email, DonationStatus::Canceled))
                .await?
        );
        assert_eq!(repo.find_by_id(id).await?.unwrap().status, "canceled");
    }

    Ok(())
}

/// Tests that final statuses are never left.
///
/// Expected: Ok(false) for canceling a done request
#[tokio::test]
async fn does_not_leave_final_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    assert!(
        !repo
            .close(&close_param(request.id, &requester.email, DonationStatus::Canceled))
            .await?
    );

    Ok(())
}

/// Tests closing someone else's request.
///
/// Expected: Ok(false) and status unchanged
#[tokio::test]
async fn does_not_close_foreign_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_requester, other, request) = create_request_with_participants(db).await?;

    let repo = DonationRequestRepository::new(db);
    assert!(
        !repo
            .close(&close_param(request.id, &other.email, DonationStatus::Canceled))
            .await?
    );
    assert_eq!(repo.find_by_id(request.id).await?.unwrap().status, "pending");

    Ok(())
}
