use super::*;

/// Tests the owner deleting a pending request.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_owned_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = factory::create_donation_request(db, &requester.email).await?;

    let repo = DonationRequestRepository::new(db);
    assert!(repo.delete_pending_owned(request.id, &requester.email).await?);
    assert!(repo.find_by_id(request.id).await?.is_none());

    Ok(())
}

/// Tests the owner deleting a request that has left pending.
///
/// Expected: Ok(false) and the row kept
#[tokio::test]
async fn keeps_claimed_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("inprogress")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    assert!(!repo.delete_pending_owned(request.id, &requester.email).await?);
    assert!(repo.find_by_id(request.id).await?.is_some());

    Ok(())
}

/// Tests unconditional deletion.
///
/// Expected: Ok(true) for an existing request of any status, Ok(false) once gone
#[tokio::test]
async fn deletes_any_request_unconditionally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    assert!(repo.delete(request.id).await?);
    assert!(!repo.delete(request.id).await?);

    let count = entity::prelude::DonationRequest::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
