use super::*;

/// Tests editing a pending request owned by the caller.
///
/// Expected: Ok(true) with only the supplied fields changed
#[tokio::test]
async fn edits_owned_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = factory::create_donation_request(db, &requester.email).await?;

    let repo = DonationRequestRepository::new(db);
    let updated = repo
        .update_pending(
            request.id,
            &requester.email,
            UpdateDonationRequestParam {
                hospital_name: Some("Square Hospital".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.hospital_name, "Square Hospital");
    assert_eq!(stored.recipient_name, request.recipient_name);
    assert_eq!(stored.status, "pending");

    Ok(())
}

/// Tests editing a request that has been claimed.
///
/// Expected: Ok(false) and stored fields unchanged
#[tokio::test]
async fn does_not_edit_claimed_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let request = DonationRequestFactory::new(db, &requester.email)
        .status("inprogress")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    let updated = repo
        .update_pending(
            request.id,
            &requester.email,
            UpdateDonationRequestParam {
                hospital_name: Some("Square Hospital".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.hospital_name, request.hospital_name);

    Ok(())
}

/// Tests editing a request owned by someone else.
///
/// Expected: Ok(false)
#[tokio::test]
async fn does_not_edit_foreign_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_requester, other, request) = create_request_with_participants(db).await?;

    let repo = DonationRequestRepository::new(db);
    let updated = repo
        .update_pending(
            request.id,
            &other.email,
            UpdateDonationRequestParam {
                district: Some("Sylhet".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated);

    Ok(())
}
