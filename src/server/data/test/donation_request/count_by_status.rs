use super::*;

/// Tests grouping request counts by status.
///
/// Expected: Ok with one entry per stored status and statuses without requests absent
#[tokio::test]
async fn counts_each_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    factory::create_donation_request(db, &requester.email).await?;
    factory::create_donation_request(db, &requester.email).await?;
    DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .donor("Donor", "donor@example.com")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    let mut counts = repo.count_by_status().await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("done".to_string(), 1), ("pending".to_string(), 2)]
    );
    assert_eq!(repo.count_all().await?, 3);

    Ok(())
}
