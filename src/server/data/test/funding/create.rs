use super::*;

/// Tests recording a funding.
///
/// Expected: Ok with amount, donor and transaction id stored
#[tokio::test]
async fn records_funding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Funding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FundingRepository::new(db);
    let funding = repo
        .create(CreateFundingParam {
            amount: 500,
            donor_name: "Nadia".to_string(),
            donor_email: "nadia@example.com".to_string(),
            transaction_id: Some("pi_123".to_string()),
        })
        .await?;

    assert_eq!(funding.amount, 500);
    assert_eq!(funding.donor_email, "nadia@example.com");
    assert_eq!(funding.transaction_id.as_deref(), Some("pi_123"));

    Ok(())
}
