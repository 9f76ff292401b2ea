use super::*;

/// Tests the total with no fundings recorded.
///
/// Expected: Ok(0)
#[tokio::test]
async fn totals_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Funding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FundingRepository::new(db);

    assert_eq!(repo.total_amount().await?, 0);

    Ok(())
}

/// Tests summing recorded fundings.
///
/// Expected: Ok with the sum of all amounts
#[tokio::test]
async fn sums_all_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Funding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_funding(db, 250).await?;
    factory::create_funding(db, 750).await?;
    factory::create_funding(db, 40).await?;

    let repo = FundingRepository::new(db);

    assert_eq!(repo.total_amount().await?, 1040);

    Ok(())
}
