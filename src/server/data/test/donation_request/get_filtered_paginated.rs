use super::*;

/// Tests filtering by status and blood group together.
///
/// Verifies that requests matching only one of the filters are excluded and that the
/// page is ordered newest first.
///
/// Expected: Ok with the two done O+ requests, newest first
#[tokio::test]
async fn filters_by_status_and_blood_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let older = DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .blood_group("O+")
        .created_at(minutes_ago(20))
        .build()
        .await?;
    let newer = DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .blood_group("O+")
        .created_at(minutes_ago(5))
        .build()
        .await?;
    DonationRequestFactory::new(db, &requester.email)
        .status("done")
        .blood_group("A+")
        .build()
        .await?;
    DonationRequestFactory::new(db, &requester.email)
        .blood_group("O+")
        .build()
        .await?;

    let filter = DonationRequestFilter {
        status: Some(DonationStatus::Done),
        blood_group: Some("O+".to_string()),
        ..Default::default()
    };

    let repo = DonationRequestRepository::new(db);
    let (requests, total) = repo
        .get_filtered_paginated(filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        requests.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Tests the district filter.
///
/// Expected: Ok with case-insensitive substring matches only
#[tokio::test]
async fn matches_district_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let dhaka = DonationRequestFactory::new(db, &requester.email)
        .district("Dhaka")
        .build()
        .await?;
    DonationRequestFactory::new(db, &requester.email)
        .district("Chattogram")
        .build()
        .await?;

    let filter = DonationRequestFilter {
        district: Some("dhak".to_string()),
        ..Default::default()
    };

    let repo = DonationRequestRepository::new(db);
    let (requests, total) = repo
        .get_filtered_paginated(filter, PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(requests[0].id, dhaka.id);

    Ok(())
}

/// Tests slicing the matching requests into pages.
///
/// Expected: Ok with two requests on page 1, one on page 2 and a total of three
#[tokio::test]
async fn slices_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    for minutes in [30, 20, 10] {
        DonationRequestFactory::new(db, &requester.email)
            .created_at(minutes_ago(minutes))
            .build()
            .await?;
    }

    let repo = DonationRequestRepository::new(db);
    let (first, total) = repo
        .get_filtered_paginated(
            DonationRequestFilter::pending(),
            PageRequest::new(Some(1), Some(2)),
        )
        .await?;
    let (second, _) = repo
        .get_filtered_paginated(
            DonationRequestFilter::pending(),
            PageRequest::new(Some(2), Some(2)),
        )
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first[1].created_at > second[0].created_at);

    Ok(())
}

/// Tests requesting a page far beyond the last one.
///
/// Expected: Ok with no requests and the total still counting every match
#[tokio::test]
async fn far_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    DonationRequestFactory::new(db, &requester.email).build().await?;

    let repo = DonationRequestRepository::new(db);
    let (requests, total) = repo
        .get_filtered_paginated(
            DonationRequestFilter::default(),
            PageRequest::from_query(Some("100000000000000000"), Some("100")),
        )
        .await?;

    assert_eq!(total, 1);
    assert!(requests.is_empty());

    Ok(())
}

/// Tests that wildcard characters in the district filter match literally.
///
/// Expected: Ok with `%` and `_` matching only districts that contain them
#[tokio::test]
async fn district_wildcards_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    DonationRequestFactory::new(db, &requester.email)
        .district("Dhaka")
        .build()
        .await?;
    let literal = DonationRequestFactory::new(db, &requester.email)
        .district("Ward_5%")
        .build()
        .await?;

    let repo = DonationRequestRepository::new(db);
    for (district, expected) in [("%", vec![literal.id]), ("Dha_a", vec![]), ("d_5", vec![literal.id])] {
        let filter = DonationRequestFilter {
            district: Some(district.to_string()),
            ..Default::default()
        };
        let (requests, total) = repo
            .get_filtered_paginated(filter, PageRequest::default())
            .await?;

        assert_eq!(total, expected.len() as u64, "district {:?}", district);
        assert_eq!(requests.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
    }

    Ok(())
}
