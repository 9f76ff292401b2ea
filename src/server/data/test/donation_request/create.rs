use super::*;

/// Tests creating a donation request.
///
/// Verifies that the request is stored as pending with no donor fields regardless of
/// the caller.
///
/// Expected: Ok with status "pending" and donor fields empty
#[tokio::test]
async fn creates_pending_request_without_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DonationRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonationRequestRepository::new(db);
    let request = repo
        .create(CreateDonationRequestParam {
            requester_email: "requester@example.com".to_string(),
            requester_name: "Requester".to_string(),
            recipient_name: "Karim".to_string(),
            hospital_name: "Dhaka Medical College".to_string(),
            full_address: "Bakshibazar, Dhaka".to_string(),
            blood_group: "AB-".to_string(),
            district: "Dhaka".to_string(),
            upazila: "Lalbagh".to_string(),
            donation_date: "2026-11-02".to_string(),
            donation_time: "10:30".to_string(),
            request_message: "Surgery scheduled".to_string(),
        })
        .await?;

    assert_eq!(request.status, "pending");
    assert_eq!(request.requester_email, "requester@example.com");
    assert_eq!(request.blood_group, "AB-");
    assert!(request.donor_name.is_none());
    assert!(request.donor_email.is_none());
    assert!(request.donated_at.is_none());

    Ok(())
}
