//! Donation request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating donation requests with customizable fields.
///
/// Requests default to `pending` with no donor. Setting a non-pending status does not
/// fill donor fields on its own; call `donor` for `inprogress`/`done` fixtures that
/// should look claimed.
pub struct DonationRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_email: String,
    requester_name: String,
    recipient_name: String,
    blood_group: String,
    district: String,
    upazila: String,
    status: String,
    donor: Option<(String, String)>,
    created_at: DateTime<Utc>,
}

impl<'a> DonationRequestFactory<'a> {
    /// Creates a new factory for a request owned by `requester_email`.
    ///
    /// Defaults:
    /// - recipient: `"Recipient {id}"`
    /// - blood group `"A+"`, district `"Dhaka"`, upazila `"Dhanmondi"`
    /// - status `"pending"`, created now
    pub fn new(db: &'a DatabaseConnection, requester_email: &str) -> Self {
        let id = next_id();
        Self {
            db,
            requester_email: requester_email.to_string(),
            requester_name: "Requester".to_string(),
            recipient_name: format!("Recipient {}", id),
            blood_group: "A+".to_string(),
            district: "Dhaka".to_string(),
            upazila: "Dhanmondi".to_string(),
            status: "pending".to_string(),
            donor: None,
            created_at: Utc::now(),
        }
    }

    pub fn requester_name(mut self, name: impl Into<String>) -> Self {
        self.requester_name = name.into();
        self
    }

    pub fn recipient_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = name.into();
        self
    }

    pub fn blood_group(mut self, blood_group: impl Into<String>) -> Self {
        self.blood_group = blood_group.into();
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn upazila(mut self, upazila: impl Into<String>) -> Self {
        self.upazila = upazila.into();
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the request as claimed by the given donor.
    pub fn donor(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.donor = Some((name.into(), email.into()));
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the donation request into the database.
    pub async fn build(self) -> Result<entity::donation_request::Model, DbErr> {
        let (donor_name, donor_email, donated_at) = match self.donor {
            Some((name, email)) => (Some(name), Some(email), Some(Utc::now())),
            None => (None, None, None),
        };

        entity::donation_request::ActiveModel {
            requester_email: ActiveValue::Set(self.requester_email),
            requester_name: ActiveValue::Set(self.requester_name),
            recipient_name: ActiveValue::Set(self.recipient_name),
            hospital_name: ActiveValue::Set("Dhaka Medical College Hospital".to_string()),
            full_address: ActiveValue::Set("Secretariat Road, Dhaka".to_string()),
            blood_group: ActiveValue::Set(self.blood_group),
            district: ActiveValue::Set(self.district),
            upazila: ActiveValue::Set(self.upazila),
            donation_date: ActiveValue::Set("2026-11-01".to_string()),
            donation_time: ActiveValue::Set("10:00".to_string()),
            request_message: ActiveValue::Set("Urgent need".to_string()),
            status: ActiveValue::Set(self.status),
            donor_name: ActiveValue::Set(donor_name),
            donor_email: ActiveValue::Set(donor_email),
            donated_at: ActiveValue::Set(donated_at),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending donation request with default values.
pub async fn create_donation_request(
    db: &DatabaseConnection,
    requester_email: &str,
) -> Result<entity::donation_request::Model, DbErr> {
    DonationRequestFactory::new(db, requester_email).build().await
}
