use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequestDto {
    pub id: i32,
    pub requester_email: String,
    pub requester_name: String,
    pub recipient_name: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: String,
    pub district: String,
    pub upazila: String,
    pub donation_date: String,
    pub donation_time: String,
    pub request_message: String,
    pub status: String,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub donated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload.
///
/// Requester identity, status and donor fields are not part of this type; any such keys
/// in the JSON body are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequestDto {
    pub recipient_name: String,
    pub hospital_name: String,
    pub full_address: String,
    pub blood_group: String,
    pub district: String,
    pub upazila: String,
    pub donation_date: String,
    pub donation_time: String,
    #[serde(default)]
    pub request_message: String,
}

/// Edit payload for a pending request. Keys outside this allow-list are dropped.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonationRequestDto {
    pub recipient_name: Option<String>,
    pub hospital_name: Option<String>,
    pub full_address: Option<String>,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub donation_date: Option<String>,
    pub donation_time: Option<String>,
    pub request_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDonationStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDonationRequestsDto {
    pub requests: Vec<DonationRequestDto>,
    pub pagination: PaginationDto,
}
