use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FundingDto {
    pub id: i32,
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Funding payload. Donor fields are only read when the caller is anonymous.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundingDto {
    pub amount: i64,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FundingSummaryDto {
    pub fundings: Vec<FundingDto>,
    pub total_amount: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePaymentIntentDto {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}
