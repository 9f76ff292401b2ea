use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_users: u64,
    pub total_donors: u64,
    pub total_requests: u64,
    pub pending_requests: u64,
    pub inprogress_requests: u64,
    pub done_requests: u64,
    pub canceled_requests: u64,
    pub total_funding: i64,
}
