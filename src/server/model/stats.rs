use crate::model::stats::DashboardStatsDto;

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_donors: u64,
    pub total_requests: u64,
    pub pending_requests: u64,
    pub inprogress_requests: u64,
    pub done_requests: u64,
    pub canceled_requests: u64,
    pub total_funding: i64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_users: self.total_users,
            total_donors: self.total_donors,
            total_requests: self.total_requests,
            pending_requests: self.pending_requests,
            inprogress_requests: self.inprogress_requests,
            done_requests: self.done_requests,
            canceled_requests: self.canceled_requests,
            total_funding: self.total_funding,
        }
    }
}
