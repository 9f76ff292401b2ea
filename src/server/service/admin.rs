//! Admin dashboard statistics.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        donation_request::DonationRequestRepository, funding::FundingRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{donation_request::DonationStatus, stats::DashboardStats, user::UserRole},
    util::parse::parse_stored,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects user, request and funding totals for the dashboard.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - Current totals
    /// - `Err(AppError::InternalErr)` - A stored request status is unrecognised
    /// - `Err(AppError::DbErr)` - Database error during any count
    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let request_repo = DonationRequestRepository::new(self.db);
        let funding_repo = FundingRepository::new(self.db);

        let mut stats = DashboardStats {
            total_users: user_repo.count_all().await?,
            total_donors: user_repo.count_by_role(UserRole::Donor).await?,
            total_requests: request_repo.count_all().await?,
            total_funding: funding_repo.total_amount().await?,
            ..Default::default()
        };

        for (status, count) in request_repo.count_by_status().await? {
            let count = count.max(0) as u64;
            match parse_stored::<DonationStatus>("donation status", status)? {
                DonationStatus::Pending => stats.pending_requests = count,
                DonationStatus::InProgress => stats.inprogress_requests = count,
                DonationStatus::Done => stats.done_requests = count,
                DonationStatus::Canceled => stats.canceled_requests = count,
            }
        }

        Ok(stats)
    }
}
