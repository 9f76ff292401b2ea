//! Funding recorder service.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::funding::FundingRepository,
    error::AppError,
    model::funding::{CreateFundingParam, Funding, FundingSummary},
};

pub struct FundingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FundingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a funding. Payment completion is not verified here.
    pub async fn create(&self, param: CreateFundingParam) -> Result<Funding, AppError> {
        let repo = FundingRepository::new(self.db);

        let funding = Funding::from_entity(repo.create(param).await?);
        tracing::info!(
            "Recorded funding {} of {} from {}",
            funding.id,
            funding.amount,
            funding.donor_email
        );

        Ok(funding)
    }

    /// Retrieves every funding, newest first, together with the total of their amounts.
    ///
    /// The total is computed from the listed rows, so it always matches the list even
    /// when another funding is recorded concurrently.
    pub async fn get_summary(&self) -> Result<FundingSummary, AppError> {
        let repo = FundingRepository::new(self.db);

        let fundings = repo
            .get_all()
            .await?
            .into_iter()
            .map(Funding::from_entity)
            .collect();

        Ok(FundingSummary::from_fundings(fundings)?)
    }
}
