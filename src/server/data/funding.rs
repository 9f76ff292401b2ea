//! Funding data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, QuerySelect,
};

use crate::server::model::funding::CreateFundingParam;

pub struct FundingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FundingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a funding stamped with the current time.
    pub async fn create(&self, param: CreateFundingParam) -> Result<entity::funding::Model, DbErr> {
        entity::funding::ActiveModel {
            amount: ActiveValue::Set(param.amount),
            donor_name: ActiveValue::Set(param.donor_name),
            donor_email: ActiveValue::Set(param.donor_email),
            transaction_id: ActiveValue::Set(param.transaction_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every funding, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::funding::Model>, DbErr> {
        entity::prelude::Funding::find()
            .order_by_desc(entity::funding::Column::CreatedAt)
            .order_by_desc(entity::funding::Column::Id)
            .all(self.db)
            .await
    }

    /// Sums the amount of every funding in the database.
    ///
    /// # Returns
    /// - `Ok(i64)` - Sum of all amounts, 0 when there are no fundings
    /// - `Err(DbErr)` - Database error during aggregation
    pub async fn total_amount(&self) -> Result<i64, DbErr> {
        let total = entity::prelude::Funding::find()
            .select_only()
            .column_as(entity::funding::Column::Amount.sum(), "total")
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }
}
