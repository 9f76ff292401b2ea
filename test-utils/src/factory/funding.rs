//! Funding factory for creating test funding entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating funding records with customizable fields.
pub struct FundingFactory<'a> {
    db: &'a DatabaseConnection,
    amount: i64,
    donor_name: String,
    donor_email: String,
    transaction_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> FundingFactory<'a> {
    /// Creates a new factory for a funding of `amount` whole units.
    pub fn new(db: &'a DatabaseConnection, amount: i64) -> Self {
        let id = next_id();
        Self {
            db,
            amount,
            donor_name: format!("Funder {}", id),
            donor_email: format!("funder{}@example.com", id),
            transaction_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn donor_email(mut self, email: impl Into<String>) -> Self {
        self.donor_email = email.into();
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the funding record into the database.
    pub async fn build(self) -> Result<entity::funding::Model, DbErr> {
        entity::funding::ActiveModel {
            amount: ActiveValue::Set(self.amount),
            donor_name: ActiveValue::Set(self.donor_name),
            donor_email: ActiveValue::Set(self.donor_email),
            transaction_id: ActiveValue::Set(self.transaction_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a funding record with default donor values.
pub async fn create_funding(
    db: &DatabaseConnection,
    amount: i64,
) -> Result<entity::funding::Model, DbErr> {
    FundingFactory::new(db, amount).build().await
}
