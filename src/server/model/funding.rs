//! Funding domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::funding::{CreateFundingDto, FundingDto, FundingSummaryDto, PaymentIntentDto},
    server::{
        error::{internal::InternalError, AppError},
        model::identity::Identity,
        util::{
            normalize::{is_plausible_email, normalize_email},
            parse::non_blank,
        },
    },
};

/// Name recorded for anonymous contributions that do not give one.
const ANONYMOUS_DONOR: &str = "Anonymous";

/// A recorded monetary contribution. Fundings are never updated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Funding {
    pub id: i32,
    /// Whole currency units.
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    /// External payment reference, if the client supplied one.
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Funding {
    pub fn from_entity(entity: entity::funding::Model) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            donor_name: entity.donor_name,
            donor_email: entity.donor_email,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FundingDto {
        FundingDto {
            id: self.id,
            amount: self.amount,
            donor_name: self.donor_name,
            donor_email: self.donor_email,
            transaction_id: self.transaction_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a funding.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFundingParam {
    pub amount: i64,
    pub donor_name: String,
    pub donor_email: String,
    pub transaction_id: Option<String>,
}

impl CreateFundingParam {
    /// Builds funding parameters, taking the donor from `identity` when the caller is
    /// authenticated and from the request body otherwise.
    ///
    /// # Returns
    /// - `Ok(CreateFundingParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Amount is not positive, or an anonymous caller
    ///   gave no valid email
    pub fn from_dto(identity: Option<&Identity>, dto: CreateFundingDto) -> Result<Self, AppError> {
        if dto.amount <= 0 {
            return Err(AppError::BadRequest(
                "Amount must be a positive whole number".to_string(),
            ));
        }

        let donor_name = non_blank(dto.donor_name);
        let (donor_name, donor_email) = match identity {
            Some(identity) => (
                identity.name.clone().or(donor_name).unwrap_or_else(|| identity.email.clone()),
                identity.email.clone(),
            ),
            None => {
                let email = non_blank(dto.donor_email)
                    .map(|e| normalize_email(&e))
                    .filter(|e| is_plausible_email(e))
                    .ok_or_else(|| AppError::BadRequest("donorEmail is required".to_string()))?;

                (donor_name.unwrap_or_else(|| ANONYMOUS_DONOR.to_string()), email)
            }
        };

        Ok(Self {
            amount: dto.amount,
            donor_name,
            donor_email,
            transaction_id: non_blank(dto.transaction_id),
        })
    }
}

/// All fundings, newest first, with the sum of their amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingSummary {
    pub fundings: Vec<Funding>,
    pub total_amount: i64,
}

impl FundingSummary {
    /// Builds the summary, totalling the amounts of exactly the fundings it lists.
    pub fn from_fundings(fundings: Vec<Funding>) -> Result<Self, InternalError> {
        let total_amount = fundings
            .iter()
            .try_fold(0i64, |total, funding| total.checked_add(funding.amount))
            .ok_or(InternalError::FundingTotalOverflow)?;

        Ok(Self {
            fundings,
            total_amount,
        })
    }

    pub fn into_dto(self) -> FundingSummaryDto {
        FundingSummaryDto {
            fundings: self.fundings.into_iter().map(Funding::into_dto).collect(),
            total_amount: self.total_amount,
        }
    }
}

/// Payment intent created by the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    /// Secret the client uses to confirm the payment.
    pub client_secret: String,
}

impl PaymentIntent {
    pub fn into_dto(self) -> PaymentIntentDto {
        PaymentIntentDto {
            client_secret: self.client_secret,
        }
    }
}
