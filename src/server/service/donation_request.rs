//! Donation request lifecycle service.
//!
//! Orchestrates creation, listing and every status change of a donation request. Each
//! mutation first reads the request to report precise errors (missing, not owned,
//! invalid transition) and then performs a conditional write in the repository. A write
//! that matches nothing means another request changed the record in between and is
//! reported as "not found or already taken".

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::donation_request::DonationRequestRepository,
    error::AppError,
    model::{
        donation_request::{
            ClaimDonationParam, CloseDonationParam, CreateDonationRequestParam, DonationRequest,
            DonationRequestFilter, DonationStatus, MyRequestsParam, PaginatedDonationRequests,
            UpdateDonationRequestParam,
        },
        pagination::{PageRequest, Pagination},
        user::User,
    },
};

pub const NOT_FOUND: &str = "Donation request not found";
pub const NOT_FOUND_OR_TAKEN: &str = "Donation request not found or already taken";

pub struct DonationRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending request.
    pub async fn create(
        &self,
        param: CreateDonationRequestParam,
    ) -> Result<DonationRequest, AppError> {
        let repo = DonationRequestRepository::new(self.db);

        let request = DonationRequest::from_entity(repo.create(param).await?)?;
        tracing::info!(
            "Donation request {} created by {}",
            request.id,
            request.requester_email
        );

        Ok(request)
    }

    /// Retrieves a request by id.
    ///
    /// # Returns
    /// - `Ok(DonationRequest)` - The request
    /// - `Err(AppError::NotFound)` - No request with that id
    pub async fn get_by_id(&self, id: i32) -> Result<DonationRequest, AppError> {
        let repo = DonationRequestRepository::new(self.db);

        let entity = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        DonationRequest::from_entity(entity)
    }

    /// Retrieves one page of requests matching `filter`, newest first.
    pub async fn get_filtered(
        &self,
        filter: DonationRequestFilter,
        page: PageRequest,
    ) -> Result<PaginatedDonationRequests, AppError> {
        let repo = DonationRequestRepository::new(self.db);

        let (entities, total) = repo.get_filtered_paginated(filter, page).await?;
        let requests = entities
            .into_iter()
            .map(DonationRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedDonationRequests {
            requests,
            pagination: Pagination::new(page, total),
        })
    }

    /// Retrieves the caller's own requests, newest first.
    pub async fn get_mine(&self, param: MyRequestsParam) -> Result<Vec<DonationRequest>, AppError> {
        let repo = DonationRequestRepository::new(self.db);

        repo.get_by_requester(&param.requester_email, param.status, param.limit)
            .await?
            .into_iter()
            .map(DonationRequest::from_entity)
            .collect()
    }

    /// Applies descriptive edits to a pending request owned by `requester_email`.
    ///
    /// # Returns
    /// - `Ok(DonationRequest)` - The edited request
    /// - `Err(AppError::BadRequest)` - No editable field supplied, or the request has left
    ///   `pending`
    /// - `Err(AppError::Forbidden)` - The caller does not own the request
    /// - `Err(AppError::NotFound)` - Missing, or changed concurrently
    pub async fn update(
        &self,
        id: i32,
        requester_email: &str,
        param: UpdateDonationRequestParam,
    ) -> Result<DonationRequest, AppError> {
        if param.is_empty() {
            return Err(AppError::BadRequest(
                "No editable fields supplied".to_string(),
            ));
        }

        let current = self.get_by_id(id).await?;
        if !current.is_owned_by(requester_email) {
            return Err(AppError::Forbidden(
                "Only the requester can edit this donation request".to_string(),
            ));
        }
        if current.status != DonationStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending donation requests can be edited".to_string(),
            ));
        }

        let repo = DonationRequestRepository::new(self.db);
        if !repo.update_pending(id, requester_email, param).await? {
            return Err(AppError::NotFound(NOT_FOUND_OR_TAKEN.to_string()));
        }

        self.get_by_id(id).await
    }

    /// Deletes a request on behalf of `caller`.
    ///
    /// Admins may delete any request. Other callers may only delete their own pending
    /// requests.
    ///
    /// # Returns
    /// - `Ok(())` - The request was deleted
    /// - `Err(AppError::Forbidden)` - Caller is neither admin nor the owner of a pending request
    /// - `Err(AppError::NotFound)` - Missing, or changed concurrently
    pub async fn delete(&self, id: i32, caller: &User) -> Result<(), AppError> {
        let current = self.get_by_id(id).await?;
        let repo = DonationRequestRepository::new(self.db);

        let deleted = if caller.is_admin() {
            repo.delete(id).await?
        } else if current.is_owned_by(&caller.email) && current.status == DonationStatus::Pending
        {
            repo.delete_pending_owned(id, &caller.email).await?
        } else {
            return Err(AppError::Forbidden(
                "You can only delete your own pending donation requests".to_string(),
            ));
        };

        if !deleted {
            return Err(AppError::NotFound(NOT_FOUND_OR_TAKEN.to_string()));
        }
        tracing::info!("Donation request {} deleted by {}", id, caller.email);

        Ok(())
    }

    /// Claims a pending request for the donor in `param`.
    ///
    /// # Returns
    /// - `Ok(DonationRequest)` - The request, now `inprogress` with the donor recorded
    /// - `Err(AppError::BadRequest)` - The donor is the requester
    /// - `Err(AppError::NotFound)` - Missing, or no longer pending
    pub async fn claim(&self, param: ClaimDonationParam) -> Result<DonationRequest, AppError> {
        let id = param.id;
        let current = self.get_by_id(id).await?;
        if current.is_owned_by(&param.donor_email) {
            return Err(AppError::BadRequest(
                "You cannot donate to your own request".to_string(),
            ));
        }

        let repo = DonationRequestRepository::new(self.db);
        let donor_email = param.donor_email.clone();
        if !repo.claim(param, Utc::now()).await? {
            return Err(AppError::NotFound(NOT_FOUND_OR_TAKEN.to_string()));
        }
        tracing::info!("Donation request {} claimed by {}", id, donor_email);

        self.get_by_id(id).await
    }

    /// Moves a request owned by the caller to `done` or `canceled`.
    ///
    /// # Returns
    /// - `Ok(DonationRequest)` - The request in its final status
    /// - `Err(AppError::Forbidden)` - The caller does not own the request
    /// - `Err(AppError::BadRequest)` - The transition is not allowed from the current status
    /// - `Err(AppError::NotFound)` - Missing, or changed concurrently
    pub async fn close(&self, param: CloseDonationParam) -> Result<DonationRequest, AppError> {
        let current = self.get_by_id(param.id).await?;
        if !current.is_owned_by(&param.requester_email) {
            return Err(AppError::Forbidden(
                "Only the requester can update the status of this donation request".to_string(),
            ));
        }
        if !current.status.can_transition_to(param.target) {
            return Err(AppError::BadRequest(format!(
                "Cannot change status from '{}' to '{}'",
                current.status, param.target
            )));
        }

        let repo = DonationRequestRepository::new(self.db);
        if !repo.close(&param).await? {
            return Err(AppError::NotFound(NOT_FOUND_OR_TAKEN.to_string()));
        }
        tracing::info!(
            "Donation request {} moved from {} to {}",
            param.id,
            current.status,
            param.target
        );

        self.get_by_id(param.id).await
    }
}
