//! Donation request data repository.
//!
//! Every status change is a single conditional `UPDATE` whose filter includes the
//! expected current status. The number of affected rows tells the caller whether the
//! precondition held at write time, so two concurrent claims on the same request can
//! never both succeed.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::{
    donation_request::{
        ClaimDonationParam, CloseDonationParam, CreateDonationRequestParam, DonationRequestFilter,
        DonationStatus, UpdateDonationRequestParam,
    },
    pagination::PageRequest,
};

use entity::donation_request::Column;

pub struct DonationRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonationRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request in the `pending` state with no donor assigned.
    pub async fn create(
        &self,
        param: CreateDonationRequestParam,
    ) -> Result<entity::donation_request::Model, DbErr> {
        entity::donation_request::ActiveModel {
            requester_email: ActiveValue::Set(param.requester_email),
            requester_name: ActiveValue::Set(param.requester_name),
            recipient_name: ActiveValue::Set(param.recipient_name),
            hospital_name: ActiveValue::Set(param.hospital_name),
            full_address: ActiveValue::Set(param.full_address),
            blood_group: ActiveValue::Set(param.blood_group),
            district: ActiveValue::Set(param.district),
            upazila: ActiveValue::Set(param.upazila),
            donation_date: ActiveValue::Set(param.donation_date),
            donation_time: ActiveValue::Set(param.donation_time),
            request_message: ActiveValue::Set(param.request_message),
            status: ActiveValue::Set(DonationStatus::Pending.as_str().to_string()),
            donor_name: ActiveValue::Set(None),
            donor_email: ActiveValue::Set(None),
            donated_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::donation_request::Model>, DbErr> {
        entity::prelude::DonationRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets one page of requests matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((requests, total))` - Requests for the page and the total matching count
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_filtered_paginated(
        &self,
        filter: DonationRequestFilter,
        page: PageRequest,
    ) -> Result<(Vec<entity::donation_request::Model>, u64), DbErr> {
        let query = newest_first(
            entity::prelude::DonationRequest::find().filter(filter_condition(filter)),
        );

        let total = query.clone().count(self.db).await?;
        let requests = query
            .offset(page.skip())
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok((requests, total))
    }

    /// Gets the requests created by `requester_email`, newest first.
    ///
    /// # Arguments
    /// - `requester_email` - Owner of the requests
    /// - `status` - Optional status filter
    /// - `limit` - Optional cap on the number of requests returned
    pub async fn get_by_requester(
        &self,
        requester_email: &str,
        status: Option<DonationStatus>,
        limit: Option<u64>,
    ) -> Result<Vec<entity::donation_request::Model>, DbErr> {
        let filter = DonationRequestFilter {
            status,
            requester_email: Some(requester_email.to_string()),
            ..Default::default()
        };

        newest_first(entity::prelude::DonationRequest::find().filter(filter_condition(filter)))
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Applies descriptive edits to a pending request owned by `requester_email`.
    ///
    /// # Returns
    /// - `Ok(true)` - The request matched and was updated
    /// - `Ok(false)` - No pending request with that id is owned by the requester
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_pending(
        &self,
        id: i32,
        requester_email: &str,
        param: UpdateDonationRequestParam,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::DonationRequest::update_many().filter(
            Condition::all()
                .add(Column::Id.eq(id))
                .add(Column::RequesterEmail.eq(requester_email))
                .add(Column::Status.eq(DonationStatus::Pending.as_str())),
        );

        let fields = [
            (Column::RecipientName, param.recipient_name),
            (Column::HospitalName, param.hospital_name),
            (Column::FullAddress, param.full_address),
            (Column::BloodGroup, param.blood_group),
            (Column::District, param.district),
            (Column::Upazila, param.upazila),
            (Column::DonationDate, param.donation_date),
            (Column::DonationTime, param.donation_time),
            (Column::RequestMessage, param.request_message),
        ];
        for (column, value) in fields {
            if let Some(value) = value {
                update = update.col_expr(column, Expr::value(value));
            }
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a request from `pending` to `inprogress` and records the donor.
    ///
    /// Status and donor fields are written by one statement that only matches while
    /// the request is still pending.
    ///
    /// # Returns
    /// - `Ok(true)` - This call claimed the request
    /// - `Ok(false)` - The request does not exist or was no longer pending
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim(
        &self,
        param: ClaimDonationParam,
        donated_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::DonationRequest::update_many()
            .col_expr(
                Column::Status,
                Expr::value(DonationStatus::InProgress.as_str()),
            )
            .col_expr(Column::DonorName, Expr::value(param.donor_name))
            .col_expr(Column::DonorEmail, Expr::value(param.donor_email))
            .col_expr(Column::DonatedAt, Expr::value(donated_at))
            .filter(
                Condition::all()
                    .add(Column::Id.eq(param.id))
                    .add(Column::Status.eq(DonationStatus::Pending.as_str())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a request owned by the requester into a final status.
    ///
    /// Only matches while the current status is one from which the target is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` - The request was closed
    /// - `Ok(false)` - No matching request in a status that permits the transition
    /// - `Err(DbErr)` - Database error during update
    pub async fn close(&self, param: &CloseDonationParam) -> Result<bool, DbErr> {
        let sources: Vec<&'static str> = DonationStatus::sources_for(param.target)
            .into_iter()
            .map(DonationStatus::as_str)
            .collect();

        let result = entity::prelude::DonationRequest::update_many()
            .col_expr(Column::Status, Expr::value(param.target.as_str()))
            .filter(
                Condition::all()
                    .add(Column::Id.eq(param.id))
                    .add(Column::RequesterEmail.eq(param.requester_email.as_str()))
                    .add(Column::Status.is_in(sources)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a request only if it is pending and owned by `requester_email`.
    pub async fn delete_pending_owned(&self, id: i32, requester_email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DonationRequest::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(id))
                    .add(Column::RequesterEmail.eq(requester_email))
                    .add(Column::Status.eq(DonationStatus::Pending.as_str())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a request regardless of owner or status.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DonationRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::DonationRequest::find()
            .count(self.db)
            .await
    }

    /// Counts requests grouped by stored status string.
    pub async fn count_by_status(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::DonationRequest::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}

/// Builds the conjunctive condition for a listing filter.
///
/// SQLite `LIKE` is case-insensitive for ASCII, which gives the district its
/// case-insensitive substring match. Wildcards in the district are matched literally.
fn filter_condition(filter: DonationRequestFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = filter.status {
        condition = condition.add(Column::Status.eq(status.as_str()));
    }
    if let Some(blood_group) = filter.blood_group {
        condition = condition.add(Column::BloodGroup.eq(blood_group));
    }
    if let Some(district) = filter.district {
        condition = condition.add(Column::District.like(substring_pattern(&district)));
    }
    if let Some(requester_email) = filter.requester_email {
        condition = condition.add(Column::RequesterEmail.eq(requester_email));
    }

    condition
}

/// Wraps `value` in `%` after escaping the `LIKE` metacharacters it contains.
fn substring_pattern(value: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn newest_first(
    query: Select<entity::prelude::DonationRequest>,
) -> Select<entity::prelude::DonationRequest> {
    query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}
