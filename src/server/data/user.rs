//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles idempotent registration, profile and admin updates, the paginated admin
//! listing and the public donor search. Records are keyed by normalized email for every
//! lookup made on behalf of an authenticated caller.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    user::{DonorSearchParam, RegisterUserParam, UpdateProfileParam, UserRole, UserStatus},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user unless one with the same email already exists.
    ///
    /// Issues a single insert that does nothing on an email conflict, then reads the
    /// record back. Concurrent registrations for the same email therefore produce one
    /// row. New users always start as active donors.
    ///
    /// # Arguments
    /// - `param` - Registration parameters with a normalized email
    ///
    /// # Returns
    /// - `Ok((user, true))` - The user was created by this call
    /// - `Ok((user, false))` - A user with this email already existed and is unchanged
    /// - `Err(DbErr)` - Database error during insert or lookup
    pub async fn register(
        &self,
        param: RegisterUserParam,
    ) -> Result<(entity::user::Model, bool), DbErr> {
        let email = param.email.clone();

        let inserted = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(UserRole::default().as_str().to_string()),
            status: ActiveValue::Set(UserStatus::default().as_str().to_string()),
            blood_group: ActiveValue::Set(param.blood_group),
            district: ActiveValue::Set(param.district),
            upazila: ActiveValue::Set(param.upazila),
            photo_url: ActiveValue::Set(param.photo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;
        let inserted = match inserted {
            Ok(rows) => rows,
            Err(DbErr::RecordNotInserted) => 0,
            Err(err) => return Err(err),
        };

        let user = self.find_by_email(&email).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("User {} not found after registration", email))
        })?;

        Ok((user, inserted == 1))
    }

    /// Finds a user by normalized email.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Updates the profile fields present in `param` for the user with `email`.
    ///
    /// Email, role, status and creation time are never touched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user after the update
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during update or lookup
    pub async fn update_profile(
        &self,
        email: &str,
        param: UpdateProfileParam,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let mut update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email));

        if let Some(name) = param.name {
            update = update.col_expr(entity::user::Column::Name, Expr::value(name));
        }
        if let Some(blood_group) = param.blood_group {
            update = update.col_expr(entity::user::Column::BloodGroup, Expr::value(blood_group));
        }
        if let Some(district) = param.district {
            update = update.col_expr(entity::user::Column::District, Expr::value(district));
        }
        if let Some(upazila) = param.upazila {
            update = update.col_expr(entity::user::Column::Upazila, Expr::value(upazila));
        }
        if let Some(photo_url) = param.photo_url {
            update = update.col_expr(entity::user::Column::PhotoUrl, Expr::value(photo_url));
        }

        update.exec(self.db).await?;

        self.find_by_email(email).await
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User exists and now has `role`
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Role, Expr::value(role.as_str()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the account status of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User exists and now has `status`
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Status, Expr::value(status.as_str()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets users with pagination, newest registrations first.
    ///
    /// # Arguments
    /// - `status` - Optional account status filter
    /// - `page` - Normalized 1-based page selection
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        status: Option<UserStatus>,
        page: PageRequest,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(status) = status {
            query = query.filter(entity::user::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page.page - 1).await?;

        Ok((users, total))
    }

    /// Finds active donors matching every filter present in `param`.
    ///
    /// Admins and blocked accounts are never returned. Results are ordered by name.
    pub async fn search_donors(
        &self,
        param: DonorSearchParam,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::user::Column::Role.eq(UserRole::Donor.as_str()))
            .add(entity::user::Column::Status.eq(UserStatus::Active.as_str()));

        if let Some(blood_group) = param.blood_group {
            condition = condition.add(entity::user::Column::BloodGroup.eq(blood_group));
        }
        if let Some(district) = param.district {
            condition = condition.add(entity::user::Column::District.eq(district));
        }
        if let Some(upazila) = param.upazila {
            condition = condition.add(entity::user::Column::Upazila.eq(upazila));
        }

        entity::prelude::User::find()
            .filter(condition)
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts all registered users.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Counts users holding `role`.
    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }
}
