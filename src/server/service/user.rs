//! User service for business logic.
//!
//! This module provides the `UserService` for registration, profile management, the
//! admin user directory and the public donor search. It works with domain models and
//! converts repository entities at the boundary.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Pagination,
        user::{
            DonorSearchParam, GetUsersParam, PaginatedUsers, RegisterUserParam, Registration,
            UpdateProfileParam, User, UserRole, UserRoleStatus, UserStatus,
        },
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user, or returns the existing user with the same email.
    ///
    /// # Returns
    /// - `Ok(Registration)` - The user and whether this call created it
    /// - `Err(AppError::DbErr)` - Database error during insert or lookup
    pub async fn register(&self, param: RegisterUserParam) -> Result<Registration, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (entity, created) = user_repo.register(param).await?;
        let user = User::from_entity(entity)?;

        if created {
            tracing::info!("Registered user {}", user.email);
        }

        Ok(Registration { user, created })
    }

    /// Retrieves a user by normalized email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Retrieves the caller's own profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The profile
    /// - `Err(AppError::NotFound)` - The caller never registered
    pub async fn get_profile(&self, email: &str) -> Result<User, AppError> {
        self.get_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Looks up the role and status for `email`.
    ///
    /// Unregistered emails report the defaults a new registration would receive.
    pub async fn get_role_status(&self, email: &str) -> Result<UserRoleStatus, AppError> {
        let role_status = match self.get_by_email(email).await? {
            Some(user) => UserRoleStatus {
                role: user.role,
                status: user.status,
            },
            None => UserRoleStatus::default(),
        };

        Ok(role_status)
    }

    /// Updates the caller's own profile fields.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::BadRequest)` - No editable field was supplied
    /// - `Err(AppError::NotFound)` - The caller never registered
    pub async fn update_profile(
        &self,
        email: &str,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        if param.is_empty() {
            return Err(AppError::BadRequest(
                "No editable profile fields supplied".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let entity = user_repo
            .update_profile(email, param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(entity)
    }

    /// Retrieves users with pagination, newest first.
    pub async fn get_paginated(&self, param: GetUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (entities, total) = user_repo.get_paginated(param.status, param.page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            pagination: Pagination::new(param.page, total),
        })
    }

    /// Changes the role of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_role(id, role).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        tracing::info!("Set role of user {} to {}", id, role);

        self.reload(id).await
    }

    /// Changes the account status of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new status
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_status(&self, id: i32, status: UserStatus) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_status(id, status).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        tracing::info!("Set status of user {} to {}", id, status);

        self.reload(id).await
    }

    /// Finds active donors matching the search filters.
    pub async fn search_donors(&self, param: DonorSearchParam) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .search_donors(param)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    async fn reload(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let entity = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(entity)
    }
}
