//! User domain models and parameters.
//!
//! Provides the domain model for registered users together with the role and account
//! status enumerations used by the authorization guard. Includes parameter types for
//! registration, profile updates, donor search and the admin user listing.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        PaginatedUsersDto, RegisterUserDto, UpdateProfileDto, UserDto, UserRoleStatusDto,
    },
    server::{
        error::AppError,
        model::{
            pagination::{PageRequest, Pagination},
            UnknownVariant,
        },
        util::{
            normalize::{is_plausible_email, normalize_blood_group, normalize_email},
            parse::{non_blank, parse_stored},
        },
    },
};

/// Role assigned to a user. New users are always donors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Donor,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Donor => "donor",
            UserRole::Admin => "admin",
        }
    }
}

impl FromStr for UserRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "donor" => Ok(UserRole::Donor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Blocked users keep read access but cannot create or claim requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl FromStr for UserStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "blocked" => Ok(UserStatus::Blocked),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user with profile fields, role and account status.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Normalized email, unique across users.
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub photo_url: Option<String>,
    /// Registration time. Never changes after creation.
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.to_string(),
            status: self.status.to_string(),
            blood_group: self.blood_group,
            district: self.district,
            upazila: self.upazila,
            photo_url: self.photo_url,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored role or status is not
    ///   a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_stored::<UserRole>("user role", entity.role)?;
        let status = parse_stored::<UserStatus>("user status", entity.status)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            status,
            blood_group: entity.blood_group,
            district: entity.district,
            upazila: entity.upazila,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
        })
    }
}

/// Role and status pair returned by the public role lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserRoleStatus {
    pub role: UserRole,
    pub status: UserStatus,
}

impl UserRoleStatus {
    pub fn into_dto(self) -> UserRoleStatusDto {
        UserRoleStatusDto {
            role: self.role.to_string(),
            status: self.status.to_string(),
        }
    }
}

/// Parameters for registering a user.
///
/// Role, status and creation time are not part of the parameters; the repository
/// always assigns the defaults.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub name: String,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub photo_url: Option<String>,
}

impl RegisterUserParam {
    /// Builds registration parameters from a request body.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Normalized parameters
    /// - `Err(AppError::BadRequest)` - Email is missing or malformed
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let email = normalize_email(&dto.email);
        if !is_plausible_email(&email) {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }

        Ok(Self {
            email,
            name: dto.name.trim().to_string(),
            blood_group: non_blank(dto.blood_group).map(|g| normalize_blood_group(&g)),
            district: non_blank(dto.district),
            upazila: non_blank(dto.upazila),
            photo_url: non_blank(dto.photo_url),
        })
    }
}

/// Outcome of an idempotent registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user: User,
    /// Whether this call inserted the record.
    pub created: bool,
}

/// Profile fields a user may change on their own record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParam {
    pub name: Option<String>,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub photo_url: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: non_blank(dto.name),
            blood_group: non_blank(dto.blood_group).map(|g| normalize_blood_group(&g)),
            district: non_blank(dto.district),
            upazila: non_blank(dto.upazila),
            photo_url: non_blank(dto.photo_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Optional equality filters for the public donor search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorSearchParam {
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
}

impl DonorSearchParam {
    pub fn new(
        blood_group: Option<String>,
        district: Option<String>,
        upazila: Option<String>,
    ) -> Self {
        Self {
            blood_group: blood_group
                .map(|g| normalize_blood_group(&g))
                .filter(|g| !g.is_empty()),
            district: non_blank(district),
            upazila: non_blank(upazila),
        }
    }
}

/// Parameters for the admin user listing.
#[derive(Debug, Clone, Default)]
pub struct GetUsersParam {
    pub status: Option<UserStatus>,
    pub page: PageRequest,
}

/// Page of users with its pagination summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            pagination: self.pagination.into_dto(),
        }
    }
}
