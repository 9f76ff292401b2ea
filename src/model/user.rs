use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. Role, status and creation time are always assigned by the server.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

/// Profile update payload. Only these fields can be changed by the profile owner.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRoleStatusDto {
    pub role: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserRoleDto {
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub pagination: PaginationDto,
}
