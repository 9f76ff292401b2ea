use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageRequest,
        user::{DonorSearchParam, RegisterUserParam, UpdateProfileParam, UserRole, UserStatus},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::minutes_ago, user::UserFactory},
};

mod get_paginated;
mod register;
mod search_donors;
mod set_role_status;
mod update_profile;

fn register_param(email: &str) -> RegisterUserParam {
    RegisterUserParam {
        email: email.to_string(),
        name: "Rahim".to_string(),
        blood_group: Some("O+".to_string()),
        district: Some("Dhaka".to_string()),
        upazila: Some("Mirpur".to_string()),
        photo_url: None,
    }
}
