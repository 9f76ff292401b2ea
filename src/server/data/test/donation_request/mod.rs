use crate::server::{
    data::donation_request::DonationRequestRepository,
    model::{
        donation_request::{
            ClaimDonationParam, CloseDonationParam, CreateDonationRequestParam,
            DonationRequestFilter, DonationStatus, UpdateDonationRequestParam,
        },
        pagination::PageRequest,
    },
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, donation_request::DonationRequestFactory, helpers::create_request_with_participants,
        helpers::minutes_ago,
    },
};

mod claim;
mod close;
mod count_by_status;
mod create;
mod delete;
mod get_by_requester;
mod get_filtered_paginated;
mod update_pending;

fn claim_param(id: i32, donor: &entity::user::Model) -> ClaimDonationParam {
    ClaimDonationParam {
        id,
        donor_name: donor.name.clone(),
        donor_email: donor.email.clone(),
    }
}

fn close_param(id: i32, requester_email: &str, target: DonationStatus) -> CloseDonationParam {
    CloseDonationParam {
        id,
        requester_email: requester_email.to_string(),
        target,
    }
}
