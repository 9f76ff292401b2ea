use crate::server::{data::funding::FundingRepository, model::funding::CreateFundingParam};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, funding::FundingFactory, helpers::minutes_ago},
};

mod create;
mod total_amount;
