use crate::server::{
    data::club::ClubRepository,
    model::{club::ClubParams, scope::Visibility},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod update;
