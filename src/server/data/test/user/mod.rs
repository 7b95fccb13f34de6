use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_club_id;
mod upsert_profile;
