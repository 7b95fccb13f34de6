use crate::server::{
    data::form::ApplicationFormRepository,
    model::{
        form::{CreateApplicationFormParams, UpdateApplicationFormParams},
        scope::Visibility,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod touch;
