use crate::{
    model::applicant::{ApplicantStage, Year},
    server::{
        data::applicant::ApplicantRepository,
        model::{
            applicant::{ApplicantFilter, ApplicantOrdering, ApplicantParams},
            scope::Visibility,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod set_stage;
