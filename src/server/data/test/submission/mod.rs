use crate::{model::submission::SubmissionStatus, server::data::submission::SubmissionRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_applicant_id;
mod get_by_applicant_ids;
