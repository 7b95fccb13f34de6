use crate::server::data::answer::{AnswerRecord, AnswerRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_submission_and_question;
