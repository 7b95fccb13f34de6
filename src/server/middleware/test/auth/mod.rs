use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::scope::Scope,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod require;
mod scope;
