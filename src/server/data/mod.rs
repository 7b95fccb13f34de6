//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories take parameter models, use SeaORM entity models
//! internally and return entity models for the service layer to convert.

pub mod answer;
pub mod applicant;
pub mod club;
pub mod form;
pub mod question;
pub mod submission;
pub mod user;

#[cfg(test)]
mod test;
