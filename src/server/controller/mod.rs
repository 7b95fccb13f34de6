//! HTTP handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs into params, call a
//! service and convert the resulting domain model back into a DTO.

pub mod answer;
pub mod applicant;
pub mod auth;
pub mod club;
pub mod form;
pub mod question;
pub mod submission;
pub mod user;

#[cfg(test)]
mod test;
