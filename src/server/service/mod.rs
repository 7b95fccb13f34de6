//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! are responsible for:
//!
//! - **Validation**: Checking params, references and uniqueness before anything is written
//! - **Scoping**: Applying the caller's `Scope` to reads and mutations
//! - **Orchestration**: Coordinating repositories, file storage and explicit side effects
//! - **Domain Models**: Converting entity models into domain models for controllers

pub mod answer;
pub mod applicant;
pub mod club;
pub mod form;
pub mod question;
pub mod storage;
pub mod submission;
pub mod user;

#[cfg(test)]
mod test;
