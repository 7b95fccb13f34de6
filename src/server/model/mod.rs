//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated write
//! payloads from controllers into services.

pub mod applicant;
pub mod club;
pub mod form;
pub mod scope;
pub mod submission;
pub mod user;
