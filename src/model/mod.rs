//! Wire types shared by the HTTP surface.
//!
//! DTOs here are what clients send and receive. Write DTOs carry only client-writable
//! fields; anything else a client sends is dropped by serde before it reaches the server.

pub mod api;
pub mod applicant;
pub mod club;
pub mod form;
pub mod submission;
pub mod user;
