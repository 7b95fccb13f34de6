//! Request-scoped authentication helpers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
