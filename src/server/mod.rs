//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, scoping and orchestration of repositories
//! - **Data Layer** (`data/`) - Database operations on entity models
//! - **Model Layer** (`model/`) - Domain models, params and caller scope
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, file store)
//! - **Startup** (`startup`) - Tracing, database, session and CORS initialization
//! - **Router** (`router`) - Route registration and API documentation
//! - **Util** (`util/`) - Request body extraction
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and dispatches it to a controller
//! 2. **Controller** resolves the caller's `Scope` through `AuthGuard`
//! 3. **Controller** converts the DTO into params and calls a service
//! 4. **Service** validates, applies the scope and calls repositories
//! 5. **Controller** converts the returned domain model into a DTO response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
