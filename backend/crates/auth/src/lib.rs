//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Sign-up and log-in with user name + password
//! - Short-lived HMAC-signed access tokens
//! - Opaque refresh tokens backed by session rows, rotated on every use
//! - Bearer-token middleware for the other bounded contexts
//!
//! ## Security Model
//! - Passwords hashed with Argon2id at a fixed cost
//! - Refresh rotation deletes the old session and inserts the new one in
//!   one transaction
//! - Infrastructure failures surface as a single opaque 500

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{CurrentUser, require_bearer_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
