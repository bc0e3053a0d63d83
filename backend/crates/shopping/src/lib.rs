//! Shopping Backend Module
//!
//! Groups (shared shopping lists), their members and the products on them,
//! plus the read-only product catalog.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and the group access policy
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access rules
//! - Every group operation resolves the group, then the caller's membership
//! - Only the owner deletes the group or kicks members; the owner never leaves
//! - Any member may add, edit or remove any product of the group

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{ShoppingError, ShoppingResult};
pub use infra::postgres::PgShoppingRepository;
pub use presentation::router::shopping_router;
