//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{ShoppingAppState, ShoppingStore};
pub use router::{shopping_router, shopping_router_generic};
