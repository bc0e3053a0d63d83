//! Infrastructure Layer
//!
//! Database implementations of repository traits.

pub mod postgres;

pub use postgres::PgShoppingRepository;
