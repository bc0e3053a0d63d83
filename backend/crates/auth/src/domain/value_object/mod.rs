//! Value Object Module

pub mod gender;
pub mod refresh_token;
pub mod session_id;
pub mod user_name;
pub mod user_password;

pub use kernel::id::UserId;
