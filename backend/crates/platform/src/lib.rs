//! Platform Crate - Technical Infrastructure
//!
//! Building blocks with no business meaning of their own:
//! - Secure random bytes (`crypto`)
//! - Password hashing (Argon2id, fixed cost, PHC string storage)
//! - Invite code generation (uniform over `[A-Za-z0-9]`)
//! - Access token signing and verification (HMAC JWT), refresh token minting

pub mod crypto;
pub mod invite_code;
pub mod password;
pub mod token;
