//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Lookups by key return `Ok(None)` when nothing matches; use cases decide
//! which domain error that becomes.

use crate::domain::entity::{
    session::{NewSession, Session},
    user::{NewUser, User},
};
use crate::domain::value_object::{
    UserId, refresh_token::RefreshToken, session_id::SessionId, user_name::UserName,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user. A lost race on the unique user name fails with
    /// `AuthError::UserAlreadyExists`.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}

/// Refresh session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &NewSession) -> AuthResult<Session>;

    async fn find_by_refresh_token(&self, token: &RefreshToken) -> AuthResult<Option<Session>>;

    /// Replace `old` with `replacement` atomically: either both the delete
    /// and the insert happen, or neither does.
    async fn rotate(&self, old: SessionId, replacement: &NewSession) -> AuthResult<Session>;

    /// Delete every session whose expiry has passed; returns how many.
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
