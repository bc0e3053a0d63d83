//! Session Entity
//!
//! A refresh credential. One user may hold any number of sessions at once.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{UserId, refresh_token::RefreshToken, session_id::SessionId};

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub refresh_token: RefreshToken,
    /// Absolute expiry. The session is valid only while `now < expires_at`.
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: UserId,
    pub refresh_token: RefreshToken,
    pub expires_at: DateTime<Utc>,
}

impl NewSession {
    pub fn new(
        user_id: UserId,
        refresh_token: RefreshToken,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            refresh_token,
            expires_at: now + ttl,
        }
    }
}
