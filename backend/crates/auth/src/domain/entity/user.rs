//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, gender::Gender, user_name::UserName, user_password::UserPassword,
};

#[derive(Debug, Clone)]
pub struct User {
    /// `BIGSERIAL` key, also the `sub` claim of access tokens
    pub user_id: UserId,
    /// Unique, used for log-in and shown to other group members
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub gender: Gender,
}
