//! Request and response bodies for the auth endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::TokenPair;
use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, gender::Gender};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub gender: Gender,
}

#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: UserId,
    pub username: String,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.user_name.to_string(),
            gender: user.gender,
            created_at: user.created_at,
        }
    }
}
