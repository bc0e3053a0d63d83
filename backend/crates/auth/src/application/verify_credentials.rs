//! Verify Credentials Use Case
//!
//! Resolves a bearer access token to the caller's user id. Runs before every
//! protected request.

use std::sync::Arc;

use platform::token::TokenManager;

use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

pub struct VerifyCredentialsUseCase {
    tokens: Arc<TokenManager>,
}

impl VerifyCredentialsUseCase {
    pub fn new(tokens: Arc<TokenManager>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, access_token: &str) -> AuthResult<UserId> {
        let subject = self.tokens.verify_access_token(access_token)?;
        // a subject beyond i64 was never issued by us
        let raw = i64::try_from(subject).map_err(|_| AuthError::InvalidToken)?;
        Ok(UserId::from_raw(raw))
    }
}
