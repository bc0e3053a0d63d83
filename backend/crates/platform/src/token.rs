//! Access and refresh tokens
//!
//! Access tokens are HMAC-signed JWTs carrying `sub` (the user id as an
//! unsigned integer), `iat` and `exp`. Refresh tokens are opaque random
//! UUIDs with no claims; the session table decides whether one is valid.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::crypto::{self, RandomSourceError};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Signing key must not be empty")]
    EmptySecret,

    #[error("Failed to sign access token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid access token")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error(transparent)]
    RandomSource(#[from] RandomSourceError),
}

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u64,
    pub exp: i64,
    pub iat: i64,
}

/// Signs and verifies access tokens with one symmetric key.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenManager {
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        // Any HMAC variant is accepted on the way in; anything else
        // (RS*, ES*, none) is rejected by the algorithm check.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        // `sub` is numeric; jsonwebtoken's own `sub` check expects a string.
        // A missing or non-numeric subject already fails `Claims` decoding.
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Sign an HS256 token for `subject` that expires `ttl` from now.
    pub fn issue_access_token(&self, subject: u64, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Fresh random 128-bit identifier (RFC 4122 v4 layout).
    pub fn issue_refresh_token(&self) -> Result<Uuid, TokenError> {
        let mut bytes = [0u8; 16];
        crypto::fill_random(&mut bytes)?;
        Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Check signature, algorithm family and expiry, and return the subject.
    pub fn verify_access_token(&self, token: &str) -> Result<u64, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            TokenError::Invalid(e)
        })?;
        Ok(data.claims.sub)
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hmac";

    fn manager() -> TokenManager {
        TokenManager::new(SECRET).unwrap()
    }

    fn sign_raw<T: Serialize>(alg: Algorithm, claims: &T, secret: &[u8]) -> String {
        encode(&Header::new(alg), claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let tm = manager();
        let token = tm.issue_access_token(42, Duration::minutes(15)).unwrap();
        assert_eq!(tm.verify_access_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_verify_accepts_every_issued_subject() {
        let tm = manager();
        for subject in [0, 1, 4_294_967_296, u64::MAX] {
            let token = tm.issue_access_token(subject, Duration::minutes(1)).unwrap();
            assert_eq!(tm.verify_access_token(&token).unwrap(), subject);
        }
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(TokenManager::new(b""), Err(TokenError::EmptySecret)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tm = manager();
        let token = tm.issue_access_token(1, Duration::seconds(-5)).unwrap();
        assert!(matches!(
            tm.verify_access_token(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = manager()
            .issue_access_token(1, Duration::minutes(5))
            .unwrap();
        let other = TokenManager::new(b"secret-bravo").unwrap();
        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_other_hmac_variants_accepted() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: 7,
            exp: now + 60,
            iat: now,
        };
        let token = sign_raw(Algorithm::HS512, &claims, SECRET);
        assert_eq!(manager().verify_access_token(&token).unwrap(), 7);
    }

    #[test]
    fn test_missing_subject_rejected() {
        #[derive(Serialize)]
        struct NoSub {
            exp: i64,
        }
        let token = sign_raw(
            Algorithm::HS256,
            &NoSub {
                exp: Utc::now().timestamp() + 60,
            },
            SECRET,
        );
        assert!(manager().verify_access_token(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        #[derive(Serialize)]
        struct StringSub {
            sub: String,
            exp: i64,
        }
        let token = sign_raw(
            Algorithm::HS256,
            &StringSub {
                sub: "alice".to_string(),
                exp: Utc::now().timestamp() + 60,
            },
            SECRET,
        );
        assert!(manager().verify_access_token(&token).is_err());
    }

    #[test]
    fn test_negative_subject_rejected() {
        #[derive(Serialize)]
        struct SignedSub {
            sub: i64,
            exp: i64,
        }
        let token = sign_raw(
            Algorithm::HS256,
            &SignedSub {
                sub: -3,
                exp: Utc::now().timestamp() + 60,
            },
            SECRET,
        );
        assert!(manager().verify_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(manager().verify_access_token("not.a.jwt").is_err());
        assert!(manager().verify_access_token("").is_err());
    }

    #[test]
    fn test_refresh_tokens_are_unique_v4() {
        let tm = manager();
        let a = tm.issue_refresh_token().unwrap();
        let b = tm.issue_refresh_token().unwrap();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }
}
