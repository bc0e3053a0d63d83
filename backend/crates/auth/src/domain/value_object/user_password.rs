//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Argon2id work is CPU bound, so
//! both hashing and verification run on the blocking thread pool.

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Password as typed by the user. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (8 to 128 characters, no control characters).
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub async fn from_raw(raw: RawPassword) -> AuthResult<Self> {
        let hashed = tokio::task::spawn_blocking(move || raw.0.hash())
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))?
            .map_err(|e: PasswordHashError| AuthError::Internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Rebuild from a stored PHC string. A corrupt value is not rejected
    /// here; it simply never verifies.
    pub fn from_db(phc_string: String) -> Self {
        let hashed = HashedPassword::from_stored(phc_string);
        if !hashed.is_well_formed() {
            tracing::error!("Stored password hash is not a valid PHC string");
        }
        Self(hashed)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// `false` on mismatch, on a corrupt hash, and if the blocking task dies.
    pub async fn verify(&self, raw: RawPassword) -> bool {
        let hashed = self.0.clone();
        tokio::task::spawn_blocking(move || hashed.verify(&raw.0))
            .await
            .unwrap_or(false)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hashed = UserPassword::from_raw(raw("TestPassword123!")).await.unwrap();
        assert!(hashed.verify(raw("TestPassword123!")).await);
        assert!(!hashed.verify(raw("WrongPassword123!")).await);
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_never_verifies() {
        let stored = UserPassword::from_db("plaintext-oops".to_string());
        assert!(!stored.verify(raw("plaintext-oops")).await);
    }

    #[tokio::test]
    async fn test_db_roundtrip() {
        let hashed = UserPassword::from_raw(raw("roundtrip-pw")).await.unwrap();
        let stored = UserPassword::from_db(hashed.as_phc_string().to_string());
        assert!(stored.verify(raw("roundtrip-pw")).await);
    }

    #[test]
    fn test_debug_redaction() {
        assert!(!format!("{:?}", raw("SecretPassword123!")).contains("Secret"));
    }
}
