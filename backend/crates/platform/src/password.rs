//! Password Hashing and Verification
//!
//! - Argon2id with a fixed cost (m=19 MiB, t=2, p=1)
//! - 128-bit salt drawn from the OS random source, embedded in the PHC string
//! - Clear text is zeroized on drop
//!
//! The stored form is a PHC string, so no separate salt column exists.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto;

// ============================================================================
// Constants
// ============================================================================

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id memory cost in KiB
const ARGON2_MEMORY_KIB: u32 = 19_456;
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_PARALLELISM: u32 = 1;

const SALT_LENGTH: usize = 16;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Hashing failed. Verification never fails, it only answers yes or no.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error(transparent)]
    RandomSource(#[from] crypto::RandomSourceError),
}

fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
/// let hashed = password.hash().unwrap();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate and wrap a password.
    ///
    /// Input is NFKC-normalized first, then length is counted in code points.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id and a fresh random salt.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt_bytes = crypto::random_bytes(SALT_LENGTH)?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        let hash = hasher()?
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`).
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string loaded from storage.
    ///
    /// Not validated: a corrupt value is kept as-is and never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    pub fn is_well_formed(&self) -> bool {
        PasswordHash::new(&self.hash).is_ok()
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Constant-time check of `password` against this hash.
    ///
    /// A malformed stored hash yields `false`.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };
        let Ok(argon2) = hasher() else {
            return false;
        };
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_policy_bounds() {
        assert!(matches!(
            ClearTextPassword::new("short".to_string()),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 5 })
        ));
        assert!(ClearTextPassword::new("a".repeat(MIN_PASSWORD_LENGTH)).is_ok());
        assert!(ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH)).is_ok());
        assert!(matches!(
            ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        assert_eq!(
            ClearTextPassword::new("         ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("abc\u{7}defgh".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let pw = password("hunter2hunter2");
        let hashed = pw.hash().unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&pw));
        assert!(!hashed.verify(&password("hunter3hunter3")));
    }

    #[test]
    fn test_salt_is_random() {
        let pw = password("same-password");
        let a = pw.hash().unwrap();
        let b = pw.hash().unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.verify(&pw) && b.verify(&pw));
    }

    #[test]
    fn test_cost_is_fixed() {
        let hashed = password("cost-check-pw").hash().unwrap();
        assert!(hashed.as_phc_string().contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let bogus = HashedPassword::from_stored("not-a-phc-string");
        assert!(!bogus.is_well_formed());
        assert!(!bogus.verify(&password("whatever123")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let pw = password("TestPassword123!");
        let phc = pw.hash().unwrap().as_phc_string().to_string();
        let restored = HashedPassword::from_stored(phc);
        assert!(restored.is_well_formed());
        assert!(restored.verify(&pw));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth digits normalize to ASCII
        let hashed = password("pass１２３４").hash().unwrap();
        assert!(hashed.verify(&password("pass1234")));
    }

    #[test]
    fn test_debug_redaction() {
        let pw = password("SecretPassword123!");
        assert!(!format!("{:?}", pw).contains("Secret"));
        assert!(format!("{:?}", pw.hash().unwrap()).contains("[HASH]"));
    }
}
