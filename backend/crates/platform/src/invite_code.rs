//! Invite Code Generation
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`. Random bytes at or above
//! [`REJECTION_THRESHOLD`] are discarded so that `byte % 62` carries no bias.

use crate::crypto::{self, RandomSourceError};

pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length used when a group is created.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Largest multiple of 62 that fits in a byte (62 * 4).
const REJECTION_THRESHOLD: u8 = 248;

/// Generate a code of `length` characters.
///
/// ```rust
/// let code = platform::invite_code::generate(5).unwrap();
/// assert_eq!(code.len(), 5);
/// assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
/// ```
pub fn generate(length: usize) -> Result<String, RandomSourceError> {
    let mut code = String::with_capacity(length);
    // ~3% of bytes are rejected, so one batch nearly always suffices
    let mut batch = vec![0u8; length + 8];

    while code.len() < length {
        crypto::fill_random(&mut batch)?;
        for &byte in &batch {
            if byte >= REJECTION_THRESHOLD {
                continue;
            }
            code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
            if code.len() == length {
                break;
            }
        }
    }

    Ok(code)
}

/// Shape check for codes arriving from callers. Says nothing about
/// whether a group owns the code.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| ALPHABET.contains(&b))
}
