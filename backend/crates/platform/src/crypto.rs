//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// The operating system's CSPRNG refused to produce bytes.
///
/// Callers treat this as fatal for the current operation. It is never
/// retried silently.
#[derive(Debug, Error)]
#[error("Secure random source failed: {0}")]
pub struct RandomSourceError(#[from] rand::Error);

/// Fill `buf` from the OS random source.
pub fn fill_random(buf: &mut [u8]) -> Result<(), RandomSourceError> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// Generate `len` cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Result<Vec<u8>, RandomSourceError> {
    let mut bytes = vec![0u8; len];
    fill_random(&mut bytes)?;
    Ok(bytes)
}
