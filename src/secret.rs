//! Signing secret that zeroizes on drop

use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum accepted secret length in bytes
pub const MIN_SECRET_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Secret too short: expected at least {min} bytes, got {got}")]
    TooShort { min: usize, got: usize },
}

/// HMAC key material supplied by the caller
///
/// The bytes are cleared from memory when the value is dropped and are never
/// printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Create a secret, rejecting anything shorter than [`MIN_SECRET_LEN`]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let secret = Secret(bytes.into());
        secret.validate()?;
        Ok(secret)
    }

    /// Check the length invariant
    pub fn validate(&self) -> Result<(), SecretError> {
        if self.0.len() < MIN_SECRET_LEN {
            return Err(SecretError::TooShort {
                min: MIN_SECRET_LEN,
                got: self.0.len(),
            });
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
