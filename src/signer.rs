//! HMAC-SHA256 signing of arbitrary payloads
//!
//! A signed string has the form `<hex signature>-<base64 payload>`, where the
//! signature is the 64 character lowercase hex encoding of
//! HMAC-SHA256(secret, payload) and the payload uses the standard base64
//! alphabet with padding.
//!
//! # Rejection contract
//!
//! [`CookieSigner::verify_signed_string`] never returns an error. A string
//! that fails to verify for any reason yields `None`. A valid token may carry
//! an empty payload, which yields `Some(vec![])`; callers must match on the
//! `Option` itself and never treat an empty payload as a rejection.

use crate::hex::{self, Padding};
use crate::secret::{Secret, SecretError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// Length of the hex signature prefix of a signed string
pub const SIGNATURE_HEX_LEN: usize = 64;

/// Separator between signature and payload
pub const SEPARATOR: char = '-';

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("Invalid secret: {0}")]
    Secret(#[from] SecretError),

    #[error("HMAC initialization failed")]
    InitFailed,
}

/// Signs and verifies payloads with a shared secret
///
/// The signer holds nothing but the secret, so it can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct CookieSigner {
    secret: Secret,
}

impl CookieSigner {
    /// Create a signer from raw secret bytes
    ///
    /// Fails with [`SignerError::Secret`] if the secret is shorter than
    /// [`crate::MIN_SECRET_LEN`] bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, SignerError> {
        Ok(Self::from_secret(Secret::new(secret)?))
    }

    pub fn from_secret(secret: Secret) -> Self {
        Self { secret }
    }

    /// HMAC-SHA256 of `payload` as lowercase hex
    ///
    /// The secret length is checked again on every call, independent of the
    /// check made at construction.
    pub fn sign(&self, payload: &[u8]) -> Result<String, SignerError> {
        if let Err(e) = self.secret.validate() {
            warn!(error = %e, "refusing to sign with invalid secret");
            return Err(e.into());
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.as_slice())
            .map_err(|_| SignerError::InitFailed)?;
        mac.update(payload);
        Ok(hex::encode(&mac.finalize().into_bytes()))
    }

    /// Produce `<signature>-<base64 payload>`
    pub fn create_signed_string(&self, payload: &[u8]) -> Result<String, SignerError> {
        let signature = self.sign(payload)?;
        Ok(format!("{}{}{}", signature, SEPARATOR, BASE64.encode(payload)))
    }

    /// Verify a signed string and return its payload
    ///
    /// Returns `None` if the string is malformed, the payload is not valid
    /// base64, or the signature does not match. The signature comparison
    /// runs in constant time over the decoded bytes.
    pub fn verify_signed_string(&self, signed: &str) -> Option<Vec<u8>> {
        let Some((signature_hex, payload_b64)) = signed.split_once(SEPARATOR) else {
            debug!(reason = "format", "rejected signed string");
            return None;
        };

        let payload = match BASE64.decode(payload_b64) {
            Ok(payload) => payload,
            Err(_) => {
                debug!(reason = "base64", "rejected signed string");
                return None;
            }
        };

        let claimed = match hex::decode(signature_hex, Padding::Strict) {
            Ok(bytes) => bytes,
            Err(_) => {
                debug!(reason = "signature_hex", "rejected signed string");
                return None;
            }
        };

        let expected = self
            .sign(&payload)
            .ok()
            .and_then(|sig| hex::decode(&sig, Padding::Strict).ok())?;

        // CRITICAL: constant-time comparison, no early exit on mismatch
        if bool::from(expected.ct_eq(&claimed)) {
            Some(payload)
        } else {
            debug!(reason = "mismatch", "rejected signed string");
            None
        }
    }
}
