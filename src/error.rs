//! Unified error type for the public API
//!
//! Each module keeps its own error enum for precise handling; this type lets
//! callers that mix operations use a single `Result`.
//!
//! Signature verification never produces an error. Rejections are reported
//! as `None` by the `verify_*` functions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CookieSignerError {
    /// Hex input was malformed
    #[error("Hex error: {0}")]
    Hex(#[from] crate::hex::HexError),

    /// Secret failed validation
    #[error("Secret error: {0}")]
    Secret(#[from] crate::secret::SecretError),

    /// Signing failed
    #[error("Signer error: {0}")]
    Signer(#[from] crate::signer::SignerError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl CookieSignerError {
    /// Returns true if the error comes from a bad secret or configuration
    ///
    /// These are fatal: retrying with the same inputs always fails.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Secret(_) | Self::Signer(_) | Self::Config(_))
    }

    /// Returns true if the error comes from malformed caller input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Hex(_))
    }
}
