//! Signer configuration
//!
//! Read from the environment or from JSON:
//!
//! | variable                      | JSON key     | required |
//! |-------------------------------|--------------|----------|
//! | `COOKIE_SIGNER_SECRET`        | `secret`     | yes      |
//! | `COOKIE_SIGNER_MAX_AGE_DAYS`  | `maxAgeDays` | no       |

use crate::secret::{Secret, SecretError};
use crate::session::SessionTokenCodec;
use crate::signer::CookieSigner;
use serde::Deserialize;
use std::env;
use std::fmt;
use thiserror::Error;

pub const SECRET_VAR: &str = "COOKIE_SIGNER_SECRET";
pub const MAX_AGE_VAR: &str = "COOKIE_SIGNER_MAX_AGE_DAYS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {name}")]
    MissingVar { name: &'static str },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid secret: {0}")]
    Secret(#[from] SecretError),
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignerConfig {
    pub secret: String,
    #[serde(default)]
    pub max_age_days: Option<u8>,
}

impl SignerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Secret::new(config.secret.as_bytes())?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup(SECRET_VAR).ok_or(ConfigError::MissingVar { name: SECRET_VAR })?;
        Secret::new(secret.as_bytes())?;

        let max_age_days = match lookup(MAX_AGE_VAR) {
            Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: MAX_AGE_VAR,
                value,
            })?),
            None => None,
        };

        Ok(Self {
            secret,
            max_age_days,
        })
    }

    pub fn signer(&self) -> Result<CookieSigner, ConfigError> {
        Ok(CookieSigner::from_secret(Secret::new(self.secret.as_bytes())?))
    }

    pub fn session_codec(&self) -> Result<SessionTokenCodec, ConfigError> {
        Ok(SessionTokenCodec::new(self.signer()?))
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("secret", &"<redacted>")
            .field("max_age_days", &self.max_age_days)
            .finish()
    }
}
