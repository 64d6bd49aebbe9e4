//! Signed session cookie tokens
//!
//! The signed payload is exactly 22 bytes:
//!
//! ```text
//! +---------+---------------------------+----------+
//! | version | session id (20 bytes)     | timestep |
//! |  0x01   | UTF-8, 0x20 right-padded  |  1 byte  |
//! +---------+---------------------------+----------+
//! ```
//!
//! Session ids longer than 20 bytes are truncated after UTF-8 encoding, which
//! may split a multi-byte character. The timestep is the Unix day number
//! modulo 256.
//!
//! # Example
//!
//! ```
//! use cookie_signer::{CookieSigner, FixedClock, SessionTokenCodec};
//!
//! let signer = CookieSigner::new("a-secret-of-sufficient-length").unwrap();
//! let codec = SessionTokenCodec::with_clock(signer, FixedClock::new(1_704_067_200));
//!
//! let cookie = codec.create_signed_string("user-42").unwrap();
//! let claims = codec.verify_session(&cookie).unwrap();
//! assert_eq!(claims.session_id(), b"user-42");
//! assert_eq!(claims.timestep(), 11);
//! ```

use crate::clock::{timestep_at, Clock, SystemClock};
use crate::signer::{CookieSigner, SignerError};
use tracing::debug;

/// Version byte of the current payload layout
pub const SESSION_PAYLOAD_VERSION: u8 = 0x01;

/// Width of the session id field
pub const SESSION_ID_LEN: usize = 20;

/// Total payload length: version + session id + timestep
pub const SESSION_PAYLOAD_LEN: usize = 1 + SESSION_ID_LEN + 1;

const PAD_BYTE: u8 = 0x20;

/// Build the fixed 22 byte session payload
pub fn pack_session_payload(session_id: &str, timestep: u8) -> [u8; SESSION_PAYLOAD_LEN] {
    let mut payload = [PAD_BYTE; SESSION_PAYLOAD_LEN];
    payload[0] = SESSION_PAYLOAD_VERSION;

    let id = session_id.as_bytes();
    let n = id.len().min(SESSION_ID_LEN);
    payload[1..1 + n].copy_from_slice(&id[..n]);

    payload[SESSION_PAYLOAD_LEN - 1] = timestep;
    payload
}

/// Sign `session_id` with `secret` at the current wall-clock timestep
///
/// Fails if the secret is shorter than [`crate::MIN_SECRET_LEN`] bytes.
pub fn create_signed_string_for_session(
    session_id: &str,
    secret: impl Into<Vec<u8>>,
) -> Result<String, SignerError> {
    SessionTokenCodec::new(CookieSigner::new(secret)?).create_signed_string(session_id)
}

/// Wall-clock timestep
pub fn cookie_timestep() -> u8 {
    timestep_at(SystemClock.unix_seconds())
}

/// Fields recovered from a verified session payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    session_id: [u8; SESSION_ID_LEN],
    timestep: u8,
}

impl SessionClaims {
    /// Parse a payload that has already passed signature verification
    ///
    /// Returns `None` unless the payload is exactly 22 bytes with version
    /// byte `0x01`.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        if payload.len() != SESSION_PAYLOAD_LEN {
            debug!(reason = "layout", len = payload.len(), "rejected session payload");
            return None;
        }
        if payload[0] != SESSION_PAYLOAD_VERSION {
            debug!(reason = "version", version = payload[0], "rejected session payload");
            return None;
        }

        let mut session_id = [0u8; SESSION_ID_LEN];
        session_id.copy_from_slice(&payload[1..1 + SESSION_ID_LEN]);
        Some(Self {
            session_id,
            timestep: payload[SESSION_PAYLOAD_LEN - 1],
        })
    }

    /// The full 20 byte field including padding
    pub fn raw_session_id(&self) -> &[u8; SESSION_ID_LEN] {
        &self.session_id
    }

    /// Session id bytes with trailing padding removed
    ///
    /// An id that itself ended in spaces cannot be told apart from padding.
    pub fn session_id(&self) -> &[u8] {
        let end = self
            .session_id
            .iter()
            .rposition(|&b| b != PAD_BYTE)
            .map_or(0, |i| i + 1);
        &self.session_id[..end]
    }

    /// Session id as text, replacing any split trailing character
    pub fn session_id_str(&self) -> String {
        String::from_utf8_lossy(self.session_id()).into_owned()
    }

    pub fn timestep(&self) -> u8 {
        self.timestep
    }

    /// Days elapsed between the embedded timestep and `current`, modulo 256
    pub fn age_days(&self, current: u8) -> u8 {
        current.wrapping_sub(self.timestep)
    }
}

/// Creates and verifies signed session cookies
#[derive(Debug, Clone)]
pub struct SessionTokenCodec<C = SystemClock> {
    signer: CookieSigner,
    clock: C,
}

impl SessionTokenCodec<SystemClock> {
    pub fn new(signer: CookieSigner) -> Self {
        Self::with_clock(signer, SystemClock)
    }
}

impl<C: Clock> SessionTokenCodec<C> {
    /// Build a codec on an explicit time source, typically a [`crate::FixedClock`]
    pub fn with_clock(signer: CookieSigner, clock: C) -> Self {
        Self { signer, clock }
    }

    pub fn signer(&self) -> &CookieSigner {
        &self.signer
    }

    /// Current day counter: `floor(unix_seconds / 86400) & 0xff`
    pub fn cookie_timestep(&self) -> u8 {
        timestep_at(self.clock.unix_seconds())
    }

    /// Pack and sign `session_id` with the current timestep
    pub fn create_signed_string(&self, session_id: &str) -> Result<String, SignerError> {
        let payload = pack_session_payload(session_id, self.cookie_timestep());
        self.signer.create_signed_string(&payload)
    }

    /// Verify a signed cookie and parse its session payload
    ///
    /// The timestep is returned but not checked; see
    /// [`verify_session_within`](Self::verify_session_within).
    pub fn verify_session(&self, signed: &str) -> Option<SessionClaims> {
        let payload = self.signer.verify_signed_string(signed)?;
        SessionClaims::from_payload(&payload)
    }

    /// Like [`verify_session`](Self::verify_session), also rejecting cookies
    /// older than `max_age_days` days
    ///
    /// The timestep wraps every 256 days, so a cookie exactly 256 days old
    /// looks fresh.
    pub fn verify_session_within(&self, signed: &str, max_age_days: u8) -> Option<SessionClaims> {
        let claims = self.verify_session(signed)?;
        let age = claims.age_days(self.cookie_timestep());
        if age > max_age_days {
            debug!(reason = "stale", age, max_age_days, "rejected session payload");
            return None;
        }
        Some(claims)
    }
}
