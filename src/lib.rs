//! Signed session cookies
//!
//! - [`hex`]: constant-time hex encoding and decoding
//! - [`CookieSigner`]: HMAC-SHA256 `<hex signature>-<base64 payload>` strings
//!   with constant-time verification
//! - [`SessionTokenCodec`]: the 22 byte session payload and its day-based
//!   timestep
//!
//! # Example
//!
//! ```
//! use cookie_signer::CookieSigner;
//!
//! let signer = CookieSigner::new("an-example-secret-value").unwrap();
//! let signed = signer.create_signed_string(b"payload").unwrap();
//!
//! match signer.verify_signed_string(&signed) {
//!     Some(payload) => assert_eq!(payload, b"payload"),
//!     None => panic!("rejected"),
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod hex;
pub mod prelude;
mod secret;
pub mod session;
mod signer;

pub use clock::{timestep_at, Clock, FixedClock, SystemClock};
pub use config::{ConfigError, SignerConfig};
pub use error::CookieSignerError;
pub use hex::{HexError, Padding};
pub use secret::{Secret, SecretError, MIN_SECRET_LEN};
pub use session::{
    cookie_timestep, create_signed_string_for_session, pack_session_payload, SessionClaims,
    SessionTokenCodec, SESSION_PAYLOAD_LEN,
};
pub use signer::{CookieSigner, SignerError, SIGNATURE_HEX_LEN};
