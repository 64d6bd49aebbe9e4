//! Prelude
//!
//! ```rust
//! use cookie_signer::prelude::*;
//!
//! # fn example() -> Result<(), CookieSignerError> {
//! let codec = SignerConfig::from_json_str(r#"{"secret":"prelude-example-secret"}"#)?
//!     .session_codec()?;
//! let cookie = codec.create_signed_string("session-1")?;
//! assert!(codec.verify_session(&cookie).is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{ConfigError, SignerConfig};
pub use crate::error::CookieSignerError;
pub use crate::hex::{HexError, Padding};
pub use crate::secret::{Secret, SecretError};
pub use crate::session::{SessionClaims, SessionTokenCodec};
pub use crate::signer::{CookieSigner, SignerError};
