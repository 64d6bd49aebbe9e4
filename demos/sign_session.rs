//! Sign a session id and verify the resulting cookie
//!
//! ```text
//! COOKIE_SIGNER_SECRET=change-me-to-something-long \
//!     cargo run --example sign_session -- my-session-id
//! ```

use cookie_signer::SignerConfig;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let session_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-session".to_string());

    let config = match SignerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let codec = match config.session_codec() {
        Ok(codec) => codec,
        Err(e) => {
            error!("Invalid signer configuration: {}", e);
            std::process::exit(1);
        }
    };

    let cookie = match codec.create_signed_string(&session_id) {
        Ok(cookie) => cookie,
        Err(e) => {
            error!("Signing failed: {}", e);
            std::process::exit(1);
        }
    };
    info!(timestep = codec.cookie_timestep(), "Signed session cookie");
    println!("{}", cookie);

    let verified = match config.max_age_days {
        Some(max_age) => codec.verify_session_within(&cookie, max_age),
        None => codec.verify_session(&cookie),
    };
    match verified {
        Some(claims) => info!(session_id = %claims.session_id_str(), "Cookie verified"),
        None => warn!("Cookie failed verification"),
    }
}
