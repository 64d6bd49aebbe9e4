//! Common test utilities for cookie-signer integration tests

#![allow(dead_code)]

use cookie_signer::{CookieSigner, FixedClock, SessionTokenCodec};
use rand::{Rng, RngCore};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
pub const OTHER_SECRET: &str = "another-integration-secret-9876543210";

/// 2024-01-01T00:00:00Z, timestep 11
pub const TEST_EPOCH: i64 = 1_704_067_200;

pub fn test_signer() -> CookieSigner {
    CookieSigner::new(TEST_SECRET).unwrap()
}

/// Codec pinned at `at`, plus a handle to move its clock
pub fn test_codec(at: i64) -> (SessionTokenCodec<FixedClock>, FixedClock) {
    let clock = FixedClock::new(at);
    (
        SessionTokenCodec::with_clock(test_signer(), clock.clone()),
        clock,
    )
}

/// Random payload of length 0..max_len
pub fn random_payload(rng: &mut impl RngCore, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..max_len);
    let mut payload = vec![0u8; len];
    rng.fill_bytes(&mut payload);
    payload
}
