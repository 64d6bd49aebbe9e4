//! Time sources for the cookie timestep
//!
//! The session codec takes its clock as a value, so tests pin time by
//! constructing the codec with a [`FixedClock`] rather than mutating any
//! process-wide state.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Seconds per timestep
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current Unix time in seconds
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually controlled clock for tests
///
/// Clones share the same instant, so a test can keep one handle and move
/// time under a codec that owns another.
#[derive(Debug, Clone, Default)]
pub struct FixedClock(Arc<AtomicI64>);

impl FixedClock {
    pub fn new(unix_seconds: i64) -> Self {
        Self(Arc::new(AtomicI64::new(unix_seconds)))
    }

    pub fn set(&self, unix_seconds: i64) {
        self.0.store(unix_seconds, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn unix_seconds(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_seconds(&self) -> i64 {
        (**self).unix_seconds()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn unix_seconds(&self) -> i64 {
        (**self).unix_seconds()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn unix_seconds(&self) -> i64 {
        (**self).unix_seconds()
    }
}

/// Day counter modulo 256 for a Unix timestamp
///
/// Uses floor division, so the second before the epoch is step 255.
pub fn timestep_at(unix_seconds: i64) -> u8 {
    unix_seconds.div_euclid(SECONDS_PER_DAY).rem_euclid(256) as u8
}
