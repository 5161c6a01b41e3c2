//! Round countdown clock
//!
//! Tracks elapsed time, exposes remaining time, and signals expiry exactly
//! once. The warning window is computed from remaining time alone.

use serde::{Deserialize, Serialize};

/// Countdown over a fixed round duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundClock {
    duration: f32,
    elapsed: f32,
    expired: bool,
}

impl RoundClock {
    pub fn new(duration: f32) -> Self {
        debug_assert!(duration > 0.0, "round duration must be positive");
        Self {
            duration,
            elapsed: 0.0,
            expired: false,
        }
    }

    /// Advance by `dt`. Returns true on the single tick the clock expires.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.expired {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.expired = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds left, clamped at zero
    pub fn remaining(&self) -> f32 {
        let remaining = self.duration - self.elapsed;
        debug_assert!(
            remaining > -self.duration,
            "clock advanced far past expiry: {remaining}"
        );
        remaining.max(0.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Whether the flashing end-of-round cue should be active
    #[inline]
    pub fn in_warning(&self, threshold: f32) -> bool {
        self.remaining() <= threshold
    }
}
