// crates/mvc-contrib-membership/src/policy.rs
// ============================================================================
// Module: Online Policy
// Description: Threshold used to derive whether an account is online.
// Purpose: Keep the "is online" rule outside the stored record.
// Dependencies: time
// ============================================================================

//! ## Overview
//! An account counts as online when its last recorded activity falls inside
//! the policy window ending at the supplied `now`. The clock is always passed
//! in by the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default online window in minutes.
pub const DEFAULT_ONLINE_WINDOW_MINUTES: u32 = 15;

// ============================================================================
// SECTION: Policy
// ============================================================================

/// Policy threshold for the derived "is online" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlinePolicy {
    /// Activity window; accounts active within it are online.
    pub window: Duration,
}

impl OnlinePolicy {
    /// Creates a policy with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
        }
    }

    /// Creates a policy with a window expressed in minutes.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(Duration::minutes(i64::from(minutes)))
    }

    /// Returns true when `last_activity_at` is later than `now - window`.
    ///
    /// Activity recorded after `now` (clock skew) counts as online.
    #[must_use]
    pub fn is_active(&self, last_activity_at: OffsetDateTime, now: OffsetDateTime) -> bool {
        now.checked_sub(self.window).is_none_or(|threshold| last_activity_at > threshold)
    }
}

impl Default for OnlinePolicy {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_ONLINE_WINDOW_MINUTES)
    }
}
