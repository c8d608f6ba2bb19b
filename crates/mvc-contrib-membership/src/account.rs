// crates/mvc-contrib-membership/src/account.rs
// ============================================================================
// Module: User Account Record
// Description: Data contract for a membership user's authentication state.
// Purpose: Define every account field plus the derived online predicate.
// Dependencies: crate::{identifiers, policy}, serde, time
// ============================================================================

//! ## Overview
//! [`UserAccount`] is a plain record: every field is independently readable
//! and writable, and the only derived value is [`UserAccount::is_online`],
//! which is computed from `last_activity_at` against an [`OnlinePolicy`] and is
//! never stored.
//!
//! ## Invariants
//! - Failed-attempt window start fields hold [`NO_FAILURE_RECORDED`] while no
//!   failure is recorded; they are never null.
//! - Secrets (password, salt, password answer) are redacted from `Debug`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::identifiers::AccountId;
use crate::policy::OnlinePolicy;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Sentinel for "no failure recorded yet" (`0001-01-01T00:00:00Z`).
///
/// Also used for `last_locked_out_at` on accounts that were never locked out.
pub const NO_FAILURE_RECORDED: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

/// Placeholder shown instead of secret values in debug output.
const REDACTED: &str = "<redacted>";

// ============================================================================
// SECTION: Account Record
// ============================================================================

/// Membership account for a single user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Storage-assigned identifier; `None` until the account is stored.
    pub id: Option<AccountId>,
    /// Application the user belongs to.
    pub application_name: String,
    /// Login name.
    pub user_name: String,
    /// E-mail address.
    pub email: String,
    /// Password in its stored (hashed or encoded) form.
    pub password: String,
    /// Salt used when encoding the password.
    pub password_salt: String,
    /// Question that must be answered to reset the password.
    pub password_question: Option<String>,
    /// Answer to [`UserAccount::password_question`].
    pub password_answer: Option<String>,
    /// Free-form comment about the user.
    pub comment: Option<String>,
    /// When the account was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Whether the account has been approved and may log in.
    pub is_approved: bool,
    /// When the user last logged in.
    #[serde(with = "time::serde::rfc3339")]
    pub last_login_at: OffsetDateTime,
    /// When the password was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub last_password_change_at: OffsetDateTime,
    /// Whether the account is locked out.
    pub is_locked_out: bool,
    /// When the account was last locked out.
    #[serde(with = "time::serde::rfc3339")]
    pub last_locked_out_at: OffsetDateTime,
    /// First incorrect password in the current window, or [`NO_FAILURE_RECORDED`].
    #[serde(with = "time::serde::rfc3339")]
    pub failed_password_window_started_at: OffsetDateTime,
    /// Incorrect passwords since `failed_password_window_started_at`.
    pub failed_password_window_attempt_count: u32,
    /// First incorrect password answer in the current window, or [`NO_FAILURE_RECORDED`].
    #[serde(with = "time::serde::rfc3339")]
    pub failed_password_answer_window_started_at: OffsetDateTime,
    /// Incorrect password answers since `failed_password_answer_window_started_at`.
    pub failed_password_answer_window_attempt_count: u32,
    /// When the user last did something on the site.
    #[serde(with = "time::serde::rfc3339")]
    pub last_activity_at: OffsetDateTime,
}

/// Read-only view of an open failed-attempt window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedAttemptWindow {
    /// When the first failure in the window happened.
    pub started_at: OffsetDateTime,
    /// Failures counted since `started_at`.
    pub attempt_count: u32,
}

impl UserAccount {
    /// Creates an approved, unlocked account with no recorded failures.
    ///
    /// Login, password change, and activity timestamps start at `created_at`.
    #[must_use]
    pub fn new(
        application_name: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: None,
            application_name: application_name.into(),
            user_name: user_name.into(),
            email: email.into(),
            password: String::new(),
            password_salt: String::new(),
            password_question: None,
            password_answer: None,
            comment: None,
            created_at,
            is_approved: true,
            last_login_at: created_at,
            last_password_change_at: created_at,
            is_locked_out: false,
            last_locked_out_at: NO_FAILURE_RECORDED,
            failed_password_window_started_at: NO_FAILURE_RECORDED,
            failed_password_window_attempt_count: 0,
            failed_password_answer_window_started_at: NO_FAILURE_RECORDED,
            failed_password_answer_window_attempt_count: 0,
            last_activity_at: created_at,
        }
    }

    /// Returns whether the user counts as online under `policy` at `now`.
    #[must_use]
    pub fn is_online(&self, policy: &OnlinePolicy, now: OffsetDateTime) -> bool {
        policy.is_active(self.last_activity_at, now)
    }

    /// Returns the open failed-password window, if a failure is recorded.
    #[must_use]
    pub fn failed_password_window(&self) -> Option<FailedAttemptWindow> {
        open_window(
            self.failed_password_window_started_at,
            self.failed_password_window_attempt_count,
        )
    }

    /// Returns the open failed-password-answer window, if a failure is recorded.
    #[must_use]
    pub fn failed_password_answer_window(&self) -> Option<FailedAttemptWindow> {
        open_window(
            self.failed_password_answer_window_started_at,
            self.failed_password_answer_window_attempt_count,
        )
    }
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("id", &self.id)
            .field("application_name", &self.application_name)
            .field("user_name", &self.user_name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("password_salt", &REDACTED)
            .field("password_question", &self.password_question)
            .field("password_answer", &self.password_answer.as_ref().map(|_| REDACTED))
            .field("comment", &self.comment)
            .field("created_at", &self.created_at)
            .field("is_approved", &self.is_approved)
            .field("last_login_at", &self.last_login_at)
            .field("last_password_change_at", &self.last_password_change_at)
            .field("is_locked_out", &self.is_locked_out)
            .field("last_locked_out_at", &self.last_locked_out_at)
            .field("failed_password_window_started_at", &self.failed_password_window_started_at)
            .field(
                "failed_password_window_attempt_count",
                &self.failed_password_window_attempt_count,
            )
            .field(
                "failed_password_answer_window_started_at",
                &self.failed_password_answer_window_started_at,
            )
            .field(
                "failed_password_answer_window_attempt_count",
                &self.failed_password_answer_window_attempt_count,
            )
            .field("last_activity_at", &self.last_activity_at)
            .finish()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a window view unless the start holds the sentinel.
fn open_window(started_at: OffsetDateTime, attempt_count: u32) -> Option<FailedAttemptWindow> {
    (started_at != NO_FAILURE_RECORDED).then_some(FailedAttemptWindow {
        started_at,
        attempt_count,
    })
}
