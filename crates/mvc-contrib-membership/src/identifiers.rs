// crates/mvc-contrib-membership/src/identifiers.rs
// ============================================================================
// Module: Membership Identifiers
// Description: Opaque identifier for stored user accounts.
// Purpose: Provide a strongly typed, serializable account identifier.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Account identifiers are assigned by the storage layer (a database key, a
//! document id, ...) and are opaque to everything else.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Storage-assigned account identifier.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new account identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<u64> for AccountId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
