// crates/mvc-contrib-membership/src/interfaces.rs
// ============================================================================
// Module: Membership Interfaces
// Description: Storage capability for membership account records.
// Purpose: Separate persistence behavior from the account data contract.
// Dependencies: crate::{account, identifiers, policy}, thiserror, time
// ============================================================================

//! ## Overview
//! [`AccountStore`] is implemented by persistence layers (SQL tables, document
//! stores, directories) and consumed by the membership provider. Accounts are
//! scoped by application name; user names are unique per application and
//! compared case-insensitively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;

use crate::account::UserAccount;
use crate::identifiers::AccountId;
use crate::policy::OnlinePolicy;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Account store errors.
#[derive(Debug, Error)]
pub enum AccountStoreError {
    /// Store I/O error.
    #[error("account store io error: {0}")]
    Io(String),
    /// A record with the same unique key already exists.
    #[error("account store conflict: {0}")]
    Conflict(String),
    /// The addressed record does not exist.
    #[error("account not found: {0}")]
    NotFound(String),
    /// Request or record data is invalid.
    #[error("account store invalid data: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Paging
// ============================================================================

/// Offset-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page_index: usize,
    /// Maximum records per page (must be non-zero).
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

/// One page of accounts plus the total number of matching accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPage {
    /// Accounts on this page, ordered by user name.
    pub items: Vec<UserAccount>,
    /// Total matching accounts across all pages.
    pub total: usize,
}

// ============================================================================
// SECTION: Account Store
// ============================================================================

/// Storage capability for [`UserAccount`] records.
pub trait AccountStore {
    /// Stores a new account and returns its identifier.
    ///
    /// Implementations assign an identifier when `account.id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError::Conflict`] when the user name (or a
    /// required-unique e-mail) is taken, or another error when storage fails.
    fn create(&self, account: &UserAccount) -> Result<AccountId, AccountStoreError>;

    /// Replaces the stored account matching the application and user name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError::NotFound`] when no such account exists.
    fn update(&self, account: &UserAccount) -> Result<(), AccountStoreError>;

    /// Deletes an account, returning whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when storage fails.
    fn delete(&self, application_name: &str, user_name: &str) -> Result<bool, AccountStoreError>;

    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when storage fails.
    fn find_by_id(
        &self,
        application_name: &str,
        id: &AccountId,
    ) -> Result<Option<UserAccount>, AccountStoreError>;

    /// Finds an account by user name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when storage fails.
    fn find_by_user_name(
        &self,
        application_name: &str,
        user_name: &str,
    ) -> Result<Option<UserAccount>, AccountStoreError>;

    /// Finds the first account, by user name order, with the e-mail address
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when storage fails.
    fn find_by_email(
        &self,
        application_name: &str,
        email: &str,
    ) -> Result<Option<UserAccount>, AccountStoreError>;

    /// Lists accounts ordered by user name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError::Invalid`] for a zero page size, or another
    /// error when storage fails.
    fn list(
        &self,
        application_name: &str,
        page: PageRequest,
    ) -> Result<AccountPage, AccountStoreError>;

    /// Counts accounts that are online under `policy` at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when storage fails.
    fn count_online(
        &self,
        application_name: &str,
        policy: &OnlinePolicy,
        now: OffsetDateTime,
    ) -> Result<usize, AccountStoreError>;
}
