// crates/mvc-contrib-membership/src/store.rs
// ============================================================================
// Module: In-Memory Account Store
// Description: Simple in-memory account store for tests and examples.
// Purpose: Provide a deterministic AccountStore without external deps.
// Dependencies: crate::{account, identifiers, interfaces, policy}, tracing
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of [`AccountStore`]
//! for tests and local demos. It is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use time::OffsetDateTime;

use crate::account::UserAccount;
use crate::identifiers::AccountId;
use crate::interfaces::AccountPage;
use crate::interfaces::AccountStore;
use crate::interfaces::AccountStoreError;
use crate::interfaces::PageRequest;
use crate::policy::OnlinePolicy;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Behavior switches for account stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Reject accounts whose e-mail is already used within the application.
    pub require_unique_email: bool,
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Account map key: application name and lowercased user name.
type AccountKey = (String, String);

/// Mutable store state guarded by the store mutex.
#[derive(Debug)]
struct StoreState {
    /// Accounts keyed by application and normalized user name.
    accounts: BTreeMap<AccountKey, UserAccount>,
    /// Next sequential identifier to assign.
    next_id: u64,
}

/// In-memory account store for tests and examples.
#[derive(Debug, Clone)]
pub struct InMemoryAccountStore {
    /// Store state protected by a mutex.
    state: Arc<Mutex<StoreState>>,
    /// Store behavior settings.
    settings: StoreSettings,
}

impl InMemoryAccountStore {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(StoreSettings::default())
    }

    /// Creates an empty store with explicit settings.
    #[must_use]
    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                accounts: BTreeMap::new(),
                next_id: 1,
            })),
            settings,
        }
    }

    /// Returns the store settings.
    #[must_use]
    pub const fn settings(&self) -> StoreSettings {
        self.settings
    }

    /// Locks the store state.
    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, AccountStoreError> {
        self.state
            .lock()
            .map_err(|_| AccountStoreError::Io("account store mutex poisoned".to_string()))
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, account: &UserAccount) -> Result<AccountId, AccountStoreError> {
        validate_names(&account.application_name, &account.user_name)?;
        let key = account_key(&account.application_name, &account.user_name);
        let mut guard = self.lock()?;
        if guard.accounts.contains_key(&key) {
            return Err(AccountStoreError::Conflict(format!(
                "user name already exists: {}",
                account.user_name
            )));
        }
        if let Some(id) = &account.id
            && in_application(&guard.accounts, &account.application_name)
                .any(|stored| stored.id.as_ref() == Some(id))
        {
            return Err(AccountStoreError::Conflict(format!("account id already exists: {id}")));
        }
        if self.settings.require_unique_email
            && email_taken(&guard.accounts, &account.application_name, &account.email, None)
        {
            return Err(AccountStoreError::Conflict(format!(
                "email already exists: {}",
                account.email
            )));
        }
        let id = if let Some(id) = account.id.clone() {
            id
        } else {
            let id = AccountId::from(guard.next_id);
            guard.next_id = guard.next_id.saturating_add(1);
            id
        };
        let mut stored = account.clone();
        stored.id = Some(id.clone());
        guard.accounts.insert(key, stored);
        drop(guard);
        tracing::debug!(
            application = %account.application_name,
            user_name = %account.user_name,
            id = %id,
            "account created"
        );
        Ok(id)
    }

    fn update(&self, account: &UserAccount) -> Result<(), AccountStoreError> {
        let key = account_key(&account.application_name, &account.user_name);
        let mut guard = self.lock()?;
        let Some(existing_id) = guard.accounts.get(&key).map(|stored| stored.id.clone()) else {
            return Err(AccountStoreError::NotFound(account.user_name.clone()));
        };
        if account.id.is_some() && account.id != existing_id {
            return Err(AccountStoreError::Invalid(
                "account id does not match the stored account".to_string(),
            ));
        }
        if self.settings.require_unique_email
            && email_taken(&guard.accounts, &account.application_name, &account.email, Some(&key))
        {
            return Err(AccountStoreError::Conflict(format!(
                "email already exists: {}",
                account.email
            )));
        }
        let mut stored = account.clone();
        stored.id = existing_id;
        guard.accounts.insert(key, stored);
        drop(guard);
        tracing::debug!(
            application = %account.application_name,
            user_name = %account.user_name,
            "account updated"
        );
        Ok(())
    }

    fn delete(&self, application_name: &str, user_name: &str) -> Result<bool, AccountStoreError> {
        let removed =
            self.lock()?.accounts.remove(&account_key(application_name, user_name)).is_some();
        if removed {
            tracing::debug!(application = %application_name, user_name, "account deleted");
        }
        Ok(removed)
    }

    fn find_by_id(
        &self,
        application_name: &str,
        id: &AccountId,
    ) -> Result<Option<UserAccount>, AccountStoreError> {
        let guard = self.lock()?;
        Ok(in_application(&guard.accounts, application_name)
            .find(|account| account.id.as_ref() == Some(id))
            .cloned())
    }

    fn find_by_user_name(
        &self,
        application_name: &str,
        user_name: &str,
    ) -> Result<Option<UserAccount>, AccountStoreError> {
        let guard = self.lock()?;
        Ok(guard.accounts.get(&account_key(application_name, user_name)).cloned())
    }

    fn find_by_email(
        &self,
        application_name: &str,
        email: &str,
    ) -> Result<Option<UserAccount>, AccountStoreError> {
        let guard = self.lock()?;
        Ok(in_application(&guard.accounts, application_name)
            .find(|account| account.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn list(
        &self,
        application_name: &str,
        page: PageRequest,
    ) -> Result<AccountPage, AccountStoreError> {
        if page.page_size == 0 {
            return Err(AccountStoreError::Invalid(
                "page size must be greater than zero".to_string(),
            ));
        }
        let guard = self.lock()?;
        let total = in_application(&guard.accounts, application_name).count();
        let items = page.page_index.checked_mul(page.page_size).map_or_else(Vec::new, |skip| {
            in_application(&guard.accounts, application_name)
                .skip(skip)
                .take(page.page_size)
                .cloned()
                .collect()
        });
        drop(guard);
        Ok(AccountPage {
            items,
            total,
        })
    }

    fn count_online(
        &self,
        application_name: &str,
        policy: &OnlinePolicy,
        now: OffsetDateTime,
    ) -> Result<usize, AccountStoreError> {
        let guard = self.lock()?;
        Ok(in_application(&guard.accounts, application_name)
            .filter(|account| account.is_online(policy, now))
            .count())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the map key for an account.
fn account_key(application_name: &str, user_name: &str) -> AccountKey {
    (application_name.to_string(), user_name.to_lowercase())
}

/// Iterates accounts of one application in user name order.
fn in_application<'a>(
    accounts: &'a BTreeMap<AccountKey, UserAccount>,
    application_name: &'a str,
) -> impl Iterator<Item = &'a UserAccount> + 'a {
    accounts
        .iter()
        .filter(move |((application, _), _)| application == application_name)
        .map(|(_, account)| account)
}

/// Returns true when another account in the application uses `email`.
fn email_taken(
    accounts: &BTreeMap<AccountKey, UserAccount>,
    application_name: &str,
    email: &str,
    exclude: Option<&AccountKey>,
) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    accounts.iter().any(|(key, account)| {
        key.0 == application_name
            && Some(key) != exclude
            && account.email.eq_ignore_ascii_case(email)
    })
}

/// Rejects blank application or user names.
fn validate_names(application_name: &str, user_name: &str) -> Result<(), AccountStoreError> {
    if application_name.trim().is_empty() {
        return Err(AccountStoreError::Invalid("application name must be non-empty".to_string()));
    }
    if user_name.trim().is_empty() {
        return Err(AccountStoreError::Invalid("user name must be non-empty".to_string()));
    }
    Ok(())
}
