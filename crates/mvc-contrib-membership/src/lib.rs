// crates/mvc-contrib-membership/src/lib.rs
// ============================================================================
// Module: MVC Contrib Membership Library
// Description: Public API surface for the membership account contract.
// Purpose: Expose the account record, online policy, and storage interface.
// Dependencies: crate::{account, identifiers, interfaces, policy, store}
// ============================================================================

//! ## Overview
//! Defines the data shape of a membership user account and the storage
//! capability a persistence layer implements for it. The record carries no
//! mutation rules; lockout, approval, and failed-attempt bookkeeping belong to
//! the membership provider that owns the record.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod account;
pub mod identifiers;
pub mod interfaces;
pub mod policy;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use account::FailedAttemptWindow;
pub use account::NO_FAILURE_RECORDED;
pub use account::UserAccount;
pub use identifiers::AccountId;
pub use interfaces::AccountPage;
pub use interfaces::AccountStore;
pub use interfaces::AccountStoreError;
pub use interfaces::PageRequest;
pub use policy::DEFAULT_ONLINE_WINDOW_MINUTES;
pub use policy::OnlinePolicy;
pub use store::InMemoryAccountStore;
pub use store::StoreSettings;
