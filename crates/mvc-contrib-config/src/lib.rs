// crates/mvc-contrib-config/src/lib.rs
// ============================================================================
// Module: MVC Contrib Config Library
// Description: Canonical config model, validation, and component wiring.
// Purpose: Single source of truth for mvc-contrib.toml semantics.
// Dependencies: mvc-contrib-localization, mvc-contrib-membership, serde, toml
// ============================================================================

//! ## Overview
//! `mvc-contrib-config` defines the configuration model shared by the
//! localization and membership crates. Loading is strict and fails closed:
//! size, encoding, path, and cross-field checks all run before a config value
//! is handed out. A validated config builds the ordered string provider and
//! the membership policy types.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
