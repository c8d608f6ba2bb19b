//! Config default and membership validation tests for mvc-contrib-config.
// crates/mvc-contrib-config/tests/defaults_validation.rs
// =============================================================================
// Module: Config Defaults Tests
// Description: Validate defaults and membership bounds.
// Purpose: Ensure omitted sections behave and membership limits are enforced.
// =============================================================================

use common::TestResult;
use common::assert_error;
use mvc_contrib_config::ContribConfig;
use mvc_contrib_config::MAX_ONLINE_WINDOW_MINUTES;
use mvc_contrib_membership::OnlinePolicy;
use mvc_contrib_membership::StoreSettings;
use time::Duration;

mod common;

#[test]
fn empty_config_applies_defaults() -> TestResult {
    let config = ContribConfig::from_toml_str("").map_err(|err| err.to_string())?;
    if !config.localization.sources.is_empty() {
        return Err("sources should default to empty".to_string());
    }
    if !config.localization.builtin_validation_messages {
        return Err("built-in messages should default to enabled".to_string());
    }
    if config.localization.culture.is_some() {
        return Err("culture should default to unset".to_string());
    }
    if config.online_policy() != OnlinePolicy::default() {
        return Err("online window should default to fifteen minutes".to_string());
    }
    if config.store_settings() != StoreSettings::default() {
        return Err("store settings should default to lenient".to_string());
    }
    Ok(())
}

#[test]
fn derived_default_matches_parsed_default() -> TestResult {
    let parsed = common::minimal_config().map_err(|err| err.to_string())?;
    let derived = ContribConfig::default();
    if parsed.online_policy() != derived.online_policy()
        || parsed.localization.builtin_validation_messages
            != derived.localization.builtin_validation_messages
    {
        return Err("Default and empty TOML disagree".to_string());
    }
    Ok(())
}

#[test]
fn membership_section_maps_to_policy_and_settings() -> TestResult {
    let config = ContribConfig::from_toml_str(
        "[membership]\nuser_is_online_window_minutes = 30\nrequire_unique_email = true\n",
    )
    .map_err(|err| err.to_string())?;
    if config.online_policy().window != Duration::minutes(30) {
        return Err("online window not applied".to_string());
    }
    if !config.store_settings().require_unique_email {
        return Err("unique email flag not applied".to_string());
    }
    Ok(())
}

#[test]
fn online_window_rejects_zero() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.membership.user_is_online_window_minutes = 0;
    assert_error(config.validate(), "must be between 1 and 1440")
}

#[test]
fn online_window_rejects_more_than_a_day() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.membership.user_is_online_window_minutes = MAX_ONLINE_WINDOW_MINUTES + 1;
    assert_error(config.validate(), "user_is_online_window_minutes")
}

#[test]
fn online_window_accepts_bounds() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    for minutes in [1, MAX_ONLINE_WINDOW_MINUTES] {
        config.membership.user_is_online_window_minutes = minutes;
        config.validate().map_err(|err| err.to_string())?;
    }
    Ok(())
}

#[test]
fn invalid_active_culture_is_rejected() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.localization.culture = Some("sv--SE".to_string());
    assert_error(config.validate(), "invalid localization.culture")
}
