// crates/mvc-contrib-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for mvc-contrib-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::Path;

use mvc_contrib_config::ConfigError;
use mvc_contrib_config::ContribConfig;
use mvc_contrib_config::StringSourceConfig;

/// Result type used by config tests.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into a `ContribConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<ContribConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<ContribConfig, toml::de::Error> {
    config_from_toml("")
}

/// Builds a source entry with no explicit format.
pub fn source(name: &str, path: &str, culture: Option<&str>) -> StringSourceConfig {
    StringSourceConfig {
        name: name.to_string(),
        path: path.to_string(),
        format: None,
        culture: culture.map(str::to_string),
    }
}

/// Writes `content` to `dir/name`.
pub fn write_file(dir: &Path, name: &str, content: &str) -> TestResult {
    fs::write(dir.join(name), content).map_err(|err| err.to_string())
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_error<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected config error".to_string()),
    }
}
