// crates/mvc-contrib-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example `mvc-contrib.toml`. The output is static and must stay
//! valid against [`crate::ContribConfig::validate`].

/// Returns a canonical example `mvc-contrib.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[localization]
culture = "sv-SE"
builtin_validation_messages = true

# Sources are queried in order; the first hit wins.
[[localization.sources]]
name = "overrides"
path = "resources/overrides.toml"

[[localization.sources]]
name = "site"
path = "resources/site.sv.json"
culture = "sv"

# An empty culture tags the invariant table of the "site" group.
[[localization.sources]]
name = "site"
path = "resources/site.toml"
culture = ""

[[localization.sources]]
name = "legacy"
path = "resources/legacy.strings"
format = "toml"

[membership]
user_is_online_window_minutes = 15
require_unique_email = true
"#,
    )
}
