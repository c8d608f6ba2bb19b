// crates/mvc-contrib-localization/tests/culture.rs
// ============================================================================
// Module: Culture Fallback Tests
// Description: Validate culture name parsing and fallback resolution.
// Purpose: Ensure specific cultures fall back to parents and then invariant.
// Dependencies: mvc-contrib-localization
// ============================================================================

//! ## Overview
//! Covers [`CultureName`] normalization and [`CultureStringTables`] lookups,
//! both alone and as a source inside the resolver.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use mvc_contrib_localization::CultureName;
use mvc_contrib_localization::CultureStringTables;
use mvc_contrib_localization::LocalizedStringProvider;
use mvc_contrib_localization::ResourceStringProvider;
use mvc_contrib_localization::StringSource;
use mvc_contrib_localization::StringTable;

fn culture(tag: &str) -> CultureName {
    CultureName::parse(tag).unwrap()
}

fn sample_tables() -> CultureStringTables {
    CultureStringTables::new(culture("sv-SE"))
        .with_table(
            CultureName::invariant(),
            StringTable::from_entries([
                ("User_Name", "Name"),
                ("User_Age", "Age"),
                ("User_City", "City"),
            ]),
        )
        .with_table(
            culture("sv"),
            StringTable::from_entries([("User_Name", "Namn"), ("User_Age", "Ålder")]),
        )
        .with_table(culture("sv-SE"), StringTable::from_entries([("User_Name", "Namn (SE)")]))
}

#[test]
fn parse_normalizes_separators_and_case() {
    assert_eq!(culture("EN_us").as_str(), "en-US");
    assert_eq!(culture(" sv-se ").as_str(), "sv-SE");
    assert_eq!(culture("zh-Hant-TW").as_str(), "zh-Hant-TW");
    assert_eq!(culture("es-419").as_str(), "es-419");
}

#[test]
fn parse_blank_is_invariant() {
    assert!(culture("").is_invariant());
    assert!(culture("   ").is_invariant());
    assert_eq!(CultureName::invariant().to_string(), "invariant");
}

#[test]
fn parse_rejects_malformed_tags() {
    assert_eq!(CultureName::parse("en--US"), None);
    assert_eq!(CultureName::parse("en-"), None);
    assert_eq!(CultureName::parse("en US"), None);
    assert_eq!(CultureName::parse("en.US"), None);
}

#[test]
fn fallback_chain_ends_with_invariant() {
    let chain: Vec<String> =
        culture("zh-Hant-TW").fallback_chain().iter().map(|c| c.as_str().to_string()).collect();
    assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh", ""]);
    assert_eq!(CultureName::invariant().fallback_chain(), vec![CultureName::invariant()]);
    assert_eq!(CultureName::invariant().parent(), None);
}

#[test]
fn specific_culture_wins_over_parent() {
    let tables = sample_tables();
    assert_eq!(tables.get("User_Name").as_deref(), Some("Namn (SE)"));
}

#[test]
fn falls_back_to_parent_then_invariant() {
    let tables = sample_tables();
    assert_eq!(tables.get("User_Age").as_deref(), Some("Ålder"));
    assert_eq!(tables.get("User_City").as_deref(), Some("City"));
    assert_eq!(tables.get("User_Zip"), None);
}

#[test]
fn with_culture_shares_tables() {
    let tables = sample_tables();
    let finnish_swedish = tables.with_culture(culture("sv-FI"));
    assert_eq!(finnish_swedish.culture().as_str(), "sv-FI");
    assert_eq!(finnish_swedish.get("User_Name").as_deref(), Some("Namn"));
    let english = tables.with_culture(culture("en-GB"));
    assert_eq!(english.get("User_Name").as_deref(), Some("Name"));
    assert_eq!(tables.cultures().count(), 3);
}

#[test]
fn default_tables_use_invariant_culture() {
    let tables = CultureStringTables::default()
        .with_table(
            CultureName::invariant(),
            StringTable::from_entries([("Required", "Required")]),
        );
    assert_eq!(tables.get("Required").as_deref(), Some("Required"));
}

#[test]
fn culture_tables_plug_into_resolver() {
    let provider = ResourceStringProvider::empty()
        .with_source(sample_tables())
        .with_source(StringTable::from_entries([("User_Zip", "Zip code")]));
    assert_eq!(provider.resolve_model_string("User", "Name").as_deref(), Some("Namn (SE)"));
    assert_eq!(provider.resolve_model_string("User", "Zip").as_deref(), Some("Zip code"));
}

#[test]
fn culture_name_deserializes_with_normalization() {
    let parsed: CultureName = serde_json::from_str("\"pt_br\"").unwrap();
    assert_eq!(parsed.as_str(), "pt-BR");
    assert!(serde_json::from_str::<CultureName>("\"pt br\"").is_err());
}
