// crates/mvc-contrib-localization/tests/builtin.rs
// ============================================================================
// Module: Built-In Message Tests
// Description: Validate the default validation catalog and message formatting.
// Purpose: Ensure fallback messages exist and placeholders render predictably.
// Dependencies: mvc-contrib-localization
// ============================================================================

//! ## Overview
//! Checks [`BuiltinValidationMessages`] coverage and [`format_message`]
//! placeholder handling.

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

use mvc_contrib_localization::BuiltinValidationMessages;
use mvc_contrib_localization::LocalizedStringProvider;
use mvc_contrib_localization::ResourceStringProvider;
use mvc_contrib_localization::StringSource;
use mvc_contrib_localization::format_message;

#[test]
fn catalog_covers_common_attributes() {
    let keys = [
        "Required",
        "StringLength",
        "Range",
        "RegularExpression",
        "Compare",
        "EmailAddress",
    ];
    for key in keys {
        assert!(BuiltinValidationMessages.get(key).is_some(), "missing {key}");
    }
    assert_eq!(BuiltinValidationMessages::keys().count(), 11);
    assert_eq!(BuiltinValidationMessages.get("Unknown"), None);
}

#[test]
fn every_template_mentions_the_field() {
    for key in BuiltinValidationMessages::keys() {
        let template = BuiltinValidationMessages::template(key).unwrap();
        assert!(template.contains("{0}"), "{key} template lacks {{0}}");
    }
}

#[test]
fn builtin_source_resolves_validation_attributes() {
    let provider = ResourceStringProvider::empty().with_source(BuiltinValidationMessages);
    let template = provider.resolve_validation_string("RequiredAttribute").unwrap();
    assert_eq!(format_message(&template, &["Email"]), "The Email field is required.");
}

#[test]
fn format_substitutes_positional_arguments() {
    let rendered =
        format_message("The field {0} must be between {1} and {2}.", &["Age", "18", "99"]);
    assert_eq!(rendered, "The field Age must be between 18 and 99.");
}

#[test]
fn format_allows_repeated_and_reordered_placeholders() {
    assert_eq!(format_message("{1}-{0}-{1}", &["a", "b"]), "b-a-b");
}

#[test]
fn format_leaves_missing_arguments_verbatim() {
    assert_eq!(format_message("{0} and {3}", &["x"]), "x and {3}");
}

#[test]
fn format_handles_escaped_and_malformed_braces() {
    assert_eq!(format_message("{{0}} is {0}", &["v"]), "{0} is v");
    assert_eq!(format_message("{name} {0", &["v"]), "{name} {0");
    assert_eq!(format_message("a } b", &[]), "a } b");
    assert_eq!(format_message("{}", &["v"]), "{}");
}

#[test]
fn format_does_not_rescan_substituted_values() {
    assert_eq!(format_message("{0}{1}", &["{1}", "x"]), "{1}x");
}

#[test]
fn format_preserves_multibyte_text() {
    assert_eq!(
        format_message("Fältet {0} krävs – {1}", &["Ålder", "ok"]),
        "Fältet Ålder krävs – ok"
    );
}
