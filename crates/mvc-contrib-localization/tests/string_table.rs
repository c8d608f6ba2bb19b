// crates/mvc-contrib-localization/tests/string_table.rs
// ============================================================================
// Module: String Table Tests
// Description: Validate parsing and file loading for flat string tables.
// Purpose: Ensure tables load from TOML and JSON and reject malformed input.
// Dependencies: mvc-contrib-localization, tempfile
// ============================================================================

//! ## Overview
//! File-backed tables are the common lookup source; these tests cover format
//! inference, size limits, and parse failures.

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

use std::fs;

use mvc_contrib_localization::MAX_TABLE_FILE_BYTES;
use mvc_contrib_localization::StringSource;
use mvc_contrib_localization::StringTable;
use mvc_contrib_localization::StringTableError;
use mvc_contrib_localization::TableFormat;
use tempfile::TempDir;

#[test]
fn parses_flat_toml_table() {
    let table = StringTable::from_toml_str(
        r#"
User_FirstName = "Förnamn"
User_FirstName_Watermark = "t.ex. Anna"
Required = "{0} krävs."
"#,
    )
    .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("User_FirstName").as_deref(), Some("Förnamn"));
    assert_eq!(table.get("Required").as_deref(), Some("{0} krävs."));
    assert_eq!(table.get("user_firstname"), None);
}

#[test]
fn parses_flat_json_object() {
    let table =
        StringTable::from_json_str(r#"{"User_Age": "Age", "Range": "Out of range"}"#).unwrap();
    assert_eq!(table.get("User_Age").as_deref(), Some("Age"));
    assert_eq!(table.get("Range").as_deref(), Some("Out of range"));
}

#[test]
fn rejects_nested_toml_tables() {
    let result = StringTable::from_toml_str("[User]\nFirstName = \"First\"\n");
    assert!(matches!(result, Err(StringTableError::Parse(_))));
}

#[test]
fn rejects_non_string_json_values() {
    let result = StringTable::from_json_str(r#"{"User_Age": 42}"#);
    assert!(matches!(result, Err(StringTableError::Parse(_))));
}

#[test]
fn loads_tables_by_extension() {
    let temp = TempDir::new().unwrap();
    let toml_path = temp.path().join("strings.toml");
    let json_path = temp.path().join("strings.JSON");
    fs::write(&toml_path, "User_Name = \"Name\"\n").unwrap();
    fs::write(&json_path, r#"{"User_Name": "Nom"}"#).unwrap();

    assert_eq!(StringTable::load(&toml_path).unwrap().get("User_Name").as_deref(), Some("Name"));
    assert_eq!(StringTable::load(&json_path).unwrap().get("User_Name").as_deref(), Some("Nom"));
}

#[test]
fn load_rejects_unknown_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("strings.resx");
    fs::write(&path, "<root/>").unwrap();
    assert!(matches!(StringTable::load(&path), Err(StringTableError::Invalid(_))));
}

#[test]
fn load_with_explicit_format_ignores_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("strings.txt");
    fs::write(&path, "Required = \"Needed\"\n").unwrap();
    let table = StringTable::load_with_format(&path, TableFormat::Toml).unwrap();
    assert_eq!(table.get("Required").as_deref(), Some("Needed"));
}

#[test]
fn load_reports_missing_file_as_io_error() {
    let temp = TempDir::new().unwrap();
    let result = StringTable::load(&temp.path().join("missing.toml"));
    assert!(matches!(result, Err(StringTableError::Io(_))));
}

#[test]
fn load_rejects_oversized_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("huge.json");
    fs::write(&path, vec![b' '; MAX_TABLE_FILE_BYTES + 1]).unwrap();
    match StringTable::load(&path) {
        Err(StringTableError::TooLarge { max_bytes, actual_bytes }) => {
            assert_eq!(max_bytes, MAX_TABLE_FILE_BYTES);
            assert_eq!(actual_bytes, MAX_TABLE_FILE_BYTES + 1);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn load_rejects_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, [0xff_u8, 0xfe, 0x00]).unwrap();
    assert!(matches!(StringTable::load(&path), Err(StringTableError::Invalid(_))));
}

#[test]
fn insert_replaces_and_iterates_in_key_order() {
    let mut table = StringTable::new();
    assert!(table.is_empty());
    assert_eq!(table.insert("b", "2"), None);
    assert_eq!(table.insert("a", "1"), None);
    assert_eq!(table.insert("b", "two").as_deref(), Some("2"));
    let entries: Vec<_> = table.iter().collect();
    assert_eq!(entries, vec![("a", "1"), ("b", "two")]);
}

#[test]
fn table_collects_from_iterator() {
    let table: StringTable = [("x", "1"), ("y", "2")].into_iter().collect();
    assert_eq!(table.len(), 2);
}
