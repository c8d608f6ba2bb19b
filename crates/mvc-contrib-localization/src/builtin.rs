// crates/mvc-contrib-localization/src/builtin.rs
// ============================================================================
// Module: Built-In Validation Messages
// Description: Default English validation messages and placeholder formatting.
// Purpose: Provide a last-resort source and render `{0}`-style templates.
// Dependencies: crate::source
// ============================================================================

//! ## Overview
//! [`BuiltinValidationMessages`] is a static English catalog keyed the same
//! way the resolver keys validation strings (`Required`, `Range`, ...). Hosts
//! register it as the last source so untranslated attributes still render a
//! sensible message. Templates use positional placeholders rendered with
//! [`format_message`].
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Placeholder substitution is single-pass; substituted values are never
//!   re-scanned for placeholders.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::source::StringSource;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English validation messages keyed by attribute key.
const CATALOG_EN: &[(&str, &str)] = &[
    ("Required", "The {0} field is required."),
    ("StringLength", "The field {0} must be a string with a maximum length of {1}."),
    ("Range", "The field {0} must be between {1} and {2}."),
    ("RegularExpression", "The field {0} must match the regular expression '{1}'."),
    ("Compare", "'{0}' and '{1}' do not match."),
    ("EmailAddress", "The {0} field is not a valid e-mail address."),
    ("MinLength", "The field {0} must be a string or array type with a minimum length of '{1}'."),
    ("MaxLength", "The field {0} must be a string or array type with a maximum length of '{1}'."),
    ("Url", "The {0} field is not a valid fully-qualified http, https, or ftp URL."),
    ("Phone", "The {0} field is not a valid phone number."),
    ("CreditCard", "The {0} field is not a valid credit card number."),
];

/// Returns the lazily built catalog map.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

/// Default English validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinValidationMessages;

impl BuiltinValidationMessages {
    /// Returns the catalog keys in declaration order.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        CATALOG_EN.iter().map(|(key, _)| *key)
    }

    /// Returns the template for `key` without allocating.
    #[must_use]
    pub fn template(key: &str) -> Option<&'static str> {
        catalog().get(key).copied()
    }
}

impl StringSource for BuiltinValidationMessages {
    fn get(&self, key: &str) -> Option<String> {
        Self::template(key).map(str::to_string)
    }
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Renders a template by substituting positional `{N}` placeholders.
///
/// `{{` and `}}` produce literal braces. Placeholders whose index has no
/// argument, and malformed placeholders, are copied through unchanged.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(position) = rest.find(['{', '}']) {
        output.push_str(&rest[.. position]);
        let tail = &rest[position ..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            output.push_str(&tail[.. 1]);
            rest = &tail[2 ..];
            continue;
        }
        if tail.starts_with('}') {
            output.push('}');
            rest = &tail[1 ..];
            continue;
        }
        match placeholder_index(tail) {
            Some((index, consumed)) => {
                match args.get(index) {
                    Some(value) => output.push_str(value),
                    None => output.push_str(&tail[.. consumed]),
                }
                rest = &tail[consumed ..];
            }
            None => {
                output.push('{');
                rest = &tail[1 ..];
            }
        }
    }
    output.push_str(rest);
    output
}

/// Parses `{N}` at the start of `text`, returning the index and bytes consumed.
fn placeholder_index(text: &str) -> Option<(usize, usize)> {
    let inner = text.strip_prefix('{')?;
    let close = inner.find('}')?;
    let digits = &inner[.. close];
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 2))
}
