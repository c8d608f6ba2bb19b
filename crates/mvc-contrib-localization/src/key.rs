// crates/mvc-contrib-localization/src/key.rs
// ============================================================================
// Module: Composite Keys
// Description: Key formatting for model, metadata, and validation lookups.
// Purpose: Derive lookup keys deterministically from type and property names.
// Dependencies: Standard library only.
// ============================================================================

//! ## Overview
//! Model strings are keyed `TypeName_PropertyName`, with any extra qualifiers
//! appended as `_Qualifier` in the order supplied. Validation strings are
//! keyed by the attribute type name with every `Attribute` substring removed,
//! so `RequiredAttribute` becomes `Required`.
//!
//! ## Invariants
//! - Formatting is pure; the same inputs always produce the same key.
//! - Removal of `Attribute` is global, not suffix-only: `AttributeRequiredAttribute`
//!   also becomes `Required`. Existing translation tables depend on this.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator placed between key parts.
pub const KEY_SEPARATOR: char = '_';

/// Substring removed from attribute type names to form validation keys.
const ATTRIBUTE_MARKER: &str = "Attribute";

// ============================================================================
// SECTION: Metadata Names
// ============================================================================

/// Documented model metadata qualifiers.
///
/// Metadata lookups accept any string; these are the names hosts are expected
/// to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataName {
    /// Placeholder text shown in empty inputs.
    Watermark,
    /// Longer description of the property.
    Description,
    /// Text displayed when the value is null.
    NullDisplayText,
    /// Abbreviated display name.
    ShortDisplayText,
}

impl MetadataName {
    /// All documented metadata names, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Watermark, Self::Description, Self::NullDisplayText, Self::ShortDisplayText];

    /// Returns the key qualifier for this metadata name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Watermark => "Watermark",
            Self::Description => "Description",
            Self::NullDisplayText => "NullDisplayText",
            Self::ShortDisplayText => "ShortDisplayText",
        }
    }

    /// Parses a documented metadata name (exact match).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == value)
    }
}

impl AsRef<str> for MetadataName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ============================================================================
// SECTION: Formatter
// ============================================================================

/// Strategy for turning names into lookup keys.
///
/// Override this to change how keys are shaped while keeping the resolver's
/// fallback behavior.
pub trait KeyFormatter {
    /// Builds the key for a model property plus optional qualifiers.
    fn model_key(&self, type_name: &str, property_name: &str, extras: &[&str]) -> String;

    /// Builds the key for a validation attribute type name.
    fn validation_key(&self, attribute_type_name: &str) -> String;
}

/// Default formatter joining parts with [`KEY_SEPARATOR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnderscoreKeyFormatter;

impl KeyFormatter for UnderscoreKeyFormatter {
    fn model_key(&self, type_name: &str, property_name: &str, extras: &[&str]) -> String {
        let capacity = type_name.len()
            + property_name.len()
            + 1
            + extras.iter().map(|extra| extra.len() + 1).sum::<usize>();
        let mut key = String::with_capacity(capacity);
        key.push_str(type_name);
        key.push(KEY_SEPARATOR);
        key.push_str(property_name);
        for extra in extras {
            key.push(KEY_SEPARATOR);
            key.push_str(extra);
        }
        key
    }

    fn validation_key(&self, attribute_type_name: &str) -> String {
        attribute_type_name.replace(ATTRIBUTE_MARKER, "")
    }
}

// ============================================================================
// SECTION: Type Names
// ============================================================================

/// Returns the unqualified name of `T`, without module path or generics.
///
/// `my_app::models::User` becomes `User` and `Wrapper<my_app::Inner>` becomes
/// `Wrapper`.
#[must_use]
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
