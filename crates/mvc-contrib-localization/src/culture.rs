// crates/mvc-contrib-localization/src/culture.rs
// ============================================================================
// Module: Culture Fallback Tables
// Description: Culture-tagged string tables with parent-culture fallback.
// Purpose: Resolve `sv-SE`, then `sv`, then invariant strings from one source.
// Dependencies: crate::source, serde
// ============================================================================

//! ## Overview
//! A [`CultureStringTables`] source holds one [`StringTable`] per culture and
//! an active culture fixed at construction. Lookups walk the active culture's
//! fallback chain: the full tag, each parent obtained by dropping the last
//! subtag, and finally the invariant table.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::source::StringSource;
use crate::source::StringTable;

// ============================================================================
// SECTION: Culture Names
// ============================================================================

/// Normalized culture tag such as `en`, `sv-SE`, or the invariant culture.
///
/// # Invariants
/// - Subtags are separated by `-`.
/// - The language subtag is lowercase; a two-letter region subtag is uppercase.
/// - The invariant culture is the empty tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CultureName(String);

impl CultureName {
    /// Returns the invariant culture.
    #[must_use]
    pub const fn invariant() -> Self {
        Self(String::new())
    }

    /// Parses and normalizes a culture tag (`en_us` becomes `en-US`).
    ///
    /// Blank input parses as the invariant culture. Returns `None` when a
    /// subtag is empty or contains characters other than ASCII alphanumerics.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(Self::invariant());
        }
        let mut normalized = String::with_capacity(trimmed.len());
        for (index, subtag) in trimmed.split(['-', '_']).enumerate() {
            if subtag.is_empty() || !subtag.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return None;
            }
            if index == 0 {
                normalized.push_str(&subtag.to_ascii_lowercase());
            } else {
                normalized.push('-');
                if subtag.len() == 2 && subtag.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    normalized.push_str(&subtag.to_ascii_uppercase());
                } else {
                    normalized.push_str(subtag);
                }
            }
        }
        Some(Self(normalized))
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the invariant culture.
    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the parent culture, or `None` for the invariant culture.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_invariant() {
            return None;
        }
        Some(self.0.rsplit_once('-').map_or_else(Self::invariant, |(parent, _)| {
            Self(parent.to_string())
        }))
    }

    /// Returns this culture followed by each ancestor, ending with invariant.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.parent();
        while let Some(culture) = current {
            current = culture.parent();
            chain.push(culture);
        }
        chain
    }
}

impl Default for CultureName {
    fn default() -> Self {
        Self::invariant()
    }
}

impl fmt::Display for CultureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            self.0.fmt(f)
        }
    }
}

impl TryFrom<String> for CultureName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid culture name: {value}"))
    }
}

impl From<CultureName> for String {
    fn from(value: CultureName) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Culture Tables
// ============================================================================

/// String source resolving through a culture fallback chain.
///
/// # Invariants
/// - The active culture never changes; [`CultureStringTables::with_culture`]
///   returns a new view over the same tables.
#[derive(Debug, Clone)]
pub struct CultureStringTables {
    /// Tables keyed by culture, shared between views.
    tables: Arc<BTreeMap<CultureName, StringTable>>,
    /// Active culture for lookups.
    culture: CultureName,
    /// Cached fallback chain for the active culture.
    chain: Vec<CultureName>,
}

impl CultureStringTables {
    /// Creates tables for `culture`, initially empty.
    #[must_use]
    pub fn new(culture: CultureName) -> Self {
        Self::from_tables(culture, BTreeMap::new())
    }

    /// Creates tables for `culture` from a prepared culture map.
    #[must_use]
    pub fn from_tables(culture: CultureName, tables: BTreeMap<CultureName, StringTable>) -> Self {
        let chain = culture.fallback_chain();
        Self {
            tables: Arc::new(tables),
            culture,
            chain,
        }
    }

    /// Adds or replaces the table for `culture`.
    #[must_use]
    pub fn with_table(self, culture: CultureName, table: StringTable) -> Self {
        let mut tables = Arc::unwrap_or_clone(self.tables);
        tables.insert(culture, table);
        Self {
            tables: Arc::new(tables),
            culture: self.culture,
            chain: self.chain,
        }
    }

    /// Returns a view over the same tables for another culture.
    #[must_use]
    pub fn with_culture(&self, culture: CultureName) -> Self {
        let chain = culture.fallback_chain();
        Self {
            tables: Arc::clone(&self.tables),
            culture,
            chain,
        }
    }

    /// Returns the active culture.
    #[must_use]
    pub const fn culture(&self) -> &CultureName {
        &self.culture
    }

    /// Returns the cultures that have tables, in sorted order.
    pub fn cultures(&self) -> impl Iterator<Item = &CultureName> {
        self.tables.keys()
    }
}

impl Default for CultureStringTables {
    fn default() -> Self {
        Self::new(CultureName::invariant())
    }
}

impl StringSource for CultureStringTables {
    fn get(&self, key: &str) -> Option<String> {
        self.chain
            .iter()
            .filter_map(|culture| self.tables.get(culture))
            .find_map(|table| table.get(key))
    }
}
