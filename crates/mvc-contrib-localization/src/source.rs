// crates/mvc-contrib-localization/src/source.rs
// ============================================================================
// Module: Lookup Sources
// Description: The named-string lookup capability and a flat string table.
// Purpose: Let file, database, or in-memory tables back the resolver interchangeably.
// Dependencies: serde_json, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! A [`StringSource`] maps a key to an optional localized value. The resolver
//! treats every source as opaque and only ever calls [`StringSource::get`].
//! [`StringTable`] is the stock in-memory source and can be loaded from TOML
//! or JSON files holding a single flat table of string values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted size of a string table file in bytes.
pub const MAX_TABLE_FILE_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Lookup Capability
// ============================================================================

/// Named-string lookup capability.
///
/// # Invariants
/// - Lookups are read-only; absence is reported as `None`, never as an error.
pub trait StringSource {
    /// Returns the localized value for `key`, if this source has one.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: StringSource + ?Sized> StringSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: StringSource + ?Sized> StringSource for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: StringSource + ?Sized> StringSource for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl StringSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<H: std::hash::BuildHasher> StringSource for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading a string table.
#[derive(Debug, Error)]
pub enum StringTableError {
    /// I/O failure while reading the table file.
    #[error("string table io error: {0}")]
    Io(String),
    /// The table content could not be parsed.
    #[error("string table parse error: {0}")]
    Parse(String),
    /// The table file or its content is invalid.
    #[error("invalid string table: {0}")]
    Invalid(String),
    /// The table file exceeded the size limit.
    #[error("string table too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual file size in bytes.
        actual_bytes: usize,
    },
}

// ============================================================================
// SECTION: Table Formats
// ============================================================================

/// On-disk encoding of a string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFormat {
    /// Flat TOML table of `key = "value"` pairs.
    Toml,
    /// Flat JSON object of string values.
    Json,
}

impl TableFormat {
    /// Returns the canonical format label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Infers the format from a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: String Table
// ============================================================================

/// Flat in-memory table of localized strings.
///
/// # Invariants
/// - Keys are stored verbatim; lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    /// Key to localized value entries.
    entries: BTreeMap<String, String>,
}

impl StringTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from key/value pairs; later duplicates replace earlier ones.
    #[must_use]
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        }
    }

    /// Parses a flat TOML table.
    ///
    /// # Errors
    ///
    /// Returns [`StringTableError::Parse`] when the content is not a flat
    /// table of string values.
    pub fn from_toml_str(content: &str) -> Result<Self, StringTableError> {
        toml::from_str(content).map_err(|err| StringTableError::Parse(err.to_string()))
    }

    /// Parses a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`StringTableError::Parse`] when the content is not a flat
    /// object of string values.
    pub fn from_json_str(content: &str) -> Result<Self, StringTableError> {
        serde_json::from_str(content).map_err(|err| StringTableError::Parse(err.to_string()))
    }

    /// Parses table content in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`StringTableError::Parse`] when parsing fails.
    pub fn parse(content: &str, format: TableFormat) -> Result<Self, StringTableError> {
        match format {
            TableFormat::Toml => Self::from_toml_str(content),
            TableFormat::Json => Self::from_json_str(content),
        }
    }

    /// Loads a table from disk, inferring the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`StringTableError`] when the extension is unknown or reading
    /// and parsing fail.
    pub fn load(path: &Path) -> Result<Self, StringTableError> {
        let format = TableFormat::from_path(path).ok_or_else(|| {
            StringTableError::Invalid(format!(
                "cannot infer table format from {}",
                path.display()
            ))
        })?;
        Self::load_with_format(path, format)
    }

    /// Loads a table from disk using an explicit format.
    ///
    /// # Errors
    ///
    /// Returns [`StringTableError`] when the file is missing, too large, not
    /// UTF-8, or fails to parse.
    pub fn load_with_format(path: &Path, format: TableFormat) -> Result<Self, StringTableError> {
        let bytes = fs::read(path).map_err(|err| StringTableError::Io(err.to_string()))?;
        if bytes.len() > MAX_TABLE_FILE_BYTES {
            return Err(StringTableError::TooLarge {
                max_bytes: MAX_TABLE_FILE_BYTES,
                actual_bytes: bytes.len(),
            });
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| StringTableError::Invalid("table file must be utf-8".to_string()))?;
        let table = Self::parse(content, format)?;
        tracing::debug!(
            path = %path.display(),
            format = format.as_str(),
            entries = table.len(),
            "loaded string table"
        );
        Ok(table)
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl StringSource for StringTable {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
