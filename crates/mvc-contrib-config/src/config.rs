// crates/mvc-contrib-config/src/config.rs
// ============================================================================
// Module: MVC Contrib Configuration
// Description: Configuration loading and validation for MVC Contrib crates.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: mvc-contrib-localization, mvc-contrib-membership, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed. A validated config wires the
//! ordered localization sources into a [`ResourceStringProvider`] and exposes
//! the membership online policy and store settings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use mvc_contrib_localization::BuiltinValidationMessages;
use mvc_contrib_localization::CultureName;
use mvc_contrib_localization::CultureStringTables;
use mvc_contrib_localization::ResourceStringProvider;
use mvc_contrib_localization::SharedStringSource;
use mvc_contrib_localization::StringTable;
use mvc_contrib_localization::StringTableError;
use mvc_contrib_localization::TableFormat;
use mvc_contrib_membership::DEFAULT_ONLINE_WINDOW_MINUTES;
use mvc_contrib_membership::OnlinePolicy;
use mvc_contrib_membership::StoreSettings;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "mvc-contrib.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "MVC_CONTRIB_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of localization sources.
pub const MAX_LOCALIZATION_SOURCES: usize = 64;
/// Maximum length of a localization source name.
pub const MAX_SOURCE_NAME_LENGTH: usize = 128;
/// Minimum online window in minutes.
pub const MIN_ONLINE_WINDOW_MINUTES: u32 = 1;
/// Maximum online window in minutes (one day).
pub const MAX_ONLINE_WINDOW_MINUTES: u32 = 1_440;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// MVC Contrib configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContribConfig {
    /// Localization source configuration.
    #[serde(default)]
    pub localization: LocalizationConfig,
    /// Membership configuration.
    #[serde(default)]
    pub membership: MembershipConfig,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl ContribConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// `mvc-contrib.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml_str(content)?;
        tracing::info!(
            path = %resolved.display(),
            sources = config.localization.sources.len(),
            "config loaded"
        );
        config.source_path = Some(resolved);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.localization.validate()?;
        self.membership.validate()?;
        Ok(())
    }

    /// Returns the directory relative source paths resolve against.
    ///
    /// This is the loaded file's directory, or `.` for configs built in memory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.source_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Builds the localization provider with sources relative to [`Self::base_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a string table cannot be loaded.
    pub fn build_provider(&self) -> Result<ResourceStringProvider, ConfigError> {
        self.localization.build_provider(self.base_dir())
    }

    /// Returns the configured membership online policy.
    #[must_use]
    pub fn online_policy(&self) -> OnlinePolicy {
        self.membership.online_policy()
    }

    /// Returns the configured account store settings.
    #[must_use]
    pub const fn store_settings(&self) -> StoreSettings {
        self.membership.store_settings()
    }
}

// ============================================================================
// SECTION: Localization
// ============================================================================

/// Localization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationConfig {
    /// String sources in precedence order.
    #[serde(default)]
    pub sources: Vec<StringSourceConfig>,
    /// Appends the built-in validation messages after configured sources.
    #[serde(default = "default_builtin_validation_messages")]
    pub builtin_validation_messages: bool,
    /// Active culture for culture-tagged sources (invariant when unset).
    #[serde(default)]
    pub culture: Option<String>,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            builtin_validation_messages: default_builtin_validation_messages(),
            culture: None,
        }
    }
}

impl LocalizationConfig {
    /// Validates localization configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.len() > MAX_LOCALIZATION_SOURCES {
            return Err(ConfigError::Invalid("too many localization sources".to_string()));
        }
        self.active_culture()?;
        // Plain names are unique; culture-tagged names may repeat once per culture.
        let mut kinds: BTreeMap<&str, bool> = BTreeMap::new();
        let mut tagged: BTreeSet<(&str, CultureName)> = BTreeSet::new();
        for source in &self.sources {
            source.validate()?;
            let culture = source.culture_name()?;
            let is_tagged = culture.is_some();
            if let Some(previous) = kinds.insert(source.name.as_str(), is_tagged)
                && (!previous || !is_tagged)
            {
                return Err(ConfigError::Invalid(format!(
                    "duplicate localization source name: {}",
                    source.name
                )));
            }
            if let Some(culture) = culture
                && !tagged.insert((source.name.as_str(), culture.clone()))
            {
                return Err(ConfigError::Invalid(format!(
                    "duplicate culture {culture} for localization source {}",
                    source.name
                )));
            }
        }
        Ok(())
    }

    /// Returns the parsed active culture.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the culture tag is malformed.
    pub fn active_culture(&self) -> Result<CultureName, ConfigError> {
        match &self.culture {
            None => Ok(CultureName::invariant()),
            Some(value) => CultureName::parse(value).ok_or_else(|| {
                ConfigError::Invalid(format!("invalid localization.culture: {value}"))
            }),
        }
    }

    /// Loads every configured source and builds the ordered provider.
    ///
    /// Culture-tagged sources sharing a name become one culture fallback
    /// source placed at the position of the group's first entry. Built-in
    /// validation messages, when enabled, are queried last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation fails or a table cannot be loaded.
    pub fn build_provider(&self, base_dir: &Path) -> Result<ResourceStringProvider, ConfigError> {
        self.validate()?;
        let active = self.active_culture()?;
        let mut pending: Vec<PendingSource> = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let table = source.load_table(base_dir)?;
            let Some(culture) = source.culture_name()? else {
                pending.push(PendingSource::Table(table));
                continue;
            };
            let group = pending.iter_mut().find_map(|entry| match entry {
                PendingSource::Cultures {
                    name,
                    tables,
                } if *name == source.name => Some(tables),
                PendingSource::Table(_) | PendingSource::Cultures { .. } => None,
            });
            if let Some(tables) = group {
                tables.insert(culture, table);
            } else {
                pending.push(PendingSource::Cultures {
                    name: source.name.clone(),
                    tables: BTreeMap::from([(culture, table)]),
                });
            }
        }
        let mut sources: Vec<SharedStringSource> = pending
            .into_iter()
            .map(|entry| match entry {
                PendingSource::Table(table) => Arc::new(table) as SharedStringSource,
                PendingSource::Cultures {
                    tables, ..
                } => Arc::new(CultureStringTables::from_tables(active.clone(), tables))
                    as SharedStringSource,
            })
            .collect();
        if self.builtin_validation_messages {
            sources.push(Arc::new(BuiltinValidationMessages));
        }
        tracing::info!(
            sources = sources.len(),
            culture = %active,
            builtin = self.builtin_validation_messages,
            "localization provider built"
        );
        Ok(ResourceStringProvider::new(sources))
    }
}

/// One configured string table file.
#[derive(Debug, Clone, Deserialize)]
pub struct StringSourceConfig {
    /// Source name; culture-tagged entries sharing a name form one group.
    pub name: String,
    /// Table file path, relative to the config directory unless absolute.
    pub path: String,
    /// Explicit table format; inferred from the extension when unset.
    #[serde(default)]
    pub format: Option<TableFormat>,
    /// Culture this table serves; an empty string tags the invariant table.
    #[serde(default)]
    pub culture: Option<String>,
}

impl StringSourceConfig {
    /// Validates a single source entry.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "localization.sources.name must be non-empty".to_string(),
            ));
        }
        if self.name.trim() != self.name {
            return Err(ConfigError::Invalid(format!(
                "localization.sources.name must not have surrounding whitespace: '{}'",
                self.name
            )));
        }
        if self.name.len() > MAX_SOURCE_NAME_LENGTH {
            return Err(ConfigError::Invalid(
                "localization.sources.name exceeds max length".to_string(),
            ));
        }
        validate_path_string("localization.sources.path", &self.path)?;
        if self.format.is_none() && TableFormat::from_path(Path::new(self.path.trim())).is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "cannot infer table format for localization source {}; set format",
                self.name
            )));
        }
        Ok(())
    }

    /// Returns the parsed culture tag, if the source is culture-tagged.
    fn culture_name(&self) -> Result<Option<CultureName>, ConfigError> {
        self.culture
            .as_deref()
            .map(|value| {
                CultureName::parse(value).ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "invalid culture for localization source {}: {value}",
                        self.name
                    ))
                })
            })
            .transpose()
    }

    /// Returns the table path resolved against `base_dir`.
    #[must_use]
    pub fn resolve_path(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(self.path.trim());
        if path.is_absolute() { path.to_path_buf() } else { base_dir.join(path) }
    }

    /// Loads the string table for this source.
    fn load_table(&self, base_dir: &Path) -> Result<StringTable, ConfigError> {
        let path = self.resolve_path(base_dir);
        let loaded = match self.format {
            Some(format) => StringTable::load_with_format(&path, format),
            None => StringTable::load(&path),
        };
        loaded.map_err(|err| match err {
            StringTableError::Io(message) => {
                ConfigError::Io(format!("localization source {}: {message}", self.name))
            }
            other => ConfigError::Invalid(format!("localization source {}: {other}", self.name)),
        })
    }
}

/// Source awaiting conversion into a provider entry.
enum PendingSource {
    /// Plain table.
    Table(StringTable),
    /// Culture-tagged tables sharing one source name.
    Cultures {
        /// Group name.
        name: String,
        /// Tables by culture.
        tables: BTreeMap<CultureName, StringTable>,
    },
}

// ============================================================================
// SECTION: Membership
// ============================================================================

/// Membership configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MembershipConfig {
    /// Minutes after the last activity during which a user counts as online.
    #[serde(default = "default_online_window_minutes")]
    pub user_is_online_window_minutes: u32,
    /// Reject accounts whose e-mail is already used within the application.
    #[serde(default)]
    pub require_unique_email: bool,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            user_is_online_window_minutes: default_online_window_minutes(),
            require_unique_email: false,
        }
    }
}

impl MembershipConfig {
    /// Validates membership configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let window = self.user_is_online_window_minutes;
        if !(MIN_ONLINE_WINDOW_MINUTES ..= MAX_ONLINE_WINDOW_MINUTES).contains(&window) {
            return Err(ConfigError::Invalid(format!(
                "membership.user_is_online_window_minutes must be between \
                 {MIN_ONLINE_WINDOW_MINUTES} and {MAX_ONLINE_WINDOW_MINUTES}"
            )));
        }
        Ok(())
    }

    /// Returns the online policy for the configured window.
    #[must_use]
    pub fn online_policy(&self) -> OnlinePolicy {
        OnlinePolicy::from_minutes(self.user_is_online_window_minutes)
    }

    /// Returns account store settings.
    #[must_use]
    pub const fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            require_unique_email: self.require_unique_email,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration or referenced files.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default for [`LocalizationConfig::builtin_validation_messages`].
const fn default_builtin_validation_messages() -> bool {
    true
}

/// Default for [`MembershipConfig::user_is_online_window_minutes`].
const fn default_online_window_minutes() -> u32 {
    DEFAULT_ONLINE_WINDOW_MINUTES
}

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
