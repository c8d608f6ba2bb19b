// crates/mvc-contrib-localization/src/provider.rs
// ============================================================================
// Module: Resource String Provider
// Description: Ordered multi-source resolver for localized model strings.
// Purpose: Return the first translation found across prioritized sources.
// Dependencies: crate::{key, source}, tracing
// ============================================================================

//! ## Overview
//! [`ResourceStringProvider`] holds an ordered list of lookup sources and
//! resolves a composite key against them. The first source returning a value
//! wins. When no source knows the key the provider returns `None`; missing
//! translations are an expected runtime state, and callers pick their own
//! fallback text.
//!
//! ## Invariants
//! - Source order is fixed at construction and is the fallback precedence.
//! - Resolution never fails and has no side effects besides log events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::key::KeyFormatter;
use crate::key::UnderscoreKeyFormatter;
use crate::key::short_type_name;
use crate::source::StringSource;

// ============================================================================
// SECTION: Provider Interface
// ============================================================================

/// Localized string lookups used by view rendering and validation layers.
pub trait LocalizedStringProvider {
    /// Resolves the display string for a model property (`TypeName_PropertyName`).
    fn resolve_model_string(&self, type_name: &str, property_name: &str) -> Option<String>;

    /// Resolves a metadata string for a model property
    /// (`TypeName_PropertyName_MetadataName`).
    ///
    /// Expected metadata names are listed in [`crate::MetadataName`]; other
    /// values are looked up as given.
    fn resolve_model_metadata(
        &self,
        type_name: &str,
        property_name: &str,
        metadata_name: &str,
    ) -> Option<String>;

    /// Resolves the message for a validation attribute type name.
    fn resolve_validation_string(&self, attribute_type_name: &str) -> Option<String>;

    /// Resolves the display string for a property of `T`.
    fn model_string_for<T: ?Sized>(&self, property_name: &str) -> Option<String>
    where
        Self: Sized,
    {
        self.resolve_model_string(short_type_name::<T>(), property_name)
    }

    /// Resolves a metadata string for a property of `T`.
    fn model_metadata_for<T: ?Sized>(
        &self,
        property_name: &str,
        metadata_name: &str,
    ) -> Option<String>
    where
        Self: Sized,
    {
        self.resolve_model_metadata(short_type_name::<T>(), property_name, metadata_name)
    }

    /// Resolves the validation message for attribute type `A`.
    fn validation_string_for<A: ?Sized>(&self) -> Option<String>
    where
        Self: Sized,
    {
        self.resolve_validation_string(short_type_name::<A>())
    }
}

// ============================================================================
// SECTION: Resource String Provider
// ============================================================================

/// Lookup source shared across providers.
pub type SharedStringSource = Arc<dyn StringSource + Send + Sync>;

/// Resolves localized strings from one or more prioritized sources.
///
/// # Invariants
/// - Sources are queried in insertion order; the first `Some` wins.
/// - An empty source list is allowed and always resolves to `None`.
#[derive(Clone)]
pub struct ResourceStringProvider<F = UnderscoreKeyFormatter> {
    /// Lookup sources in precedence order.
    sources: Vec<SharedStringSource>,
    /// Key formatting strategy.
    formatter: F,
}

impl ResourceStringProvider {
    /// Creates a provider over `sources` using the default key formatter.
    #[must_use]
    pub fn new(sources: impl IntoIterator<Item = SharedStringSource>) -> Self {
        Self::with_formatter(sources, UnderscoreKeyFormatter)
    }

    /// Creates a provider with no sources.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for ResourceStringProvider {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: KeyFormatter> ResourceStringProvider<F> {
    /// Creates a provider over `sources` using a custom key formatter.
    #[must_use]
    pub fn with_formatter(
        sources: impl IntoIterator<Item = SharedStringSource>,
        formatter: F,
    ) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            formatter,
        }
    }

    /// Appends a source with the lowest precedence so far.
    #[must_use]
    pub fn with_source(mut self, source: impl StringSource + Send + Sync + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Appends an already shared source with the lowest precedence so far.
    #[must_use]
    pub fn with_shared_source(mut self, source: SharedStringSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Returns the number of configured sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Returns the key formatter.
    #[must_use]
    pub const fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Resolves a pre-built key against the sources in order.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        for (index, source) in self.sources.iter().enumerate() {
            if let Some(value) = source.get(key) {
                tracing::trace!(key, source_index = index, "localized string resolved");
                return Some(value);
            }
        }
        tracing::debug!(key, sources = self.sources.len(), "no localized string found");
        None
    }

    /// Resolves a model key with arbitrary extra qualifiers.
    #[must_use]
    pub fn resolve_qualified(
        &self,
        type_name: &str,
        property_name: &str,
        extras: &[&str],
    ) -> Option<String> {
        self.lookup(&self.formatter.model_key(type_name, property_name, extras))
    }
}

impl<F: KeyFormatter> LocalizedStringProvider for ResourceStringProvider<F> {
    fn resolve_model_string(&self, type_name: &str, property_name: &str) -> Option<String> {
        self.resolve_qualified(type_name, property_name, &[])
    }

    fn resolve_model_metadata(
        &self,
        type_name: &str,
        property_name: &str,
        metadata_name: &str,
    ) -> Option<String> {
        self.resolve_qualified(type_name, property_name, &[metadata_name])
    }

    fn resolve_validation_string(&self, attribute_type_name: &str) -> Option<String> {
        self.lookup(&self.formatter.validation_key(attribute_type_name))
    }
}

impl<F: fmt::Debug> fmt::Debug for ResourceStringProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStringProvider")
            .field("sources", &self.sources.len())
            .field("formatter", &self.formatter)
            .finish()
    }
}
