// crates/mvc-contrib-localization/src/lib.rs
// ============================================================================
// Module: MVC Contrib Localization Library
// Description: Public API surface for localized model and validation strings.
// Purpose: Expose lookup sources, key formatting, and the string resolver.
// Dependencies: crate::{builtin, culture, key, provider, source}
// ============================================================================

//! ## Overview
//! Resolves translated labels, metadata strings, and validation messages for
//! model types by querying an ordered list of lookup sources. The first source
//! that knows a key wins; when none does, the resolver returns `None` and the
//! caller falls back to its untranslated text.
//!
//! Keys follow a fixed shape: `TypeName_PropertyName` for labels,
//! `TypeName_PropertyName_MetadataName` for metadata, and the attribute name
//! without `Attribute` for validation messages.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builtin;
pub mod culture;
pub mod key;
pub mod provider;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builtin::BuiltinValidationMessages;
pub use builtin::format_message;
pub use culture::CultureName;
pub use culture::CultureStringTables;
pub use key::KEY_SEPARATOR;
pub use key::KeyFormatter;
pub use key::MetadataName;
pub use key::UnderscoreKeyFormatter;
pub use key::short_type_name;
pub use provider::LocalizedStringProvider;
pub use provider::ResourceStringProvider;
pub use provider::SharedStringSource;
pub use source::MAX_TABLE_FILE_BYTES;
pub use source::StringSource;
pub use source::StringTable;
pub use source::StringTableError;
pub use source::TableFormat;
