//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Closed `Language` enum with total and strict tag parsing
//! - `strings`: Message keys, per-language message tables and fallback lookup
//!
//! # Example
//!
//! ```rust
//! use corporate_registration::i18n::{translate, Language, MessageKey};
//!
//! let language = Language::resolve(Some("kn"));
//! let text = translate(language, MessageKey::InvalidPan);
//! assert!(!text.is_empty());
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{
    resolve_message, translate, translate_key, LanguageStrings, MessageKey, ENGLISH_STRINGS,
    GENERIC_FALLBACK, HINDI_STRINGS, KANNADA_STRINGS,
};
