//! Language type: closed set of display languages.
//!
//! Raw language tags (cookie values, query parameters) are turned into a
//! `Language` in exactly two ways: the total [`Language::resolve`], which never
//! fails and falls back to English, and the strict [`Language::from_code`],
//! used where an unsupported tag must be rejected.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, HINDI_STRINGS, KANNADA_STRINGS};
use crate::i18n::LanguageRegistry;
use anyhow::{bail, Result};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
}

impl Language {
    /// Every supported language, canonical first.
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Kannada];

    /// Resolve an arbitrary tag to a language.
    ///
    /// Only the exact tags `"hi"` and `"kn"` select Hindi and Kannada.
    /// Everything else, including a missing tag, resolves to English.
    pub fn resolve(tag: Option<&str>) -> Language {
        match tag {
            Some("hi") => Language::Hindi,
            Some("kn") => Language::Kannada,
            _ => Language::English,
        }
    }

    /// Parse a language code, rejecting unknown or disabled languages.
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language::resolve(Some(config.code))),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical language, used as the fallback for every lookup.
    pub fn canonical() -> Language {
        Language::resolve(Some(LanguageRegistry::get().canonical().code))
    }

    /// ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Kannada => "kn",
        }
    }

    /// Message table for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        match self {
            Language::English => &ENGLISH_STRINGS,
            Language::Hindi => &HINDI_STRINGS,
            Language::Kannada => &KANNADA_STRINGS,
        }
    }
}
