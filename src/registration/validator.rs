//! Registration form validator.
//!
//! Turns a raw [`RegistrationForm`] and a language tag into exactly one
//! [`ValidationResult`]: the normalized registration, or the first failing
//! rule's localized message.

use crate::i18n::{translate, Language, MessageKey};
use crate::registration::rules::{ValidationRule, REGISTRATION_RULES};
use crate::registration::{NormalizedRegistration, RegistrationForm};
use tracing::debug;

/// A rejected registration, carrying the rule's key and its localized text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub key: MessageKey,
    pub language: Language,
    pub message: &'static str,
}

impl ValidationFailure {
    pub fn new(key: MessageKey, language: Language) -> Self {
        Self {
            key,
            language,
            message: translate(language, key),
        }
    }
}

pub type ValidationResult = Result<NormalizedRegistration, ValidationFailure>;

/// Validates corporate registration forms against an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct FormValidator {
    rules: &'static [ValidationRule],
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            rules: &REGISTRATION_RULES,
        }
    }

    /// Rules in the order they are evaluated.
    pub fn rules(&self) -> &'static [ValidationRule] {
        self.rules
    }

    /// Validate a form for a raw language tag (e.g. a cookie value).
    pub fn validate(&self, lang: Option<&str>, form: &RegistrationForm) -> ValidationResult {
        self.validate_in(Language::resolve(lang), form)
    }

    /// Validate a form, reporting failures in `language`.
    ///
    /// Required fields are checked for presence first; then the form is
    /// normalized and the rules run in order, stopping at the first failure.
    pub fn validate_in(&self, language: Language, form: &RegistrationForm) -> ValidationResult {
        if let Some(field) = form.first_missing_required() {
            debug!(field = field.form_key(), "Registration is missing a required field");
            return Err(ValidationFailure::new(MessageKey::MissingFields, language));
        }

        let registration = NormalizedRegistration::from_form(form);

        match self.rules.iter().find(|rule| !(rule.check)(&registration)) {
            Some(rule) => {
                debug!(key = %rule.key, language = language.code(), "Registration rejected");
                Err(ValidationFailure::new(rule.key, language))
            }
            None => Ok(registration),
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
