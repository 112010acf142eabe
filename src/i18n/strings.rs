//! Localized user-facing strings.
//!
//! Each supported language has one static [`LanguageStrings`] table. An empty
//! entry means the string has not been translated yet: lookups then fall back
//! to English, and an empty English entry falls back to [`GENERIC_FALLBACK`].

use crate::i18n::Language;

/// Returned when no table has text for a key.
pub const GENERIC_FALLBACK: &str = "Invalid input.";

/// Identifier of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    MissingFields,
    InvalidFullName,
    InvalidEmail,
    InvalidPhone,
    InvalidCompanyName,
    InvalidCompanyType,
    InvalidGstin,
    InvalidPan,
    InvalidAddress,
    InvalidIndustry,
    InvalidDesignation,
    InvalidWebsite,
    RegistrationAccepted,
    LoginPending,
}

impl MessageKey {
    pub const ALL: [MessageKey; 14] = [
        MessageKey::MissingFields,
        MessageKey::InvalidFullName,
        MessageKey::InvalidEmail,
        MessageKey::InvalidPhone,
        MessageKey::InvalidCompanyName,
        MessageKey::InvalidCompanyType,
        MessageKey::InvalidGstin,
        MessageKey::InvalidPan,
        MessageKey::InvalidAddress,
        MessageKey::InvalidIndustry,
        MessageKey::InvalidDesignation,
        MessageKey::InvalidWebsite,
        MessageKey::RegistrationAccepted,
        MessageKey::LoginPending,
    ];

    /// Stable snake_case key, as used in logs and string-keyed lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::MissingFields => "missing_fields",
            MessageKey::InvalidFullName => "invalid_full_name",
            MessageKey::InvalidEmail => "invalid_email",
            MessageKey::InvalidPhone => "invalid_phone",
            MessageKey::InvalidCompanyName => "invalid_company_name",
            MessageKey::InvalidCompanyType => "invalid_company_type",
            MessageKey::InvalidGstin => "invalid_gstin",
            MessageKey::InvalidPan => "invalid_pan",
            MessageKey::InvalidAddress => "invalid_address",
            MessageKey::InvalidIndustry => "invalid_industry",
            MessageKey::InvalidDesignation => "invalid_designation",
            MessageKey::InvalidWebsite => "invalid_website",
            MessageKey::RegistrationAccepted => "registration_accepted",
            MessageKey::LoginPending => "login_pending",
        }
    }

    /// Look up a key by its snake_case name.
    pub fn from_key(key: &str) -> Option<MessageKey> {
        MessageKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Whether this key reports a validation failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, MessageKey::RegistrationAccepted | MessageKey::LoginPending)
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All localized user-facing strings for a language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Registration Errors ====================
    pub missing_fields: &'static str,
    pub invalid_full_name: &'static str,
    pub invalid_email: &'static str,
    pub invalid_phone: &'static str,
    pub invalid_company_name: &'static str,
    pub invalid_company_type: &'static str,
    pub invalid_gstin: &'static str,
    pub invalid_pan: &'static str,
    pub invalid_address: &'static str,
    pub invalid_industry: &'static str,
    pub invalid_designation: &'static str,
    pub invalid_website: &'static str,

    // ==================== Placeholders ====================
    /// Shown when the form passes validation (persistence is not wired up yet)
    pub registration_accepted: &'static str,

    /// Shown for the corporate login stub
    pub login_pending: &'static str,
}

impl LanguageStrings {
    /// Text for `key`, or `None` if this table leaves it untranslated.
    pub fn get(&self, key: MessageKey) -> Option<&'static str> {
        let text = match key {
            MessageKey::MissingFields => self.missing_fields,
            MessageKey::InvalidFullName => self.invalid_full_name,
            MessageKey::InvalidEmail => self.invalid_email,
            MessageKey::InvalidPhone => self.invalid_phone,
            MessageKey::InvalidCompanyName => self.invalid_company_name,
            MessageKey::InvalidCompanyType => self.invalid_company_type,
            MessageKey::InvalidGstin => self.invalid_gstin,
            MessageKey::InvalidPan => self.invalid_pan,
            MessageKey::InvalidAddress => self.invalid_address,
            MessageKey::InvalidIndustry => self.invalid_industry,
            MessageKey::InvalidDesignation => self.invalid_designation,
            MessageKey::InvalidWebsite => self.invalid_website,
            MessageKey::RegistrationAccepted => self.registration_accepted,
            MessageKey::LoginPending => self.login_pending,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// Resolve `key` against `primary`, then `fallback`, then [`GENERIC_FALLBACK`].
pub fn resolve_message(
    primary: &LanguageStrings,
    fallback: &LanguageStrings,
    key: MessageKey,
) -> &'static str {
    primary
        .get(key)
        .or_else(|| fallback.get(key))
        .unwrap_or(GENERIC_FALLBACK)
}

/// Localized text for `key`, falling back to English.
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    resolve_message(language.strings(), Language::canonical().strings(), key)
}

/// String-keyed lookup for raw language tags and raw keys.
///
/// Unknown tags resolve to English; unknown keys yield [`GENERIC_FALLBACK`].
pub fn translate_key(tag: Option<&str>, key: &str) -> &'static str {
    match MessageKey::from_key(key) {
        Some(key) => translate(Language::resolve(tag), key),
        None => GENERIC_FALLBACK,
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    missing_fields: "Please fill all required fields.",
    invalid_full_name: "Full name must be 6-64 characters and contain valid letters.",
    invalid_email: "Please enter a valid email address (6-128 chars).",
    invalid_phone: "Please enter a valid 10-digit phone number.",
    invalid_company_name: "Company name must be 6-80 characters.",
    invalid_company_type: "Invalid company type selected.",
    invalid_gstin: "GSTIN looks invalid.",
    invalid_pan: "PAN looks invalid.",
    invalid_address: "Address must be 10-100 characters.",
    invalid_industry: "Invalid industry type selected.",
    invalid_designation: "Authorized signatory designation must be 6-24 characters.",
    invalid_website: "Website URL looks invalid (include protocol, e.g. https://).",

    registration_accepted:
        "Registration data looks valid. Server logic for registration not implemented yet.",
    login_pending: "WIP",
};

// ==================== Hindi Strings ====================

/// Hindi language strings. Placeholders are left to the English fallback.
pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    missing_fields: "कृपया सभी आवश्यक फ़ील्ड भरें।",
    invalid_full_name: "पूरा नाम 6–64 अक्षरों का होना चाहिए और मान्य वर्ण होने चाहिए।",
    invalid_email: "कृपया मान्य ईमेल पता दर्ज करें (6–128 अक्षर)।",
    invalid_phone: "कृपया 10-अंकीय फोन नंबर दर्ज करें।",
    invalid_company_name: "कृपया 6–80 अक्षरों में कंपनी का नाम दर्ज करें।",
    invalid_company_type: "अमान्य कंपनी प्रकार चुना गया है।",
    invalid_gstin: "GSTIN अमान्य दिख रहा है।",
    invalid_pan: "PAN अमान्य दिख रहा है।",
    invalid_address: "पता 10–100 अक्षरों का होना चाहिए।",
    invalid_industry: "अमान्य उद्योग प्रकार चुना गया है।",
    invalid_designation: "पदनाम 6–24 अक्षरों का होना चाहिए।",
    invalid_website: "Website URL अमान्य है (प्रोटोकॉल सहित, उदाहरण: https://)।",

    registration_accepted: "",
    login_pending: "",
};

// ==================== Kannada Strings ====================

/// Kannada language strings. Placeholders are left to the English fallback.
pub const KANNADA_STRINGS: LanguageStrings = LanguageStrings {
    missing_fields: "ದಯವಿಟ್ಟು ಎಲ್ಲಾ ಅಗತ್ಯ ಕ್ಷೇತ್ರಗಳನ್ನು ಭರ್ತಿ ಮಾಡಿ.",
    invalid_full_name: "ಪೂರ್ಣ ಹೆಸರು 6–64 ಅಕ್ಷರಗಳಿರಬೇಕು ಮತ್ತು ಮಾನ್ಯ ಅಕ್ಷರಗಳನ್ನು ಹೊಂದಿರಬೇಕು.",
    invalid_email: "ದಯವಿಟ್ಟು ಮಾನ್ಯ ಇಮೇಲ್ ನಮೂದಿಸಿ (6–128 ಅಕ್ಷರ).",
    invalid_phone: "ದಯವಿಟ್ಟು 10 ಅಂಕಿ ಫೋನ್ ನಂಬರ್ ನಮೂದಿಸಿ.",
    invalid_company_name: "ದಯವಿಟ್ಟು 6–80 ಅಕ್ಷರಗಳಲ್ಲಿ ಕಂಪನಿ ಹೆಸರನ್ನು ನಮೂದಿಸಿ.",
    invalid_company_type: "ಅಮಾನ್ಯ ಕಂಪನಿಯ ಪ್ರಕಾರ ಆಯ್ಕೆ ಮಾಡಲಾಗಿದೆ.",
    invalid_gstin: "GSTIN ಅಮಾನ್ಯವಾಗಿ ಕಾಣುತ್ತಿದೆ.",
    invalid_pan: "PAN ಅಮಾನ್ಯವಾಗಿದೆ.",
    invalid_address: "ವಿಳಾಸವು 10–100 ಅಕ್ಷರಗಳಿರಬೇಕು.",
    invalid_industry: "ಅಮಾನ್ಯ ಉದ್ಯಮ ಪ್ರಕಾರ ಆಯ್ಕೆ ಮಾಡಲಾಗಿದೆ.",
    invalid_designation: "ಅಧಿಕೃತ ಸಹಿ ಪದವು 6–24 ಅಕ್ಷರಗಳಿರಬೇಕು.",
    invalid_website: "Website URL ಅಮಾನ್ಯವಾಗಿದೆ (ಪ್ರೋಟೋಕಾಲ್ ಸೇರಿಸಿ, ಉದಾ: https://).",

    registration_accepted: "",
    login_pending: "",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== MessageKey Tests ====================

    #[test]
    fn test_message_key_round_trips_through_name() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_message_key_unknown_name() {
        assert_eq!(MessageKey::from_key("invalid_password"), None);
        assert_eq!(MessageKey::from_key(""), None);
        assert_eq!(MessageKey::from_key("MISSING_FIELDS"), None);
    }

    #[test]
    fn test_twelve_failure_keys() {
        let failures = MessageKey::ALL.iter().filter(|k| k.is_failure()).count();
        assert_eq!(failures, 12);
        assert!(!MessageKey::RegistrationAccepted.is_failure());
    }

    #[test]
    fn test_message_key_display() {
        assert_eq!(MessageKey::InvalidPan.to_string(), "invalid_pan");
    }

    // ==================== Table Completeness Tests ====================

    #[test]
    fn test_english_has_every_key() {
        for key in MessageKey::ALL {
            assert!(ENGLISH_STRINGS.get(key).is_some(), "English missing {key}");
        }
    }

    #[test]
    fn test_hindi_and_kannada_translate_every_failure() {
        for key in MessageKey::ALL.into_iter().filter(MessageKey::is_failure) {
            assert!(HINDI_STRINGS.get(key).is_some(), "Hindi missing {key}");
            assert!(KANNADA_STRINGS.get(key).is_some(), "Kannada missing {key}");
        }
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_translate_uses_requested_language() {
        assert_eq!(
            translate(Language::Hindi, MessageKey::MissingFields),
            "कृपया सभी आवश्यक फ़ील्ड भरें।"
        );
        assert_eq!(translate(Language::Kannada, MessageKey::InvalidPan), "PAN ಅಮಾನ್ಯವಾಗಿದೆ.");
    }

    #[test]
    fn test_untranslated_entry_falls_back_to_english() {
        assert_eq!(
            translate(Language::Kannada, MessageKey::RegistrationAccepted),
            ENGLISH_STRINGS.registration_accepted
        );
        assert_eq!(translate(Language::Hindi, MessageKey::LoginPending), "WIP");
    }

    #[test]
    fn test_resolve_message_generic_fallback_when_both_empty() {
        let empty = LanguageStrings {
            invalid_gstin: "",
            ..ENGLISH_STRINGS
        };
        assert_eq!(
            resolve_message(&empty, &empty, MessageKey::InvalidGstin),
            GENERIC_FALLBACK
        );
        assert_eq!(
            resolve_message(&empty, &ENGLISH_STRINGS, MessageKey::InvalidGstin),
            "GSTIN looks invalid."
        );
    }

    #[test]
    fn test_translate_key_unsupported_language_uses_english() {
        assert_eq!(
            translate_key(Some("fr"), "invalid_email"),
            "Please enter a valid email address (6-128 chars)."
        );
        assert_eq!(
            translate_key(None, "missing_fields"),
            "Please fill all required fields."
        );
    }

    #[test]
    fn test_translate_key_unknown_key_is_generic() {
        assert_eq!(translate_key(Some("hi"), "no_such_key"), GENERIC_FALLBACK);
        assert_eq!(translate_key(None, ""), GENERIC_FALLBACK);
    }
}
