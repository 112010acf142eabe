//! Ordered validation rules for a normalized registration.
//!
//! Each rule pairs a pure predicate with the message key reported when the
//! predicate fails. [`REGISTRATION_RULES`] is evaluated top to bottom and the
//! first failing rule wins.

use crate::i18n::MessageKey;
use crate::registration::NormalizedRegistration;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;
use url::Url;
use validator::ValidateEmail;

pub const COMPANY_TYPES: [&str; 5] = ["pvt-ltd", "llp", "partnership", "public-co", "sole-prop"];

pub const INDUSTRY_TYPES: [&str; 4] = ["fmcg", "agri-buyer", "food-processing", "catering"];

const WEBSITE_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

// Compiled once, shared by every request
static FULL_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static GSTIN_REGEX: OnceLock<Regex> = OnceLock::new();
static PAN_REGEX: OnceLock<Regex> = OnceLock::new();

/// One step of registration validation.
#[derive(Clone, Copy)]
pub struct ValidationRule {
    /// Reported when `check` returns `false`
    pub key: MessageKey,
    pub check: fn(&NormalizedRegistration) -> bool,
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Registration rules in evaluation order.
pub static REGISTRATION_RULES: [ValidationRule; 11] = [
    ValidationRule {
        key: MessageKey::InvalidFullName,
        check: |r: &NormalizedRegistration| is_valid_full_name(&r.full_name),
    },
    ValidationRule {
        key: MessageKey::InvalidEmail,
        check: |r: &NormalizedRegistration| is_valid_email(&r.email),
    },
    ValidationRule {
        key: MessageKey::InvalidPhone,
        check: |r: &NormalizedRegistration| is_valid_phone(&r.phone),
    },
    ValidationRule {
        key: MessageKey::InvalidCompanyName,
        check: |r: &NormalizedRegistration| length_between(&r.company_name, 6, 80),
    },
    ValidationRule {
        key: MessageKey::InvalidCompanyType,
        check: |r: &NormalizedRegistration| COMPANY_TYPES.contains(&r.company_type.as_str()),
    },
    ValidationRule {
        key: MessageKey::InvalidGstin,
        check: |r: &NormalizedRegistration| !r.has_gstin() || is_valid_gstin(&r.gstin),
    },
    ValidationRule {
        key: MessageKey::InvalidPan,
        check: |r: &NormalizedRegistration| is_valid_pan(&r.pan),
    },
    ValidationRule {
        key: MessageKey::InvalidAddress,
        check: |r: &NormalizedRegistration| {
            length_between(&r.address_line_1, 10, 100) && length_between(&r.address_line_2, 10, 100)
        },
    },
    ValidationRule {
        key: MessageKey::InvalidIndustry,
        check: |r: &NormalizedRegistration| INDUSTRY_TYPES.contains(&r.industry_type.as_str()),
    },
    ValidationRule {
        key: MessageKey::InvalidDesignation,
        check: |r: &NormalizedRegistration| length_between(&r.signatory_designation, 6, 24),
    },
    ValidationRule {
        key: MessageKey::InvalidWebsite,
        check: |r: &NormalizedRegistration| !r.has_website() || is_valid_website(&r.company_website),
    },
];

/// Inclusive length check in Unicode scalar values.
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Letters and combining marks from any script, ASCII digits, space, dot,
/// hyphen and apostrophe; 6 to 64 characters.
pub fn is_valid_full_name(value: &str) -> bool {
    let regex = FULL_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[\p{L}\p{M}0-9 .'\-]+$").expect("valid full name regex"));

    length_between(value, 6, 64) && regex.is_match(value)
}

/// 6 to 128 characters, syntactically valid, with a dotted domain name.
///
/// Address literals such as `asha@[10.0.0.1]` are rejected.
pub fn is_valid_email(value: &str) -> bool {
    if !length_between(value, 6, 128) || !String::from(value).validate_email() {
        return false;
    }

    value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| is_valid_domain(domain))
}

/// Indian mobile number: optional `+91`, then ten digits starting with 6-9.
pub fn is_valid_phone(value: &str) -> bool {
    let regex = PHONE_REGEX
        .get_or_init(|| Regex::new(r"^(?:\+91)?[6-9][0-9]{9}$").expect("valid phone regex"));

    regex.is_match(value)
}

/// 15-character GSTIN: state code, embedded PAN, entity number, `Z`, checksum.
///
/// Expects an uppercased value.
pub fn is_valid_gstin(value: &str) -> bool {
    let regex = GSTIN_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN regex")
    });

    value.chars().count() == 15 && regex.is_match(value)
}

/// 10-character PAN: five letters, four digits, one letter.
///
/// Expects an uppercased value.
pub fn is_valid_pan(value: &str) -> bool {
    let regex =
        PAN_REGEX.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN regex"));

    regex.is_match(value)
}

/// 6 to 64 characters, absolute URL with an explicit scheme and a public-looking host.
pub fn is_valid_website(value: &str) -> bool {
    if !length_between(value, 6, 64) {
        return false;
    }

    if value
        .chars()
        .any(|c| c.is_whitespace() || c == '<' || c == '>')
    {
        return false;
    }

    // The scheme must be spelled out; `https:example.com` is rejected too
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    if !WEBSITE_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
        return false;
    }

    if Url::parse(value).is_err() {
        return false;
    }

    // `Url` rewrites hosts such as "127.1" or "exa%6dple.com", so judge the text as typed
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);

    is_valid_host(host)
}

/// Host with an optional port: dotted-quad IPv4, bracketed IPv6 or a domain name.
fn is_valid_host(host_port: &str) -> bool {
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed
            .split_once(']')
            .is_some_and(|(ip, _)| ip.parse::<Ipv6Addr>().is_ok());
    }

    let host = host_port
        .split_once(':')
        .map_or(host_port, |(host, _)| host);

    host.parse::<Ipv4Addr>().is_ok() || is_valid_domain(host)
}

/// Dotted host name with hyphen/alphanumeric labels and an alphabetic TLD.
fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.chars().count() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    let tld_ok = tld.starts_with("xn--")
        || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic));

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length Tests ====================

    #[test]
    fn test_length_between_counts_characters() {
        assert!(length_between("ಕನ್ನಡ", 5, 5));
        assert!(length_between("abcdef", 6, 80));
        assert!(!length_between("abcde", 6, 80));
    }

    // ==================== Full Name Tests ====================

    #[test]
    fn test_full_name_accepts_unicode_names() {
        assert!(is_valid_full_name("Asha Verma"));
        assert!(is_valid_full_name("राहुल शर्मा"));
        assert!(is_valid_full_name("ಅನಿಲ್ ಕುಮಾರ್"));
        assert!(is_valid_full_name("D'Souza-Pereira Jr."));
    }

    #[test]
    fn test_full_name_length_bounds() {
        assert!(!is_valid_full_name("Jo"));
        assert!(!is_valid_full_name("Jo Li"));
        assert!(is_valid_full_name("Jo Lin"));
        assert!(is_valid_full_name(&"a".repeat(64)));
        assert!(!is_valid_full_name(&"a".repeat(65)));
    }

    #[test]
    fn test_full_name_rejects_symbols() {
        assert!(!is_valid_full_name("Asha_Verma"));
        assert!(!is_valid_full_name("Asha <Verma>"));
        assert!(!is_valid_full_name("Asha@Verma"));
    }

    #[test]
    fn test_full_name_digits_are_ascii_only() {
        assert!(is_valid_full_name("Agent 007 Bond"));
        assert!(!is_valid_full_name("Agent ०७ Bond"));
    }

    // ==================== Email Tests ====================

    #[test]
    fn test_email_valid() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co.in"));
        assert!(is_valid_email("orders@xn--h2brj9c.xn--h2brj9c"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!is_valid_email("asha.example.com"));
        assert!(!is_valid_email("asha@localhost"));
        assert!(!is_valid_email("asha@@example.com"));
    }

    #[test]
    fn test_email_requires_real_domain() {
        assert!(!is_valid_email("asha@example.c"));
        assert!(!is_valid_email("asha@[10.0.0.1]"));
        assert!(!is_valid_email("asha@example.123"));
        assert!(!is_valid_email("asha@-verma.example.com"));
    }

    #[test]
    fn test_email_length_limit() {
        let long = format!("{}@example.com", "a".repeat(120));
        assert!(!is_valid_email(&long));
    }

    // ==================== Phone Tests ====================

    #[test]
    fn test_phone_valid() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("6000000000"));
    }

    #[test]
    fn test_phone_invalid() {
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone("+929876543210"));
        assert!(!is_valid_phone("919876543210"));
    }

    // ==================== GSTIN / PAN Tests ====================

    #[test]
    fn test_gstin_valid() {
        assert!(is_valid_gstin("29ABCDE1234F1Z5"));
        assert!(is_valid_gstin("07AAACB2230MZZA"));
    }

    #[test]
    fn test_gstin_invalid() {
        assert!(!is_valid_gstin("29ABCDE1234F1Y5"));
        assert!(!is_valid_gstin("29ABCDE1234F0Z5"));
        assert!(!is_valid_gstin("29ABCDE1234F1Z"));
        assert!(!is_valid_gstin("29abcde1234f1z5"));
    }

    #[test]
    fn test_pan_valid_and_invalid() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("ABCDE12345"));
        assert!(!is_valid_pan("ABCD1234F"));
        assert!(!is_valid_pan("ABCDE1234FG"));
    }

    // ==================== Website Tests ====================

    #[test]
    fn test_website_valid() {
        assert!(is_valid_website("https://example.com"));
        assert!(is_valid_website("http://www.verma-foods.co.in/about"));
        assert!(is_valid_website("ftp://files.example.org"));
        assert!(is_valid_website("https://192.168.1.10:8080"));
        assert!(is_valid_website("https://[::1]:8080/"));
        assert!(is_valid_website("https://asha@example.com:443/shop?q=1#top"));
        assert!(is_valid_website("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn test_website_requires_scheme() {
        assert!(!is_valid_website("example.com"));
        assert!(!is_valid_website("www.example.com"));
        assert!(!is_valid_website("https:example.com"));
        assert!(!is_valid_website("mailto:asha@example.com"));
        assert!(!is_valid_website("javascript://example.com"));
    }

    #[test]
    fn test_website_rejects_underscores_in_host() {
        assert!(!is_valid_website("https://my_site.example.com"));
        assert!(is_valid_website("https://example.com/my_page"));
    }

    #[test]
    fn test_website_requires_tld() {
        assert!(!is_valid_website("https://localhost"));
        assert!(!is_valid_website("https://example.c0m"));
        assert!(!is_valid_website("https://-bad.example.com"));
        assert!(!is_valid_website("https://1.2.3"));
        assert!(!is_valid_website("https://127.1"));
        assert!(!is_valid_website("https://999999999"));
        assert!(!is_valid_website("http://0x7f.1"));
        assert!(!is_valid_website("https://exa%6dple.com"));
        assert!(!is_valid_website("https://example.com@1.2.3"));
    }

    #[test]
    fn test_website_length_bounds() {
        let long = format!("https://{}.com", "a".repeat(60));
        assert!(!is_valid_website(&long));
        assert!(!is_valid_website("http:/"));
    }

    #[test]
    fn test_website_rejects_whitespace() {
        assert!(!is_valid_website("https://exa mple.com"));
    }

    // ==================== Rule Table Tests ====================

    #[test]
    fn test_rule_order() {
        let keys: Vec<_> = REGISTRATION_RULES.iter().map(|rule| rule.key).collect();
        assert_eq!(
            keys,
            vec![
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
            ]
        );
    }

    #[test]
    fn test_every_rule_reports_a_failure_key() {
        assert!(REGISTRATION_RULES.iter().all(|rule| rule.key.is_failure()));
    }
}
