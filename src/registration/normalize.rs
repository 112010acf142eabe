//! Field normalization applied before any format check.
//!
//! Every function here is idempotent: normalizing an already normalized value
//! returns it unchanged.

use crate::registration::RegistrationForm;

/// Trim and collapse each internal run of whitespace into a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop every whitespace character and hyphen from a phone number.
pub fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Registration values after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub company_type: String,
    /// Empty when the optional GSTIN was not supplied
    pub gstin: String,
    pub pan: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub industry_type: String,
    pub signatory_designation: String,
    /// Empty when the optional website was not supplied
    pub company_website: String,
}

impl NormalizedRegistration {
    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            full_name: collapse_whitespace(&form.full_name),
            email: form.email.trim().to_lowercase(),
            phone: strip_phone_separators(form.phone.trim()),
            company_name: form.company_name.trim().to_string(),
            company_type: form.company_type.trim().to_lowercase(),
            gstin: form.gstin.trim().to_uppercase(),
            pan: form.pan.trim().to_uppercase(),
            address_line_1: collapse_whitespace(&form.address_line_1),
            address_line_2: collapse_whitespace(&form.address_line_2),
            industry_type: form.industry_type.trim().to_lowercase(),
            signatory_designation: collapse_whitespace(&form.signatory_designation),
            company_website: form.company_website.trim().to_string(),
        }
    }

    pub fn has_gstin(&self) -> bool {
        !self.gstin.is_empty()
    }

    pub fn has_website(&self) -> bool {
        !self.company_website.is_empty()
    }
}

impl From<&NormalizedRegistration> for RegistrationForm {
    fn from(registration: &NormalizedRegistration) -> Self {
        RegistrationForm {
            full_name: registration.full_name.clone(),
            email: registration.email.clone(),
            phone: registration.phone.clone(),
            company_name: registration.company_name.clone(),
            company_type: registration.company_type.clone(),
            gstin: registration.gstin.clone(),
            pan: registration.pan.clone(),
            address_line_1: registration.address_line_1.clone(),
            address_line_2: registration.address_line_2.clone(),
            industry_type: registration.industry_type.clone(),
            signatory_designation: registration.signatory_designation.clone(),
            company_website: registration.company_website.clone(),
        }
    }
}
