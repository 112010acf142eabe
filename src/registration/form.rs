//! Raw registration form input, exactly as submitted by the browser.

/// A field of the corporate registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    FullName,
    Email,
    Phone,
    CompanyName,
    CompanyType,
    Gstin,
    Pan,
    AddressLine1,
    AddressLine2,
    IndustryType,
    SignatoryDesignation,
    CompanyWebsite,
}

impl RegistrationField {
    /// Every field, in form order.
    pub const ALL: [RegistrationField; 12] = [
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::Phone,
        RegistrationField::CompanyName,
        RegistrationField::CompanyType,
        RegistrationField::Gstin,
        RegistrationField::Pan,
        RegistrationField::AddressLine1,
        RegistrationField::AddressLine2,
        RegistrationField::IndustryType,
        RegistrationField::SignatoryDesignation,
        RegistrationField::CompanyWebsite,
    ];

    /// Name of the field in the form-encoded request body.
    pub fn form_key(&self) -> &'static str {
        match self {
            RegistrationField::FullName => "full-name-input",
            RegistrationField::Email => "email-input",
            RegistrationField::Phone => "phone-input",
            RegistrationField::CompanyName => "company-name-input",
            RegistrationField::CompanyType => "company-type-input",
            RegistrationField::Gstin => "gstin-input",
            RegistrationField::Pan => "pan-input",
            RegistrationField::AddressLine1 => "address-line-1-input",
            RegistrationField::AddressLine2 => "address-line-2-input",
            RegistrationField::IndustryType => "industry-type-input",
            RegistrationField::SignatoryDesignation => "authorized-signatory-designation-input",
            RegistrationField::CompanyWebsite => "company-website-input",
        }
    }

    pub fn from_form_key(key: &str) -> Option<RegistrationField> {
        RegistrationField::ALL
            .into_iter()
            .find(|field| field.form_key() == key)
    }

    /// GSTIN and website may be left blank; everything else must be filled in.
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            RegistrationField::Gstin | RegistrationField::CompanyWebsite
        )
    }
}

/// Raw form values. Missing keys are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub company_type: String,
    pub gstin: String,
    pub pan: String,
    pub address_line_1: String,
    pub address_line_2: String,
    pub industry_type: String,
    pub signatory_designation: String,
    pub company_website: String,
}

impl RegistrationForm {
    /// Build a form from `(form key, value)` pairs. Unknown keys are ignored and
    /// a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = RegistrationForm::default();
        for (key, value) in pairs {
            if let Some(field) = RegistrationField::from_form_key(key.as_ref()) {
                *form.field_mut(field) = value.into();
            }
        }
        form
    }

    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::CompanyName => &self.company_name,
            RegistrationField::CompanyType => &self.company_type,
            RegistrationField::Gstin => &self.gstin,
            RegistrationField::Pan => &self.pan,
            RegistrationField::AddressLine1 => &self.address_line_1,
            RegistrationField::AddressLine2 => &self.address_line_2,
            RegistrationField::IndustryType => &self.industry_type,
            RegistrationField::SignatoryDesignation => &self.signatory_designation,
            RegistrationField::CompanyWebsite => &self.company_website,
        }
    }

    fn field_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::CompanyName => &mut self.company_name,
            RegistrationField::CompanyType => &mut self.company_type,
            RegistrationField::Gstin => &mut self.gstin,
            RegistrationField::Pan => &mut self.pan,
            RegistrationField::AddressLine1 => &mut self.address_line_1,
            RegistrationField::AddressLine2 => &mut self.address_line_2,
            RegistrationField::IndustryType => &mut self.industry_type,
            RegistrationField::SignatoryDesignation => &mut self.signatory_designation,
            RegistrationField::CompanyWebsite => &mut self.company_website,
        }
    }

    /// Replace one field's value.
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// First required field that is empty after trimming, in form order.
    pub fn first_missing_required(&self) -> Option<RegistrationField> {
        RegistrationField::ALL
            .into_iter()
            .filter(RegistrationField::is_required)
            .find(|field| self.get(*field).trim().is_empty())
    }
}
