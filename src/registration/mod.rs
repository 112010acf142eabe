//! Corporate registration form handling.
//!
//! - `form`: raw submitted values and the field catalogue
//! - `normalize`: trimming, whitespace collapsing and case folding
//! - `rules`: the ordered format/length checks
//! - `validator`: the pipeline tying them together with localized failures

mod form;
mod normalize;
pub mod rules;
mod validator;

pub use form::{RegistrationField, RegistrationForm};
pub use normalize::{collapse_whitespace, strip_phone_separators, NormalizedRegistration};
pub use rules::{ValidationRule, COMPANY_TYPES, INDUSTRY_TYPES, REGISTRATION_RULES};
pub use validator::{FormValidator, ValidationFailure, ValidationResult};
