//! Multilingual corporate registration front end.
//!
//! The interesting part is [`registration`]: server-side validation of the
//! corporate registration form with failures reported in the visitor's
//! language ([`i18n`]). [`server`] wires it to HTTP.

pub mod config;
pub mod i18n;
pub mod registration;
pub mod server;
