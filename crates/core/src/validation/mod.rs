//! Form validation and sanitization.
//!
//! Turns raw, string-keyed form input into canonical catalog records, or a
//! complete list of field violations. Pure logic, no shared state.

pub mod evaluator;
pub mod forms;
pub mod length;
pub mod rules;

pub use evaluator::{validate_company, validate_model};
pub use forms::{CompanyForm, ModelForm, CUSTOM_OPTION};
pub use length::{length_advisories, length_level, FieldKind, LengthAdvisory, LengthLevel};
pub use rules::{FieldViolation, ValidationErrors};
