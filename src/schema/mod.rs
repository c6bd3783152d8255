//! Schema system - declarative field rules, validation, and forms

pub mod errors;
pub mod form;
pub mod rules;

pub use errors::{FieldErrorSet, FieldViolation};
pub use form::StepForm;
pub use rules::{FieldDef, FieldRule, StepSchema};
