//! Field-level validation errors with miette diagnostics

use miette::Diagnostic;
use thiserror::Error;

use crate::core::record::StepId;

/// The complete set of per-field validation failures from one validation
/// pass over a step record. Validation is exhaustive, so this carries one
/// violation per offending field, never just the first.
#[derive(Debug, Error, Diagnostic)]
#[error("{} validation failed: {summary}", step.title())]
#[diagnostic(code(dpr::schema::validation_error))]
pub struct FieldErrorSet {
    step: StepId,
    summary: String,

    #[related]
    violations: Vec<FieldViolation>,
}

/// A single field's validation failure
#[derive(Debug, Error, Diagnostic)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    /// Field name as declared in the step schema
    pub field: String,

    /// Human-readable reason, suitable for display next to the field
    pub message: String,

    #[help]
    help: Option<String>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl FieldErrorSet {
    pub fn new(step: StepId, violations: Vec<FieldViolation>) -> Self {
        let summary = match violations.len() {
            1 => "1 field invalid".to_string(),
            n => format!("{} fields invalid", n),
        };
        Self {
            step,
            summary,
            violations,
        }
    }

    /// The step whose record failed validation
    pub fn step(&self) -> StepId {
        self.step
    }

    /// Number of offending fields
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether a particular field is among the violations
    pub fn contains(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// The message recorded for a field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter()
    }
}
