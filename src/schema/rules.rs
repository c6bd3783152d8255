//! Declarative field rules and the generic step validator
//!
//! Each wizard step declares its fields as a flat table of [`FieldDef`]s
//! (see the `steps` module). One generic routine walks the table and checks
//! every field, collecting all violations in a single pass so the form can
//! show every problem at once.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::core::record::{StepId, StepRecord};
use crate::schema::errors::{FieldErrorSet, FieldViolation};

/// Validation rule attached to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Raw length (in characters) must be at least this
    MinLength(usize),
    /// Must look like `local@domain`
    Email,
    /// Must be a calendar date in `YYYY-MM-DD` form
    Date,
    /// May be absent or empty; no constraint when present
    Optional,
}

impl FieldRule {
    /// Short hint shown dimmed next to the prompt
    pub fn hint(&self) -> String {
        match self {
            FieldRule::MinLength(1) => "required".to_string(),
            FieldRule::MinLength(n) => format!("min {} chars", n),
            FieldRule::Email => "email".to_string(),
            FieldRule::Date => "YYYY-MM-DD".to_string(),
            FieldRule::Optional => "optional".to_string(),
        }
    }

    /// Whether an empty value passes this rule
    pub fn is_optional(&self) -> bool {
        matches!(self, FieldRule::Optional)
    }
}

/// One named field in a step schema
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Field name, as used in records and answers files
    pub name: &'static str,
    pub rule: FieldRule,
    /// Message reported when the rule fails
    pub message: &'static str,
}

impl FieldDef {
    pub const fn min(name: &'static str, min_len: usize, message: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::MinLength(min_len),
            message,
        }
    }

    pub const fn email(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Email,
            message,
        }
    }

    pub const fn date(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Date,
            message,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            rule: FieldRule::Optional,
            message: "",
        }
    }

    /// Display label derived from the camelCase field name,
    /// e.g. `proposalTitle` -> "Proposal Title"
    pub fn label(&self) -> String {
        label_from_name(self.name)
    }

    /// Check one value against this field's rule
    fn check(&self, value: &str) -> Option<FieldViolation> {
        let ok = match self.rule {
            FieldRule::Optional => true,
            FieldRule::MinLength(n) => value.chars().count() >= n,
            FieldRule::Email => email_regex().is_match(value),
            FieldRule::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        };
        if ok {
            None
        } else {
            let violation = FieldViolation::new(self.name, self.message);
            Some(match self.rule {
                FieldRule::Date => violation.with_help("Use the YYYY-MM-DD date format"),
                FieldRule::Email => violation.with_help("Use the local@domain email format"),
                _ => violation,
            })
        }
    }
}

/// The full validation contract for one wizard step
#[derive(Debug, Clone, Copy)]
pub struct StepSchema {
    pub step: StepId,
    pub fields: &'static [FieldDef],
}

impl StepSchema {
    /// Look up a field definition by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields the user must fill (non-optional)
    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.rule.is_optional()).count()
    }

    /// Validate a candidate record against every field in the table.
    ///
    /// Exhaustive: all fields are checked and the error set carries exactly
    /// one violation per offending field. Fields not declared in the schema
    /// are ignored, matching the original form behavior. No side effects.
    pub fn validate(&self, record: &StepRecord) -> Result<(), FieldErrorSet> {
        let violations: Vec<FieldViolation> = self
            .fields
            .iter()
            .filter_map(|field| field.check(record.get_or_empty(field.name)))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(FieldErrorSet::new(self.step, violations))
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Split a camelCase field name into a title-cased label
fn label_from_name(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in name.chars() {
        if c.is_uppercase() && !current.is_empty() && !current.ends_with(char::is_uppercase) {
            words.push(current.clone());
            current.clear();
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
