//! Interactive form over one step schema
//!
//! Binds a [`StepSchema`] to user input: prompts for every field (with
//! pre-population when revisiting a completed step), validates the whole
//! record in one pass, and re-prompts only the offending fields until the
//! record is clean.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};

use crate::core::record::StepRecord;
use crate::schema::errors::FieldErrorSet;
use crate::schema::rules::{FieldDef, StepSchema};

/// The interactive boundary around one step's schema
pub struct StepForm {
    schema: StepSchema,
    initial: Option<StepRecord>,
    theme: ColorfulTheme,
}

impl StepForm {
    pub fn new(schema: StepSchema) -> Self {
        Self {
            schema,
            initial: None,
            theme: ColorfulTheme::default(),
        }
    }

    /// Pre-populate prompts from a previously captured record
    /// (back navigation / editing). Absent fields render empty.
    pub fn with_initial(mut self, record: StepRecord) -> Self {
        self.initial = Some(record);
        self
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    /// Non-interactive submit: validate a candidate record and hand back
    /// either the admitted record or the full error set. Used by the
    /// answers-file commands and by tests.
    pub fn submit(&self, record: StepRecord) -> Result<StepRecord, FieldErrorSet> {
        self.schema.validate(&record)?;
        Ok(record)
    }

    /// Run the interactive prompt loop until the record validates.
    pub fn fill(&self) -> Result<StepRecord> {
        println!();
        println!(
            "{} Step {}: {}",
            style("◆").cyan(),
            self.schema.step.number(),
            style(self.schema.step.title()).bold()
        );
        println!("{}", style("─".repeat(50)).dim());

        let mut record = StepRecord::new();
        for field in self.schema.fields {
            let existing = self
                .initial
                .as_ref()
                .and_then(|r| r.get(field.name))
                .unwrap_or("");
            let value = self.prompt_field(field, existing)?;
            record.set(field.name, value);
        }

        loop {
            match self.schema.validate(&record) {
                Ok(()) => {
                    println!("{} {} complete", style("✓").green(), self.schema.step.title());
                    return Ok(record);
                }
                Err(errors) => {
                    println!();
                    println!(
                        "{} {} field(s) need attention:",
                        style("!").yellow(),
                        errors.len()
                    );
                    for violation in errors.iter() {
                        println!("  {} {}", style("✗").red(), violation);
                    }
                    println!();

                    // Re-prompt only the offending fields, keeping the
                    // rejected values as editable defaults.
                    for field in self.schema.fields {
                        if errors.contains(field.name) {
                            let previous = record.get_or_empty(field.name).to_string();
                            let value = self.prompt_field(field, &previous)?;
                            record.set(field.name, value);
                        }
                    }
                }
            }
        }
    }

    fn prompt_field(&self, field: &FieldDef, default: &str) -> Result<String> {
        let prompt = format!("{} ({})", field.label(), style(field.rule.hint()).dim());

        let value: String = if !default.is_empty() {
            Input::with_theme(&self.theme)
                .with_prompt(&prompt)
                .default(default.to_string())
                .allow_empty(field.rule.is_optional())
                .interact_text()
                .into_diagnostic()?
        } else {
            Input::with_theme(&self.theme)
                .with_prompt(&prompt)
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?
        };

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::StepId;
    use crate::schema::rules::FieldDef;

    const FIELDS: &[FieldDef] = &[
        FieldDef::min("spvName", 2, "SPV name required"),
        FieldDef::email("email", "Valid email required"),
    ];

    fn form() -> StepForm {
        StepForm::new(StepSchema {
            step: StepId::BusinessInfo,
            fields: FIELDS,
        })
    }

    #[test]
    fn test_submit_admits_valid_record() {
        let record: StepRecord = [("spvName", "Acme SPV"), ("email", "a@b.com")]
            .into_iter()
            .collect();
        let admitted = form().submit(record.clone()).unwrap();
        assert_eq!(admitted, record);
    }

    #[test]
    fn test_submit_returns_full_error_set() {
        let record: StepRecord = [("spvName", "A"), ("email", "nope")].into_iter().collect();
        let errors = form().submit(record).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_prefill_is_kept_separate_from_submission() {
        // Pre-population only seeds prompts; submit still validates the
        // candidate record it is given.
        let initial: StepRecord = [("spvName", "Acme SPV")].into_iter().collect();
        let form = form().with_initial(initial);
        let errors = form.submit(StepRecord::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
