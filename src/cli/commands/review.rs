//! `dpr review` - completion status and derived summary for an answers file

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::controller::WizardController;
use crate::core::record::StepId;
use crate::core::state::CompletionStatus;
use crate::review::aggregate::ReviewSummary;
use crate::review::render::print_review;

use super::load_answers;

#[derive(clap::Args, Debug)]
pub struct ReviewArgs {
    /// Answers file (YAML) to summarize
    pub file: PathBuf,
}

/// Shape of the structured (json/yaml) review output
#[derive(Serialize)]
struct ReviewReport {
    completion: CompletionStatus,
    all_completed: bool,
    summary: ReviewSummary,
}

pub fn run(args: ReviewArgs, global: &GlobalOpts) -> Result<()> {
    let answers = load_answers(&args.file)?;

    // Drive the records through the controller so only schema-valid
    // sections count as complete, exactly as in the interactive wizard.
    let mut wizard = WizardController::new();
    for step in StepId::data_steps() {
        if let Some(record) = answers.record(*step) {
            if let Err(err) = wizard.submit(*step, record.clone()) {
                eprintln!(
                    "{} {} rejected: {}",
                    style("!").yellow(),
                    step.title(),
                    err
                );
            }
        }
    }

    match global.format {
        OutputFormat::Text => print_review(wizard.state()),
        OutputFormat::Json | OutputFormat::Yaml => {
            let completion = wizard.completion();
            let report = ReviewReport {
                all_completed: completion.all_completed(),
                completion,
                summary: ReviewSummary::from_state(wizard.state()),
            };
            if global.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
            } else {
                print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
            }
        }
    }

    Ok(())
}
