//! `dpr export` - assemble a completed answers file into a DPR document

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::controller::{WizardController, WizardError};
use crate::core::export::MarkdownExporter;
use crate::core::record::StepId;

use super::load_answers;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Answers file (YAML) with all four steps filled in
    pub file: PathBuf,

    /// Output path for the generated document
    #[arg(long, short = 'o', default_value = "dpr-export.md")]
    pub output: PathBuf,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let answers = load_answers(&args.file)?;
    let config = Config::load();

    let mut wizard = WizardController::new();
    let mut invalid = 0;
    for step in StepId::data_steps() {
        if let Some(record) = answers.record(*step) {
            match wizard.submit(*step, record.clone()) {
                Ok(()) => {}
                Err(WizardError::Validation(errors)) => {
                    invalid += errors.len();
                    eprintln!("{:?}", miette::Report::new(errors));
                }
                Err(other) => return Err(miette::Report::new(other)),
            }
        }
    }
    if invalid > 0 {
        return Err(miette::miette!(
            "cannot export: {} field(s) invalid",
            invalid
        ));
    }

    let output = match config.export_dir {
        Some(ref dir) if args.output.is_relative() => dir.join(&args.output),
        _ => args.output.clone(),
    };

    // Assemble in memory first: a refused export (the controller rejects
    // any incomplete DPR) must leave whatever is at the output path intact.
    let mut exporter = MarkdownExporter::new(Vec::new(), config.author());
    wizard.export(&mut exporter).map_err(miette::Report::new)?;

    fs::write(&output, exporter.into_inner())
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    if !global.quiet {
        if global.verbose {
            println!("Prepared by: {}", config.author());
        }
        println!(
            "{} Exported DPR to {}",
            style("✓").green(),
            style(output.display()).bold()
        );
    }
    Ok(())
}
