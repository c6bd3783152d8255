//! `dpr validate` - check an answers file against the step schemas

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::record::StepId;
use crate::steps;

use super::load_answers;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Answers file (YAML) to validate
    pub file: PathBuf,

    /// Validate a single step only (e.g. business_info, 3)
    #[arg(long, short = 's')]
    pub step: Option<StepId>,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let answers = load_answers(&args.file)?;

    let selected: Vec<StepId> = match args.step {
        Some(StepId::Review) => {
            return Err(miette::miette!("review has no schema to validate against"));
        }
        Some(step) => vec![step],
        None => StepId::data_steps().to_vec(),
    };

    let mut invalid_fields = 0;
    let mut missing_steps = 0;

    for step in selected {
        let schema = steps::schema_for(step).expect("data step schema");
        let Some(record) = answers.record(step) else {
            if args.step.is_some() {
                return Err(miette::miette!(
                    "{} has no entry in {}",
                    step,
                    args.file.display()
                ));
            }
            if !global.quiet {
                println!("{} {:<22} not started", style("-").dim(), step.to_string());
            }
            missing_steps += 1;
            continue;
        };

        match schema.validate(record) {
            Ok(()) => {
                if !global.quiet {
                    if global.verbose {
                        println!(
                            "{} {:<22} valid ({} fields checked)",
                            style("✓").green(),
                            step.to_string(),
                            schema.fields.len()
                        );
                    } else {
                        println!("{} {:<22} valid", style("✓").green(), step.to_string());
                    }
                }
            }
            Err(errors) => {
                invalid_fields += errors.len();
                eprintln!("{:?}", miette::Report::new(errors));
            }
        }
    }

    if invalid_fields > 0 {
        return Err(miette::miette!("{} field(s) invalid", invalid_fields));
    }
    if !global.quiet && missing_steps == 0 {
        println!();
        println!("{} All steps valid", style("✓").green());
    }
    Ok(())
}
