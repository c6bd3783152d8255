//! Schema introspection
//!
//! Lets users and automation see exactly which fields each step expects
//! and what rule applies, without reading the source.

use clap::Subcommand;
use miette::Result;

use crate::core::record::StepId;
use crate::steps;

#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// List the wizard steps and their field counts
    List,

    /// Show the full field table for one step
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Step name or number (e.g. business_info, 3)
    pub step: StepId,
}

pub fn run(cmd: SchemaCommands) -> Result<()> {
    match cmd {
        SchemaCommands::List => list_steps(),
        SchemaCommands::Show(args) => show_step(args),
    }
}

fn list_steps() -> Result<()> {
    println!("Wizard steps:\n");
    println!("{:<6} {:<22} {:<24} {}", "STEP", "NAME", "TITLE", "FIELDS");
    println!("{}", "-".repeat(64));

    for step in StepId::all() {
        let fields = steps::schema_for(*step)
            .map(|s| s.fields.len().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<22} {:<24} {}",
            step.number(),
            step.to_string(),
            step.title(),
            fields
        );
    }

    println!("\nUse 'dpr schema show <step>' for field details");
    Ok(())
}

fn show_step(args: ShowArgs) -> Result<()> {
    let Some(schema) = steps::schema_for(args.step) else {
        return Err(miette::miette!(
            "{} is the review step; it has no input fields",
            args.step
        ));
    };

    println!(
        "Step {}: {} ({} fields, {} required)\n",
        args.step.number(),
        args.step.title(),
        schema.fields.len(),
        schema.required_count()
    );
    println!("{:<30} {:<14} {}", "FIELD", "RULE", "MESSAGE");
    println!("{}", "-".repeat(80));

    for field in schema.fields {
        println!("{:<30} {:<14} {}", field.name, field.rule.hint(), field.message);
    }

    Ok(())
}
