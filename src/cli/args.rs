//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    export::ExportArgs, review::ReviewArgs, schema::SchemaCommands, validate::ValidateArgs,
    wizard::WizardArgs,
};
use crate::cli::commands::completions::CompletionsArgs;

#[derive(Parser)]
#[command(name = "dpr")]
#[command(author, version, about = "DPR Wizard - build a Detailed Project Report step by step")]
#[command(
    long_about = "A step-by-step wizard that collects the data for a Detailed Project Report (MSE-CDP Common Facility Centre funding application), validates every field, and exports a submission-ready document."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive five-step wizard
    Wizard(WizardArgs),

    /// Validate an answers file against the step schemas
    Validate(ValidateArgs),

    /// Show completion status and the derived review summary
    Review(ReviewArgs),

    /// Export a completed answers file as a DPR document
    Export(ExportArgs),

    /// Inspect the per-step field schemas
    #[command(subcommand)]
    Schema(SchemaCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// JSON (for programming)
    Json,
    /// YAML
    Yaml,
}
