//! `dpr wizard` - the interactive five-step flow

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::config::Config;
use crate::core::controller::{NavigationPolicy, WizardController};
use crate::core::export::MarkdownExporter;
use crate::core::record::StepId;
use crate::review::render::print_review;
use crate::schema::form::StepForm;
use crate::steps;

#[derive(clap::Args, Debug)]
pub struct WizardArgs {
    /// Allow jumping to any step without completing the ones before it
    #[arg(long)]
    pub free_nav: bool,
}

pub fn run(args: WizardArgs, _global: &GlobalOpts) -> Result<()> {
    let policy = if args.free_nav {
        NavigationPolicy::Free
    } else {
        NavigationPolicy::Gated
    };
    let mut wizard = WizardController::with_policy(policy);
    let theme = ColorfulTheme::default();

    println!();
    println!("{} {}", style("◆").cyan(), style("DPR Creation Wizard").bold());
    println!("{}", style("Five steps to a bank-ready Detailed Project Report").dim());

    loop {
        let step = wizard.current();
        if step.is_data_step() {
            run_data_step(&mut wizard, step)?;
        } else if run_review(&mut wizard, &theme)? {
            return Ok(());
        }
    }
}

fn run_data_step(wizard: &mut WizardController, step: StepId) -> Result<()> {
    let schema = steps::schema_for(step).expect("data step schema");

    let mut form = StepForm::new(schema);
    if let Some(existing) = wizard.state().record(step) {
        form = form.with_initial(existing.clone());
    }

    // fill() loops until the record validates, so submission only fails if
    // the schema and the form disagree - which would be a bug worth seeing.
    let record = form.fill()?;
    wizard.submit(step, record).map_err(miette::Report::new)?;
    wizard.advance();
    Ok(())
}

/// Returns true when the wizard session is finished
fn run_review(wizard: &mut WizardController, theme: &ColorfulTheme) -> Result<bool> {
    print_review(wizard.state());

    let mut items = vec!["Edit a section", "Quit without exporting"];
    if wizard.is_complete() {
        items.insert(0, "Export DPR");
    }

    let choice = Select::with_theme(theme)
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match items[choice] {
        "Export DPR" => {
            export_interactive(wizard, theme)?;
            Ok(true)
        }
        "Edit a section" => {
            let titles: Vec<&str> = StepId::data_steps().iter().map(|s| s.title()).collect();
            let idx = Select::with_theme(theme)
                .with_prompt("Which section?")
                .items(&titles)
                .interact()
                .into_diagnostic()?;
            let target = StepId::data_steps()[idx];
            if !wizard.jump_to(target) {
                println!(
                    "{} Complete the earlier sections before editing {}",
                    style("!").yellow(),
                    target.title()
                );
            }
            Ok(false)
        }
        _ => Ok(true),
    }
}

fn export_interactive(wizard: &WizardController, theme: &ColorfulTheme) -> Result<()> {
    let config = Config::load();

    let path: String = Input::with_theme(theme)
        .with_prompt("Output file")
        .default("dpr-export.md".to_string())
        .interact_text()
        .into_diagnostic()?;
    let output = PathBuf::from(path);

    let file = File::create(&output)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create {}", output.display()))?;
    let mut exporter = MarkdownExporter::new(BufWriter::new(file), config.author());
    wizard.export(&mut exporter).map_err(miette::Report::new)?;

    println!(
        "{} Exported DPR to {}",
        style("✓").green(),
        style(output.display()).bold()
    );
    Ok(())
}
