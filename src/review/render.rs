//! Terminal rendering of the review screen

use console::style;

use crate::core::record::{StepId, StepRecord};
use crate::core::state::WizardState;
use crate::review::aggregate::ReviewSummary;

/// Print the completion checklist and the derived summary, in the layout
/// the review step shows before export.
pub fn print_review(state: &WizardState) {
    let completion = state.completion();
    let summary = ReviewSummary::from_state(state);

    println!();
    println!("{}", style("DPR Summary").bold());
    println!("{}", "-".repeat(50));

    for section in &completion.sections {
        let mark = if section.completed {
            style("✓").green()
        } else {
            style("✗").red()
        };
        let note = if section.completed { "" } else { "  (incomplete)" };
        println!("  {} {}{}", mark, section.name, style(note).dim());
    }

    if let Some(business) = state.record(StepId::BusinessInfo) {
        println!();
        println!("  {}", style("Business Information").bold());
        print_highlight(business, "proposalTitle", "Proposal Title");
        print_highlight(business, "applicantName", "Applicant Name");
        print_highlight(business, "spvName", "SPV Name");
        print_highlight(business, "mseMemberUnits", "Number of MSE Units");
    }

    if let Some(project) = state.record(StepId::ProjectDetails) {
        println!();
        println!("  {}", style("Project Details").bold());
        print_highlight(project, "implementationPeriod", "Implementation Period");
        print_highlight(project, "powerRequirements", "Power Requirements");
    }

    println!();
    println!(
        "  {:<24} ₹ {} Lakhs",
        "Total Project Cost",
        style(summary.total_cost_display()).bold()
    );
    println!("  {:<24} {}", "Total Manpower", summary.total_manpower);

    if !summary.funding.is_empty() {
        println!();
        println!("  {}", style("Means of Finance").bold());
        for source in &summary.funding {
            println!(
                "    {:<20} ₹ {} Lakhs ({}%)",
                source.name, source.amount, source.percent
            );
        }
    }

    if !summary.income_series.is_empty() {
        println!();
        println!("  {}", style("5-Year Projected Income").bold());
        let cells: Vec<String> = summary
            .income_series
            .iter()
            .enumerate()
            .map(|(i, v)| format!("FY{}: ₹{}L", i + 1, v))
            .collect();
        println!("    {}", cells.join("  "));
    }

    if !summary.impact.is_empty() {
        println!();
        println!("  {}", style("Impact of Intervention").bold());
        for metric in &summary.impact {
            println!("    {:<20} {} → {}", metric.name, metric.before, metric.after);
        }
    }

    println!();
    if completion.all_completed() {
        println!("{} Your DPR is complete and ready to export!", style("✓").green());
    } else {
        println!(
            "{} Complete all sections before exporting your DPR.",
            style("!").yellow()
        );
    }
}

fn print_highlight(record: &StepRecord, field: &str, label: &str) {
    println!("    {:<22} {}", label, record.get_or_empty(field));
}
