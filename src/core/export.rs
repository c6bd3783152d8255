//! Export collaborator seam
//!
//! The controller hands the four validated records to an [`Exporter`]; what
//! happens after that (PDF, Word, bilingual output) is the collaborator's
//! business. [`MarkdownExporter`] is the bundled implementation, assembling
//! a submission-ready markdown document.

use chrono::Utc;
use std::io::Write;
use thiserror::Error;

use crate::core::record::{StepId, StepRecord};
use crate::review::aggregate::ReviewSummary;
use crate::steps;

/// Failure inside an export collaborator
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export output: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives the four complete, schema-valid step records.
///
/// The controller guarantees the records are all present and individually
/// valid at call time, and calls this exactly once per successful export.
pub trait Exporter {
    fn request_export(
        &mut self,
        business: &StepRecord,
        project: &StepRecord,
        financial: &StepRecord,
        market: &StepRecord,
    ) -> Result<(), ExportError>;
}

/// Writes the assembled DPR as a markdown document
pub struct MarkdownExporter<W: Write> {
    out: W,
    author: String,
}

impl<W: Write> MarkdownExporter<W> {
    pub fn new(out: W, author: impl Into<String>) -> Self {
        Self {
            out,
            author: author.into(),
        }
    }

    /// Consume the exporter and get the writer back (used by tests and by
    /// callers that buffer before writing to disk)
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_section(&mut self, step: StepId, record: &StepRecord) -> Result<(), ExportError> {
        let schema = steps::schema_for(step).expect("export sections are data steps");

        writeln!(self.out, "## {}. {}", step.number(), step.title())?;
        writeln!(self.out)?;
        for field in schema.fields {
            let value = record.get_or_empty(field.name);
            if value.is_empty() {
                continue; // only optional fields can be empty here
            }
            writeln!(self.out, "**{}**: {}", field.label(), value)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_summary(
        &mut self,
        project: &StepRecord,
        financial: &StepRecord,
        market: &StepRecord,
    ) -> Result<(), ExportError> {
        let summary = ReviewSummary::from_records(Some(project), Some(financial), Some(market));

        writeln!(self.out, "## Summary")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "**Total Project Cost**: ₹ {} Lakhs",
            summary.total_cost_display()
        )?;
        writeln!(self.out, "**Total Manpower**: {}", summary.total_manpower)?;
        writeln!(self.out)?;

        writeln!(self.out, "| Source | Amount (₹ Lakhs) | Share |")?;
        writeln!(self.out, "|---|---|---|")?;
        for source in &summary.funding {
            writeln!(
                self.out,
                "| {} | {} | {}% |",
                source.name, source.amount, source.percent
            )?;
        }
        writeln!(self.out)?;

        writeln!(self.out, "| FY1 | FY2 | FY3 | FY4 | FY5 |")?;
        writeln!(self.out, "|---|---|---|---|---|")?;
        writeln!(self.out, "| {} |", summary.income_series.join(" | "))?;
        writeln!(self.out)?;

        writeln!(self.out, "| Metric | Before | After |")?;
        writeln!(self.out, "|---|---|---|")?;
        for metric in &summary.impact {
            writeln!(
                self.out,
                "| {} | {} | {} |",
                metric.name, metric.before, metric.after
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Exporter for MarkdownExporter<W> {
    fn request_export(
        &mut self,
        business: &StepRecord,
        project: &StepRecord,
        financial: &StepRecord,
        market: &StepRecord,
    ) -> Result<(), ExportError> {
        let title = business.get_or_empty("proposalTitle");

        writeln!(self.out, "# Detailed Project Report: {}", title)?;
        writeln!(self.out)?;
        writeln!(self.out, "Prepared by: {}", self.author)?;
        writeln!(self.out, "Generated: {}", Utc::now().format("%Y-%m-%d"))?;
        writeln!(self.out)?;

        self.write_section(StepId::BusinessInfo, business)?;
        self.write_section(StepId::ProjectDetails, project)?;
        self.write_section(StepId::FinancialPlanning, financial)?;
        self.write_section(StepId::MarketAnalysis, market)?;
        self.write_summary(project, financial, market)?;

        self.out.flush()?;
        Ok(())
    }
}
