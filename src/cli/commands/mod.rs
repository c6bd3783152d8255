//! Command implementations

pub mod completions;
pub mod export;
pub mod review;
pub mod schema;
pub mod validate;
pub mod wizard;

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::record::{StepId, StepRecord};

/// An answers file: one YAML document mapping step name to field map.
/// Any step may be absent (incomplete drafts are fine for `validate` and
/// `review`; `export` needs all four).
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    pub business_info: Option<StepRecord>,
    pub project_details: Option<StepRecord>,
    pub financial_planning: Option<StepRecord>,
    pub market_analysis: Option<StepRecord>,
}

impl AnswersFile {
    pub fn record(&self, step: StepId) -> Option<&StepRecord> {
        match step {
            StepId::BusinessInfo => self.business_info.as_ref(),
            StepId::ProjectDetails => self.project_details.as_ref(),
            StepId::FinancialPlanning => self.financial_planning.as_ref(),
            StepId::MarketAnalysis => self.market_analysis.as_ref(),
            StepId::Review => None,
        }
    }
}

/// Load and parse an answers YAML file
pub fn load_answers(path: &Path) -> Result<AnswersFile> {
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_yml::from_str(&contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_file_parses_partial_documents() {
        let yaml = "business_info:\n  proposalTitle: Granite CFC\n  email: a@b.com\n";
        let answers: AnswersFile = serde_yml::from_str(yaml).unwrap();
        let record = answers.record(StepId::BusinessInfo).unwrap();
        assert_eq!(record.get("proposalTitle"), Some("Granite CFC"));
        assert!(answers.record(StepId::FinancialPlanning).is_none());
    }

    #[test]
    fn test_answers_file_rejects_unknown_steps() {
        let yaml = "business_inf:\n  proposalTitle: typo\n";
        assert!(serde_yml::from_str::<AnswersFile>(yaml).is_err());
    }
}
