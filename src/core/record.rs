//! Step identity and the captured per-step record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five wizard steps, in order. Step 5 is Review & Export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    BusinessInfo,
    ProjectDetails,
    FinancialPlanning,
    MarketAnalysis,
    Review,
}

impl StepId {
    /// Get the snake_case name used in answers files and CLI arguments
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::BusinessInfo => "business_info",
            StepId::ProjectDetails => "project_details",
            StepId::FinancialPlanning => "financial_planning",
            StepId::MarketAnalysis => "market_analysis",
            StepId::Review => "review",
        }
    }

    /// Human-readable step title
    pub fn title(&self) -> &'static str {
        match self {
            StepId::BusinessInfo => "Business Information",
            StepId::ProjectDetails => "Project Details",
            StepId::FinancialPlanning => "Financial Planning",
            StepId::MarketAnalysis => "Market Analysis",
            StepId::Review => "Review & Export",
        }
    }

    /// One-line description shown in the wizard sidebar
    pub fn description(&self) -> &'static str {
        match self {
            StepId::BusinessInfo => "Tell us about your business",
            StepId::ProjectDetails => "Describe your project",
            StepId::FinancialPlanning => "Cost structures and funding",
            StepId::MarketAnalysis => "Target market and competition",
            StepId::Review => "Finalize your DPR",
        }
    }

    /// 1-based position in the wizard (1..=5)
    pub fn number(&self) -> u8 {
        match self {
            StepId::BusinessInfo => 1,
            StepId::ProjectDetails => 2,
            StepId::FinancialPlanning => 3,
            StepId::MarketAnalysis => 4,
            StepId::Review => 5,
        }
    }

    /// Look up a step by its 1-based position
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(StepId::BusinessInfo),
            2 => Some(StepId::ProjectDetails),
            3 => Some(StepId::FinancialPlanning),
            4 => Some(StepId::MarketAnalysis),
            5 => Some(StepId::Review),
            _ => None,
        }
    }

    /// All steps in wizard order
    pub fn all() -> &'static [StepId] {
        &[
            StepId::BusinessInfo,
            StepId::ProjectDetails,
            StepId::FinancialPlanning,
            StepId::MarketAnalysis,
            StepId::Review,
        ]
    }

    /// The four data-entry steps (everything except Review)
    pub fn data_steps() -> &'static [StepId] {
        &[
            StepId::BusinessInfo,
            StepId::ProjectDetails,
            StepId::FinancialPlanning,
            StepId::MarketAnalysis,
        ]
    }

    /// The step after this one, if any
    pub fn next(&self) -> Option<StepId> {
        StepId::from_number(self.number() + 1)
    }

    /// The step before this one, if any
    pub fn prev(&self) -> Option<StepId> {
        self.number().checked_sub(1).and_then(StepId::from_number)
    }

    /// Whether this step captures a record (Review does not)
    pub fn is_data_step(&self) -> bool {
        !matches!(self, StepId::Review)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a step name
#[derive(Debug, Error)]
#[error("unknown step: {0} (expected business_info, project_details, financial_planning, market_analysis, or review)")]
pub struct StepParseError(String);

impl FromStr for StepId {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "business_info" | "1" => Ok(StepId::BusinessInfo),
            "project_details" | "2" => Ok(StepId::ProjectDetails),
            "financial_planning" | "3" => Ok(StepId::FinancialPlanning),
            "market_analysis" | "4" => Ok(StepId::MarketAnalysis),
            "review" | "5" => Ok(StepId::Review),
            _ => Err(StepParseError(s.to_string())),
        }
    }
}

/// The data captured for one wizard step: a mapping from field name to the
/// raw string value the user supplied. Field names are fixed by the step's
/// schema; the map is ordered so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepRecord {
    fields: BTreeMap<String, String>,
}

impl StepRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field's value, if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field's value, treating an absent field as empty
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Set a field's value, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Number of fields with a stored value
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (field, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StepRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
