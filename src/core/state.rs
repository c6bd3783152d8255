//! Wizard state - current position plus the admitted step records

use serde::Serialize;

use crate::core::record::{StepId, StepRecord};

/// The explicit, passable state of one wizard run.
///
/// A record for a step is present only after that step's form has been
/// submitted and validated successfully at least once; records are written
/// whole or not at all. The wizard owns its records exclusively - readers
/// get snapshots by reference.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    current: Option<StepId>,
    business_info: Option<StepRecord>,
    project_details: Option<StepRecord>,
    financial_planning: Option<StepRecord>,
    market_analysis: Option<StepRecord>,
}

impl WizardState {
    /// Fresh state: position at step 1, no records captured
    pub fn new() -> Self {
        Self {
            current: Some(StepId::BusinessInfo),
            ..Self::default()
        }
    }

    /// The step the wizard is currently on
    pub fn current(&self) -> StepId {
        self.current.unwrap_or(StepId::BusinessInfo)
    }

    pub(crate) fn set_current(&mut self, step: StepId) {
        self.current = Some(step);
    }

    /// Read-only snapshot of a step's admitted record
    pub fn record(&self, step: StepId) -> Option<&StepRecord> {
        match step {
            StepId::BusinessInfo => self.business_info.as_ref(),
            StepId::ProjectDetails => self.project_details.as_ref(),
            StepId::FinancialPlanning => self.financial_planning.as_ref(),
            StepId::MarketAnalysis => self.market_analysis.as_ref(),
            StepId::Review => None,
        }
    }

    /// Store a validated record. Only the controller calls this, after the
    /// step's schema has accepted the record in full.
    pub(crate) fn admit(&mut self, step: StepId, record: StepRecord) {
        match step {
            StepId::BusinessInfo => self.business_info = Some(record),
            StepId::ProjectDetails => self.project_details = Some(record),
            StepId::FinancialPlanning => self.financial_planning = Some(record),
            StepId::MarketAnalysis => self.market_analysis = Some(record),
            StepId::Review => {}
        }
    }

    /// Whether a step's record has been captured
    pub fn is_step_complete(&self, step: StepId) -> bool {
        match step {
            StepId::Review => self.is_complete(),
            _ => self.record(step).is_some(),
        }
    }

    /// True iff all four data-entry steps have admitted records
    pub fn is_complete(&self) -> bool {
        StepId::data_steps().iter().all(|s| self.record(*s).is_some())
    }

    /// Per-step completion flags, derived on demand
    pub fn completion(&self) -> CompletionStatus {
        CompletionStatus {
            sections: StepId::data_steps()
                .iter()
                .map(|s| SectionStatus {
                    step: *s,
                    name: s.title(),
                    completed: self.record(*s).is_some(),
                })
                .collect(),
        }
    }
}

/// Completion checklist for the review screen
#[derive(Debug, Clone, Serialize)]
pub struct CompletionStatus {
    pub sections: Vec<SectionStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionStatus {
    #[serde(skip)]
    pub step: StepId,
    pub name: &'static str,
    pub completed: bool,
}

impl CompletionStatus {
    pub fn all_completed(&self) -> bool {
        self.sections.iter().all(|s| s.completed)
    }
}
