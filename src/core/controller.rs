//! Wizard controller - linear step sequencing with validation-gated admission

use miette::Diagnostic;
use thiserror::Error;

use crate::core::export::{ExportError, Exporter};
use crate::core::record::{StepId, StepRecord};
use crate::core::state::{CompletionStatus, WizardState};
use crate::schema::errors::FieldErrorSet;
use crate::steps;

/// How forward navigation and step jumps are gated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// A step is reachable only when every earlier data step has an
    /// admitted record (recommended).
    #[default]
    Gated,
    /// Any step is reachable at any time, as in the original wizard shell;
    /// export stays guarded regardless.
    Free,
}

/// Errors surfaced at the controller boundary
#[derive(Debug, Error, Diagnostic)]
pub enum WizardError {
    /// The submitted record failed its step's schema
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] FieldErrorSet),

    /// Records cannot be submitted to the review step
    #[error("{0} does not accept a record")]
    #[diagnostic(code(dpr::wizard::not_a_data_step))]
    NotADataStep(StepId),

    /// Export was requested before all sections were complete
    #[error("cannot export: {missing} section(s) still incomplete")]
    #[diagnostic(
        code(dpr::wizard::incomplete),
        help("complete every section before exporting")
    )]
    Incomplete { missing: usize },

    /// The export collaborator failed
    #[error(transparent)]
    #[diagnostic(code(dpr::wizard::export_failed))]
    Export(#[from] ExportError),
}

/// Owns the wizard state and enforces the sequencing rules: forward moves
/// require the current step's record, backward moves never discard anything,
/// and export is refused until every section is complete - independent of
/// whatever the surrounding UI enables.
#[derive(Debug, Default)]
pub struct WizardController {
    state: WizardState,
    policy: NavigationPolicy,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
            policy: NavigationPolicy::Gated,
        }
    }

    pub fn with_policy(policy: NavigationPolicy) -> Self {
        Self {
            state: WizardState::new(),
            policy,
        }
    }

    pub fn current(&self) -> StepId {
        self.state.current()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    /// Validate a candidate record against the step's schema and, on
    /// success, admit it into wizard state. Replaces any earlier record for
    /// the step. A rejected record leaves state untouched.
    pub fn submit(&mut self, step: StepId, record: StepRecord) -> Result<(), WizardError> {
        let schema = steps::schema_for(step).ok_or(WizardError::NotADataStep(step))?;
        schema.validate(&record)?;
        self.state.admit(step, record);
        Ok(())
    }

    /// Whether a step may become the current step under the active policy
    pub fn can_enter(&self, step: StepId) -> bool {
        match self.policy {
            NavigationPolicy::Free => true,
            NavigationPolicy::Gated => StepId::data_steps()
                .iter()
                .take_while(|s| s.number() < step.number())
                .all(|s| self.state.record(*s).is_some()),
        }
    }

    /// Move to the next step. Under the gated policy this requires the
    /// current step's record; a blocked move is a no-op returning false.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.current().next() else {
            return false;
        };
        if self.can_enter(next) {
            self.state.set_current(next);
            true
        } else {
            false
        }
    }

    /// Move to the previous step. Never discards captured records.
    pub fn retreat(&mut self) -> bool {
        match self.current().prev() {
            Some(prev) => {
                self.state.set_current(prev);
                true
            }
            None => false,
        }
    }

    /// Jump directly to a step. The admission rule is applied transitively:
    /// under the gated policy a step is reachable only when all intervening
    /// steps are already complete.
    pub fn jump_to(&mut self, step: StepId) -> bool {
        if self.can_enter(step) {
            self.state.set_current(step);
            true
        } else {
            false
        }
    }

    /// True iff all four data-entry steps have admitted records
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn completion(&self) -> CompletionStatus {
        self.state.completion()
    }

    /// Hand the four records to the export collaborator. Refused while any
    /// section is incomplete; the guard lives here, not in the UI. On
    /// success the collaborator is invoked exactly once with the records
    /// exactly as admitted.
    pub fn export(&self, exporter: &mut dyn Exporter) -> Result<(), WizardError> {
        let missing = StepId::data_steps()
            .iter()
            .filter(|s| self.state.record(**s).is_none())
            .count();
        if missing > 0 {
            return Err(WizardError::Incomplete { missing });
        }

        // All four are present; the guard above makes these infallible.
        let business = self.state.record(StepId::BusinessInfo).unwrap();
        let project = self.state.record(StepId::ProjectDetails).unwrap();
        let financial = self.state.record(StepId::FinancialPlanning).unwrap();
        let market = self.state.record(StepId::MarketAnalysis).unwrap();

        exporter.request_export(business, project, financial, market)?;
        Ok(())
    }
}
