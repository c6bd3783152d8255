//! Core module - wizard state, sequencing, and the export seam

pub mod config;
pub mod controller;
pub mod export;
pub mod record;
pub mod state;

pub use config::Config;
pub use controller::{NavigationPolicy, WizardController, WizardError};
pub use export::{ExportError, Exporter, MarkdownExporter};
pub use record::{StepId, StepRecord};
pub use state::{CompletionStatus, WizardState};
