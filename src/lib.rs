//! dpr - Detailed Project Report builder
//!
//! A five-step wizard for assembling a bank-ready Detailed Project Report:
//! four validated data-entry sections (business information, project
//! details, financial planning, market analysis) followed by a review
//! screen with derived totals and a guarded export.
//!
//! The crate splits along the same seams the flow does:
//!
//! - [`schema`] - declarative field rules, exhaustive validation, and the
//!   interactive form loop
//! - [`steps`] - the field tables for the four data-entry sections
//! - [`core`] - wizard state, the sequencing controller, and the export
//!   boundary
//! - [`review`] - derived summary figures and the review rendering
//! - [`cli`] - the `dpr` command surface

pub mod cli;
pub mod core;
pub mod review;
pub mod schema;
pub mod steps;
