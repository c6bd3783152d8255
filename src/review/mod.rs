//! Review step - derived summaries and their rendering

pub mod aggregate;
pub mod render;

pub use aggregate::{FundingSource, ImpactMetric, ReviewSummary};
pub use render::print_review;
