//! Step 3 — Financial Planning
//!
//! Project cost heads, the land & building breakdown, means of finance
//! (four sources, each amount + percentage), and the five-year projections.
//! Funding percentages are captured verbatim; no sum-to-100 check is made
//! (documented gap).

use crate::core::record::StepId;
use crate::schema::rules::{FieldDef, StepSchema};

const FIELDS: &[FieldDef] = &[
    // Project cost heads
    FieldDef::min("landBuildingCost", 1, "Land and building cost required"),
    FieldDef::min("machineryInstallationCost", 1, "Machinery cost required"),
    FieldDef::min("preliminaryExpenses", 1, "Preliminary expenses required"),
    FieldDef::min("marginMoneyWorkingCapital", 1, "Working capital margin required"),
    // Land and building breakdown
    FieldDef::min("landArea", 1, "Land area required"),
    FieldDef::min("landCost", 1, "Land cost required"),
    FieldDef::min("buildingArea", 1, "Building area required"),
    FieldDef::min("buildingCost", 1, "Building cost required"),
    FieldDef::min("siteDevelopmentCost", 1, "Site development cost required"),
    // Machinery
    FieldDef::min("machineryDetails", 20, "Machinery details required"),
    FieldDef::min("miscFixedAssets", 10, "Miscellaneous fixed assets required"),
    // Expense narratives
    FieldDef::min("preliminaryExpensesDetails", 10, "Preliminary expenses details required"),
    FieldDef::min("preOperativeExpenses", 10, "Pre-operative expenses details required"),
    FieldDef::min("contingencyProvisions", 10, "Contingency provisions required"),
    // Means of finance
    FieldDef::min("spvContribution", 1, "SPV contribution required"),
    FieldDef::min("spvContributionPercent", 1, "Percentage required"),
    FieldDef::min("goiGrant", 1, "GoI grant amount required"),
    FieldDef::min("goiGrantPercent", 1, "Percentage required"),
    FieldDef::min("stateGovtGrant", 1, "State govt grant required"),
    FieldDef::min("stateGovtGrantPercent", 1, "Percentage required"),
    FieldDef::min("bankLoan", 1, "Bank loan amount required"),
    FieldDef::min("bankLoanPercent", 1, "Percentage required"),
    // Viability
    FieldDef::min("usageCharges", 20, "Usage charges details required"),
    FieldDef::min("commercialViabilityComments", 50, "Commercial viability comments required"),
    // Five-year projections
    FieldDef::min("netBlockY1", 1, "Required"),
    FieldDef::min("netBlockY2", 1, "Required"),
    FieldDef::min("netBlockY3", 1, "Required"),
    FieldDef::min("netBlockY4", 1, "Required"),
    FieldDef::min("netBlockY5", 1, "Required"),
    FieldDef::min("currentAssetsY1", 1, "Required"),
    FieldDef::min("currentAssetsY2", 1, "Required"),
    FieldDef::min("currentAssetsY3", 1, "Required"),
    FieldDef::min("currentAssetsY4", 1, "Required"),
    FieldDef::min("currentAssetsY5", 1, "Required"),
    FieldDef::min("incomeY1", 1, "Required"),
    FieldDef::min("incomeY2", 1, "Required"),
    FieldDef::min("incomeY3", 1, "Required"),
    FieldDef::min("incomeY4", 1, "Required"),
    FieldDef::min("incomeY5", 1, "Required"),
    FieldDef::min("grossProfitY1", 1, "Required"),
    FieldDef::min("grossProfitY2", 1, "Required"),
    FieldDef::min("grossProfitY3", 1, "Required"),
    FieldDef::min("grossProfitY4", 1, "Required"),
    FieldDef::min("grossProfitY5", 1, "Required"),
    FieldDef::min("profitAfterTaxY1", 1, "Required"),
    FieldDef::min("profitAfterTaxY2", 1, "Required"),
    FieldDef::min("profitAfterTaxY3", 1, "Required"),
    FieldDef::min("profitAfterTaxY4", 1, "Required"),
    FieldDef::min("profitAfterTaxY5", 1, "Required"),
    FieldDef::min("revenueAssumptions", 50, "Revenue assumptions required"),
];

/// The four project cost heads summed into the total project cost
pub const COST_FIELDS: &[&str] = &[
    "landBuildingCost",
    "machineryInstallationCost",
    "preliminaryExpenses",
    "marginMoneyWorkingCapital",
];

/// Means of finance, as (label, amount field, percent field)
pub const FUNDING_SOURCES: &[(&str, &str, &str)] = &[
    ("SPV Contribution", "spvContribution", "spvContributionPercent"),
    ("GoI Grant", "goiGrant", "goiGrantPercent"),
    ("State Govt Grant", "stateGovtGrant", "stateGovtGrantPercent"),
    ("Bank Loan", "bankLoan", "bankLoanPercent"),
];

/// The income projection series, FY1 through FY5
pub const INCOME_FIELDS: &[&str] = &["incomeY1", "incomeY2", "incomeY3", "incomeY4", "incomeY5"];

pub fn schema() -> StepSchema {
    StepSchema {
        step: StepId::FinancialPlanning,
        fields: FIELDS,
    }
}
