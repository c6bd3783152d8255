//! Review aggregation - derived totals over the captured step records
//!
//! Everything here is a pure function of the wizard state, recomputed on
//! demand and never cached. Numeric parsing is deliberately lenient: a
//! missing or unparsable value counts as zero, mirroring the behavior the
//! exported documents have always had.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::record::{StepId, StepRecord};
use crate::core::state::WizardState;
use crate::steps::financial_planning::{COST_FIELDS, FUNDING_SOURCES, INCOME_FIELDS};
use crate::steps::market_analysis::IMPACT_METRICS;

/// Lenient money parse: unparsable or missing -> 0
pub fn parse_amount(value: &str) -> Decimal {
    value.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Lenient integer parse: unparsable or missing -> 0
pub fn parse_count(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// One funding source, amount and percentage echoed verbatim from input.
/// No cross-check that percentages sum to 100 is made.
#[derive(Debug, Clone, Serialize)]
pub struct FundingSource {
    pub name: &'static str,
    pub amount: String,
    pub percent: String,
}

/// One before/after intervention pair, surfaced as-is for display.
/// No derived percentage change is computed.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactMetric {
    pub name: &'static str,
    pub before: String,
    pub after: String,
}

/// Derived review-screen figures. Built on demand from the step records;
/// absent steps contribute zeros and empty sections.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub total_project_cost: Decimal,
    pub total_manpower: i64,
    pub funding: Vec<FundingSource>,
    /// Projected income, FY1 through FY5
    pub income_series: Vec<String>,
    pub impact: Vec<ImpactMetric>,
}

impl ReviewSummary {
    pub fn from_state(state: &WizardState) -> Self {
        Self::from_records(
            state.record(StepId::ProjectDetails),
            state.record(StepId::FinancialPlanning),
            state.record(StepId::MarketAnalysis),
        )
    }

    pub fn from_records(
        project: Option<&StepRecord>,
        financial: Option<&StepRecord>,
        market: Option<&StepRecord>,
    ) -> Self {
        Self {
            total_project_cost: total_project_cost(financial),
            total_manpower: total_manpower(project),
            funding: funding_breakdown(financial),
            income_series: income_series(financial),
            impact: impact_metrics(market),
        }
    }

    /// Total cost formatted the way the review screen shows it (two decimals)
    pub fn total_cost_display(&self) -> String {
        format!("{:.2}", self.total_project_cost)
    }
}

/// Sum of the four project cost heads. A missing financial record or an
/// unparsable field contributes zero.
pub fn total_project_cost(financial: Option<&StepRecord>) -> Decimal {
    let Some(record) = financial else {
        return Decimal::ZERO;
    };
    COST_FIELDS
        .iter()
        .map(|field| parse_amount(record.get_or_empty(field)))
        .sum()
}

/// Managers + supervisors + skilled + unskilled, lenient parse
pub fn total_manpower(project: Option<&StepRecord>) -> i64 {
    let Some(record) = project else {
        return 0;
    };
    [
        "managerCount",
        "supervisorCount",
        "skilledWorkerCount",
        "unskilledWorkerCount",
    ]
    .iter()
    .map(|field| parse_count(record.get_or_empty(field)))
    .sum()
}

fn funding_breakdown(financial: Option<&StepRecord>) -> Vec<FundingSource> {
    let Some(record) = financial else {
        return Vec::new();
    };
    FUNDING_SOURCES
        .iter()
        .map(|&(name, amount, percent)| FundingSource {
            name,
            amount: record.get_or_empty(amount).to_string(),
            percent: record.get_or_empty(percent).to_string(),
        })
        .collect()
}

fn income_series(financial: Option<&StepRecord>) -> Vec<String> {
    let Some(record) = financial else {
        return Vec::new();
    };
    INCOME_FIELDS
        .iter()
        .map(|field| record.get_or_empty(field).to_string())
        .collect()
}

fn impact_metrics(market: Option<&StepRecord>) -> Vec<ImpactMetric> {
    let Some(record) = market else {
        return Vec::new();
    };
    IMPACT_METRICS
        .iter()
        .map(|&(name, before, after)| ImpactMetric {
            name,
            before: record.get_or_empty(before).to_string(),
            after: record.get_or_empty(after).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_project_cost_sums_the_four_heads() {
        let record: StepRecord = [
            ("landBuildingCost", "50.00"),
            ("machineryInstallationCost", "150.00"),
            ("preliminaryExpenses", "10.00"),
            ("marginMoneyWorkingCapital", "20.00"),
        ]
        .into_iter()
        .collect();
        let total = total_project_cost(Some(&record));
        assert_eq!(total, dec!(230.00));
        assert_eq!(format!("{:.2}", total), "230.00");
    }

    #[test]
    fn test_total_cost_without_financial_record_is_zero() {
        let summary = ReviewSummary::from_records(None, None, None);
        assert_eq!(summary.total_project_cost, Decimal::ZERO);
        assert_eq!(summary.total_cost_display(), "0.00");
        assert!(summary.funding.is_empty());
        assert!(summary.income_series.is_empty());
        assert!(summary.impact.is_empty());
    }

    #[test]
    fn test_manpower_treats_unparsable_as_zero() {
        let record: StepRecord = [
            ("managerCount", "2"),
            ("supervisorCount", "4"),
            ("skilledWorkerCount", ""),
            ("unskilledWorkerCount", "10"),
        ]
        .into_iter()
        .collect();
        assert_eq!(total_manpower(Some(&record)), 16);
    }

    #[test]
    fn test_unparsable_cost_field_counts_as_zero() {
        let record: StepRecord = [
            ("landBuildingCost", "fifty"),
            ("machineryInstallationCost", "150.00"),
            ("preliminaryExpenses", ""),
            ("marginMoneyWorkingCapital", "20.5"),
        ]
        .into_iter()
        .collect();
        assert_eq!(total_project_cost(Some(&record)), dec!(170.5));
    }

    #[test]
    fn test_funding_breakdown_is_verbatim() {
        // Percentages summing to 97 are reported exactly as entered.
        let record: StepRecord = [
            ("spvContribution", "23.00"),
            ("spvContributionPercent", "10"),
            ("goiGrant", "161.00"),
            ("goiGrantPercent", "67"),
            ("stateGovtGrant", "23.00"),
            ("stateGovtGrantPercent", "10"),
            ("bankLoan", "23.00"),
            ("bankLoanPercent", "10"),
        ]
        .into_iter()
        .collect();
        let funding = funding_breakdown(Some(&record));
        assert_eq!(funding.len(), 4);
        assert_eq!(funding[1].name, "GoI Grant");
        assert_eq!(funding[1].amount, "161.00");
        assert_eq!(funding[1].percent, "67");
    }

    #[test]
    fn test_income_series_is_ordered_fy1_to_fy5() {
        let record: StepRecord = [
            ("incomeY1", "30"),
            ("incomeY2", "45"),
            ("incomeY3", "60"),
            ("incomeY4", "75"),
            ("incomeY5", "90"),
        ]
        .into_iter()
        .collect();
        assert_eq!(income_series(Some(&record)), vec!["30", "45", "60", "75", "90"]);
    }

    #[test]
    fn test_impact_pairs_surface_without_derivation() {
        let record: StepRecord = [
            ("employmentBeforeIntervention", "200"),
            ("employmentAfterIntervention", "450"),
        ]
        .into_iter()
        .collect();
        let impact = impact_metrics(Some(&record));
        let employment = impact.iter().find(|m| m.name == "Employment").unwrap();
        assert_eq!(employment.before, "200");
        assert_eq!(employment.after, "450");
        // Pairs without data still appear, empty, so the table shape is stable.
        assert_eq!(impact.len(), 9);
    }

    #[test]
    fn test_summary_is_recomputed_not_cached() {
        let mut state = WizardState::new();
        assert_eq!(ReviewSummary::from_state(&state).total_manpower, 0);

        let record: StepRecord = [
            ("managerCount", "1"),
            ("supervisorCount", "1"),
            ("skilledWorkerCount", "1"),
            ("unskilledWorkerCount", "1"),
        ]
        .into_iter()
        .collect();
        // Admission goes through the controller in production; using the
        // crate-private admit here isolates the aggregation behavior.
        state.admit(StepId::ProjectDetails, record);
        assert_eq!(ReviewSummary::from_state(&state).total_manpower, 4);
    }
}
