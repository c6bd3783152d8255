//! Per-step field tables
//!
//! One module per wizard data-entry step, each exporting its declarative
//! [`StepSchema`](crate::schema::rules::StepSchema):
//!
//! - [`business_info`] - proposal, applicant, cluster introduction, SPV, promoter
//! - [`project_details`] - scope, utilities, manpower, implementation schedule
//! - [`financial_planning`] - cost heads, means of finance, 5-year projections
//! - [`market_analysis`] - impact metrics, SWOT, risks, approvals

pub mod business_info;
pub mod financial_planning;
pub mod market_analysis;
pub mod project_details;

use crate::core::record::StepId;
use crate::schema::rules::StepSchema;

/// The schema for a data-entry step. Review has no schema.
pub fn schema_for(step: StepId) -> Option<StepSchema> {
    match step {
        StepId::BusinessInfo => Some(business_info::schema()),
        StepId::ProjectDetails => Some(project_details::schema()),
        StepId::FinancialPlanning => Some(financial_planning::schema()),
        StepId::MarketAnalysis => Some(market_analysis::schema()),
        StepId::Review => None,
    }
}

/// All four step schemas in wizard order
pub fn all_schemas() -> Vec<StepSchema> {
    StepId::data_steps()
        .iter()
        .filter_map(|s| schema_for(*s))
        .collect()
}

/// Minimal valid records for each step, shared across unit tests
#[cfg(test)]
pub mod samples {
    use crate::core::record::StepRecord;

    pub fn business_info() -> StepRecord {
        let long50 = "x".repeat(50);
        [
            ("proposalTitle", "Granite CFC proposal"),
            ("applicantName", "A. Rao"),
            ("contactNumber", "9876543210"),
            ("email", "applicant@example.com"),
            ("registeredAddress", "12-3 Industrial Estate, Ongole"),
            ("cfcAddress", "Plot 7, Growth Centre, Ongole"),
            ("mainFacilities", "Common polishing and edge-cutting line"),
            ("stateIndustryScenario", long50.as_str()),
            ("sectorDescription", long50.as_str()),
            ("clusterProducts", long50.as_str()),
            ("numberOfUnits", "50"),
            ("employment", "200/300"),
            ("turnover", "500"),
            ("cfcRelevance", long50.as_str()),
            ("spvName", "Ongole Granite SPV Pvt Ltd"),
            ("spvAddress", "12-3 Industrial Estate, Ongole"),
            ("spvRegistrationNumber", "U12345AP2024NPL001"),
            ("spvFormationDate", "2024-06-01"),
            ("spvCommencementDate", "2024-07-01"),
            ("mseMemberUnits", "25"),
            ("spvObjectives", "Operate common facilities for members"),
            ("authorizedShareCapital", "1000000"),
            ("promoterName", "A. Rao"),
            ("promoterAge", "45"),
            ("promoterQualification", "B.Tech"),
            ("promoterExperience", "15 years in granite processing"),
        ]
        .into_iter()
        .collect()
    }

    pub fn project_details() -> StepRecord {
        let long50 = "y".repeat(50);
        let mut rec: StepRecord = [
            ("projectScope", long50.as_str()),
            ("locationDetails", "Plot 7, Growth Centre, Ongole"),
            ("technology", "CNC edge-cutting and resin line machinery"),
            ("rawMaterials", "Rough granite blocks from member quarries"),
            ("powerRequirements", "250 kVA HT connection"),
            ("waterRequirements", "20 KLD from borewell"),
            ("effluentDisposal", "Closed-loop water recycling plant"),
            ("managerCount", "2"),
            ("supervisorCount", "4"),
            ("skilledWorkerCount", "12"),
            ("unskilledWorkerCount", "10"),
            ("implementationPeriod", "18 months"),
        ]
        .into_iter()
        .collect();

        for (i, (_, start, end)) in super::project_details::MILESTONES.iter().enumerate() {
            rec.set(*start, format!("2025-{:02}-01", i + 1));
            rec.set(*end, format!("2025-{:02}-28", i + 1));
        }
        rec
    }

    pub fn financial_planning() -> StepRecord {
        let long50 = "z".repeat(50);
        let mut rec: StepRecord = [
            ("landBuildingCost", "50.00"),
            ("machineryInstallationCost", "150.00"),
            ("preliminaryExpenses", "10.00"),
            ("marginMoneyWorkingCapital", "20.00"),
            ("landArea", "2 acres"),
            ("landCost", "30.00"),
            ("buildingArea", "20000 sqft"),
            ("buildingCost", "15.00"),
            ("siteDevelopmentCost", "5.00"),
            ("machineryDetails", "Imported multi-blade cutter, polisher"),
            ("miscFixedAssets", "Weighbridge, DG set"),
            ("preliminaryExpensesDetails", "Survey and registration"),
            ("preOperativeExpenses", "Trial production consumables"),
            ("contingencyProvisions", "5% of machinery cost"),
            ("spvContribution", "23.00"),
            ("spvContributionPercent", "10"),
            ("goiGrant", "161.00"),
            ("goiGrantPercent", "70"),
            ("stateGovtGrant", "23.00"),
            ("stateGovtGrantPercent", "10"),
            ("bankLoan", "23.00"),
            ("bankLoanPercent", "10"),
            ("usageCharges", "Per-hour machine usage charges for members"),
            ("commercialViabilityComments", long50.as_str()),
            ("revenueAssumptions", long50.as_str()),
        ]
        .into_iter()
        .collect();

        for series in ["netBlock", "currentAssets", "income", "grossProfit", "profitAfterTax"] {
            for year in 1..=5 {
                rec.set(format!("{series}Y{year}"), format!("{}.00", year * 10));
            }
        }
        rec
    }

    pub fn market_analysis() -> StepRecord {
        let long50 = "w".repeat(50);
        let mut rec: StepRecord = [
            ("strengths", long50.as_str()),
            ("weaknesses", long50.as_str()),
            ("opportunities", long50.as_str()),
            ("threats", long50.as_str()),
            ("risksImplementation", long50.as_str()),
            ("risksOperations", long50.as_str()),
            ("mitigationImplementation", long50.as_str()),
            ("mitigationOperations", long50.as_str()),
            ("pollutionControlStatus", "Consent to establish obtained"),
            ("landUsePermissionStatus", "Conversion order issued"),
        ]
        .into_iter()
        .collect();

        for (_, before, after) in super::market_analysis::IMPACT_METRICS {
            rec.set(*before, "100");
            rec.set(*after, "250");
        }
        rec
    }
}
