//! Step 4 — Market Analysis & Impact
//!
//! Nine before/after intervention metrics, the SWOT narrative, risk and
//! mitigation narratives for both project phases, and approval statuses.

use crate::core::record::StepId;
use crate::schema::rules::{FieldDef, StepSchema};

const FIELDS: &[FieldDef] = &[
    // Before/after intervention metrics
    FieldDef::min("qtyBeforeIntervention", 1, "Required"),
    FieldDef::min("qtyAfterIntervention", 1, "Required"),
    FieldDef::min("unitsBeforeIntervention", 1, "Required"),
    FieldDef::min("unitsAfterIntervention", 1, "Required"),
    FieldDef::min("employmentBeforeIntervention", 1, "Required"),
    FieldDef::min("employmentAfterIntervention", 1, "Required"),
    FieldDef::min("productionBeforeIntervention", 1, "Required"),
    FieldDef::min("productionAfterIntervention", 1, "Required"),
    FieldDef::min("exportsBeforeIntervention", 1, "Required"),
    FieldDef::min("exportsAfterIntervention", 1, "Required"),
    FieldDef::min("importSubstitutionBefore", 1, "Required"),
    FieldDef::min("importSubstitutionAfter", 1, "Required"),
    FieldDef::min("investmentBeforeIntervention", 1, "Required"),
    FieldDef::min("investmentAfterIntervention", 1, "Required"),
    FieldDef::min("turnoverBeforeIntervention", 1, "Required"),
    FieldDef::min("turnoverAfterIntervention", 1, "Required"),
    FieldDef::min("profitBeforeIntervention", 1, "Required"),
    FieldDef::min("profitAfterIntervention", 1, "Required"),
    // SWOT
    FieldDef::min("strengths", 50, "Describe strengths in detail"),
    FieldDef::min("weaknesses", 50, "Describe weaknesses in detail"),
    FieldDef::min("opportunities", 50, "Describe opportunities in detail"),
    FieldDef::min("threats", 50, "Describe threats in detail"),
    // Risks and mitigation
    FieldDef::min("risksImplementation", 50, "Describe implementation phase risks"),
    FieldDef::min("risksOperations", 50, "Describe operations phase risks"),
    FieldDef::min("mitigationImplementation", 50, "Describe mitigation measures"),
    FieldDef::min("mitigationOperations", 50, "Describe mitigation measures"),
    // Approvals
    FieldDef::min("pollutionControlStatus", 10, "Status of pollution control approval"),
    FieldDef::min("landUsePermissionStatus", 10, "Status of land use permission"),
];

/// The before/after metric pairs, as (label, before field, after field)
pub const IMPACT_METRICS: &[(&str, &str, &str)] = &[
    ("Quantity", "qtyBeforeIntervention", "qtyAfterIntervention"),
    ("Number of Units", "unitsBeforeIntervention", "unitsAfterIntervention"),
    ("Employment", "employmentBeforeIntervention", "employmentAfterIntervention"),
    ("Production", "productionBeforeIntervention", "productionAfterIntervention"),
    ("Exports", "exportsBeforeIntervention", "exportsAfterIntervention"),
    ("Import Substitution", "importSubstitutionBefore", "importSubstitutionAfter"),
    ("Investment", "investmentBeforeIntervention", "investmentAfterIntervention"),
    ("Turnover", "turnoverBeforeIntervention", "turnoverAfterIntervention"),
    ("Profit", "profitBeforeIntervention", "profitAfterIntervention"),
];

pub fn schema() -> StepSchema {
    StepSchema {
        step: StepId::MarketAnalysis,
        fields: FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::samples;

    #[test]
    fn test_field_count() {
        assert_eq!(schema().fields.len(), 28);
    }

    #[test]
    fn test_impact_metrics_cover_all_pairs() {
        assert_eq!(IMPACT_METRICS.len(), 9);
        let s = schema();
        for (_, before, after) in IMPACT_METRICS {
            assert!(s.field(before).is_some(), "unknown field {before}");
            assert!(s.field(after).is_some(), "unknown field {after}");
        }
    }

    #[test]
    fn test_minimal_valid_record_passes() {
        assert!(schema().validate(&samples::market_analysis()).is_ok());
    }

    #[test]
    fn test_swot_needs_substance() {
        let mut rec = samples::market_analysis();
        rec.set("strengths", "strong");
        rec.set("threats", "none");
        let errs = schema().validate(&rec).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs.message_for("strengths"), Some("Describe strengths in detail"));
        assert_eq!(errs.message_for("threats"), Some("Describe threats in detail"));
    }
}
