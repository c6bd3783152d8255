//! Step 1 — Business Information
//!
//! Proposal identity, applicant contact details, the industry/cluster
//! introduction narrative, SPV registration data, and promoter details.

use crate::core::record::StepId;
use crate::schema::rules::{FieldDef, StepSchema};

const FIELDS: &[FieldDef] = &[
    // Proposal information
    FieldDef::min("proposalTitle", 5, "Proposal title must be at least 5 characters"),
    // Applicant details
    FieldDef::min("applicantName", 2, "Name is required"),
    FieldDef::min("contactNumber", 10, "Valid contact number required"),
    FieldDef::email("email", "Valid email required"),
    FieldDef::min("registeredAddress", 10, "Complete address required"),
    FieldDef::min("cfcAddress", 10, "CFC location required"),
    FieldDef::min("mainFacilities", 20, "Describe the facilities to be provided"),
    // Introduction: industry and sector context
    FieldDef::min("stateIndustryScenario", 50, "Describe the industrial growth scenario"),
    FieldDef::min("sectorDescription", 50, "Describe the sector for CFC"),
    FieldDef::min("clusterProducts", 50, "Describe cluster products and prospects"),
    FieldDef::min("numberOfUnits", 1, "Number of units required"),
    FieldDef::min("employment", 1, "Employment data required"),
    FieldDef::min("turnover", 1, "Turnover data required"),
    FieldDef::min("cfcRelevance", 50, "Explain CFC relevance to cluster growth"),
    // SPV information
    FieldDef::min("spvName", 2, "SPV name required"),
    FieldDef::min("spvAddress", 10, "SPV address required"),
    FieldDef::min("spvRegistrationNumber", 5, "Registration number required"),
    FieldDef::date("spvFormationDate", "Formation date required"),
    FieldDef::date("spvCommencementDate", "Commencement date required"),
    FieldDef::min("mseMemberUnits", 1, "Number of MSE units required"),
    FieldDef::min("spvObjectives", 20, "Main objectives required"),
    FieldDef::min("authorizedShareCapital", 1, "Share capital required"),
    // Promoter details
    FieldDef::min("promoterName", 2, "Promoter name required"),
    FieldDef::min("promoterAge", 1, "Age required"),
    FieldDef::min("promoterQualification", 2, "Qualification required"),
    FieldDef::min("promoterExperience", 10, "Experience details required"),
];

pub fn schema() -> StepSchema {
    StepSchema {
        step: StepId::BusinessInfo,
        fields: FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::samples::business_info as minimal_valid;

    #[test]
    fn test_field_count() {
        assert_eq!(schema().fields.len(), 26);
    }

    #[test]
    fn test_minimal_valid_record_passes() {
        assert!(schema().validate(&minimal_valid()).is_ok());
    }

    #[test]
    fn test_short_narratives_rejected() {
        let mut rec = minimal_valid();
        rec.set("sectorDescription", "too short");
        rec.set("clusterProducts", "");
        let errs = schema().validate(&rec).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(
            errs.message_for("sectorDescription"),
            Some("Describe the sector for CFC")
        );
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut rec = minimal_valid();
        rec.set("email", "user@@example");
        let errs = schema().validate(&rec).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs.contains("email"));
    }

    #[test]
    fn test_spv_dates_must_be_calendar_dates() {
        let mut rec = minimal_valid();
        rec.set("spvFormationDate", "June 2024");
        let errs = schema().validate(&rec).unwrap_err();
        assert_eq!(errs.message_for("spvFormationDate"), Some("Formation date required"));
    }
}
