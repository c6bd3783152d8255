//! Step 2 — Project Details
//!
//! Technical scope, utilities, the manpower table, and the implementation
//! schedule: eleven milestone start/end date pairs. End-before-start is not
//! checked; the pairs are captured as independent dates (documented gap).

use crate::core::record::StepId;
use crate::schema::rules::{FieldDef, StepSchema};

const FIELDS: &[FieldDef] = &[
    // Technical details
    FieldDef::min("projectScope", 50, "Describe the project scope in detail"),
    FieldDef::min("locationDetails", 20, "Location and infrastructure details required"),
    FieldDef::min("technology", 30, "Technology details required"),
    FieldDef::optional("industry40AI"),
    FieldDef::min("rawMaterials", 20, "Raw materials/components details required"),
    // Utilities
    FieldDef::min("powerRequirements", 10, "Power requirements required"),
    FieldDef::min("waterRequirements", 10, "Water requirements required"),
    FieldDef::min("effluentDisposal", 20, "Effluent disposal method required"),
    // Manpower
    FieldDef::min("managerCount", 1, "Number of managers required"),
    FieldDef::min("supervisorCount", 1, "Number of supervisors required"),
    FieldDef::min("skilledWorkerCount", 1, "Number of skilled workers required"),
    FieldDef::min("unskilledWorkerCount", 1, "Number of unskilled workers required"),
    // Implementation schedule milestones
    FieldDef::date("dprPreparationStart", "Start date required"),
    FieldDef::date("dprPreparationEnd", "End date required"),
    FieldDef::date("governmentSanctionStart", "Start date required"),
    FieldDef::date("governmentSanctionEnd", "End date required"),
    FieldDef::date("nocPollutionStart", "Start date required"),
    FieldDef::date("nocPollutionEnd", "End date required"),
    FieldDef::date("siteDevelopmentStart", "Start date required"),
    FieldDef::date("siteDevelopmentEnd", "End date required"),
    FieldDef::date("buildingUpkeepStart", "Start date required"),
    FieldDef::date("buildingUpkeepEnd", "End date required"),
    FieldDef::date("equipmentOrderStart", "Start date required"),
    FieldDef::date("equipmentOrderEnd", "End date required"),
    FieldDef::date("equipmentSupplyStart", "Start date required"),
    FieldDef::date("equipmentSupplyEnd", "End date required"),
    FieldDef::date("installationStart", "Start date required"),
    FieldDef::date("installationEnd", "End date required"),
    FieldDef::date("powerConnectionStart", "Start date required"),
    FieldDef::date("powerConnectionEnd", "End date required"),
    FieldDef::date("trialRunStart", "Start date required"),
    FieldDef::date("trialRunEnd", "End date required"),
    FieldDef::date("commercialProductionStart", "Start date required"),
    FieldDef::date("commercialProductionEnd", "End date required"),
    FieldDef::min("implementationPeriod", 1, "Total implementation period required"),
];

/// The eleven schedule milestones, as (label, start field, end field)
pub const MILESTONES: &[(&str, &str, &str)] = &[
    ("DPR Preparation", "dprPreparationStart", "dprPreparationEnd"),
    ("Government Sanction", "governmentSanctionStart", "governmentSanctionEnd"),
    ("Pollution NOC", "nocPollutionStart", "nocPollutionEnd"),
    ("Site Development", "siteDevelopmentStart", "siteDevelopmentEnd"),
    ("Building Upkeep", "buildingUpkeepStart", "buildingUpkeepEnd"),
    ("Equipment Order", "equipmentOrderStart", "equipmentOrderEnd"),
    ("Equipment Supply", "equipmentSupplyStart", "equipmentSupplyEnd"),
    ("Installation", "installationStart", "installationEnd"),
    ("Power Connection", "powerConnectionStart", "powerConnectionEnd"),
    ("Trial Run", "trialRunStart", "trialRunEnd"),
    ("Commercial Production", "commercialProductionStart", "commercialProductionEnd"),
];

pub fn schema() -> StepSchema {
    StepSchema {
        step: StepId::ProjectDetails,
        fields: FIELDS,
    }
}
