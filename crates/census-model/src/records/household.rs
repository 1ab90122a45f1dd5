use serde::{Deserialize, Serialize};

/// Flattened household submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub id: String,
    pub enumerator_name: Option<String>,
    pub submission_date: Option<String>,

    // Identification and location
    pub ward_no: Option<i64>,
    pub tole_name: Option<String>,
    pub house_symbol_no: Option<String>,
    pub family_symbol_no: Option<String>,
    pub date_of_interview: Option<String>,
    pub household_location: Option<String>,
    pub household_altitude: Option<f64>,
    pub household_gps_accuracy: Option<f64>,
    pub locality: Option<String>,
    pub development_organization: Option<String>,
    pub family_head_name: Option<String>,
    pub family_head_phone_no: Option<String>,
    pub total_members: Option<i64>,
    pub are_a_family: Option<bool>,

    // Family history
    pub caste: Option<String>,
    pub caste_other: Option<String>,
    pub ancestral_language: Option<String>,
    pub ancestral_language_other: Option<String>,
    pub mother_tongue_primary: Option<String>,
    pub mother_tongue_primary_other: Option<String>,
    pub religion: Option<String>,
    pub religion_other: Option<String>,

    // House construction
    pub house_ownership: Option<String>,
    pub house_ownership_other: Option<String>,
    pub land_ownership: Option<String>,
    pub house_base: Option<String>,
    pub house_base_other: Option<String>,
    pub house_outer_wall: Option<String>,
    pub house_outer_wall_other: Option<String>,
    pub house_roof: Option<String>,
    pub house_roof_other: Option<String>,
    pub house_floor: Option<String>,
    pub house_floor_other: Option<String>,
    pub house_built_year: Option<i64>,
    pub house_storey: Option<i64>,
    pub has_basement: Option<bool>,
    pub feels_safe: Option<bool>,
    pub safety_measures: Option<Vec<String>>,
    pub is_map_passed: Option<bool>,

    // Water and sanitation
    pub water_source: Option<String>,
    pub water_purification: Option<Vec<String>>,
    pub toilet_type: Option<String>,
    pub solid_waste: Option<String>,
    pub primary_cooking_fuel: Option<String>,
    pub primary_energy_source: Option<String>,
    pub facilities: Option<Vec<String>>,

    // Economy
    pub has_loan: Option<bool>,
    pub loaned_organizations: Option<Vec<String>>,
    pub loan_uses: Option<Vec<String>>,
    pub income_sources: Option<Vec<String>>,
    pub has_remittance: Option<bool>,
    pub remittance_expenses: Option<Vec<String>>,
    pub financial_accounts: Option<Vec<String>>,
    pub has_properties_elsewhere: Option<bool>,
    pub has_female_named_properties: Option<bool>,
    pub time_to_public_bus: Option<String>,
    pub time_to_market: Option<String>,

    // Agriculture, livestock and deaths
    pub has_agricultural_land: Option<bool>,
    pub is_farmer: Option<bool>,
    pub months_sustained_from_agriculture: Option<String>,
    pub has_agricultural_insurance: Option<bool>,
    pub has_animals: Option<bool>,
    pub has_animal_products: Option<bool>,
    pub has_death: Option<bool>,

    pub municipal_suggestions: Option<Vec<String>>,
}

/// One household member, merged with the matching health, fertility and
/// education answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,

    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub citizenship: Option<String>,
    pub citizenship_other: Option<String>,
    pub family_role: Option<String>,
    pub marital_status: Option<String>,
    pub married_age: Option<i64>,

    pub caste: Option<String>,
    pub caste_other: Option<String>,
    pub ancestral_language: Option<String>,
    pub ancestral_language_other: Option<String>,
    pub mother_tongue_primary: Option<String>,
    pub mother_tongue_primary_other: Option<String>,
    pub religion: Option<String>,
    pub religion_other: Option<String>,

    // Health
    pub has_chronic_disease: Option<bool>,
    pub primary_chronic_disease: Option<String>,
    pub is_disabled: Option<bool>,
    pub disability_type: Option<String>,
    pub disability_cause: Option<String>,
    pub is_sanitized: Option<bool>,

    // Fertility
    pub gave_live_birth: Option<bool>,
    pub alive_sons: Option<i64>,
    pub alive_daughters: Option<i64>,
    pub total_born_children: Option<i64>,
    pub has_dead_children: Option<bool>,
    pub dead_sons: Option<i64>,
    pub dead_daughters: Option<i64>,
    pub recent_birth: Option<bool>,
    pub recent_delivery_location: Option<String>,
    pub prenatal_checkup: Option<bool>,
    pub first_delivery_age: Option<i64>,

    // Education
    pub literacy_status: Option<String>,
    pub school_presence_status: Option<String>,
    pub educational_level: Option<String>,
    pub primary_subject: Option<String>,
    pub school_barrier: Option<String>,

    // Economy (nested in the education answers)
    pub has_training: Option<bool>,
    pub training: Option<String>,
    pub months_worked: Option<String>,
    pub primary_occupation: Option<String>,
    pub work_barrier: Option<String>,
    pub work_availability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,
    pub death_name: Option<String>,
    pub death_gender: Option<String>,
    pub death_age: Option<i64>,
    pub death_cause: Option<String>,
    pub death_cause_other: Option<String>,
    pub fertility_death_condition: Option<String>,
}
