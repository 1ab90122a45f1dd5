//! Choice tables: coded answer tokens and their display labels.
//!
//! Each coded question domain (roof material, marital status, water
//! source, ...) has one [`ChoiceTable`]. All tables of one release live in a
//! [`ChoiceRegistry`], which is loaded once and passed explicitly to the
//! decoders. Tables are read-only after loading.
//!
//! ## Example: `marital_status`
//!
//! ```text
//! code      label
//! single    Unmarried
//! married   Married
//! widowed   Widowed
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Code-to-label mapping for one question domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceTable {
    /// Table name (e.g., "marital_status").
    pub name: String,

    /// Labels keyed by the exact code token.
    entries: BTreeMap<String, String>,
}

impl ChoiceTable {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Create a table from `(code, label)` pairs.
    pub fn with_entries<I, C, L>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut table = Self::new(name);
        for (code, label) in entries {
            table.insert(code, label);
        }
        table
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(code.into(), label.into());
    }

    /// Label for an exact code, if known.
    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }
}

/// All choice tables of one release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRegistry {
    /// Release identifier (e.g., "2024-01").
    pub version: String,

    /// Tables by name.
    tables: BTreeMap<String, ChoiceTable>,
}

impl ChoiceRegistry {
    /// Create an empty registry for a release.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Add a table, replacing any table with the same name.
    pub fn add_table(&mut self, table: ChoiceTable) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Builder-style variant of [`add_table`](Self::add_table).
    #[must_use]
    pub fn with_table(mut self, table: ChoiceTable) -> Self {
        self.add_table(table);
        self
    }

    pub fn table(&self, name: &str) -> Option<&ChoiceTable> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables in name order.
    pub fn tables(&self) -> impl Iterator<Item = &ChoiceTable> {
        self.tables.values()
    }
}

/// Names of the choice tables referenced by the extractors.
pub mod tables {
    // Individuals
    pub const GENDER: &str = "gender";
    pub const CITIZENSHIP: &str = "citizenship";
    pub const FAMILY_ROLE: &str = "family_role";
    pub const CASTE: &str = "caste";
    pub const LANGUAGE: &str = "language";
    pub const RELIGION: &str = "religion";
    pub const MARITAL_STATUS: &str = "marital_status";
    pub const CHRONIC_DISEASE: &str = "chronic_disease";
    pub const DISABILITY_TYPE: &str = "disability_type";
    pub const DISABILITY_CAUSE: &str = "disability_cause";
    pub const DELIVERY_LOCATION: &str = "delivery_location";
    pub const LITERACY_STATUS: &str = "literacy_status";
    pub const SCHOOL_PRESENCE: &str = "school_presence";
    pub const EDUCATIONAL_LEVEL: &str = "educational_level";
    pub const PRIMARY_SUBJECT: &str = "primary_subject";
    pub const SCHOOL_BARRIER: &str = "school_barrier";
    pub const SKILL_TRAINING: &str = "skill_training";
    pub const MONTHS_WORKED: &str = "months_worked";
    pub const OCCUPATION: &str = "occupation";
    pub const WORK_BARRIER: &str = "work_barrier";
    pub const WORK_AVAILABILITY: &str = "work_availability";

    // Household
    pub const DEVELOPMENT_ORGANIZATION: &str = "development_organization";
    pub const HOUSE_OWNERSHIP: &str = "house_ownership";
    pub const LAND_OWNERSHIP: &str = "land_ownership";
    pub const HOUSE_BASE: &str = "house_base";
    pub const HOUSE_OUTER_WALL: &str = "house_outer_wall";
    pub const HOUSE_ROOF: &str = "house_roof";
    pub const HOUSE_FLOOR: &str = "house_floor";
    pub const SAFETY_MEASURE: &str = "safety_measure";
    pub const WATER_SOURCE: &str = "water_source";
    pub const WATER_PURIFICATION: &str = "water_purification";
    pub const TOILET_TYPE: &str = "toilet_type";
    pub const SOLID_WASTE: &str = "solid_waste";
    pub const COOKING_FUEL: &str = "cooking_fuel";
    pub const ENERGY_SOURCE: &str = "energy_source";
    pub const FACILITY: &str = "facility";
    pub const LOANED_ORGANIZATION: &str = "loaned_organization";
    pub const LOAN_USE: &str = "loan_use";
    pub const INCOME_SOURCE: &str = "income_source";
    pub const REMITTANCE_EXPENSE: &str = "remittance_expense";
    pub const FINANCIAL_ACCOUNT: &str = "financial_account";
    pub const TRAVEL_TIME: &str = "travel_time";
    pub const MONTHS_SUSTAINED: &str = "months_sustained";
    pub const MUNICIPAL_SUGGESTION: &str = "municipal_suggestion";

    // Agriculture and livestock
    pub const LAND_OWNERSHIP_TYPE: &str = "land_ownership_type";
    pub const IRRIGATION_SOURCE: &str = "irrigation_source";
    pub const FOOD_GRAIN: &str = "food_grain";
    pub const PULSE: &str = "pulse";
    pub const OILSEED: &str = "oilseed";
    pub const VEGETABLE: &str = "vegetable";
    pub const FRUIT: &str = "fruit";
    pub const SPICE: &str = "spice";
    pub const CASH_CROP: &str = "cash_crop";
    pub const ANIMAL: &str = "animal";
    pub const ANIMAL_PRODUCT: &str = "animal_product";
    pub const PRODUCT_UNIT: &str = "product_unit";

    // Deaths
    pub const DEATH_CAUSE: &str = "death_cause";
    pub const FERTILITY_DEATH_CONDITION: &str = "fertility_death_condition";

    // Business
    pub const BUSINESS_NATURE: &str = "business_nature";
    pub const BUSINESS_TYPE: &str = "business_type";
    pub const REGISTRATION_STATUS: &str = "registration_status";
    pub const REGISTRATION_BODY: &str = "registration_body";
    pub const STATUTORY_STATUS: &str = "statutory_status";
    pub const PAN_STATUS: &str = "pan_status";
    pub const BUSINESS_LOCATION_OWNERSHIP: &str = "business_location_ownership";
    pub const BUSINESS_LOANED_ORGANIZATION: &str = "business_loaned_organization";
    pub const HOTEL_ACCOMMODATION: &str = "hotel_accommodation";

    // Building
    pub const ROAD_STATUS: &str = "road_status";
    pub const NATURAL_DISASTER: &str = "natural_disaster";
    pub const MAP_STATUS: &str = "map_status";
}
