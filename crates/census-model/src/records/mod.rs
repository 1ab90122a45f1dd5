//! Normalized record shapes, one per entity kind.
//!
//! Every record's `id` is the `__id` of the raw object it came from. Child
//! records carry the parent's id (`household_id` or `business_id`) and the
//! denormalized `ward_no`.
//!
//! Field names are also the column names of the normalized store.

mod agriculture;
mod building;
mod business;
mod household;

use serde::Serialize;
use serde_json::Value;

pub use agriculture::{AnimalProductRecord, AnimalRecord, CropRecord, LandParcelRecord};
pub use building::BuildingRecord;
pub use business::{BusinessLineItemRecord, BusinessRecord, LineItemKind};
pub use household::{DeathRecord, HouseholdRecord, IndividualRecord};

use crate::entity::EntityKind;

/// Any normalized record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Household(HouseholdRecord),
    Individual(IndividualRecord),
    LandParcel(LandParcelRecord),
    Crop(CropRecord),
    Animal(AnimalRecord),
    AnimalProduct(AnimalProductRecord),
    Death(DeathRecord),
    Business(BusinessRecord),
    BusinessLineItem(BusinessLineItemRecord),
    Building(BuildingRecord),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Household(_) => EntityKind::Household,
            Self::Individual(_) => EntityKind::Individual,
            Self::LandParcel(_) => EntityKind::LandParcel,
            Self::Crop(_) => EntityKind::Crop,
            Self::Animal(_) => EntityKind::Animal,
            Self::AnimalProduct(_) => EntityKind::AnimalProduct,
            Self::Death(_) => EntityKind::Death,
            Self::Business(_) => EntityKind::Business,
            Self::BusinessLineItem(_) => EntityKind::BusinessLineItem,
            Self::Building(_) => EntityKind::Building,
        }
    }

    /// Primary key.
    pub fn id(&self) -> &str {
        match self {
            Self::Household(record) => &record.id,
            Self::Individual(record) => &record.id,
            Self::LandParcel(record) => &record.id,
            Self::Crop(record) => &record.id,
            Self::Animal(record) => &record.id,
            Self::AnimalProduct(record) => &record.id,
            Self::Death(record) => &record.id,
            Self::Business(record) => &record.id,
            Self::BusinessLineItem(record) => &record.id,
            Self::Building(record) => &record.id,
        }
    }

    /// Parent id for child records.
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::Individual(record) => Some(&record.household_id),
            Self::LandParcel(record) => Some(&record.household_id),
            Self::Crop(record) => Some(&record.household_id),
            Self::Animal(record) => Some(&record.household_id),
            Self::AnimalProduct(record) => Some(&record.household_id),
            Self::Death(record) => Some(&record.household_id),
            Self::BusinessLineItem(record) => Some(&record.business_id),
            Self::Household(_) | Self::Business(_) | Self::Building(_) => None,
        }
    }

    /// Field values as a JSON object keyed by column name.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Rebuild a record of `kind` from its JSON object form.
    pub fn from_value(kind: EntityKind, value: Value) -> serde_json::Result<Self> {
        Ok(match kind {
            EntityKind::Household => Self::Household(serde_json::from_value(value)?),
            EntityKind::Individual => Self::Individual(serde_json::from_value(value)?),
            EntityKind::LandParcel => Self::LandParcel(serde_json::from_value(value)?),
            EntityKind::Crop => Self::Crop(serde_json::from_value(value)?),
            EntityKind::Animal => Self::Animal(serde_json::from_value(value)?),
            EntityKind::AnimalProduct => Self::AnimalProduct(serde_json::from_value(value)?),
            EntityKind::Death => Self::Death(serde_json::from_value(value)?),
            EntityKind::Business => Self::Business(serde_json::from_value(value)?),
            EntityKind::BusinessLineItem => Self::BusinessLineItem(serde_json::from_value(value)?),
            EntityKind::Building => Self::Building(serde_json::from_value(value)?),
        })
    }

    /// Record of `kind` with every optional field empty.
    pub fn template(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Household => HouseholdRecord::default().into(),
            EntityKind::Individual => IndividualRecord::default().into(),
            EntityKind::LandParcel => LandParcelRecord::default().into(),
            EntityKind::Crop => CropRecord::default().into(),
            EntityKind::Animal => AnimalRecord::default().into(),
            EntityKind::AnimalProduct => AnimalProductRecord::default().into(),
            EntityKind::Death => DeathRecord::default().into(),
            EntityKind::Business => BusinessRecord::default().into(),
            EntityKind::BusinessLineItem => {
                BusinessLineItemRecord::new("", "", LineItemKind::Crop).into()
            }
            EntityKind::Building => BuildingRecord::default().into(),
        }
    }

    /// Column names of `kind`, sorted.
    pub fn columns(kind: EntityKind) -> Vec<String> {
        match Self::template(kind).to_value() {
            Ok(Value::Object(fields)) => {
                let mut columns: Vec<String> = fields.keys().cloned().collect();
                columns.sort();
                columns
            }
            _ => Vec::new(),
        }
    }

    /// Boolean fields of `kind`.
    pub fn flag_fields(kind: EntityKind) -> &'static [&'static str] {
        match kind {
            EntityKind::Household => &[
                "are_a_family",
                "has_basement",
                "feels_safe",
                "is_map_passed",
                "has_loan",
                "has_remittance",
                "has_properties_elsewhere",
                "has_female_named_properties",
                "has_agricultural_land",
                "is_farmer",
                "has_agricultural_insurance",
                "has_animals",
                "has_animal_products",
                "has_death",
            ],
            EntityKind::Individual => &[
                "has_chronic_disease",
                "is_disabled",
                "is_sanitized",
                "gave_live_birth",
                "has_dead_children",
                "recent_birth",
                "prenatal_checkup",
                "has_training",
            ],
            EntityKind::LandParcel => &["is_land_irrigated"],
            EntityKind::Business => &[
                "has_loan",
                "is_hotel",
                "hotel_has_hall",
                "has_aquaculture",
                "has_apiculture",
            ],
            EntityKind::Building => &["is_map_passed"],
            EntityKind::Crop
            | EntityKind::Animal
            | EntityKind::AnimalProduct
            | EntityKind::Death
            | EntityKind::BusinessLineItem => &[],
        }
    }

    /// Multiple-choice (list of labels) fields of `kind`.
    pub fn list_fields(kind: EntityKind) -> &'static [&'static str] {
        match kind {
            EntityKind::Household => &[
                "safety_measures",
                "water_purification",
                "facilities",
                "loaned_organizations",
                "loan_uses",
                "income_sources",
                "remittance_expenses",
                "financial_accounts",
                "municipal_suggestions",
            ],
            EntityKind::Business => &["registered_bodies", "loaned_organizations"],
            EntityKind::Building => &["natural_disasters"],
            EntityKind::Individual
            | EntityKind::LandParcel
            | EntityKind::Crop
            | EntityKind::Animal
            | EntityKind::AnimalProduct
            | EntityKind::Death
            | EntityKind::BusinessLineItem => &[],
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident => $record:ty),+ $(,)?) => {
        $(
            impl From<$record> for Record {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )+
    };
}

impl_from_record! {
    Household => HouseholdRecord,
    Individual => IndividualRecord,
    LandParcel => LandParcelRecord,
    Crop => CropRecord,
    Animal => AnimalRecord,
    AnimalProduct => AnimalProductRecord,
    Death => DeathRecord,
    Business => BusinessRecord,
    BusinessLineItem => BusinessLineItemRecord,
    Building => BuildingRecord,
}
