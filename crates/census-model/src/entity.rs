use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of normalized record; one table per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Household,
    Individual,
    LandParcel,
    Crop,
    Animal,
    AnimalProduct,
    Death,
    Business,
    BusinessLineItem,
    Building,
}

impl EntityKind {
    /// All kinds, parents before children.
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Household,
        EntityKind::Individual,
        EntityKind::LandParcel,
        EntityKind::Crop,
        EntityKind::Animal,
        EntityKind::AnimalProduct,
        EntityKind::Death,
        EntityKind::Business,
        EntityKind::BusinessLineItem,
        EntityKind::Building,
    ];

    /// Table name in the normalized store.
    pub fn table(self) -> &'static str {
        match self {
            Self::Household => "household",
            Self::Individual => "individual",
            Self::LandParcel => "land_parcel",
            Self::Crop => "crop",
            Self::Animal => "animal",
            Self::AnimalProduct => "animal_product",
            Self::Death => "death",
            Self::Business => "business",
            Self::BusinessLineItem => "business_line_item",
            Self::Building => "building",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Household => "Household",
            Self::Individual => "Individual",
            Self::LandParcel => "Land parcel",
            Self::Crop => "Crop",
            Self::Animal => "Animal",
            Self::AnimalProduct => "Animal product",
            Self::Death => "Death",
            Self::Business => "Business",
            Self::BusinessLineItem => "Business line item",
            Self::Building => "Building",
        }
    }

    /// Parent kind and foreign-key column, for child records.
    pub fn parent(self) -> Option<(EntityKind, &'static str)> {
        match self {
            Self::Individual
            | Self::LandParcel
            | Self::Crop
            | Self::Animal
            | Self::AnimalProduct
            | Self::Death => Some((Self::Household, "household_id")),
            Self::BusinessLineItem => Some((Self::Business, "business_id")),
            Self::Household | Self::Business | Self::Building => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
