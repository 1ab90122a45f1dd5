//! Crop category descriptors.
//!
//! The agriculture sub-form has seven structurally identical crop groups
//! that differ only in key names and the choice table used for the crop
//! name. One [`CropCategory`] describes each group so a single extractor
//! handles all of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::choice::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    FoodGrain,
    Pulse,
    Oilseed,
    Vegetable,
    Fruit,
    Spice,
    CashCrop,
}

impl CropCategory {
    /// All categories in processing order.
    pub const ALL: [CropCategory; 7] = [
        CropCategory::FoodGrain,
        CropCategory::Pulse,
        CropCategory::Oilseed,
        CropCategory::Vegetable,
        CropCategory::Fruit,
        CropCategory::Spice,
        CropCategory::CashCrop,
    ];

    /// Stable identifier stored in the `category` column.
    pub fn slug(self) -> &'static str {
        match self {
            Self::FoodGrain => "food_grain",
            Self::Pulse => "pulse",
            Self::Oilseed => "oilseed",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Spice => "spice",
            Self::CashCrop => "cash_crop",
        }
    }

    /// Key of the repeating group inside the `food` sub-form.
    pub fn group_key(self) -> &'static str {
        match self {
            Self::FoodGrain => "foodgrains",
            Self::Pulse => "pulses",
            Self::Oilseed => "oilseeds",
            Self::Vegetable => "vegetables",
            Self::Fruit => "fruits",
            Self::Spice => "spices",
            Self::CashCrop => "cash_crops",
        }
    }

    /// Prefix shared by the element's field keys.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::FoodGrain => "fgrain",
            Self::Pulse => "pulse",
            Self::Oilseed => "oseed",
            Self::Vegetable => "vtable",
            Self::Fruit => "fruit",
            Self::Spice => "spice",
            Self::CashCrop => "ccrop",
        }
    }

    /// Choice table decoding the crop name.
    pub fn choice_table(self) -> &'static str {
        match self {
            Self::FoodGrain => tables::FOOD_GRAIN,
            Self::Pulse => tables::PULSE,
            Self::Oilseed => tables::OILSEED,
            Self::Vegetable => tables::VEGETABLE,
            Self::Fruit => tables::FRUIT,
            Self::Spice => tables::SPICE,
            Self::CashCrop => tables::CASH_CROP,
        }
    }

    /// Key holding the plant or tree count, for perennial categories.
    pub fn plant_count_key(self) -> Option<&'static str> {
        match self {
            Self::Fruit => Some("fruit_trees_count"),
            Self::CashCrop => Some("ccrop_plants_count"),
            _ => None,
        }
    }

    /// Key of the element field named `<prefix>_<suffix>`.
    pub fn key(self, suffix: &str) -> String {
        format!("{}_{suffix}", self.prefix())
    }
}

impl fmt::Display for CropCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
