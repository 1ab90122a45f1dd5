use std::fmt;

use serde::{Deserialize, Serialize};

/// Flattened business submission, including the optional hotel,
/// aquaculture and apiculture sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub enumerator_name: Option<String>,
    pub submission_date: Option<String>,

    pub ward_no: Option<i64>,
    pub tole_name: Option<String>,
    pub business_name: Option<String>,
    pub business_location: Option<String>,
    pub business_altitude: Option<f64>,
    pub business_gps_accuracy: Option<f64>,
    pub operator_name: Option<String>,
    pub operator_phone: Option<String>,
    pub date_of_interview: Option<String>,

    pub business_nature: Option<String>,
    pub business_nature_other: Option<String>,
    pub business_type: Option<String>,
    pub business_type_other: Option<String>,
    pub registration_status: Option<String>,
    pub registered_bodies: Option<Vec<String>>,
    pub statutory_status: Option<String>,
    pub pan_status: Option<String>,
    pub pan_number: Option<String>,
    pub investment_amount: Option<f64>,
    pub business_location_ownership: Option<String>,

    pub operator_gender: Option<String>,
    pub operator_age: Option<i64>,
    pub operator_education: Option<String>,
    pub operator_caste: Option<String>,
    pub operator_caste_other: Option<String>,

    pub total_employees: Option<i64>,
    pub partners: Option<i64>,
    pub nepali_staff: Option<i64>,
    pub foreign_staff: Option<i64>,

    pub has_loan: Option<bool>,
    pub loaned_organizations: Option<Vec<String>>,

    pub is_hotel: Option<bool>,
    pub hotel_accommodation_type: Option<String>,
    pub hotel_room_count: Option<i64>,
    pub hotel_bed_count: Option<i64>,
    pub hotel_has_hall: Option<bool>,
    pub hotel_hall_capacity: Option<i64>,

    pub has_aquaculture: Option<bool>,
    pub pond_count: Option<i64>,
    pub pond_area: Option<f64>,
    pub fish_production: Option<f64>,
    pub fingerling_count: Option<i64>,
    pub income_from_fish: Option<f64>,

    pub has_apiculture: Option<bool>,
    pub hive_count: Option<i64>,
    pub honey_production: Option<f64>,
    pub income_from_honey: Option<f64>,
}

/// Kind of a business line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Crop,
    Animal,
    AnimalProduct,
}

impl LineItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Animal => "animal",
            Self::AnimalProduct => "animal_product",
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crop, animal or animal product reported by a business.
///
/// `quantity` is the crop production, the head count or the product
/// production amount depending on `item_kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLineItemRecord {
    pub id: String,
    pub business_id: String,
    pub ward_no: Option<i64>,
    pub item_kind: LineItemKind,
    pub category: Option<String>,
    pub name: Option<String>,
    pub name_other: Option<String>,
    pub unit: Option<String>,
    pub unit_other: Option<String>,
    pub area: Option<f64>,
    pub plant_count: Option<i64>,
    pub quantity: Option<f64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub month_production: Option<f64>,
}

impl BusinessLineItemRecord {
    /// Empty line item of the given kind.
    pub fn new(id: impl Into<String>, business_id: impl Into<String>, item_kind: LineItemKind) -> Self {
        Self {
            id: id.into(),
            business_id: business_id.into(),
            ward_no: None,
            item_kind,
            category: None,
            name: None,
            name_other: None,
            unit: None,
            unit_other: None,
            area: None,
            plant_count: None,
            quantity: None,
            sales: None,
            revenue: None,
            month_production: None,
        }
    }
}
