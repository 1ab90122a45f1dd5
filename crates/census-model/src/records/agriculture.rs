use serde::{Deserialize, Serialize};

/// A parcel of agricultural land. Areas are square meters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandParcelRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,
    pub land_ownership_type: Option<String>,
    pub land_area: Option<f64>,
    pub is_land_irrigated: Option<bool>,
    pub irrigation_source: Option<String>,
    pub irrigated_area: Option<f64>,
}

/// One crop grown by a household, from any of the seven crop groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,
    /// Crop category slug (e.g., "food_grain").
    pub category: String,
    pub crop_name: Option<String>,
    pub area: Option<f64>,
    pub production: Option<f64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub plant_count: Option<i64>,
}

/// Livestock holding. `animal_name` is decoded for listed animals; the
/// free-text name of an unlisted animal goes to `animal_name_other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,
    pub animal_name: Option<String>,
    pub animal_name_other: Option<String>,
    pub total_animals: Option<i64>,
    pub animal_sales: Option<f64>,
    pub animal_revenue: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalProductRecord {
    pub id: String,
    pub household_id: String,
    pub ward_no: Option<i64>,
    pub product_name: Option<String>,
    pub product_name_other: Option<String>,
    pub unit: Option<String>,
    pub unit_other: Option<String>,
    pub production_amount: Option<f64>,
    pub sales: Option<f64>,
    pub revenue: Option<f64>,
    pub month_production: Option<f64>,
}
