use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    pub id: String,
    pub enumerator_name: Option<String>,
    pub submission_date: Option<String>,
    pub ward_no: Option<i64>,
    pub tole_name: Option<String>,
    pub house_symbol_no: Option<String>,
    pub locality: Option<String>,
    pub building_location: Option<String>,
    pub building_altitude: Option<f64>,
    pub building_gps_accuracy: Option<f64>,
    pub building_ownership: Option<String>,
    pub building_ownership_other: Option<String>,
    pub land_ownership: Option<String>,
    pub building_base: Option<String>,
    pub building_outer_wall: Option<String>,
    pub building_roof: Option<String>,
    pub building_floor: Option<String>,
    pub total_floors: Option<i64>,
    pub total_families: Option<i64>,
    pub total_businesses: Option<i64>,
    pub road_status: Option<String>,
    pub time_to_market: Option<String>,
    pub time_to_health_org: Option<String>,
    pub natural_disasters: Option<Vec<String>>,
    pub is_map_passed: Option<bool>,
    pub map_status: Option<String>,
}
