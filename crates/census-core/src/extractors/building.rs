//! Building form: one record per submission, no repeating groups.

use census_model::choice::tables;
use census_model::{BuildingRecord, RawRecord};
use census_transform::process_location;

use super::{ExtractedBase, submission_date};
use crate::context::PipelineContext;
use crate::error::ExtractError;

pub fn extract<'a>(
    raw: RawRecord<'a>,
    ctx: &'a PipelineContext,
) -> Result<ExtractedBase<'a>, ExtractError> {
    let decoder = ctx.decoder();
    let building = raw.section("building")?;
    let gps = process_location(building.value("building_location"));

    let record = BuildingRecord {
        id: raw.id()?.to_string(),
        enumerator_name: raw.text("enumerator_name")?,
        submission_date: submission_date(raw)?,
        ward_no: building.integer("ward_no")?,
        tole_name: building.text("tole_name")?,
        house_symbol_no: building.text("house_symbol_no")?,
        locality: building.text("locality")?,
        building_location: gps.point,
        building_altitude: gps.altitude,
        building_gps_accuracy: gps.accuracy,
        building_ownership: decoder
            .choice(tables::HOUSE_OWNERSHIP, building.text("building_ownership")?),
        building_ownership_other: building.text("building_ownership_other")?,
        land_ownership: decoder.choice(tables::LAND_OWNERSHIP, building.text("land_ownership")?),
        building_base: decoder.choice(tables::HOUSE_BASE, building.text("building_base")?),
        building_outer_wall: decoder
            .choice(tables::HOUSE_OUTER_WALL, building.text("building_outer_wall")?),
        building_roof: decoder.choice(tables::HOUSE_ROOF, building.text("building_roof")?),
        building_floor: decoder.choice(tables::HOUSE_FLOOR, building.text("building_floor")?),
        total_floors: building.integer("total_floors")?,
        total_families: building.integer("total_families")?,
        total_businesses: building.integer("total_businesses")?,
        road_status: decoder.choice(tables::ROAD_STATUS, building.text("road_status")?),
        time_to_market: decoder.choice(tables::TRAVEL_TIME, building.text("time_to_market")?),
        time_to_health_org: decoder
            .choice(tables::TRAVEL_TIME, building.text("time_to_health_org")?),
        natural_disasters: decoder
            .choices(tables::NATURAL_DISASTER, building.text("natural_disasters")?),
        is_map_passed: building.flag("is_map_passed")?,
        map_status: decoder.choice(tables::MAP_STATUS, building.text("map_status")?),
    };

    Ok(ExtractedBase {
        record: record.into(),
        groups: Vec::new(),
    })
}
