//! Household form: the household record and its repeating groups.

use census_model::choice::tables;
use census_model::{CropCategory, EntityKind, HouseholdRecord, RawRecord};
use census_transform::{normalize_date, process_location};

use super::siblings::Siblings;
use super::{
    ElementGroup, ExtractedBase, ParentRef, animal, crop, death, individual, land, nested_array,
    submission_date,
};
use crate::context::PipelineContext;
use crate::demographics::{DemographicSource, Demographics};
use crate::error::ExtractError;

/// Extract the household record and plan its groups in write order:
/// individuals, land parcels, crops, animals, animal products, deaths.
pub fn extract<'a>(
    raw: RawRecord<'a>,
    ctx: &'a PipelineContext,
) -> Result<ExtractedBase<'a>, ExtractError> {
    let mut record = household_record(raw, ctx)?;
    let parent = ParentRef {
        id: raw.id()?,
        ward_no: record.ward_no,
    };
    let family = Demographics::from_history(raw.section("family_history_info")?, &ctx.decoder())?;
    let demographics = DemographicSource::new(record.are_a_family, &family);
    family.apply_to_household(&mut record);
    let siblings = Siblings::build(raw);

    let mut groups = Vec::with_capacity(12);
    groups.push(ElementGroup::new(
        EntityKind::Individual,
        "individual",
        raw.array("individual"),
        Box::new(move |element: RawRecord<'_>| {
            individual::extract(element, parent, &siblings, &demographics, ctx)
        }),
    ));
    groups.push(ElementGroup::new(
        EntityKind::LandParcel,
        "agriculture.agricultural_land",
        nested_array(raw, "agriculture", "agricultural_land"),
        Box::new(move |element: RawRecord<'_>| land::extract(element, parent, ctx)),
    ));
    let food = raw
        .section("agriculture")
        .and_then(|agriculture| agriculture.section("food"));
    for category in CropCategory::ALL {
        let elements = food
            .clone()
            .and_then(|food| food.array(category.group_key()));
        groups.push(ElementGroup::new(
            EntityKind::Crop,
            format!("agriculture.food.{}", category.group_key()),
            elements,
            Box::new(move |element: RawRecord<'_>| crop::extract(element, category, parent, ctx)),
        ));
    }
    groups.push(ElementGroup::new(
        EntityKind::Animal,
        "animals.animal_details",
        nested_array(raw, "animals", "animal_details"),
        Box::new(move |element: RawRecord<'_>| animal::extract_animal(element, parent, ctx)),
    ));
    groups.push(ElementGroup::new(
        EntityKind::AnimalProduct,
        "animals.animal_products",
        nested_array(raw, "animals", "animal_products"),
        Box::new(move |element: RawRecord<'_>| animal::extract_product(element, parent, ctx)),
    ));
    groups.push(ElementGroup::new(
        EntityKind::Death,
        "death.death_records",
        nested_array(raw, "death", "death_records"),
        Box::new(move |element: RawRecord<'_>| death::extract(element, parent, ctx)),
    ));

    Ok(ExtractedBase {
        record: record.into(),
        groups,
    })
}

fn household_record(
    raw: RawRecord<'_>,
    ctx: &PipelineContext,
) -> Result<HouseholdRecord, ExtractError> {
    let decoder = ctx.decoder();
    let id = raw.section("id")?;
    let house = raw.section("house_details")?;
    let water = raw.section("water_sanitation")?;
    let economy = raw.section("economy")?;
    let agriculture = raw.section("agriculture")?;
    let animals = raw.section("animals")?;
    let death = raw.section("death")?;
    let suggestions = raw.section("municipal_suggestions")?;
    let gps = process_location(id.value("household_location"));

    Ok(HouseholdRecord {
        id: raw.id()?.to_string(),
        enumerator_name: raw.text("enumerator_name")?,
        submission_date: submission_date(raw)?,

        ward_no: id.integer("ward_no")?,
        tole_name: id.text("tole_name")?,
        house_symbol_no: id.text("house_symbol_no")?,
        family_symbol_no: id.text("family_symbol_no")?,
        date_of_interview: id
            .text("date_of_interview")?
            .map(|date| normalize_date(&date)),
        household_location: gps.point,
        household_altitude: gps.altitude,
        household_gps_accuracy: gps.accuracy,
        locality: id.text("locality")?,
        development_organization: decoder.choice(
            tables::DEVELOPMENT_ORGANIZATION,
            id.text("development_organization")?,
        ),
        family_head_name: id.text("family_head_name")?,
        family_head_phone_no: id.text("family_head_phone_no")?,
        total_members: id.integer("total_members")?,
        are_a_family: id.flag("are_a_family")?,

        house_ownership: decoder.choice(tables::HOUSE_OWNERSHIP, house.text("house_ownership")?),
        house_ownership_other: house.text("house_ownership_other")?,
        land_ownership: decoder.choice(tables::LAND_OWNERSHIP, house.text("land_ownership")?),
        house_base: decoder.choice(tables::HOUSE_BASE, house.text("house_base")?),
        house_base_other: house.text("house_base_other")?,
        house_outer_wall: decoder.choice(tables::HOUSE_OUTER_WALL, house.text("house_outer_wall")?),
        house_outer_wall_other: house.text("house_outer_wall_other")?,
        house_roof: decoder.choice(tables::HOUSE_ROOF, house.text("house_roof")?),
        house_roof_other: house.text("house_roof_other")?,
        house_floor: decoder.choice(tables::HOUSE_FLOOR, house.text("house_floor")?),
        house_floor_other: house.text("house_floor_other")?,
        house_built_year: house.integer("house_built_year")?,
        house_storey: house.integer("house_storey")?,
        has_basement: house.flag("has_basement")?,
        feels_safe: house.flag("feels_safe")?,
        safety_measures: decoder.choices(tables::SAFETY_MEASURE, house.text("safety_measures")?),
        is_map_passed: house.flag("is_map_passed")?,

        water_source: decoder.choice(tables::WATER_SOURCE, water.text("water_source")?),
        water_purification: decoder
            .choices(tables::WATER_PURIFICATION, water.text("water_purification")?),
        toilet_type: decoder.choice(tables::TOILET_TYPE, water.text("toilet_type")?),
        solid_waste: decoder.choice(tables::SOLID_WASTE, water.text("solid_waste")?),
        primary_cooking_fuel: decoder
            .choice(tables::COOKING_FUEL, water.text("primary_cooking_fuel")?),
        primary_energy_source: decoder
            .choice(tables::ENERGY_SOURCE, water.text("primary_energy_source")?),
        facilities: decoder.choices(tables::FACILITY, water.text("facilities")?),

        has_loan: economy.flag("has_loan")?,
        loaned_organizations: decoder.choices(
            tables::LOANED_ORGANIZATION,
            economy.text("loaned_organizations")?,
        ),
        loan_uses: decoder.choices(tables::LOAN_USE, economy.text("loan_use")?),
        income_sources: decoder.choices(tables::INCOME_SOURCE, economy.text("income_sources")?),
        has_remittance: economy.flag("has_remittance")?,
        remittance_expenses: decoder.choices(
            tables::REMITTANCE_EXPENSE,
            economy.text("remittance_expenses")?,
        ),
        financial_accounts: decoder
            .choices(tables::FINANCIAL_ACCOUNT, economy.text("financial_accounts")?),
        has_properties_elsewhere: economy.flag("has_properties_elsewhere")?,
        has_female_named_properties: economy.flag("has_female_named_properties")?,
        time_to_public_bus: decoder.choice(tables::TRAVEL_TIME, economy.text("time_to_public_bus")?),
        time_to_market: decoder.choice(tables::TRAVEL_TIME, economy.text("time_to_market")?),

        has_agricultural_land: agriculture.flag("has_agricultural_land")?,
        is_farmer: agriculture.flag("is_farmer")?,
        months_sustained_from_agriculture: decoder.choice(
            tables::MONTHS_SUSTAINED,
            agriculture.text("months_sustained_from_agriculture")?,
        ),
        has_agricultural_insurance: agriculture.flag("has_agricultural_insurance")?,
        has_animals: animals.flag("has_animals")?,
        has_animal_products: animals.flag("has_animal_products")?,
        has_death: death.flag("has_death")?,

        municipal_suggestions: decoder.choices(
            tables::MUNICIPAL_SUGGESTION,
            suggestions.text("suggestions")?,
        ),
        ..HouseholdRecord::default()
    })
}
