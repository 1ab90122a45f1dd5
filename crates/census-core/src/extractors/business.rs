//! Business form: the business record and its line items.
//!
//! Hotel, aquaculture and apiculture answers are optional sections. Each is
//! read only when its flag in `business_details` is answered `yes`; stray
//! answers behind a `no` flag are dropped.

use census_model::choice::tables;
use census_model::{BusinessRecord, CropCategory, EntityKind, FieldError, RawRecord};
use census_transform::{Decoder, area_field, normalize_date, process_location};

use super::{ElementGroup, ExtractedBase, ParentRef, animal, crop, nested_array, submission_date};
use crate::context::PipelineContext;
use crate::error::ExtractError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelSection {
    pub accommodation_type: Option<String>,
    pub room_count: Option<i64>,
    pub bed_count: Option<i64>,
    pub has_hall: Option<bool>,
    pub hall_capacity: Option<i64>,
}

impl HotelSection {
    pub fn read(raw: RawRecord<'_>, decoder: &Decoder<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            accommodation_type: decoder
                .choice(tables::HOTEL_ACCOMMODATION, raw.text("accommodation_type")?),
            room_count: raw.integer("room_count")?,
            bed_count: raw.integer("bed_count")?,
            has_hall: raw.flag("has_hall")?,
            hall_capacity: raw.integer("hall_capacity")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AquacultureSection {
    pub pond_count: Option<i64>,
    /// Square meters.
    pub pond_area: Option<f64>,
    pub fish_production: Option<f64>,
    pub fingerling_count: Option<i64>,
    pub income_from_fish: Option<f64>,
}

impl AquacultureSection {
    pub fn read(raw: RawRecord<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            pond_count: raw.integer("pond_count")?,
            pond_area: area_field(&raw, "pond_area")?,
            fish_production: raw.number("fish_production")?,
            fingerling_count: raw.integer("fingerling_count")?,
            income_from_fish: raw.number("income_from_fish")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApicultureSection {
    pub hive_count: Option<i64>,
    pub honey_production: Option<f64>,
    pub income_from_honey: Option<f64>,
}

impl ApicultureSection {
    pub fn read(raw: RawRecord<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            hive_count: raw.integer("hive_count")?,
            honey_production: raw.number("honey_production")?,
            income_from_honey: raw.number("income_from_honey")?,
        })
    }
}

/// The optional sections of one business, resolved from their flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessSections {
    pub hotel: Option<HotelSection>,
    pub aquaculture: Option<AquacultureSection>,
    pub apiculture: Option<ApicultureSection>,
}

impl BusinessSections {
    pub fn resolve(
        raw: RawRecord<'_>,
        details: RawRecord<'_>,
        decoder: &Decoder<'_>,
    ) -> Result<Self, FieldError> {
        let hotel = if details.is_yes("is_hotel")? {
            Some(HotelSection::read(raw.section("hotel")?, decoder)?)
        } else {
            None
        };
        let aquaculture = if details.is_yes("has_aquaculture")? {
            Some(AquacultureSection::read(raw.section("aquaculture")?)?)
        } else {
            None
        };
        let apiculture = if details.is_yes("has_apiculture")? {
            Some(ApicultureSection::read(raw.section("apiculture")?)?)
        } else {
            None
        };
        Ok(Self {
            hotel,
            aquaculture,
            apiculture,
        })
    }

    fn apply(self, record: &mut BusinessRecord) {
        if let Some(hotel) = self.hotel {
            record.hotel_accommodation_type = hotel.accommodation_type;
            record.hotel_room_count = hotel.room_count;
            record.hotel_bed_count = hotel.bed_count;
            record.hotel_has_hall = hotel.has_hall;
            record.hotel_hall_capacity = hotel.hall_capacity;
        }
        if let Some(aquaculture) = self.aquaculture {
            record.pond_count = aquaculture.pond_count;
            record.pond_area = aquaculture.pond_area;
            record.fish_production = aquaculture.fish_production;
            record.fingerling_count = aquaculture.fingerling_count;
            record.income_from_fish = aquaculture.income_from_fish;
        }
        if let Some(apiculture) = self.apiculture {
            record.hive_count = apiculture.hive_count;
            record.honey_production = apiculture.honey_production;
            record.income_from_honey = apiculture.income_from_honey;
        }
    }
}

/// Extract the business record and plan its line item groups: crops,
/// animals, then animal products.
pub fn extract<'a>(
    raw: RawRecord<'a>,
    ctx: &'a PipelineContext,
) -> Result<ExtractedBase<'a>, ExtractError> {
    let record = business_record(raw, ctx)?;
    let parent = ParentRef {
        id: raw.id()?,
        ward_no: record.ward_no,
    };

    let mut groups = Vec::with_capacity(9);
    let agriculture = raw.section("agriculture");
    for category in CropCategory::ALL {
        let elements = agriculture
            .clone()
            .and_then(|agriculture| agriculture.array(category.group_key()));
        groups.push(ElementGroup::new(
            EntityKind::BusinessLineItem,
            format!("agriculture.{}", category.group_key()),
            elements,
            Box::new(move |element: RawRecord<'_>| {
                crop::extract_line_item(element, category, parent, ctx)
            }),
        ));
    }
    groups.push(ElementGroup::new(
        EntityKind::BusinessLineItem,
        "animals.animal_details",
        nested_array(raw, "animals", "animal_details"),
        Box::new(move |element: RawRecord<'_>| {
            animal::extract_animal_line_item(element, parent, ctx)
        }),
    ));
    groups.push(ElementGroup::new(
        EntityKind::BusinessLineItem,
        "animals.animal_products",
        nested_array(raw, "animals", "animal_products"),
        Box::new(move |element: RawRecord<'_>| {
            animal::extract_product_line_item(element, parent, ctx)
        }),
    ));

    Ok(ExtractedBase {
        record: record.into(),
        groups,
    })
}

fn business_record(
    raw: RawRecord<'_>,
    ctx: &PipelineContext,
) -> Result<BusinessRecord, ExtractError> {
    let decoder = ctx.decoder();
    let id = raw.section("business_id")?;
    let details = raw.section("business_details")?;
    let operator = raw.section("operator_details")?;
    let employees = raw.section("employees")?;
    let loan = raw.section("business_loan")?;
    let gps = process_location(id.value("business_location"));

    let mut record = BusinessRecord {
        id: raw.id()?.to_string(),
        enumerator_name: raw.text("enumerator_name")?,
        submission_date: submission_date(raw)?,

        ward_no: id.integer("ward_no")?,
        tole_name: id.text("tole_name")?,
        business_name: id.text("business_name")?,
        business_location: gps.point,
        business_altitude: gps.altitude,
        business_gps_accuracy: gps.accuracy,
        operator_name: id.text("operator_name")?,
        operator_phone: id.text("operator_phone")?,
        date_of_interview: id
            .text("date_of_interview")?
            .map(|date| normalize_date(&date)),

        business_nature: decoder.choice(tables::BUSINESS_NATURE, details.text("business_nature")?),
        business_nature_other: details.text("business_nature_other")?,
        business_type: decoder.choice(tables::BUSINESS_TYPE, details.text("business_type")?),
        business_type_other: details.text("business_type_other")?,
        registration_status: decoder
            .choice(tables::REGISTRATION_STATUS, details.text("registration_status")?),
        registered_bodies: decoder
            .choices(tables::REGISTRATION_BODY, details.text("registered_bodies")?),
        statutory_status: decoder
            .choice(tables::STATUTORY_STATUS, details.text("statutory_status")?),
        pan_status: decoder.choice(tables::PAN_STATUS, details.text("pan_status")?),
        pan_number: details.text("pan_number")?,
        investment_amount: details.number("investment_amount")?,
        business_location_ownership: decoder.choice(
            tables::BUSINESS_LOCATION_OWNERSHIP,
            details.text("business_location_ownership")?,
        ),

        operator_gender: decoder.choice(tables::GENDER, operator.text("operator_gender")?),
        operator_age: operator.integer("operator_age")?,
        operator_education: decoder
            .choice(tables::EDUCATIONAL_LEVEL, operator.text("operator_education")?),
        operator_caste: decoder.choice(tables::CASTE, operator.text("operator_caste")?),
        operator_caste_other: operator.text("operator_caste_other")?,

        total_employees: employees.integer("total_employees")?,
        partners: employees.integer("partners")?,
        nepali_staff: employees.integer("nepali_staff")?,
        foreign_staff: employees.integer("foreign_staff")?,

        has_loan: loan.flag("has_loan")?,
        loaned_organizations: decoder.choices(
            tables::BUSINESS_LOANED_ORGANIZATION,
            loan.text("loaned_organizations")?,
        ),

        is_hotel: details.flag("is_hotel")?,
        has_aquaculture: details.flag("has_aquaculture")?,
        has_apiculture: details.flag("has_apiculture")?,
        ..BusinessRecord::default()
    };
    BusinessSections::resolve(raw, details, &decoder)?.apply(&mut record);
    Ok(record)
}
