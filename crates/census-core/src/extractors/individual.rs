//! Household member extraction.

use census_model::choice::tables;
use census_model::{FieldError, IndividualRecord, RawRecord, Record};
use census_transform::Decoder;

use super::ParentRef;
use super::siblings::Siblings;
use crate::context::PipelineContext;
use crate::demographics::DemographicSource;
use crate::error::ExtractError;

/// Build one member record, merged with its matched sibling answers.
pub fn extract(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    siblings: &Siblings<'_>,
    demographics: &DemographicSource,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let decoder = ctx.decoder();
    let name = raw.text("name")?;
    let age = raw.integer("age")?;

    let mut record = IndividualRecord {
        id: raw.id()?.to_string(),
        household_id: parent.id.to_string(),
        ward_no: parent.ward_no,
        gender: decoder.choice(tables::GENDER, raw.text("gender")?),
        citizenship: decoder.choice(tables::CITIZENSHIP, raw.text("citizenof")?),
        citizenship_other: raw.text("citizenof_other")?,
        family_role: decoder.choice(tables::FAMILY_ROLE, raw.text("family_role")?),
        ..IndividualRecord::default()
    };

    if age.is_some_and(|age| age >= ctx.options.marital_status_min_age) {
        record.marital_status = decoder.choice(tables::MARITAL_STATUS, raw.text("marital_status")?);
        record.married_age = raw.integer("married_age")?;
    }

    demographics
        .resolve(raw, &decoder)?
        .apply_to_individual(&mut record);

    let key_name = name.as_deref();
    if let Some(health) = siblings.health.lookup(key_name, age) {
        apply_health(&mut record, health, &decoder).map_err(|source| ExtractError::Sibling {
            group: "health",
            source,
        })?;
    }
    if let Some(fertility) = siblings.fertility.lookup(key_name, age) {
        apply_fertility(&mut record, fertility, &decoder).map_err(|source| {
            ExtractError::Sibling {
                group: "fertility",
                source,
            }
        })?;
    }
    if let Some(education) = siblings.education.lookup(key_name, age) {
        apply_education(&mut record, education, &decoder).map_err(|source| {
            ExtractError::Sibling {
                group: "education",
                source,
            }
        })?;
    }

    record.name = name;
    record.age = age;
    Ok(record.into())
}

fn apply_health(
    record: &mut IndividualRecord,
    raw: RawRecord<'_>,
    decoder: &Decoder<'_>,
) -> Result<(), FieldError> {
    record.has_chronic_disease = raw.flag("chronic_disease")?;
    record.primary_chronic_disease =
        decoder.choice(tables::CHRONIC_DISEASE, raw.text("primary_chronic_disease")?);
    record.is_disabled = raw.flag("is_disabled")?;
    record.disability_type = decoder.choice(tables::DISABILITY_TYPE, raw.text("disability_type")?);
    record.disability_cause =
        decoder.choice(tables::DISABILITY_CAUSE, raw.text("disability_cause")?);
    record.is_sanitized = raw.flag("is_sanitized")?;
    Ok(())
}

fn apply_fertility(
    record: &mut IndividualRecord,
    raw: RawRecord<'_>,
    decoder: &Decoder<'_>,
) -> Result<(), FieldError> {
    record.gave_live_birth = raw.flag("gave_live_birth")?;
    record.alive_sons = raw.integer("alive_sons")?;
    record.alive_daughters = raw.integer("alive_daughters")?;
    record.total_born_children = raw.integer("total_born_children")?;
    record.has_dead_children = raw.flag("has_dead_children")?;
    record.dead_sons = raw.integer("dead_sons")?;
    record.dead_daughters = raw.integer("dead_daughters")?;
    record.recent_birth = raw.flag("recent_birth")?;
    record.recent_delivery_location =
        decoder.choice(tables::DELIVERY_LOCATION, raw.text("recent_delivery_location")?);
    record.prenatal_checkup = raw.flag("prenatal_checkup")?;
    record.first_delivery_age = raw.integer("first_delivery_age")?;
    Ok(())
}

fn apply_education(
    record: &mut IndividualRecord,
    raw: RawRecord<'_>,
    decoder: &Decoder<'_>,
) -> Result<(), FieldError> {
    record.literacy_status = decoder.choice(tables::LITERACY_STATUS, raw.text("literacy_status")?);
    record.school_presence_status =
        decoder.choice(tables::SCHOOL_PRESENCE, raw.text("school_presence_status")?);
    record.educational_level =
        decoder.choice(tables::EDUCATIONAL_LEVEL, raw.text("educational_level")?);
    record.primary_subject = decoder.choice(tables::PRIMARY_SUBJECT, raw.text("primary_subject")?);
    record.school_barrier = decoder.choice(tables::SCHOOL_BARRIER, raw.text("school_barrier")?);

    // Economy answers are nested in the education element.
    let economy = raw.section("economy")?;
    record.has_training = economy.flag("has_training")?;
    record.training = decoder.choice(tables::SKILL_TRAINING, economy.text("training")?);
    record.months_worked = decoder.choice(tables::MONTHS_WORKED, economy.text("months_worked")?);
    record.primary_occupation =
        decoder.choice(tables::OCCUPATION, economy.text("primary_occupation")?);
    record.work_barrier = decoder.choice(tables::WORK_BARRIER, economy.text("work_barrier")?);
    record.work_availability =
        decoder.choice(tables::WORK_AVAILABILITY, economy.text("work_availability")?);
    Ok(())
}
