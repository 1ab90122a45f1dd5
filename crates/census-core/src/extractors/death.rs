use census_model::choice::tables;
use census_model::{DeathRecord, RawRecord, Record};

use super::ParentRef;
use crate::context::PipelineContext;
use crate::error::ExtractError;

/// Build one death record of the household.
pub fn extract(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let decoder = ctx.decoder();
    Ok(DeathRecord {
        id: raw.id()?.to_string(),
        household_id: parent.id.to_string(),
        ward_no: parent.ward_no,
        death_name: raw.text("death_name")?,
        death_gender: decoder.choice(tables::GENDER, raw.text("death_gender")?),
        death_age: raw.integer("death_age")?,
        death_cause: decoder.choice(tables::DEATH_CAUSE, raw.text("death_cause")?),
        death_cause_other: raw.text("death_cause_other")?,
        fertility_death_condition: decoder.choice(
            tables::FERTILITY_DEATH_CONDITION,
            raw.text("fertility_death_condition")?,
        ),
    }
    .into())
}
