//! Agricultural land parcel extraction.

use census_model::choice::tables;
use census_model::{LandParcelRecord, RawRecord, Record};
use census_transform::area_field;

use super::ParentRef;
use crate::context::PipelineContext;
use crate::error::ExtractError;

/// Build one land parcel record.
///
/// The irrigated area is only kept when the parcel is answered as
/// irrigated and the `irrigation` sub-form is present.
pub fn extract(
    raw: RawRecord<'_>,
    parent: ParentRef<'_>,
    ctx: &PipelineContext,
) -> Result<Record, ExtractError> {
    let decoder = ctx.decoder();
    let is_land_irrigated = raw.flag("is_land_irrigated")?;
    let irrigation = raw.object("irrigation")?;

    let irrigation_source = match irrigation {
        Some(irrigation) => {
            decoder.choice(tables::IRRIGATION_SOURCE, irrigation.text("irrigation_source")?)
        }
        None => None,
    };
    let irrigated_area = match irrigation {
        Some(irrigation) if is_land_irrigated == Some(true) => {
            area_field(&irrigation, "irrigated_area")?
        }
        _ => None,
    };

    Ok(LandParcelRecord {
        id: raw.id()?.to_string(),
        household_id: parent.id.to_string(),
        ward_no: parent.ward_no,
        land_ownership_type: decoder
            .choice(tables::LAND_OWNERSHIP_TYPE, raw.text("land_ownership_type")?),
        land_area: area_field(&raw, "total_land_area")?,
        is_land_irrigated,
        irrigation_source,
        irrigated_area,
    }
    .into())
}
