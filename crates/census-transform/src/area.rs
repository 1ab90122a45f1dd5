//! Traditional land area units.
//!
//! Land is reported in bigha, kattha and dhur. All stored areas are
//! square meters.

use census_model::{RawRecord, Result};

/// Square meters per bigha.
pub const SQ_M_PER_BIGHA: f64 = 6772.63;
/// Square meters per kattha.
pub const SQ_M_PER_KATTHA: f64 = 338.63;
/// Square meters per dhur.
pub const SQ_M_PER_DHUR: f64 = 16.93;

/// Convert a bigha/kattha/dhur triple to square meters.
pub fn convert_traditional_area(bigha: f64, kattha: f64, dhur: f64) -> f64 {
    bigha * SQ_M_PER_BIGHA + kattha * SQ_M_PER_KATTHA + dhur * SQ_M_PER_DHUR
}

/// An area answered in traditional units. Unanswered components count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TraditionalArea {
    pub bigha: Option<f64>,
    pub kattha: Option<f64>,
    pub dhur: Option<f64>,
}

impl TraditionalArea {
    /// Read a `{bigha, kattha, dhur}` sub-object.
    pub fn from_record(raw: &RawRecord<'_>) -> Result<Self> {
        Ok(Self {
            bigha: raw.number("bigha")?,
            kattha: raw.number("kattha")?,
            dhur: raw.number("dhur")?,
        })
    }

    pub fn is_unanswered(&self) -> bool {
        self.bigha.is_none() && self.kattha.is_none() && self.dhur.is_none()
    }

    pub fn square_meters(&self) -> f64 {
        convert_traditional_area(
            self.bigha.unwrap_or(0.0),
            self.kattha.unwrap_or(0.0),
            self.dhur.unwrap_or(0.0),
        )
    }
}

/// Area in square meters of the sub-object `key` of `parent`.
///
/// A missing sub-object, or one with no component answered, gives `None`.
pub fn area_field(parent: &RawRecord<'_>, key: &str) -> Result<Option<f64>> {
    let Some(sub) = parent.object(key)? else {
        return Ok(None);
    };
    let area = TraditionalArea::from_record(&sub)?;
    Ok((!area.is_unanswered()).then(|| area.square_meters()))
}
