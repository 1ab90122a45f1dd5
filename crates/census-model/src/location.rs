use serde::{Deserialize, Serialize};

/// Normalized GPS fields.
///
/// `point` and `altitude` are set together or not at all. `accuracy` is only
/// known for structured fixes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsFields {
    /// Canonical 2D point, `POINT(lon lat)`.
    pub point: Option<String>,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
}

impl GpsFields {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_none() && self.altitude.is_none() && self.accuracy.is_none()
    }
}
