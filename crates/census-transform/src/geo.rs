//! GPS location normalization.
//!
//! Two raw encodings occur in the field data:
//!
//! - WKT text: `POINT (lon lat alt)`
//! - a GeoJSON-like object: `{"coordinates": [lon, lat, alt], "properties": {"accuracy": 5}}`
//!
//! Both normalize to a 2D `POINT(lon lat)` plus altitude. Only the object
//! form carries accuracy, and an object without a readable accuracy is
//! rejected whole. Anything else yields empty fields.

use census_model::GpsFields;
use serde_json::Value;

/// Normalize a raw location value. Never fails.
pub fn process_location(raw: Option<&Value>) -> GpsFields {
    match raw {
        Some(Value::String(text)) => parse_wkt_point(text)
            .map(|[lon, lat, alt]| point_fields(lon, lat, alt, None))
            .unwrap_or_default(),
        Some(Value::Object(fields)) => {
            let Some(Value::Array(coordinates)) = fields.get("coordinates") else {
                return GpsFields::empty();
            };
            let Some([lon, lat, alt]) = three_numbers(coordinates.iter().map(Value::as_f64))
            else {
                return GpsFields::empty();
            };
            let Some(accuracy) = fields
                .get("properties")
                .and_then(|properties| properties.get("accuracy"))
                .and_then(lenient_number)
            else {
                return GpsFields::empty();
            };
            point_fields(lon, lat, alt, Some(accuracy))
        }
        _ => GpsFields::empty(),
    }
}

/// Canonical WKT for a 2D point.
pub fn format_point(lon: f64, lat: f64) -> String {
    format!("POINT({lon} {lat})")
}

fn point_fields(lon: f64, lat: f64, alt: f64, accuracy: Option<f64>) -> GpsFields {
    GpsFields {
        point: Some(format_point(lon, lat)),
        altitude: Some(alt),
        accuracy,
    }
}

/// A finite number, or a string holding one.
fn lenient_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

fn parse_wkt_point(text: &str) -> Option<[f64; 3]> {
    let text = text.trim();
    let keyword = text.get(..5)?;
    if !keyword.eq_ignore_ascii_case("point") {
        return None;
    }
    let body = text[5..].trim_start();
    let inner = body.strip_prefix('(')?.strip_suffix(')')?;
    three_numbers(inner.split_whitespace().map(|token| token.parse::<f64>().ok()))
}

fn three_numbers(mut values: impl Iterator<Item = Option<f64>>) -> Option<[f64; 3]> {
    let mut out = [0.0; 3];
    for slot in &mut out {
        *slot = values.next()?.filter(|value| value.is_finite())?;
    }
    if values.next().is_some() {
        return None;
    }
    Some(out)
}
