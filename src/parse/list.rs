use serde_json::Value;
use tracing::debug;

use super::coordinate::normalize_decimal;
use crate::domain::{Coordinate, Polygon};
use crate::error::{Result, ValidationError};
use crate::geometry::MIN_RING_POINTS;

/// Parse a pasted JSON array of `[lon, lat]` pairs.
///
/// # Algorithm
/// 1. Deserialize the text as JSON; it must be an array
/// 2. Require at least 3 elements
/// 3. Each element must be an array whose first two entries are numbers or
///    numeric strings; any further entries (altitude etc.) are ignored
/// 4. Each pair must be a finite, in-range coordinate
///
/// Order is preserved since it defines the ring.
pub fn parse_coordinate_list(raw: &str) -> Result<Vec<Coordinate>> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| ValidationError::malformed(format!("not valid JSON ({e})")))?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(ValidationError::malformed(format!(
                "expected an array of [lon, lat] pairs, got {}",
                json_kind(&other)
            )));
        }
    };

    if elements.len() < MIN_RING_POINTS {
        return Err(ValidationError::InsufficientPoints {
            count: elements.len(),
        });
    }

    let coordinates = elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_element(index, element))
        .collect::<Result<Vec<_>>>()?;

    debug!(points = coordinates.len(), "parsed coordinate list");
    Ok(coordinates)
}

/// Parse a pasted coordinate list straight into a polygon
pub fn parse_polygon(raw: &str) -> Result<Polygon> {
    Polygon::new(parse_coordinate_list(raw)?)
}

fn parse_element(index: usize, element: &Value) -> Result<Coordinate> {
    let pair = match element {
        Value::Array(entries) if entries.len() >= 2 => entries,
        Value::Array(entries) => {
            return Err(ValidationError::invalid_element(
                index,
                format!("expected a [lon, lat] pair, got {} value(s)", entries.len()),
            ));
        }
        other => {
            return Err(ValidationError::invalid_element(
                index,
                format!("expected a [lon, lat] pair, got {}", json_kind(other)),
            ));
        }
    };

    let lon = coerce_number(index, "longitude", &pair[0])?;
    let lat = coerce_number(index, "latitude", &pair[1])?;

    Coordinate::new(lon, lat).map_err(|e| ValidationError::invalid_element(index, e.to_string()))
}

/// Numbers pass through, numeric strings are parsed, everything else fails
fn coerce_number(index: usize, label: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => normalize_decimal(s).parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::invalid_element(
            index,
            format!("{label} is not a number: {value}"),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
