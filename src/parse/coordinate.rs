use tracing::debug;

use crate::domain::{Axis, Coordinate};
use crate::error::{Result, ValidationError};

/// Trim whitespace and accept a comma as the decimal mark
pub fn normalize_decimal(text: &str) -> String {
    text.trim().replace(',', ".")
}

/// Parse one free-text degree value for `axis`.
///
/// Only finite numbers are accepted; Rust's float syntax for `inf` and `NaN`
/// is rejected like any other non-number. No range check is done here.
pub fn parse_number(axis: Axis, text: &str) -> Result<f64> {
    let normalized = normalize_decimal(text);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NumberParse {
            axis,
            input: text.to_string(),
        }),
    }
}

/// Parse and validate the latitude and longitude fields of a location search.
///
/// Latitude is handled before longitude, so when both are bad the latitude
/// error is the one reported.
///
/// # Errors
/// * `NumberParse` if a field is not a number
/// * `Range` if a value falls outside [-90, 90] / [-180, 180]
pub fn parse_coordinate_input(lat_text: &str, lon_text: &str) -> Result<Coordinate> {
    let lat = parse_number(Axis::Latitude, lat_text)?;
    let lat = Axis::Latitude.check(lat)?;
    let lon = parse_number(Axis::Longitude, lon_text)?;
    let lon = Axis::Longitude.check(lon)?;

    let coordinate = Coordinate::new(lon, lat)?;
    debug!(%coordinate, "parsed location input");
    Ok(coordinate)
}
