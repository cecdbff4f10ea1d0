use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, ValidationError};

/// Which half of a coordinate a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value allowed on this axis, in degrees
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Check that `value` is finite and inside `[-limit, limit]`
    pub fn check(self, value: f64) -> Result<f64> {
        if value.is_finite() && value.abs() <= self.limit() {
            Ok(value)
        } else {
            Err(ValidationError::Range { axis: self, value })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A WGS84 position in degrees.
///
/// Stored as (longitude, latitude) to match the `[lon, lat]` order of pasted
/// coordinate lists. Always finite and in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lon: f64,
    lat: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = ValidationError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lon, raw.lat)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN, infinities and out-of-range values.
    ///
    /// Latitude is checked first.
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        let lat = Axis::Latitude.check(lat)?;
        let lon = Axis::Longitude.check(lon)?;
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// As an (x, y) pair for `geo`
    pub(crate) fn to_geo(self) -> geo::Coord<f64> {
        geo::coord! { x: self.lon, y: self.lat }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.lon >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.4}{} / {:.4}{}",
            self.lat.abs(),
            lat_dir,
            self.lon.abs(),
            lon_dir
        )
    }
}
