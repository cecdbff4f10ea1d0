//! What the `area` and `locate` commands print

use serde::Serialize;

use crate::domain::area::{MAX_DECIMALS, round_to};
use crate::domain::{AreaMethod, AreaResult, Coordinate, Polygon};

/// Decimal places used when presenting an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub area_decimals: u8,
    pub hectare_decimals: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            area_decimals: 2,
            hectare_decimals: 4,
        }
    }
}

/// Area, perimeter and size of a measured parcel, rounded for display
#[derive(Debug, Clone, Serialize)]
pub struct AreaReport {
    pub square_meters: f64,
    pub hectares: f64,
    pub perimeter_meters: f64,
    pub vertices: usize,
    pub method: AreaMethod,
    #[serde(skip)]
    area: AreaResult,
    #[serde(skip)]
    precision: Precision,
}

impl AreaReport {
    pub fn new(polygon: &Polygon, method: AreaMethod, precision: Precision) -> Self {
        let area = polygon.area(method);
        Self {
            square_meters: round_to(area.square_meters(), precision.area_decimals),
            hectares: round_to(area.hectares(), precision.hectare_decimals),
            perimeter_meters: round_to(polygon.perimeter(), precision.area_decimals),
            vertices: polygon.len(),
            method,
            area,
            precision,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Vertices:  {}\nArea:      {}\nPerimeter: {:.*} m\nMethod:    {}",
            self.vertices,
            self.area
                .display(self.precision.area_decimals, self.precision.hectare_decimals),
            usize::from(self.precision.area_decimals.min(MAX_DECIMALS)),
            self.perimeter_meters,
            self.method
        )
    }
}

/// A validated location ready to center a map on
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationReport {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip)]
    coordinate: Coordinate,
}

impl LocationReport {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat(),
            lon: coordinate.lon(),
            coordinate,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "Latitude:  {}\nLongitude: {}\nLocation:  {}",
            self.lat, self.lon, self.coordinate
        )
    }
}
