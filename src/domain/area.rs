use serde::{Deserialize, Serialize};
use std::fmt;

pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Most decimal places an area can be rounded to; f64 holds ~15 significant digits
pub const MAX_DECIMALS: u8 = 15;

/// How an enclosed area is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AreaMethod {
    /// Shoelace formula on a local equirectangular projection
    #[default]
    Planar,
    /// Exact area on the WGS84 ellipsoid
    Geodesic,
}

impl fmt::Display for AreaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaMethod::Planar => f.write_str("planar"),
            AreaMethod::Geodesic => f.write_str("geodesic"),
        }
    }
}

/// An enclosed area in square meters, never negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AreaResult {
    square_meters: f64,
}

impl AreaResult {
    pub(crate) fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters: square_meters.abs(),
        }
    }

    pub fn square_meters(&self) -> f64 {
        self.square_meters
    }

    pub fn hectares(&self) -> f64 {
        self.square_meters / SQUARE_METERS_PER_HECTARE
    }

    /// Render as `"<m²> m² (<ha> ha)"` with the given decimal places,
    /// capped at `MAX_DECIMALS`
    pub fn display(&self, area_decimals: u8, hectare_decimals: u8) -> String {
        format!(
            "{:.*} m² ({:.*} ha)",
            usize::from(area_decimals.min(MAX_DECIMALS)),
            self.square_meters,
            usize::from(hectare_decimals.min(MAX_DECIMALS)),
            self.hectares()
        )
    }
}

impl fmt::Display for AreaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(2, 4))
    }
}

/// Round to a fixed number of decimal places, capped at `MAX_DECIMALS`
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals.min(MAX_DECIMALS)));
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
