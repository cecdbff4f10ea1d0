//! fieldarea - Area of field parcels from pasted coordinates, plus validation
//! of hand-typed latitude/longitude

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod report;

pub use domain::{AreaMethod, AreaResult, Axis, Coordinate, Polygon};
pub use error::{Result, ValidationError};
pub use geometry::{Projector, compute_area, compute_area_with};
pub use parse::{parse_coordinate_input, parse_coordinate_list, parse_polygon};
