pub mod area;
pub mod projection;

pub use area::{MIN_RING_POINTS, compute_area, compute_area_with, ring_perimeter};
pub use projection::{EARTH_RADIUS_M, METERS_PER_DEGREE, Projector};
