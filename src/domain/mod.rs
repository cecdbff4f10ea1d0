pub mod area;
pub mod coordinate;
pub mod polygon;

pub use area::{AreaMethod, AreaResult};
pub use coordinate::{Axis, Coordinate};
pub use polygon::Polygon;
