//! Turning free text typed or pasted by a user into validated coordinates

pub mod coordinate;
pub mod list;

pub use coordinate::{normalize_decimal, parse_coordinate_input, parse_number};
pub use list::{parse_coordinate_list, parse_polygon};
