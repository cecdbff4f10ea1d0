use crate::domain::{AreaMethod, AreaResult, Coordinate};
use crate::error::{Result, ValidationError};
use crate::geometry::area::{ensure_ring, perimeter_of, ring_area};

/// A closed ring of at least 3 coordinates.
///
/// The last vertex connects back to the first. Self-intersection is not
/// checked; a bow-tie ring gives a meaningless area.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self> {
        ensure_ring(&vertices)?;
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn area(&self, method: AreaMethod) -> AreaResult {
        ring_area(&self.vertices, method)
    }

    /// Perimeter in meters
    pub fn perimeter(&self) -> f64 {
        perimeter_of(&self.vertices)
    }

    pub fn into_vertices(self) -> Vec<Coordinate> {
        self.vertices
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = ValidationError;

    fn try_from(vertices: Vec<Coordinate>) -> Result<Self> {
        Polygon::new(vertices)
    }
}
