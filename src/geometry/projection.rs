use crate::domain::Coordinate;

/// Equatorial radius of the WGS84 ellipsoid
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Meters per degree of arc on the equator (~111320)
pub const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Equirectangular projection from WGS84 to local meters
///
/// Uses approximation suitable for field-sized parcels:
/// - x = (lon - center_lon) * cos(center_lat) * METERS_PER_DEGREE
/// - y = (lat - center_lat) * METERS_PER_DEGREE
///
/// Distortion grows with distance from the center, so keep the center
/// inside the area being measured.
#[derive(Debug, Clone)]
pub struct Projector {
    center: Coordinate,
    cos_lat: f64,
}

impl Projector {
    /// Create a projector centered at the given coordinate
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            cos_lat: center.lat().to_radians().cos(),
        }
    }

    /// Create a projector centered on the bounding box of `points`.
    ///
    /// Longitudes are unwrapped around the first point before the box is
    /// taken, so a ring crossing the ±180° meridian gets a center inside it.
    /// Returns `None` for an empty slice. The center does not depend on the
    /// order of the points.
    pub fn centered_on(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let reference = first.lon();
        let (mut min_lon, mut max_lon) = (reference, reference);
        let (mut min_lat, mut max_lat) = (first.lat(), first.lat());

        for p in &points[1..] {
            let lon = reference + wrap_degrees(p.lon() - reference);
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(p.lat());
            max_lat = max_lat.max(p.lat());
        }

        let mid_lon = (min_lon + max_lon) / 2.0;
        let center_lon = if mid_lon.abs() <= 180.0 {
            mid_lon
        } else {
            wrap_degrees(mid_lon)
        };
        let center = Coordinate::new(center_lon, (min_lat + max_lat) / 2.0).ok()?;
        Some(Self::new(center))
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Project a coordinate to local meters
    ///
    /// # Returns
    /// * (x, y) in meters, centered at the projection center
    pub fn project(&self, point: Coordinate) -> (f64, f64) {
        let dlon = wrap_degrees(point.lon() - self.center.lon());
        let x = dlon * self.cos_lat * METERS_PER_DEGREE;
        let y = (point.lat() - self.center.lat()) * METERS_PER_DEGREE;

        (x, y)
    }

    /// Project a slice of coordinates
    pub fn project_points(&self, points: &[Coordinate]) -> Vec<(f64, f64)> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

/// Bring a longitude difference into [-180, 180)
pub fn wrap_degrees(delta: f64) -> f64 {
    (delta + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).unwrap()
    }

    #[test]
    fn test_projector_center() {
        let proj = Projector::new(coord(-122.4194, 37.7749));
        let (x, y) = proj.project(coord(-122.4194, 37.7749));
        assert!((x).abs() < 0.01);
        assert!((y).abs() < 0.01);
    }

    #[test]
    fn test_projector_1km() {
        let proj = Projector::new(coord(-122.4194, 37.7749));

        // 1 degree latitude ≈ 111.32 km
        // So 0.009 degrees ≈ 1 km
        let (_, y) = proj.project(coord(-122.4194, 37.7749 + 0.009));
        assert!((y - 1000.0).abs() < 50.0); // Within 50m tolerance
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let equator = Projector::new(coord(0.0, 0.0));
        let (x_eq, _) = equator.project(coord(0.01, 0.0));

        let north = Projector::new(coord(0.0, 60.0));
        let (x_60, _) = north.project(coord(0.01, 60.0));

        // cos(60°) = 0.5
        assert!((x_60 / x_eq - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_centered_on_bbox() {
        let points = vec![coord(10.0, 20.0), coord(12.0, 24.0), coord(11.0, 21.0)];
        let proj = Projector::centered_on(&points).unwrap();
        assert_eq!(proj.center(), coord(11.0, 22.0));

        assert!(Projector::centered_on(&[]).is_none());
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.5), 0.5);
        assert_eq!(wrap_degrees(-0.5), -0.5);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert!((wrap_degrees(359.999) - (-0.001)).abs() < 1e-9);
        assert!((wrap_degrees(-359.999) - 0.001).abs() < 1e-9);
    }

    #[test]
    fn test_centered_on_across_antimeridian() {
        let points = vec![
            coord(179.9995, 0.0),
            coord(-179.9995, 0.0),
            coord(-179.9995, 0.001),
        ];
        let proj = Projector::centered_on(&points).unwrap();
        assert!(proj.center().lon().abs() > 179.99);

        let (x_east, _) = proj.project(coord(-179.9995, 0.0));
        let (x_west, _) = proj.project(coord(179.9995, 0.0));
        let width = 0.001 * METERS_PER_DEGREE;
        assert!((x_east - x_west - width).abs() < 0.01);
    }
}
