use geo::{Area, GeodesicArea, LineString, Polygon};
use tracing::debug;

use super::Projector;
use crate::domain::{AreaMethod, AreaResult, Coordinate};
use crate::error::{Result, ValidationError};

/// Smallest number of vertices that can enclose an area
pub const MIN_RING_POINTS: usize = 3;

/// Compute the area enclosed by a ring of coordinates using the planar method.
///
/// The ring is closed implicitly (last point connects back to the first).
/// Collinear or otherwise degenerate rings yield 0.
///
/// # Errors
/// * `InsufficientPoints` if fewer than 3 coordinates are given
pub fn compute_area(points: &[Coordinate]) -> Result<AreaResult> {
    compute_area_with(points, AreaMethod::Planar)
}

/// Compute the area enclosed by a ring with an explicit method
pub fn compute_area_with(points: &[Coordinate], method: AreaMethod) -> Result<AreaResult> {
    ensure_ring(points)?;
    Ok(ring_area(points, method))
}

/// Length of the closed ring in meters, closing edge included
pub fn ring_perimeter(points: &[Coordinate]) -> Result<f64> {
    ensure_ring(points)?;
    Ok(perimeter_of(points))
}

/// Area of a ring already known to have at least 3 points
pub(crate) fn ring_area(points: &[Coordinate], method: AreaMethod) -> AreaResult {
    let square_meters = match method {
        AreaMethod::Planar => planar_area(points),
        AreaMethod::Geodesic => geodesic_area(points),
    };
    debug!(points = points.len(), %method, square_meters, "computed area");

    AreaResult::from_square_meters(square_meters)
}

/// Perimeter of a ring already known to have at least 3 points
pub(crate) fn perimeter_of(points: &[Coordinate]) -> f64 {
    let Some(projector) = Projector::centered_on(points) else {
        return 0.0;
    };

    let projected = projector.project_points(points);
    let n = projected.len();
    (0..n)
        .map(|i| {
            let (x1, y1) = projected[i];
            let (x2, y2) = projected[(i + 1) % n];
            (x2 - x1).hypot(y2 - y1)
        })
        .sum()
}

pub(crate) fn ensure_ring(points: &[Coordinate]) -> Result<()> {
    if points.len() < MIN_RING_POINTS {
        return Err(ValidationError::InsufficientPoints {
            count: points.len(),
        });
    }
    Ok(())
}

/// Shoelace area of the ring after projecting to local meters
fn planar_area(points: &[Coordinate]) -> f64 {
    let Some(projector) = Projector::centered_on(points) else {
        return 0.0;
    };
    debug!(center = %projector.center(), "projecting ring");

    let ring = LineString::from(projector.project_points(points));
    Polygon::new(ring, vec![]).unsigned_area()
}

fn geodesic_area(points: &[Coordinate]) -> f64 {
    let ring: LineString<f64> = points.iter().map(|p| p.to_geo()).collect();
    Polygon::new(ring, vec![]).geodesic_area_unsigned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::METERS_PER_DEGREE;

    fn ring(pairs: &[(f64, f64)]) -> Vec<Coordinate> {
        pairs
            .iter()
            .map(|&(lon, lat)| Coordinate::new(lon, lat).unwrap())
            .collect()
    }

    fn small_square() -> Vec<Coordinate> {
        ring(&[(0.0, 0.0), (0.001, 0.0), (0.001, 0.001), (0.0, 0.001)])
    }

    fn field() -> Vec<Coordinate> {
        ring(&[
            (-63.9039, -8.7619),
            (-63.9001, -8.7612),
            (-63.8995, -8.7650),
            (-63.9020, -8.7671),
            (-63.9042, -8.7655),
        ])
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(1.0)
    }

    #[test]
    fn test_square_near_equator() {
        let area = compute_area(&small_square()).unwrap();

        let side = 0.001 * METERS_PER_DEGREE;
        assert!((area.square_meters() - side * side).abs() < 1.0);
        // ~111.32m × 111.32m
        assert!((area.square_meters() - 12_392.0).abs() < 5.0);
    }

    #[test]
    fn test_collinear_is_zero() {
        let area = compute_area(&ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])).unwrap();
        assert_eq!(area.square_meters(), 0.0);
    }

    #[test]
    fn test_repeated_point_is_zero() {
        let area = compute_area(&ring(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)])).unwrap();
        assert_eq!(area.square_meters(), 0.0);
    }

    #[test]
    fn test_rotation_invariant() {
        let points = field();
        let expected = compute_area(&points).unwrap().square_meters();
        assert!(expected > 0.0);

        for shift in 1..points.len() {
            let mut rotated = points.clone();
            rotated.rotate_left(shift);
            let area = compute_area(&rotated).unwrap().square_meters();
            assert!(close(area, expected), "shift {shift}: {area} != {expected}");
        }
    }

    #[test]
    fn test_direction_invariant() {
        let points = field();
        let mut reversed = points.clone();
        reversed.reverse();

        let forward = compute_area(&points).unwrap().square_meters();
        let backward = compute_area(&reversed).unwrap().square_meters();
        assert!(close(forward, backward));
    }

    #[test]
    fn test_explicitly_closed_ring_same_area() {
        let mut closed = small_square();
        closed.push(closed[0]);
        let open = compute_area(&small_square()).unwrap().square_meters();
        let area = compute_area(&closed).unwrap().square_meters();
        assert!(close(area, open));
    }

    #[test]
    fn test_too_few_points() {
        let err = compute_area(&ring(&[(1.0, 2.0), (3.0, 4.0)])).unwrap_err();
        assert_eq!(err, ValidationError::InsufficientPoints { count: 2 });
        assert!(compute_area(&[]).is_err());
    }

    #[test]
    fn test_input_not_mutated() {
        let points = field();
        let before = points.clone();
        compute_area(&points).unwrap();
        assert_eq!(points, before);
    }

    #[test]
    fn test_geodesic_close_to_planar_for_small_fields() {
        let planar = compute_area_with(&field(), AreaMethod::Planar)
            .unwrap()
            .square_meters();
        let geodesic = compute_area_with(&field(), AreaMethod::Geodesic)
            .unwrap()
            .square_meters();

        // Sphere vs ellipsoid stays under 2% at this latitude and scale
        assert!((planar - geodesic).abs() / geodesic < 0.02);
    }

    #[test]
    fn test_perimeter_of_square() {
        let perimeter = ring_perimeter(&small_square()).unwrap();
        let side = 0.001 * METERS_PER_DEGREE;
        assert!((perimeter - 4.0 * side).abs() < 0.1);
    }

    #[test]
    fn test_ring_across_antimeridian() {
        let crossing = ring(&[
            (179.9995, 0.0),
            (-179.9995, 0.0),
            (-179.9995, 0.001),
            (179.9995, 0.001),
        ]);

        let planar = compute_area_with(&crossing, AreaMethod::Planar)
            .unwrap()
            .square_meters();
        let geodesic = compute_area_with(&crossing, AreaMethod::Geodesic)
            .unwrap()
            .square_meters();
        assert!((planar - geodesic).abs() / geodesic < 0.02);

        // Same size as the square at 0°
        let reference = compute_area(&small_square()).unwrap().square_meters();
        assert!((planar - reference).abs() < 1.0);

        let perimeter = ring_perimeter(&crossing).unwrap();
        assert!((perimeter - 4.0 * 0.001 * METERS_PER_DEGREE).abs() < 0.1);
    }
}
