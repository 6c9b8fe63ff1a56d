//! End-to-end tests of the builder -> path -> query flow.

use approx::assert_abs_diff_eq;
use spline_path::{Knot, PathBuilder, PathError};

/// The three-knot course used across these tests: positions (0,-5),
/// (1,3), (3,0) with polar tangents (-45 deg, 1), (-45 deg, 3), (0 deg, 1).
fn three_knot_course() -> PathBuilder {
    let mut builder = PathBuilder::new();
    builder
        .add(Knot::new(0.0, -5.0).with_polar_tangent((-45f64).to_radians(), 1.0))
        .add(Knot::new(1.0, 3.0).with_polar_tangent((-45f64).to_radians(), 3.0))
        .add(Knot::new(3.0, 0.0).with_polar_tangent(0.0, 1.0));
    builder
}

#[test]
fn two_knot_segment_reproduces_boundary_data() {
    let mut builder = PathBuilder::new();
    builder
        .add(Knot::new(0.0, 0.0).with_tangent(1.0, 0.0))
        .add(Knot::new(1.0, 1.0).with_tangent(0.0, 1.0));
    let path = builder.build().unwrap();

    let (x, y) = path.point_at(0.0).unwrap();
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);

    let (x, y) = path.point_at(path.length()).unwrap();
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 1.0, epsilon = 1e-9);

    let (dx, dy) = path.tangent_at(0.0).unwrap();
    assert_abs_diff_eq!(dx, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(dy, 0.0, epsilon = 1e-9);

    let (dx, dy) = path.tangent_at(path.length()).unwrap();
    assert_abs_diff_eq!(dx, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(dy, 1.0, epsilon = 1e-9);
}

#[test]
fn three_knot_course_passes_through_every_knot() {
    let path = three_knot_course().build().unwrap();
    assert_eq!(path.segment_count(), 2);

    let (x, y) = path.point_at(0.0).unwrap();
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, -5.0, epsilon = 1e-9);

    let (x, y) = path.point_at(path.length()).unwrap();
    assert_abs_diff_eq!(x, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-9);

    // Interior knot sits exactly at the first segment's length.
    let boundary = path.segments()[0].length();
    let (x, y) = path.point_at(boundary).unwrap();
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 3.0, epsilon = 1e-9);
}

#[test]
fn curvature_defaults_to_zero_at_knots() {
    let path = three_knot_course().build().unwrap();
    let (ddx, ddy) = path.curvature_at(0.0).unwrap();
    assert_abs_diff_eq!(ddx, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ddy, 0.0, epsilon = 1e-9);
    let (ddx, ddy) = path.curvature_at(path.length()).unwrap();
    assert_abs_diff_eq!(ddx, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ddy, 0.0, epsilon = 1e-9);
}

#[test]
fn queries_outside_the_path_domain_fail() {
    let path = three_knot_course().build().unwrap();
    assert!(matches!(
        path.point_at(-1.0),
        Err(PathError::OutOfRange { .. })
    ));
    assert!(matches!(
        path.point_at(path.length() + 1.0),
        Err(PathError::OutOfRange { .. })
    ));
}

#[test]
fn single_knot_cannot_build() {
    let mut builder = PathBuilder::new();
    builder.add(Knot::new(0.0, -5.0).with_polar_tangent((-45f64).to_radians(), 1.0));
    assert!(matches!(
        builder.build(),
        Err(PathError::InsufficientKnots { count: 1 })
    ));
}

#[test]
fn distance_traveled_round_trips_across_the_path() {
    let path = three_knot_course().build().unwrap();
    let total = path.length();
    // Walking the path in even steps must stay on the curve and never
    // jump backwards.
    let mut previous = path.point_at(0.0).unwrap();
    let mut walked = 0.0;
    let steps = 200;
    for i in 1..=steps {
        let s = total * i as f64 / steps as f64;
        let point = path.point_at(s).unwrap();
        walked += ((point.0 - previous.0).powi(2) + (point.1 - previous.1).powi(2)).sqrt();
        previous = point;
    }
    // The chord sum of a fine sampling approaches the arc length from below.
    assert!(walked <= total + 1e-6);
    assert!(walked >= 0.9 * total);
}

#[test]
fn sampling_by_distance_covers_the_course() {
    let path = three_knot_course().build().unwrap();
    let points = path.sample_by_distance(0.25).unwrap();
    assert!(points.len() >= 2);
    assert_abs_diff_eq!(points[0].0, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].1, -5.0, epsilon = 1e-9);
    let last = points[points.len() - 1];
    assert_abs_diff_eq!(last.0, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.1, 0.0, epsilon = 1e-9);
}
