//! Public helper functions and caller-contract errors.

use approx::assert_abs_diff_eq;
use chart3d::{
    BoxCorners, DataPoint3D, Error, MarkerStyle3D, angle_correction, find_point_by_index,
    lines_intersection, renderers::PieSliceGeometry,
};
use chart3d_geometry::{Color, Vec2, Vec3};

// ====================
// Angle correction
// ====================

#[test]
fn test_angle_correction_squashes_toward_horizontal() {
    let corrected = angle_correction(45.0, 0.5);
    assert_abs_diff_eq!(corrected, 0.5f32.atan().to_degrees(), epsilon = 1e-3);

    // Mirrored on the other side of the band centre.
    assert_abs_diff_eq!(angle_correction(135.0, 0.5), 180.0 - corrected, epsilon = 1e-3);
}

#[test]
fn test_angle_correction_keeps_band_edges() {
    for angle in [-90.0, 90.0, 270.0, 450.0] {
        assert_eq!(angle_correction(angle, 0.3), angle);
    }
}

#[test]
fn test_angle_correction_is_monotonic() {
    let mut previous = angle_correction(-180.0, 0.4);
    let mut angle = -179.0;
    while angle <= 540.0 {
        let corrected = angle_correction(angle, 0.4);
        assert!(
            corrected >= previous - 1e-4,
            "correction went backwards at {angle}: {previous} -> {corrected}"
        );
        previous = corrected;
        angle += 1.0;
    }
}

// ====================
// Line intersection
// ====================

#[test]
fn test_axis_aligned_lines_meet_exactly() {
    let hit = lines_intersection(
        Vec2::new(0.0, 5.0),
        Vec2::new(10.0, 5.0),
        Vec2::new(7.0, 0.0),
        Vec2::new(7.0, 10.0),
    );
    assert_eq!(hit, Some(Vec2::new(7.0, 5.0)));
}

#[test]
fn test_slanted_lines_meet() {
    let hit = lines_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 0.0),
    )
    .expect("diagonals cross");
    assert_abs_diff_eq!(hit.x, 5.0, epsilon = 1e-4);
    assert_abs_diff_eq!(hit.y, 5.0, epsilon = 1e-4);
}

#[test]
fn test_parallel_lines_do_not_meet() {
    let slanted = lines_intersection(
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(0.0, 3.0),
        Vec2::new(4.0, 5.0),
    );
    assert_eq!(slanted, None);

    let vertical = lines_intersection(
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 9.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 9.0),
    );
    assert_eq!(vertical, None);
}

// ====================
// Point lookup
// ====================

#[test]
fn test_find_point_by_index_matches_series() {
    let points = vec![
        DataPoint3D::new("a", 1, 0.0, 0.0),
        DataPoint3D::new("b", 1, 5.0, 5.0),
        DataPoint3D::new("b", 2, 10.0, 10.0),
    ];

    let (position, point) = find_point_by_index(&points, 1, "b").expect("point b1 exists");
    assert_eq!(position, 1);
    assert_eq!(point.position(), Vec2::new(5.0, 5.0));
    assert!(find_point_by_index(&points, 2, "a").is_none());
}

// ====================
// Errors
// ====================

#[test]
fn test_unknown_marker_code_is_rejected() {
    assert_eq!(
        MarkerStyle3D::from_code(200, 8.0, Color::RED),
        Err(Error::UnknownMarkerStyle(200))
    );
    assert!(MarkerStyle3D::from_code(2, 8.0, Color::RED).is_ok());
}

#[test]
fn test_box_corners_need_eight_points() {
    let points = [Vec3::ZERO; 7];
    assert_eq!(
        BoxCorners::from_slice(&points),
        Err(Error::InvalidCornerCount {
            expected: 8,
            actual: 7
        })
    );
}

#[test]
fn test_empty_pie_slice_is_rejected() {
    let result =
        PieSliceGeometry::from_ellipse(Vec2::new(50.0, 50.0), 40.0, 30.0, 10.0, 0.0, 0.0, 0.0);
    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
}

// ====================
// Features
// ====================

#[test]
fn test_profiling_follows_crate_feature() {
    assert_eq!(
        chart3d_core::profiling::ENABLED,
        cfg!(feature = "profiling"),
        "chart3d-core profiling must be switched by chart3d's own feature"
    );
}
