//! Whole-scene behaviour of the renderers.
//!
//! These tests drive the public API the way chart layout code does: one
//! matrix per scene, one renderer borrowing a recording surface, and calls
//! issued in back-to-front order.

use chart3d::{
    BoxCorners, BoxStyle, ChartRenderer3D, DataPoint3D, DrawingOperationTypes, LineSegmentType,
    Matrix3D, PieStyle, SceneStyle, StripRenderContext, StripStyle, SurfaceNames,
    is_surface_visible,
    renderers::{ClipBounds, PieSliceGeometry, PieceRole, StripSegment, clip_strip},
};
use chart3d_core::logging;
use chart3d_geometry::{Color, HotRegionOwner, Rect, Vec2};
use chart3d_test_utils::{RecordingHotRegions, RecordingSurface};

// ====================
// Visibility
// ====================

#[test]
fn test_orientation_antisymmetry_on_a_grid() {
    let samples = [-7.0, -1.5, 0.0, 2.0, 9.5];
    for &ax in &samples {
        for &by in &samples {
            for &cx in &samples {
                let a = Vec2::new(ax, 1.0);
                let b = Vec2::new(3.0, by);
                let c = Vec2::new(cx, -2.0);
                let cross = (b - a).perp_dot(c - a);
                if cross.abs() < 0.5 {
                    continue;
                }
                assert_eq!(
                    is_surface_visible(a, b, c),
                    !is_surface_visible(c, b, a),
                    "a={a:?} b={b:?} c={c:?}"
                );
            }
        }
    }
}

#[test]
fn test_heuristic_matches_exact_visibility() {
    let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
    for ax in [-45.0, 0.0, 45.0] {
        for ay in [-45.0, 0.0, 45.0] {
            let style = SceneStyle::default()
                .with_inclination(ax)
                .with_rotation(ay);
            let matrix = Matrix3D::new(unit, 1.0, &style);

            let heuristic = matrix.visible_surfaces();
            let exact = BoxCorners::new(unit, 0.0, 1.0)
                .transformed(&matrix)
                .visible_faces();
            assert_eq!(heuristic, exact, "inclination {ax}, rotation {ay}");
        }
    }
}

// ====================
// Boxes
// ====================

#[test]
fn test_unit_box_end_to_end() {
    let unit = Rect::new(-0.5, -0.5, 1.0, 1.0);
    let matrix = Matrix3D::new(unit, 1.0, &SceneStyle::default());

    assert_eq!(
        matrix.box_visible_surfaces(unit, 0.0, 1.0),
        SurfaceNames::FRONT | SurfaceNames::RIGHT | SurfaceNames::TOP
    );

    let color = Color::rgb(0.3, 0.6, 0.2);
    let mut surface = RecordingSurface::new();
    let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
    renderer.fill_3d_box(
        unit,
        0.0,
        1.0,
        &BoxStyle::new(color),
        DrawingOperationTypes::DRAW_ELEMENT,
    );

    // Back to front, no hidden face for an opaque fill.
    let shades = matrix.face_colors(color);
    assert_eq!(
        surface.fill_colors(),
        vec![shades.top, shades.right, shades.front]
    );
}

#[test]
fn test_degenerate_boxes_hit_only_remaining_faces() {
    let matrix = Matrix3D::new(Rect::new(0.0, 0.0, 100.0, 100.0), 20.0, &SceneStyle::default());
    let mut surface = RecordingSurface::new();
    let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
    let style = BoxStyle::new(Color::RED);

    let flat = renderer
        .fill_3d_box(
            Rect::new(10.0, 10.0, 30.0, 30.0),
            0.0,
            0.0,
            &style,
            DrawingOperationTypes::CALC_ELEMENT_PATH,
        )
        .unwrap();
    assert_eq!(flat.subpath_count(), 1);

    let thin = renderer
        .fill_3d_box(
            Rect::new(10.0, 10.0, 0.0, 30.0),
            0.0,
            10.0,
            &style,
            DrawingOperationTypes::CALC_ELEMENT_PATH,
        )
        .unwrap();
    // Only the right side of a zero-width box faces the viewer.
    assert_eq!(thin.subpath_count(), 1);
}

// ====================
// Strips
// ====================

#[test]
fn test_clip_piece_counts() {
    let bounds = ClipBounds::new(0.0, 100.0);

    let above = clip_strip(Vec2::new(0.0, -10.0), Vec2::new(10.0, -30.0), bounds, false);
    assert_eq!(above.len(), 1);
    assert_eq!(above[0].role, PieceRole::Cut);
    assert_eq!((above[0].start.y, above[0].end.y), (0.0, 0.0));

    let crossing = clip_strip(Vec2::new(0.0, -10.0), Vec2::new(10.0, 50.0), bounds, false);
    assert_eq!(crossing.len(), 2);

    let spanning = clip_strip(Vec2::new(0.0, -10.0), Vec2::new(10.0, 150.0), bounds, false);
    assert_eq!(spanning.len(), 3);
    assert_eq!(spanning[1].role, PieceRole::Original);
}

#[test]
fn test_equal_indices_count_as_forward() {
    let bounds = ClipBounds::new(0.0, 100.0);
    let a = DataPoint3D::new("s", 3, 0.0, -10.0);
    let b = DataPoint3D::new("s", 3, 10.0, 50.0);
    let points = [a.clone(), b.clone()];
    let segment = StripSegment::new(&points[0], &points[1], &points, 0.0, 10.0);

    assert!(!segment.is_reversed());
    let pieces = clip_strip(a.position(), b.position(), bounds, segment.is_reversed());
    assert_eq!(pieces[0].role, PieceRole::Cut);
}

#[test]
fn test_series_of_strips_strokes_every_front_edge() {
    logging::init_for_tests();
    let matrix = Matrix3D::new(Rect::new(0.0, 0.0, 300.0, 200.0), 30.0, &SceneStyle::default());
    let points: Vec<DataPoint3D> = [120.0, 90.0, 140.0, 60.0]
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            DataPoint3D::new("revenue", i + 1, 30.0 + 80.0 * i as f32, y).with_color(Color::BLUE)
        })
        .collect();

    let mut surface = RecordingSurface::new();
    let mut regions = RecordingHotRegions::new();
    let mut context = StripRenderContext::new();
    let style = StripStyle::new(Color::BLUE);
    {
        let mut renderer =
            ChartRenderer3D::new(&mut surface, &matrix).with_hot_regions(&mut regions);
        let count = points.len() - 1;
        for i in 0..count {
            let segment_type = LineSegmentType::Single.split(i, count);
            let segment = StripSegment::new(&points[i], &points[i + 1], &points, 0.0, 30.0)
                .with_segment_type(segment_type);
            renderer.fill_strip(
                &mut context,
                &segment,
                &style,
                DrawingOperationTypes::DRAW_ELEMENT | DrawingOperationTypes::CALC_ELEMENT_PATH,
            );
        }
        context.flush(renderer.surface());
    }

    // One edge per strip while drawing, then the last one again on flush.
    assert_eq!(surface.count_fills(), 3);
    assert_eq!(surface.count_strokes(), 4);

    let stroked: Vec<Vec<Vec2>> = surface.strokes().map(|(path, _)| path.points()).collect();
    for pair in points.windows(2) {
        let edge = vec![
            matrix.project(pair[0].at_depth(30.0)),
            matrix.project(pair[1].at_depth(30.0)),
        ];
        assert!(
            stroked.contains(&edge),
            "front edge of strip {} -> {} was never stroked",
            pair[0].index,
            pair[1].index
        );
    }
    assert_eq!(stroked[3], stroked[2]);
    let owners: Vec<_> = regions.regions().iter().map(|r| r.owner.clone()).collect();
    assert_eq!(
        owners.last(),
        Some(&HotRegionOwner::DataPoint {
            series: "revenue".into(),
            point_index: 3
        })
    );
}

// ====================
// Pies
// ====================

#[test]
fn test_pie_slice_in_drawing_order() {
    logging::init_for_tests();
    let matrix = Matrix3D::new(Rect::new(0.0, 0.0, 300.0, 300.0), 30.0, &SceneStyle::default());
    let geometry =
        PieSliceGeometry::from_ellipse(Vec2::new(150.0, 150.0), 100.0, 30.0, 20.0, 30.0, 120.0, 0.0)
            .unwrap();
    let style = PieStyle::new(Color::RED).with_owner(HotRegionOwner::DataPoint {
        series: "share".into(),
        point_index: 2,
    });

    let mut surface = RecordingSurface::new();
    let mut regions = RecordingHotRegions::new();
    let mut renderer = ChartRenderer3D::new(&mut surface, &matrix).with_hot_regions(&mut regions);
    let ops = DrawingOperationTypes::DRAW_ELEMENT | DrawingOperationTypes::CALC_ELEMENT_PATH;

    renderer.fill_pie_face(&geometry, false, &style, ops);
    renderer.fill_pie_sides(&geometry, &style, ops);
    renderer.fill_pie_curve(&geometry, &style, ops);
    renderer.fill_pie_face(&geometry, true, &style, ops);

    // Bottom, no walls (30..150 hides both), one band, top.
    assert_eq!(surface.count_fills(), 3);
    assert!(regions.regions().iter().all(|r| r.owner == style.owner.clone().unwrap()));
}
