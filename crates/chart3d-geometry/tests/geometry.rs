//! Cross-module behaviour of the 2D geometry vocabulary.

use chart3d_geometry::*;

#[test]
fn test_closed_spline_flattens_to_closed_ring() {
    let ring = [
        Vec2::new(50.0, 0.0),
        Vec2::new(100.0, 25.0),
        Vec2::new(100.0, 75.0),
        Vec2::new(50.0, 100.0),
        Vec2::new(0.0, 75.0),
        Vec2::new(0.0, 25.0),
    ];
    let curves = cardinal_spline(&ring, 0.5, true);
    let flat = flatten_curves(&curves, DEFAULT_FLATTEN_TOLERANCE);

    assert_eq!(flat.first(), flat.last());
    let bounds = Rect::bounding(&flat).unwrap();
    assert!(bounds.width >= 100.0 - 1e-3);
    assert!(bounds.height >= 100.0 - 1e-3);
}

#[test]
fn test_widened_arc_contains_arc_points() {
    let rect = Rect::new(0.0, 0.0, 100.0, 60.0);
    let mut builder = PathBuilder::new();
    builder.arc(rect, 0.0, 90.0);
    let path = builder.build();

    let widened = widen(&path, 4.0).unwrap();
    let bounds = widened.bounds().unwrap().inflate(0.01, 0.01);

    for angle in [0.0, 30.0, 60.0, 90.0] {
        assert!(bounds.contains(ellipse_point_at_angle(rect, angle)));
    }
}

#[test]
fn test_style_drawn_fill_then_stroke() {
    struct Log(Vec<&'static str>);

    impl DrawingSurface for Log {
        fn fill_path(&mut self, _: &Path, _: &Paint) {
            self.0.push("fill");
        }
        fn stroke_path(&mut self, _: &Path, _: &Stroke) {
            self.0.push("stroke");
        }
        fn draw_marker(&mut self, _: Vec2, _: &Marker2D) {}
        fn anti_aliasing(&self) -> AntiAliasing {
            AntiAliasing::All
        }
        fn set_anti_aliasing(&mut self, _: AntiAliasing) {}
    }

    let mut log = Log(Vec::new());
    let path = Path::polygon(&[Vec2::ZERO, Vec2::X, Vec2::ONE]);
    log.draw_styled(
        &path,
        &Style::fill(Color::RED).with_stroke_color(Color::BLACK, 1.0),
    );
    log.draw_styled(&path, &Style::fill(Color::TRANSPARENT));

    assert_eq!(log.0, vec!["fill", "stroke"]);
}
