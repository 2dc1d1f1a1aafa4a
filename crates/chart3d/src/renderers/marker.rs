//! Markers at data points.
//!
//! Circles become shaded discs and squares become small cubes. Every other
//! shape, and any image marker, is drawn flat at the projected position.

use super::ChartRenderer3D;
use crate::{BoxStyle, DrawingOperationTypes, LightStyle, MarkerShadow, MarkerStyle3D};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{
    ChartElementKind, GradientStop, Marker2D, MarkerShape, Paint, Path, PathBuilder, Rect, Vec2,
    Vec3,
};

/// Highlight focus stays this far inside the disc.
const FOCUS_LIMIT: f32 = 0.8;

fn disc(center: Vec2, size: f32) -> Rect {
    Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
}

fn ellipse_path(rect: Rect) -> Path {
    let mut builder = PathBuilder::new();
    builder.ellipse(rect);
    builder.build()
}

impl ChartRenderer3D<'_> {
    /// Draw a marker centred on a model point.
    ///
    /// Returns `None` for [`MarkerShape::None`] and when no path is requested.
    pub fn draw_marker_3d(
        &mut self,
        position: Vec3,
        style: &MarkerStyle3D,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("draw_marker_3d");

        if style.shape == MarkerShape::None || style.size <= 0.0 {
            return None;
        }

        if style.shape == MarkerShape::Square && style.image.is_none() {
            let half = style.size / 2.0;
            let rect = Rect::new(position.x - half, position.y - half, style.size, style.size);
            let mut cube = BoxStyle::new(style.color).with_border(style.border.clone());
            cube.owner = style.owner.clone();
            return self.fill_3d_box(rect, position.z - half, style.size, &cube, ops);
        }

        let center = self.matrix.project(position);
        let rect = disc(center, style.size);

        if ops.draws() {
            if style.is_solid() {
                self.draw_disc(position, center, rect, style);
            } else {
                tracing::trace!(shape = ?style.shape, "flat marker fallback");
                let marker = Marker2D {
                    shape: style.shape,
                    size: style.size,
                    color: style.color,
                    border: style.border.resolve(style.color),
                    image: style.image.clone(),
                };
                self.surface.draw_marker(center, &marker);
            }
        }

        if !ops.calcs_path() {
            return None;
        }
        let path = ellipse_path(rect);
        self.register(&path, ChartElementKind::Marker, style.owner.as_ref());
        Some(path)
    }

    fn draw_disc(&mut self, position: Vec3, center: Vec2, rect: Rect, style: &MarkerStyle3D) {
        match style.shadow {
            MarkerShadow::None => {}
            MarkerShadow::Hard { offset, color } => {
                let shadow = disc(center + Vec2::splat(offset), style.size);
                self.surface.fill_path(&ellipse_path(shadow), &Paint::solid(color));
            }
            MarkerShadow::Soft { offset, color } => {
                let shadow = disc(center + Vec2::splat(offset), style.size * 1.2);
                let paint = Paint::radial_gradient(
                    shadow,
                    shadow.center(),
                    vec![
                        GradientStop::new(0.0, color),
                        GradientStop::new(1.0, color.with_alpha(0.0)),
                    ],
                );
                self.surface.fill_path(&ellipse_path(shadow), &paint);
            }
        }

        let paint = if self.matrix.light_style() == LightStyle::None {
            Paint::solid(style.color)
        } else {
            // Highlight where the point's +Z offset lands on screen.
            let lifted = self.matrix.project(position + Vec3::new(0.0, 0.0, style.size));
            let limit = style.size / 2.0 * FOCUS_LIMIT;
            let focus = center + (lifted - center).clamp_length_max(limit);
            Paint::radial_gradient(
                rect,
                focus,
                vec![
                    GradientStop::new(0.0, style.color.lighten(0.5)),
                    GradientStop::new(1.0, style.color.darken(0.3)),
                ],
            )
        };
        let path = ellipse_path(rect);
        let stroke = style.border.resolve(style.color);
        self.paint_path(&path, &paint, stroke.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Border, Matrix3D, SceneStyle};
    use chart3d_geometry::{Color, HotRegionOwner};
    use chart3d_test_utils::{DrawCall, RecordingHotRegions, RecordingSurface};

    fn matrix() -> Matrix3D {
        Matrix3D::new(Rect::new(0.0, 0.0, 200.0, 200.0), 40.0, &SceneStyle::default())
    }

    const AT: Vec3 = Vec3::new(100.0, 100.0, 20.0);

    #[test]
    fn test_none_shape_draws_nothing() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        let style = MarkerStyle3D::new(MarkerShape::None, 8.0, Color::RED);
        let path = renderer.draw_marker_3d(AT, &style, DrawingOperationTypes::all());

        assert!(path.is_none());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_flat_shapes_fall_back_to_2d_marker() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        let star = MarkerStyle3D::new(MarkerShape::Star5, 8.0, Color::RED);
        renderer.draw_marker_3d(AT, &star, DrawingOperationTypes::DRAW_ELEMENT);
        let image = MarkerStyle3D::new(MarkerShape::Circle, 8.0, Color::RED).with_image("pin.png");
        renderer.draw_marker_3d(AT, &image, DrawingOperationTypes::DRAW_ELEMENT);

        assert_eq!(surface.count_markers(), 2);
        assert_eq!(surface.count_fills(), 0);
        let DrawCall::Marker { center, .. } = &surface.calls()[0] else {
            panic!("expected a marker call");
        };
        assert_eq!(*center, matrix.project(AT));
    }

    #[test]
    fn test_disc_highlight_and_hard_shadow() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        let style = MarkerStyle3D::new(MarkerShape::Circle, 10.0, Color::BLUE)
            .with_border(Border::none())
            .with_shadow(MarkerShadow::Hard {
                offset: 2.0,
                color: Color::GRAY,
            });
        renderer.draw_marker_3d(AT, &style, DrawingOperationTypes::DRAW_ELEMENT);

        let fills: Vec<_> = surface.fills().map(|(_, paint)| paint.clone()).collect();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0], Paint::solid(Color::GRAY));
        let Paint::RadialGradient(gradient) = &fills[1] else {
            panic!("expected a radial gradient");
        };
        let center = matrix.project(AT);
        assert!(gradient.focus.distance(center) <= 4.0 + 1e-3);
        assert_eq!(surface.count_strokes(), 0);
    }

    #[test]
    fn test_square_marker_is_a_cube() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut regions = RecordingHotRegions::new();
        let owner = HotRegionOwner::DataPoint {
            series: "s".into(),
            point_index: 0,
        };
        let mut renderer =
            ChartRenderer3D::new(&mut surface, &matrix).with_hot_regions(&mut regions);

        let style = MarkerStyle3D::new(MarkerShape::Square, 10.0, Color::RED).with_owner(owner);
        let path = renderer.draw_marker_3d(AT, &style, DrawingOperationTypes::all());

        assert_eq!(surface.count_fills(), 3);
        assert_eq!(path.map(|p| p.subpath_count()), Some(3));
        assert_eq!(regions.regions()[0].kind, ChartElementKind::DataPoint);
    }

    #[test]
    fn test_disc_hit_region_is_a_marker() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut regions = RecordingHotRegions::new();
        let mut renderer =
            ChartRenderer3D::new(&mut surface, &matrix).with_hot_regions(&mut regions);

        let style = MarkerStyle3D::new(MarkerShape::Circle, 10.0, Color::RED).with_owner(
            HotRegionOwner::Element {
                name: "marker".into(),
            },
        );
        renderer.draw_marker_3d(AT, &style, DrawingOperationTypes::CALC_ELEMENT_PATH);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions.regions()[0].kind, ChartElementKind::Marker);
    }
}
