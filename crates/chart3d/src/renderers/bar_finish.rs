//! Finish overlays painted over the front face of a bar.

use super::ChartRenderer3D;
use crate::{BarDrawingStyle, BarOrientation, BoxStyle};
use chart3d_geometry::{Color, GradientStop, Paint, Path, Vec2};

const HIGHLIGHT_ALPHA: f32 = 0.4;
const SHADOW_ALPHA: f32 = 0.3;

/// Point inside the front quad at fractions `u` (left to right) and `v`
/// (top to bottom). Corners are top-left, top-right, bottom-right, bottom-left.
fn quad_point(quad: &[Vec2; 4], u: f32, v: f32) -> Vec2 {
    let top = quad[0].lerp(quad[1], u);
    let bottom = quad[3].lerp(quad[2], u);
    top.lerp(bottom, v)
}

/// Inset fractions for a bevel `size` pixels wide, capped at half the quad.
fn inset(quad: &[Vec2; 4], size: f32) -> (f32, f32) {
    let width = quad[0].distance(quad[1]);
    let height = quad[0].distance(quad[3]);
    let ku = if width > 0.0 { (size / width).min(0.5) } else { 0.0 };
    let kv = if height > 0.0 { (size / height).min(0.5) } else { 0.0 };
    (ku, kv)
}

impl ChartRenderer3D<'_> {
    /// Overlay for non-default bar styles, drawn on the projected front face.
    pub(super) fn draw_bar_finish(&mut self, front: [Vec2; 4], style: &BoxStyle) {
        let highlight = Color::WHITE.with_alpha(HIGHLIGHT_ALPHA);
        let shadow = Color::BLACK.with_alpha(SHADOW_ALPHA);

        match style.bar_style {
            BarDrawingStyle::Default | BarDrawingStyle::Cylinder => {}
            BarDrawingStyle::Wedge => {
                let width = front[0].distance(front[1]);
                let height = front[0].distance(front[3]);
                let (ku, kv) = inset(&front, width.min(height) / 2.0);
                let p = |u, v| quad_point(&front, u, v);
                let (light, dark) = match style.orientation {
                    BarOrientation::Vertical => (
                        [p(0.0, 0.0), p(ku, kv), p(ku, 1.0 - kv), p(0.0, 1.0)],
                        [p(1.0, 0.0), p(1.0, 1.0), p(1.0 - ku, 1.0 - kv), p(1.0 - ku, kv)],
                    ),
                    BarOrientation::Horizontal => (
                        [p(0.0, 0.0), p(1.0, 0.0), p(1.0 - ku, kv), p(ku, kv)],
                        [p(0.0, 1.0), p(ku, 1.0 - kv), p(1.0 - ku, 1.0 - kv), p(1.0, 1.0)],
                    ),
                };
                self.surface.fill_path(&Path::polygon(&light), &Paint::solid(highlight));
                self.surface.fill_path(&Path::polygon(&dark), &Paint::solid(shadow));
            }
            BarDrawingStyle::LightToDark => {
                let (start, end) = match style.orientation {
                    BarOrientation::Vertical => (
                        quad_point(&front, 0.0, 0.5),
                        quad_point(&front, 1.0, 0.5),
                    ),
                    BarOrientation::Horizontal => (
                        quad_point(&front, 0.5, 0.0),
                        quad_point(&front, 0.5, 1.0),
                    ),
                };
                let paint = Paint::linear_gradient(
                    start,
                    end,
                    vec![
                        GradientStop::new(0.0, highlight),
                        GradientStop::new(0.5, Color::TRANSPARENT),
                        GradientStop::new(1.0, shadow),
                    ],
                );
                self.surface.fill_path(&Path::polygon(&front), &paint);
            }
            BarDrawingStyle::Emboss => {
                let width = front[0].distance(front[1]);
                let height = front[0].distance(front[3]);
                let (ku, kv) = inset(&front, (width.min(height) * 0.1).clamp(1.0, 5.0));
                let p = |u, v| quad_point(&front, u, v);
                let inner = [p(ku, kv), p(1.0 - ku, kv), p(1.0 - ku, 1.0 - kv), p(ku, 1.0 - kv)];

                // Top and left bevels catch the light, bottom and right fall in shade.
                let bevels = [
                    ([front[0], front[1], inner[1], inner[0]], highlight),
                    ([front[0], inner[0], inner[3], front[3]], highlight),
                    ([front[3], inner[3], inner[2], front[2]], shadow),
                    ([front[1], front[2], inner[2], inner[1]], shadow),
                ];
                for (bevel, color) in bevels {
                    self.surface.fill_path(&Path::polygon(&bevel), &Paint::solid(color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        BarDrawingStyle, BoxStyle, ChartRenderer3D, DrawingOperationTypes, Matrix3D, SceneStyle,
    };
    use chart3d_geometry::{Color, Paint, Rect};
    use chart3d_test_utils::RecordingSurface;

    fn fills_for(bar_style: BarDrawingStyle) -> Vec<Paint> {
        let matrix = Matrix3D::new(Rect::new(0.0, 0.0, 200.0, 200.0), 40.0, &SceneStyle::default());
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
        renderer.fill_3d_box(
            Rect::new(40.0, 40.0, 40.0, 100.0),
            0.0,
            20.0,
            &BoxStyle::new(Color::BLUE).with_bar_style(bar_style),
            DrawingOperationTypes::DRAW_ELEMENT,
        );
        surface.fills().map(|(_, paint)| paint.clone()).collect()
    }

    #[test]
    fn test_wedge_adds_two_overlays() {
        assert_eq!(fills_for(BarDrawingStyle::Wedge).len(), 5);
    }

    #[test]
    fn test_light_to_dark_adds_gradient() {
        let fills = fills_for(BarDrawingStyle::LightToDark);
        assert_eq!(fills.len(), 4);
        assert!(matches!(fills[3], Paint::LinearGradient(_)));
    }

    #[test]
    fn test_emboss_adds_four_bevels() {
        let fills = fills_for(BarDrawingStyle::Emboss);
        assert_eq!(fills.len(), 7);
        assert!(fills[3..].iter().all(|paint| !paint.is_opaque()));
    }
}
