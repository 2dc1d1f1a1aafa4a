//! Cylinder bars.
//!
//! The bar is approximated by two elliptical caps. Each cap starts as six
//! points around the bar axis, is projected, then smoothed into a closed
//! spline and flattened. The body is the region between the two caps,
//! bounded by their outer common tangents.

use super::ChartRenderer3D;
use crate::tangent::arc_through_start;
use crate::{
    BarOrientation, BoxStyle, CapTangents, CylinderCapCache, DrawingOperationTypes, LightStyle,
    SurfaceNames, find_cap_tangents,
};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{
    ChartElementKind, Color, DEFAULT_FLATTEN_TOLERANCE, GradientStop, Paint, Path, PathBuilder,
    Rect, Vec2, Vec3, cardinal_spline, flatten_curves,
};

/// Spline tension turning six points into a close ellipse approximation.
const CAP_TENSION: f32 = 0.618;
const CAP_POINTS: usize = 6;

/// Which cap's arc [`add_ellipse_segment`] appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapSide {
    Near,
    Far,
}

/// Append the viewer-facing arc of one cap to `builder`.
///
/// The tangent search runs once per cylinder; the second cap reuses the
/// cached result.
fn add_ellipse_segment(
    builder: &mut PathBuilder,
    cache: &mut CylinderCapCache,
    near: &[Vec2],
    far: &[Vec2],
    vertical: bool,
    side: CapSide,
) -> CapTangents {
    let tangents = cache.get_or_compute(near, far, || find_cap_tangents(near, far, vertical));
    let arc = match side {
        CapSide::Near => arc_through_start(near, tangents.near.0, tangents.near.1),
        CapSide::Far => arc_through_start(far, tangents.far.1, tangents.far.0),
    };
    for point in arc {
        builder.line_to(point);
    }
    tangents
}

fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

impl ChartRenderer3D<'_> {
    /// Draw a bar as a cylinder inscribed in the box `rect` x [`z`, `z + depth`].
    ///
    /// Vertical bars stand on their top and bottom caps, horizontal bars on
    /// their left and right caps. The body always counts as visible.
    pub fn fill_cylinder(
        &mut self,
        cache: &mut CylinderCapCache,
        rect: Rect,
        z: f32,
        depth: f32,
        style: &BoxStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_cylinder");

        let mut visible = self.matrix.box_visible_surfaces(rect, z, depth);
        visible |= SurfaceNames::FRONT;

        let (first_face, second_face) = match style.orientation {
            BarOrientation::Vertical => (SurfaceNames::TOP, SurfaceNames::BOTTOM),
            BarOrientation::Horizontal => (SurfaceNames::LEFT, SurfaceNames::RIGHT),
        };
        let first_cap = self.cap_outline(rect, z, depth, style.orientation, first_face);
        let second_cap = self.cap_outline(rect, z, depth, style.orientation, second_face);

        // The cap facing the viewer is drawn last, over the body.
        let (near_face, near, far_face, far) = if visible.contains(first_face) {
            (first_face, first_cap, second_face, second_cap)
        } else {
            (second_face, second_cap, first_face, first_cap)
        };

        let axis = centroid(&far) - centroid(&near);
        let vertical = axis.x.abs() <= 1e-4 * axis.length();

        let mut builder = PathBuilder::new();
        let tangents =
            add_ellipse_segment(&mut builder, cache, &near, &far, vertical, CapSide::Near);
        add_ellipse_segment(&mut builder, cache, &near, &far, vertical, CapSide::Far);
        builder.close();
        let body = builder.build();

        tracing::trace!(?tangents, vertical, ?near_face, "drawing cylinder");

        let shades = self.box_shades(style);
        if ops.draws() {
            if !style.color.is_opaque() {
                self.draw_cap(&far, shades.get(far_face), style);
            }

            let front = shades.get(SurfaceNames::FRONT);
            let paint = self.body_paint(front, &near, &far, tangents);
            let stroke = style.border.resolve(front);
            self.paint_path(&body, &paint, stroke.as_ref());

            if visible.contains(near_face) {
                self.draw_cap(&near, shades.get(near_face), style);
            }
        }

        if !ops.calcs_path() {
            return None;
        }
        let mut path = body;
        if visible.contains(near_face) {
            path.append(&Path::polygon(&near));
        }
        self.register(&path, ChartElementKind::DataPoint, style.owner.as_ref());
        Some(path)
    }

    /// Projected, flattened outline of the cap on `face`.
    fn cap_outline(
        &self,
        rect: Rect,
        z: f32,
        depth: f32,
        orientation: BarOrientation,
        face: SurfaceNames,
    ) -> Vec<Vec2> {
        let center = rect.center();
        let mid_z = z + depth / 2.0;
        let radius_z = depth / 2.0;

        let points: Vec<Vec2> = (0..CAP_POINTS)
            .map(|k| {
                let angle = (360.0 / CAP_POINTS as f32 * k as f32).to_radians();
                let (sin, cos) = angle.sin_cos();
                let zk = mid_z + radius_z * cos;
                let point = match orientation {
                    BarOrientation::Vertical => {
                        let y = if face == SurfaceNames::TOP { rect.y } else { rect.bottom() };
                        Vec3::new(center.x + rect.width / 2.0 * sin, y, zk)
                    }
                    BarOrientation::Horizontal => {
                        let x = if face == SurfaceNames::LEFT { rect.x } else { rect.right() };
                        Vec3::new(x, center.y + rect.height / 2.0 * sin, zk)
                    }
                };
                self.matrix.project(point)
            })
            .collect();

        let curves = cardinal_spline(&points, CAP_TENSION, true);
        let mut ring = flatten_curves(&curves, DEFAULT_FLATTEN_TOLERANCE);
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        ring
    }

    /// Gradient across the body between the two tangent lines.
    fn body_paint(
        &self,
        front: Color,
        near: &[Vec2],
        far: &[Vec2],
        tangents: CapTangents,
    ) -> Paint {
        if self.matrix.light_style() == LightStyle::None {
            return Paint::solid(front);
        }
        let (Some(&n0), Some(&n1), Some(&f0), Some(&f1)) = (
            near.get(tangents.near.0),
            near.get(tangents.near.1),
            far.get(tangents.far.0),
            far.get(tangents.far.1),
        ) else {
            return Paint::solid(front);
        };
        Paint::linear_gradient(
            (n0 + f0) / 2.0,
            (n1 + f1) / 2.0,
            vec![
                GradientStop::new(0.0, front.darken(0.2)),
                GradientStop::new(0.35, front.lighten(0.15)),
                GradientStop::new(1.0, front.darken(0.45)),
            ],
        )
    }

    fn draw_cap(&mut self, ring: &[Vec2], color: Color, style: &BoxStyle) {
        let path = Path::polygon(ring);
        let stroke = style.border.resolve(color);
        self.paint_path(&path, &Paint::solid(color), stroke.as_ref());
    }
}
