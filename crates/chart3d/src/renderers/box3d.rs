//! Box (bar, cube) renderer.

use super::ChartRenderer3D;
use crate::{
    BOX_FACES, BarDrawingStyle, BarOrientation, BoxCorners, BoxStyle, CylinderCapCache,
    DrawingOperationTypes, FaceShades, Result, SurfaceNames,
};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{ChartElementKind, Paint, Path, PathBuilder, Rect, Vec3};

impl ChartRenderer3D<'_> {
    /// Draw an axis-aligned box: `rect` in X/Y, back face at `z`, `depth` deep.
    ///
    /// Returns the hit path (visible faces) when `CALC_ELEMENT_PATH` is set.
    /// The cylinder bar style takes the cylinder path instead.
    pub fn fill_3d_box(
        &mut self,
        rect: Rect,
        z: f32,
        depth: f32,
        style: &BoxStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_3d_box");

        if style.bar_style == BarDrawingStyle::Cylinder {
            let mut cache = CylinderCapCache::new();
            return self.fill_cylinder(&mut cache, rect, z, depth, style, ops);
        }

        let visible = self.matrix.box_visible_surfaces(rect, z, depth);
        let corners = BoxCorners::new(rect, z, depth);
        self.draw_box(corners, visible, style, ChartElementKind::DataPoint, ops)
    }

    /// Draw a box from eight model-space corners in box layout.
    ///
    /// Fails unless exactly eight corners are given.
    pub fn fill_box_from_corners(
        &mut self,
        corners: &[Vec3],
        style: &BoxStyle,
        ops: DrawingOperationTypes,
    ) -> Result<Option<Path>> {
        profile_scope!("fill_box_from_corners");

        let corners = BoxCorners::from_slice(corners)?;
        let visible = if self.matrix.perspective() == 0.0 {
            self.matrix.visible_surfaces()
        } else {
            corners.transformed(self.matrix).visible_faces()
        };
        Ok(self.draw_box(corners, visible, style, ChartElementKind::DataPoint, ops))
    }

    /// Paint a box in two passes and register its hit path as `kind`.
    pub(super) fn draw_box(
        &mut self,
        corners: BoxCorners,
        visible: SurfaceNames,
        style: &BoxStyle,
        kind: ChartElementKind,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        let projected = corners.transformed(self.matrix);
        let drawable = SurfaceNames::all() - corners.degenerate_faces();
        let shades = self.box_shades(style);

        tracing::trace!(?visible, ?drawable, "drawing box");

        if ops.draws() {
            self.with_aligned_smoothing(|renderer| {
                // Hidden faces only show through translucent fills.
                if !style.color.is_opaque() {
                    for face in BOX_FACES {
                        if drawable.contains(face) && !visible.contains(face) {
                            renderer.draw_box_face(&projected, face, &shades, style);
                        }
                    }
                }
                for face in BOX_FACES {
                    if drawable.contains(face) && visible.contains(face) {
                        renderer.draw_box_face(&projected, face, &shades, style);
                        if face == SurfaceNames::FRONT {
                            renderer.draw_bar_finish(projected.face_2d(face), style);
                        }
                    }
                }
            });
        }

        if !ops.calcs_path() {
            return None;
        }
        let mut builder = PathBuilder::new();
        for face in BOX_FACES {
            if drawable.contains(face) && visible.contains(face) {
                builder.polygon(&projected.face_2d(face));
            }
        }
        let path = builder.build();
        self.register(&path, kind, style.owner.as_ref());
        Some(path)
    }

    /// Face colors with the side darkening of the bar direction applied.
    pub(super) fn box_shades(&self, style: &BoxStyle) -> FaceShades {
        let mut shades = self.matrix.face_colors(style.color);
        if style.side_darkening > 0.0 {
            let sides = match style.orientation {
                BarOrientation::Vertical => SurfaceNames::TOP | SurfaceNames::BOTTOM,
                BarOrientation::Horizontal => SurfaceNames::LEFT | SurfaceNames::RIGHT,
            };
            shades.darken(sides, style.side_darkening);
        }
        shades
    }

    fn draw_box_face(
        &mut self,
        projected: &BoxCorners,
        face: SurfaceNames,
        shades: &FaceShades,
        style: &BoxStyle,
    ) {
        let color = shades.get(face);
        let path = Path::polygon(&projected.face_2d(face));
        let stroke = style.border.resolve(color);
        self.paint_path(&path, &Paint::solid(color), stroke.as_ref());
    }
}
