//! Axis furniture: 3D lines and the chart walls.

use super::ChartRenderer3D;
use crate::{BoxCorners, BoxStyle, DrawingOperationTypes};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{ChartElementKind, HotRegionOwner, Path, Rect, Stroke, Vec3, widen};

/// One of the walls framing the plot cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// Behind the data, at Z = 0.
    Back,
    /// Below the plot area.
    Floor,
    Left,
    Right,
}

impl WallKind {
    fn element_kind(self) -> ChartElementKind {
        match self {
            Self::Back => ChartElementKind::BackWall,
            Self::Floor => ChartElementKind::Floor,
            Self::Left | Self::Right => ChartElementKind::SideWall,
        }
    }
}

impl ChartRenderer3D<'_> {
    /// Draw a straight line between two model points.
    ///
    /// The hit path is the line widened to the stroke width. When widening
    /// fails the bare line is registered instead.
    pub fn draw_line_3d(
        &mut self,
        start: Vec3,
        end: Vec3,
        stroke: &Stroke,
        kind: ChartElementKind,
        owner: Option<&HotRegionOwner>,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("draw_line_3d");

        let from = self.matrix.project(start);
        let to = self.matrix.project(end);

        if ops.draws() && stroke.is_visible() {
            self.surface.draw_line(from, to, stroke);
        }

        if !ops.calcs_path() {
            return None;
        }
        let line = Path::polyline(&[from, to]);
        let path = match widen(&line, stroke.width) {
            Ok(widened) => widened,
            Err(err) => {
                tracing::trace!(%err, "widening line hit path failed, using bare line");
                line
            }
        };
        self.register(&path, kind, owner);
        Some(path)
    }

    /// Draw one wall of the plot cube as a flat box `thickness` thick.
    pub fn fill_wall(
        &mut self,
        wall: WallKind,
        thickness: f32,
        style: &BoxStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_wall");

        let plot = self.matrix.plot_area();
        let depth = self.matrix.depth();
        let (rect, z, wall_depth) = match wall {
            WallKind::Back => (plot, -thickness, thickness),
            WallKind::Floor => (
                Rect::new(plot.x, plot.bottom(), plot.width, thickness),
                0.0,
                depth,
            ),
            WallKind::Left => (
                Rect::new(plot.x - thickness, plot.y, thickness, plot.height),
                0.0,
                depth,
            ),
            WallKind::Right => (
                Rect::new(plot.right(), plot.y, thickness, plot.height),
                0.0,
                depth,
            ),
        };

        tracing::debug!(?wall, ?rect, z, wall_depth, "drawing wall");

        let visible = self.matrix.box_visible_surfaces(rect, z, wall_depth);
        let corners = BoxCorners::new(rect, z, wall_depth);
        self.draw_box(corners, visible, style, wall.element_kind(), ops)
    }
}
