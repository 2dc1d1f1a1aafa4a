//! Pie and doughnut slices.
//!
//! A slice is a wedge of a flat cylinder seen at an inclination: the top and
//! bottom faces are elliptical sectors, the outer (and for doughnuts inner)
//! band joins them, and two flat walls close the wedge at its start and end
//! angles. Angles are in degrees, clockwise on screen from +X, measured on
//! the unsquashed circle.

use super::ChartRenderer3D;
use crate::{DrawingOperationTypes, Error, LightStyle, PieStyle, Result, angle_correction};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{
    ChartElementKind, Color, GradientStop, Paint, Path, PathBuilder, Rect, Stroke, Vec2,
};

/// Projected key geometry of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSliceGeometry {
    /// Centre of the top face.
    pub center: Vec2,
    pub radius: f32,
    /// Height/width ratio of the projected ellipses.
    pub ratio: f32,
    /// Screen offset from the top face to the bottom face.
    pub thickness: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
    /// Inner radius as a share of the outer one; 0 for a pie.
    pub doughnut_ratio: f32,
    /// +1 when the viewer looks from above, -1 from below.
    pub tilt: f32,
}

impl PieSliceGeometry {
    /// Geometry of a slice of a pie lying flat, seen at `inclination` degrees.
    pub fn from_ellipse(
        center: Vec2,
        radius: f32,
        inclination: f32,
        thickness: f32,
        start_angle: f32,
        sweep_angle: f32,
        doughnut_ratio: f32,
    ) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::DegenerateGeometry("pie radius must be positive"));
        }
        if !(thickness.is_finite() && thickness >= 0.0) {
            return Err(Error::DegenerateGeometry("pie thickness must not be negative"));
        }
        if !(sweep_angle > 0.0 && sweep_angle <= 360.0) {
            return Err(Error::DegenerateGeometry("pie sweep must be in (0, 360]"));
        }
        if !(0.0..1.0).contains(&doughnut_ratio) {
            return Err(Error::DegenerateGeometry("doughnut ratio must be in [0, 1)"));
        }

        let inclination = inclination.to_radians();
        Ok(Self {
            center,
            radius,
            ratio: inclination.sin().abs(),
            thickness: thickness * inclination.cos(),
            start_angle,
            sweep_angle,
            doughnut_ratio,
            tilt: if inclination >= 0.0 { 1.0 } else { -1.0 },
        })
    }

    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    pub fn is_doughnut(&self) -> bool {
        self.doughnut_ratio > 0.0
    }

    pub fn viewer_above(&self) -> bool {
        self.tilt > 0.0
    }

    fn face_center(&self, top: bool) -> Vec2 {
        if top {
            self.center
        } else {
            self.center + Vec2::new(0.0, self.thickness)
        }
    }

    /// Bounding rectangle of the outer ellipse of the top or bottom face.
    pub fn outer_rect(&self, top: bool) -> Rect {
        self.ellipse_rect(top, self.radius)
    }

    /// Bounding rectangle of the inner ellipse, doughnuts only.
    pub fn inner_rect(&self, top: bool) -> Option<Rect> {
        self.is_doughnut()
            .then(|| self.ellipse_rect(top, self.radius * self.doughnut_ratio))
    }

    fn ellipse_rect(&self, top: bool, radius: f32) -> Rect {
        let center = self.face_center(top);
        let half = Vec2::new(radius, radius * self.ratio);
        Rect::from_corners(center - half, center + half)
    }

    /// Projected point at `angle` on the outer (or inner) edge.
    pub fn point(&self, angle: f32, top: bool, inner: bool) -> Vec2 {
        let radius = if inner {
            self.radius * self.doughnut_ratio
        } else {
            self.radius
        };
        let (sin, cos) = angle.to_radians().sin_cos();
        self.face_center(top) + Vec2::new(radius * cos, radius * self.ratio * sin)
    }

    /// Append an arc of the outer or inner ellipse between two slice angles.
    fn arc(&self, builder: &mut PathBuilder, rect: Rect, from: f32, to: f32) {
        let start = angle_correction(from, self.ratio);
        let end = angle_correction(to, self.ratio);
        builder.arc(rect, start, end - start);
    }

    /// Path of the band between top and bottom edge over `from`..`to`.
    fn band(&self, from: f32, to: f32, inner: bool) -> Path {
        let (top, bottom) = if inner {
            match (self.inner_rect(true), self.inner_rect(false)) {
                (Some(top), Some(bottom)) => (top, bottom),
                _ => return Path::new(),
            }
        } else {
            (self.outer_rect(true), self.outer_rect(false))
        };
        let mut builder = PathBuilder::new();
        self.arc(&mut builder, top, from, to);
        self.arc(&mut builder, bottom, to, from);
        builder.close();
        builder.build()
    }

    /// Flat wall of the wedge at `angle`.
    fn wall(&self, angle: f32) -> [Vec2; 4] {
        let inner = |top| {
            if self.is_doughnut() {
                self.point(angle, top, true)
            } else {
                self.face_center(top)
            }
        };
        [
            inner(true),
            self.point(angle, true, false),
            self.point(angle, false, false),
            inner(false),
        ]
    }
}

/// Parts of `start`..`start + sweep` on the half of the band facing the viewer.
///
/// Seen from above that is the lower half of the ellipse (0 to 180 degrees),
/// seen from below the upper half. Ranges are returned in increasing order.
pub fn front_curve_ranges(start: f32, sweep: f32, viewer_above: bool) -> Vec<(f32, f32)> {
    let base = if viewer_above { 0.0 } else { 180.0 };
    let end = start + sweep;
    (-1..=2)
        .filter_map(|k| {
            let lo = base + 360.0 * k as f32;
            let from = start.max(lo);
            let to = end.min(lo + 180.0);
            (from < to).then_some((from, to))
        })
        .collect()
}

impl ChartRenderer3D<'_> {
    /// Draw the top or bottom face of a slice.
    pub fn fill_pie_face(
        &mut self,
        geometry: &PieSliceGeometry,
        top: bool,
        style: &PieStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_pie_face");

        let (start, end) = (geometry.start_angle, geometry.end_angle());
        let mut builder = PathBuilder::new();
        match geometry.inner_rect(top) {
            Some(inner) => {
                geometry.arc(&mut builder, geometry.outer_rect(top), start, end);
                geometry.arc(&mut builder, inner, end, start);
            }
            None => {
                builder.move_to(geometry.face_center(top));
                geometry.arc(&mut builder, geometry.outer_rect(top), start, end);
            }
        }
        builder.close();
        let path = builder.build();

        if ops.draws() {
            let shades = self.matrix.face_colors(style.color);
            let color = if top { shades.top } else { shades.bottom };
            let stroke = style.border.resolve(color);
            self.paint_path(&path, &Paint::solid(color), stroke.as_ref());
        }

        self.finish_pie_path(path, style, ops)
    }

    /// Draw the curved bands of a slice that face the viewer.
    ///
    /// Doughnuts also show the far half of their inner band through the hole;
    /// it is drawn first.
    pub fn fill_pie_curve(
        &mut self,
        geometry: &PieSliceGeometry,
        style: &PieStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_pie_curve");

        let (start, sweep) = (geometry.start_angle, geometry.sweep_angle);
        let mut bands: Vec<Path> = Vec::new();
        if geometry.is_doughnut() {
            for (from, to) in front_curve_ranges(start, sweep, !geometry.viewer_above()) {
                bands.push(geometry.band(from, to, true));
            }
        }
        for (from, to) in front_curve_ranges(start, sweep, geometry.viewer_above()) {
            bands.push(geometry.band(from, to, false));
        }

        tracing::trace!(bands = bands.len(), start, sweep, "drawing pie curve");

        if ops.draws() {
            let front = self.matrix.face_colors(style.color).front;
            let paint = self.band_paint(geometry, front);
            let stroke = style.border.resolve(front);
            for band in &bands {
                self.paint_path(band, &paint, stroke.as_ref());
            }
        }

        let mut path = Path::new();
        for band in &bands {
            path.append(band);
        }
        self.finish_pie_path(path, style, ops)
    }

    /// Draw the flat walls at the slice's start and end angles that face the viewer.
    pub fn fill_pie_sides(
        &mut self,
        geometry: &PieSliceGeometry,
        style: &PieStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_pie_sides");

        let start = geometry.start_angle.to_radians().cos();
        let end = geometry.end_angle().to_radians().cos();
        let closed = geometry.sweep_angle >= 360.0 || geometry.thickness == 0.0;
        let (start_visible, end_visible) = match (closed, geometry.viewer_above()) {
            (true, _) => (false, false),
            (false, true) => (start < 0.0, end > 0.0),
            (false, false) => (start > 0.0, end < 0.0),
        };

        let shades = self.matrix.face_colors(style.color);
        let walls = [
            (start_visible, geometry.start_angle, shades.left),
            (end_visible, geometry.end_angle(), shades.right),
        ];

        let mut builder = PathBuilder::new();
        for (visible, angle, color) in walls {
            if !visible {
                continue;
            }
            let wall = geometry.wall(angle);
            if ops.draws() {
                let path = Path::polygon(&wall);
                let stroke = style.border.resolve(color);
                self.paint_path(&path, &Paint::solid(color), stroke.as_ref());
            }
            builder.polygon(&wall);
        }

        self.finish_pie_path(builder.build(), style, ops)
    }

    /// Outline the viewer-facing part of the outer band.
    pub fn draw_pie_curve_outline(&mut self, geometry: &PieSliceGeometry, stroke: &Stroke) {
        if !stroke.is_visible() {
            return;
        }
        let ranges = front_curve_ranges(
            geometry.start_angle,
            geometry.sweep_angle,
            geometry.viewer_above(),
        );
        for (from, to) in ranges {
            let band = geometry.band(from, to, false);
            self.surface.stroke_path(&band, stroke);
        }
    }

    /// Horizontal shading across the band, lighter left of centre.
    fn band_paint(&self, geometry: &PieSliceGeometry, front: Color) -> Paint {
        if self.matrix.light_style() == LightStyle::None {
            return Paint::solid(front);
        }
        let rect = geometry.outer_rect(true);
        let y = rect.center().y;
        Paint::linear_gradient(
            Vec2::new(rect.x, y),
            Vec2::new(rect.right(), y),
            vec![
                GradientStop::new(0.0, front.darken(0.1)),
                GradientStop::new(0.3, front.lighten(0.2)),
                GradientStop::new(1.0, front.darken(0.4)),
            ],
        )
    }

    fn finish_pie_path(
        &mut self,
        path: Path,
        style: &PieStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        if !ops.calcs_path() {
            return None;
        }
        let owner = style.hot_region_owner();
        self.register(&path, ChartElementKind::DataPoint, owner.as_ref());
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectedSlice, Matrix3D, SceneStyle};
    use chart3d_geometry::HotRegionOwner;
    use chart3d_test_utils::{RecordingHotRegions, RecordingSurface};

    fn matrix() -> Matrix3D {
        Matrix3D::new(Rect::new(0.0, 0.0, 300.0, 300.0), 40.0, &SceneStyle::default())
    }

    fn slice(start: f32, sweep: f32) -> PieSliceGeometry {
        let center = Vec2::new(150.0, 150.0);
        PieSliceGeometry::from_ellipse(center, 100.0, 30.0, 20.0, start, sweep, 0.0).unwrap()
    }

    #[test]
    fn test_geometry_rejects_degenerate_input() {
        let center = Vec2::ZERO;
        assert!(PieSliceGeometry::from_ellipse(center, 0.0, 30.0, 10.0, 0.0, 90.0, 0.0).is_err());
        assert!(PieSliceGeometry::from_ellipse(center, 10.0, 30.0, 10.0, 0.0, 0.0, 0.0).is_err());
        assert!(PieSliceGeometry::from_ellipse(center, 10.0, 30.0, 10.0, 0.0, 90.0, 1.0).is_err());
        assert!(PieSliceGeometry::from_ellipse(center, 10.0, 30.0, -1.0, 0.0, 90.0, 0.0).is_err());
    }

    #[test]
    fn test_geometry_squashes_ellipse() {
        let geometry = slice(0.0, 90.0);
        let rect = geometry.outer_rect(true);
        assert!((rect.height - 100.0).abs() < 1e-3);
        assert!((rect.width - 200.0).abs() < 1e-3);
        assert!(geometry.outer_rect(false).y > rect.y);
        assert!((geometry.point(90.0, true, false).y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_front_curve_ranges() {
        assert_eq!(front_curve_ranges(0.0, 90.0, true), vec![(0.0, 90.0)]);
        assert_eq!(front_curve_ranges(-45.0, 90.0, true), vec![(0.0, 45.0)]);
        assert!(front_curve_ranges(200.0, 100.0, true).is_empty());
        assert_eq!(front_curve_ranges(200.0, 100.0, false), vec![(200.0, 300.0)]);
        assert_eq!(front_curve_ranges(270.0, 180.0, true), vec![(360.0, 450.0)]);
        assert_eq!(
            front_curve_ranges(90.0, 360.0, true),
            vec![(90.0, 180.0), (360.0, 450.0)]
        );
    }

    #[test]
    fn test_side_walls_face_viewer() {
        let matrix = matrix();
        let style = PieStyle::new(Color::RED);

        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
        renderer.fill_pie_sides(&slice(200.0, 100.0), &style, DrawingOperationTypes::DRAW_ELEMENT);
        assert_eq!(surface.count_fills(), 2);

        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
        renderer.fill_pie_sides(&slice(10.0, 50.0), &style, DrawingOperationTypes::DRAW_ELEMENT);
        assert_eq!(surface.count_fills(), 1);

        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
        renderer.fill_pie_sides(&slice(0.0, 360.0), &style, DrawingOperationTypes::DRAW_ELEMENT);
        assert_eq!(surface.count_fills(), 0);
    }

    #[test]
    fn test_top_face_uses_top_shade() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        renderer.fill_pie_face(
            &slice(0.0, 120.0),
            true,
            &PieStyle::new(Color::RED),
            DrawingOperationTypes::DRAW_ELEMENT,
        );

        assert_eq!(surface.fill_colors(), vec![matrix.face_colors(Color::RED).top]);
    }

    #[test]
    fn test_doughnut_curve_includes_inner_band() {
        let matrix = matrix();
        let geometry = PieSliceGeometry::from_ellipse(
            Vec2::new(150.0, 150.0),
            100.0,
            30.0,
            20.0,
            0.0,
            270.0,
            0.5,
        )
        .unwrap();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        let path = renderer
            .fill_pie_curve(
                &geometry,
                &PieStyle::new(Color::RED),
                DrawingOperationTypes::DRAW_ELEMENT | DrawingOperationTypes::CALC_ELEMENT_PATH,
            )
            .unwrap();

        // Inner band 180..270, outer band 0..180.
        assert_eq!(surface.count_fills(), 2);
        assert_eq!(path.subpath_count(), 2);
    }

    #[test]
    fn test_collected_slice_registers_tooltip() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut regions = RecordingHotRegions::new();
        let style = PieStyle::new(Color::RED).with_collected(CollectedSlice {
            tooltip: "#LABEL: #VALY (#PERCENT)".into(),
            value: 42.0,
            percent: 0.125,
            label: "Other".into(),
            series_name: "sales".into(),
        });
        let mut renderer =
            ChartRenderer3D::new(&mut surface, &matrix).with_hot_regions(&mut regions);

        renderer.fill_pie_face(
            &slice(0.0, 45.0),
            true,
            &style,
            DrawingOperationTypes::CALC_ELEMENT_PATH,
        );

        assert_eq!(
            regions.regions()[0].owner,
            HotRegionOwner::Tooltip {
                text: "Other: 42 (12.50%)".into()
            }
        );
    }

    #[test]
    fn test_curve_outline_strokes_each_front_range() {
        let matrix = matrix();
        let mut surface = RecordingSurface::new();
        let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);

        renderer.draw_pie_curve_outline(&slice(90.0, 360.0), &Stroke::solid(Color::BLACK, 1.0));

        assert_eq!(surface.count_strokes(), 2);
    }
}
