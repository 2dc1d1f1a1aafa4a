//! Line, spline and area strips.
//!
//! A strip joins two neighbouring data points with a ruled quad extruded in
//! Z. Flat ribbons (zero thickness) draw a single face; thick strips draw a
//! slanted prism whose end caps only appear where the strip really ends.

use super::{ChartRenderer3D, ClipBounds, ClipPiece, PieceRole, clip_strip};
use crate::{
    BOX_FACES, BoxCorners, DataPoint3D, DrawingOperationTypes, LineSegmentType, PendingEdge,
    StripBorderMode, StripRenderContext, StripStyle, SurfaceNames, ViewRange, face_corners,
    find_point_by_index, is_surface_visible,
};
use chart3d_core::profiling::profile_scope;
use chart3d_geometry::{
    ChartElementKind, Color, DEFAULT_FLATTEN_TOLERANCE, Paint, Path, PathBuilder, Stroke, Vec2,
    Vec3, cardinal_spline,
};

/// Width of the same-color outline hiding seams between opaque strips.
const SEAM_WIDTH: f32 = 1.0;

/// Two neighbouring points of one series and where their strip sits.
#[derive(Debug, Clone, Copy)]
pub struct StripSegment<'p> {
    pub first: &'p DataPoint3D,
    pub second: &'p DataPoint3D,
    /// Every point of the chart, searched for neighbours by index.
    pub points: &'p [DataPoint3D],
    /// Back of the strip.
    pub z: f32,
    pub depth: f32,
    pub segment_type: LineSegmentType,
    /// Horizontal extent of the axis scale; neighbours outside it are ignored.
    pub view_range: ViewRange,
}

impl<'p> StripSegment<'p> {
    pub fn new(
        first: &'p DataPoint3D,
        second: &'p DataPoint3D,
        points: &'p [DataPoint3D],
        z: f32,
        depth: f32,
    ) -> Self {
        Self {
            first,
            second,
            points,
            z,
            depth,
            segment_type: LineSegmentType::Middle,
            view_range: ViewRange::new(f32::NEG_INFINITY, f32::INFINITY),
        }
    }

    pub fn with_segment_type(mut self, segment_type: LineSegmentType) -> Self {
        self.segment_type = segment_type;
        self
    }

    pub fn with_view_range(mut self, view_range: ViewRange) -> Self {
        self.view_range = view_range;
        self
    }

    /// The points are given from the higher index to the lower one.
    ///
    /// Equal indices count as forward.
    pub fn is_reversed(&self) -> bool {
        self.first.index > self.second.index
    }

    /// The point owning the strip's hot region: the one with the higher index.
    fn owner_point(&self) -> &'p DataPoint3D {
        if self.is_reversed() { self.first } else { self.second }
    }

    fn ordered(&self) -> (&'p DataPoint3D, &'p DataPoint3D) {
        if self.is_reversed() {
            (self.second, self.first)
        } else {
            (self.first, self.second)
        }
    }

    fn neighbor(&self, point: &DataPoint3D, offset: isize) -> Option<Vec2> {
        let index = point.index.checked_add_signed(offset)?;
        find_point_by_index(self.points, index, &point.series).map(|(_, p)| p.position())
    }

    /// Centre line from the lower to the higher index.
    ///
    /// With a tension the segment is taken from a cardinal spline through
    /// the outer neighbours and flattened.
    fn centerline(&self, tension: f32) -> Vec<Vec2> {
        let (low, high) = self.ordered();
        let straight = vec![low.position(), high.position()];
        if tension <= 0.0 {
            return straight;
        }

        let before = self.neighbor(low, -1);
        let after = self.neighbor(high, 1);
        let mut controls = Vec::with_capacity(4);
        controls.extend(before);
        controls.push(low.position());
        controls.push(high.position());
        controls.extend(after);

        let curves = cardinal_spline(&controls, tension, false);
        match curves.get(usize::from(before.is_some())) {
            Some(curve) => {
                let line = curve.flatten(DEFAULT_FLATTEN_TOLERANCE);
                if line.len() >= 2 { line } else { straight }
            }
            None => straight,
        }
    }

    /// Index of the neighbour beyond the first (`at_first`) or second point,
    /// away from the other end. Follows the same direction as [`Self::is_reversed`].
    fn outer_index(&self, at_first: bool) -> Option<usize> {
        let (point, step_down) = if at_first {
            (self.first, !self.is_reversed())
        } else {
            (self.second, self.is_reversed())
        };
        if step_down {
            point.index.checked_sub(1)
        } else {
            point.index.checked_add(1)
        }
    }
}

/// Whether the side of `point` facing `neighbor_index` ends the strip.
///
/// True when there is no such neighbour, when it lies outside the view
/// range or when it has a different opaque color.
pub fn should_draw_line_chart_surface(
    points: &[DataPoint3D],
    point: &DataPoint3D,
    neighbor_index: Option<usize>,
    view_range: ViewRange,
) -> bool {
    let Some(index) = neighbor_index else {
        return true;
    };
    let Some((_, neighbor)) = find_point_by_index(points, index, &point.series) else {
        return true;
    };
    if !view_range.contains(neighbor.x_position) {
        return true;
    }
    neighbor.color != point.color && neighbor.color.is_opaque()
}

/// Which ends of a piece get caps and end borders, in drawing direction.
#[derive(Debug, Clone, Copy)]
struct PieceEnds {
    start_face: bool,
    end_face: bool,
    segment_type: LineSegmentType,
}

impl ChartRenderer3D<'_> {
    /// Draw the strip between two neighbouring points.
    ///
    /// `context` carries the pending front edge between consecutive strips
    /// of one series and must be flushed when the series is done. Returns
    /// the hit path of the visible part when `CALC_ELEMENT_PATH` is set;
    /// parts flattened onto a clip boundary are drawn but not hit-tested.
    pub fn fill_strip(
        &mut self,
        context: &mut StripRenderContext,
        segment: &StripSegment<'_>,
        style: &StripStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_strip");

        let reversed = segment.is_reversed();
        let line = segment.centerline(style.tension);
        let bounds = ClipBounds::from_plot(self.matrix.plot_area());

        let mut pairs: Vec<(Vec2, Vec2)> = line.windows(2).map(|w| (w[0], w[1])).collect();
        if reversed {
            pairs.reverse();
        }

        let mut pieces: Vec<ClipPiece> = Vec::new();
        for (a, b) in pairs {
            if style.clip {
                pieces.extend(clip_strip(a, b, bounds, reversed));
            } else {
                let (start, end) = if reversed { (b, a) } else { (a, b) };
                pieces.push(ClipPiece {
                    start,
                    end,
                    role: PieceRole::Original,
                });
            }
        }

        let start_cap = should_draw_line_chart_surface(
            segment.points,
            segment.first,
            segment.outer_index(true),
            segment.view_range,
        );
        let end_cap = should_draw_line_chart_surface(
            segment.points,
            segment.second,
            segment.outer_index(false),
            segment.view_range,
        );

        tracing::trace!(
            pieces = pieces.len(),
            reversed,
            start_cap,
            end_cap,
            "drawing strip"
        );

        let count = pieces.len();
        let mut builder = PathBuilder::new();
        for (i, piece) in pieces.iter().enumerate() {
            let ends = PieceEnds {
                start_face: i == 0 && start_cap,
                end_face: i + 1 == count && end_cap,
                segment_type: segment.segment_type.split(i, count),
            };
            let color = match piece.role {
                PieceRole::Original => style.color,
                PieceRole::Cut => style.cut_color(),
            };
            let outline = self.draw_strip_piece(context, piece, ends, color, segment, style, ops);
            if piece.role == PieceRole::Original {
                for face in outline {
                    builder.polygon(&face);
                }
            }
        }

        if !ops.calcs_path() {
            return None;
        }
        let path = builder.build();
        let owner = segment.owner_point().owner();
        self.register(&path, ChartElementKind::DataPoint, Some(&owner));
        Some(path)
    }

    /// Draw one clipped piece; returns the outlines of its visible faces.
    #[allow(clippy::too_many_arguments)]
    fn draw_strip_piece(
        &mut self,
        context: &mut StripRenderContext,
        piece: &ClipPiece,
        ends: PieceEnds,
        color: Color,
        segment: &StripSegment<'_>,
        style: &StripStyle,
        ops: DrawingOperationTypes,
    ) -> Vec<[Vec2; 4]> {
        let left_to_right = piece.start.x <= piece.end.x;
        let (a, b) = if left_to_right {
            (piece.start, piece.end)
        } else {
            (piece.end, piece.start)
        };
        let (left_face, right_face) = if left_to_right {
            (ends.start_face, ends.end_face)
        } else {
            (ends.end_face, ends.start_face)
        };
        let end_borders = if left_to_right {
            (ends.segment_type.has_start_cap(), ends.segment_type.has_end_cap())
        } else {
            (ends.segment_type.has_end_cap(), ends.segment_type.has_start_cap())
        };

        let half = style.thickness / 2.0;
        let corners = BoxCorners::prism(a, b, half, segment.z, segment.depth);
        let projected = corners.transformed(self.matrix);
        let visible = projected.visible_faces();

        let ribbon = half == 0.0;
        let (faces, shown) = if ribbon {
            let face = if visible.contains(SurfaceNames::BOTTOM) {
                SurfaceNames::BOTTOM
            } else {
                SurfaceNames::TOP
            };
            (face, face)
        } else {
            let mut faces = SurfaceNames::TOP
                | SurfaceNames::BOTTOM
                | SurfaceNames::FRONT
                | SurfaceNames::BACK;
            faces.set(SurfaceNames::LEFT, left_face);
            faces.set(SurfaceNames::RIGHT, right_face);
            (faces, faces & visible)
        };
        let seam_face = if ribbon { faces } else { SurfaceNames::FRONT };

        if ops.draws() {
            self.with_aligned_smoothing(|renderer| {
                if !color.is_opaque() {
                    for face in BOX_FACES {
                        if faces.contains(face) && !shown.contains(face) {
                            renderer.draw_strip_face(
                                &projected,
                                face,
                                false,
                                color,
                                style,
                                end_borders,
                            );
                        }
                    }
                }
                for face in BOX_FACES {
                    if shown.contains(face) {
                        renderer.draw_strip_face(
                            &projected,
                            face,
                            true,
                            color,
                            style,
                            end_borders,
                        );
                    }
                }

                let seam = style.border_mode == StripBorderMode::Default
                    && style.border.resolve(color).is_none()
                    && color.is_opaque();
                if seam {
                    let shade = renderer.matrix.polygon_light(
                        &projected.face(seam_face),
                        true,
                        color,
                        seam_face,
                        style.reverse_series_order,
                    );
                    let [c0, _, _, c3, ..] = *projected.corners();
                    let edge = PendingEdge {
                        start: c0.truncate(),
                        end: c3.truncate(),
                        stroke: Stroke::solid(shade, SEAM_WIDTH),
                    };
                    renderer.surface.draw_line(edge.start, edge.end, &edge.stroke);
                    if renderer.matrix.perspective() == 0.0 {
                        context.exchange(edge, &mut *renderer.surface);
                    }
                }
            });
        }

        BOX_FACES
            .iter()
            .filter(|&&face| shown.contains(face))
            .map(|&face| projected.face_2d(face))
            .collect()
    }

    fn draw_strip_face(
        &mut self,
        projected: &BoxCorners,
        face: SurfaceNames,
        visible: bool,
        color: Color,
        style: &StripStyle,
        end_borders: (bool, bool),
    ) {
        let shade = self.matrix.polygon_light(
            &projected.face(face),
            visible,
            color,
            face,
            style.reverse_series_order,
        );
        let outline = projected.face_2d(face);
        let path = Path::polygon(&outline);
        self.surface.fill_path(&path, &Paint::solid(shade));

        let Some(stroke) = style.border.resolve(shade) else {
            return;
        };
        if style.border_mode == StripBorderMode::Thick {
            self.surface.stroke_path(&path, &stroke);
            return;
        }

        let indices = face_corners(face);
        let on_left = |i: usize| matches!(i, 0 | 1 | 4 | 5);
        for k in 0..4 {
            let (i, j) = (indices[k], indices[(k + 1) % 4]);
            let draw = if on_left(i) != on_left(j) {
                true
            } else if style.border_mode == StripBorderMode::Thin {
                if on_left(i) { end_borders.0 } else { end_borders.1 }
            } else {
                false
            };
            if draw {
                self.surface.draw_line(outline[k], outline[(k + 1) % 4], &stroke);
            }
        }
    }

    /// Draw the vertical face of an area between a strip edge and the baseline.
    ///
    /// The face lies at depth `z`. It is skipped when it faces away and is
    /// opaque.
    pub fn fill_area_front(
        &mut self,
        first: &DataPoint3D,
        second: &DataPoint3D,
        baseline: f32,
        z: f32,
        style: &StripStyle,
        ops: DrawingOperationTypes,
    ) -> Option<Path> {
        profile_scope!("fill_area_front");

        let (left, right) = if first.x_position <= second.x_position {
            (first, second)
        } else {
            (second, first)
        };
        let mut corners = [
            left.at_depth(z),
            right.at_depth(z),
            Vec3::new(right.x_position, baseline, z),
            Vec3::new(left.x_position, baseline, z),
        ];
        self.matrix.transform_points(&mut corners);
        let outline = corners.map(|p| p.truncate());
        let visible = is_surface_visible(outline[0], outline[1], outline[2]);

        if ops.draws() && (visible || !style.color.is_opaque()) {
            let shade = self.matrix.polygon_light(
                &corners,
                visible,
                style.color,
                SurfaceNames::FRONT,
                style.reverse_series_order,
            );
            let path = Path::polygon(&outline);
            let stroke = style.border.resolve(shade);
            self.with_aligned_smoothing(|renderer| {
                renderer.paint_path(&path, &Paint::solid(shade), stroke.as_ref());
            });
        }

        if !ops.calcs_path() {
            return None;
        }
        let path = if visible { Path::polygon(&outline) } else { Path::new() };
        let owner = if first.index > second.index { first } else { second }.owner();
        self.register(&path, ChartElementKind::DataPoint, Some(&owner));
        Some(path)
    }
}
