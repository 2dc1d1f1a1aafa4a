//! Path primitives.
//!
//! A path is a sequence of drawing commands. Renderers build them from
//! projected polygons, elliptical arcs and flattened splines, then hand them
//! to a [`DrawingSurface`](crate::DrawingSurface) or a hot-region collector.

use crate::Rect;
use glam::Vec2;

/// One drawing instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path.
    MoveTo(Vec2),
    /// Straight segment to a position.
    LineTo(Vec2),
    /// Cubic Bezier segment.
    CubicTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Line back to the start of the sub-path.
    Close,
}

/// Outline in surface pixels, possibly made of several sub-paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Vec2]) -> Self {
        let mut builder = PathBuilder::new();
        builder.polygon(points);
        builder.build()
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[Vec2]) -> Self {
        let mut builder = PathBuilder::new();
        builder.polyline(points);
        builder.build()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of sub-paths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .count()
    }

    /// End points of every command, control points excluded.
    pub fn points(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => Some(*to),
                PathCommand::CubicTo { to, .. } => Some(*to),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// Append every sub-path of `other`.
    pub fn append(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Bounding box of the path, control points included.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    min = min.min(*control1).min(*control2).min(*to);
                    max = max.max(*control1).max(*control2).max(*to);
                }
                PathCommand::Close => {}
            }
        }

        if min.is_finite() && max.is_finite() {
            Some(Rect::from_corners(min, max))
        } else {
            None
        }
    }
}

/// Incremental [`Path`] construction.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: Vec2,
    subpath_start: Vec2,
    in_subpath: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `to`.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self.in_subpath = true;
        self
    }

    /// Draw a line to a position, starting a sub-path if none is open.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        if !self.in_subpath {
            return self.move_to(to);
        }
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    pub fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) -> &mut Self {
        if !self.in_subpath {
            self.move_to(self.current_pos);
        }
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Close the open sub-path, if any.
    pub fn close(&mut self) -> &mut Self {
        if self.in_subpath {
            self.commands.push(PathCommand::Close);
            self.current_pos = self.subpath_start;
            self.in_subpath = false;
        }
        self
    }

    /// Add a closed polygon.
    pub fn polygon(&mut self, points: &[Vec2]) -> &mut Self {
        if points.is_empty() {
            return self;
        }
        self.polyline(points);
        self.close()
    }

    /// Add an open polyline as a new sub-path.
    pub fn polyline(&mut self, points: &[Vec2]) -> &mut Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        self.move_to(*first);
        for point in rest {
            self.line_to(*point);
        }
        self
    }

    /// Add a closed ellipse inscribed in `rect`.
    pub fn ellipse(&mut self, rect: Rect) -> &mut Self {
        self.end_subpath();
        self.arc(rect, 0.0, 360.0);
        self.close()
    }

    /// Add an elliptical arc inscribed in `rect`.
    ///
    /// Angles are in degrees, clockwise on screen from the +X axis, and name
    /// the direction of the ray from the center (not the ellipse parameter).
    /// If a sub-path is open the arc is joined to it with a straight line.
    pub fn arc(&mut self, rect: Rect, start_angle: f32, sweep_angle: f32) -> &mut Self {
        let center = rect.center();
        let radii = rect.size() * 0.5;

        let t_start = ray_to_parameter(start_angle.to_radians(), radii);
        let t_end_raw = ray_to_parameter((start_angle + sweep_angle).to_radians(), radii);
        // Unwrap so the parametric sweep follows the requested direction and turn count.
        let sweep = sweep_angle.to_radians();
        let mut t_sweep = t_end_raw - t_start;
        let turns = ((sweep - t_sweep) / std::f32::consts::TAU).round();
        t_sweep += turns * std::f32::consts::TAU;

        let start = ellipse_point(center, radii, t_start);
        if self.in_subpath {
            self.line_to(start);
        } else {
            self.move_to(start);
        }

        let segments = (t_sweep.abs() / std::f32::consts::FRAC_PI_2 - 1e-4)
            .ceil()
            .max(1.0) as usize;
        let step = t_sweep / segments as f32;
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let mut t = t_start;
        for _ in 0..segments {
            let t_next = t + step;
            let from = ellipse_point(center, radii, t);
            let to = ellipse_point(center, radii, t_next);
            let control1 = from + ellipse_derivative(radii, t) * k;
            let control2 = to - ellipse_derivative(radii, t_next) * k;
            self.cubic_to(control1, control2, to);
            t = t_next;
        }
        self
    }

    /// Add an axis-aligned rectangle.
    pub fn rect(&mut self, rect: Rect) -> &mut Self {
        self.polygon(&[
            rect.position(),
            Vec2::new(rect.right(), rect.y),
            Vec2::new(rect.right(), rect.bottom()),
            Vec2::new(rect.x, rect.bottom()),
        ])
    }

    /// Leave the current sub-path open and start fresh on the next command.
    pub fn end_subpath(&mut self) -> &mut Self {
        self.in_subpath = false;
        self
    }

    /// End point of the last command.
    pub fn current_pos(&self) -> Vec2 {
        self.current_pos
    }

    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}

/// Ellipse parameter of the point hit by a ray at `angle` radians.
fn ray_to_parameter(angle: f32, radii: Vec2) -> f32 {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return angle;
    }
    (angle.sin() / radii.y).atan2(angle.cos() / radii.x)
}

fn ellipse_point(center: Vec2, radii: Vec2, t: f32) -> Vec2 {
    center + Vec2::new(radii.x * t.cos(), radii.y * t.sin())
}

fn ellipse_derivative(radii: Vec2, t: f32) -> Vec2 {
    Vec2::new(-radii.x * t.sin(), radii.y * t.cos())
}

/// Point where a ray from the center at `angle_degrees` meets the ellipse in `rect`.
pub fn ellipse_point_at_angle(rect: Rect, angle_degrees: f32) -> Vec2 {
    let radii = rect.size() * 0.5;
    let t = ray_to_parameter(angle_degrees.to_radians(), radii);
    ellipse_point(rect.center(), radii, t)
}
