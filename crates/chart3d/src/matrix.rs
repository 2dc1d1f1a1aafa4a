//! Projection of model-space points onto the drawing surface.
//!
//! Model space is the plot rectangle in pixels (X right, Y down) extruded
//! along Z toward the viewer: the back wall sits at Z = 0 and the front of
//! the scene at Z = depth. The projection rotates about the centre of that
//! cube, optionally rolls the scene, scales it back into the plot area and
//! finally applies perspective foreshortening.

use crate::{LightStyle, SceneStyle};
use chart3d_geometry::{Rect, Vec2, Vec3};
use glam::Mat3;

/// Rotation, scaling and perspective of one chart area.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix3D {
    angle_x: f32,
    angle_y: f32,
    scene_roll: f32,
    perspective: f32,
    light_style: LightStyle,
    right_angle_axes: bool,
    plot_area: Rect,
    depth: f32,
    center: Vec3,
    /// Model to view rotation (Y, then X, then roll).
    rotation: Mat3,
    scale: f32,
    /// Z of the nearest projected plot-cube corner, relative to the centre.
    z_near: f32,
    /// Z extent of the projected plot cube.
    view_depth: f32,
}

impl Matrix3D {
    /// Build the projection for a plot rectangle and scene depth.
    pub fn new(plot_area: Rect, depth: f32, style: &SceneStyle) -> Self {
        let angle_x = style.inclination.clamp(-90.0, 90.0);
        let angle_y = fold_rotation(style.rotation.clamp(-180.0, 180.0));
        let center = Vec3::new(
            plot_area.x + plot_area.width / 2.0,
            plot_area.y + plot_area.height / 2.0,
            depth / 2.0,
        );

        let rotation = Mat3::from_rotation_z(style.scene_roll.to_radians())
            * Mat3::from_rotation_x(-angle_x.to_radians())
            * Mat3::from_rotation_y(-angle_y.to_radians());

        let mut matrix = Self {
            angle_x,
            angle_y,
            scene_roll: style.scene_roll,
            perspective: style.perspective.clamp(0.0, 1.0),
            light_style: style.light_style,
            right_angle_axes: style.right_angle_axes,
            plot_area,
            depth,
            center,
            rotation,
            scale: 1.0,
            z_near: 0.0,
            view_depth: 0.0,
        };

        let cube: Vec<Vec3> = matrix.plot_cube().iter().map(|&p| matrix.rotate(p)).collect();
        if style.fit_to_area {
            matrix.scale = fit_scale(&cube, plot_area);
        }
        let (z_min, z_max) = cube
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| (lo.min(p.z), hi.max(p.z)));
        matrix.z_near = z_max * matrix.scale;
        matrix.view_depth = (z_max - z_min) * matrix.scale;

        tracing::debug!(
            angle_x,
            angle_y,
            perspective = matrix.perspective,
            scale = matrix.scale,
            "3D matrix initialised"
        );
        matrix
    }

    /// Project a point. X and Y are surface pixels; Z keeps the view depth.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let mut p = self.rotate(point) * self.scale;
        if self.perspective > 0.0 && self.view_depth > f32::EPSILON {
            let factor = 1.0 / (1.0 + self.perspective * (self.z_near - p.z) / self.view_depth);
            p.x *= factor;
            p.y *= factor;
        }
        p + self.center
    }

    /// Project points in place.
    pub fn transform_points(&self, points: &mut [Vec3]) {
        for point in points.iter_mut() {
            *point = self.transform_point(*point);
        }
    }

    /// Projected 2D position of a point.
    pub fn project(&self, point: Vec3) -> Vec2 {
        self.transform_point(point).truncate()
    }

    /// Model-space point for a projected one. Only defined without perspective.
    pub fn inverse_transform_point(&self, point: Vec3) -> Option<Vec3> {
        if self.perspective > 0.0 || self.scale.abs() <= f32::EPSILON {
            return None;
        }
        let q = (point - self.center) / self.scale;
        let p = if self.right_angle_axes {
            let (sin_x, sin_y) = self.oblique_factors();
            Vec3::new(q.x + q.z * sin_y, q.y - q.z * sin_x, q.z)
        } else {
            self.rotation.transpose() * q
        };
        Some(p + self.center)
    }

    /// Rotation (or oblique shear) relative to the scene centre, unscaled.
    fn rotate(&self, point: Vec3) -> Vec3 {
        let p = point - self.center;
        if self.right_angle_axes {
            let (sin_x, sin_y) = self.oblique_factors();
            Vec3::new(p.x - p.z * sin_y, p.y + p.z * sin_x, p.z)
        } else {
            self.rotation * p
        }
    }

    fn oblique_factors(&self) -> (f32, f32) {
        (
            self.angle_x.to_radians().sin(),
            self.angle_y.to_radians().sin(),
        )
    }

    fn plot_cube(&self) -> [Vec3; 8] {
        let r = self.plot_area;
        let mut corners = [Vec3::ZERO; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Vec3::new(
                if i & 1 == 0 { r.x } else { r.right() },
                if i & 2 == 0 { r.y } else { r.bottom() },
                if i & 4 == 0 { 0.0 } else { self.depth },
            );
        }
        corners
    }

    /// Rotation about the X axis in degrees.
    pub fn angle_x(&self) -> f32 {
        self.angle_x
    }

    /// Rotation about the Y axis in degrees, folded into [-90, 90].
    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    pub fn scene_roll(&self) -> f32 {
        self.scene_roll
    }

    pub fn perspective(&self) -> f32 {
        self.perspective
    }

    pub fn light_style(&self) -> LightStyle {
        self.light_style
    }

    pub fn right_angle_axes(&self) -> bool {
        self.right_angle_axes
    }

    pub fn plot_area(&self) -> Rect {
        self.plot_area
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Uniform scale applied to fit the rotated scene.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Model to view rotation, identity for oblique projections.
    pub fn rotation(&self) -> Mat3 {
        if self.right_angle_axes {
            Mat3::IDENTITY
        } else {
            self.rotation
        }
    }

    /// True when every rotation is a multiple of 90 degrees.
    ///
    /// Faces are then axis aligned on screen and can be drawn without
    /// smoothing.
    pub fn is_axis_aligned(&self) -> bool {
        [self.angle_x, self.angle_y, self.scene_roll]
            .iter()
            .all(|angle| angle.rem_euclid(90.0) == 0.0)
            && self.perspective == 0.0
    }
}

/// Fold a Y rotation in [-180, 180] into the [-90, 90] range.
fn fold_rotation(angle: f32) -> f32 {
    if angle > 90.0 {
        angle - 180.0
    } else if angle < -90.0 {
        angle + 180.0
    } else {
        angle
    }
}

/// Scale that brings the projected cube back inside the plot rectangle.
fn fit_scale(cube: &[Vec3], plot_area: Rect) -> f32 {
    let points: Vec<Vec2> = cube.iter().map(|p| p.truncate()).collect();
    let Some(bounds) = Rect::bounding(&points) else {
        return 1.0;
    };
    let sx = if bounds.width > f32::EPSILON {
        plot_area.width / bounds.width
    } else {
        1.0
    };
    let sy = if bounds.height > f32::EPSILON {
        plot_area.height / bounds.height
    } else {
        1.0
    };
    let scale = sx.min(sy);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn test_flat_scene_is_identity() {
        let matrix = Matrix3D::new(plot(), 20.0, &SceneStyle::flat());
        let p = matrix.transform_point(Vec3::new(30.0, 40.0, 5.0));

        assert_abs_diff_eq!(p.x, 30.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 40.0, epsilon = 1e-4);
        assert!(matrix.is_axis_aligned());
    }

    #[test]
    fn test_orthographic_inverse_round_trips() {
        let matrix = Matrix3D::new(plot(), 30.0, &SceneStyle::default());
        let model = Vec3::new(12.0, 77.0, 18.0);
        let projected = matrix.transform_point(model);
        let back = matrix.inverse_transform_point(projected).unwrap();

        assert_abs_diff_eq!(back.x, model.x, epsilon = 1e-3);
        assert_abs_diff_eq!(back.y, model.y, epsilon = 1e-3);
        assert_abs_diff_eq!(back.z, model.z, epsilon = 1e-3);
    }

    #[test]
    fn test_orthographic_preserves_midpoints() {
        let matrix = Matrix3D::new(plot(), 30.0, &SceneStyle::default());
        let a = Vec3::new(10.0, 20.0, 0.0);
        let b = Vec3::new(150.0, 90.0, 30.0);

        let mid = matrix.transform_point((a + b) / 2.0);
        let expected = (matrix.transform_point(a) + matrix.transform_point(b)) / 2.0;
        assert_abs_diff_eq!(mid.x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.y, expected.y, epsilon = 1e-3);
    }

    #[test]
    fn test_fit_to_area_keeps_cube_inside_plot() {
        let matrix = Matrix3D::new(plot(), 60.0, &SceneStyle::default());
        let bounds = Rect::bounding(
            &matrix
                .plot_cube()
                .iter()
                .map(|&p| matrix.project(p))
                .collect::<Vec<_>>(),
        )
        .unwrap();

        assert!(matrix.scale() < 1.0);
        assert!(bounds.width <= plot().width + 1e-3);
        assert!(bounds.height <= plot().height + 1e-3);
    }

    #[test]
    fn test_perspective_shrinks_far_points() {
        let style = SceneStyle::flat().with_perspective(0.5);
        let matrix = Matrix3D::new(plot(), 100.0, &style);

        let near = matrix.transform_point(Vec3::new(0.0, 0.0, 100.0));
        let far = matrix.transform_point(Vec3::new(0.0, 0.0, 0.0));
        let center = Vec2::new(100.0, 50.0);

        assert!(far.truncate().distance(center) < near.truncate().distance(center));
        assert!(matrix.inverse_transform_point(near).is_none());
    }

    #[test]
    fn test_rotation_folds_into_half_turn() {
        let style = SceneStyle::default().with_rotation(150.0);
        let matrix = Matrix3D::new(plot(), 10.0, &style);
        assert_eq!(matrix.angle_y(), -30.0);
    }

    #[test]
    fn test_oblique_shifts_back_points_up_and_right() {
        let style = SceneStyle::default()
            .with_right_angle_axes(true)
            .with_fit_to_area(false);
        let matrix = Matrix3D::new(plot(), 40.0, &style);

        let front = matrix.project(Vec3::new(50.0, 50.0, 40.0));
        let back = matrix.project(Vec3::new(50.0, 50.0, 0.0));
        assert!(back.x > front.x);
        assert!(back.y < front.y);
    }
}
