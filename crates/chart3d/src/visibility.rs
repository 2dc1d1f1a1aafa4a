//! Face visibility.
//!
//! A face is seen when its reference corners, in the winding fixed by the
//! face table, turn clockwise on screen (Y grows downward). The heuristic
//! variant answers from the rotation angles alone and only holds without
//! perspective.

use crate::{BOX_FACES, Error, Matrix3D, Result, SurfaceNames, face_corners};
use chart3d_geometry::{Rect, Vec2, Vec3};

/// Orientation test on three projected points.
///
/// Compares C against the line through A and B. Collinear and coincident
/// points are never visible.
pub fn is_surface_visible(a: Vec2, b: Vec2, c: Vec2) -> bool {
    if a.x == b.x {
        return if a.y > b.y { c.x > a.x } else if a.y < b.y { c.x < a.x } else { false };
    }

    let slope = (b.y - a.y) / (b.x - a.x);
    let intercept = a.y - slope * a.x;
    let line_y = slope * c.x + intercept;

    if a.x < b.x { c.y > line_y } else { c.y < line_y }
}

/// The eight corners of a box, front face first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCorners([Vec3; 8]);

impl BoxCorners {
    /// Corners of an axis-aligned box: `rect` in X/Y, back face at `z`.
    pub fn new(rect: Rect, z: f32, depth: f32) -> Self {
        let (x0, x1) = (rect.x, rect.right());
        let (y0, y1) = (rect.y, rect.bottom());
        let zf = z + depth;
        Self([
            Vec3::new(x0, y0, zf),
            Vec3::new(x0, y1, zf),
            Vec3::new(x1, y1, zf),
            Vec3::new(x1, y0, zf),
            Vec3::new(x0, y0, z),
            Vec3::new(x0, y1, z),
            Vec3::new(x1, y1, z),
            Vec3::new(x1, y0, z),
        ])
    }

    /// Slanted prism around the segment `a`-`b`, `half_height` above and below.
    ///
    /// The corners follow the box layout with `a` on the left side.
    pub fn prism(a: Vec2, b: Vec2, half_height: f32, z: f32, depth: f32) -> Self {
        let zf = z + depth;
        let (top_a, bottom_a) = (a.y - half_height, a.y + half_height);
        let (top_b, bottom_b) = (b.y - half_height, b.y + half_height);
        Self([
            Vec3::new(a.x, top_a, zf),
            Vec3::new(a.x, bottom_a, zf),
            Vec3::new(b.x, bottom_b, zf),
            Vec3::new(b.x, top_b, zf),
            Vec3::new(a.x, top_a, z),
            Vec3::new(a.x, bottom_a, z),
            Vec3::new(b.x, bottom_b, z),
            Vec3::new(b.x, top_b, z),
        ])
    }

    /// Corners from a slice that must hold exactly eight points.
    pub fn from_slice(points: &[Vec3]) -> Result<Self> {
        let corners: [Vec3; 8] = points.try_into().map_err(|_| Error::InvalidCornerCount {
            expected: 8,
            actual: points.len(),
        })?;
        Ok(Self(corners))
    }

    pub fn corners(&self) -> &[Vec3; 8] {
        &self.0
    }

    /// Project every corner.
    pub fn transformed(&self, matrix: &Matrix3D) -> Self {
        let mut corners = self.0;
        matrix.transform_points(&mut corners);
        Self(corners)
    }

    /// The four corners of one face in table winding.
    pub fn face(&self, face: SurfaceNames) -> [Vec3; 4] {
        face_corners(face).map(|i| self.0[i])
    }

    /// Projected outline of one face.
    pub fn face_2d(&self, face: SurfaceNames) -> [Vec2; 4] {
        self.face(face).map(|p| p.truncate())
    }

    /// Faces whose reference corners turn clockwise. Expects projected corners.
    pub fn visible_faces(&self) -> SurfaceNames {
        BOX_FACES
            .iter()
            .filter(|&&face| {
                let [a, b, c, _] = self.face_2d(face);
                is_surface_visible(a, b, c)
            })
            .fold(SurfaceNames::empty(), |acc, &face| acc | face)
    }

    /// Faces that collapse to a line or point for this box.
    ///
    /// Zero depth keeps only Front, zero width only Left/Right, zero height
    /// only Top/Bottom.
    pub fn degenerate_faces(&self) -> SurfaceNames {
        let c = &self.0;
        let width = (c[3].x - c[0].x).abs().max((c[2].x - c[1].x).abs());
        let height = (c[1].y - c[0].y).abs().max((c[2].y - c[3].y).abs());
        let depth = (c[0].z - c[4].z).abs();

        let mut faces = SurfaceNames::empty();
        if depth == 0.0 {
            faces |= SurfaceNames::all() - SurfaceNames::FRONT;
        }
        if width == 0.0 {
            faces |= SurfaceNames::all() - (SurfaceNames::LEFT | SurfaceNames::RIGHT);
        }
        if height == 0.0 {
            faces |= SurfaceNames::all() - (SurfaceNames::TOP | SurfaceNames::BOTTOM);
        }
        faces
    }
}

impl Matrix3D {
    /// Visible faces from the rotation angles. Valid only without perspective.
    pub fn visible_surfaces(&self) -> SurfaceNames {
        let mut faces = SurfaceNames::FRONT;
        if self.angle_y() > 0.0 {
            faces |= SurfaceNames::RIGHT;
        } else if self.angle_y() < 0.0 {
            faces |= SurfaceNames::LEFT;
        }
        if self.angle_x() > 0.0 {
            faces |= SurfaceNames::TOP;
        } else if self.angle_x() < 0.0 {
            faces |= SurfaceNames::BOTTOM;
        }
        faces
    }

    /// Visible faces of a concrete box from its projected corners.
    pub fn visible_surfaces_with_perspective(
        &self,
        rect: Rect,
        z: f32,
        depth: f32,
    ) -> SurfaceNames {
        BoxCorners::new(rect, z, depth).transformed(self).visible_faces()
    }

    /// Visible faces of a box, choosing the exact test whenever perspective is on.
    pub fn box_visible_surfaces(&self, rect: Rect, z: f32, depth: f32) -> SurfaceNames {
        if self.perspective() == 0.0 {
            self.visible_surfaces()
        } else {
            self.visible_surfaces_with_perspective(rect, z, depth)
        }
    }
}
