//! Face shading.

use crate::{LightStyle, Matrix3D, SurfaceNames};
use chart3d_geometry::{Color, Vec3};
use std::f32::consts::PI;

/// Direction toward the light in view space (Y down, Z toward the viewer).
const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, -0.5, 1.0);

/// Colors of the six faces of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceShades {
    pub front: Color,
    pub back: Color,
    pub left: Color,
    pub right: Color,
    pub top: Color,
    pub bottom: Color,
}

impl FaceShades {
    /// Every face in one color.
    pub fn uniform(color: Color) -> Self {
        Self {
            front: color,
            back: color,
            left: color,
            right: color,
            top: color,
            bottom: color,
        }
    }

    /// Color of a single face. Combined flags return the front color.
    pub fn get(&self, face: SurfaceNames) -> Color {
        *self.slot(face)
    }

    /// Darken one or more faces in place.
    pub fn darken(&mut self, faces: SurfaceNames, amount: f32) {
        for face in faces.iter() {
            let color = self.slot_mut(face);
            *color = color.darken(amount);
        }
    }

    fn slot(&self, face: SurfaceNames) -> &Color {
        if face == SurfaceNames::BACK {
            &self.back
        } else if face == SurfaceNames::LEFT {
            &self.left
        } else if face == SurfaceNames::RIGHT {
            &self.right
        } else if face == SurfaceNames::TOP {
            &self.top
        } else if face == SurfaceNames::BOTTOM {
            &self.bottom
        } else {
            &self.front
        }
    }

    fn slot_mut(&mut self, face: SurfaceNames) -> &mut Color {
        if face == SurfaceNames::BACK {
            &mut self.back
        } else if face == SurfaceNames::LEFT {
            &mut self.left
        } else if face == SurfaceNames::RIGHT {
            &mut self.right
        } else if face == SurfaceNames::TOP {
            &mut self.top
        } else if face == SurfaceNames::BOTTOM {
            &mut self.bottom
        } else {
            &mut self.front
        }
    }
}

/// Outward normal of a face of an axis-aligned box in model space.
fn face_normal(face: SurfaceNames) -> Vec3 {
    if face == SurfaceNames::BACK {
        Vec3::NEG_Z
    } else if face == SurfaceNames::LEFT {
        Vec3::NEG_X
    } else if face == SurfaceNames::RIGHT {
        Vec3::X
    } else if face == SurfaceNames::TOP {
        Vec3::NEG_Y
    } else if face == SurfaceNames::BOTTOM {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

/// Fixed shade of a face for the simplistic policy.
fn simplistic_shade(base: Color, face: SurfaceNames) -> Color {
    if face.intersects(SurfaceNames::LEFT | SurfaceNames::RIGHT) {
        base.darken(0.25)
    } else if face.intersects(SurfaceNames::TOP | SurfaceNames::BOTTOM) {
        base.darken(0.15)
    } else {
        base
    }
}

/// Shade for a view-space normal under the realistic policy.
fn realistic_shade(base: Color, normal: Vec3) -> Color {
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return base;
    }
    let cos = normal.dot(LIGHT_DIRECTION.normalize()).clamp(-1.0, 1.0);
    base.bright_gradient(cos.acos() / PI)
}

impl Matrix3D {
    /// Colors of the six faces of a box lit under the scene's light style.
    pub fn face_colors(&self, base: Color) -> FaceShades {
        match self.light_style() {
            LightStyle::None => FaceShades::uniform(base),
            LightStyle::Simplistic => FaceShades {
                front: simplistic_shade(base, SurfaceNames::FRONT),
                back: simplistic_shade(base, SurfaceNames::BACK),
                left: simplistic_shade(base, SurfaceNames::LEFT),
                right: simplistic_shade(base, SurfaceNames::RIGHT),
                top: simplistic_shade(base, SurfaceNames::TOP),
                bottom: simplistic_shade(base, SurfaceNames::BOTTOM),
            },
            LightStyle::Realistic => {
                let rotation = self.rotation();
                let shade = |face| realistic_shade(base, rotation * face_normal(face));
                FaceShades {
                    front: shade(SurfaceNames::FRONT),
                    back: shade(SurfaceNames::BACK),
                    left: shade(SurfaceNames::LEFT),
                    right: shade(SurfaceNames::RIGHT),
                    top: shade(SurfaceNames::TOP),
                    bottom: shade(SurfaceNames::BOTTOM),
                }
            }
        }
    }

    /// One color for an arbitrary (possibly slanted) projected polygon.
    ///
    /// `points` are already transformed; the normal is flipped toward the
    /// viewer for visible polygons and away from it otherwise. With a
    /// reversed series order the left and right sides trade places.
    pub fn polygon_light(
        &self,
        points: &[Vec3],
        visible: bool,
        base: Color,
        surface: SurfaceNames,
        reverse_series_order: bool,
    ) -> Color {
        let surface = if reverse_series_order {
            swap_left_right(surface)
        } else {
            surface
        };

        match self.light_style() {
            LightStyle::None => base,
            LightStyle::Simplistic => simplistic_shade(base, surface),
            LightStyle::Realistic => {
                let Some(mut normal) = polygon_normal(points) else {
                    return base;
                };
                if (normal.z < 0.0) == visible {
                    normal = -normal;
                }
                if reverse_series_order {
                    normal.x = -normal.x;
                }
                realistic_shade(base, normal)
            }
        }
    }
}

fn swap_left_right(surface: SurfaceNames) -> SurfaceNames {
    if surface == SurfaceNames::LEFT {
        SurfaceNames::RIGHT
    } else if surface == SurfaceNames::RIGHT {
        SurfaceNames::LEFT
    } else {
        surface
    }
}

/// Normal of a planar polygon (Newell's method), `None` when degenerate.
fn polygon_normal(points: &[Vec3]) -> Option<Vec3> {
    if points.len() < 3 {
        return None;
    }
    let mut normal = Vec3::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    let normal = normal.normalize_or_zero();
    (normal != Vec3::ZERO).then_some(normal)
}
