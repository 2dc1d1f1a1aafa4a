//! Common tangents of two cylinder cap outlines.
//!
//! Both caps are flattened ellipses (closed convex polylines). The outline of
//! the cylinder's front is bounded by the two outer common tangents; the
//! points where they touch each cap split the cap into a near and a far arc.

use chart3d_geometry::Vec2;

/// Tangent point indices on the near and far cap polylines.
///
/// The first index of each pair lies on one tangent line, the second on the
/// other; `near.0` and `far.0` share a tangent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapTangents {
    pub near: (usize, usize),
    pub far: (usize, usize),
}

/// Find the two outer common tangents of two closed polylines.
///
/// When the cylinder axis is vertical on screen the tangent points are the
/// leftmost and rightmost points of each cap. Otherwise every pair of
/// points (one per cap) is tried and kept when all points of both caps lie
/// on one side of the line through it. If the search finds nothing, the
/// extreme points across the axis are used.
pub fn find_cap_tangents(near: &[Vec2], far: &[Vec2], vertical: bool) -> CapTangents {
    if vertical {
        return CapTangents {
            near: x_extremes(near),
            far: x_extremes(far),
        };
    }

    let normal = axis_normal(near, far);
    let near_center = centroid(near);
    let tolerance = 1e-3 * span(near, far);

    let mut first: Option<(usize, usize)> = None;
    let mut second: Option<(usize, usize)> = None;

    'search: for (i, &a) in near.iter().enumerate() {
        for (j, &b) in far.iter().enumerate() {
            if a.distance(b) <= tolerance {
                continue;
            }
            if !is_common_tangent(a, b, near, far, tolerance) {
                continue;
            }
            let side = (a - near_center).dot(normal);
            let slot = if side < 0.0 { &mut first } else { &mut second };
            if slot.is_none() {
                *slot = Some((i, j));
            }
            if first.is_some() && second.is_some() {
                break 'search;
            }
        }
    }

    let fallback = || {
        let (near_min, near_max) = extremes_along(near, normal);
        let (far_min, far_max) = extremes_along(far, normal);
        ((near_min, far_min), (near_max, far_max))
    };

    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        (first, second) => {
            tracing::trace!("cap tangent search incomplete, using axis extremes");
            let (min, max) = fallback();
            (first.unwrap_or(min), second.unwrap_or(max))
        }
    };

    CapTangents {
        near: (first.0, second.0),
        far: (first.1, second.1),
    }
}

/// Whether every point of both polylines lies on one side of the line `a`-`b`.
///
/// Uses `y = k x + m` for chords closer to horizontal and `x = k y + m`
/// otherwise, so the slope never blows up.
fn is_common_tangent(a: Vec2, b: Vec2, near: &[Vec2], far: &[Vec2], tolerance: f32) -> bool {
    let chord = b - a;
    let offset = |p: Vec2| -> f32 {
        if chord.x.abs() >= chord.y.abs() {
            let k = chord.y / chord.x;
            p.y - (a.y + k * (p.x - a.x))
        } else {
            let k = chord.x / chord.y;
            p.x - (a.x + k * (p.y - a.y))
        }
    };

    let mut above = false;
    let mut below = false;
    for &p in near.iter().chain(far.iter()) {
        let d = offset(p);
        if d > tolerance {
            above = true;
        } else if d < -tolerance {
            below = true;
        }
        if above && below {
            return false;
        }
    }
    true
}

/// Unit vector across the cylinder axis.
fn axis_normal(near: &[Vec2], far: &[Vec2]) -> Vec2 {
    let axis = centroid(far) - centroid(near);
    let normal = Vec2::new(-axis.y, axis.x).normalize_or_zero();
    if normal == Vec2::ZERO { Vec2::X } else { normal }
}

fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

fn span(near: &[Vec2], far: &[Vec2]) -> f32 {
    let (min, max) = near.iter().chain(far.iter()).fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), &p| (min.min(p), max.max(p)),
    );
    let size = max - min;
    if size.is_finite() { size.max_element().max(1.0) } else { 1.0 }
}

fn x_extremes(points: &[Vec2]) -> (usize, usize) {
    extremes_along(points, Vec2::X)
}

/// Indices of the points with the smallest and largest projection on `direction`.
fn extremes_along(points: &[Vec2], direction: Vec2) -> (usize, usize) {
    let mut min = (0, f32::INFINITY);
    let mut max = (0, f32::NEG_INFINITY);
    for (i, p) in points.iter().enumerate() {
        let t = p.dot(direction);
        if t < min.1 {
            min = (i, t);
        }
        if t > max.1 {
            max = (i, t);
        }
    }
    (min.0, max.0)
}

/// Points of a closed ring from `from` to `to` along the arc through index 0.
///
/// When `from` > `to` the arc runs forward and wraps past the end of the
/// ring; otherwise it runs backward.
pub(crate) fn arc_through_start(ring: &[Vec2], from: usize, to: usize) -> Vec<Vec2> {
    let n = ring.len();
    if n == 0 {
        return Vec::new();
    }
    let (from, to) = (from % n, to % n);
    if from == to {
        return vec![ring[from]];
    }

    let mut arc = Vec::new();
    let mut i = from;
    let forward = from > to;
    loop {
        arc.push(ring[i]);
        if i == to {
            break;
        }
        i = if forward { (i + 1) % n } else { (i + n - 1) % n };
    }
    arc
}
