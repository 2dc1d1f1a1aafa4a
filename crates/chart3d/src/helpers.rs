//! Geometric helpers shared by the renderers.

use crate::DataPoint3D;
use chart3d_geometry::Vec2;

/// Ray angle for a nominal angle on an ellipse with height/width `ratio`.
///
/// Arc primitives take the direction of the ray from the centre, while pie
/// geometry is laid out in angles on the unsquashed circle. Each 180 degree
/// band centred on a multiple of 180 is mapped through
/// `c + atan(tan(angle - c) * ratio)` so the result stays continuous and
/// monotonic. Angles exactly at a band edge are returned unchanged.
pub fn angle_correction(angle: f32, ratio: f32) -> f32 {
    let band = ((angle + 90.0) / 180.0).floor();
    let center = band * 180.0;
    let offset = angle - center;

    if offset.abs() == 90.0 || offset <= -90.0 {
        return angle;
    }

    center + (offset.to_radians().tan() * ratio).atan().to_degrees()
}

/// Intersection of the infinite lines through `a1`-`a2` and `b1`-`b2`.
///
/// Horizontal and vertical lines are handled without slopes, so an axis
/// aligned pair meets exactly at its corner. Parallel lines yield `None`.
pub fn lines_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let a_vertical = a1.x == a2.x;
    let b_vertical = b1.x == b2.x;

    match (a_vertical, b_vertical) {
        (true, true) => None,
        (true, false) => Some(Vec2::new(a1.x, y_on_line(b1, b2, a1.x))),
        (false, true) => Some(Vec2::new(b1.x, y_on_line(a1, a2, b1.x))),
        (false, false) => {
            let ka = (a2.y - a1.y) / (a2.x - a1.x);
            let kb = (b2.y - b1.y) / (b2.x - b1.x);
            if ka == kb {
                return None;
            }
            let ma = a1.y - ka * a1.x;
            let mb = b1.y - kb * b1.x;
            let x = (mb - ma) / (ka - kb);
            let y = if a1.y == a2.y {
                a1.y
            } else if b1.y == b2.y {
                b1.y
            } else {
                ka * x + ma
            };
            Some(Vec2::new(x, y))
        }
    }
}

fn y_on_line(p1: Vec2, p2: Vec2, x: f32) -> f32 {
    if p1.y == p2.y {
        p1.y
    } else {
        p1.y + (x - p1.x) * (p2.y - p1.y) / (p2.x - p1.x)
    }
}

/// Find the point with ordinal `index` of `series` in an ordered point list.
///
/// Returns the position in the list together with the point.
pub fn find_point_by_index<'a>(
    points: &'a [DataPoint3D],
    index: usize,
    series: &str,
) -> Option<(usize, &'a DataPoint3D)> {
    points
        .iter()
        .enumerate()
        .find(|(_, point)| point.index == index && point.series == series)
}

/// Linear interpolation of X where the segment `a`-`b` crosses `y`.
pub(crate) fn x_at_y(a: Vec2, b: Vec2, y: f32) -> f32 {
    if a.y == b.y {
        a.x
    } else {
        a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
    }
}
