//! Cubic Bezier segments, cardinal splines and their flattening.
//!
//! Provides cubic Bezier curves, cardinal splines through a point list, and
//! flattening into polylines so curved outlines can be treated as polygons
//! (tangent searches, hit regions, front-edge extraction).

use crate::{Path, PathBuilder};
use glam::Vec2;
use lyon::geom::CubicBezierSegment;
use lyon::math::point;

/// Tolerance used when flattening curves for geometric queries.
pub const DEFAULT_FLATTEN_TOLERANCE: f32 = 0.25;

/// One cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub to: Vec2,
}

impl CubicBezier {
    pub fn new(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Straight segment expressed as a cubic.
    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new(from, from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to)
    }

    /// Point at parameter `t` in [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// De Casteljau split at `t`.
    pub fn split(&self, t: f32) -> (Self, Self) {
        let p01 = self.from.lerp(self.control1, t);
        let p12 = self.control1.lerp(self.control2, t);
        let p23 = self.control2.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.from, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.to),
        )
    }

    /// Polyline approximation, start and end points included.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec2> {
        let segment = CubicBezierSegment {
            from: point(self.from.x, self.from.y),
            ctrl1: point(self.control1.x, self.control1.y),
            ctrl2: point(self.control2.x, self.control2.y),
            to: point(self.to.x, self.to.y),
        };

        let mut points = vec![self.from];
        points.extend(segment.flattened(tolerance).map(|p| Vec2::new(p.x, p.y)));
        if points.last() != Some(&self.to) {
            points.push(self.to);
        }
        points.dedup();
        points
    }
}

/// Cardinal spline through `points` as a chain of cubic segments.
///
/// `tension` 0 gives straight segments. Open splines reuse the end points as
/// their own outer neighbours; closed splines wrap around and add the closing
/// segment.
pub fn cardinal_spline(points: &[Vec2], tension: f32, closed: bool) -> Vec<CubicBezier> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let at = |i: isize| -> Vec2 {
        if closed {
            points[i.rem_euclid(n as isize) as usize]
        } else {
            points[i.clamp(0, n as isize - 1) as usize]
        }
    };

    let k = tension / 3.0;
    let segment_count = if closed { n } else { n - 1 };
    (0..segment_count as isize)
        .map(|i| {
            let p0 = at(i - 1);
            let p1 = at(i);
            let p2 = at(i + 1);
            let p3 = at(i + 2);
            CubicBezier::new(p1, p1 + (p2 - p0) * k, p2 - (p3 - p1) * k, p2)
        })
        .collect()
}

/// Flatten a chain of curves into one polyline without duplicated joints.
pub fn flatten_curves(curves: &[CubicBezier], tolerance: f32) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::new();
    for curve in curves {
        let flat = curve.flatten(tolerance);
        let skip = usize::from(points.last() == flat.first());
        points.extend(flat.into_iter().skip(skip));
    }
    points
}

/// Append curves to a builder as one sub-path.
///
/// Joins the sub-path already open in `builder`, if any.
pub fn append_curves(builder: &mut PathBuilder, curves: &[CubicBezier]) {
    let Some(first) = curves.first() else {
        return;
    };
    builder.line_to(first.from);
    for curve in curves {
        builder.cubic_to(curve.control1, curve.control2, curve.to);
    }
}

/// Open path through `points` smoothed with a cardinal spline.
pub fn spline_path(points: &[Vec2], tension: f32) -> Path {
    let mut builder = PathBuilder::new();
    append_curves(&mut builder, &cardinal_spline(points, tension, false));
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let curve = CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(25.0, 50.0),
            Vec2::new(75.0, 50.0),
            Vec2::new(100.0, 0.0),
        );

        assert_eq!(curve.eval(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(curve.eval(1.0), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_cubic_split_meets_at_midpoint() {
        let curve = CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
        );
        let (left, right) = curve.split(0.5);
        let mid = curve.eval(0.5);

        assert_abs_diff_eq!(left.to.x, mid.x, epsilon = 1e-4);
        assert_abs_diff_eq!(right.from.y, mid.y, epsilon = 1e-4);
    }

    #[test]
    fn test_cardinal_spline_passes_through_points() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 8.0),
        ];

        let open = cardinal_spline(&points, 0.5, false);
        assert_eq!(open.len(), 3);
        for (curve, window) in open.iter().zip(points.windows(2)) {
            assert_eq!(curve.from, window[0]);
            assert_eq!(curve.to, window[1]);
        }

        let closed = cardinal_spline(&points, 0.5, true);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[3].to, points[0]);
    }

    #[test]
    fn test_zero_tension_is_straight() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), Vec2::new(20.0, 0.0)];
        let curves = cardinal_spline(&points, 0.0, false);

        assert_eq!(curves[0].control1, points[0]);
        assert_eq!(curves[0].control2, points[1]);
    }

    #[test]
    fn test_flatten_keeps_endpoints() {
        let curve = CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 40.0),
            Vec2::new(40.0, 40.0),
            Vec2::new(40.0, 0.0),
        );
        let flat = curve.flatten(0.1);

        assert!(flat.len() > 4);
        assert_eq!(flat.first(), Some(&Vec2::new(0.0, 0.0)));
        assert_eq!(flat.last(), Some(&Vec2::new(40.0, 0.0)));
    }

    #[test]
    fn test_flatten_curves_joins_without_duplicates() {
        let curves = [
            CubicBezier::line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
            CubicBezier::line(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)),
        ];
        let flat = flatten_curves(&curves, 0.1);

        assert_eq!(flat.first(), Some(&Vec2::new(0.0, 0.0)));
        assert_eq!(flat.last(), Some(&Vec2::new(10.0, 10.0)));
        assert!(flat.windows(2).all(|w| w[0] != w[1]));
    }
}
