//! Splitting strip segments at the plot's top and bottom boundary.
//!
//! A segment that leaves the plot is cut where it crosses the boundary. The
//! part inside keeps its color; the parts outside are flattened onto the
//! boundary and drawn in the darker cut color so the strip reads as clipped
//! rather than missing.

use crate::helpers::x_at_y;
use chart3d_geometry::{Rect, Vec2};

/// Plot boundaries are widened by this much before testing.
const BOUNDARY_MARGIN: f32 = 0.5;

/// How a clipped piece is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceRole {
    /// Inside the plot, original color.
    Original,
    /// Flattened onto a boundary, cut color.
    Cut,
}

/// One piece of a clipped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPiece {
    pub start: Vec2,
    pub end: Vec2,
    pub role: PieceRole,
}

impl ClipPiece {
    fn new(start: Vec2, end: Vec2, role: PieceRole) -> Self {
        Self { start, end, role }
    }

    fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            role: self.role,
        }
    }
}

/// Vertical extent a strip may occupy, in plot pixels (Y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Inside,
    Below,
}

impl ClipBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            top: top.min(bottom),
            bottom: top.max(bottom),
        }
    }

    /// Bounds of a plot area, widened by a small margin.
    pub fn from_plot(plot: Rect) -> Self {
        Self::new(plot.y - BOUNDARY_MARGIN, plot.bottom() + BOUNDARY_MARGIN)
    }

    fn side(&self, y: f32) -> Side {
        if y < self.top {
            Side::Above
        } else if y > self.bottom {
            Side::Below
        } else {
            Side::Inside
        }
    }

    fn boundary(&self, side: Side) -> f32 {
        if side == Side::Above { self.top } else { self.bottom }
    }

    fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x, point.y.clamp(self.top, self.bottom))
    }
}

/// Cut the segment `first`-`second` at the bounds.
///
/// Returns one piece when the segment is entirely inside or entirely beyond
/// one boundary, two when it crosses one boundary and three when it spans
/// both. Pieces run from `first` to `second`; with `reversed` they run from
/// `second` back to `first`, each with its ends swapped.
pub fn clip_strip(first: Vec2, second: Vec2, bounds: ClipBounds, reversed: bool) -> Vec<ClipPiece> {
    let first_side = bounds.side(first.y);
    let second_side = bounds.side(second.y);

    let crossing = |side: Side| {
        let y = bounds.boundary(side);
        Vec2::new(x_at_y(first, second, y), y)
    };

    let mut pieces = match (first_side, second_side) {
        (Side::Inside, Side::Inside) => vec![ClipPiece::new(first, second, PieceRole::Original)],
        (a, b) if a == b => vec![ClipPiece::new(
            bounds.clamp(first),
            bounds.clamp(second),
            PieceRole::Cut,
        )],
        (Side::Inside, out) => {
            let cross = crossing(out);
            vec![
                ClipPiece::new(first, cross, PieceRole::Original),
                ClipPiece::new(cross, bounds.clamp(second), PieceRole::Cut),
            ]
        }
        (out, Side::Inside) => {
            let cross = crossing(out);
            vec![
                ClipPiece::new(bounds.clamp(first), cross, PieceRole::Cut),
                ClipPiece::new(cross, second, PieceRole::Original),
            ]
        }
        (out_first, out_second) => {
            let enter = crossing(out_first);
            let leave = crossing(out_second);
            vec![
                ClipPiece::new(bounds.clamp(first), enter, PieceRole::Cut),
                ClipPiece::new(enter, leave, PieceRole::Original),
                ClipPiece::new(leave, bounds.clamp(second), PieceRole::Cut),
            ]
        }
    };

    if reversed {
        pieces.reverse();
        for piece in &mut pieces {
            *piece = piece.reversed();
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bounds() -> ClipBounds {
        ClipBounds::new(0.0, 100.0)
    }

    #[test]
    fn test_inside_segment_is_untouched() {
        let pieces = clip_strip(Vec2::new(0.0, 10.0), Vec2::new(10.0, 90.0), bounds(), false);
        assert_eq!(
            pieces,
            vec![ClipPiece::new(
                Vec2::new(0.0, 10.0),
                Vec2::new(10.0, 90.0),
                PieceRole::Original
            )]
        );
    }

    #[test]
    fn test_segment_above_is_flattened_onto_top() {
        let pieces = clip_strip(Vec2::new(0.0, -20.0), Vec2::new(10.0, -5.0), bounds(), false);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].role, PieceRole::Cut);
        assert_eq!(pieces[0].start.y, 0.0);
        assert_eq!(pieces[0].end.y, 0.0);
    }

    #[test]
    fn test_single_crossing_gives_two_pieces() {
        let pieces = clip_strip(Vec2::new(0.0, -50.0), Vec2::new(10.0, 50.0), bounds(), false);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].role, PieceRole::Cut);
        assert_eq!(pieces[1].role, PieceRole::Original);
        assert_abs_diff_eq!(pieces[0].end.x, 5.0, epsilon = 1e-5);
        assert_eq!(pieces[0].end, pieces[1].start);
    }

    #[test]
    fn test_spanning_segment_gives_three_pieces() {
        let pieces = clip_strip(Vec2::new(0.0, -100.0), Vec2::new(30.0, 200.0), bounds(), false);
        let roles: Vec<_> = pieces.iter().map(|p| p.role).collect();
        assert_eq!(roles, vec![PieceRole::Cut, PieceRole::Original, PieceRole::Cut]);
        assert_abs_diff_eq!(pieces[1].start.x, 10.0, epsilon = 1e-4);
        assert_abs_diff_eq!(pieces[1].end.x, 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_reversed_runs_back_to_first() {
        let first = Vec2::new(0.0, -50.0);
        let second = Vec2::new(10.0, 50.0);
        let pieces = clip_strip(first, second, bounds(), true);
        assert_eq!(pieces[0].role, PieceRole::Original);
        assert_eq!(pieces[0].start, second);
        assert_eq!(pieces[1].role, PieceRole::Cut);
        assert_eq!(pieces[1].end, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_plot_bounds_are_widened() {
        let bounds = ClipBounds::from_plot(Rect::new(0.0, 10.0, 100.0, 50.0));
        assert!(bounds.top < 10.0);
        assert!(bounds.bottom > 60.0);
    }
}
