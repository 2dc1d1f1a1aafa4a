//! Contracts of the external 2D drawing surface and hot-region collector.
//!
//! The 3D renderers never rasterise anything themselves. They produce paths
//! and paints in absolute pixel coordinates and hand them to a
//! [`DrawingSurface`]; shapes used for hit-testing go to a
//! [`HotRegionCollector`]. Both are append-only and single-threaded.

use crate::{Color, Paint, Path, Rect, Stroke, Style, Vec2};

/// Anti-aliasing mode of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntiAliasing {
    /// No smoothing.
    None,
    /// Smooth text only.
    Text,
    /// Smooth shapes only.
    Graphics,
    /// Smooth everything.
    #[default]
    All,
}

impl AntiAliasing {
    /// Whether shapes are smoothed.
    pub fn smooths_graphics(self) -> bool {
        matches!(self, Self::Graphics | Self::All)
    }

    /// Same mode with shape smoothing switched off.
    pub fn without_graphics(self) -> Self {
        match self {
            Self::All | Self::Text => Self::Text,
            Self::Graphics | Self::None => Self::None,
        }
    }
}

/// Shape of a flat marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    #[default]
    None,
    Square,
    Circle,
    Diamond,
    Triangle,
    Cross,
    Star4,
    Star5,
    Star6,
    Star10,
}

impl MarkerShape {
    /// Shape for a numeric style code, `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Square,
            2 => Self::Circle,
            3 => Self::Diamond,
            4 => Self::Triangle,
            5 => Self::Cross,
            6 => Self::Star4,
            7 => Self::Star5,
            8 => Self::Star6,
            9 => Self::Star10,
            _ => return None,
        })
    }
}

/// A flat marker as drawn by the surface itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker2D {
    pub shape: MarkerShape,
    /// Diameter in pixels
    pub size: f32,
    pub color: Color,
    pub border: Option<Stroke>,
    /// Image drawn instead of the shape
    pub image: Option<String>,
}

/// The 2D drawing surface the renderers paint on.
pub trait DrawingSurface {
    /// Fill a path with a paint.
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Outline a path.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Draw a flat marker centred on `center`.
    fn draw_marker(&mut self, center: Vec2, marker: &Marker2D);

    /// Current anti-aliasing mode.
    fn anti_aliasing(&self) -> AntiAliasing;

    /// Change the anti-aliasing mode.
    fn set_anti_aliasing(&mut self, mode: AntiAliasing);

    /// Straight line between two points.
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.stroke_path(&Path::polyline(&[from, to]), stroke);
    }

    /// Fill then outline a path.
    fn draw_styled(&mut self, path: &Path, style: &Style) {
        if let Some(paint) = &style.fill
            && style.has_fill()
        {
            self.fill_path(path, paint);
        }
        if let Some(stroke) = &style.stroke
            && stroke.is_visible()
        {
            self.stroke_path(path, stroke);
        }
    }

    /// Chart-relative point to absolute pixels.
    fn to_absolute(&self, point: Vec2) -> Vec2 {
        point
    }

    /// Absolute pixels to a chart-relative point.
    fn to_relative(&self, point: Vec2) -> Vec2 {
        point
    }

    /// Chart-relative rectangle to absolute pixels.
    fn to_absolute_rect(&self, rect: Rect) -> Rect {
        Rect::from_corners(
            self.to_absolute(rect.position()),
            self.to_absolute(Vec2::new(rect.right(), rect.bottom())),
        )
    }

    /// Absolute rectangle to chart-relative coordinates.
    fn to_relative_rect(&self, rect: Rect) -> Rect {
        Rect::from_corners(
            self.to_relative(rect.position()),
            self.to_relative(Vec2::new(rect.right(), rect.bottom())),
        )
    }
}

/// Kind of chart element a hot region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartElementKind {
    DataPoint,
    Marker,
    Axis,
    Gridlines,
    StripLine,
    BackWall,
    SideWall,
    Floor,
}

/// Object a hot region resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum HotRegionOwner {
    /// A single data point of a series.
    DataPoint {
        series: String,
        point_index: usize,
    },
    /// An aggregate shape that only carries display text.
    Tooltip { text: String },
    /// A named non-data element (axis, wall).
    Element { name: String },
}

/// Registry of hit-testable shapes.
pub trait HotRegionCollector {
    /// Register a path.
    fn add_path(&mut self, path: &Path, kind: ChartElementKind, owner: &HotRegionOwner);

    /// Register an axis-aligned rectangle.
    fn add_rect(&mut self, rect: Rect, kind: ChartElementKind, owner: &HotRegionOwner) {
        let mut builder = crate::PathBuilder::new();
        builder.rect(rect);
        self.add_path(&builder.build(), kind, owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_codes() {
        assert_eq!(MarkerShape::from_code(2), Some(MarkerShape::Circle));
        assert_eq!(MarkerShape::from_code(9), Some(MarkerShape::Star10));
        assert_eq!(MarkerShape::from_code(10), None);
    }

    #[test]
    fn test_anti_aliasing_modes() {
        assert!(AntiAliasing::All.smooths_graphics());
        assert!(!AntiAliasing::Text.smooths_graphics());
        assert_eq!(AntiAliasing::All.without_graphics(), AntiAliasing::Text);
        assert_eq!(AntiAliasing::Graphics.without_graphics(), AntiAliasing::None);
    }
}
