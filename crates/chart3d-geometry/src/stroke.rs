//! Stroke properties for outlines and lines.

use crate::Color;

/// Line cap style for stroke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap ending at the endpoint.
    #[default]
    Butt,
    /// Round cap extending beyond the endpoint.
    Round,
    /// Square cap extending beyond the endpoint.
    Square,
}

/// Line join style for stroke corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Miter join (sharp corner).
    #[default]
    Miter,
    /// Round join (rounded corner).
    Round,
    /// Bevel join (flat corner).
    Bevel,
}

/// Dash style of chart borders and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    /// Nothing is drawn.
    NotSet,
    /// Continuous line.
    #[default]
    Solid,
    Dash,
    DashDot,
    DashDotDot,
    Dot,
}

impl DashStyle {
    /// On/off lengths for a line of the given width, `None` for continuous lines.
    pub fn pattern(&self, width: f32) -> Option<Vec<f32>> {
        let w = width.max(1.0);
        match self {
            Self::NotSet | Self::Solid => None,
            Self::Dash => Some(vec![3.0 * w, w]),
            Self::DashDot => Some(vec![3.0 * w, w, w, w]),
            Self::DashDotDot => Some(vec![3.0 * w, w, w, w, w, w]),
            Self::Dot => Some(vec![w, w]),
        }
    }
}

/// Stroke properties for outlines and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke width in pixels
    pub width: f32,
    /// Stroke color
    pub color: Color,
    /// Dash style
    pub dash: DashStyle,
    /// Line cap style
    pub line_cap: LineCap,
    /// Line join style
    pub line_join: LineJoin,
}

impl Stroke {
    /// Create a solid color stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            width,
            color,
            dash: DashStyle::Solid,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }

    /// Set the dash style.
    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    /// Set the line cap style.
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    /// Set the line join style.
    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    /// Same stroke with a different width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Check if the stroke draws anything.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && !self.color.is_transparent() && self.dash != DashStyle::NotSet
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_visibility() {
        assert!(Stroke::solid(Color::RED, 1.0).is_visible());
        assert!(!Stroke::solid(Color::RED, 0.0).is_visible());
        assert!(!Stroke::solid(Color::TRANSPARENT, 1.0).is_visible());
        assert!(!Stroke::solid(Color::RED, 1.0).with_dash(DashStyle::NotSet).is_visible());
    }

    #[test]
    fn test_dash_patterns_scale_with_width() {
        assert_eq!(DashStyle::Solid.pattern(2.0), None);
        assert_eq!(DashStyle::Dash.pattern(2.0), Some(vec![6.0, 2.0]));
        assert_eq!(DashStyle::Dot.pattern(0.5), Some(vec![1.0, 1.0]));
    }
}
