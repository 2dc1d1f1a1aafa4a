//! Fills: flat colors and the gradients used for shaded faces.

use crate::{Color, Rect};
use glam::Vec2;

/// Fill of a face, band or marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Shading across a bar body or pie band.
    LinearGradient(LinearGradient),
    /// Highlight on a disc marker.
    RadialGradient(RadialGradient),
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Gradient along the line from `start` to `end`.
    pub fn linear_gradient(start: Vec2, end: Vec2, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(LinearGradient { start, end, stops })
    }

    /// Gradient filling the ellipse inscribed in `bounds`, centred on `focus`.
    pub fn radial_gradient(bounds: Rect, focus: Vec2, stops: Vec<GradientStop>) -> Self {
        Self::RadialGradient(RadialGradient {
            bounds,
            focus,
            stops,
        })
    }

    /// The color of a flat paint.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            _ => None,
        }
    }

    /// Whether nothing behind the fill can show through.
    pub fn is_opaque(&self) -> bool {
        match self {
            Self::Solid(color) => color.is_opaque(),
            Self::LinearGradient(LinearGradient { stops, .. })
            | Self::RadialGradient(RadialGradient { stops, .. }) => {
                stops.iter().all(|stop| stop.color.is_opaque())
            }
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Colors varying along one direction, constant across it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Color at `position`, projected onto the gradient line.
    pub fn sample(&self, position: Vec2) -> Color {
        let axis = self.end - self.start;
        let length_squared = axis.length_squared();
        let t = if length_squared < f32::EPSILON {
            0.0
        } else {
            (position - self.start).dot(axis) / length_squared
        };
        sample_stops(&self.stops, t)
    }
}

/// A radial gradient filling an ellipse, brightest (offset 0) at `focus`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub bounds: Rect,
    pub focus: Vec2,
    /// Offset 0 at the focus, 1 on the rim.
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    /// Color at `position`; distances are scaled by the ellipse radii.
    pub fn sample(&self, position: Vec2) -> Color {
        let radii = self.bounds.size() * 0.5;
        let t = if radii.x <= 0.0 || radii.y <= 0.0 {
            1.0
        } else {
            ((position - self.focus) / radii).length()
        };
        sample_stops(&self.stops, t)
    }
}

/// Color at an offset in [0, 1] of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    /// Stop at `offset`, clamped into [0, 1].
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Piecewise-linear color between the stops, clamped at both ends.
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    stops
        .windows(2)
        .find(|pair| t <= pair[1].offset)
        .map_or(last.color, |pair| {
            let span = pair[1].offset - pair[0].offset;
            if span < f32::EPSILON {
                pair[1].color
            } else {
                pair[0].color.lerp(pair[1].color, (t - pair[0].offset) / span)
            }
        })
}
