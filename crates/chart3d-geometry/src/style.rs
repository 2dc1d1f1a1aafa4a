//! Combined style for geometry rendering.
//!
//! A style combines an optional fill paint and an optional outline stroke.
//! Faces of 3D primitives are drawn with one style each: fill first, then
//! outline.

use crate::{Color, Paint, Stroke};

/// Complete style for one filled and outlined shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Optional fill paint
    pub fill: Option<Paint>,
    /// Optional outline
    pub stroke: Option<Stroke>,
}

impl Style {
    /// Create a new empty style (invisible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fill-only style.
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            stroke: None,
        }
    }

    /// Create a stroke-only style.
    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Set the fill paint.
    pub fn with_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    /// Set the stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the stroke color and width.
    pub fn with_stroke_color(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(Stroke::solid(color, width));
        self
    }

    /// Check if this style has a visible fill.
    pub fn has_fill(&self) -> bool {
        self.fill.as_ref().is_some_and(|paint| match paint {
            Paint::Solid(color) => !color.is_transparent(),
            _ => true,
        })
    }

    /// Check if this style has a visible stroke.
    pub fn has_stroke(&self) -> bool {
        self.stroke.as_ref().is_some_and(Stroke::is_visible)
    }
}
