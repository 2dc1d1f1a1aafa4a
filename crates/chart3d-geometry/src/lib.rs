//! chart3d geometry - the 2D vocabulary of the chart3d renderers
//!
//! This crate provides:
//! - Colors, rectangles, paths and path builders
//! - Paints (solid, linear and radial gradients) and strokes
//! - Bezier curves, cardinal splines and lyon-backed flattening
//! - Stroke widening for hit-testable outlines
//! - The contracts of the external drawing surface and hot-region collector
//!
//! # Example
//!
//! ```ignore
//! use chart3d_geometry::*;
//!
//! let mut builder = PathBuilder::new();
//! builder.polygon(&[Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]);
//! surface.fill_path(&builder.build(), &Paint::solid(Color::RED));
//! ```

mod canvas;
mod color;
mod curve;
mod paint;
mod path;
mod rect;
mod stroke;
mod style;
mod widen;

pub use canvas::*;
pub use color::*;
pub use curve::*;
pub use paint::*;
pub use path::*;
pub use rect::*;
pub use stroke::*;
pub use style::*;
pub use widen::*;

pub use glam::{Vec2, Vec3};
