//! chart3d - three-dimensional chart geometry on a flat drawing surface
//!
//! Bars, cylinders, pie and doughnut wedges, line and area strips, markers
//! and axis furniture are projected with a fixed rotation/perspective
//! transform and painted back to front. There is no depth buffer: every
//! renderer decides which faces can be seen, shades them from a light-style
//! policy and issues fill and stroke calls in an order that makes the
//! painter's algorithm come out right.
//!
//! The main pieces are:
//!
//! - [`Matrix3D`] - projection of model points and face shading
//! - [`is_surface_visible`] and the visible-face queries on [`Matrix3D`]
//! - [`ChartRenderer3D`] - the primitive renderers
//! - [`StripRenderContext`] and [`CylinderCapCache`] - state carried between
//!   consecutive calls of one scene
//!
//! # Example
//!
//! ```rust
//! use chart3d::{BoxStyle, ChartRenderer3D, DrawingOperationTypes, Matrix3D, SceneStyle};
//! use chart3d_geometry::{Color, Rect};
//! use chart3d_test_utils::RecordingSurface;
//!
//! let plot = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let matrix = Matrix3D::new(plot, 40.0, &SceneStyle::default());
//! let mut surface = RecordingSurface::new();
//!
//! let mut renderer = ChartRenderer3D::new(&mut surface, &matrix);
//! renderer.fill_3d_box(
//!     Rect::new(100.0, 100.0, 50.0, 150.0),
//!     0.0,
//!     40.0,
//!     &BoxStyle::new(Color::rgb(0.2, 0.4, 0.8)),
//!     DrawingOperationTypes::DRAW_ELEMENT,
//! );
//!
//! assert_eq!(surface.count_fills(), 3);
//! ```

mod context;
mod data_point;
mod error;
mod helpers;
mod lighting;
mod matrix;
pub mod renderers;
mod style;
mod surface;
mod tangent;
mod visibility;

pub use context::*;
pub use data_point::*;
pub use error::*;
pub use helpers::*;
pub use lighting::*;
pub use matrix::*;
pub use renderers::ChartRenderer3D;
pub use style::*;
pub use surface::*;
pub use tangent::*;
pub use visibility::*;
