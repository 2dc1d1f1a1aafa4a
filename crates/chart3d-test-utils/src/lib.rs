//! Test utilities for chart3d.
//!
//! This crate provides in-memory implementations of the two external
//! contracts the renderers draw into:
//!
//! - [`RecordingSurface`] - a [`DrawingSurface`] that records every call
//! - [`RecordingHotRegions`] - a [`HotRegionCollector`] that keeps every region
//!
//! # Example
//!
//! ```rust
//! use chart3d_geometry::{Color, DrawingSurface, Paint, Path, Vec2};
//! use chart3d_test_utils::RecordingSurface;
//!
//! let mut surface = RecordingSurface::new();
//! let path = Path::polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
//! surface.fill_path(&path, &Paint::solid(Color::RED));
//!
//! assert_eq!(surface.count_fills(), 1);
//! assert_eq!(surface.fill_colors(), vec![Color::RED]);
//! ```

mod recording;

pub use recording::*;
