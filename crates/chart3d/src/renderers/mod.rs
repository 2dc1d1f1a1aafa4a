//! Primitive renderers.
//!
//! Every renderer is a method on [`ChartRenderer3D`], which borrows the
//! drawing surface, the scene's [`Matrix3D`] and optionally a hot-region
//! collector for the duration of one scene. Each call:
//!
//! 1. decides which faces can be seen,
//! 2. projects and shades them,
//! 3. paints hidden faces (translucent fills only) and then visible ones,
//! 4. builds the hit-test path when asked to and registers it.

mod bar_finish;
mod box3d;
mod clip;
mod cylinder;
mod line;
mod marker;
mod pie;
mod strip;

pub use clip::{ClipBounds, ClipPiece, PieceRole, clip_strip};
pub use line::WallKind;
pub use pie::{PieSliceGeometry, front_curve_ranges};
pub use strip::{StripSegment, should_draw_line_chart_surface};

use crate::Matrix3D;
use chart3d_geometry::{
    ChartElementKind, DrawingSurface, HotRegionCollector, HotRegionOwner, Paint, Path, Stroke,
};

/// Renders 3D primitives of one scene onto a drawing surface.
pub struct ChartRenderer3D<'a> {
    surface: &'a mut dyn DrawingSurface,
    matrix: &'a Matrix3D,
    hot_regions: Option<&'a mut dyn HotRegionCollector>,
}

impl std::fmt::Debug for ChartRenderer3D<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRenderer3D")
            .field("matrix", &self.matrix)
            .field("hot_regions", &self.hot_regions.is_some())
            .finish()
    }
}

impl<'a> ChartRenderer3D<'a> {
    /// Create a renderer for one scene.
    pub fn new(surface: &'a mut dyn DrawingSurface, matrix: &'a Matrix3D) -> Self {
        Self {
            surface,
            matrix,
            hot_regions: None,
        }
    }

    /// Register hit paths with `collector` when they are calculated.
    pub fn with_hot_regions(mut self, collector: &'a mut dyn HotRegionCollector) -> Self {
        self.hot_regions = Some(collector);
        self
    }

    /// The scene projection.
    pub fn matrix(&self) -> &Matrix3D {
        self.matrix
    }

    /// Direct access to the drawing surface, e.g. to flush a strip context.
    pub fn surface(&mut self) -> &mut dyn DrawingSurface {
        &mut *self.surface
    }

    fn register(&mut self, path: &Path, kind: ChartElementKind, owner: Option<&HotRegionOwner>) {
        if path.is_empty() {
            return;
        }
        if let (Some(collector), Some(owner)) = (self.hot_regions.as_deref_mut(), owner) {
            collector.add_path(path, kind, owner);
        }
    }

    /// Fill a path, then outline it when a stroke is given.
    fn paint_path(&mut self, path: &Path, paint: &Paint, stroke: Option<&Stroke>) {
        self.surface.fill_path(path, paint);
        if let Some(stroke) = stroke
            && stroke.is_visible()
        {
            self.surface.stroke_path(path, stroke);
        }
    }

    /// Run `draw` with shape smoothing off when the scene is axis aligned.
    fn with_aligned_smoothing<R>(&mut self, draw: impl FnOnce(&mut Self) -> R) -> R {
        let previous = self.surface.anti_aliasing();
        let sharpen = self.matrix.is_axis_aligned() && previous.smooths_graphics();
        if sharpen {
            self.surface.set_anti_aliasing(previous.without_graphics());
        }
        let result = draw(self);
        if sharpen {
            self.surface.set_anti_aliasing(previous);
        }
        result
    }
}
