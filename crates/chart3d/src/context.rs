//! State carried between consecutive renderer calls of one scene.
//!
//! Each value belongs to exactly one connected strip or one cylinder and
//! must be passed to the calls in drawing order. Sharing a context between
//! unrelated geometry gives wrong seams or caps.

use crate::CapTangents;
use chart3d_geometry::{DrawingSurface, Stroke, Vec2};

const ENDPOINT_TOLERANCE: f32 = 1e-3;

/// Front edge of the last strip, waiting to be redrawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdge {
    pub start: Vec2,
    pub end: Vec2,
    pub stroke: Stroke,
}

impl PendingEdge {
    /// Whether the two edges touch at any endpoint, in either order.
    pub fn shares_endpoint(&self, other: &PendingEdge) -> bool {
        let close = |a: Vec2, b: Vec2| a.distance(b) <= ENDPOINT_TOLERANCE;
        close(self.start, other.start)
            || close(self.start, other.end)
            || close(self.end, other.start)
            || close(self.end, other.end)
    }

    fn draw(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_line(self.start, self.end, &self.stroke);
    }
}

/// Seam suppression between adjacent strips.
///
/// Only used when the scene has no perspective.
#[derive(Debug, Default)]
pub struct StripRenderContext {
    pending: Option<PendingEdge>,
}

impl StripRenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge currently cached.
    pub fn pending(&self) -> Option<&PendingEdge> {
        self.pending.as_ref()
    }

    /// Cache the just-drawn `edge`, first redrawing the previous one over the
    /// newly painted strip when the two do not touch.
    pub fn exchange(&mut self, edge: PendingEdge, surface: &mut dyn DrawingSurface) {
        if let Some(previous) = self.pending.take()
            && !previous.shares_endpoint(&edge)
        {
            tracing::trace!("redrawing detached strip edge");
            previous.draw(surface);
        }
        self.pending = Some(edge);
    }

    /// Redraw the last cached edge. Call once a series is complete.
    pub fn flush(&mut self, surface: &mut dyn DrawingSurface) {
        if let Some(edge) = self.pending.take() {
            edge.draw(surface);
        }
    }

    /// Forget the cached edge without drawing it.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CapKey {
    near_len: usize,
    far_len: usize,
    near_first: Vec2,
    far_first: Vec2,
}

impl CapKey {
    fn new(near: &[Vec2], far: &[Vec2]) -> Self {
        Self {
            near_len: near.len(),
            far_len: far.len(),
            near_first: near.first().copied().unwrap_or(Vec2::NAN),
            far_first: far.first().copied().unwrap_or(Vec2::NAN),
        }
    }
}

/// Tangent points of the last cylinder, reused for its second cap.
#[derive(Debug, Default)]
pub struct CylinderCapCache {
    entry: Option<(CapKey, CapTangents)>,
    hits: usize,
}

impl CylinderCapCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached tangents for this pair of cap outlines, computing them on a miss.
    pub fn get_or_compute(
        &mut self,
        near: &[Vec2],
        far: &[Vec2],
        compute: impl FnOnce() -> CapTangents,
    ) -> CapTangents {
        let key = CapKey::new(near, far);
        if let Some((cached_key, tangents)) = &self.entry
            && *cached_key == key
        {
            self.hits += 1;
            tracing::trace!("cylinder tangent cache hit");
            return *tangents;
        }
        let tangents = compute();
        self.entry = Some((key, tangents));
        tangents
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
