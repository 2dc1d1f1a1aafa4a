//! Recording implementations of the drawing contracts.

use chart3d_geometry::{
    AntiAliasing, ChartElementKind, Color, DrawingSurface, HotRegionCollector, HotRegionOwner,
    Marker2D, Paint, Path, Stroke, Vec2,
};

/// Records a drawing call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill {
        path: Path,
        paint: Paint,
    },
    Stroke {
        path: Path,
        stroke: Stroke,
    },
    Marker {
        center: Vec2,
        marker: Marker2D,
    },
    SetAntiAliasing(AntiAliasing),
}

/// Drawing surface that only records what it is asked to draw.
///
/// An optional offset emulates the chart-relative to absolute conversion.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    anti_aliasing: AntiAliasing,
    offset: Vec2,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose absolute coordinates are shifted by `offset`.
    pub fn with_offset(offset: Vec2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of fill calls.
    pub fn count_fills(&self) -> usize {
        self.fills().count()
    }

    /// Number of stroke calls.
    pub fn count_strokes(&self) -> usize {
        self.strokes().count()
    }

    /// Number of flat marker calls.
    pub fn count_markers(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Marker { .. }))
            .count()
    }

    /// Filled paths with their paints.
    pub fn fills(&self) -> impl Iterator<Item = (&Path, &Paint)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Fill { path, paint } => Some((path, paint)),
            _ => None,
        })
    }

    /// Stroked paths with their strokes.
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &Stroke)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Stroke { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    /// Colors of solid fills, gradients skipped.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.fills()
            .filter_map(|(_, paint)| paint.as_solid())
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.calls.push(DrawCall::Fill {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.calls.push(DrawCall::Stroke {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_marker(&mut self, center: Vec2, marker: &Marker2D) {
        self.calls.push(DrawCall::Marker {
            center,
            marker: marker.clone(),
        });
    }

    fn anti_aliasing(&self) -> AntiAliasing {
        self.anti_aliasing
    }

    fn set_anti_aliasing(&mut self, mode: AntiAliasing) {
        self.anti_aliasing = mode;
        self.calls.push(DrawCall::SetAntiAliasing(mode));
    }

    fn to_absolute(&self, point: Vec2) -> Vec2 {
        point + self.offset
    }

    fn to_relative(&self, point: Vec2) -> Vec2 {
        point - self.offset
    }
}

/// One registered hot region.
#[derive(Debug, Clone, PartialEq)]
pub struct HotRegion {
    pub path: Path,
    pub kind: ChartElementKind,
    pub owner: HotRegionOwner,
}

/// Hot-region collector that keeps every region in order.
#[derive(Debug, Default)]
pub struct RecordingHotRegions {
    regions: Vec<HotRegion>,
}

impl RecordingHotRegions {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered regions in order.
    pub fn regions(&self) -> &[HotRegion] {
        &self.regions
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Tooltip texts of aggregate regions.
    pub fn tooltips(&self) -> Vec<&str> {
        self.regions
            .iter()
            .filter_map(|region| match &region.owner {
                HotRegionOwner::Tooltip { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl HotRegionCollector for RecordingHotRegions {
    fn add_path(&mut self, path: &Path, kind: ChartElementKind, owner: &HotRegionOwner) {
        self.regions.push(HotRegion {
            path: path.clone(),
            kind,
            owner: owner.clone(),
        });
    }
}
