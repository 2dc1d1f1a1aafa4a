//! Data points handed to the strip renderers.

use chart3d_geometry::{Color, HotRegionOwner, Vec2, Vec3};

/// A data point positioned in the plot, ready for projection.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint3D {
    /// Ordinal of the point in its series; neighbours differ by one.
    pub index: usize,
    /// Position in plot pixels, before projection.
    pub x_position: f32,
    pub y_position: f32,
    pub series: String,
    /// Position of the point in the owning series.
    pub point_index: usize,
    /// X values are ordinal positions rather than real values.
    pub indexed_series: bool,
    pub color: Color,
}

impl DataPoint3D {
    pub fn new(series: impl Into<String>, index: usize, x_position: f32, y_position: f32) -> Self {
        Self {
            index,
            x_position,
            y_position,
            series: series.into(),
            point_index: index.saturating_sub(1),
            indexed_series: false,
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_indexed_series(mut self, indexed: bool) -> Self {
        self.indexed_series = indexed;
        self
    }

    /// Position in the plot plane.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x_position, self.y_position)
    }

    /// Model-space point at depth `z`.
    pub fn at_depth(&self, z: f32) -> Vec3 {
        Vec3::new(self.x_position, self.y_position, z)
    }

    /// Hot-region owner of this point.
    pub fn owner(&self) -> HotRegionOwner {
        HotRegionOwner::DataPoint {
            series: self.series.clone(),
            point_index: self.point_index,
        }
    }
}

/// Horizontal extent of the visible axis scale, in plot pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    pub min: f32,
    pub max: f32,
}

impl ViewRange {
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Inclusive containment with a small tolerance for rounding.
    pub fn contains(&self, x: f32) -> bool {
        const TOLERANCE: f32 = 1e-3;
        x >= self.min - TOLERANCE && x <= self.max + TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_owner_uses_zero_based_position() {
        let point = DataPoint3D::new("s1", 3, 10.0, 20.0);
        assert_eq!(
            point.owner(),
            HotRegionOwner::DataPoint {
                series: "s1".into(),
                point_index: 2
            }
        );
        assert_eq!(point.at_depth(5.0), Vec3::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn test_view_range_orders_bounds() {
        let range = ViewRange::new(100.0, 10.0);
        assert!(range.contains(10.0));
        assert!(range.contains(55.0));
        assert!(!range.contains(100.5));
    }
}
