//! Scene and primitive styling.
//!
//! Provides the configuration consumed by the renderers:
//! - Scene rotation, perspective and lighting policy
//! - Borders shared by every filled primitive
//! - Per-primitive styles for boxes, strips, pie slices and markers

use crate::{Error, Result};
use chart3d_geometry::{Color, DashStyle, HotRegionOwner, MarkerShape, Stroke};

/// How faces are shaded from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightStyle {
    /// Every face keeps the base color.
    None,
    /// Fixed darkening per face direction.
    #[default]
    Simplistic,
    /// Shade from the angle between the face normal and the light.
    Realistic,
}

/// Rotation, perspective and lighting of a chart area.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    /// Rotation about the X axis in degrees, in [-90, 90].
    pub inclination: f32,
    /// Rotation about the Y axis in degrees, in [-180, 180].
    pub rotation: f32,
    /// Rotation of the whole scene about the view axis in degrees.
    pub scene_roll: f32,
    /// Perspective strength in [0, 1].
    pub perspective: f32,
    pub light_style: LightStyle,
    /// Oblique projection instead of a true rotation.
    pub right_angle_axes: bool,
    /// Scale the rotated plot cube so it fits the plot rectangle.
    pub fit_to_area: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            inclination: 30.0,
            rotation: 30.0,
            scene_roll: 0.0,
            perspective: 0.0,
            light_style: LightStyle::Simplistic,
            right_angle_axes: false,
            fit_to_area: true,
        }
    }
}

impl SceneStyle {
    /// Scene without any rotation.
    pub fn flat() -> Self {
        Self {
            inclination: 0.0,
            rotation: 0.0,
            ..Self::default()
        }
    }

    /// Set the X rotation, clamped to [-90, 90].
    pub fn with_inclination(mut self, degrees: f32) -> Self {
        self.inclination = degrees.clamp(-90.0, 90.0);
        self
    }

    /// Set the Y rotation, clamped to [-180, 180].
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees.clamp(-180.0, 180.0);
        self
    }

    /// Set the scene roll.
    pub fn with_scene_roll(mut self, degrees: f32) -> Self {
        self.scene_roll = degrees;
        self
    }

    /// Set the perspective strength, clamped to [0, 1].
    pub fn with_perspective(mut self, perspective: f32) -> Self {
        self.perspective = perspective.clamp(0.0, 1.0);
        self
    }

    /// Set the light style.
    pub fn with_light_style(mut self, light_style: LightStyle) -> Self {
        self.light_style = light_style;
        self
    }

    /// Use an oblique projection.
    pub fn with_right_angle_axes(mut self, right_angle_axes: bool) -> Self {
        self.right_angle_axes = right_angle_axes;
        self
    }

    /// Enable or disable fitting the scene into the plot rectangle.
    pub fn with_fit_to_area(mut self, fit_to_area: bool) -> Self {
        self.fit_to_area = fit_to_area;
        self
    }
}

/// Outline of a filled primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    /// Explicit color; faces use a darkened fill color when unset.
    pub color: Option<Color>,
    pub width: f32,
    pub dash: DashStyle,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            color: None,
            width: 1.0,
            dash: DashStyle::Solid,
        }
    }
}

impl Border {
    /// Border with an explicit color.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color: Some(color),
            width,
            dash: DashStyle::Solid,
        }
    }

    /// No outline at all.
    pub fn none() -> Self {
        Self {
            color: None,
            width: 0.0,
            dash: DashStyle::NotSet,
        }
    }

    /// Whether an explicit border was requested.
    pub fn is_explicit(&self) -> bool {
        self.color.is_some() && self.width > 0.0 && self.dash != DashStyle::NotSet
    }

    /// Stroke for a face filled with `fill`, `None` when nothing is drawn.
    pub fn resolve(&self, fill: Color) -> Option<Stroke> {
        if self.width <= 0.0 || self.dash == DashStyle::NotSet {
            return None;
        }
        let color = self.color.unwrap_or_else(|| fill.darken(0.25));
        Some(Stroke::solid(color, self.width).with_dash(self.dash))
    }
}

/// Direction bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Bar finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarDrawingStyle {
    #[default]
    Default,
    Cylinder,
    Emboss,
    LightToDark,
    Wedge,
}

/// Style of a box (bar, cube marker, wall).
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub color: Color,
    pub border: Border,
    pub orientation: BarOrientation,
    pub bar_style: BarDrawingStyle,
    /// Extra darkening of the side faces along the bar direction.
    pub side_darkening: f32,
    pub reverse_series_order: bool,
    /// Owner registered with the hot-region collector.
    pub owner: Option<HotRegionOwner>,
}

impl BoxStyle {
    /// Plain box in one color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            border: Border::default(),
            orientation: BarOrientation::Vertical,
            bar_style: BarDrawingStyle::Default,
            side_darkening: 0.0,
            reverse_series_order: false,
            owner: None,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_bar_style(mut self, bar_style: BarDrawingStyle) -> Self {
        self.bar_style = bar_style;
        self
    }

    pub fn with_side_darkening(mut self, amount: f32) -> Self {
        self.side_darkening = amount.clamp(0.0, 1.0);
        self
    }

    pub fn with_owner(mut self, owner: HotRegionOwner) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Border strategy of line and area strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripBorderMode {
    /// Thin outline along the data edges only.
    #[default]
    Default,
    /// Border on all four edges of every face.
    Thick,
    /// Thin outline, end caps only on the first and last segment.
    Thin,
}

/// Style of a line, spline or area strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripStyle {
    pub color: Color,
    pub border: Border,
    pub border_mode: StripBorderMode,
    /// Vertical thickness of the strip; 0 draws a flat ribbon.
    pub thickness: f32,
    /// Cardinal spline tension; 0 connects the points straight.
    pub tension: f32,
    /// Clip against the plot area's top and bottom.
    pub clip: bool,
    pub reverse_series_order: bool,
}

impl StripStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            border: Border::none(),
            border_mode: StripBorderMode::Default,
            thickness: 0.0,
            tension: 0.0,
            clip: true,
            reverse_series_order: false,
        }
    }

    pub fn with_border(mut self, border: Border, mode: StripBorderMode) -> Self {
        self.border = border;
        self.border_mode = mode;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness.max(0.0);
        self
    }

    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension.max(0.0);
        self
    }

    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_reverse_series_order(mut self, reverse: bool) -> Self {
        self.reverse_series_order = reverse;
        self
    }

    /// Color of pieces flattened onto a clip boundary.
    pub fn cut_color(&self) -> Color {
        self.color.darken(0.3)
    }
}

/// Aggregate pie slice standing for several small values.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedSlice {
    /// Tooltip with `#VALY`, `#PERCENT`, `#LABEL` and `#SERIESNAME` keywords.
    pub tooltip: String,
    pub value: f64,
    /// Share of the whole pie in [0, 1].
    pub percent: f64,
    pub label: String,
    pub series_name: String,
}

impl CollectedSlice {
    /// Tooltip with its keywords replaced.
    pub fn tooltip_text(&self) -> String {
        self.tooltip
            .replace("#SERIESNAME", &self.series_name)
            .replace("#LABEL", &self.label)
            .replace("#PERCENT", &format!("{:.2}%", self.percent * 100.0))
            .replace("#VALY", &format_value(self.value))
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Style of a pie or doughnut slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieStyle {
    pub color: Color,
    pub border: Border,
    pub owner: Option<HotRegionOwner>,
    /// Set for an aggregate slice; replaces the owner in hot regions.
    pub collected: Option<CollectedSlice>,
}

impl PieStyle {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            border: Border::default(),
            owner: None,
            collected: None,
        }
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_owner(mut self, owner: HotRegionOwner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_collected(mut self, collected: CollectedSlice) -> Self {
        self.collected = Some(collected);
        self
    }

    /// Owner registered for hot regions of this slice.
    pub fn hot_region_owner(&self) -> Option<HotRegionOwner> {
        match &self.collected {
            Some(collected) => Some(HotRegionOwner::Tooltip {
                text: collected.tooltip_text(),
            }),
            None => self.owner.clone(),
        }
    }
}

/// Shadow under a disc marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MarkerShadow {
    #[default]
    None,
    /// Gradient shadow fading out.
    Soft { offset: f32, color: Color },
    /// Flat offset copy.
    Hard { offset: f32, color: Color },
}

/// Style of a 3D marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle3D {
    pub shape: MarkerShape,
    /// Diameter in pixels.
    pub size: f32,
    pub color: Color,
    pub border: Border,
    pub image: Option<String>,
    pub shadow: MarkerShadow,
    pub owner: Option<HotRegionOwner>,
}

impl MarkerStyle3D {
    pub fn new(shape: MarkerShape, size: f32, color: Color) -> Self {
        Self {
            shape,
            size,
            color,
            border: Border::default(),
            image: None,
            shadow: MarkerShadow::None,
            owner: None,
        }
    }

    /// Style from a numeric marker code.
    pub fn from_code(code: u8, size: f32, color: Color) -> Result<Self> {
        let shape = MarkerShape::from_code(code).ok_or(Error::UnknownMarkerStyle(code))?;
        Ok(Self::new(shape, size, color))
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_shadow(mut self, shadow: MarkerShadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_owner(mut self, owner: HotRegionOwner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Whether the shape has a real 3D rendition.
    pub fn is_solid(&self) -> bool {
        self.image.is_none() && matches!(self.shape, MarkerShape::Circle | MarkerShape::Square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_builders_clamp() {
        let style = SceneStyle::default()
            .with_inclination(120.0)
            .with_rotation(-200.0)
            .with_perspective(2.0);

        assert_eq!(style.inclination, 90.0);
        assert_eq!(style.rotation, -180.0);
        assert_eq!(style.perspective, 1.0);
    }

    #[test]
    fn test_border_defaults_to_darker_fill() {
        let stroke = Border::default().resolve(Color::WHITE).unwrap();
        assert_eq!(stroke.color, Color::WHITE.darken(0.25));
        assert!(Border::none().resolve(Color::WHITE).is_none());
        assert!(!Border::default().is_explicit());
        assert!(Border::solid(Color::BLACK, 1.0).is_explicit());
    }

    #[test]
    fn test_collected_tooltip_keywords() {
        let collected = CollectedSlice {
            tooltip: "#LABEL (#SERIESNAME): #VALY = #PERCENT".into(),
            value: 42.0,
            percent: 0.125,
            label: "Other".into(),
            series_name: "Sales".into(),
        };

        assert_eq!(collected.tooltip_text(), "Other (Sales): 42 = 12.50%");
    }

    #[test]
    fn test_collected_slice_replaces_owner() {
        let style = PieStyle::new(Color::RED)
            .with_owner(HotRegionOwner::DataPoint {
                series: "s".into(),
                point_index: 1,
            })
            .with_collected(CollectedSlice {
                tooltip: "#VALY".into(),
                value: 1.5,
                percent: 0.0,
                label: String::new(),
                series_name: String::new(),
            });

        assert_eq!(
            style.hot_region_owner(),
            Some(HotRegionOwner::Tooltip { text: "1.5".into() })
        );
    }

    #[test]
    fn test_marker_codes() {
        assert!(MarkerStyle3D::from_code(2, 8.0, Color::RED).unwrap().is_solid());
        assert_eq!(
            MarkerStyle3D::from_code(77, 8.0, Color::RED),
            Err(Error::UnknownMarkerStyle(77))
        );
        assert!(!MarkerStyle3D::from_code(3, 8.0, Color::RED).unwrap().is_solid());
    }
}
