/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// ```
/// use chart3d_geometry::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let shaded = red.darken(0.25);
/// assert!(shaded.r < red.r);
/// assert_eq!(shaded.a, 1.0);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod` so color
/// tables can be handed to a backend as raw bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values.
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0x4682B4`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// True when the color fully covers what is below it.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// True when nothing of the color is visible.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Linearly interpolate all four channels.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Move the RGB channels toward `target` by `amount`, keeping alpha.
    pub fn blend_rgb(self, target: Color, amount: f32) -> Color {
        self.lerp(target, amount).with_alpha(self.a)
    }

    /// Move toward black by `amount` (0 = unchanged, 1 = black).
    pub fn darken(self, amount: f32) -> Color {
        self.blend_rgb(Color::BLACK, amount)
    }

    /// Move toward white by `amount` (0 = unchanged, 1 = white).
    pub fn lighten(self, amount: f32) -> Color {
        self.blend_rgb(Color::WHITE, amount)
    }

    /// Shade along a white → color → black ramp.
    ///
    /// `position` 0.5 returns the color itself; smaller values move toward
    /// white, larger toward black. Values above 1.5 are black.
    pub fn bright_gradient(self, position: f32) -> Color {
        const BRIGHT_POINT: f32 = 0.5;

        if position < BRIGHT_POINT {
            Color::WHITE
                .with_alpha(self.a)
                .blend_rgb(self, 1.0 - BRIGHT_POINT + position)
        } else if position - BRIGHT_POINT < 1.0 {
            self.darken(position - BRIGHT_POINT)
        } else {
            Color::BLACK.with_alpha(self.a)
        }
    }

    /// Convert to an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(arr: [f32; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}
