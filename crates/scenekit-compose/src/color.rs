// Imports
use serde::{Deserialize, Serialize};

/// A rgba color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename = "color")]
pub struct Color {
    /// Red, ranging [0, 255].
    #[serde(rename = "r")]
    pub r: u8,
    /// Green, ranging [0, 255].
    #[serde(rename = "g")]
    pub g: u8,
    /// Blue, ranging [0, 255].
    #[serde(rename = "b")]
    pub b: u8,
    /// Alpha, ranging [0, 255].
    #[serde(rename = "a")]
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Transparent color with r,g,b set to 0.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Black color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Red color.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Green color.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Blue color.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Yellow color.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Magenta color.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Cyan color.
    pub const CYAN: Self = Self::rgb(0, 255, 255);

    /// The primary default shape color.
    pub const SHAPE_PRIMARY: Self = Self::rgb(50, 170, 230);
    /// The secondary default shape color.
    pub const SHAPE_SECONDARY: Self = Self::rgb(160, 50, 100);
    /// The tertiary default shape color.
    pub const SHAPE_TERTIARY: Self = Self::rgb(160, 160, 160);
    /// The default background color.
    pub const BACKGROUND: Self = Self::rgb(250, 250, 250);

    /// A new opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// A new color from rgba values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A new opaque color from float channels. The channels are clamped to [0.0, 255.0] and truncated.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(channel_from_f64(r), channel_from_f64(g), channel_from_f64(b))
    }

    /// The r, g, b channels as floats.
    pub fn rgb_f64(&self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Replace the r, g, b channels with the given float values, clamped to [0.0, 255.0] and truncated.
    ///
    /// Alpha is not touched.
    pub fn set_rgb_f64(&mut self, [r, g, b]: [f64; 3]) {
        self.r = channel_from_f64(r);
        self.g = channel_from_f64(g);
        self.b = channel_from_f64(b);
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors. `t` is clamped to [0.0, 1.0].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| channel_from_f64(f64::from(a) + (f64::from(b) - f64::from(a)) * t);

        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// The luma value, ranging [0.0 - 1.0].
    ///
    /// see: <https://en.wikipedia.org/wiki/Luma_(video)>
    pub fn luma(&self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }

    /// The rainbow color stops with the given channel brightness.
    pub fn rainbow(brightness: u8) -> [Self; 7] {
        let v = brightness;
        [
            Self::rgb(v, 0, 0),
            Self::rgb(v, v, 0),
            Self::rgb(0, v, 0),
            Self::rgb(0, v, v),
            Self::rgb(0, 0, v),
            Self::rgb(v, 0, v),
            Self::rgb(v, 0, 0),
        ]
    }
}

/// Sample `steps` colors evenly along the transitions between consecutive color stops.
///
/// The first sample is the first stop, the last sample the last stop.
/// A single stop is repeated, no stops produce an empty vector.
pub fn gradient(stops: &[Color], steps: usize) -> Vec<Color> {
    match (stops, steps) {
        ([], _) | (_, 0) => Vec::new(),
        ([single], _) => vec![*single; steps],
        (_, 1) => vec![stops[0]],
        _ => {
            let segments = (stops.len() - 1) as f64;

            (0..steps)
                .map(|i| {
                    let pos = i as f64 / (steps - 1) as f64 * segments;
                    let segment = (pos.floor() as usize).min(stops.len() - 2);

                    stops[segment].lerp(stops[segment + 1], pos - segment as f64)
                })
                .collect()
        }
    }
}

fn channel_from_f64(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

impl From<Color> for piet::Color {
    fn from(color: Color) -> Self {
        piet::Color::rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<piet::Color> for Color {
    fn from(color: piet::Color) -> Self {
        let (r, g, b, a) = color.as_rgba8();
        Self::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
