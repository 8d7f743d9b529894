//! Colors and the fixed palette used by graph windows.
//!
//! Colors are stored with 16 bits per channel, the native representation of
//! the render target. Collector colors arrive from the monitor as unit
//! floats and are converted by truncation.

/// An RGB color with 16-bit fixed-point channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
}

impl Color {
    /// Create a new color from fixed-point channels.
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Background fill for freshly created backing bitmaps.
    pub const WHITE: Self = Self::new(0xffff, 0xffff, 0xffff);
    /// Light gray, used for frame chrome.
    pub const LIGHT_GRAY: Self = Self::new(0x9a9a, 0x9a9a, 0x9a9a);
    /// Dark gray, used for frame chrome.
    pub const DARK_GRAY: Self = Self::new(0x3333, 0x3333, 0x3333);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0x0000, 0x0000, 0x0000);
    /// Highlight for user-placed guide bars.
    pub const USER_GUIDE_BAR: Self = Self::new(0x8282, 0x9696, 0xffff);

    /// Convert a unit-float RGB triple into fixed point.
    ///
    /// Channels are multiplied by 65535 and truncated; out-of-range inputs
    /// are clamped to the unit interval first.
    pub fn from_unit(rgb: Rgb) -> Self {
        Self {
            r: unit_to_channel(rgb.r),
            g: unit_to_channel(rgb.g),
            b: unit_to_channel(rgb.b),
        }
    }
}

/// An RGB color with unit-float channels, as reported by the monitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel in `0.0..=1.0`.
    pub r: f32,
    /// Green channel in `0.0..=1.0`.
    pub g: f32,
    /// Blue channel in `0.0..=1.0`.
    pub b: f32,
}

impl Rgb {
    /// Create a new unit-float color.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

fn unit_to_channel(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0) as u16
}
