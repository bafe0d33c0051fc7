//! Color sampling and conversion.
//!
//! The clock's foreground color is a binary light/dark decision derived
//! from the configured display color: bright backgrounds get black text,
//! dark backgrounds get white text. The decision uses the YIQ luma
//! weighting, thresholded at the midpoint.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pure black, the foreground used over light backgrounds.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pure white, the foreground used over dark backgrounds.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

impl Rgb {
    /// Creates a color from individual channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a packed `AARRGGBB` hex color setting, discarding the alpha
    /// channel.
    ///
    /// Settings collaborators hand colors over in this packed string form.
    /// The string is assumed pre-validated; `None` is returned for inputs
    /// that are not eight hex digits rather than guessing at intent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clockspan::Rgb;
    ///
    /// assert_eq!(Rgb::from_argb_hex("ff336699"), Some(Rgb::new(0x33, 0x66, 0x99)));
    /// assert_eq!(Rgb::from_argb_hex("nonsense"), None);
    /// ```
    pub fn from_argb_hex(s: &str) -> Option<Self> {
        if s.len() != 8 || !s.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&s[range], 16).ok();
        Some(Self {
            r: channel(2..4)?,
            g: channel(4..6)?,
            b: channel(6..8)?,
        })
    }
}

/// The two foreground tones the sampler can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// White text, for dark backgrounds.
    Light,
    /// Black text, for light backgrounds.
    Dark,
}

impl ColorMode {
    /// The concrete foreground color for this mode.
    pub fn foreground(self) -> Rgb {
        match self {
            ColorMode::Light => WHITE,
            ColorMode::Dark => BLACK,
        }
    }
}

/// Weighted-average brightness of a color, 0–255.
///
/// Uses the YIQ weights (299/587/114) with integer arithmetic; the full
/// input domain maps onto 0–255 exactly.
pub fn luma(color: Rgb) -> u8 {
    let weighted =
        299 * u32::from(color.r) + 587 * u32::from(color.g) + 114 * u32::from(color.b);
    (weighted / 1000) as u8
}

/// Samples the foreground tone for text drawn over `background`.
///
/// Backgrounds at or above the luma midpoint (128) read as light and get
/// [`ColorMode::Dark`] text; everything below gets [`ColorMode::Light`].
///
/// # Example
///
/// ```rust
/// use clockspan::{color, ColorMode, Rgb};
///
/// assert_eq!(color::sample(Rgb::new(0, 0, 0)), ColorMode::Light);
/// assert_eq!(color::sample(Rgb::new(255, 255, 255)), ColorMode::Dark);
/// ```
pub fn sample(background: Rgb) -> ColorMode {
    if luma(background) >= 128 {
        ColorMode::Dark
    } else {
        ColorMode::Light
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grayscale values map onto the 24-step gray ramp; everything else maps
/// onto the 6x6x6 color cube.
pub fn rgb_to_ansi256(color: Rgb) -> u8 {
    let Rgb { r, g, b } = color;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((u16::from(r) - 8) * 24 / 247) as u8
        }
    } else {
        let red = (u16::from(r) * 5 / 255) as u8;
        let green = (u16::from(g) * 5 / 255) as u8;
        let blue = (u16::from(b) * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
