//! # Color Math
//!
//! Hex parsing and brightness scaling for stitch shading.

use std::fmt;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb` (either case).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Scales every channel by `factor`, rounding and clamping to `[0, 255]`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(
            scale_channel(self.r, factor),
            scale_channel(self.g, factor),
            scale_channel(self.b, factor),
        )
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, factor: f64) -> u8 {
    (f64::from(value) * factor).round().clamp(0.0, 255.0) as u8
}

/// Scales a hex color's brightness. Unparseable input is returned unchanged.
#[must_use]
pub fn adjust_brightness(hex: &str, factor: f64) -> String {
    Rgb::from_hex(hex).map_or_else(|| hex.to_owned(), |rgb| rgb.scaled(factor).to_hex())
}

/// The four derived tones drawn on every stitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchShades {
    /// Left-curve fill (x1.28).
    pub highlight: String,
    /// Right-curve fill (x0.70).
    pub shadow: String,
    /// Top strip and bottom ellipse (x0.52).
    pub deep_shadow: String,
    /// Diagonal stroke (highlight x1.12).
    pub bright_highlight: String,
}

impl StitchShades {
    /// Highlight multiplier.
    pub const HIGHLIGHT: f64 = 1.28;
    /// Shadow multiplier.
    pub const SHADOW: f64 = 0.70;
    /// Deep shadow multiplier.
    pub const DEEP_SHADOW: f64 = 0.52;
    /// Multiplier applied on top of the highlight.
    pub const BRIGHT: f64 = 1.12;

    /// Derives all shades for a base color.
    #[must_use]
    pub fn for_base(base: &str) -> Self {
        let highlight = adjust_brightness(base, Self::HIGHLIGHT);
        let bright_highlight = adjust_brightness(&highlight, Self::BRIGHT);
        Self {
            shadow: adjust_brightness(base, Self::SHADOW),
            deep_shadow: adjust_brightness(base, Self::DEEP_SHADOW),
            highlight,
            bright_highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::from_hex("#1a2a3a"), Some(Rgb::new(0x1a, 0x2a, 0x3a)));
        assert_eq!(Rgb::from_hex("D4E5ED"), Some(Rgb::new(0xd4, 0xe5, 0xed)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_brightness_reference_values() {
        assert_eq!(adjust_brightness("#1a2a3a", 1.28), "#21364a");
        assert_eq!(adjust_brightness("#d4e5ed", 1.28), "#ffffff");
        assert_eq!(adjust_brightness("#d4e5ed", 0.7), "#94a0a6");
    }

    #[test]
    fn test_bright_highlight_chains_from_highlight() {
        let shades = StitchShades::for_base("#89b4c8");
        assert_eq!(shades.bright_highlight, "#c4ffff");
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(adjust_brightness("#000000", 1.28), "#000000");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(adjust_brightness("teal", 0.5), "teal");
    }
}
