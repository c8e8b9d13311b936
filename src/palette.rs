//! The fixed series palette.

use std::fmt;
use std::str::FromStr;

/// Predefined palette, in cycle order.
pub const PALETTE: [&str; 9] = [
    "#386cb0", // Blue
    "#fdb462", // Light orange
    "#7fc97f", // Light green
    "#ef3b2c", // Red
    "#662506", // Dark brown
    "#a6cee3", // Light blue
    "#fb9a99", // Pink
    "#984ea3", // Purple
    "#ffff33", // Yellow
];

/// Return the first `num_colors` entries of [`PALETTE`].
///
/// Counts of zero or below give an empty list and counts above the palette
/// size give the whole palette.
pub fn colour_palette(num_colors: i64) -> Vec<&'static str> {
    let count = num_colors.clamp(0, PALETTE.len() as i64) as usize;
    PALETTE[..count].to_vec()
}

/// The full palette.
pub fn default_palette() -> Vec<&'static str> {
    colour_palette(PALETTE.len() as i64)
}

/// Same prefix as [`colour_palette`], parsed into colors.
pub fn palette_colors(num_colors: i64) -> Vec<HexColor> {
    colour_palette(num_colors)
        .into_iter()
        .filter_map(HexColor::from_hex)
        .collect()
}

/// An RGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("invalid hex color: {s}"))
    }
}

impl From<HexColor> for plotters::style::RGBColor {
    fn from(c: HexColor) -> Self {
        plotters::style::RGBColor(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_lengths() {
        for (n, len) in [(0, 0), (1, 1), (5, 5), (9, 9), (20, 9)] {
            let colors = colour_palette(n);
            assert_eq!(colors.len(), len, "n = {n}");
            assert_eq!(colors.as_slice(), &PALETTE[..len]);
        }
    }

    #[test]
    fn negative_count_is_empty() {
        assert!(colour_palette(-3).is_empty());
    }

    #[test]
    fn first_colour_is_blue() {
        assert_eq!(colour_palette(1), vec!["#386cb0"]);
        assert_eq!(default_palette()[0], "#386cb0");
    }

    #[test]
    fn default_is_full_palette() {
        assert_eq!(default_palette(), PALETTE.to_vec());
    }

    #[test]
    fn every_entry_parses() {
        let colors = palette_colors(9);
        assert_eq!(colors.len(), 9);
        assert_eq!(colors[0], HexColor::rgb(0x38, 0x6c, 0xb0));
        assert_eq!(colors[8].to_string(), "#ffff33");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(HexColor::from_hex("#12345"), None);
        assert_eq!(HexColor::from_hex("#gggggg"), None);
        assert!("f0f0f0".parse::<HexColor>().is_ok());
    }
}
