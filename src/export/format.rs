//! Output formats and figure encoding.

use super::crop::tight_crop;
use crate::error::{PlotThemeError, Result};
use crate::plot::Chart;
use crate::theme::ThemeSettings;
use image::{ImageFormat, Rgb};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

/// Padding kept around content by tight cropping, in inches.
pub const TIGHT_PAD_INCHES: f64 = 0.1;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG.
    Jpeg,
    /// Windows bitmap.
    Bmp,
    /// Scalable Vector Graphics.
    Svg,
}

impl FileFormat {
    /// Codec for raster formats, `None` for vector ones.
    pub fn raster(self) -> Option<ImageFormat> {
        match self {
            Self::Png => Some(ImageFormat::Png),
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::Svg => None,
        }
    }

    /// Canonical extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Svg => "svg",
        }
    }
}

impl FromStr for FileFormat {
    type Err = PlotThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            _ => Err(PlotThemeError::unsupported_format(s)),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode `chart` in `format`. Raster output is cropped to content.
pub fn render(chart: &Chart, theme: &ThemeSettings, format: FileFormat, dpi: u32) -> Result<Vec<u8>> {
    let Some(codec) = format.raster() else {
        return Ok(chart.render_svg(theme)?.into_bytes());
    };

    let full = chart.render_raster(theme, dpi)?;
    let pad = (TIGHT_PAD_INCHES * f64::from(dpi)).round() as u32;
    let cropped = tight_crop(&full, Rgb([255, 255, 255]), pad);
    tracing::debug!(
        full = ?full.dimensions(),
        cropped = ?cropped.dimensions(),
        %format,
        "encoding figure"
    );

    let mut out = Cursor::new(Vec::new());
    cropped.write_to(&mut out, codec)?;
    Ok(out.into_inner())
}
