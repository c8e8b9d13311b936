//! Theme settings applied to every figure drawn through a [`PlotContext`].
//!
//! [`configure_theme`] builds the settings in three layers: a named style
//! preset, a base theme (style variant, font, palette) and a fixed set of
//! display overrides.
//!
//! [`PlotContext`]: crate::context::PlotContext

use crate::palette::{default_palette, HexColor};
use serde::{Deserialize, Serialize};

/// Grid line color used by the overrides.
pub const GRID_COLOR: &str = "#f0f0f0";

/// Font family used by the base theme.
pub const FONT_FAMILY: &str = "Segoe UI";

/// Named style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    /// Plain defaults.
    #[default]
    Classic,
    /// Tableau's colorblind-safe ten color set.
    TableauColorblind10,
}

impl StylePreset {
    /// Preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::TableauColorblind10 => "tableau-colorblind10",
        }
    }

    /// Color cycle installed by the preset.
    pub fn color_cycle(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"],
            Self::TableauColorblind10 => &[
                "#006ba4", "#ff800e", "#ababab", "#595959", "#5f9ed1", "#c85200", "#898989",
                "#a2c8ec", "#ffbc79", "#cfcfcf",
            ],
        }
    }
}

/// Base theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseStyle {
    /// White background, no grid.
    #[default]
    White,
    /// White background with outward ticks.
    Ticks,
    /// White background with grid.
    Whitegrid,
}

impl BaseStyle {
    /// Variant name.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Ticks => "ticks",
            Self::Whitegrid => "whitegrid",
        }
    }

    /// Whether the variant turns the grid on.
    pub fn grid(self) -> bool {
        matches!(self, Self::Whitegrid)
    }
}

/// Font weight for labels and titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendLocation {
    /// Pick the corner that covers the fewest data points.
    #[default]
    Best,
    /// Top right corner.
    UpperRight,
    /// Top left corner.
    UpperLeft,
    /// Bottom left corner.
    LowerLeft,
    /// Bottom right corner.
    LowerRight,
}

/// Which plot borders are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpineSettings {
    /// Top border.
    pub top: bool,
    /// Right border.
    pub right: bool,
    /// Bottom border.
    pub bottom: bool,
    /// Left border.
    pub left: bool,
}

impl Default for SpineSettings {
    fn default() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

/// Legend settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSettings {
    /// Placement.
    pub location: LegendLocation,
    /// Draw a frame around the legend.
    pub frame: bool,
    /// Font size in points.
    pub font_size: f64,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            location: LegendLocation::Best,
            frame: true,
            font_size: 10.0,
        }
    }
}

/// Complete set of display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Style preset applied first.
    pub style: StylePreset,
    /// Base theme variant.
    pub base_style: BaseStyle,
    /// Font family for all text.
    pub font_family: String,
    /// Multiplier for every font size.
    pub font_scale: f64,
    /// Series color cycle as hex strings.
    pub palette: Vec<String>,
    /// Bottom margin as a fraction of figure height.
    pub subplot_bottom: f64,
    /// Figure (width, height) in inches.
    pub figure_size: (f64, f64),
    /// Axis label weight.
    pub label_weight: FontWeight,
    /// Axes title weight.
    pub title_weight: FontWeight,
    /// Axes title size in points.
    pub title_size: f64,
    /// Figure-level title size in points.
    pub figure_title_size: f64,
    /// Axis label size in points.
    pub label_size: f64,
    /// Show grid lines.
    pub grid: bool,
    /// Grid line color.
    pub grid_color: String,
    /// Drawn borders.
    pub spines: SpineSettings,
    /// Legend settings.
    pub legend: LegendSettings,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            style: StylePreset::Classic,
            base_style: BaseStyle::White,
            font_family: "sans-serif".to_string(),
            font_scale: 1.0,
            palette: strings(StylePreset::Classic.color_cycle()),
            subplot_bottom: 0.11,
            figure_size: (6.4, 4.8),
            label_weight: FontWeight::Normal,
            title_weight: FontWeight::Normal,
            title_size: 12.0,
            figure_title_size: 12.0,
            label_size: 10.0,
            grid: false,
            grid_color: "#b0b0b0".to_string(),
            spines: SpineSettings::default(),
            legend: LegendSettings::default(),
        }
    }
}

impl ThemeSettings {
    /// Install a style preset and its color cycle.
    pub fn apply_style(&mut self, style: StylePreset) {
        self.style = style;
        self.palette = strings(style.color_cycle());
    }

    /// Install the base theme: variant, font, scale and color cycle.
    pub fn apply_base(&mut self, base: BaseStyle, font: &str, font_scale: f64, palette: &[&str]) {
        self.base_style = base;
        self.grid = base.grid();
        self.font_family = font.to_string();
        self.font_scale = font_scale;
        self.palette = strings(palette);
    }

    /// Font size after scaling.
    pub fn scaled(&self, points: f64) -> f64 {
        points * self.font_scale
    }

    /// Palette parsed into colors, skipping malformed entries.
    pub fn palette_colors(&self) -> Vec<HexColor> {
        self.palette
            .iter()
            .filter_map(|hex| HexColor::from_hex(hex))
            .collect()
    }

    /// Parsed grid color.
    pub fn grid_rgb(&self) -> HexColor {
        HexColor::from_hex(&self.grid_color).unwrap_or(HexColor::rgb(0xf0, 0xf0, 0xf0))
    }

    /// Color for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> HexColor {
        let colors = self.palette_colors();
        if colors.is_empty() {
            return HexColor::rgb(0, 0, 0);
        }
        colors[index % colors.len()]
    }
}

/// Build the configured theme.
pub fn configure_theme(grid_set: bool) -> ThemeSettings {
    let mut theme = ThemeSettings::default();

    theme.apply_style(StylePreset::TableauColorblind10);
    theme.apply_base(BaseStyle::Ticks, FONT_FAMILY, 1.0, &default_palette());

    theme.subplot_bottom = 0.2;
    theme.figure_size = (6.0, 4.0);
    theme.label_weight = FontWeight::Bold;
    theme.title_weight = FontWeight::Bold;
    theme.title_size = 18.0;
    theme.figure_title_size = 12.0;

    theme.grid = grid_set;
    theme.grid_color = GRID_COLOR.to_string();

    theme.spines.top = false;
    theme.spines.right = false;
    theme.spines.bottom = true;

    theme.legend = LegendSettings {
        location: LegendLocation::Best,
        frame: false,
        font_size: 10.0,
    };

    theme
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
