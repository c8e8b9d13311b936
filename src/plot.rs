//! The figure type drawn under a theme.
//!
//! A [`Chart`] is a set of labelled line series with optional titles. It
//! renders to an RGB raster through plotters' bitmap backend or to an SVG
//! document through the SVG backend. Only SVG output carries text unless the
//! `ttf` feature is enabled.

use crate::error::{PlotThemeError, Result};
use crate::theme::{FontWeight, LegendLocation, ThemeSettings};
use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Largest accepted raster side, in pixels.
pub const MAX_PIXELS_PER_SIDE: f64 = 65536.0;

/// Points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Line width of series, in points.
const SERIES_WIDTH: f64 = 1.5;

/// Line width of spines, in points.
const SPINE_WIDTH: f64 = 0.8;

/// Tick label size, in points.
const TICK_SIZE: f64 = 10.0;

/// A single line series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: Option<String>,
    /// Data points in plot order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create an unlabelled series.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self {
            label: None,
            points: points.into_iter().collect(),
        }
    }

    /// Set the legend label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Data range of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x.
    pub x_min: f64,
    /// Largest x.
    pub x_max: f64,
    /// Smallest y.
    pub y_min: f64,
    /// Largest y.
    pub y_max: f64,
}

impl Bounds {
    fn padded(self, fraction: f64) -> Self {
        let (x_min, x_max) = pad_range(self.x_min, self.x_max, fraction);
        let (y_min, y_max) = pad_range(self.y_min, self.y_max, fraction);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

fn pad_range(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    if max > min {
        let pad = (max - min) * fraction;
        (min - pad, max + pad)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// A line chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    /// Figure-level title drawn above the axes.
    pub suptitle: Option<String>,
    /// Axes title.
    pub title: Option<String>,
    /// X axis label.
    pub x_label: Option<String>,
    /// Y axis label.
    pub y_label: Option<String>,
    /// Series in draw order; colors follow the theme palette.
    pub series: Vec<Series>,
}

impl Chart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axes title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the figure-level title.
    pub fn suptitle(mut self, title: impl Into<String>) -> Self {
        self.suptitle = Some(title.into());
        self
    }

    /// Set both axis labels.
    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Append a series.
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Data range over every series. An empty chart spans the unit square.
    pub fn bounds(&self) -> Bounds {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let Some(&(x, y)) = points.next() else {
            return Bounds {
                x_min: 0.0,
                x_max: 1.0,
                y_min: 0.0,
                y_max: 1.0,
            };
        };
        points.fold(
            Bounds {
                x_min: x,
                x_max: x,
                y_min: y,
                y_max: y,
            },
            |b, &(x, y)| Bounds {
                x_min: b.x_min.min(x),
                x_max: b.x_max.max(x),
                y_min: b.y_min.min(y),
                y_max: b.y_max.max(y),
            },
        )
    }

    /// Resolve the theme's legend location for this chart's data.
    ///
    /// `Best` picks the corner quadrant holding the fewest points, preferring
    /// upper right, upper left, lower left and lower right in that order.
    pub fn legend_location(&self, theme: &ThemeSettings) -> LegendLocation {
        if theme.legend.location != LegendLocation::Best {
            return theme.legend.location;
        }

        let b = self.bounds();
        let x_mid = (b.x_min + b.x_max) / 2.0;
        let y_mid = (b.y_min + b.y_max) / 2.0;
        let candidates = [
            LegendLocation::UpperRight,
            LegendLocation::UpperLeft,
            LegendLocation::LowerLeft,
            LegendLocation::LowerRight,
        ];

        let covered = |location: LegendLocation| {
            self.series
                .iter()
                .flat_map(|s| s.points.iter())
                .filter(|&&(x, y)| match location {
                    LegendLocation::UpperRight => x >= x_mid && y >= y_mid,
                    LegendLocation::UpperLeft => x < x_mid && y >= y_mid,
                    LegendLocation::LowerLeft => x < x_mid && y < y_mid,
                    LegendLocation::LowerRight | LegendLocation::Best => x >= x_mid && y < y_mid,
                })
                .count()
        };

        // min_by_key keeps the first of equal keys
        candidates
            .into_iter()
            .min_by_key(|&location| covered(location))
            .unwrap_or(LegendLocation::UpperRight)
    }

    /// Rasterize at `dpi` into an RGB image of `figure_size * dpi` pixels.
    pub fn render_raster(&self, theme: &ThemeSettings, dpi: u32) -> Result<RgbImage> {
        let (width, height) = pixel_size(theme.figure_size, dpi)?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or_else(|| PlotThemeError::Render(format!("{width}x{height} image is too large")))?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|e| PlotThemeError::Render(format!("{width}x{height} image: {e}")))?;
        buffer.resize(len, 0u8);
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root, theme, f64::from(dpi) / POINTS_PER_INCH, cfg!(feature = "ttf"))?;
            root.present().map_err(PlotThemeError::render)?;
        }
        tracing::debug!(width, height, dpi, "rasterized chart");

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| PlotThemeError::Render("pixel buffer size mismatch".to_string()))
    }

    /// Render an SVG document sized in points.
    pub fn render_svg(&self, theme: &ThemeSettings) -> Result<String> {
        let (width, height) = pixel_size(theme.figure_size, POINTS_PER_INCH as u32)?;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            self.draw(&root, theme, 1.0, true)?;
            root.present().map_err(PlotThemeError::render)?;
        }
        Ok(svg)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        theme: &ThemeSettings,
        px_per_point: f64,
        with_text: bool,
    ) -> Result<()> {
        let family = theme.font_family.as_str();
        let px = move |points: f64| (theme.scaled(points) * px_per_point).round().max(1.0);
        let stroke = move |points: f64| (points * px_per_point).round().max(1.0) as u32;
        let font = move |points: f64, weight: FontWeight| {
            FontDesc::new(
                FontFamily::Name(family),
                px(points),
                match weight {
                    FontWeight::Normal => FontStyle::Normal,
                    FontWeight::Bold => FontStyle::Bold,
                },
            )
        };

        root.fill(&WHITE).map_err(PlotThemeError::render)?;

        let area = match (&self.suptitle, with_text) {
            (Some(text), true) => root
                .titled(text, font(theme.figure_title_size, FontWeight::Normal))
                .map_err(PlotThemeError::render)?,
            _ => root.clone(),
        };

        let (_, height) = area.dim_in_pixel();
        let bottom = (f64::from(height) * theme.subplot_bottom).round() as u32;
        let bounds = self.bounds().padded(0.05);

        let mut builder = ChartBuilder::on(&area);
        builder
            .margin(px(10.0) as u32)
            .margin_bottom(bottom.max(px(10.0) as u32));
        if with_text {
            builder
                .x_label_area_size(px(30.0) as u32)
                .y_label_area_size(px(40.0) as u32);
            if let Some(title) = &self.title {
                builder.caption(title, font(theme.title_size, theme.title_weight));
            }
        }
        let mut chart = builder
            .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
            .map_err(PlotThemeError::render)?;

        if with_text || theme.grid {
            let grid = RGBColor::from(theme.grid_rgb());
            let mut mesh = chart.configure_mesh();
            mesh.axis_style(&TRANSPARENT);
            if theme.grid {
                mesh.light_line_style(&grid).bold_line_style(&grid);
            } else {
                mesh.disable_mesh();
            }
            if with_text {
                mesh.label_style(font(TICK_SIZE, FontWeight::Normal))
                    .axis_desc_style(font(theme.label_size, theme.label_weight));
                if let Some(x) = &self.x_label {
                    mesh.x_desc(x.as_str());
                }
                if let Some(y) = &self.y_label {
                    mesh.y_desc(y.as_str());
                }
            }
            mesh.draw().map_err(PlotThemeError::render)?;
        }

        let series_width = stroke(SERIES_WIDTH);
        for (index, series) in self.series.iter().enumerate() {
            let color = RGBColor::from(theme.series_color(index));
            let annotation = chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    color.stroke_width(series_width),
                ))
                .map_err(PlotThemeError::render)?;
            if let (Some(label), true) = (&series.label, with_text) {
                annotation.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(series_width))
                });
            }
        }

        let (x0, x1, y0, y1) = (bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max);
        let spines = [
            (theme.spines.bottom, [(x0, y0), (x1, y0)]),
            (theme.spines.top, [(x0, y1), (x1, y1)]),
            (theme.spines.left, [(x0, y0), (x0, y1)]),
            (theme.spines.right, [(x1, y0), (x1, y1)]),
        ];
        let spine_width = stroke(SPINE_WIDTH);
        chart
            .draw_series(
                spines
                    .iter()
                    .filter(|(shown, _)| *shown)
                    .map(|(_, edge)| PathElement::new(edge.to_vec(), BLACK.stroke_width(spine_width))),
            )
            .map_err(PlotThemeError::render)?;

        if with_text && self.series.iter().any(|s| s.label.is_some()) {
            let position = match self.legend_location(theme) {
                LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
                LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
                LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
                LegendLocation::UpperRight | LegendLocation::Best => SeriesLabelPosition::UpperRight,
            };
            let mut legend = chart.configure_series_labels();
            legend
                .position(position)
                .label_font(font(theme.legend.font_size, FontWeight::Normal));
            if theme.legend.frame {
                legend.background_style(&WHITE).border_style(&BLACK);
            }
            legend.draw().map_err(PlotThemeError::render)?;
        }

        Ok(())
    }
}

/// Pixel dimensions of a figure of `figure_size` inches at `dpi`.
///
/// Each side must be at least one pixel and below [`MAX_PIXELS_PER_SIDE`].
pub fn pixel_size(figure_size: (f64, f64), dpi: u32) -> Result<(u32, u32)> {
    if dpi == 0 {
        return Err(PlotThemeError::Render("dpi must be positive".to_string()));
    }
    let (width, height) = figure_size;
    let dpi = f64::from(dpi);
    let (w, h) = ((width * dpi).round(), (height * dpi).round());
    if !(w >= 1.0 && h >= 1.0) {
        return Err(PlotThemeError::Render(format!(
            "figure size {width}x{height} is empty"
        )));
    }
    if !(w < MAX_PIXELS_PER_SIDE && h < MAX_PIXELS_PER_SIDE) {
        return Err(PlotThemeError::Render(format!(
            "image size {w}x{h} must be less than {MAX_PIXELS_PER_SIDE} pixels in each direction"
        )));
    }
    Ok((w as u32, h as u32))
}
