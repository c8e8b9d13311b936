//! Plottheme - plot theme configuration with file and clipboard export.
//!
//! Plottheme provides a fixed visual theme for line charts and a helper that
//! exports the active figure to disk and to the system clipboard.
//!
//! # Features
//!
//! - Nine-color series palette
//! - Theme settings with bold titles, light grid and open top/right spines
//! - PNG, JPEG, BMP and SVG export with tight cropping
//! - Clipboard copy as a device-independent bitmap
//!
//! # Example
//!
//! ```ignore
//! use plottheme::{Chart, ExportRequest, PlotContext, Series};
//!
//! let mut ctx = PlotContext::init();
//! ctx.set_figure(
//!     Chart::new()
//!         .title("Growth")
//!         .series(Series::new([(0.0, 1.0), (1.0, 2.0)]).with_label("a")),
//! );
//!
//! let report = ctx.save_plot(&ExportRequest::default());
//! println!("{:?}", report.file);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod clipboard;
pub mod context;
pub mod error;
pub mod export;
pub mod palette;
pub mod plot;
pub mod theme;

pub use context::PlotContext;
pub use error::{PlotThemeError, Result};
pub use export::{save_plot, ExportReport, ExportRequest, StepOutcome};
pub use palette::{colour_palette, default_palette, PALETTE};
pub use plot::{Chart, Series};
pub use theme::{configure_theme, ThemeSettings};
