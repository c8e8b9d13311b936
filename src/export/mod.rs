//! Exporting the active figure to a file and to the clipboard.
//!
//! [`save_plot`] runs two independent steps. Failures in either step are
//! logged and reported in the returned [`ExportReport`]; they never
//! propagate and never stop the other step.

mod crop;
mod dib;
mod format;

pub use crop::tight_crop;
pub use dib::{png_to_dib, strip_file_header, BMP_FILE_HEADER_LEN};
pub use format::{render, FileFormat, TIGHT_PAD_INCHES};

use crate::clipboard::ImageClipboard;
use crate::context::PlotContext;
use crate::error::{PlotThemeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Parameters of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Also copy the figure to the clipboard (PNG exports only).
    pub copy_to_clipboard: bool,
    /// File name without extension.
    pub name: String,
    /// Output folder. Empty skips the file step.
    pub folder: String,
    /// Output format, also used as the file extension.
    pub file_type: String,
    /// Resolution in dots per inch.
    pub dpi: u32,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            copy_to_clipboard: true,
            name: "img".to_string(),
            folder: "image_out/".to_string(),
            file_type: "png".to_string(),
            dpi: 300,
        }
    }
}

impl ExportRequest {
    /// Path the file step writes to.
    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.folder).join(format!("{}.{}", self.name, self.file_type))
    }

    /// Whether the clipboard step applies to this request.
    pub fn wants_clipboard(&self) -> bool {
        self.copy_to_clipboard && self.file_type == "png"
    }
}

/// Result of one export step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The figure was written to this path.
    Saved(PathBuf),
    /// The figure was placed on the clipboard.
    Copied,
    /// The step did not apply to the request.
    Skipped,
    /// The step failed with this message.
    Failed(String),
}

impl StepOutcome {
    /// Whether the step failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of both export steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File step.
    pub file: StepOutcome,
    /// Clipboard step.
    pub clipboard: StepOutcome,
}

impl ExportReport {
    /// Whether neither step failed.
    pub fn is_ok(&self) -> bool {
        !self.file.is_failed() && !self.clipboard.is_failed()
    }
}

/// Export the active figure of `ctx` as described by `request`.
pub fn save_plot(
    ctx: &PlotContext,
    request: &ExportRequest,
    clipboard: &mut dyn ImageClipboard,
) -> ExportReport {
    let file = if request.folder.is_empty() {
        StepOutcome::Skipped
    } else {
        match save_to_folder(ctx, request) {
            Ok(path) => {
                info!("Image saved to '{}'.", path.display());
                StepOutcome::Saved(path)
            }
            Err(err) => {
                error!(folder = %request.folder, "Error while creating folder '{}': {}", request.folder, err);
                StepOutcome::Failed(err.to_string())
            }
        }
    };

    let clipboard = if request.wants_clipboard() {
        match copy_png(ctx, request.dpi, clipboard) {
            Ok(()) => {
                info!("Image copied to clipboard!");
                StepOutcome::Copied
            }
            Err(err) => {
                error!("Error while copying to clipboard: {}", err);
                StepOutcome::Failed(err.to_string())
            }
        }
    } else {
        StepOutcome::Skipped
    };

    ExportReport { file, clipboard }
}

fn save_to_folder(ctx: &PlotContext, request: &ExportRequest) -> Result<PathBuf> {
    let folder = Path::new(&request.folder);
    fs::create_dir_all(folder).map_err(|e| PlotThemeError::create_dir(folder.to_path_buf(), e))?;

    let format: FileFormat = request.file_type.parse()?;
    let chart = ctx.figure().ok_or(PlotThemeError::NoActiveFigure)?;
    let bytes = render(chart, &ctx.theme, format, request.dpi)?;

    let path = request.file_path();
    fs::write(&path, bytes)?;
    Ok(path)
}

fn copy_png(ctx: &PlotContext, dpi: u32, clipboard: &mut dyn ImageClipboard) -> Result<()> {
    let chart = ctx.figure().ok_or(PlotThemeError::NoActiveFigure)?;
    let png = render(chart, &ctx.theme, FileFormat::Png, dpi)?;
    let payload = png_to_dib(&png)?;
    clipboard.put_image(&payload)
}
