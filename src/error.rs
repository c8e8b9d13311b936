//! Error types for plottheme.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plottheme operations.
pub type Result<T> = std::result::Result<T, PlotThemeError>;

/// Errors that can occur while rendering or exporting a figure.
#[derive(Debug, Error)]
pub enum PlotThemeError {
    /// Failed to create the output folder.
    #[error("Failed to create folder: {path}")]
    CreateDir {
        /// Folder that could not be created.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Unsupported output format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Requested file type.
        extension: String,
    },

    /// No figure is active in the plot context.
    #[error("No active figure to export")]
    NoActiveFigure,

    /// Drawing the figure failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Encoding or decoding an image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The encoded bitmap did not have the expected layout.
    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotThemeError {
    /// Create a CreateDir error.
    pub fn create_dir(path: PathBuf, source: std::io::Error) -> Self {
        Self::CreateDir { path, source }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a Render error from any displayable drawing error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
