//! Clipboard integration.

use crate::error::Result;
use arboard::{Clipboard, ImageData};
use image::RgbImage;
use std::borrow::Cow;

/// An image ready for the clipboard.
#[derive(Debug, Clone)]
pub struct ClipboardImage {
    /// Decoded pixels.
    pub image: RgbImage,
    /// Device-independent bitmap: the BMP encoding without its file header.
    ///
    /// [`SystemClipboard`] does not read this; arboard builds its own platform
    /// bitmap from the pixels. It is kept for callers and other
    /// [`ImageClipboard`] implementations that want the raw payload.
    pub dib: Vec<u8>,
}

/// Destination for copied images.
pub trait ImageClipboard {
    /// Replace the clipboard contents with `image`.
    fn put_image(&mut self, image: &ClipboardImage) -> Result<()>;
}

/// The operating system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ImageClipboard for SystemClipboard {
    fn put_image(&mut self, image: &ClipboardImage) -> Result<()> {
        let mut clipboard = Clipboard::new()?;
        clipboard.clear()?;

        // arboard builds the platform bitmap header itself, so it takes pixels
        let (width, height) = image.image.dimensions();
        clipboard.set_image(ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(opaque_rgba(&image.image)),
        })?;
        Ok(())
    }
}

/// Expand RGB pixels to fully opaque RGBA.
fn opaque_rgba(image: &RgbImage) -> Vec<u8> {
    image
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2], u8::MAX])
        .collect()
}

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn pixels_become_opaque_rgba() {
        let mut image = RgbImage::from_pixel(2, 1, Rgb([1, 2, 3]));
        image.put_pixel(1, 0, Rgb([4, 5, 6]));
        assert_eq!(opaque_rgba(&image), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
