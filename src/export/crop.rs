//! Tight cropping of rendered rasters.

use image::{imageops, Rgb, RgbImage};

/// Crop `image` to the pixels that differ from `background`, keeping `pad`
/// pixels around them. An image with no content is returned unchanged.
pub fn tight_crop(image: &RgbImage, background: Rgb<u8>, pad: u32) -> RgbImage {
    let Some((x0, y0, x1, y1)) = content_bounds(image, background) else {
        return image.clone();
    };

    let (width, height) = image.dimensions();
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = x1.saturating_add(pad).min(width - 1);
    let bottom = y1.saturating_add(pad).min(height - 1);

    imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
}

/// Inclusive bounding box of non-background pixels.
fn content_bounds(image: &RgbImage, background: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
    image
        .enumerate_pixels()
        .filter(|(_, _, p)| **p != background)
        .fold(None, |bounds, (x, y, _)| match bounds {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}
