//! Device-independent bitmaps for the clipboard.
//!
//! A DIB is a BMP file minus its 14-byte `BITMAPFILEHEADER`: it starts with
//! the info header and is followed by the pixel rows.

use crate::clipboard::ClipboardImage;
use crate::error::{PlotThemeError, Result};
use image::ImageFormat;
use std::io::Cursor;

/// Size of the BMP file header that clipboard bitmaps omit.
pub const BMP_FILE_HEADER_LEN: usize = 14;

/// Decode PNG bytes and re-encode them as an RGB DIB.
pub fn png_to_dib(png: &[u8]) -> Result<ClipboardImage> {
    let image = image::load_from_memory_with_format(png, ImageFormat::Png)?.to_rgb8();

    let mut bmp = Cursor::new(Vec::new());
    image.write_to(&mut bmp, ImageFormat::Bmp)?;
    let dib = strip_file_header(&bmp.into_inner())?;

    Ok(ClipboardImage { image, dib })
}

/// Drop the file header of an encoded BMP.
pub fn strip_file_header(bmp: &[u8]) -> Result<Vec<u8>> {
    if bmp.len() <= BMP_FILE_HEADER_LEN {
        return Err(PlotThemeError::InvalidBitmap(format!(
            "{} bytes is too short for a bitmap",
            bmp.len()
        )));
    }
    if &bmp[..2] != b"BM" {
        return Err(PlotThemeError::InvalidBitmap("missing BM signature".to_string()));
    }
    Ok(bmp[BMP_FILE_HEADER_LEN..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_of(image: &RgbImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn dib_starts_with_info_header() {
        let image = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let payload = png_to_dib(&png_of(&image)).unwrap();

        let header_size = u32::from_le_bytes(payload.dib[0..4].try_into().unwrap());
        let width = i32::from_le_bytes(payload.dib[4..8].try_into().unwrap());
        assert_eq!(header_size, 40);
        assert_eq!(width, 3);
        assert_eq!(payload.image, image);
    }

    #[test]
    fn dib_is_bmp_without_file_header() {
        let image = RgbImage::from_pixel(5, 5, Rgb([200, 0, 0]));
        let mut bmp = Cursor::new(Vec::new());
        image.write_to(&mut bmp, ImageFormat::Bmp).unwrap();
        let bmp = bmp.into_inner();

        let payload = png_to_dib(&png_of(&image)).unwrap();
        assert_eq!(payload.dib, bmp[BMP_FILE_HEADER_LEN..]);
    }

    #[test]
    fn rejects_non_bitmaps() {
        assert!(strip_file_header(b"BM").is_err());
        assert!(strip_file_header(&[0u8; 64]).is_err());
    }

    #[test]
    fn rejects_non_png_input() {
        assert!(png_to_dib(b"not a png").is_err());
    }
}
