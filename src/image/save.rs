//! Image saving utilities.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageResult, RgbImage};

use crate::error::{Error, Result};

/// Save an image, inferring the format from the file extension.
///
/// Paths without an extension are written as PNG. The image is encoded in
/// memory first, so nothing is written to `path` when encoding fails.
///
/// # Arguments
///
/// * `img` - Image to write
/// * `path` - Output file path
/// * `quality` - JPEG quality (1-100), ignored for other formats
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    let bytes = encode(img, path, quality).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, bytes)?;

    Ok(())
}

/// Encode into the format named by the extension of `path`.
fn encode(img: &RgbImage, path: &Path, quality: u8) -> ImageResult<Vec<u8>> {
    let format = if path.extension().is_some() {
        ImageFormat::from_path(path)?
    } else {
        ImageFormat::Png
    };

    let mut bytes = Vec::new();
    if format == ImageFormat::Jpeg {
        img.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
    } else {
        img.write_to(&mut Cursor::new(&mut bytes), format)?;
    }

    Ok(bytes)
}
