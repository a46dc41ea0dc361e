//! Image loading utilities.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// Load an image from disk as 8-bit RGB.
///
/// Any colour type the decoder produces is converted; an alpha channel is
/// discarded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    Ok(img.into_rgb8())
}
