//! Window display of an image.

use image::RgbImage;

use crate::error::{Error, Result};

/// Pack an RGB pixel into the `0RGB` layout used by window framebuffers.
#[inline]
#[must_use]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Convert an image into a row-major `0RGB` framebuffer.
#[must_use]
pub fn framebuffer(img: &RgbImage) -> Vec<u32> {
    img.pixels().map(|p| pack_rgb(p[0], p[1], p[2])).collect()
}

/// Show the image in a window until it is closed or Escape is pressed.
///
/// # Errors
///
/// Returns an error if the window cannot be created.
#[cfg(feature = "viewer")]
pub fn show(img: &RgbImage, title: &str) -> Result<()> {
    use minifb::{Key, Window, WindowOptions};

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Viewer("image is empty".to_string()));
    }
    let (width, height) = (width as usize, height as usize);

    let buffer = framebuffer(img);
    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|err| Error::Viewer(err.to_string()))?;
    window.set_target_fps(30);

    tracing::debug!("Opened viewer window {width}x{height}");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|err| Error::Viewer(err.to_string()))?;
    }

    Ok(())
}

/// Show the image in a window.
///
/// # Errors
///
/// Always fails: the binary was built without the `viewer` feature.
#[cfg(not(feature = "viewer"))]
pub fn show(img: &RgbImage, _title: &str) -> Result<()> {
    tracing::debug!("Viewer requested for {}x{} image", img.width(), img.height());
    Err(Error::Viewer(
        "built without the `viewer` feature".to_string(),
    ))
}
