//! Resizing and cropping of the session image.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::{Error, Result};

/// Upper bound on the number of pixels a crop may produce.
const MAX_CROP_PIXELS: u64 = 1 << 28;

/// Resampling kernel used when scaling down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Nearest neighbour.
    Nearest,
    /// Bilinear.
    Triangle,
    /// Bicubic.
    #[default]
    CatmullRom,
    /// Gaussian.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => Self::Nearest,
            ResizeFilter::Triangle => Self::Triangle,
            ResizeFilter::CatmullRom => Self::CatmullRom,
            ResizeFilter::Gaussian => Self::Gaussian,
            ResizeFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Shrink both dimensions by an integer factor (integer division).
///
/// # Errors
///
/// Returns an error if `factor` is less than 1 or the result would have a
/// zero dimension.
pub fn scale_down(img: &RgbImage, factor: i64, filter: ResizeFilter) -> Result<RgbImage> {
    let factor = u32::try_from(factor)
        .ok()
        .filter(|&k| k >= 1)
        .ok_or_else(|| Error::invalid_parameter("factor", "must be a positive integer"))?;

    let (width, height) = img.dimensions();
    let (new_width, new_height) = (width / factor, height / factor);
    if new_width == 0 || new_height == 0 {
        return Err(Error::invalid_parameter(
            "factor",
            format!("{width}x{height} scaled down by {factor} is empty"),
        ));
    }

    Ok(imageops::resize(img, new_width, new_height, filter.into()))
}

/// A crop rectangle in source pixel coordinates; `right` and `lower` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: i64,
    pub upper: i64,
    pub right: i64,
    pub lower: i64,
}

impl CropRect {
    /// Width and height of the rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle is empty or too large.
    pub fn size(&self) -> Result<(u32, u32)> {
        let width = i128::from(self.right) - i128::from(self.left);
        let height = i128::from(self.lower) - i128::from(self.upper);
        if width <= 0 || height <= 0 {
            return Err(Error::invalid_parameter(
                "crop",
                "right must exceed left and lower must exceed upper",
            ));
        }

        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if u64::from(w) * u64::from(h) <= MAX_CROP_PIXELS => Ok((w, h)),
            _ => Err(Error::invalid_parameter(
                "crop",
                format!("{width}x{height} is too large"),
            )),
        }
    }
}

/// Cut `rect` out of the image.
///
/// The rectangle may extend past the image on any side; those parts of the
/// output are black.
///
/// # Errors
///
/// Returns an error if the rectangle is empty or too large.
pub fn crop(img: &RgbImage, rect: CropRect) -> Result<RgbImage> {
    let (width, height) = rect.size()?;

    let mut out = RgbImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        // No overflow: left + x < right and upper + y < lower
        let source_x = u32::try_from(rect.left + i64::from(x));
        let source_y = u32::try_from(rect.upper + i64::from(y));
        if let (Ok(sx), Ok(sy)) = (source_x, source_y) {
            if let Some(source) = img.get_pixel_checked(sx, sy) {
                *pixel = *source;
            }
        }
    }

    Ok(out)
}
