//! Image loading, saving, and geometry utilities.

mod geometry;
mod load;
mod save;

pub use geometry::{crop, scale_down, CropRect, ResizeFilter};
pub use load::load_image;
pub use save::save_image;

/// Default JPEG quality used when saving.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
