//! Per-pixel image filters.
//!
//! Every filter is a pure function from an image (plus at most one numeric
//! parameter) to a new image of the same size. [`Filter`] wraps them behind
//! a single stateless transform interface.

mod clamp;
mod color;
mod threshold;

use std::fmt;

use image::RgbImage;

pub use clamp::{truncate, truncate3, CHANNEL_MAX};
pub use color::{brighten, colorize, negative, red_green_colorblindness};
pub use threshold::{black_and_white, edge_detect, BLACK, WHITE};

/// A filter together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Invert every channel.
    Negative,
    /// Binary threshold on the channel average.
    BlackAndWhite { cutoff: i32 },
    /// Add a constant to every channel.
    Brighten { delta: i32 },
    /// Push channels towards white or black.
    Colorize { alpha: f64 },
    /// Merge red and green.
    RedGreenColorblindness,
    /// Mark strong right/below neighbour differences.
    EdgeDetect { threshold: i32 },
}

impl Filter {
    /// Apply the filter, returning a new image.
    #[must_use]
    pub fn apply(&self, img: &RgbImage) -> RgbImage {
        match *self {
            Self::Negative => negative(img),
            Self::BlackAndWhite { cutoff } => black_and_white(img, cutoff),
            Self::Brighten { delta } => brighten(img, delta),
            Self::Colorize { alpha } => colorize(img, alpha),
            Self::RedGreenColorblindness => red_green_colorblindness(img),
            Self::EdgeDetect { threshold } => edge_detect(img, threshold),
        }
    }

    /// Short human readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::BlackAndWhite { .. } => "black and white",
            Self::Brighten { .. } => "brighten",
            Self::Colorize { .. } => "colorize",
            Self::RedGreenColorblindness => "red-green colorblindness",
            Self::EdgeDetect { .. } => "edge detection",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlackAndWhite { cutoff } => write!(f, "{} (cutoff {cutoff})", self.name()),
            Self::Brighten { delta } => write!(f, "{} ({delta:+})", self.name()),
            Self::Colorize { alpha } => write!(f, "{} (alpha {alpha})", self.name()),
            Self::EdgeDetect { threshold } => {
                write!(f, "{} (threshold {threshold})", self.name())
            }
            Self::Negative | Self::RedGreenColorblindness => f.write_str(self.name()),
        }
    }
}
