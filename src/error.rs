//! Custom error types for imagecraft.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the imagecraft library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A command needs the session image but none is loaded.
    #[error("No image loaded.")]
    NoImage,

    /// Console input could not be parsed as the requested value.
    #[error("invalid input {input:?} for {prompt:?}: expected {expected}")]
    InvalidInput {
        prompt: String,
        input: String,
        expected: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The image could not be displayed.
    #[error("cannot display image: {0}")]
    Viewer(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for imagecraft operations.
pub type Result<T> = std::result::Result<T, Error>;
