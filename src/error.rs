// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Crop(CropError),
}

/// Failures of the cropper facade and pixel extraction.
///
/// The geometric core never fails: it clamps instead. These variants only
/// cover requests the cropper cannot honour in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropError {
    /// The requested pixel rectangle has no area inside the image.
    EmptyRegion,

    /// No image has been attached to the cropper yet.
    NoImage,

    /// An overlay show/dismiss transition is still running.
    TransitionInProgress,
}

impl CropError {
    /// Returns the message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CropError::EmptyRegion => "error-crop-empty-region",
            CropError::NoImage => "error-crop-no-image",
            CropError::TransitionInProgress => "error-crop-transition-in-progress",
        }
    }
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropError::EmptyRegion => write!(f, "Crop region is empty"),
            CropError::NoImage => write!(f, "No image loaded"),
            CropError::TransitionInProgress => {
                write!(f, "Overlay transition already in progress")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Crop(e) => write!(f, "Crop Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CropError> for Error {
    fn from(err: CropError) -> Self {
        Error::Crop(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
