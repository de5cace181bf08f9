use thiserror::Error;

/// Errors returned by the palette pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input image or pixel set contains no pixels.
    #[error("insufficient data: input contains no pixels")]
    InsufficientData,

    /// Caller passed a structurally invalid parameter.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The byte stream could not be decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
