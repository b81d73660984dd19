use pixmorph_geometry::GeometryError;

use crate::image::ImageSize;

/// An error type for the image operators.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel coordinate lies outside the canvas.
    #[error("Pixel index ({0}, {1}) is out of bounds for an image of {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when two images taking part in the same operation differ in size.
    #[error("{op}: image sizes do not match ({left} vs {right})")]
    SizeMismatch {
        /// The operation that failed.
        op: &'static str,
        /// Size of the first image.
        left: ImageSize,
        /// Size of the second image.
        right: ImageSize,
    },

    /// Error when a requested region does not fit inside the canvas.
    #[error("{op}: region [{x1}, {x2}) x [{y1}, {y2}) is outside of {width}x{height}")]
    RegionOutOfBounds {
        /// The operation that failed.
        op: &'static str,
        /// Left edge, inclusive.
        x1: usize,
        /// Top edge, inclusive.
        y1: usize,
        /// Right edge, exclusive.
        x2: usize,
        /// Bottom edge, exclusive.
        y2: usize,
        /// Width of the source canvas.
        width: usize,
        /// Height of the source canvas.
        height: usize,
    },

    /// Error when a scalar parameter is degenerate for the operation.
    #[error("{op}: invalid parameter, {reason}")]
    InvalidParameter {
        /// The operation that failed.
        op: &'static str,
        /// What is wrong with the parameter.
        reason: String,
    },

    /// Error raised by the geometry primitives.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl ImageError {
    /// Shorthand for [`ImageError::InvalidParameter`].
    pub fn invalid_parameter(op: &'static str, reason: impl Into<String>) -> Self {
        ImageError::InvalidParameter {
            op,
            reason: reason.into(),
        }
    }
}
