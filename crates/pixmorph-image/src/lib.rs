#![deny(missing_docs)]
//! Image types and helpers for a fixed four channel, eight bit pixel model

/// image representation for raster processing.
pub mod image;

/// pixel and channel types.
pub mod pixel;

/// clamping and bounds helpers shared by the operators.
pub mod clamp;

/// Error types for the image module.
pub mod error;

pub use crate::clamp::{clamp_byte, clamp_index, in_bounds};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{Channel, Pixel};
