//! Pixel samplers for continuous coordinates.
//!
//! The samplers are shared by the whole-image operators in [`crate::resize`]
//! and [`crate::warp`]. Each one carries its own boundary policy:
//!
//! - **Nearest**: reads the closest pixel, zero-fill outside the canvas
//! - **Bilinear**: blends the four surrounding pixels, each outside neighbor is a zero pixel
//! - **Gaussian**: weighted disc average, outside taps add weight but no color

mod bilinear;
mod gaussian;
pub(crate) mod interpolate;
mod nearest;

pub use bilinear::bilinear_sample;
pub use gaussian::{gaussian_sample, GaussianKernel};
pub use interpolate::{interpolate_pixel, InterpolationMode, Sampler};
pub use nearest::nearest_sample;
