use pixmorph_geometry::Point2D;
use pixmorph_image::{Image, Pixel};

use super::{bilinear_sample, gaussian_sample, nearest_sample, GaussianKernel};

/// Interpolation mode for the scale and rotate operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Gaussian weighted interpolation; the operator picks the kernel
    Gaussian,
}

/// A fully parameterized point sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampler {
    /// See [`nearest_sample`].
    Nearest,
    /// See [`bilinear_sample`].
    Bilinear,
    /// See [`gaussian_sample`].
    Gaussian(GaussianKernel),
}

impl Sampler {
    /// Resolve an [`InterpolationMode`], using `kernel` for the gaussian case.
    pub fn from_mode(mode: InterpolationMode, kernel: GaussianKernel) -> Self {
        match mode {
            InterpolationMode::Nearest => Sampler::Nearest,
            InterpolationMode::Bilinear => Sampler::Bilinear,
            InterpolationMode::Gaussian => Sampler::Gaussian(kernel),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image.
/// * `p` - The continuous coordinate to sample.
/// * `sampler` - The sampler to use.
///
/// # Returns
///
/// The interpolated pixel.
pub fn interpolate_pixel(image: &Image, p: Point2D, sampler: Sampler) -> Pixel {
    match sampler {
        Sampler::Nearest => nearest_sample(image, p),
        Sampler::Bilinear => bilinear_sample(image, p),
        Sampler::Gaussian(kernel) => gaussian_sample(image, p, kernel),
    }
}
