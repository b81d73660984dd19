use pixmorph_geometry::Point2D;
use pixmorph_image::{Image, ImageError, ImageSize};

use crate::interpolation::{interpolate_pixel, GaussianKernel, InterpolationMode, Sampler};
use crate::scan;

/// Gaussian kernel used when scaling by `factor`.
///
/// The radius grows with the shrink ratio, `max(1, floor(1 / factor))`, so
/// every source pixel falls under some tap; the variance is a third of it.
fn scale_kernel(factor: f64) -> GaussianKernel {
    let radius = (1.0 / factor).floor().max(1.0);
    GaussianKernel {
        variance: radius / 3.0,
        radius,
    }
}

/// Resize an image by a uniform factor.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `factor` - The scale factor, `> 0`. Values below one shrink.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// An image of `floor(width * factor) x floor(height * factor)` where the
/// pixel `(i, j)` samples the source at `(i / factor, j / factor)`.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `factor` is not a positive number.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::interpolation::InterpolationMode;
/// use pixmorph_imgproc::resize::scale;
///
/// let image = Image::from_size_val([4, 5].into(), Pixel::new(255, 1, 2, 3));
/// let scaled = scale(&image, 0.5, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(scaled.width(), 2);
/// assert_eq!(scaled.height(), 2);
/// ```
pub fn scale(
    src: &Image,
    factor: f64,
    interpolation: InterpolationMode,
) -> Result<Image, ImageError> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ImageError::invalid_parameter(
            "scale",
            format!("factor must be positive, got {factor}"),
        ));
    }

    let size = ImageSize {
        width: (src.width() as f64 * factor).floor() as usize,
        height: (src.height() as f64 * factor).floor() as usize,
    };
    let sampler = Sampler::from_mode(interpolation, scale_kernel(factor));
    log::debug!("scale: {} -> {size} with {sampler:?}", src.size());

    scan::from_fn(size, |i, j| {
        let p = Point2D::new(i as f64 / factor, j as f64 / factor);
        interpolate_pixel(src, p, sampler)
    })
}
