use pixmorph_image::{clamp_byte, Image, ImageError, Pixel};

use super::kernels::gaussian_kernel_2d;
use crate::border::{fetch, BorderPolicy, Tap};
use crate::scan;

/// Blur an image with an `n x n` gaussian window.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The window size; the half width is `kernel_size / 2`,
///   so an even size behaves like the next odd one.
/// * `sigma` - The sigma of the gaussian.
///
/// Samples outside the canvas are skipped: they add neither weight nor
/// color, and the remaining weights are renormalized. The output is opaque.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `sigma` is not a positive number.
pub fn gaussian_blur_nxn(src: &Image, kernel_size: usize, sigma: f64) -> Result<Image, ImageError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(ImageError::invalid_parameter(
            "gaussian_blur_nxn",
            format!("sigma must be positive, got {sigma}"),
        ));
    }

    let half = kernel_size / 2;
    let size = 2 * half + 1;
    let kernel = gaussian_kernel_2d(half, sigma);
    log::debug!("gaussian_blur_nxn: half window {half}, sigma {sigma}");

    scan::from_fn(src.size(), |x, y| {
        let mut acc = [0.0; 3];
        let mut weight = 0.0;
        for (i, w) in kernel.iter().enumerate() {
            let sx = x as isize + (i % size) as isize - half as isize;
            let sy = y as isize + (i / size) as isize - half as isize;
            if let Tap::Sample(px) = fetch(src, sx, sy, BorderPolicy::Skip) {
                acc[0] += w * px.r as f64;
                acc[1] += w * px.g as f64;
                acc[2] += w * px.b as f64;
                weight += w;
            }
        }
        if weight <= 0.0 {
            return Pixel::new(255, 0, 0, 0);
        }
        let [r, g, b] = acc.map(|c| clamp_byte(c / weight));
        Pixel::new(255, r, g, b)
    })
}
