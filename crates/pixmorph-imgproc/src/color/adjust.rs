use pixmorph_image::{clamp_byte, Image, ImageError, Pixel};

use super::gray::{luma, mean};
use crate::scan;

/// Blend each color channel towards `anchor`: `(1 - k) * anchor + k * c`.
fn blend(px: &Pixel, anchor: u8, k: f64) -> Pixel {
    let anchor = anchor as f64;
    let f = |c: u8| clamp_byte((1.0 - k) * anchor + k * c as f64);
    Pixel::new(px.a, f(px.r), f(px.g), f(px.b))
}

/// Scale red, green and blue by `factor`; alpha is copied.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::color::brighten;
///
/// let image = Image::from_size_val([1, 1].into(), Pixel::new(7, 100, 200, 10));
/// let out = brighten(&image, 1.5).unwrap();
/// assert_eq!(out[(0, 0)], Pixel::new(7, 150, 255, 15));
/// ```
pub fn brighten(src: &Image, factor: f64) -> Result<Image, ImageError> {
    scan::map_pixels(src, |px| {
        let f = |c: u8| clamp_byte(c as f64 * factor);
        Pixel::new(px.a, f(px.r), f(px.g), f(px.b))
    })
}

/// Push the color channels away from (k > 1) or towards (k < 1) the mean
/// grey value of the whole image.
pub fn contrast(src: &Image, factor: f64) -> Result<Image, ImageError> {
    let avg = mean(src);
    scan::map_pixels(src, |px| blend(px, avg, factor))
}

/// Push the color channels away from (k > 1) or towards (k < 1) the grey
/// value of the same pixel. `0` yields greyscale.
pub fn saturate(src: &Image, factor: f64) -> Result<Image, ImageError> {
    scan::map_pixels(src, |px| blend(px, luma(px), factor))
}
