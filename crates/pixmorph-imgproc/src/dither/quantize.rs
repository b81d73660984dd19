use pixmorph_image::{Image, ImageError, Pixel};

use super::{levels, quantize_channel};
use crate::scan;

/// Uniformly quantize every channel to `2^bits` levels.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `bits` - Bits per channel to keep, in `1..=8`.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `bits` is out of range.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::dither::quantize;
///
/// let image = Image::from_size_val([2, 2].into(), Pixel::new(255, 200, 100, 20));
/// let out = quantize(&image, 1).unwrap();
/// assert_eq!(out[(0, 0)], Pixel::new(255, 255, 0, 0));
/// ```
pub fn quantize(src: &Image, bits: u32) -> Result<Image, ImageError> {
    let levels = levels("quantize", bits)?;
    scan::map_pixels(src, |px| {
        Pixel::from_array(px.to_array().map(|c| quantize_channel(c, levels)))
    })
}
