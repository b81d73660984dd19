use pixmorph_image::{Image, ImageError, Pixel};

use crate::scan;

/// Perceptual weights of the grey conversion, in percent.
const RW: u32 = 30;
const GW: u32 = 59;
const BW: u32 = 11;

/// Grey value of a pixel: `0.3 * R + 0.59 * G + 0.11 * B`, truncated.
///
/// Evaluated with integer weights so that an already grey pixel maps to itself.
pub fn luma(px: &Pixel) -> u8 {
    let sum = RW * px.r as u32 + GW * px.g as u32 + BW * px.b as u32;
    // the weights add up to 100, so the quotient never exceeds 255
    (sum / 100) as u8
}

/// Convert an image to greyscale.
///
/// Red, green and blue are all replaced with [`luma`]; alpha is copied.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::color::luminance;
///
/// let image = Image::from_size_val([2, 2].into(), Pixel::new(255, 0, 255, 0));
/// let grey = luminance(&image).unwrap();
/// assert_eq!(grey[(1, 1)], Pixel::new(255, 150, 150, 150));
/// ```
pub fn luminance(src: &Image) -> Result<Image, ImageError> {
    scan::map_pixels(src, |px| {
        let y = luma(px);
        Pixel::new(px.a, y, y, y)
    })
}

/// Mean grey value of the whole image, as an integer average.
///
/// Returns 0 for an image without pixels.
pub fn mean(src: &Image) -> u8 {
    let count = src.as_slice().len() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = src.as_slice().iter().map(|px| luma(px) as u64).sum();
    (sum / count) as u8
}
