use pixmorph_image::{Image, ImageError, Pixel};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{levels, quantize_normalized};
use crate::scan;

/// Quantize every channel after perturbing it with uniform noise.
///
/// The normalized channel value `c / 255` is offset by a value drawn from
/// `[-1, 1] / 2^bits`, independently per channel and pixel, then quantized
/// like [`quantize`](super::quantize). A fresh generator is seeded from the
/// operating system for each call.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `bits` is outside `1..=8`.
pub fn random_dither(src: &Image, bits: u32) -> Result<Image, ImageError> {
    let mut rng = StdRng::from_os_rng();
    random_dither_with_rng(src, bits, &mut rng)
}

/// [`random_dither`] drawing from a caller supplied generator.
pub fn random_dither_with_rng<R: Rng>(
    src: &Image,
    bits: u32,
    rng: &mut R,
) -> Result<Image, ImageError> {
    let levels = levels("random_dither", bits)?;
    let amplitude = 1.0 / levels as f64;

    scan::map_pixels(src, |px| {
        Pixel::from_array(px.to_array().map(|c| {
            let noise = rng.random_range(-1.0..=1.0) * amplitude;
            quantize_normalized(c as f64 / 255.0 + noise, levels)
        }))
    })
}
