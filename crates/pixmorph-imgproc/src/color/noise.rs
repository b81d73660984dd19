use pixmorph_image::{clamp_byte, Image, ImageError, Pixel};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::scan;

/// Add uniform noise in `[-noise * 255, noise * 255]` to red, green and blue.
///
/// Every channel of every pixel draws independently. A fresh generator is
/// seeded from the operating system for each call; use
/// [`add_random_noise_with_rng`] for reproducible output.
///
/// # Errors
///
/// `noise` must be finite and non-negative.
pub fn add_random_noise(src: &Image, noise: f64) -> Result<Image, ImageError> {
    let mut rng = StdRng::from_os_rng();
    add_random_noise_with_rng(src, noise, &mut rng)
}

/// [`add_random_noise`] drawing from a caller supplied generator.
pub fn add_random_noise_with_rng<R: Rng>(
    src: &Image,
    noise: f64,
    rng: &mut R,
) -> Result<Image, ImageError> {
    if !noise.is_finite() || noise < 0.0 {
        return Err(ImageError::invalid_parameter(
            "add_random_noise",
            format!("noise must be finite and non-negative, got {noise}"),
        ));
    }

    scan::map_pixels(src, |px| {
        let mut f = |c: u8| {
            let offset = rng.random_range(-1.0..=1.0) * noise * 255.0;
            clamp_byte(c as f64 + offset)
        };
        let (r, g, b) = (f(px.r), f(px.g), f(px.b));
        Pixel::new(px.a, r, g, b)
    })
}
