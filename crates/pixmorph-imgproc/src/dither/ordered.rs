use pixmorph_image::{Image, ImageError, Pixel};

use super::{levels, reconstruct};
use crate::scan;

/// Threshold matrix indexed by `[x % 2][y % 2]`, compared against `t / 5`.
const THRESHOLDS: [[f64; 2]; 2] = [[1.0, 3.0], [4.0, 2.0]];

/// Quantize with a 2x2 ordered dither.
///
/// Each channel is scaled to `c / 255 * (2^bits - 1)`; its fractional part
/// is compared against the threshold of the pixel's position in the 2x2
/// matrix divided by 5, rounding the level up when it exceeds it and down
/// otherwise.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `bits` is outside `1..=8`.
pub fn ordered_dither_2x2(src: &Image, bits: u32) -> Result<Image, ImageError> {
    let levels = levels("ordered_dither_2x2", bits)?;
    let top = (levels - 1) as f64;

    scan::from_fn(src.size(), |x, y| {
        let threshold = THRESHOLDS[x % 2][y % 2] / 5.0;
        let px = src[(x, y)];
        Pixel::from_array(px.to_array().map(|c| {
            let scaled = c as f64 / 255.0 * top;
            let level = if scaled - scaled.floor() > threshold {
                scaled.ceil()
            } else {
                scaled.floor()
            };
            reconstruct(level, levels)
        }))
    })
}
