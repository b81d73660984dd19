use pixmorph_image::{clamp_byte, clamp_index, Channel, Image, ImageError};

use super::{levels, quantize_channel};
use crate::scan::row_major;

/// Error diffusion offsets `(dx, dy)` and their share of the error.
const DIFFUSION: [(isize, isize, f64); 4] = [
    (0, 1, 7.0 / 16.0),
    (1, -1, 3.0 / 16.0),
    (1, 0, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Quantize with Floyd–Steinberg error diffusion.
///
/// Pixels are visited in row-major order. Each one is quantized from a
/// private working copy of `src`, and the quantization error of every
/// channel is added onto four neighbors of the working copy:
///
/// | neighbor | share |
/// |---|---|
/// | `(x, y + 1)` | 7/16 |
/// | `(x + 1, y - 1)` | 3/16 |
/// | `(x + 1, y)` | 5/16 |
/// | `(x + 1, y + 1)` | 1/16 |
///
/// Neighbor coordinates are clamped onto the canvas, so at the edges error
/// can land on the same pixel (including the current one) more than once.
/// The working copy is clamped to a byte after each addition.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `bits` is outside `1..=8`.
pub fn floyd_steinberg_dither(src: &Image, bits: u32) -> Result<Image, ImageError> {
    let levels = levels("floyd_steinberg_dither", bits)?;
    let (width, height) = (src.width(), src.height());

    let mut work = src.clone();
    let mut dst = Image::from_size(src.size());

    for (x, y) in row_major(src.size()) {
        for ch in Channel::ALL {
            let old = work[(x, y)].channel(ch);
            let new = quantize_channel(old, levels);
            *dst[(x, y)].channel_mut(ch) = new;

            let error = old as f64 - new as f64;
            for (dx, dy, share) in DIFFUSION {
                let nx = clamp_index(x as isize + dx, width);
                let ny = clamp_index(y as isize + dy, height);
                let c = work[(nx, ny)].channel_mut(ch);
                *c = clamp_byte(*c as f64 + share * error);
            }
        }
    }

    Ok(dst)
}
