//! Bit depth reduction.
//!
//! Every operator takes `bits` in `1..=8`, giving `2^bits` levels per
//! channel, and processes all four channels including alpha. A level is
//! reconstructed as `round(level * 255 / (2^bits - 1))`, clamped to a byte.

mod floyd_steinberg;
mod ordered;
mod quantize;
mod random;

pub use floyd_steinberg::floyd_steinberg_dither;
pub use ordered::ordered_dither_2x2;
pub use quantize::quantize;
pub use random::{random_dither, random_dither_with_rng};

use pixmorph_image::{clamp_byte, ImageError};

/// Number of levels for `bits`, validated to `1..=8`.
pub(crate) fn levels(op: &'static str, bits: u32) -> Result<u32, ImageError> {
    if !(1..=8).contains(&bits) {
        return Err(ImageError::invalid_parameter(
            op,
            format!("bits must be in 1..=8, got {bits}"),
        ));
    }
    Ok(1 << bits)
}

/// Byte value of quantization level `level` out of `levels`.
pub(crate) fn reconstruct(level: f64, levels: u32) -> u8 {
    clamp_byte((level * 255.0 / (levels - 1) as f64).round())
}

/// Quantize a channel value normalized to `[0, 1]`.
///
/// The level is `floor(value * levels)`; values at or past the top land on
/// the last level after clamping.
pub(crate) fn quantize_normalized(value: f64, levels: u32) -> u8 {
    reconstruct((value * levels as f64).floor(), levels)
}

/// Quantize a channel byte.
pub(crate) fn quantize_channel(c: u8, levels: u32) -> u8 {
    quantize_normalized(c as f64 / 255.0, levels)
}
