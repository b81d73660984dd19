use num_traits::ToPrimitive;

/// Map any numeric value onto a channel byte.
///
/// The value is clamped to `[0, 255]` and then truncated, so `254.9` becomes
/// `254`. NaN maps to `0`.
///
/// # Examples
///
/// ```
/// use pixmorph_image::clamp_byte;
///
/// assert_eq!(clamp_byte(-3.0), 0);
/// assert_eq!(clamp_byte(254.9), 254);
/// assert_eq!(clamp_byte(300i32), 255);
/// ```
pub fn clamp_byte<T: ToPrimitive>(value: T) -> u8 {
    let v = value.to_f64().unwrap_or(0.0);
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v as u8
    }
}

/// Clamp an integer coordinate into `[0, size - 1]`.
///
/// This is the replicate boundary: a coordinate past an edge reads the edge
/// pixel. `size` must be non-zero.
pub fn clamp_index(index: isize, size: usize) -> usize {
    debug_assert!(size > 0, "clamp_index on an empty axis");
    num_traits::clamp(index, 0, size as isize - 1) as usize
}

/// True iff `0 <= value <= size - 1`.
///
/// Used by the zero-fill and weight-only boundaries to decide whether a
/// coordinate may be sampled. Always false for an empty axis.
pub fn in_bounds(value: f64, size: usize) -> bool {
    size > 0 && value >= 0.0 && value <= (size - 1) as f64
}
