use pixmorph_geometry::SegmentPair;
use pixmorph_image::{Image, ImageError};

use super::field_warp;
use crate::composite::cross_dissolve;

/// Morph between two images.
///
/// Every pair's segments are interpolated to `t`. `source` is warped from
/// its segments onto the interpolated ones, `destination` from its own, and
/// the two results are cross dissolved with weight `t`. The interpolated
/// segments carry the weight tuning of the destination segment.
///
/// # Arguments
///
/// * `source` - The image at `t = 0`.
/// * `destination` - The image at `t = 1`.
/// * `pairs` - Features of `source` matched to features of `destination`.
/// * `t` - Position along the morph.
///
/// # Errors
///
/// [`ImageError::SizeMismatch`] when the images differ in size.
pub fn morph(
    source: &Image,
    destination: &Image,
    pairs: &[SegmentPair],
    t: f64,
) -> Result<Image, ImageError> {
    if source.size() != destination.size() {
        return Err(ImageError::SizeMismatch {
            op: "morph",
            left: source.size(),
            right: destination.size(),
        });
    }

    let mut to_source = Vec::with_capacity(pairs.len());
    let mut to_destination = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let mid = pair
            .source
            .lerp(&pair.destination, t)
            .with_weight(pair.destination.weight);
        to_source.push(SegmentPair::new(pair.source, mid));
        to_destination.push(SegmentPair::new(pair.destination, mid));
    }

    let warped_source = field_warp(source, &to_source)?;
    let warped_destination = field_warp(destination, &to_destination)?;
    cross_dissolve(&warped_source, &warped_destination, t)
}
