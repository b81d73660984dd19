use pixmorph_geometry::{Point2D, SegmentPair};
use pixmorph_image::{in_bounds, Image, ImageError, Pixel};

use crate::interpolation::bilinear_sample;
use crate::scan;

/// Slack allowed when deciding whether a mapped position is on the canvas.
const EDGE_EPS: f64 = 1e-9;

/// Clamp `value` onto `[0, size - 1]` when it is within [`EDGE_EPS`] of it.
fn snap_to_canvas(value: f64, size: usize) -> Option<f64> {
    if size == 0 {
        return None;
    }
    let max = (size - 1) as f64;
    if value < -EDGE_EPS || value > max + EDGE_EPS {
        return None;
    }
    let snapped = value.clamp(0.0, max);
    in_bounds(snapped, size).then_some(snapped)
}

/// Source position of `x` under the weighted blend of all `pairs`.
///
/// Returns `None` when no weight accumulates.
fn map_position(x: Point2D, pairs: &[SegmentPair]) -> Result<Option<Point2D>, ImageError> {
    let mut displacement = Point2D::ZERO;
    let mut weight_sum = 0.0;

    for pair in pairs {
        let (u, v) = pair.destination.local_coordinates(x)?;
        let xi = pair.source.point_at(u, v)?;

        let dist = pair.destination.distance(x);
        let weight = pair.destination.influence(dist);
        displacement += (xi - x) * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 || !weight_sum.is_finite() {
        return Ok(None);
    }
    Ok(Some(x + displacement / weight_sum))
}

/// Warp an image with a set of line segment correspondences.
///
/// For every destination pixel `X` each pair maps `X` from the frame of its
/// destination segment into the frame of its source segment. The resulting
/// displacements are averaged with the weight
/// [`influence`](pixmorph_geometry::OrientedLineSegment::influence) of the
/// destination segment at its
/// [`distance`](pixmorph_geometry::OrientedLineSegment::distance) from `X`,
/// and the source is sampled bilinearly at `X` plus that average.
///
/// Destination pixels whose source position falls outside the source canvas,
/// or where the weights vanish, stay [`Pixel::TRANSPARENT`]. Pairs with a
/// zero-length segment are ignored.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `pairs` - The correspondences. Their order only affects rounding.
///
/// # Returns
///
/// The warped image, the same size as `src`.
pub fn field_warp(src: &Image, pairs: &[SegmentPair]) -> Result<Image, ImageError> {
    let valid: Vec<SegmentPair> = pairs
        .iter()
        .filter(|pair| {
            if pair.is_degenerate() {
                log::warn!("field_warp: skipping degenerate segment pair {pair:?}");
            }
            !pair.is_degenerate()
        })
        .copied()
        .collect();
    log::debug!(
        "field_warp: {} with {} of {} segment pairs",
        src.size(),
        valid.len(),
        pairs.len()
    );

    let mut dst = Image::from_size(src.size());
    for (px, (i, j)) in dst.as_slice_mut().iter_mut().zip(scan::row_major(src.size())) {
        let x = Point2D::new(i as f64, j as f64);
        let Some(p) = map_position(x, &valid)? else {
            continue;
        };
        let (Some(u), Some(v)) = (
            snap_to_canvas(p.x, src.width()),
            snap_to_canvas(p.y, src.height()),
        ) else {
            continue;
        };
        *px = bilinear_sample(src, Point2D::new(u, v));
    }

    Ok(dst)
}
