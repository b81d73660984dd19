use pixmorph_image::{Image, ImageError, Pixel};

use crate::border::{fetch, BorderPolicy, Tap};
use crate::color::luma;
use crate::scan;

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

/// Replace every pixel with the average color of the dominant brightness
/// band in its neighborhood.
///
/// The window spans `radius` pixels on each side. Every pixel of the
/// window inside the canvas is assigned to one of `num_buckets` bands by
/// its grey value, `min(grey * num_buckets / 255, num_buckets - 1)`. The
/// most populated band wins, the lowest one on a tie, and the output is the
/// mean red, green and blue of that band with full alpha.
///
/// This produces a flat, painted look.
///
/// # Errors
///
/// [`ImageError::InvalidParameter`] when `num_buckets` is zero.
pub fn mode_filter(src: &Image, num_buckets: usize, radius: usize) -> Result<Image, ImageError> {
    if num_buckets == 0 {
        return Err(ImageError::invalid_parameter(
            "mode_filter",
            "num_buckets must be positive",
        ));
    }

    // indices are always < num_buckets
    let mut buckets = vec![Bucket::default(); num_buckets];
    let r = radius as isize;

    scan::from_fn(src.size(), |x, y| {
        buckets.fill(Bucket::default());

        for dy in -r..=r {
            for dx in -r..=r {
                let (sx, sy) = (x as isize + dx, y as isize + dy);
                let Tap::Sample(px) = fetch(src, sx, sy, BorderPolicy::Skip) else {
                    continue;
                };
                let band = (luma(&px) as usize * num_buckets / 255).min(num_buckets - 1);
                let bucket = &mut buckets[band];
                bucket.count += 1;
                bucket.sum[0] += px.r as u64;
                bucket.sum[1] += px.g as u64;
                bucket.sum[2] += px.b as u64;
            }
        }

        let mut best = Bucket::default();
        for bucket in &buckets {
            if bucket.count > best.count {
                best = *bucket;
            }
        }
        if best.count == 0 {
            return Pixel::new(255, 0, 0, 0);
        }
        let [r, g, b] = best.sum.map(|s| (s / best.count) as u8);
        Pixel::new(255, r, g, b)
    })
}
