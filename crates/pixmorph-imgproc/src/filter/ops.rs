use pixmorph_image::{clamp_byte, Image, ImageError, Pixel};

use super::kernels;
use crate::border::{fetch, BorderPolicy, Tap};
use crate::scan;

/// Signed red, green and blue response of a 3x3 mask at every pixel.
///
/// Reads outside the canvas replicate the nearest edge pixel.
fn convolve_3x3(src: &Image, kernel: &[[f64; 3]; 3]) -> Vec<[f64; 3]> {
    scan::row_major(src.size())
        .map(|(x, y)| {
            let mut acc = [0.0; 3];
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, k) in row.iter().enumerate() {
                    let sx = x as isize + kx as isize - 1;
                    let sy = y as isize + ky as isize - 1;
                    if let Tap::Sample(px) = fetch(src, sx, sy, BorderPolicy::Replicate) {
                        acc[0] += k * px.r as f64;
                        acc[1] += k * px.g as f64;
                        acc[2] += k * px.b as f64;
                    }
                }
            }
            acc
        })
        .collect()
}

/// Blur an image with the fixed 3x3 mask [`kernels::BLUR_3X3`].
///
/// # Arguments
///
/// * `src` - The source image.
///
/// # Returns
///
/// An image of the same size. Pixels past the edges replicate the edge, and
/// alpha is copied unchanged.
pub fn blur_3x3(src: &Image) -> Result<Image, ImageError> {
    let response = convolve_3x3(src, &kernels::BLUR_3X3);
    let data = src
        .as_slice()
        .iter()
        .zip(response)
        .map(|(px, [r, g, b])| Pixel::new(px.a, clamp_byte(r), clamp_byte(g), clamp_byte(b)))
        .collect();
    Image::new(src.size(), data)
}

/// Highlight edges with the 3x3 mask [`kernels::EDGE_3X3`].
///
/// The signed response of every channel is computed over the whole image
/// first; a second pass then stretches each channel's observed range
/// `[min, max]` linearly onto `[0, 255]`. A channel whose response is flat
/// across the image becomes 0. Alpha is copied unchanged.
pub fn edge_detect_3x3(src: &Image) -> Result<Image, ImageError> {
    let response = convolve_3x3(src, &kernels::EDGE_3X3);

    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for values in &response {
        for c in 0..3 {
            min[c] = min[c].min(values[c]);
            max[c] = max[c].max(values[c]);
        }
    }
    log::debug!("edge_detect_3x3: response range min={min:?} max={max:?}");

    let range = [0, 1, 2].map(|c| max[c] - min[c]);
    if !response.is_empty() && range.iter().any(|r| *r <= 0.0) {
        log::warn!("edge_detect_3x3: flat response in some channel, range={range:?}");
    }

    let normalize = |v: f64, c: usize| {
        if range[c] > 0.0 {
            clamp_byte((v - min[c]) / range[c] * 255.0)
        } else {
            0
        }
    };

    let data = src
        .as_slice()
        .iter()
        .zip(response)
        .map(|(px, [r, g, b])| Pixel::new(px.a, normalize(r, 0), normalize(g, 1), normalize(b, 2)))
        .collect();
    Image::new(src.size(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_3x3_flat() -> Result<(), ImageError> {
        let image = Image::from_size_val([4, 3].into(), Pixel::new(9, 80, 160, 240));
        assert_eq!(blur_3x3(&image)?, image);
        Ok(())
    }

    #[test]
    fn blur_3x3_spike() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let r = [
            0, 0, 0,
            0, 160, 0,
            0, 0, 0,
        ];
        let pixels = r.iter().map(|&r| Pixel::new(200, r, 0, 0)).collect();
        let image = Image::new([3, 3].into(), pixels)?;
        let out = blur_3x3(&image)?;

        assert_eq!(out[(1, 1)].r, 40);
        assert_eq!(out[(0, 1)].r, 20);
        assert_eq!(out[(0, 0)].r, 10);
        assert!(out.as_slice().iter().all(|px| px.a == 200));
        Ok(())
    }

    #[test]
    fn blur_3x3_replicates_edges() -> Result<(), ImageError> {
        // left column 0, right column 160: the corner sees the edge twice
        let pixels = (0..4)
            .map(|i| Pixel::new(255, if i % 2 == 0 { 0 } else { 160 }, 0, 0))
            .collect();
        let image = Image::new([2, 2].into(), pixels)?;
        let out = blur_3x3(&image)?;
        // weights on column 0: 1+2+1 + 2+4+2 = 12/16 for x = 0, rest on x = 1
        assert_eq!(out[(0, 0)].r, 40);
        assert_eq!(out[(1, 0)].r, 120);
        Ok(())
    }

    #[test]
    fn edge_detect_step() -> Result<(), ImageError> {
        // a vertical step from 0 to 200 across columns 1 and 2
        let pixels = (0..4 * 3)
            .map(|i| Pixel::new(7, if i % 4 < 2 { 0 } else { 200 }, 50, 0))
            .collect();
        let image = Image::new([4, 3].into(), pixels)?;
        let out = edge_detect_3x3(&image)?;

        // response: -75 at x = 1 and +75 at x = 2, 0 elsewhere
        for y in 0..3 {
            assert_eq!(out[(0, y)].r, 127);
            assert_eq!(out[(1, y)].r, 0);
            assert_eq!(out[(2, y)].r, 255);
            assert_eq!(out[(3, y)].r, 127);
        }
        // flat channels map to zero
        assert!(out.as_slice().iter().all(|px| px.g == 0 && px.b == 0));
        assert!(out.as_slice().iter().all(|px| px.a == 7));
        Ok(())
    }

    #[test]
    fn edge_detect_empty() -> Result<(), ImageError> {
        let image = Image::from_size([0, 3].into());
        assert!(edge_detect_3x3(&image)?.is_empty());
        Ok(())
    }
}
