use pixmorph_geometry::Point2D;
use pixmorph_image::{clamp_byte, Image, Pixel};

use crate::border::{fetch, BorderPolicy, Tap};

/// Parameters of the gaussian sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    /// Spread of the weights, must be positive.
    pub variance: f64,
    /// Euclidean radius of the disc of taps.
    pub radius: f64,
}

/// Gaussian sampler.
///
/// Sums every integer lattice point within `radius` of `p` with weight
/// `exp(-d^2 / (2 * variance^2))`. Lattice points outside the canvas add
/// their weight to the normalizer but no color. When no tap lands in the
/// disc the sample is [`Pixel::TRANSPARENT`].
pub fn gaussian_sample(image: &Image, p: Point2D, kernel: GaussianKernel) -> Pixel {
    let GaussianKernel { variance, radius } = kernel;
    let r2 = radius * radius;
    let denom = 2.0 * variance * variance;

    let ulo = (p.x - radius).floor() as isize;
    let uhi = (p.x + radius).ceil() as isize;
    let vlo = (p.y - radius).floor() as isize;
    let vhi = (p.y + radius).ceil() as isize;

    let mut acc = [0.0f64; 4];
    let mut weight = 0.0;

    for iv in vlo..=vhi {
        for iu in ulo..=uhi {
            let du = iu as f64 - p.x;
            let dv = iv as f64 - p.y;
            let d2 = du * du + dv * dv;
            if d2 > r2 {
                continue;
            }
            let w = (-d2 / denom).exp();
            match fetch(image, iu, iv, BorderPolicy::WeightOnly) {
                Tap::Sample(px) => {
                    weight += w;
                    for (a, c) in acc.iter_mut().zip(px.to_array()) {
                        *a += w * c as f64;
                    }
                }
                Tap::WeightOnly => weight += w,
                Tap::Skip => {}
            }
        }
    }

    if weight <= 0.0 {
        return Pixel::TRANSPARENT;
    }

    Pixel::from_array(acc.map(|a| clamp_byte(a / weight)))
}
