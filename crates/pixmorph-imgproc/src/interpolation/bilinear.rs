use pixmorph_geometry::Point2D;
use pixmorph_image::{clamp_byte, Image, Pixel};

use crate::border::{fetch, BorderPolicy, Tap};

fn tap(image: &Image, x: isize, y: isize) -> [f64; 4] {
    match fetch(image, x, y, BorderPolicy::ZeroFill) {
        Tap::Sample(px) => px.to_array().map(f64::from),
        Tap::WeightOnly | Tap::Skip => [0.0; 4],
    }
}

/// Bilinear sampler.
///
/// Blends the four integer neighbors around `p`. A neighbor outside the
/// canvas contributes a zero pixel with its full weight, so samples near the
/// border fade towards transparent black. The blended channels are rounded to
/// the nearest byte, which makes integer-aligned samples exact.
pub fn bilinear_sample(image: &Image, p: Point2D) -> Pixel {
    let u0 = p.x.floor();
    let v0 = p.y.floor();
    let du = p.x - u0;
    let dv = p.y - v0;

    let (iu, iv) = (u0 as isize, v0 as isize);
    let p00 = tap(image, iu, iv);
    let p10 = tap(image, iu + 1, iv);
    let p01 = tap(image, iu, iv + 1);
    let p11 = tap(image, iu + 1, iv + 1);

    let mut out = [0u8; 4];
    for k in 0..4 {
        let top = p00[k] * (1.0 - du) + p10[k] * du;
        let bottom = p01[k] * (1.0 - du) + p11[k] * du;
        out[k] = clamp_byte((top * (1.0 - dv) + bottom * dv).round());
    }
    Pixel::from_array(out)
}
