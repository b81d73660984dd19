use pixmorph_geometry::Point2D;
use pixmorph_image::{Image, Pixel};

use crate::border::{fetch, BorderPolicy, Tap};

/// Nearest neighbor sampler.
///
/// Reads the pixel at `(floor(x + 0.5), floor(y + 0.5))`. A coordinate that
/// rounds outside the canvas yields [`Pixel::TRANSPARENT`].
pub fn nearest_sample(image: &Image, p: Point2D) -> Pixel {
    let iu = (p.x + 0.5).floor() as isize;
    let iv = (p.y + 0.5).floor() as isize;

    match fetch(image, iu, iv, BorderPolicy::ZeroFill) {
        Tap::Sample(px) => px,
        Tap::WeightOnly | Tap::Skip => Pixel::TRANSPARENT,
    }
}
