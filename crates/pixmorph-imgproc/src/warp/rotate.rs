use pixmorph_geometry::Point2D;
use pixmorph_image::{Image, ImageError, ImageSize};

use crate::interpolation::{interpolate_pixel, GaussianKernel, InterpolationMode, Sampler};
use crate::scan;

/// Gaussian kernel used by [`rotate`].
const ROTATE_KERNEL: GaussianKernel = GaussianKernel {
    variance: 1.0 / 3.0,
    radius: 1.0,
};

/// Size of the canvas that holds `size` rotated by `angle` radians.
///
/// Evaluates `W |sin(-a)| + H |cos(-a)|` by `W |cos(-a)| + H |sin(-a)|`,
/// truncated.
fn rotated_size(size: ImageSize, angle: f64) -> ImageSize {
    let a = -angle;
    let (w, h) = (size.width as f64, size.height as f64);
    let (sin, cos) = (a.sin().abs(), a.cos().abs());
    ImageSize {
        width: (w * sin + h * cos).floor() as usize,
        height: (w * cos + h * sin).floor() as usize,
    }
}

/// Rotate an image about its center.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `angle` - The angle of rotation in degrees.
/// * `interpolation` - The interpolation mode to use. The gaussian mode
///   uses a radius of 1 and a variance of 1/3.
///
/// # Returns
///
/// A new image on a canvas sized by the trig terms of the negated angle,
/// `W |sin| + H |cos|` wide and `W |cos| + H |sin|` high. Each destination
/// pixel is mapped back about the centers of both canvases:
///
/// ```text
/// u = (i - W'/2) cos(angle) - (j - H'/2) sin(angle) + W/2
/// v = (i - W'/2) sin(angle) + (j - H'/2) cos(angle) + H/2
/// ```
///
/// and sampled there. Samples falling off the source follow the boundary
/// policy of the sampler.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::interpolation::InterpolationMode;
/// use pixmorph_imgproc::warp::rotate;
///
/// let image = Image::from_size_val([6, 6].into(), Pixel::new(255, 1, 2, 3));
/// let rotated = rotate(&image, 45.0, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(rotated.width(), 8);
/// assert_eq!(rotated.height(), 8);
/// ```
pub fn rotate(
    src: &Image,
    angle: f64,
    interpolation: InterpolationMode,
) -> Result<Image, ImageError> {
    let rad = angle.to_radians();
    let size = rotated_size(src.size(), rad);
    let sampler = Sampler::from_mode(interpolation, ROTATE_KERNEL);
    log::debug!("rotate: {} by {angle} degrees -> {size}", src.size());

    let (cos, sin) = (rad.cos(), rad.sin());
    let (cx, cy) = (size.width as f64 / 2.0, size.height as f64 / 2.0);
    let (sx, sy) = (src.width() as f64 / 2.0, src.height() as f64 / 2.0);

    scan::from_fn(size, |i, j| {
        let (x, y) = (i as f64 - cx, j as f64 - cy);
        let p = Point2D::new(x * cos - y * sin + sx, x * sin + y * cos + sy);
        interpolate_pixel(src, p, sampler)
    })
}
