use pixmorph_image::{clamp_index, Image, Pixel};

/// How an operator treats a read outside the canvas.
///
/// Each operator documents the policy it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Read the nearest edge pixel.
    /// Used by the 3x3 filters and error diffusion.
    Replicate,

    /// Read a transparent black pixel.
    /// Used by the nearest and bilinear samplers.
    ZeroFill,

    /// Drop the tap: it contributes neither weight nor color.
    /// Used by the NxN gaussian blur and the mode filter.
    Skip,

    /// Count the tap's weight in the normalizer but contribute no color.
    /// Used by the gaussian sampler; darkens the edges.
    WeightOnly,
}

/// Result of reading one tap under a [`BorderPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// A pixel to accumulate.
    Sample(Pixel),
    /// Outside the canvas; only the weight counts.
    WeightOnly,
    /// Outside the canvas; ignore entirely.
    Skip,
}

/// Read the pixel at `(x, y)` honoring `policy` when it lies outside the canvas.
///
/// `Replicate` on an empty image yields [`Tap::Skip`].
pub fn fetch(img: &Image, x: isize, y: isize, policy: BorderPolicy) -> Tap {
    let width = img.width() as isize;
    let height = img.height() as isize;
    let inside = x >= 0 && y >= 0 && x < width && y < height;

    if inside {
        return Tap::Sample(img[(x as usize, y as usize)]);
    }

    match policy {
        BorderPolicy::Replicate => {
            if img.is_empty() {
                return Tap::Skip;
            }
            let nx = clamp_index(x, img.width());
            let ny = clamp_index(y, img.height());
            Tap::Sample(img[(nx, ny)])
        }
        BorderPolicy::ZeroFill => Tap::Sample(Pixel::TRANSPARENT),
        BorderPolicy::Skip => Tap::Skip,
        BorderPolicy::WeightOnly => Tap::WeightOnly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmorph_image::{Image, ImageError, Pixel};

    fn image() -> Result<Image, ImageError> {
        Image::new(
            [2, 2].into(),
            vec![
                Pixel::new(1, 1, 1, 1),
                Pixel::new(2, 2, 2, 2),
                Pixel::new(3, 3, 3, 3),
                Pixel::new(4, 4, 4, 4),
            ],
        )
    }

    #[test]
    fn fetch_inside() -> Result<(), ImageError> {
        let img = image()?;
        for policy in [
            BorderPolicy::Replicate,
            BorderPolicy::ZeroFill,
            BorderPolicy::Skip,
            BorderPolicy::WeightOnly,
        ] {
            assert_eq!(fetch(&img, 1, 0, policy), Tap::Sample(Pixel::new(2, 2, 2, 2)));
        }
        Ok(())
    }

    #[test]
    fn fetch_outside() -> Result<(), ImageError> {
        let img = image()?;
        assert_eq!(
            fetch(&img, 5, -3, BorderPolicy::Replicate),
            Tap::Sample(Pixel::new(2, 2, 2, 2))
        );
        assert_eq!(
            fetch(&img, -1, 1, BorderPolicy::ZeroFill),
            Tap::Sample(Pixel::TRANSPARENT)
        );
        assert_eq!(fetch(&img, 2, 0, BorderPolicy::Skip), Tap::Skip);
        assert_eq!(fetch(&img, 0, 2, BorderPolicy::WeightOnly), Tap::WeightOnly);
        Ok(())
    }

    #[test]
    fn fetch_replicate_empty() {
        let img = Image::from_size([0, 0].into());
        assert_eq!(fetch(&img, 0, 0, BorderPolicy::Replicate), Tap::Skip);
    }
}
