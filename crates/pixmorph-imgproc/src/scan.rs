use pixmorph_image::{Image, ImageError, ImageSize, Pixel};

/// Iterator over pixel coordinates in row-major order.
///
/// Rows are visited top to bottom and, within a row, columns left to right.
/// Operators whose result depends on the visiting order (error diffusion)
/// iterate with this type so the order is part of their contract.
#[derive(Debug, Clone)]
pub struct RowMajor {
    width: usize,
    height: usize,
    x: usize,
    y: usize,
}

impl Iterator for RowMajor {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.y >= self.height {
            return None;
        }
        let item = (self.x, self.y);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.width == 0 || self.y >= self.height {
            0
        } else {
            (self.height - self.y) * self.width - self.x
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowMajor {}

/// Visit every coordinate of a canvas of `size` in row-major order.
///
/// # Example
///
/// ```
/// use pixmorph_image::ImageSize;
/// use pixmorph_imgproc::scan::row_major;
///
/// let coords: Vec<_> = row_major(ImageSize { width: 2, height: 2 }).collect();
/// assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn row_major(size: ImageSize) -> RowMajor {
    RowMajor {
        width: size.width,
        height: size.height,
        x: 0,
        y: 0,
    }
}

/// Apply a function to each pixel of `src` and collect the results in a new image.
pub fn map_pixels(src: &Image, mut f: impl FnMut(&Pixel) -> Pixel) -> Result<Image, ImageError> {
    let data = src.as_slice().iter().map(|px| f(px)).collect();
    Image::new(src.size(), data)
}

/// Build a new image of `size` by evaluating `f(x, y)` in row-major order.
pub fn from_fn(
    size: ImageSize,
    mut f: impl FnMut(usize, usize) -> Pixel,
) -> Result<Image, ImageError> {
    let data = row_major(size).map(|(x, y)| f(x, y)).collect();
    Image::new(size, data)
}
