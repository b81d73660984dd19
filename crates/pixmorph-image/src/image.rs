use std::ops;

use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixmorph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// True when the size holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major: the pixel at column `x` and row `y` lives
/// at `y * width + x`. An image with a zero width or height is valid and
/// holds no pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![Pixel::TRANSPARENT; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.width(), 10);
    /// assert_eq!(image.height(), 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if data.len() != size.area() {
            return Err(ImageError::InvalidChannelShape(data.len(), size.area()));
        }
        Ok(Self { size, data })
    }

    /// Create a new image with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a new image with every pixel set to [`Pixel::TRANSPARENT`].
    pub fn from_size(size: ImageSize) -> Self {
        Self::from_size_val(size, Pixel::TRANSPARENT)
    }

    /// Create an image from interleaved bytes in `a, r, g, b` order.
    ///
    /// This is the hand-off format of an external decoder.
    ///
    /// # Errors
    ///
    /// If `data` does not hold exactly `4 * width * height` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize, Pixel};
    ///
    /// let image = Image::from_raw([2, 1].into(), vec![255, 1, 2, 3, 0, 4, 5, 6]).unwrap();
    ///
    /// assert_eq!(image[(1, 0)], Pixel::new(0, 4, 5, 6));
    /// assert_eq!(image.to_raw(), vec![255, 1, 2, 3, 0, 4, 5, 6]);
    /// ```
    pub fn from_raw(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != size.area() * 4 {
            return Err(ImageError::InvalidChannelShape(data.len(), size.area() * 4));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(size, pixels)
    }

    /// Interleaved bytes in `a, r, g, b` order, for an external encoder.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_array()).collect()
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The pixels, row-major.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// The pixels, row-major, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Consume the image and return its pixels.
    pub fn into_vec(self) -> Vec<Pixel> {
        self.data
    }

    /// Get the pixel at column `x` and row `y`, or `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.data.get(y * self.width() + x)
    }

    /// Mutable variant of [`Image::get`].
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let width = self.width();
        self.data.get_mut(y * width + x)
    }

    /// Write the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] when `(x, y)` is outside the canvas.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageError> {
        let (width, height) = (self.width(), self.height());
        match self.get_mut(x, y) {
            Some(dst) => {
                *dst = pixel;
                Ok(())
            }
            None => Err(ImageError::PixelIndexOutOfBounds(x, y, width, height)),
        }
    }
}

/// Index by `(x, y)`. Panics when the coordinate is outside the canvas.
impl ops::Index<(usize, usize)> for Image {
    type Output = Pixel;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) out of bounds for {}",
            self.size
        );
        &self.data[y * self.width() + x]
    }
}

impl ops::IndexMut<(usize, usize)> for Image {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) out of bounds for {}",
            self.size
        );
        let width = self.width();
        &mut self.data[y * width + x]
    }
}
