use pixmorph_image::{Image, ImageError, ImageSize};

/// Crop an image to the region `[x1, x2) x [y1, y2)`.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x1` - The left edge of the region, inclusive.
/// * `y1` - The top edge of the region, inclusive.
/// * `x2` - The right edge of the region, exclusive.
/// * `y2` - The bottom edge of the region, exclusive.
///
/// # Errors
///
/// [`ImageError::RegionOutOfBounds`] unless `x1 <= x2 <= width` and
/// `y1 <= y2 <= height`. Nothing is clamped.
///
/// # Examples
///
/// ```rust
/// use pixmorph_image::{Image, Pixel};
/// use pixmorph_imgproc::crop::crop;
///
/// let pixels = (0..16).map(|v| Pixel::new(255, v, 0, 0)).collect();
/// let image = Image::new([4, 4].into(), pixels).unwrap();
///
/// let cropped = crop(&image, 1, 1, 3, 3).unwrap();
///
/// let red: Vec<u8> = cropped.as_slice().iter().map(|px| px.r).collect();
/// assert_eq!(red, vec![5, 6, 9, 10]);
/// ```
pub fn crop(src: &Image, x1: usize, y1: usize, x2: usize, y2: usize) -> Result<Image, ImageError> {
    if x1 > x2 || y1 > y2 || x2 > src.width() || y2 > src.height() {
        return Err(ImageError::RegionOutOfBounds {
            op: "crop",
            x1,
            y1,
            x2,
            y2,
            width: src.width(),
            height: src.height(),
        });
    }

    let size = ImageSize {
        width: x2 - x1,
        height: y2 - y1,
    };
    let mut dst = Image::from_size(size);
    if size.is_empty() {
        return Ok(dst);
    }

    for (i, dst_row) in dst.as_slice_mut().chunks_exact_mut(size.width).enumerate() {
        // get the slice at the left edge of the region
        let offset = (y1 + i) * src.width() + x1;
        dst_row.copy_from_slice(&src.as_slice()[offset..offset + size.width]);
    }

    Ok(dst)
}
