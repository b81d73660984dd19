use pixmorph_image::{clamp_byte, Channel, Image, ImageError};

use crate::scan;

/// Add `amount` to a single channel and clamp.
///
/// `selector` follows [`Channel::from_index`]: `0 = a, 1 = r, 2 = g, 3 = b`.
/// Any other selector returns an unchanged copy.
pub fn shift_channel(src: &Image, selector: usize, amount: i32) -> Result<Image, ImageError> {
    let Some(channel) = Channel::from_index(selector) else {
        return Ok(src.clone());
    };

    scan::map_pixels(src, |px| {
        let mut out = *px;
        let c = out.channel_mut(channel);
        *c = clamp_byte(i64::from(*c) + i64::from(amount));
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmorph_image::Pixel;

    #[test]
    fn shift_each_channel() -> Result<(), ImageError> {
        let image = Image::from_size_val([2, 2].into(), Pixel::new(10, 20, 30, 40));

        let out = shift_channel(&image, 0, 5)?;
        assert_eq!(out[(1, 1)], Pixel::new(15, 20, 30, 40));
        let out = shift_channel(&image, 1, -25)?;
        assert_eq!(out[(1, 1)], Pixel::new(10, 0, 30, 40));
        let out = shift_channel(&image, 2, 300)?;
        assert_eq!(out[(1, 1)], Pixel::new(10, 20, 255, 40));
        let out = shift_channel(&image, 3, 1)?;
        assert_eq!(out[(1, 1)], Pixel::new(10, 20, 30, 41));
        Ok(())
    }

    #[test]
    fn shift_unknown_selector() -> Result<(), ImageError> {
        let image = Image::from_size_val([2, 2].into(), Pixel::new(10, 20, 30, 40));
        assert_eq!(shift_channel(&image, 4, 100)?, image);
        Ok(())
    }

    #[test]
    fn shift_extreme_amounts_saturate() -> Result<(), ImageError> {
        let image = Image::from_size_val([2, 1].into(), Pixel::new(10, 20, 30, 40));
        let out = shift_channel(&image, 1, i32::MAX)?;
        assert_eq!(out[(0, 0)], Pixel::new(10, 255, 30, 40));
        let out = shift_channel(&image, 3, i32::MIN)?;
        assert_eq!(out[(1, 0)], Pixel::new(10, 20, 30, 0));
        Ok(())
    }
}
