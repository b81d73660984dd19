use pixmorph_image::{clamp_byte, Image, ImageError, Pixel};

use crate::scan;

fn check_same_size(op: &'static str, left: &Image, right: &Image) -> Result<(), ImageError> {
    if left.size() != right.size() {
        return Err(ImageError::SizeMismatch {
            op,
            left: left.size(),
            right: right.size(),
        });
    }
    Ok(())
}

/// Replace the alpha channel of `src` with the red channel of `matte`.
///
/// `matte` may be larger than `src`; only its top left corner is read.
///
/// # Errors
///
/// [`ImageError::SizeMismatch`] when `matte` is narrower or shorter than `src`.
pub fn apply_matte(src: &Image, matte: &Image) -> Result<Image, ImageError> {
    if matte.width() < src.width() || matte.height() < src.height() {
        return Err(ImageError::SizeMismatch {
            op: "apply_matte",
            left: src.size(),
            right: matte.size(),
        });
    }

    scan::from_fn(src.size(), |x, y| {
        let mut px = src[(x, y)];
        px.a = matte[(x, y)].r;
        px
    })
}

/// Lay `overlay` over `base` with the "over" operator.
///
/// For overlay alpha `oa` and base alpha `ba`, both in `[0, 1]`:
///
/// ```text
/// out_a = oa + ba * (1 - oa)
/// out_c = (overlay_c * oa + base_c * ba * (1 - oa)) / out_a
/// ```
///
/// A base alpha of 0 is blended as if it were fully opaque.
///
/// # Errors
///
/// [`ImageError::SizeMismatch`] when the images differ in size.
pub fn composite_over(base: &Image, overlay: &Image) -> Result<Image, ImageError> {
    check_same_size("composite_over", base, overlay)?;

    let data = base
        .as_slice()
        .iter()
        .zip(overlay.as_slice())
        .map(|(b, o)| {
            let oa = o.a as f64 / 255.0;
            let ba = if b.a == 0 { 1.0 } else { b.a as f64 / 255.0 };
            let out_a = oa + ba * (1.0 - oa);

            let blend = |oc: u8, bc: u8| {
                clamp_byte((oc as f64 * oa + bc as f64 * ba * (1.0 - oa)) / out_a)
            };
            Pixel::new(
                clamp_byte((out_a * 255.0).round()),
                blend(o.r, b.r),
                blend(o.g, b.g),
                blend(o.b, b.b),
            )
        })
        .collect();
    Image::new(base.size(), data)
}

/// Linear blend of two images, `src + weight * (dst - src)` per channel.
///
/// `weight = 0` reproduces `src` and `weight = 1` reproduces `dst`.
///
/// # Errors
///
/// [`ImageError::SizeMismatch`] when the images differ in size.
pub fn cross_dissolve(src: &Image, dst: &Image, weight: f64) -> Result<Image, ImageError> {
    check_same_size("cross_dissolve", src, dst)?;

    let data = src
        .as_slice()
        .iter()
        .zip(dst.as_slice())
        .map(|(s, d)| {
            let s = s.to_array();
            let d = d.to_array();
            Pixel::from_array(std::array::from_fn(|k| {
                clamp_byte(s[k] as f64 + weight * (d[k] as f64 - s[k] as f64))
            }))
        })
        .collect();
    Image::new(dst.size(), data)
}
