use pixmorph_geometry::{OrientedLineSegment, SegmentPair, SegmentWeight};
use pixmorph_image::{Image, ImageError, ImageSize, Pixel};
use pixmorph_imgproc::{
    color, composite, crop::crop, dither, filter, interpolation::InterpolationMode, resize, warp,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image(width: usize, height: usize, seed: u64) -> Result<Image, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width * height)
        .map(|_| Pixel::from_array(rng.random()))
        .collect();
    Image::new(ImageSize { width, height }, pixels)
}

#[test]
fn test_quantize_eight_bits_round_trip() -> Result<(), ImageError> {
    let image = random_image(17, 11, 1)?;
    assert_eq!(dither::quantize(&image, 8)?, image);
    Ok(())
}

#[test]
fn test_luminance_idempotent() -> Result<(), ImageError> {
    let image = random_image(13, 9, 2)?;
    let once = color::luminance(&image)?;
    assert_eq!(color::luminance(&once)?, once);
    Ok(())
}

#[test]
fn test_luminance_two_by_two() -> Result<(), ImageError> {
    let pixels = vec![
        Pixel::new(255, 0, 0, 0),
        Pixel::new(0, 255, 0, 0),
        Pixel::new(0, 0, 255, 0),
        Pixel::new(0, 0, 0, 0),
    ];
    let image = Image::new([2, 2].into(), pixels.clone())?;
    let grey = color::luminance(&image)?;

    let expected = [0, 76, 150, 0];
    for ((out, src), y) in grey.as_slice().iter().zip(&pixels).zip(expected) {
        assert_eq!(*out, Pixel::new(src.a, y, y, y));
    }
    Ok(())
}

#[test]
fn test_scale_one_is_identity() -> Result<(), ImageError> {
    let image = random_image(12, 7, 3)?;
    assert_eq!(resize::scale(&image, 1.0, InterpolationMode::Nearest)?, image);
    assert_eq!(resize::scale(&image, 1.0, InterpolationMode::Bilinear)?, image);

    let gauss = resize::scale(&image, 1.0, InterpolationMode::Gaussian)?;
    assert_eq!(gauss.size(), image.size());
    Ok(())
}

#[test]
fn test_crop_invariant() -> Result<(), ImageError> {
    let image = random_image(10, 8, 4)?;
    for (x1, y1, x2, y2) in [(0, 0, 10, 8), (2, 3, 7, 8), (9, 0, 10, 1), (4, 4, 4, 6)] {
        let cropped = crop(&image, x1, y1, x2, y2)?;
        assert_eq!(cropped.width(), x2 - x1);
        assert_eq!(cropped.height(), y2 - y1);
        for j in 0..y2 - y1 {
            for i in 0..x2 - x1 {
                assert_eq!(cropped[(i, j)], image[(i + x1, j + y1)]);
            }
        }
    }
    Ok(())
}

#[test]
fn test_cross_dissolve_boundaries() -> Result<(), ImageError> {
    let a = random_image(9, 6, 5)?;
    let b = random_image(9, 6, 6)?;
    assert_eq!(composite::cross_dissolve(&a, &b, 0.0)?, a);
    assert_eq!(composite::cross_dissolve(&a, &b, 1.0)?, b);
    Ok(())
}

#[test]
fn test_composite_opaque_overlay() -> Result<(), ImageError> {
    let base = random_image(8, 8, 7)?;
    let mut overlay = random_image(8, 8, 8)?;
    overlay.as_slice_mut().iter_mut().for_each(|px| px.a = 255);
    assert_eq!(composite::composite_over(&base, &overlay)?, overlay);
    Ok(())
}

#[test]
fn test_warp_identity() -> Result<(), ImageError> {
    let image = random_image(16, 12, 9)?;
    let segments = [
        OrientedLineSegment::new((2.0, 2.0), (12.0, 3.0)),
        OrientedLineSegment::new((14.5, 1.0), (13.0, 10.0)).with_weight(SegmentWeight {
            p: 0.0,
            a: 2.0,
            b: 1.5,
        }),
        OrientedLineSegment::new((3.0, 11.0), (1.0, 5.0)),
    ];
    let pairs: Vec<_> = segments
        .iter()
        .map(|s| SegmentPair::new(*s, *s))
        .collect();
    assert_eq!(warp::field_warp(&image, &pairs)?, image);
    Ok(())
}

#[test]
fn test_warp_two_segments_blend() -> Result<(), ImageError> {
    // a horizontal ramp so the sampled value reveals the source column
    let pixels = (0..20 * 3)
        .map(|i| Pixel::new(255, (i % 20 * 10) as u8, 0, 0))
        .collect();
    let image = Image::new([20, 3].into(), pixels)?;

    // the left pair asks for a shift of +4, the right one for none
    let shifted = SegmentPair::new(
        OrientedLineSegment::new((4.0, 0.0), (4.0, 2.0)),
        OrientedLineSegment::new((0.0, 0.0), (0.0, 2.0)),
    );
    let fixed = SegmentPair::new(
        OrientedLineSegment::new((19.0, 0.0), (19.0, 2.0)),
        OrientedLineSegment::new((19.0, 0.0), (19.0, 2.0)),
    );

    let single = warp::field_warp(&image, &[shifted])?;
    let blended = warp::field_warp(&image, &[shifted, fixed])?;

    for x in 0..16 {
        assert_eq!(single[(x, 0)].r, image[(x + 4, 0)].r);
    }
    // with both pairs the shift fades from +4 at the left edge towards 0 at
    // the right, 4 * (20 - x) / 21
    let shift = |x: usize| (blended[(x, 0)].r as f64 - image[(x, 0)].r as f64) / 10.0;
    assert!(shift(0) > 3.0, "{}", shift(0));
    assert!(shift(10) > 0.5 && shift(10) < 3.5, "{}", shift(10));
    assert!(shift(18).abs() < 0.5, "{}", shift(18));
    for x in 1..19 {
        assert!(shift(x) <= shift(x - 1) + 0.1, "shift grows at {x}");
    }
    Ok(())
}

#[test]
fn test_seeded_operators_are_reproducible() -> Result<(), ImageError> {
    let image = random_image(10, 10, 10)?;

    let run = |seed: u64| -> Result<(Image, Image), ImageError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let noisy = color::add_random_noise_with_rng(&image, 0.2, &mut rng)?;
        let dithered = dither::random_dither_with_rng(&image, 3, &mut rng)?;
        Ok((noisy, dithered))
    };
    assert_eq!(run(99)?, run(99)?);
    Ok(())
}

#[test]
fn test_operators_keep_size() -> Result<(), ImageError> {
    let image = random_image(7, 5, 11)?;
    let size = image.size();

    assert_eq!(color::brighten(&image, 1.2)?.size(), size);
    assert_eq!(color::contrast(&image, 0.7)?.size(), size);
    assert_eq!(color::saturate(&image, 1.5)?.size(), size);
    assert_eq!(color::shift_channel(&image, 2, 40)?.size(), size);
    assert_eq!(dither::ordered_dither_2x2(&image, 2)?.size(), size);
    assert_eq!(dither::floyd_steinberg_dither(&image, 2)?.size(), size);
    assert_eq!(filter::blur_3x3(&image)?.size(), size);
    assert_eq!(filter::edge_detect_3x3(&image)?.size(), size);
    assert_eq!(filter::gaussian_blur_nxn(&image, 5, 1.0)?.size(), size);
    assert_eq!(filter::mode_filter(&image, 4, 2)?.size(), size);
    Ok(())
}

#[test]
fn test_operators_accept_empty_images() -> Result<(), ImageError> {
    let empty = Image::from_size([0, 4].into());
    assert!(color::luminance(&empty)?.is_empty());
    assert!(dither::floyd_steinberg_dither(&empty, 1)?.is_empty());
    assert!(filter::blur_3x3(&empty)?.is_empty());
    assert!(resize::scale(&empty, 2.0, InterpolationMode::Bilinear)?.is_empty());
    assert!(warp::rotate(&empty, 30.0, InterpolationMode::Nearest)?.size().width <= 4);
    assert!(warp::field_warp(&empty, &[])?.is_empty());
    Ok(())
}
