use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixmorph_geometry::{OrientedLineSegment, SegmentPair};
use pixmorph_image::{Image, Pixel};
use pixmorph_imgproc::{interpolation::InterpolationMode, resize::scale, warp};

fn gradient(width: usize, height: usize) -> Image {
    let pixels = (0..width * height)
        .map(|i| Pixel::new(255, (i % width) as u8, (i / width) as u8, 128))
        .collect();
    Image::new([width, height].into(), pixels).unwrap()
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rotate");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = gradient(*width, *height);

        for (name, mode) in [
            ("nearest", InterpolationMode::Nearest),
            ("bilinear", InterpolationMode::Bilinear),
            ("gaussian", InterpolationMode::Gaussian),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &image,
                |b, i| b.iter(|| warp::rotate(black_box(i), black_box(30.0), black_box(mode))),
            );
        }
    }
    group.finish();
}

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = gradient(*width, *height);

        for factor in [0.5, 2.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("bilinear_{factor}"), &parameter_string),
                &image,
                |b, i| {
                    b.iter(|| {
                        scale(
                            black_box(i),
                            black_box(factor),
                            black_box(InterpolationMode::Bilinear),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_field_warp(c: &mut Criterion) {
    let mut group = c.benchmark_group("FieldWarp");

    let (width, height) = (256, 224);
    let image = gradient(width, height);
    group.throughput(criterion::Throughput::Elements((width * height) as u64));

    for num_pairs in [1, 4, 16] {
        let pairs: Vec<_> = (0..num_pairs)
            .map(|k| {
                let y = (k as f64 + 0.5) * height as f64 / num_pairs as f64;
                SegmentPair::new(
                    OrientedLineSegment::new((20.0, y), (200.0, y + 3.0)),
                    OrientedLineSegment::new((30.0, y), (210.0, y)),
                )
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("pairs", num_pairs),
            &(&image, &pairs),
            |b, i| b.iter(|| warp::field_warp(black_box(i.0), black_box(i.1))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_rotate, bench_scale, bench_field_warp);
criterion_main!(benches);
