//! Benchmarks for the brandmark pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::DynamicImage;

use brandmark::{
    compose_banner, compose_mark, to_svg, BannerStyle, Codec, Format, ImageCodec, MarkStyle,
    Palette, Renderer, SvgRenderer,
};

// -- Composition benchmarks --

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    let palette = Palette::default();
    let mark_style = MarkStyle::default();
    let banner_style = BannerStyle::default();

    group.bench_function("compose_mark_500", |b| {
        b.iter(|| compose_mark(black_box(500), &mark_style, &palette))
    });

    group.bench_function("compose_banner", |b| {
        b.iter(|| compose_banner(black_box(&banner_style), &palette))
    });

    let banner = compose_banner(&banner_style, &palette);
    group.bench_function("banner_to_svg", |b| b.iter(|| to_svg(black_box(&banner))));

    group.finish();
}

// -- Rasterization benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(20);

    let renderer = SvgRenderer::default();
    let palette = Palette::default();

    let favicon = compose_mark(180, &MarkStyle::default(), &palette);
    group.bench_function("render_mark_180", |b| {
        b.iter(|| renderer.render(black_box(&favicon)).unwrap())
    });

    let banner = compose_banner(&BannerStyle::default(), &palette);
    group.bench_function("render_banner", |b| {
        b.iter(|| renderer.render(black_box(&banner)).unwrap())
    });

    let pixels = DynamicImage::ImageRgba8(renderer.render(&favicon).unwrap());
    group.bench_function("encode_png_180", |b| {
        b.iter(|| ImageCodec.encode(black_box(&pixels), Format::Png).unwrap())
    });
    group.bench_function("encode_webp_180", |b| {
        b.iter(|| {
            ImageCodec
                .encode(black_box(&pixels), Format::WebP { quality: 82 })
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_composition, bench_rendering);
criterion_main!(benches);
