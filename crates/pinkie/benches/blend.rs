use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pinkie::{BlendMode, Palette, Rgba};

pub fn run_benchmarks(c: &mut Criterion) {
    let background = Rgba::rgba8(0x55, 0xf6, 0xa3, 0x80);
    let foreground = Rgba::rgba8(0xff, 0xb1, 0x57, 0x80);

    // Compare blend modes on the same pair of colors.
    let mut group = c.benchmark_group("blend");
    for mode in BlendMode::all() {
        group.bench_function(mode.name(), |b| {
            b.iter(|| black_box(&background).blend(black_box(&foreground), mode))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("hsla-round-trip", |b| {
        b.iter(|| black_box(&background).to_hsla().to_rgba(8))
    });
    group.bench_function("cmyk", |b| b.iter(|| black_box(&background).to_cmyk()));
    group.bench_function("triadic", |b| b.iter(|| black_box(&background).triadic()));
    group.finish();

    let web = Palette::web();
    c.bench_function("closest-web-color", |b| {
        b.iter(|| black_box(&foreground).closest(web.colors()))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
