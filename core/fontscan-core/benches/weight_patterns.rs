use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fontscan_core::entry::describe_fonts;
use fontscan_core::normalize::weight_from_text_or_default;
use std::path::PathBuf;

fn bench_weight_patterns(c: &mut Criterion) {
    let names = [
        "dejavu sans extralight",
        "noto serif display semibold italic",
        "source code pro black",
        "garamond premier pro",
    ];
    c.bench_function("weight_from_text_or_default", |b| {
        b.iter(|| {
            for name in names {
                black_box(weight_from_text_or_default(black_box(name)));
            }
        })
    });

    let paths: Vec<PathBuf> = (0..1000)
        .map(|i| PathBuf::from(format!("/fonts/Family{i}-SemiCondensedBoldItalic.ttf")))
        .collect();
    c.bench_function("describe_fonts_1000", |b| {
        b.iter(|| black_box(describe_fonts(black_box(&paths))))
    });
}

criterion_group!(benches, bench_weight_patterns);
criterion_main!(benches);
