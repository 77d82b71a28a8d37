//! Background generation throughput at real preset sizes

use carousel_background::generate;
use carousel_core::StyleTag;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("backgrounds");
    group.sample_size(10);

    for style in StyleTag::ALL {
        group.bench_with_input(BenchmarkId::new(style.as_str(), "1080x1350"), &style, |b, &style| {
            b.iter(|| generate(black_box(style), 1080, 1350))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_styles);
criterion_main!(benches);
