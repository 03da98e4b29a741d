use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ezeasing::{catalog, Easing};

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    for &curve in Easing::all() {
        group.bench_function(curve.display_name(), |b| {
            b.iter(|| {
                let mut acc = 0.0_f32;
                for i in 0..=100 {
                    acc += curve.apply(black_box(i as f32 / 100.0));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("find first", |b| {
        b.iter(|| catalog::find(black_box("Linear")))
    });
    c.bench_function("find last", |b| {
        b.iter(|| catalog::find(black_box("In out bounce")))
    });
    c.bench_function("find miss", |b| {
        b.iter(|| catalog::find(black_box("nonexistent")))
    });
}

criterion_group!(benches, bench_apply, bench_lookup);
criterion_main!(benches);
