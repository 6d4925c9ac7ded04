use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thermalrange_core::{
    build_all_profiles, plan_perimeter_coverage, recommend_lens, DetectionLevel, OpticalSpec,
    TargetClass, ThermalEngine,
};

fn bench_profiles(c: &mut Criterion) {
    let spec = OpticalSpec::new(13.0, 17.0, 640).unwrap();

    let mut group = c.benchmark_group("profiles");
    group.bench_function("build_all_640_13mm", |b| {
        b.iter(|| build_all_profiles(black_box(&spec)))
    });
    group.bench_function("engine_site_estimate", |b| {
        let engine = ThermalEngine::default();
        b.iter(|| engine.estimate_perimeter(black_box(&spec), black_box(12_000.0)))
    });
    group.finish();
}

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");
    group.bench_function("perimeter_1000ft", |b| {
        b.iter(|| plan_perimeter_coverage(black_box(1000.0), black_box(300.0), black_box(20.0)))
    });
    group.bench_function("lens_identification_300m", |b| {
        b.iter(|| {
            recommend_lens(
                black_box(300.0),
                black_box(17.0),
                black_box(640),
                TargetClass::Human,
                DetectionLevel::Identification,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_profiles, bench_planning);
criterion_main!(benches);
