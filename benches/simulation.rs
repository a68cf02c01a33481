use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ab_simulator::{
    generate_seeded, sensitivity_sweep, summarize, two_proportion_z_test, Group, SimParams,
};

fn pipeline_benchmark(c: &mut Criterion) {
    let params = SimParams::new(1000, 1000, 0.10, 0.12).unwrap();

    c.bench_function("generate_summarize_test_n1000", |b| {
        b.iter(|| {
            let records = generate_seeded(black_box(&params), black_box(42)).unwrap();
            let summaries = summarize(&records).unwrap();
            let result =
                two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B]).unwrap();
            black_box(result.p_value);
        });
    });
}

fn z_test_benchmark(c: &mut Criterion) {
    let params = SimParams::new(1000, 1000, 0.10, 0.12).unwrap();
    let records = generate_seeded(&params, 42).unwrap();
    let summaries = summarize(&records).unwrap();

    c.bench_function("two_proportion_z_test_hot_path", |b| {
        b.iter(|| {
            let result = two_proportion_z_test(
                black_box(&summaries[&Group::A]),
                black_box(&summaries[&Group::B]),
            )
            .unwrap();
            black_box(result.z_score);
        });
    });
}

fn sweep_benchmark(c: &mut Criterion) {
    c.bench_function("sensitivity_sweep_max2000", |b| {
        b.iter(|| {
            let points = sensitivity_sweep(black_box(0.10), black_box(0.12), 2000, 42).unwrap();
            black_box(points.len());
        });
    });
}

criterion_group!(benches, pipeline_benchmark, z_test_benchmark, sweep_benchmark);
criterion_main!(benches);
