use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lis_dp::{length_of_lis, problems::lis::LisProblem, DpEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_nums(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_lis_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis_length");
    for &len in &[100usize, 1_000, 4_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || random_nums(&mut StdRng::seed_from_u64(42), len),
                |nums| criterion::black_box(length_of_lis(&nums)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_lis_witness(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis_engine_witness");
    for &len in &[100usize, 1_000, 4_000] {
        let nums = random_nums(&mut StdRng::seed_from_u64(7), len);
        group.bench_function(format!("lis_run_{len}"), |b| {
            b.iter(|| {
                let (cost, path) = DpEngine::new(LisProblem::new(&nums)).run();
                criterion::black_box((cost, path))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lis_length, bench_lis_witness);
criterion_main!(benches);
