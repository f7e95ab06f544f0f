use bls381::{group_order, PointG1};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    let q = PointG1::random(&mut rng);
    c.bench_function("g1_add", |bencher| {
        bencher.iter(|| black_box(black_box(p) + black_box(q)))
    });
}

fn bench_double(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    c.bench_function("g1_double", |bencher| {
        bencher.iter(|| black_box(black_box(p).double()))
    });
}

fn bench_mul_scalar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    let e = &group_order() - 1u32;
    c.bench_function("g1_mul_scalar", |bencher| {
        bencher.iter(|| black_box(black_box(p).mul_scalar(black_box(&e))))
    });
}

fn bench_clear_cofactor(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    c.bench_function("g1_clear_cofactor", |bencher| {
        bencher.iter(|| black_box(black_box(p).clear_cofactor()))
    });
}

fn bench_subgroup_check(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    c.bench_function("g1_is_in_subgroup", |bencher| {
        bencher.iter(|| black_box(black_box(p).is_in_subgroup()))
    });
}

fn bench_from_compressed(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bytes = PointG1::random(&mut rng).to_compressed();
    c.bench_function("g1_from_compressed", |bencher| {
        bencher.iter(|| PointG1::from_compressed(black_box(&bytes)).expect("decode"))
    });
}

fn bench_mul_small_scalar(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = PointG1::random(&mut rng);
    let e = BigUint::from(0xffff_ffffu64);
    c.bench_function("g1_mul_scalar_32bit", |bencher| {
        bencher.iter(|| black_box(black_box(p).mul_scalar(black_box(&e))))
    });
}

criterion_group!(
    benches,
    bench_add,
    bench_double,
    bench_mul_scalar,
    bench_mul_small_scalar,
    bench_clear_cofactor,
    bench_subgroup_check,
    bench_from_compressed,
);
criterion_main!(benches);
