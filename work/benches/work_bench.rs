use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tourid_ledger::Block;
use tourid_types::{BlockHash, Timestamp};
use tourid_work::{validate_sealed, MineControl, WorkGenerator};

fn bench_pow_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_generation");
    let control = MineControl::new();

    // Low difficulty levels that complete quickly enough for benchmarking.
    // Each additional leading zero multiplies the expected search by 16.
    for difficulty in [0u32, 1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("mine", difficulty),
            &difficulty,
            |b, &diff| {
                b.iter(|| {
                    let candidate =
                        Block::new(1, Vec::new(), Timestamp::new(42), BlockHash::new([0x42; 32]))
                            .unwrap();
                    black_box(
                        WorkGenerator
                            .mine(black_box(candidate), black_box(diff), &control)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_pow_validation(c: &mut Criterion) {
    let control = MineControl::new();
    let candidate =
        Block::new(1, Vec::new(), Timestamp::new(42), BlockHash::new([0x42; 32])).unwrap();
    let sealed = WorkGenerator.mine(candidate, 2, &control).unwrap();

    c.bench_function("pow_validate_sealed", |b| {
        b.iter(|| black_box(validate_sealed(black_box(&sealed), black_box(2)).unwrap()));
    });
}

criterion_group!(benches, bench_pow_generation, bench_pow_validation);
criterion_main!(benches);
