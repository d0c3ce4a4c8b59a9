//! Row-major vs column-major, averaged by criterion.
//!
//! Run with: `cargo bench --bench traversal_bench`

use cache_demo::{AlignedMatrix, sum_column_major, sum_row_major};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.sample_size(10);

    // 256 fits in L2, 1024 in L3 on most machines, 4096 in neither.
    for n in [256, 1024, 4096] {
        let m = AlignedMatrix::new(n).expect("allocation failed");
        group.throughput(Throughput::Bytes((n * n * size_of::<i32>()) as u64));

        group.bench_with_input(BenchmarkId::new("row_major", n), &m, |b, m| {
            b.iter(|| sum_row_major(black_box(m), n));
        });
        group.bench_with_input(BenchmarkId::new("column_major", n), &m, |b, m| {
            b.iter(|| sum_column_major(black_box(m), n));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
