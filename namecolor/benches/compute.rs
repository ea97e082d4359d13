use criterion::{Criterion, black_box, criterion_group, criterion_main};
use namecolor::{
    ComputeOptions, DescribeOptions, checksum, compute, described_by,
};

fn bench_checksum(c: &mut Criterion) {
    let name = "abcdefghijklmnopqrst";

    c.bench_function("checksum_20_chars", |b| {
        b.iter(|| black_box(checksum(black_box(name))));
    });
}

fn bench_compute_hex(c: &mut Criterion) {
    let options = ComputeOptions::hex();

    c.bench_function("compute_hex", |b| {
        b.iter(|| black_box(compute(black_box("builderman"), &options)));
    });
}

fn bench_described_by(c: &mut Criterion) {
    let options = DescribeOptions::default();

    c.bench_function("described_by_miss", |b| {
        b.iter(|| {
            black_box(described_by(black_box("old ultraviolet"), &options))
        });
    });
}

criterion_group!(colors, bench_checksum, bench_compute_hex, bench_described_by);
criterion_main!(colors);
