//! STARK curve Pedersen hash benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use stark_curve::{U256, pedersen_hash};

fn bench_pedersen(c: &mut Criterion) {
    let a = U256::from_be_hex("03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb");
    let b = U256::from_be_hex("0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a");

    let mut group = c.benchmark_group("pedersen");
    group.bench_function("hash", |bench| bench.iter(|| pedersen_hash(&a, &b)));
    group.finish();
}

criterion_group!(benches, bench_pedersen);
criterion_main!(benches);
