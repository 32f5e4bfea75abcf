use criterion::{criterion_group, criterion_main, Criterion};
use tinydns_proto::{build_query, QueryType};

fn encoding() {
    let mut buf = [0u8; 128];
    let _ = build_query(&mut buf, 0xBEEF, "www.example.com", QueryType::A).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build_query www.example.com A", |b| b.iter(encoding));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
