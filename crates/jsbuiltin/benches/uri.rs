use criterion::{criterion_group, criterion_main, Criterion};
use jsbuiltin::{decode_uri, decode_uri_component, encode_uri, encode_uri_component};
use std::hint::black_box;

fn sample_url() -> String {
    "https://example.com/поиск?q=Привет мир&lang=ru&tags=a,b,c#результаты".repeat(16)
}

fn bench_encode(c: &mut Criterion) {
    let url = sample_url();
    c.bench_function("encode_uri", |b| b.iter(|| encode_uri(black_box(&url))));
    c.bench_function("encode_uri_component", |b| {
        b.iter(|| encode_uri_component(black_box(&url)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let url = sample_url();
    let encoded_uri = encode_uri(&url);
    let encoded_component = encode_uri_component(&url);
    c.bench_function("decode_uri", |b| {
        b.iter(|| decode_uri(black_box(&encoded_uri)).unwrap())
    });
    c.bench_function("decode_uri_component", |b| {
        b.iter(|| decode_uri_component(black_box(&encoded_component)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
