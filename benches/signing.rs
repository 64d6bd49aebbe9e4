use cookie_signer::hex::{self, Padding};
use cookie_signer::{CookieSigner, FixedClock, SessionTokenCodec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SECRET: &str = "benchmark-secret-value-0123456789";

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    for size in [32usize, 256, 4096].iter() {
        let data = vec![0xa5u8; *size];
        let encoded = hex::encode(&data);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| hex::encode(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| hex::decode(black_box(encoded), Padding::Strict))
        });
    }

    group.finish();
}

fn bench_signing(c: &mut Criterion) {
    let signer = CookieSigner::new(SECRET).unwrap();
    let signed = signer.create_signed_string(&[7u8; 22]).unwrap();

    let mut group = c.benchmark_group("signing");
    group.bench_function("create_signed_string", |b| {
        b.iter(|| signer.create_signed_string(black_box(&[7u8; 22])))
    });
    group.bench_function("verify_signed_string", |b| {
        b.iter(|| signer.verify_signed_string(black_box(&signed)))
    });
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let codec = SessionTokenCodec::with_clock(
        CookieSigner::new(SECRET).unwrap(),
        FixedClock::new(1_704_067_200),
    );
    let cookie = codec.create_signed_string("bench-session").unwrap();

    let mut group = c.benchmark_group("session");
    group.bench_function("create", |b| {
        b.iter(|| codec.create_signed_string(black_box("bench-session")))
    });
    group.bench_function("verify", |b| {
        b.iter(|| codec.verify_session(black_box(&cookie)))
    });
    group.finish();
}

criterion_group!(benches, bench_hex, bench_signing, bench_session);
criterion_main!(benches);
