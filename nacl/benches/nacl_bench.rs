// Throughput benchmarks for the NaCl operations.
//
// Covers secretbox and box at several message sizes, the one-off key
// agreement, Ed25519 keypair/sign/verify, SHA-512 and constant-time verify.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nacl::{hash, public_box, secretbox, sign, util};

const SIZES: [usize; 4] = [64, 1024, 16 * 1024, 256 * 1024];

fn bench_secretbox(c: &mut Criterion) {
    let key = [0x42u8; 32];
    let nonce = [0x24u8; 24];
    let mut group = c.benchmark_group("secretbox/seal");

    for size in SIZES {
        let message = vec![0xABu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| secretbox::seal(message, &nonce, &key).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("secretbox/open");
    for size in SIZES {
        let boxed = secretbox::seal(&vec![0xABu8; size], &nonce, &key).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &boxed, |b, boxed| {
            b.iter(|| secretbox::open(boxed, &nonce, &key).unwrap());
        });
    }
    group.finish();
}

fn bench_box(c: &mut Criterion) {
    let alice = public_box::keypair().unwrap();
    let bob = public_box::keypair().unwrap();
    let nonce = [0x11u8; 24];
    let message = vec![0x5Au8; 1024];

    c.bench_function("box/keypair", |b| {
        b.iter(|| public_box::keypair().unwrap());
    });

    c.bench_function("box/before", |b| {
        b.iter(|| public_box::before(&bob.public_key, &alice.secret_key[..]).unwrap());
    });

    c.bench_function("box/seal_1k", |b| {
        b.iter(|| public_box::seal(&message, &nonce, &bob.public_key, &alice.secret_key[..]).unwrap());
    });

    let boxed = public_box::seal(&message, &nonce, &bob.public_key, &alice.secret_key[..]).unwrap();
    c.bench_function("box/open_1k", |b| {
        b.iter(|| public_box::open(&boxed, &nonce, &alice.public_key, &bob.secret_key[..]).unwrap());
    });
}

fn bench_sign(c: &mut Criterion) {
    let keypair = sign::keypair().unwrap();
    let message = b"transfer 500 from alice to bob; nonce=42";
    let signed = sign::sign(message, &keypair.secret_key[..]).unwrap();
    let signature = sign::sign_detached(message, &keypair.secret_key[..]).unwrap();

    c.bench_function("ed25519/keypair_generate", |b| {
        b.iter(|| sign::keypair().unwrap());
    });

    c.bench_function("ed25519/sign", |b| {
        b.iter(|| sign::sign(message, &keypair.secret_key[..]).unwrap());
    });

    c.bench_function("ed25519/open", |b| {
        b.iter(|| sign::open(&signed, &keypair.public_key).unwrap());
    });

    c.bench_function("ed25519/verify_detached", |b| {
        b.iter(|| sign::verify_detached(message, &signature, &keypair.public_key).unwrap());
    });
}

fn bench_hash_and_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha512");
    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| hash::hash(data));
        });
    }
    group.finish();

    let x = vec![0x77u8; 1024];
    let y = x.clone();
    c.bench_function("util/verify_1k", |b| {
        b.iter(|| util::verify(&x, &y));
    });
}

criterion_group!(
    benches,
    bench_secretbox,
    bench_box,
    bench_sign,
    bench_hash_and_verify
);
criterion_main!(benches);
