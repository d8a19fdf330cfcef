// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

use criterion::{criterion_group, criterion_main, Criterion};

use curve13318::scalar_mult;

static P_BYTES: [u8; 64] = [
    0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xe2, 0x52, 0x91, 0x94, 0xab, 0x2c, 0x37, 0x47,
    0x4a, 0x92, 0xfe, 0x30, 0xfb, 0x34, 0xb3, 0x62,
    0xc9, 0x99, 0x96, 0xe9, 0x1a, 0xcf, 0xe9, 0xc7,
    0x0e, 0x59, 0x43, 0xd9, 0x26, 0x55, 0x8a, 0x19,
];

static K_BYTES: [u8; 32] = [
    0x01, 0xd6, 0x74, 0x06, 0x9f, 0x9c, 0x7e, 0xac,
    0x90, 0xa8, 0xd6, 0x2b, 0xeb, 0xa5, 0x63, 0x05,
    0xeb, 0xb8, 0x33, 0x37, 0x62, 0x0e, 0x2a, 0xae,
    0x4f, 0x6a, 0xa4, 0x53, 0xb5, 0xe7, 0xad, 0x27,
];

fn bench_scalar_mult(c: &mut Criterion) {
    c.bench_function("variable base scalar mult", |bench| {
        bench.iter(|| scalar_mult(&K_BYTES, &P_BYTES).unwrap());
    });
}

criterion_group!(benches, bench_scalar_mult);
criterion_main!(benches);
