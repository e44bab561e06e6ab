// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Edwards point arithmetic benchmarks

#![allow(non_snake_case)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edwards25519::constants::{ED25519_BASEPOINT_COMPRESSED, ED25519_BASEPOINT_POINT};
use edwards25519::edwards::vartime;
use edwards25519::{EdwardsBasepointTable, EdwardsPoint, Scalar};

fn test_scalar_a() -> Scalar {
    Scalar::from_bytes([
        0x1a, 0x0e, 0x97, 0x8a, 0x90, 0xf6, 0x62, 0x2d, 0x37, 0x47, 0x02, 0x3f, 0x8a, 0xd8, 0x26,
        0x4d, 0xa7, 0x58, 0xaa, 0x1b, 0x88, 0xe0, 0x40, 0xd1, 0x58, 0x9e, 0x7b, 0x7f, 0x23, 0x76,
        0xef, 0x09,
    ])
}

fn test_scalar_b() -> Scalar {
    Scalar::from_bytes([
        0x91, 0x26, 0x7a, 0xcf, 0x25, 0xc2, 0x09, 0x1b, 0xa2, 0x17, 0x74, 0x7b, 0x66, 0xf0, 0xb3,
        0x2e, 0x9d, 0xf2, 0xa5, 0x67, 0x41, 0xcf, 0xda, 0xc4, 0x56, 0xa7, 0xd4, 0xaa, 0xb8, 0x60,
        0x8a, 0x05,
    ])
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    let P = EdwardsPoint::mul_base(&test_scalar_a());
    let encoded = P.compress();

    group.bench_function("compress", |b| b.iter(|| black_box(&P).compress()));
    group.bench_function("decompress", |b| {
        b.iter(|| black_box(&encoded).decompress())
    });
    group.bench_function("decompress basepoint", |b| {
        b.iter(|| black_box(&ED25519_BASEPOINT_COMPRESSED).decompress())
    });

    group.finish();
}

fn bench_group_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("group operations");
    let P = EdwardsPoint::mul_base(&test_scalar_a());
    let Q = EdwardsPoint::mul_base(&test_scalar_b());

    group.bench_function("add", |b| b.iter(|| black_box(P) + black_box(Q)));
    group.bench_function("double", |b| b.iter(|| black_box(&P).double()));
    group.bench_function("mul_by_cofactor", |b| {
        b.iter(|| black_box(&P).mul_by_cofactor())
    });
    group.bench_function("precompute", |b| b.iter(|| black_box(&P).precompute()));

    group.finish();
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar multiplication");
    let a = test_scalar_a();
    let b_scalar = test_scalar_b();
    let A = EdwardsPoint::mul_base(&a);
    let table_A = A.precompute();
    let table_B = ED25519_BASEPOINT_POINT.precompute();

    group.bench_function("variable-base", |b| b.iter(|| black_box(A) * black_box(a)));
    group.bench_function("fixed-base", |b| {
        b.iter(|| EdwardsPoint::mul_base(black_box(&a)))
    });
    group.bench_function("basepoint table creation", |b| {
        b.iter(|| EdwardsBasepointTable::create(black_box(&A)))
    });
    group.bench_function("vartime double-base", |b| {
        b.iter(|| vartime::double_scalar_mul_basepoint(black_box(&a), &A, black_box(&b_scalar)))
    });
    group.bench_function("vartime double-base, B precomputed", |b| {
        b.iter(|| {
            vartime::double_scalar_mul_precomputed(black_box(&a), &A, black_box(&b_scalar), &table_B)
        })
    });
    group.bench_function("vartime double-base, both precomputed", |b| {
        b.iter(|| {
            vartime::double_scalar_mul_both_precomputed(
                black_box(&a),
                &table_A,
                black_box(&b_scalar),
                &table_B,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_group_ops, bench_scalar_mul);
criterion_main!(benches);
