// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Edwards point arithmetic tests against the public API.

#![allow(non_snake_case)]

use edwards25519::constants::{
    BASEPOINT_ORDER, ED25519_BASEPOINT_COMPRESSED, ED25519_BASEPOINT_POINT, EIGHT_TORSION,
};
use edwards25519::traits::{Identity, IsIdentity, ValidityCheck};
use edwards25519::{CompressedEdwardsY, EdwardsBasepointTable, EdwardsPoint, Error, Scalar};
use proptest::prelude::*;

fn point_from_hex(s: &str) -> EdwardsPoint {
    let bytes: [u8; 32] = hex::decode(s).unwrap().try_into().unwrap();
    CompressedEdwardsY(bytes).decompress().unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Scalar> {
    any::<[u8; 32]>().prop_map(Scalar::from_bytes)
}

fn arb_point() -> impl Strategy<Value = EdwardsPoint> {
    (arb_scalar(), 0usize..8).prop_map(|(s, t)| EdwardsPoint::mul_base(&s) + EIGHT_TORSION[t])
}

#[test]
fn basepoint_multiples() {
    let B = ED25519_BASEPOINT_POINT;
    let B2 = point_from_hex("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022");
    let B3 = point_from_hex("d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712");
    let B4 = point_from_hex("2f1132ca61ab38dff00f2fea3228f24c6c71d58085b80e47e19515cb27e8d047");
    let B8 = point_from_hex("b4b937fca95b2f1e93e41e62fc3c78818ff38a66096fad6e7973e5c90006d321");

    assert_eq!(B.double(), B2);
    assert_eq!(B + B, B2);
    assert_eq!(B2 + B, B3);
    assert_eq!(B3 - B, B2);
    assert_eq!(B2.double(), B4);
    assert_eq!(B.mul_by_cofactor(), B8);
    assert_eq!(B * Scalar::from(3u64), B3);
    assert_eq!(EdwardsPoint::mul_base(&Scalar::from(8u64)), B8);
}

#[test]
fn double_scalar_mul_basepoint_vectors() {
    let B8 = point_from_hex("b4b937fca95b2f1e93e41e62fc3c78818ff38a66096fad6e7973e5c90006d321");
    let P = point_from_hex("2f1132ca61ab38dff00f2fea3228f24c6c71d58085b80e47e19515cb27e8d047");
    let id = EdwardsPoint::identity();
    let zero = Scalar::ZERO;
    let one = Scalar::ONE;
    let two = Scalar::from(2u64);
    let four = Scalar::from(4u64);
    let eight = Scalar::from(8u64);

    let cases = [
        (zero, id, zero, id),
        (zero, id, eight, B8),
        (two, P, zero, B8),
        (one, P, four, B8),
    ];
    for (a, A, b, expected) in cases {
        let R = EdwardsPoint::vartime_double_scalar_mul_basepoint(&a, &A, &b);
        assert_eq!(R, expected);
    }
}

#[test]
fn double_scalar_mul_precomputed_vectors() {
    use edwards25519::edwards::vartime;

    let B = ED25519_BASEPOINT_POINT;
    let B8 = point_from_hex("b4b937fca95b2f1e93e41e62fc3c78818ff38a66096fad6e7973e5c90006d321");
    let P = point_from_hex("2f1132ca61ab38dff00f2fea3228f24c6c71d58085b80e47e19515cb27e8d047");
    let id = EdwardsPoint::identity();
    let zero = Scalar::ZERO;
    let one = Scalar::ONE;
    let four = Scalar::from(4u64);
    let eight = Scalar::from(8u64);

    let cases = [
        (eight, B, zero, id, B8),
        (zero, id, eight, B, B8),
        (one, P, four, B, B8),
    ];
    for (a, A, b, Q, expected) in cases {
        let table = Q.precompute();
        let R = vartime::double_scalar_mul_precomputed(&a, &A, &b, &table);
        assert_eq!(R.as_extended(), expected);
        let R = vartime::double_scalar_mul_both_precomputed(&a, &A.precompute(), &b, &table);
        assert_eq!(R.as_extended(), expected);
    }
}

#[test]
fn decode_failures() {
    for y in [2u8, 7, 8] {
        let mut bytes = [0u8; 32];
        bytes[0] = y;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress(),
            Err(Error::InvalidEncoding)
        );
    }
    assert_eq!(Error::InvalidEncoding.to_string(), "invalid point encoding");
}

#[test]
fn order_of_small_and_large_points() {
    assert!((ED25519_BASEPOINT_POINT * BASEPOINT_ORDER).is_identity());
    for (i, T) in EIGHT_TORSION.iter().enumerate() {
        assert!(T.is_small_order());
        assert_eq!(T.is_torsion_free(), i == 0);
    }
}

#[test]
fn custom_basepoint_table() {
    let P = ED25519_BASEPOINT_POINT.mul_by_pow_2(7);
    let table = EdwardsBasepointTable::create(&P);
    let s = Scalar::from_bytes([0x5a; 32]);
    assert_eq!(&table * &s, P * s);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn compress_decompress_roundtrip(P in arb_point()) {
        let encoded = P.compress();
        prop_assert!(encoded.is_canonical());
        let decoded = encoded.decompress().unwrap();
        prop_assert!(decoded.is_valid());
        prop_assert_eq!(decoded, P);
        prop_assert_eq!(CompressedEdwardsY::from_slice(encoded.as_bytes()).unwrap(), encoded);
    }

    #[test]
    fn decoded_points_are_valid(bytes in any::<[u8; 32]>()) {
        match CompressedEdwardsY(bytes).decompress() {
            Ok(P) => {
                prop_assert!(P.is_valid());
                let again = P.compress().decompress().unwrap();
                prop_assert_eq!(again, P);
            }
            Err(e) => prop_assert_eq!(e, Error::InvalidEncoding),
        }
    }

    #[test]
    fn group_law(P in arb_point(), Q in arb_point(), R in arb_point()) {
        prop_assert_eq!(P + Q, Q + P);
        prop_assert_eq!((P + Q) + R, P + (Q + R));
        prop_assert_eq!(P.double(), P + P);
        prop_assert_eq!(P - Q, P + (-Q));
        prop_assert!((P - P).is_identity());
        prop_assert_eq!(P + EdwardsPoint::identity(), P);
        prop_assert_eq!(P.mul_by_cofactor(), P.double().double().double());
    }

    #[test]
    fn mul_base_matches_variable_base(s in arb_scalar()) {
        prop_assert_eq!(EdwardsPoint::mul_base(&s), ED25519_BASEPOINT_POINT * s);
    }

    #[test]
    fn scalar_mul_distributes(P in arb_point(), a in any::<u64>(), b in any::<u64>()) {
        let lhs = P * Scalar::from(a) + P * Scalar::from(b);
        let c = u128::from(a) + u128::from(b);
        let mut c_bytes = [0u8; 32];
        c_bytes[..16].copy_from_slice(&c.to_le_bytes());
        prop_assert_eq!(lhs, P * Scalar::from_bytes(c_bytes));
    }

    #[test]
    fn vartime_matches_constant_time(a in arb_scalar(), A in arb_point(), b in arb_scalar()) {
        use edwards25519::edwards::vartime;

        let expected = A * a + EdwardsPoint::mul_base(&b);
        let R = vartime::double_scalar_mul_basepoint(&a, &A, &b);
        prop_assert_eq!(R.as_extended(), expected);
        prop_assert_eq!(R.compress(), expected.compress());

        let table_B = ED25519_BASEPOINT_POINT.precompute();
        let R = vartime::double_scalar_mul_precomputed(&a, &A, &b, &table_B);
        prop_assert_eq!(R.as_extended(), expected);
    }

    #[test]
    fn basepoint_compression_is_fixed(s in arb_scalar()) {
        let P = EdwardsPoint::mul_base(&s);
        prop_assert_eq!(P.is_torsion_free(), true);
        prop_assert_eq!(
            ED25519_BASEPOINT_COMPRESSED.decompress().unwrap() * s,
            P
        );
    }
}
