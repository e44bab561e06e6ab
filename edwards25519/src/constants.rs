// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Various constants, such as the Ed25519 basepoint and the order of
//! the prime-order subgroup.
//!
//! Field constants such as \\(d\\) and \\(\sqrt{-1}\\) live in the
//! limb backend and are re-exported here for internal use.

#![allow(non_snake_case)]

use crate::edwards::CompressedEdwardsY;
use crate::scalar::Scalar;

pub(crate) use crate::backend::serial::signed32::constants::{
    AFFINE_ODD_MULTIPLES_OF_BASEPOINT, EDWARDS_D, EDWARDS_D2, SQRT_M1,
};
pub use crate::backend::serial::signed32::constants::{ED25519_BASEPOINT_POINT, EIGHT_TORSION};

#[cfg(feature = "precomputed-tables")]
use crate::edwards::EdwardsBasepointTable;

#[cfg(all(
    feature = "precomputed-tables",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

#[cfg(all(feature = "precomputed-tables", feature = "critical-section"))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(
    feature = "precomputed-tables",
    feature = "std",
    not(feature = "critical-section")
))]
use std::sync::LazyLock;

/// The Ed25519 basepoint, in `CompressedEdwardsY` format.
///
/// This is the little-endian byte encoding of \\( 4/5 \pmod p \\),
/// which is the \\(y\\)-coordinate of the Ed25519 basepoint.
///
/// The sign bit is 0 since the basepoint has \\(x\\) chosen to be positive.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// `BASEPOINT_ORDER` is the order of the Ed25519 basepoint, i.e.,
/// $$
/// \ell = 2^\{252\} + 27742317777372353535851937790883648493.
/// $$
pub const BASEPOINT_ORDER: Scalar = Scalar::from_bytes([
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
]);

/// Table containing precomputed multiples of the Ed25519 basepoint
/// \\(B = (x, 4/5)\\), built on first use.
#[cfg(feature = "precomputed-tables")]
pub static ED25519_BASEPOINT_TABLE: LazyLock<EdwardsBasepointTable> =
    LazyLock::new(|| EdwardsBasepointTable::create(&ED25519_BASEPOINT_POINT));

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{IsIdentity, ValidityCheck};

    #[test]
    fn test_eight_torsion() {
        for i in 0..8 {
            let Q = EIGHT_TORSION[i].mul_by_pow_2(3);
            assert!(Q.is_valid());
            assert!(Q.is_identity());
        }
    }

    #[test]
    fn test_four_torsion() {
        for i in (0..8).filter(|i| i % 2 == 0) {
            let Q = EIGHT_TORSION[i].mul_by_pow_2(2);
            assert!(Q.is_valid());
            assert!(Q.is_identity());
        }
    }

    #[test]
    fn test_two_torsion() {
        for i in (0..8).filter(|i| i % 4 == 0) {
            let Q = EIGHT_TORSION[i].mul_by_pow_2(1);
            assert!(Q.is_valid());
            assert!(Q.is_identity());
        }
    }

    #[test]
    fn basepoint_constants_agree() {
        assert_eq!(
            ED25519_BASEPOINT_COMPRESSED.decompress(),
            Ok(ED25519_BASEPOINT_POINT)
        );
        assert_eq!(ED25519_BASEPOINT_POINT.compress(), ED25519_BASEPOINT_COMPRESSED);
        assert!(ED25519_BASEPOINT_POINT.is_valid());
    }

    #[test]
    fn basepoint_order_is_canonical_boundary() {
        assert!(!bool::from(BASEPOINT_ORDER.is_canonical()));
        let mut ell_minus_one = BASEPOINT_ORDER.to_bytes();
        ell_minus_one[0] -= 1;
        assert!(bool::from(Scalar::from_bytes(ell_minus_one).is_canonical()));
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn basepoint_table_holds_basepoint() {
        assert_eq!(ED25519_BASEPOINT_TABLE.basepoint(), ED25519_BASEPOINT_POINT);
    }
}
