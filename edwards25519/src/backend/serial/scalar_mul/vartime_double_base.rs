// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

#![allow(non_snake_case)]

use core::cmp::Ordering;
use core::ops::{Add, Sub};

use crate::backend::serial::curve_models::{CompletedPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::NafLookupTable5;

/// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the Ed25519 basepoint.
pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> ProjectivePoint {
    let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(A);
    let table_B = &constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;

    mul_with_tables(a, &table_A, b, table_B)
}

/// Compute \\(aA + bB\\) in variable time, using a precomputed table
/// of odd multiples of \\(B\\).
pub(crate) fn mul_precomputed(
    a: &Scalar,
    A: &EdwardsPoint,
    b: &Scalar,
    table_B: &NafLookupTable5<ProjectiveNielsPoint>,
) -> ProjectivePoint {
    let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(A);

    mul_with_tables(a, &table_A, b, table_B)
}

/// Compute \\(aA + bB\\) in variable time, using precomputed tables of
/// odd multiples of both \\(A\\) and \\(B\\).
pub(crate) fn mul_both_precomputed(
    a: &Scalar,
    table_A: &NafLookupTable5<ProjectiveNielsPoint>,
    b: &Scalar,
    table_B: &NafLookupTable5<ProjectiveNielsPoint>,
) -> ProjectivePoint {
    mul_with_tables(a, table_A, b, table_B)
}

/// Joint width-5 NAF ladder over two odd-multiples tables.
///
/// One doubling per digit position, from the highest position where
/// either NAF is nonzero down to zero, with at most one table addition
/// or subtraction per scalar at each position.
fn mul_with_tables<TA, TB>(
    a: &Scalar,
    table_A: &NafLookupTable5<TA>,
    b: &Scalar,
    table_B: &NafLookupTable5<TB>,
) -> ProjectivePoint
where
    TA: Copy,
    TB: Copy,
    for<'x, 'y> &'x EdwardsPoint: Add<&'y TA, Output = CompletedPoint>
        + Sub<&'y TA, Output = CompletedPoint>
        + Add<&'y TB, Output = CompletedPoint>
        + Sub<&'y TB, Output = CompletedPoint>,
{
    let a_naf = a.non_adjacent_form(5);
    let b_naf = b.non_adjacent_form(5);

    // Find starting index
    let mut i: usize = 256;
    for j in (0..257).rev() {
        i = j;
        if a_naf[i] != 0 || b_naf[i] != 0 {
            break;
        }
    }

    let mut r = ProjectivePoint::identity();
    loop {
        let mut t = r.double();

        match a_naf[i].cmp(&0) {
            Ordering::Greater => {
                t = &t.as_extended() + &table_A.select(a_naf[i] as usize)
            }
            Ordering::Less => t = &t.as_extended() - &table_A.select(-a_naf[i] as usize),
            Ordering::Equal => {}
        }

        match b_naf[i].cmp(&0) {
            Ordering::Greater => {
                t = &t.as_extended() + &table_B.select(b_naf[i] as usize)
            }
            Ordering::Less => t = &t.as_extended() - &table_B.select(-b_naf[i] as usize),
            Ordering::Equal => {}
        }

        r = t.as_projective();

        if i == 0 {
            break;
        }
        i -= 1;
    }

    r
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::serial::scalar_mul::variable_base;
    use crate::constants::ED25519_BASEPOINT_POINT;
    use crate::traits::IsIdentity;

    #[test]
    fn zero_scalars_give_identity() {
        let B = ED25519_BASEPOINT_POINT;
        let r = mul(&Scalar::ZERO, &B, &Scalar::ZERO);
        assert!(r.as_extended().is_identity());
    }

    #[test]
    fn matches_constant_time_mul() {
        let A = ED25519_BASEPOINT_POINT.mul_by_pow_2(7);
        let a = Scalar::from(0x1234_5678_9abc_def0u64);
        let b = Scalar::from_bytes([0xa5; 32]);

        let expected = &variable_base::mul(&A, &a)
            + &variable_base::mul(&ED25519_BASEPOINT_POINT, &b);
        assert_eq!(mul(&a, &A, &b).as_extended(), expected);
    }

    #[test]
    fn table_variants_agree() {
        let A = ED25519_BASEPOINT_POINT.double();
        let B = ED25519_BASEPOINT_POINT;
        let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(&A);
        let table_B = NafLookupTable5::<ProjectiveNielsPoint>::from(&B);
        let a = Scalar::from_bytes([0xff; 32]);
        let b = Scalar::from(31u64);

        let expected = mul(&a, &A, &b).as_extended();
        assert_eq!(mul_precomputed(&a, &A, &b, &table_B).as_extended(), expected);
        assert_eq!(
            mul_both_precomputed(&a, &table_A, &b, &table_B).as_extended(),
            expected
        );
    }
}
