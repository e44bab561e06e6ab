// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Code for fixed- and sliding-window functionality

#![allow(non_snake_case)]

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::traits::Identity;

use crate::backend::serial::curve_models::AffineNielsPoint;
use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A lookup table of precomputed multiples of a point \\(P\\), used to
/// compute \\( xP \\) for \\( -8 \leq x \leq 8 \\).
///
/// The computation of \\( xP \\) is done in constant time by the `select` function.
///
/// Entries are only reachable through `select`, which reads every
/// entry regardless of the index.
#[derive(Copy, Clone)]
pub struct LookupTable<T>(pub(crate) [T; 8]);

impl<T> LookupTable<T>
where
    T: Identity + ConditionallySelectable + ConditionallyNegatable,
{
    /// Given \\(-8 \leq x \leq 8\\), return \\(xP\\) in constant time.
    pub fn select(&self, x: i8) -> T {
        debug_assert!(x >= -8);
        debug_assert!(x <= 8);

        // Compute xabs = |x|
        let xmask = x as i16 >> 7;
        let xabs = (x as i16 + xmask) ^ xmask;

        // Set t = 0 * P = identity
        let mut t = T::identity();
        for j in 1..9 {
            // Copy `points[j-1] == j*P` onto `t` in constant time if `|x| == j`.
            let c = (xabs as u16).ct_eq(&(j as u16));
            t.conditional_assign(&self.0[j - 1], c);
        }
        // Now t == |x| * P.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_negate(neg_mask);
        // Now t == x * P.

        t
    }
}

impl<T: Copy + Default> Default for LookupTable<T> {
    fn default() -> LookupTable<T> {
        LookupTable([T::default(); 8])
    }
}

impl<T: Debug> Debug for LookupTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", self.0)
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<ProjectiveNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        let mut points = [P.as_projective_niels(); 8];
        for j in 0..7 {
            points[j + 1] = (P + &points[j]).as_extended().as_projective_niels();
        }
        LookupTable(points)
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<AffineNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        let mut points = [P.as_affine_niels(); 8];
        // XXX batch inversion would be good if perf mattered here
        for j in 0..7 {
            points[j + 1] = (P + &points[j]).as_extended().as_affine_niels()
        }
        LookupTable(points)
    }
}

#[cfg(feature = "zeroize")]
impl<T: Zeroize> Zeroize for LookupTable<T> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Holds odd multiples 1A, 3A, ..., 15A of a point A.
#[derive(Copy, Clone)]
pub(crate) struct NafLookupTable5<T>(pub(crate) [T; 8]);

impl<T: Copy> NafLookupTable5<T> {
    /// Given public, odd \\( x \\) with \\( 0 < x < 2\^4 \\), return \\(xA\\).
    pub fn select(&self, x: usize) -> T {
        debug_assert_eq!(x & 1, 1);
        debug_assert!(x < 16);

        self.0[x / 2]
    }
}

impl<T: Debug> Debug for NafLookupTable5<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NafLookupTable5({:?})", self.0)
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5<ProjectiveNielsPoint> {
    fn from(A: &'a EdwardsPoint) -> Self {
        let mut Ai = [A.as_projective_niels(); 8];
        let A2 = A.double();
        for i in 0..7 {
            Ai[i + 1] = (&A2 + &Ai[i]).as_extended().as_projective_niels();
        }
        // Now Ai = [A, 3A, 5A, 7A, 9A, 11A, 13A, 15A]
        NafLookupTable5(Ai)
    }
}

impl<'a> From<&'a EdwardsPoint> for NafLookupTable5<AffineNielsPoint> {
    fn from(A: &'a EdwardsPoint) -> Self {
        let mut Ai = [A.as_affine_niels(); 8];
        let A2 = A.double();
        for i in 0..7 {
            Ai[i + 1] = (&A2 + &Ai[i]).as_extended().as_affine_niels();
        }
        // Now Ai = [A, 3A, 5A, 7A, 9A, 11A, 13A, 15A]
        NafLookupTable5(Ai)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::ED25519_BASEPOINT_POINT;
    use crate::constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;

    #[test]
    fn lookup_table_selects_signed_multiples() {
        let B = ED25519_BASEPOINT_POINT;
        let table = LookupTable::<ProjectiveNielsPoint>::from(&B);

        let mut expected = EdwardsPoint::identity();
        let id = EdwardsPoint::identity();
        for x in 0..=8i8 {
            let pos = (&id + &table.select(x)).as_extended();
            let neg = (&id + &table.select(-x)).as_extended();
            assert_eq!(pos, expected);
            assert_eq!(neg, -&expected);
            expected = &expected + &B;
        }
    }

    #[test]
    fn affine_and_projective_tables_agree() {
        let B = ED25519_BASEPOINT_POINT.mul_by_pow_2(5);
        let affine = LookupTable::<AffineNielsPoint>::from(&B);
        let projective = LookupTable::<ProjectiveNielsPoint>::from(&B);

        let id = EdwardsPoint::identity();
        for x in -8..=8i8 {
            let a = (&id + &affine.select(x)).as_extended();
            let p = (&id + &projective.select(x)).as_extended();
            assert_eq!(a, p);
        }
    }

    #[test]
    fn naf_table_holds_odd_multiples() {
        let B = ED25519_BASEPOINT_POINT;
        let table = NafLookupTable5::<ProjectiveNielsPoint>::from(&B);
        let B2 = B.double();

        let id = EdwardsPoint::identity();
        let mut expected = B;
        for x in (1..16).step_by(2) {
            assert_eq!((&id + &table.select(x)).as_extended(), expected);
            expected = &expected + &B2;
        }
    }

    #[test]
    fn naf_table_from_basepoint_matches_constant() {
        let computed = NafLookupTable5::<AffineNielsPoint>::from(&ED25519_BASEPOINT_POINT);
        for x in (1..16).step_by(2) {
            assert_eq!(
                computed.select(x),
                AFFINE_ODD_MULTIPLES_OF_BASEPOINT.select(x)
            );
        }
    }
}
