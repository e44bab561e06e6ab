// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! This module contains backend-specific constant values, such as the
//! curve parameters in limb form and the table of odd multiples of the
//! basepoint used by variable-time double-base multiplication.

#![allow(non_snake_case)]

use super::field::FieldElement2625;
use crate::backend::serial::curve_models::AffineNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::window::NafLookupTable5;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement2625 = FieldElement2625::from_limbs([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub(crate) const EDWARDS_D2: FieldElement2625 = FieldElement2625::from_limbs([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);

/// Precomputed value of one of the square roots of -1 (mod p)
pub(crate) const SQRT_M1: FieldElement2625 = FieldElement2625::from_limbs([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
///
/// This is called `_POINT` to distinguish it from
/// `ED25519_BASEPOINT_TABLE`, which should be used for scalar
/// multiplication (it's much faster).
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: FieldElement2625::from_limbs([
        -14297830, -7645148, 16144683, -16471763, 27570974, -2696100, -26142465, 8378389,
        20764389, 8758491,
    ]),
    Y: FieldElement2625::from_limbs([
        -26843541, -6710886, 13421773, -13421773, 26843546, 6710886, -13421773, 13421773,
        -26843546, -6710886,
    ]),
    Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    T: FieldElement2625::from_limbs([
        28827062, -6116119, -27349572, 244363, 8635006, 11264893, 19351346, 13413597, 16611511,
        -6414980,
    ]),
};

/// The 8-torsion subgroup \\(\\mathcal E [8]\\).
///
/// In the case of Curve25519, it is cyclic; the \\(i\\)-th element of
/// the array is \\([i]P\\), where \\(P\\) is a point of order \\(8\\)
/// generating \\(\\mathcal E[8]\\).
///
/// Thus \\(\\mathcal E[4]\\) is the points indexed by `0,2,4,6`, and
/// \\(\\mathcal E[2]\\) is the points indexed by `0,4`.
pub const EIGHT_TORSION: [EdwardsPoint; 8] = [
    EdwardsPoint {
        X: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Y: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([21352778, 5345713, 4660180, -8347857, 24143090, 14568123, 30185756, -12247770, -33528939, 8345319]),
        Y: FieldElement2625::from_limbs([6952922, 1265500, -6862341, 7057498, 4037696, 5447722, -31680899, 15325402, 19365852, -1569102]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([-25262188, -11972680, 11716002, -5869612, -18193162, 16297739, 20670665, -8559098, 3541543, -5011181]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([32595792, 7943725, -9377950, -3500415, -12389472, 272473, 25146209, 2005654, -326686, -11406482]),
        Y: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([21352778, 5345713, 4660180, -8347857, 24143090, 14568123, 30185756, -12247770, -33528939, 8345319]),
        Y: FieldElement2625::from_limbs([-6952922, -1265500, 6862341, -7057498, -4037696, -5447722, 31680899, -15325402, -19365852, 1569102]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([25262188, 11972680, -11716002, 5869612, 18193162, -16297739, -20670665, 8559098, -3541543, 5011181]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Y: FieldElement2625::from_limbs([-1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([-21352778, -5345713, -4660180, 8347857, -24143090, -14568123, -30185756, 12247770, 33528939, -8345319]),
        Y: FieldElement2625::from_limbs([-6952922, -1265500, 6862341, -7057498, -4037696, -5447722, 31680899, -15325402, -19365852, 1569102]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([-25262188, -11972680, 11716002, -5869612, -18193162, 16297739, 20670665, -8559098, 3541543, -5011181]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([-32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686, 11406482]),
        Y: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    },
    EdwardsPoint {
        X: FieldElement2625::from_limbs([-21352778, -5345713, -4660180, 8347857, -24143090, -14568123, -30185756, 12247770, 33528939, -8345319]),
        Y: FieldElement2625::from_limbs([6952922, 1265500, -6862341, 7057498, 4037696, 5447722, -31680899, 15325402, 19365852, -1569102]),
        Z: FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        T: FieldElement2625::from_limbs([25262188, 11972680, -11716002, 5869612, 18193162, -16297739, -20670665, 8559098, -3541543, 5011181]),
    },
];

/// Odd multiples of the basepoint `[B, 3B, 5B, 7B, 9B, 11B, 13B, 15B]`.
pub(crate) const AFFINE_ODD_MULTIPLES_OF_BASEPOINT: NafLookupTable5<AffineNielsPoint> =
    NafLookupTable5([
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([25967493, -14356035, 29566456, 3660896, -12694345, 4014787, 27544626, -11754271, -6079156, 2047605]),
            y_minus_x: FieldElement2625::from_limbs([-12545711, 934262, -2722910, 3049990, -727428, 9406986, 12720692, 5043384, 19500929, -15469378]),
            xy2d:      FieldElement2625::from_limbs([-8738181, 4489570, 9688441, -14785194, 10184609, -12363380, 29287919, 11864899, -24514362, -4438546]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([15636291, -9688557, 24204773, -7912398, 616977, -16685262, 27787600, -14772189, 28944400, -1550024]),
            y_minus_x: FieldElement2625::from_limbs([16568933, 4717097, -11556148, -1102322, 15682896, -11807043, 16354577, -11775962, 7689662, 11199574]),
            xy2d:      FieldElement2625::from_limbs([30464156, -5976125, -11779434, -15670865, 23220365, 15915852, 7512774, 10017326, -17749093, -9920357]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([10861363, 11473154, 27284546, 1981175, -30064349, 12577861, 32867885, 14515107, -15438304, 10819380]),
            y_minus_x: FieldElement2625::from_limbs([4708026, 6336745, 20377586, 9066809, -11272109, 6594696, -25653668, 12483688, -12668491, 5581306]),
            xy2d:      FieldElement2625::from_limbs([19563160, 16186464, -29386857, 4097519, 10237984, -4348115, 28542350, 13850243, -23678021, -15815942]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([5153746, 9909285, 1723747, -2777874, 30523605, 5516873, 19480852, 5230134, -23952439, -15175766]),
            y_minus_x: FieldElement2625::from_limbs([-30269007, -3463509, 7665486, 10083793, 28475525, 1649722, 20654025, 16520125, 30598449, 7715701]),
            xy2d:      FieldElement2625::from_limbs([28881845, 14381568, 9657904, 3680757, -20181635, 7843316, -31400660, 1370708, 29794553, -1409300]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([-22518993, -6692182, 14201702, -8745502, -23510406, 8844726, 18474211, -1361450, -13062696, 13821877]),
            y_minus_x: FieldElement2625::from_limbs([-6455177, -7839871, 3374702, -4740862, -27098617, -10571707, 31655028, -7212327, 18853322, -14220951]),
            xy2d:      FieldElement2625::from_limbs([4566830, -12963868, -28974889, -12240689, -7602672, -2830569, -8514358, -10431137, 2207753, -3209784]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([-25154831, -4185821, 29681144, 7868801, -6854661, -9423865, -12437364, -663000, -31111463, -16132436]),
            y_minus_x: FieldElement2625::from_limbs([25576264, -2703214, 7349804, -11814844, 16472782, 9300885, 3844789, 15725684, 171356, 6466918]),
            xy2d:      FieldElement2625::from_limbs([23103977, 13316479, 9739013, -16149481, 817875, -15038942, 8965339, -14088058, -30714912, 16193877]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([-33521811, 3180713, -2394130, 14003687, -16903474, -16270840, 17238398, 4729455, -18074513, 9256800]),
            y_minus_x: FieldElement2625::from_limbs([-25182317, -4174131, 32336398, 5036987, -21236817, 11360617, 22616405, 9761698, -19827198, 630305]),
            xy2d:      FieldElement2625::from_limbs([-13720693, 2639453, -24237460, -7406481, 9494427, -5774029, -6554551, -15960994, -2449256, -14291300]),
        },
        AffineNielsPoint {
            y_plus_x:  FieldElement2625::from_limbs([-3151181, -5046075, 9282714, 6866145, -31907062, -863023, -18940575, 15033784, 25105118, -7894876]),
            y_minus_x: FieldElement2625::from_limbs([-24326370, 15950226, -31801215, -14592823, -11662737, -5090925, 1573892, -2625887, 2198790, -15804619]),
            xy2d:      FieldElement2625::from_limbs([-3099351, 10324967, -2241613, 7453183, -5446979, -2735503, -13812022, -16236442, -32461234, -12290683]),
        },
    ]);

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::FieldElement;

    /// Test that `d = -121665/121666`
    #[test]
    fn test_d_vs_ratio() {
        let a = -&FieldElement::ONE.mul_small(121665);
        let b = FieldElement::ONE.mul_small(121666);
        let d = &a * &b.invert();
        let d2 = &d + &d;
        assert_eq!(d, EDWARDS_D);
        assert_eq!(d2, EDWARDS_D2);
    }

    /// Test that `SQRT_M1` is a square root of `-1`
    #[test]
    fn test_sqrt_minus_one() {
        let should_be_minus_one = SQRT_M1.square();
        assert_eq!(should_be_minus_one, -&FieldElement::ONE);
    }

    /// Test that `SQRT_M1` is the positive square root of `-1`
    #[test]
    fn test_sqrt_minus_one_is_nonnegative() {
        assert_eq!(SQRT_M1.is_negative().unwrap_u8(), 0);
    }

    #[test]
    fn affine_odd_multiples_are_odd_multiples() {
        let B = ED25519_BASEPOINT_POINT;
        let B2 = B.double();
        let mut P = B;
        for entry in AFFINE_ODD_MULTIPLES_OF_BASEPOINT.0.iter() {
            assert_eq!(*entry, P.as_affine_niels());
            P = &P + &B2;
        }
    }
}
