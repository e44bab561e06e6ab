// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! **INTERNALS:** Field and point arithmetic backends.
//!
//! The [`serial`] backend contains the signed 32-bit field
//! implementation, the curve models used by the point operations, and
//! the scalar multiplication algorithms built on them.  The functions
//! here are the entry points the public point types call into.

use crate::backend::serial::curve_models::{ProjectiveNielsPoint, ProjectivePoint};
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::window::NafLookupTable5;

pub(crate) mod serial;

/// Perform constant-time, variable-base scalar multiplication.
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    self::serial::scalar_mul::variable_base::mul(point, scalar)
}

/// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the Ed25519 basepoint.
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> ProjectivePoint {
    self::serial::scalar_mul::vartime_double_base::mul(a, A, b)
}

/// Compute \\(aA + bB\\) in variable time, given the odd multiples of \\(B\\).
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul_precomputed(
    a: &Scalar,
    A: &EdwardsPoint,
    b: &Scalar,
    table_B: &NafLookupTable5<ProjectiveNielsPoint>,
) -> ProjectivePoint {
    self::serial::scalar_mul::vartime_double_base::mul_precomputed(a, A, b, table_B)
}

/// Compute \\(aA + bB\\) in variable time, given the odd multiples of
/// both \\(A\\) and \\(B\\).
#[allow(non_snake_case)]
pub(crate) fn vartime_double_base_mul_both_precomputed(
    a: &Scalar,
    table_A: &NafLookupTable5<ProjectiveNielsPoint>,
    b: &Scalar,
    table_B: &NafLookupTable5<ProjectiveNielsPoint>,
) -> ProjectivePoint {
    self::serial::scalar_mul::vartime_double_base::mul_both_precomputed(a, table_A, b, table_B)
}
