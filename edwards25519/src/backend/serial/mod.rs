// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Serial implementations of field and point arithmetic.
//!
//! There is a single limb backend, [`signed32`], which stores field
//! elements as ten signed 32-bit limbs.  Point operations use the
//! mixed-model strategy described in [`curve_models`].

pub mod curve_models;

pub mod signed32;

pub mod scalar_mul;
