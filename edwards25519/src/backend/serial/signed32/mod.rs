// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! The signed `i32` backend uses `i32`s and a `(i32, i32) -> i64`
//! multiplier, with limbs in the `ref10` signed layout.

pub mod field;

pub mod constants;
