// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Errors which may occur when decoding points.

use core::fmt::{self, Display};

/// Errors which may occur while processing encoded points.
///
/// Only decoding can fail: every group operation on valid points is
/// total.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The 32 bytes are not the encoding of a curve point: the encoded
    /// \\(y\\)-coordinate has no matching \\(x\\)-coordinate.
    InvalidEncoding,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => f.write_str("invalid point encoding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type with the `edwards25519` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
