// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Scalars as consumed by point multiplication.
//!
//! A [`Scalar`] is a \\(256\\)-bit unsigned integer, stored as \\(32\\)
//! little-endian bytes.  No reduction modulo the group order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\) is
//! performed: hashing and reducing scalars is the caller's business, and
//! every byte string is a valid multiplier.
//!
//! ```
//! use edwards25519::scalar::Scalar;
//!
//! let two = Scalar::from(2u64);
//! assert_eq!(two.to_bytes()[0], 2);
//! assert!(bool::from(two.is_canonical()));
//!
//! // Values at or above the group order are kept as they are.
//! let big = Scalar::from_bytes([0xff; 32]);
//! assert!(!bool::from(big.is_canonical()));
//! assert_eq!(big.to_bytes(), [0xff; 32]);
//! ```
//!
//! Point multiplication reads a scalar through one of two signed-digit
//! decompositions: a width-\\(5\\) non-adjacent form for the
//! variable-time algorithms, and signed radix \\(16\\) for the
//! constant-time ones.

use core::fmt::Debug;
use core::ops::Index;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;

/// The `Scalar` struct holds a little-endian \\(256\\)-bit integer.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is the little-endian encoding of the integer.  Any
    /// value is permitted, including those above \\(2\^{255}\\).
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    pub const ONE: Self = Self {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ],
    };

    /// Construct a `Scalar` from its little-endian byte encoding.  The
    /// bytes are taken as is.
    pub const fn from_bytes(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use edwards25519::scalar::Scalar;
    ///
    /// let s: Scalar = Scalar::ZERO;
    ///
    /// assert!(s.to_bytes() == [0u8; 32]);
    /// ```
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Check whether this `Scalar` is less than the group order
    /// \\( \ell \\), in constant time.
    pub fn is_canonical(&self) -> Choice {
        let order = constants::BASEPOINT_ORDER.as_bytes();

        // Subtract ell byte by byte; a final borrow means self < ell.
        let mut borrow: i16 = 0;
        for i in 0..32 {
            let diff = self.bytes[i] as i16 - order[i] as i16 + borrow;
            borrow = diff >> 8;
        }

        Choice::from((borrow & 1) as u8)
    }

    /// Compute a width-\\(w\\) "Non-Adjacent Form" of this scalar.
    ///
    /// A width-\\(w\\) NAF of a positive integer \\(k\\) is an expression
    /// $$
    /// k = \sum_{i=0}\^m n\_i 2\^i,
    /// $$
    /// where each nonzero
    /// coefficient \\(n\_i\\) is odd and bounded by \\(|n\_i| < 2\^{w-1}\\),
    /// \\(n\_{m-1}\\) is nonzero, and at most one of any \\(w\\) consecutive
    /// coefficients is nonzero.  (Hankerson, Menezes, Vanstone; def 3.32).
    ///
    /// The length of the NAF is at most one more than the length of
    /// the binary representation of \\(k\\).  Scalars are not reduced,
    /// so the output has \\(257\\) digits: the last one receives the
    /// carry out of the top bit.
    ///
    /// Intuitively, this is like a binary expansion, except that we
    /// allow some coefficients to grow in magnitude up to
    /// \\(2\^{w-1}\\) so that the nonzero coefficients are as sparse
    /// as possible.
    ///
    /// When doing scalar multiplication, we can then use a lookup
    /// table of precomputed multiples of a point to add the nonzero
    /// terms \\( k_i P \\).  Using signed digits cuts the table size
    /// in half, and using odd digits cuts the table size in half
    /// again.
    ///
    /// To compute a \\(w\\)-NAF, we use a modification of Algorithm 3.35 of HMV:
    ///
    /// 1. \\( i \gets 0 \\)
    /// 2. While \\( k \ge 1 \\):
    ///     1. If \\(k\\) is odd, \\( n_i \gets k \operatorname{mods} 2\^w \\), \\( k \gets k - n_i \\).
    ///     2. If \\(k\\) is even, \\( n_i \gets 0 \\).
    ///     3. \\( k \gets k / 2 \\), \\( i \gets i + 1 \\).
    /// 3. Return \\( n_0, n_1, ... , \\)
    ///
    /// Here \\( \bar x = x \operatorname{mods} 2\^w \\) means the
    /// \\( \bar x \\) with \\( \bar x \equiv x \pmod{2\^w} \\) and
    /// \\( -2\^{w-1} \leq \bar x < 2\^{w-1} \\).
    ///
    /// We implement this by scanning across the bits of \\(k\\) from
    /// least-significant bit to most-significant-bit.
    /// Write the bits of \\(k\\) as
    /// $$
    /// k = \sum\_{i=0}\^m k\_i 2^i,
    /// $$
    /// and split the sum as
    /// $$
    /// k = \sum\_{i=0}^{w-1} k\_i 2^i + 2^w \sum\_{i=0} k\_{i+w} 2^i
    /// $$
    /// where the first part is \\( k \mod 2\^w \\).
    ///
    /// If \\( k \mod 2\^w\\) is odd, and \\( k \mod 2\^w < 2\^{w-1} \\), then we emit
    /// \\( n_0 = k \mod 2\^w \\).  Instead of computing
    /// \\( k - n_0 \\), we just advance \\(w\\) bits and reindex.
    ///
    /// If \\( k \mod 2\^w\\) is odd, and \\( k \mod 2\^w \ge 2\^{w-1} \\), then
    /// \\( n_0 = k \operatorname{mods} 2\^w = k \mod 2\^w - 2\^w \\).
    /// The quantity \\( k - n_0 \\) is
    /// $$
    /// \begin{aligned}
    /// k - n_0 &= \sum\_{i=0}^{w-1} k\_i 2^i + 2^w \sum\_{i=0} k\_{i+w} 2^i
    ///          - \sum\_{i=0}^{w-1} k\_i 2^i + 2^w \\\\
    /// &= 2^w + 2^w \sum\_{i=0} k\_{i+w} 2^i
    /// \end{aligned}
    /// $$
    /// so instead of computing the subtraction, we can set a carry
    /// bit, advance \\(w\\) bits, and reindex.
    ///
    /// If \\( k \mod 2\^w\\) is even, we emit \\(0\\), advance 1 bit
    /// and reindex.  In fact, by setting all digits to \\(0\\)
    /// initially, we don't need to emit anything.
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 257] {
        // required by the NAF definition
        debug_assert!(w >= 2);
        // required so that the NAF digits fit in i8
        debug_assert!(w <= 8);

        let mut naf = [0i8; 257];

        let mut x_u64 = [0u64; 5];
        for (limb, chunk) in x_u64.iter_mut().zip(self.bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        let width = 1 << w;
        let window_mask = width - 1;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 257 {
            // Construct a buffer of bits of the scalar, starting at bit `pos`
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf: u64 = if bit_idx < 64 - w {
                // This window's bits are contained in a single u64
                x_u64[u64_idx] >> bit_idx
            } else {
                // Combine the current u64's bits with the bits from the next u64
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            // Add the carry into the current window
            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                // If the window value is even, preserve the carry and continue.
                // Why is the carry preserved?
                // If carry == 0 and window & 1 == 0, then the next carry should be 0
                // If carry == 1 and window & 1 == 0, then bit_buf & 1 == 1 so the next carry should be 1
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }

    /// Write this scalar in radix 16, with coefficients in \\([-8,8)\\),
    /// i.e., compute \\(a\_i\\) such that
    /// $$
    ///    a = a\_0 + a\_1 16\^1 + \cdots + a_{64} 16\^{64},
    /// $$
    /// with \\(-8 \leq a_i < 8\\) for \\(0 \leq i < 64\\) and
    /// \\(a_{64} \in \\{0, 1\\}\\).
    ///
    /// The last digit only holds the carry out of the top nibble, so
    /// every \\(256\\)-bit integer has such a decomposition.
    pub(crate) fn as_radix_16(&self) -> [i8; 65] {
        let mut output = [0i8; 65];

        // Step 1: change radix.
        // Convert from radix 256 (bytes) to radix 16 (nibbles)
        #[allow(clippy::identity_op)]
        #[inline(always)]
        fn bot_half(x: u8) -> u8 {
            (x >> 0) & 15
        }
        #[inline(always)]
        fn top_half(x: u8) -> u8 {
            (x >> 4) & 15
        }

        for i in 0..32 {
            output[2 * i] = bot_half(self[i]) as i8;
            output[2 * i + 1] = top_half(self[i]) as i8;
        }

        // Step 2: recenter coefficients from [0,16) to [-8,8)
        for i in 0..64 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }
        // output[64] started at zero and took one carry of at most 1.

        output
    }
}

impl Index<usize> for Scalar {
    type Output = u8;

    /// Index the bytes of the representative for this `Scalar`.  Mutation is not permitted.
    fn index(&self, _index: usize) -> &u8 {
        &(self.bytes[_index])
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        #[allow(clippy::needless_range_loop)]
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

impl From<u64> for Scalar {
    /// Construct a scalar from the given `u64`.
    ///
    /// # Inputs
    ///
    /// A `u64` to convert to a `Scalar`.
    ///
    /// # Returns
    ///
    /// A `Scalar` corresponding to the input `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use edwards25519::scalar::Scalar;
    ///
    /// let fourtytwo = Scalar::from(42u64);
    /// let six = Scalar::from(6u64);
    /// let seven = Scalar::from(7u64);
    ///
    /// assert!(fourtytwo != six);
    /// assert_eq!(fourtytwo[0], six[0] * seven[0]);
    /// ```
    fn from(x: u64) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

impl From<[u8; 32]> for Scalar {
    fn from(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a sequence of 32 bytes")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Ok(Scalar::from_bytes(bytes))
            }
        }

        deserializer.deserialize_tuple(32, ScalarVisitor)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    use proptest::prelude::*;

    /// x = 2238329342913194256032495932344128051776374960164957527413114840482143558222
    pub static X: Scalar = Scalar {
        bytes: [
            0x4e, 0x5a, 0xb4, 0x34, 0x5d, 0x47, 0x08, 0x84, 0x59, 0x13, 0xb4, 0x64, 0x1b, 0xc2,
            0x7d, 0x52, 0x52, 0xa5, 0x85, 0x10, 0x1b, 0xcc, 0x42, 0x44, 0xd4, 0x49, 0xf4, 0xa8,
            0x79, 0xd9, 0xf2, 0x04,
        ],
    };

    /// Fold signed digits at bit offsets `0, step, 2 step, ...` back
    /// into 32 little-endian bytes, returning `None` on overflow.
    pub(crate) fn reconstruct(digits: &[i8], step: usize) -> Option<[u8; 32]> {
        let mut acc = [0i64; 34];
        for (i, &d) in digits.iter().enumerate() {
            let bit = i * step;
            acc[bit / 8] += (d as i64) << (bit % 8);
        }
        for j in 0..33 {
            let carry = acc[j] >> 8;
            acc[j] -= carry << 8;
            acc[j + 1] += carry;
        }
        if acc[32] != 0 || acc[33] != 0 {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (b, a) in bytes.iter_mut().zip(acc.iter()) {
            *b = *a as u8;
        }
        Some(bytes)
    }

    fn assert_naf_shape(naf: &[i8; 257], w: usize) {
        let bound = 1i8 << (w - 1);
        let mut last_nonzero: Option<usize> = None;
        for (i, &d) in naf.iter().enumerate() {
            if d == 0 {
                continue;
            }
            assert_eq!(d & 1, 1, "digit {} is even", i);
            assert!(-bound < d && d < bound, "digit {} out of range", i);
            if let Some(j) = last_nonzero {
                assert!(i - j >= w, "digits {} and {} are adjacent", j, i);
            }
            last_nonzero = Some(i);
        }
    }

    #[test]
    fn from_u64() {
        let val: u64 = 0xdeadbeefdeadbeef;
        let s = Scalar::from(val);
        assert_eq!(s[7], 0xde);
        assert_eq!(s[6], 0xad);
        assert_eq!(s[5], 0xbe);
        assert_eq!(s[4], 0xef);
        assert_eq!(s[3], 0xde);
        assert_eq!(s[2], 0xad);
        assert_eq!(s[1], 0xbe);
        assert_eq!(s[0], 0xef);
        assert!(s.as_bytes()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn one_is_from_one() {
        assert_eq!(Scalar::ONE, Scalar::from(1u64));
        assert_ne!(Scalar::ONE, Scalar::ZERO);
    }

    #[test]
    fn canonical_boundary() {
        let ell = constants::BASEPOINT_ORDER.to_bytes();
        let mut ell_minus_one = ell;
        ell_minus_one[0] -= 1;
        let mut ell_plus_one = ell;
        ell_plus_one[0] += 1;

        assert!(bool::from(Scalar::ZERO.is_canonical()));
        assert!(bool::from(X.is_canonical()));
        assert!(bool::from(Scalar::from_bytes(ell_minus_one).is_canonical()));
        assert!(!bool::from(Scalar::from_bytes(ell).is_canonical()));
        assert!(!bool::from(Scalar::from_bytes(ell_plus_one).is_canonical()));
        assert!(!bool::from(Scalar::from_bytes([0xff; 32]).is_canonical()));
    }

    #[test]
    fn conditional_select_picks_operand() {
        let a = Scalar::from(5u64);
        let b = X;
        assert_eq!(Scalar::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(Scalar::conditional_select(&a, &b, Choice::from(1)), b);
    }

    #[test]
    fn non_adjacent_form_of_small_values() {
        // 17 = 2^5 - 15
        let naf = Scalar::from(7u64).non_adjacent_form(5);
        assert_eq!(naf[0], 7);
        assert!(naf[1..].iter().all(|&d| d == 0));

        let naf = Scalar::from(17u64).non_adjacent_form(5);
        assert_eq!(naf[0], -15);
        assert_eq!(naf[5], 1);
        assert_eq!(naf.iter().filter(|&&d| d != 0).count(), 2);
    }

    #[test]
    fn non_adjacent_form_keeps_top_carry() {
        let max = Scalar::from_bytes([0xff; 32]);
        let naf = max.non_adjacent_form(5);
        assert_eq!(naf[256], 1);
        assert_eq!(reconstruct(&naf, 1), Some([0xff; 32]));
        assert_naf_shape(&naf, 5);
    }

    #[test]
    fn non_adjacent_form_of_x() {
        let naf = X.non_adjacent_form(5);
        assert_eq!(reconstruct(&naf, 1), Some(X.to_bytes()));
        assert_naf_shape(&naf, 5);
    }

    #[test]
    fn radix_16_digit_ranges() {
        let max = Scalar::from_bytes([0xff; 32]);
        let digits = max.as_radix_16();
        // 0xf..f = -1 + 16^64
        assert_eq!(digits[0], -1);
        assert!(digits[1..64].iter().all(|&d| d == 0));
        assert_eq!(digits[64], 1);

        let digits = X.as_radix_16();
        assert!(digits[..64].iter().all(|&d| (-8..8).contains(&d)));
        assert_eq!(digits[64], 0);
        assert_eq!(reconstruct(&digits, 4), Some(X.to_bytes()));
    }

    proptest! {
        #[test]
        fn non_adjacent_form_reconstructs(bytes in any::<[u8; 32]>()) {
            let naf = Scalar::from_bytes(bytes).non_adjacent_form(5);
            prop_assert_eq!(reconstruct(&naf, 1), Some(bytes));
            assert_naf_shape(&naf, 5);
        }

        #[test]
        fn radix_16_reconstructs(bytes in any::<[u8; 32]>()) {
            let digits = Scalar::from_bytes(bytes).as_radix_16();
            prop_assert!(digits[..64].iter().all(|&d| (-8..8).contains(&d)));
            prop_assert!(digits[64] == 0 || digits[64] == 1);
            prop_assert_eq!(reconstruct(&digits, 4), Some(bytes));
        }
    }
}
