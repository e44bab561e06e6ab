// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using signed
//! \\(32\\)-bit limbs with \\(64\\)-bit products.
//!
//! The limb layout and carry schedule follow the `ref10` reference
//! code: limbs are signed and every carry rounds to the nearest
//! multiple of the limb radix, so that reduced limbs are centred on
//! zero.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A `FieldElement2625` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// A field element is represented in radix \\(2\^{25.5}\\) as ten
/// `i32`s, so that an element \\(x\\) is
/// $$
/// x = \sum\_{i=0}\^9 x\_i 2\^{\lceil i \frac {51} 2 \rceil}
///   = x\_0 + x\_1 2\^{26} + x\_2 2\^{51} + x\_3 2\^{77} + \cdots + x\_9 2\^{230}.
/// $$
///
/// After a carry pass (the output of multiplication, squaring and
/// decoding) the even limbs satisfy \\(|x\_i| \leq 2\^{25}\\) and the odd
/// limbs \\(|x\_i| \leq 2\^{24}\\), up to a small excess on \\(x\_1\\) and
/// \\(x\_5\\).  Addition, subtraction and negation work limb-wise and do
/// not carry, so their outputs may grow by a few bits; the inputs to a
/// multiplication may be the sum or difference of up to three reduced
/// elements.
///
/// The representation is redundant.  [`FieldElement2625::normalize`]
/// produces the unique representative with non-negative limbs and
/// value in \\([0, p)\\).
///
/// # Note
///
/// The `edwards25519::field` module provides the type alias
/// `FieldElement` for this type, and the backend-specific name should
/// not be used outside of that module.
#[derive(Copy, Clone)]
pub(crate) struct FieldElement2625(pub(crate) [i32; 10]);

impl Debug for FieldElement2625 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement2625({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement2625 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'b> AddAssign<&'b FieldElement2625> for FieldElement2625 {
    fn add_assign(&mut self, rhs: &'b FieldElement2625) {
        for i in 0..10 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn add(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement2625> for FieldElement2625 {
    fn sub_assign(&mut self, rhs: &'b FieldElement2625) {
        for i in 0..10 {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<'a, 'b> Sub<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn sub(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'b> MulAssign<&'b FieldElement2625> for FieldElement2625 {
    fn mul_assign(&mut self, rhs: &'b FieldElement2625) {
        let result = (self as &FieldElement2625) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement2625> for &'a FieldElement2625 {
    type Output = FieldElement2625;

    #[rustfmt::skip] // keep alignment of z* calculations
    fn mul(self, rhs: &'b FieldElement2625) -> FieldElement2625 {
        // Limbs of both operands are widened before any scaling, so
        // the factors of 2 and 19 below cannot overflow 32 bits.
        let x = self.0.map(i64::from);
        let y = rhs.0.map(i64::from);

        // Wrapping around the top limb multiplies by 2^255 = 19 mod p.
        let y1_19 = 19 * y[1];
        let y2_19 = 19 * y[2];
        let y3_19 = 19 * y[3];
        let y4_19 = 19 * y[4];
        let y5_19 = 19 * y[5];
        let y6_19 = 19 * y[6];
        let y7_19 = 19 * y[7];
        let y8_19 = 19 * y[8];
        let y9_19 = 19 * y[9];

        // An odd limb times an odd limb lands half a bit above the
        // limb boundary of the product, so those terms are doubled.
        let x1_2 = 2 * x[1];
        let x3_2 = 2 * x[3];
        let x5_2 = 2 * x[5];
        let x7_2 = 2 * x[7];
        let x9_2 = 2 * x[9];

        let z0 = x[0] * y[0] + x1_2 * y9_19 + x[2] * y8_19 + x3_2 * y7_19 + x[4] * y6_19 + x5_2 * y5_19 + x[6] * y4_19 + x7_2 * y3_19 + x[8] * y2_19 + x9_2 * y1_19;
        let z1 = x[0] * y[1] + x[1]  * y[0]  + x[2] * y9_19 + x[3] * y8_19 + x[4] * y7_19 + x[5] * y6_19 + x[6] * y5_19 + x[7] * y4_19 + x[8] * y3_19 + x[9] * y2_19;
        let z2 = x[0] * y[2] + x1_2  * y[1]  + x[2] * y[0]  + x3_2 * y9_19 + x[4] * y8_19 + x5_2 * y7_19 + x[6] * y6_19 + x7_2 * y5_19 + x[8] * y4_19 + x9_2 * y3_19;
        let z3 = x[0] * y[3] + x[1]  * y[2]  + x[2] * y[1]  + x[3] * y[0]  + x[4] * y9_19 + x[5] * y8_19 + x[6] * y7_19 + x[7] * y6_19 + x[8] * y5_19 + x[9] * y4_19;
        let z4 = x[0] * y[4] + x1_2  * y[3]  + x[2] * y[2]  + x3_2 * y[1]  + x[4] * y[0]  + x5_2 * y9_19 + x[6] * y8_19 + x7_2 * y7_19 + x[8] * y6_19 + x9_2 * y5_19;
        let z5 = x[0] * y[5] + x[1]  * y[4]  + x[2] * y[3]  + x[3] * y[2]  + x[4] * y[1]  + x[5] * y[0]  + x[6] * y9_19 + x[7] * y8_19 + x[8] * y7_19 + x[9] * y6_19;
        let z6 = x[0] * y[6] + x1_2  * y[5]  + x[2] * y[4]  + x3_2 * y[3]  + x[4] * y[2]  + x5_2 * y[1]  + x[6] * y[0]  + x7_2 * y9_19 + x[8] * y8_19 + x9_2 * y7_19;
        let z7 = x[0] * y[7] + x[1]  * y[6]  + x[2] * y[5]  + x[3] * y[4]  + x[4] * y[3]  + x[5] * y[2]  + x[6] * y[1]  + x[7] * y[0]  + x[8] * y9_19 + x[9] * y8_19;
        let z8 = x[0] * y[8] + x1_2  * y[7]  + x[2] * y[6]  + x3_2 * y[5]  + x[4] * y[4]  + x5_2 * y[3]  + x[6] * y[2]  + x7_2 * y[1]  + x[8] * y[0]  + x9_2 * y9_19;
        let z9 = x[0] * y[9] + x[1]  * y[8]  + x[2] * y[7]  + x[3] * y[6]  + x[4] * y[5]  + x[5] * y[4]  + x[6] * y[3]  + x[7] * y[2]  + x[8] * y[1]  + x[9] * y[0];

        FieldElement2625::reduce([z0, z1, z2, z3, z4, z5, z6, z7, z8, z9])
    }
}

impl<'a> Neg for &'a FieldElement2625 {
    type Output = FieldElement2625;
    fn neg(self) -> FieldElement2625 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement2625 {
    fn conditional_select(
        a: &FieldElement2625,
        b: &FieldElement2625,
        choice: Choice,
    ) -> FieldElement2625 {
        FieldElement2625([
            i32::conditional_select(&a.0[0], &b.0[0], choice),
            i32::conditional_select(&a.0[1], &b.0[1], choice),
            i32::conditional_select(&a.0[2], &b.0[2], choice),
            i32::conditional_select(&a.0[3], &b.0[3], choice),
            i32::conditional_select(&a.0[4], &b.0[4], choice),
            i32::conditional_select(&a.0[5], &b.0[5], choice),
            i32::conditional_select(&a.0[6], &b.0[6], choice),
            i32::conditional_select(&a.0[7], &b.0[7], choice),
            i32::conditional_select(&a.0[8], &b.0[8], choice),
            i32::conditional_select(&a.0[9], &b.0[9], choice),
        ])
    }

    fn conditional_assign(&mut self, other: &FieldElement2625, choice: Choice) {
        for i in 0..10 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }

    fn conditional_swap(a: &mut FieldElement2625, b: &mut FieldElement2625, choice: Choice) {
        for i in 0..10 {
            i32::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }
}

impl FieldElement2625 {
    pub(crate) const fn from_limbs(limbs: [i32; 10]) -> FieldElement2625 {
        FieldElement2625(limbs)
    }

    /// The scalar \\( 0 \\).
    pub(crate) const ZERO: FieldElement2625 = FieldElement2625::from_limbs([0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    /// The scalar \\( 1 \\).
    pub(crate) const ONE: FieldElement2625 = FieldElement2625::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Invert the sign of this field element.
    ///
    /// Limbs are negated in place; no carry is needed since the
    /// representation is signed.
    pub(crate) fn negate(&mut self) {
        for limb in self.0.iter_mut() {
            *limb = -*limb;
        }
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub(crate) fn pow2k(&self, k: u32) -> FieldElement2625 {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Given signed coefficients `h[0], ..., h[9]` with
    /// \\(|h\_i| < 2\^{62}\\), carry and reduce them mod p.
    ///
    /// Each carry is rounded, `c = (h + 2^25) >> 26` for even limbs and
    /// `c = (h + 2^24) >> 25` for odd limbs, leaving
    /// \\(-2\^{25} \leq h\_i < 2\^{25}\\) (even) and
    /// \\(-2\^{24} \leq h\_i < 2\^{24}\\) (odd), except that \\(h\_1\\) and
    /// \\(h\_5\\) may exceed their bound by a small final carry.
    #[rustfmt::skip] // keep alignment of carry chain
    fn reduce(mut h: [i64; 10]) -> FieldElement2625 {
        /// Carry the value from limb i = 0..8 to limb i+1
        #[inline(always)]
        fn carry(h: &mut [i64; 10], i: usize) {
            debug_assert!(i < 9);
            if i % 2 == 0 {
                // Even limbs have 26 bits
                let c = (h[i] + (1 << 25)) >> 26;
                h[i + 1] += c;
                h[i] -= c << 26;
            } else {
                // Odd limbs have 25 bits
                let c = (h[i] + (1 << 24)) >> 25;
                h[i + 1] += c;
                h[i] -= c << 25;
            }
        }

        // Perform two halves of the carry chain in parallel.
        carry(&mut h, 0); carry(&mut h, 4);
        // |h[1]|, |h[5]| < 2^62 + 2^37
        carry(&mut h, 1); carry(&mut h, 5);
        carry(&mut h, 2); carry(&mut h, 6);
        carry(&mut h, 3); carry(&mut h, 7);
        // |h[4]| < 2^25 + 2^38, |h[8]| < 2^26 + 2^38
        carry(&mut h, 4); carry(&mut h, 8);
        // Now |h[5]| < 2^24 + 2^13

        // Last carry has a multiplication by 19:
        let c = (h[9] + (1 << 24)) >> 25;
        h[0] += c * 19;
        h[9] -= c << 25;
        // |c| < 2^38, so |h[0]| < 2^25 + 2^43

        carry(&mut h, 0);
        // Now |h[1]| < 2^24 + 2^18 and every other limb is in range.

        FieldElement2625([
            h[0] as i32,
            h[1] as i32,
            h[2] as i32,
            h[3] as i32,
            h[4] as i32,
            h[5] as i32,
            h[6] as i32,
            h[7] as i32,
            h[8] as i32,
            h[9] as i32,
        ])
    }

    /// Load a `FieldElement2625` from the low 255 bits of a 256-bit
    /// input.
    ///
    /// # Warning
    ///
    /// This function does not check that the input used the canonical
    /// representative.  It masks the high bit, but it will happily
    /// decode 2^255 - 18 to 1.  Applications that require a canonical
    /// encoding of every field element should decode, re-encode to
    /// the canonical encoding, and check that the input was
    /// canonical.
    #[rustfmt::skip] // keep alignment of h[*] values
    pub(crate) fn from_bytes(data: &[u8; 32]) -> FieldElement2625 {
        #[inline]
        fn load3(b: &[u8]) -> i64 {
           (b[0] as i64) | ((b[1] as i64) << 8) | ((b[2] as i64) << 16)
        }

        #[inline]
        fn load4(b: &[u8]) -> i64 {
           (b[0] as i64) | ((b[1] as i64) << 8) | ((b[2] as i64) << 16) | ((b[3] as i64) << 24)
        }

        let mut h = [0i64; 10];
        const LOW_23_BITS: i64 = (1 << 23) - 1;
        h[0] =  load4(&data[ 0..]);
        h[1] =  load3(&data[ 4..]) << 6;
        h[2] =  load3(&data[ 7..]) << 5;
        h[3] =  load3(&data[10..]) << 3;
        h[4] =  load3(&data[13..]) << 2;
        h[5] =  load4(&data[16..]);
        h[6] =  load3(&data[20..]) << 7;
        h[7] =  load3(&data[23..]) << 5;
        h[8] =  load3(&data[26..]) << 4;
        h[9] = (load3(&data[29..]) & LOW_23_BITS) << 2;

        FieldElement2625::reduce(h)
    }

    /// Return the canonical representative of this element: every
    /// limb non-negative and within its 26- or 25-bit width, and the
    /// value in \\([0, p)\\).
    #[rustfmt::skip] // keep alignment of carry chain
    pub(crate) fn normalize(&self) -> FieldElement2625 {
        // Bring the limbs back into the range of a carried element, so
        // that the value lies in (-p, 2p).
        let mut h = FieldElement2625::reduce(self.0.map(i64::from)).0;

        // Let h be the value to normalize.  Write h = pq + r with
        // 0 <= r < p; for h in (-p, 2p), q is one of -1, 0, 1.
        //
        // q is the top carry of h + 19 when h is processed with
        // flooring shifts; the 19 enters as 19*h9 scaled down by 2^25,
        // rounded.
        let mut q: i32 = (19 * h[9] + (1 << 24)) >> 25;
        q = (h[0] + q) >> 26;
        q = (h[1] + q) >> 25;
        q = (h[2] + q) >> 26;
        q = (h[3] + q) >> 25;
        q = (h[4] + q) >> 26;
        q = (h[5] + q) >> 25;
        q = (h[6] + q) >> 26;
        q = (h[7] + q) >> 25;
        q = (h[8] + q) >> 26;
        q = (h[9] + q) >> 25;

        debug_assert!((-1..=1).contains(&q));

        // Now r = h - pq = h + 19q - 2^255q.

        const LOW_25_BITS: i32 = (1 << 25) - 1;
        const LOW_26_BITS: i32 = (1 << 26) - 1;

        h[0] += 19 * q;

        // Carry with flooring shifts, so that every limb ends up
        // non-negative...
        h[1] += h[0] >> 26; h[0] &= LOW_26_BITS;
        h[2] += h[1] >> 25; h[1] &= LOW_25_BITS;
        h[3] += h[2] >> 26; h[2] &= LOW_26_BITS;
        h[4] += h[3] >> 25; h[3] &= LOW_25_BITS;
        h[5] += h[4] >> 26; h[4] &= LOW_26_BITS;
        h[6] += h[5] >> 25; h[5] &= LOW_25_BITS;
        h[7] += h[6] >> 26; h[6] &= LOW_26_BITS;
        h[8] += h[7] >> 25; h[7] &= LOW_25_BITS;
        h[9] += h[8] >> 26; h[8] &= LOW_26_BITS;

        // ... and discard the final carry, which is exactly q*2^255.
        debug_assert!((h[9] >> 25) == q);
        h[9] &= LOW_25_BITS;

        FieldElement2625(h)
    }

    /// Serialize this `FieldElement2625` to a 32-byte array.  The
    /// encoding is canonical.
    #[allow(clippy::identity_op)]
    pub(crate) fn as_bytes(&self) -> [u8; 32] {
        // Every limb of the normalized form is non-negative.
        let h = self.normalize().0.map(|limb| limb as u32);

        let mut s = [0u8; 32];
        s[0] = (h[0] >> 0) as u8;
        s[1] = (h[0] >> 8) as u8;
        s[2] = (h[0] >> 16) as u8;
        s[3] = ((h[0] >> 24) | (h[1] << 2)) as u8;
        s[4] = (h[1] >> 6) as u8;
        s[5] = (h[1] >> 14) as u8;
        s[6] = ((h[1] >> 22) | (h[2] << 3)) as u8;
        s[7] = (h[2] >> 5) as u8;
        s[8] = (h[2] >> 13) as u8;
        s[9] = ((h[2] >> 21) | (h[3] << 5)) as u8;
        s[10] = (h[3] >> 3) as u8;
        s[11] = (h[3] >> 11) as u8;
        s[12] = ((h[3] >> 19) | (h[4] << 6)) as u8;
        s[13] = (h[4] >> 2) as u8;
        s[14] = (h[4] >> 10) as u8;
        s[15] = (h[4] >> 18) as u8;
        s[16] = (h[5] >> 0) as u8;
        s[17] = (h[5] >> 8) as u8;
        s[18] = (h[5] >> 16) as u8;
        s[19] = ((h[5] >> 24) | (h[6] << 1)) as u8;
        s[20] = (h[6] >> 7) as u8;
        s[21] = (h[6] >> 15) as u8;
        s[22] = ((h[6] >> 23) | (h[7] << 3)) as u8;
        s[23] = (h[7] >> 5) as u8;
        s[24] = (h[7] >> 13) as u8;
        s[25] = ((h[7] >> 21) | (h[8] << 4)) as u8;
        s[26] = (h[8] >> 4) as u8;
        s[27] = (h[8] >> 12) as u8;
        s[28] = ((h[8] >> 20) | (h[9] << 6)) as u8;
        s[29] = (h[9] >> 2) as u8;
        s[30] = (h[9] >> 10) as u8;
        s[31] = (h[9] >> 18) as u8;

        // Check that high bit is cleared
        debug_assert!((s[31] & 0b1000_0000u8) == 0u8);

        s
    }

    #[rustfmt::skip] // keep alignment of z* calculations
    fn square_inner(&self) -> [i64; 10] {
        // Optimized version of multiplication for the case of squaring.
        // Pre- and post- conditions identical to multiplication function.
        let x = self.0.map(i64::from);
        let x0_2  =  2 * x[0];
        let x1_2  =  2 * x[1];
        let x2_2  =  2 * x[2];
        let x3_2  =  2 * x[3];
        let x4_2  =  2 * x[4];
        let x5_2  =  2 * x[5];
        let x6_2  =  2 * x[6];
        let x7_2  =  2 * x[7];
        let x5_19 = 19 * x[5];
        let x6_19 = 19 * x[6];
        let x7_19 = 19 * x[7];
        let x8_19 = 19 * x[8];
        let x9_19 = 19 * x[9];

        let mut z = [0i64; 10];
        z[0] = x[0] * x[0] + x2_2 * x8_19 + x4_2 * x6_19 + (x1_2 * x9_19 + x3_2 * x7_19 + x[5] * x5_19) * 2;
        z[1] = x0_2 * x[1] + x3_2 * x8_19 + x5_2 * x6_19 + (x[2] * x9_19 + x[4] * x7_19                ) * 2;
        z[2] = x0_2 * x[2] + x1_2 * x[1]  + x4_2 * x8_19 +  x[6] * x6_19 + (x3_2 * x9_19 + x5_2 * x7_19) * 2;
        z[3] = x0_2 * x[3] + x1_2 * x[2]  + x5_2 * x8_19 + (x[4] * x9_19 + x[6] * x7_19                ) * 2;
        z[4] = x0_2 * x[4] + x1_2 * x3_2  + x[2] * x[2]  +  x6_2 * x8_19 + (x5_2 * x9_19 + x[7] * x7_19) * 2;
        z[5] = x0_2 * x[5] + x1_2 * x[4]  + x2_2 * x[3]  +  x7_2 * x8_19 +  x[6] * x9_19                  * 2;
        z[6] = x0_2 * x[6] + x1_2 * x5_2  + x2_2 * x[4]  +  x3_2 * x[3]  +  x[8] * x8_19 + x7_2 * x9_19  * 2;
        z[7] = x0_2 * x[7] + x1_2 * x[6]  + x2_2 * x[5]  +  x3_2 * x[4]  +  x[8] * x9_19                  * 2;
        z[8] = x0_2 * x[8] + x1_2 * x7_2  + x2_2 * x[6]  +  x3_2 * x5_2  +  x[4] * x[4]  + x[9] * x9_19  * 2;
        z[9] = x0_2 * x[9] + x1_2 * x[8]  + x2_2 * x[7]  +  x3_2 * x[6]  +  x4_2 * x[5]                     ;

        z
    }

    /// Compute `self^2`.
    pub(crate) fn square(&self) -> FieldElement2625 {
        FieldElement2625::reduce(self.square_inner())
    }

    /// Compute `2*self^2`.
    pub(crate) fn square2(&self) -> FieldElement2625 {
        let mut coeffs = self.square_inner();
        for coeff in &mut coeffs {
            *coeff += *coeff;
        }
        FieldElement2625::reduce(coeffs)
    }

    /// Compute `k * self` for a small constant \\( k < 2\^{25} \\).
    pub(crate) fn mul_small(&self, k: u32) -> FieldElement2625 {
        debug_assert!(k < (1 << 25));
        let k = i64::from(k);
        FieldElement2625::reduce(self.0.map(|limb| i64::from(limb) * k))
    }
}
