// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Field arithmetic for ℤ/(2²⁵⁵-19) in radix 2^25.5.
//!
//! A `FieldElement` is ten unsigned 64-bit limbs of alternating 26/25-bit
//! nominal width, so that an element t represents the integer
//!
//! ```text
//! t[0] + 2^26 t[1] + 2^51 t[2] + 2^77 t[3] + ... + 2^230 t[9].
//! ```
//!
//! Limbs are allowed to grow well past their nominal width between
//! operations; three bound regimes matter:
//!
//! * *loose*: anything below 2^63 per limb (multiplication inputs must
//!   still be near-nominal, see `mul`);
//! * *carried*: every limb within ~1.01x its nominal width, produced by
//!   `carry` and by all multiplicative operations (the value may still be
//!   ≥ p, anywhere in [0, 2^256));
//! * *reduced*: the unique representative in [0, p), produced by `reduce`.
//!
//! Because limbs are unsigned, subtraction is only valid when it cannot
//! underflow; callers first add a multiple of p in limb form (`add2p`,
//! `add4p`) to create slack.  The point formulas in `weierstrass` are
//! scheduled around exactly this discipline.

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The curve constant b = 13318 of E : y² = x³ - 3x + b.
pub(crate) const B: u64 = 13318;

const LOW_25_BITS: u64 = (1 << 25) - 1;
const LOW_26_BITS: u64 = (1 << 26) - 1;

/// 2*p in limb form, with every limb roughly twice its nominal width.
/// Adding it to a carried element guarantees that a subsequent limbwise
/// subtraction of another carried element cannot underflow.
const TWO_P: [u64; 10] = [
    0x07ff_ffda,
    0x03ff_fffe,
    0x07ff_fffe,
    0x03ff_fffe,
    0x07ff_fffe,
    0x03ff_fffe,
    0x07ff_fffe,
    0x03ff_fffe,
    0x07ff_fffe,
    0x03ff_fffe,
];

/// 4*p in limb form. Used where the subtrahend is a sum of two carried
/// elements, for which 2*p is not enough.
const FOUR_P: [u64; 10] = [
    0x0fff_ffb4,
    0x07ff_fffc,
    0x0fff_fffc,
    0x07ff_fffc,
    0x0fff_fffc,
    0x07ff_fffc,
    0x0fff_fffc,
    0x07ff_fffc,
    0x0fff_fffc,
    0x07ff_fffc,
];

/// A `FieldElement` represents an element of the field GF(2^255 - 19).
///
/// Bounds on each limb vary depending on context; see the module
/// documentation.
#[derive(Copy, Clone)]
pub struct FieldElement(pub(crate) [u64; 10]);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s by comparing their
    /// canonical encodings.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(
        a: &FieldElement,
        b: &FieldElement,
        choice: Choice,
    ) -> FieldElement {
        let mut limbs = [0u64; 10];
        for i in 0..10 {
            limbs[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}

impl<'b> AddAssign<&'b FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: &'b FieldElement) {
        for i in 0..10 {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement> for FieldElement {
    /// Limbwise subtraction.  Underflow is a caller error: the minuend
    /// must dominate the subtrahend limb by limb, which the caller
    /// arranges with `add2p`/`add4p`.
    fn sub_assign(&mut self, rhs: &'b FieldElement) {
        for i in 0..10 {
            debug_assert!(self.0[i] >= rhs.0[i]);
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'b> MulAssign<&'b FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: &'b FieldElement) {
        let result = (self as &FieldElement) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Schoolbook multiplication with 19· and 2· precomputation.
    ///
    /// # Preconditions
    ///
    /// * limbs of `self` and `rhs` bounded by ~1.01x nominal width, plus
    ///   at most one layer of 2p/4p subtraction slack (< 2^28.5).
    ///
    /// # Postconditions
    ///
    /// * output is carried.
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        let f = &self.0;
        let g = &rhs.0;

        let g19_1 = 19 * g[1];
        let g19_2 = 19 * g[2];
        let g19_3 = 19 * g[3];
        let g19_4 = 19 * g[4];
        let g19_5 = 19 * g[5];
        let g19_6 = 19 * g[6];
        let g19_7 = 19 * g[7];
        let g19_8 = 19 * g[8];
        let g19_9 = 19 * g[9];

        let f2_1 = 2 * f[1];
        let f2_3 = 2 * f[3];
        let f2_5 = 2 * f[5];
        let f2_7 = 2 * f[7];
        let f2_9 = 2 * f[9];

        // Every limb of the accumulator stays below 2^63; see the bound
        // analysis in the preconditions above.
        let h0 = f[0]*g[0] + f2_1*g19_9 + f[2]*g19_8 + f2_3*g19_7 + f[4]*g19_6
               + f2_5*g19_5 + f[6]*g19_4 + f2_7*g19_3 + f[8]*g19_2 + f2_9*g19_1;
        let h1 = f[0]*g[1] + f[1]*g[0] + f[2]*g19_9 + f[3]*g19_8 + f[4]*g19_7
               + f[5]*g19_6 + f[6]*g19_5 + f[7]*g19_4 + f[8]*g19_3 + f[9]*g19_2;
        let h2 = f[0]*g[2] + f2_1*g[1] + f[2]*g[0] + f2_3*g19_9 + f[4]*g19_8
               + f2_5*g19_7 + f[6]*g19_6 + f2_7*g19_5 + f[8]*g19_4 + f2_9*g19_3;
        let h3 = f[0]*g[3] + f[1]*g[2] + f[2]*g[1] + f[3]*g[0] + f[4]*g19_9
               + f[5]*g19_8 + f[6]*g19_7 + f[7]*g19_6 + f[8]*g19_5 + f[9]*g19_4;
        let h4 = f[0]*g[4] + f2_1*g[3] + f[2]*g[2] + f2_3*g[1] + f[4]*g[0]
               + f2_5*g19_9 + f[6]*g19_8 + f2_7*g19_7 + f[8]*g19_6 + f2_9*g19_5;
        let h5 = f[0]*g[5] + f[1]*g[4] + f[2]*g[3] + f[3]*g[2] + f[4]*g[1]
               + f[5]*g[0] + f[6]*g19_9 + f[7]*g19_8 + f[8]*g19_7 + f[9]*g19_6;
        let h6 = f[0]*g[6] + f2_1*g[5] + f[2]*g[4] + f2_3*g[3] + f[4]*g[2]
               + f2_5*g[1] + f[6]*g[0] + f2_7*g19_9 + f[8]*g19_8 + f2_9*g19_7;
        let h7 = f[0]*g[7] + f[1]*g[6] + f[2]*g[5] + f[3]*g[4] + f[4]*g[3]
               + f[5]*g[2] + f[6]*g[1] + f[7]*g[0] + f[8]*g19_9 + f[9]*g19_8;
        let h8 = f[0]*g[8] + f2_1*g[7] + f[2]*g[6] + f2_3*g[5] + f[4]*g[4]
               + f2_5*g[3] + f[6]*g[2] + f2_7*g[1] + f[8]*g[0] + f2_9*g19_9;
        let h9 = f[0]*g[9] + f[1]*g[8] + f[2]*g[7] + f[3]*g[6] + f[4]*g[5]
               + f[5]*g[4] + f[6]*g[3] + f[7]*g[2] + f[8]*g[1] + f[9]*g[0];

        FieldElement([h0, h1, h2, h3, h4, h5, h6, h7, h8, h9]).carry()
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);

/// Convert an array of (at least) three bytes into a u64.
#[inline]
fn load3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Convert an array of (at least) four bytes into a u64.
#[inline]
fn load4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}

impl FieldElement {
    /// The additive identity.
    pub const ZERO: FieldElement = FieldElement([0; 10]);
    /// The multiplicative identity.
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Load a `FieldElement` from 32 little-endian bytes.
    ///
    /// The full 2^256 input range is accepted; the value is *not* reduced
    /// below p (the high bit and any excess over p are folded into the
    /// limbs, so `from_bytes(b).to_bytes()` canonicalizes).  The output is
    /// carried.
    pub fn from_bytes(data: &[u8; 32]) -> FieldElement {
        let mut z = [0u64; 10];
        z[0] = load4(&data[0..]);
        z[1] = load3(&data[4..]) << 6;
        z[2] = load3(&data[7..]) << 5;
        z[3] = load3(&data[10..]) << 3;
        z[4] = load3(&data[13..]) << 2;
        z[5] = load4(&data[16..]);
        z[6] = load3(&data[20..]) << 7;
        z[7] = load3(&data[23..]) << 5;
        z[8] = load3(&data[26..]) << 4;
        z[9] = load3(&data[29..]) << 2;

        let carry9 = z[9] >> 25; z[0] += carry9 * 19; z[9] &= LOW_25_BITS;
        let carry1 = z[1] >> 25; z[2] += carry1;      z[1] &= LOW_25_BITS;
        let carry3 = z[3] >> 25; z[4] += carry3;      z[3] &= LOW_25_BITS;
        let carry5 = z[5] >> 25; z[6] += carry5;      z[5] &= LOW_25_BITS;
        let carry7 = z[7] >> 25; z[8] += carry7;      z[7] &= LOW_25_BITS;

        let carry0 = z[0] >> 26; z[1] += carry0;      z[0] &= LOW_26_BITS;
        let carry2 = z[2] >> 26; z[3] += carry2;      z[2] &= LOW_26_BITS;
        let carry4 = z[4] >> 26; z[5] += carry4;      z[4] &= LOW_26_BITS;
        let carry6 = z[6] >> 26; z[7] += carry6;      z[6] &= LOW_26_BITS;
        let carry8 = z[8] >> 26; z[9] += carry8;      z[8] &= LOW_26_BITS;

        FieldElement(z)
    }

    /// Serialize this `FieldElement` to 32 little-endian bytes.
    ///
    /// The element is carried and fully reduced internally first, so the
    /// encoding is canonical: any two representations of the same value
    /// mod p serialize identically.
    pub fn to_bytes(&self) -> [u8; 32] {
        let h = self.carry().reduce().0;

        let mut s = [0u8; 32];
        s[0] = h[0] as u8;
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
        s[16] = h[5] as u8;
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

        debug_assert!(s[31] & 0b1000_0000 == 0);

        s
    }

    /// Propagate per-limb overflow, bringing every limb within ~1.01x its
    /// nominal width.  The represented value mod p is unchanged; the value
    /// itself may still be anywhere in [0, 2^256).
    ///
    /// Two carry chains are interleaved over six rounds:
    ///
    /// ```text
    /// a: v0 -> v1 -> v2 -> v3 -> v4 -> v5 -> v6
    /// b: v5 -> v6 -> v7 -> v8 -> v9 -> v0 -> v1
    /// ```
    ///
    /// # Preconditions
    ///
    /// * every limb is strictly less than 2^63.
    #[must_use]
    pub(crate) fn carry(&self) -> FieldElement {
        let mut v = self.0;

        v[1] += v[0] >> 26;              // Round 1a
        v[0] &= LOW_26_BITS;
        v[6] += v[5] >> 25;              // Round 1b
        v[5] &= LOW_25_BITS;
        v[2] += v[1] >> 25;              // Round 2a
        v[1] &= LOW_25_BITS;
        v[7] += v[6] >> 26;              // Round 2b
        v[6] &= LOW_26_BITS;
        v[3] += v[2] >> 26;              // Round 3a
        v[2] &= LOW_26_BITS;
        v[8] += v[7] >> 25;              // Round 3b
        v[7] &= LOW_25_BITS;
        v[4] += v[3] >> 25;              // Round 4a
        v[3] &= LOW_25_BITS;
        v[9] += v[8] >> 26;              // Round 4b
        v[8] &= LOW_26_BITS;
        v[5] += v[4] >> 26;              // Round 5a
        v[4] &= LOW_26_BITS;
        v[0] += 19 * (v[9] >> 25);       // Round 5b
        v[9] &= LOW_25_BITS;
        v[6] += v[5] >> 25;              // Round 6a
        v[5] &= LOW_25_BITS;
        v[1] += v[0] >> 26;              // Round 6b
        v[0] &= LOW_26_BITS;

        FieldElement(v)
    }

    /// Conditionally subtract p until the value lies in [0, p).
    ///
    /// A carried element is anywhere in [0, 2^256), so up to two
    /// subtractions of p may be needed; both are performed branchlessly,
    /// driven by trial carry ripples of z + 19 and z + 38.
    ///
    /// # Preconditions
    ///
    /// * the element is carried.
    #[must_use]
    pub(crate) fn reduce(&self) -> FieldElement {
        let mut v = self.0;

        let mut carry38 = v[0] + 38;
        let mut carry19 = v[0] + 19;
        carry38 >>= 26; carry19 >>= 26;
        carry38 += v[1]; carry19 += v[1];
        carry38 >>= 25; carry19 >>= 25;
        carry38 += v[2]; carry19 += v[2];
        carry38 >>= 26; carry19 >>= 26;
        carry38 += v[3]; carry19 += v[3];
        carry38 >>= 25; carry19 >>= 25;
        carry38 += v[4]; carry19 += v[4];
        carry38 >>= 26; carry19 >>= 26;
        carry38 += v[5]; carry19 += v[5];
        carry38 >>= 25; carry19 >>= 25;
        carry38 += v[6]; carry19 += v[6];
        carry38 >>= 26; carry19 >>= 26;
        carry38 += v[7]; carry19 += v[7];
        carry38 >>= 25; carry19 >>= 25;
        carry38 += v[8]; carry19 += v[8];
        carry38 >>= 26; carry19 >>= 26;
        carry38 += v[9];
        carry19 += v[9];

        // Maybe add -2*p.
        let mut do_reduce = carry38 & 0x0400_0000;     // 2^26 or 0
        do_reduce <<= 37;                              // 2^63 or 0
        do_reduce = ((do_reduce as i64) >> 63) as u64; // all ones or 0
        v[0] += do_reduce & 38;

        // Maybe add -p. Not both: that would reduce by 3*p.
        do_reduce ^= u64::MAX;
        do_reduce &= carry19 & 0x0200_0000;            // 2^25 or 0
        v[9] += do_reduce;                             // maybe add 2^255
        do_reduce <<= 38;                              // 2^63 or 0
        do_reduce = ((do_reduce as i64) >> 63) as u64;
        v[0] += do_reduce & 19;

        // Unlike `carry`, ripple modulo 2^256, *not* modulo p.
        let mut t;
        t = v[0] & !LOW_26_BITS; v[0] ^= t; v[1] += t >> 26;
        t = v[1] & !LOW_25_BITS; v[1] ^= t; v[2] += t >> 25;
        t = v[2] & !LOW_26_BITS; v[2] ^= t; v[3] += t >> 26;
        t = v[3] & !LOW_25_BITS; v[3] ^= t; v[4] += t >> 25;
        t = v[4] & !LOW_26_BITS; v[4] ^= t; v[5] += t >> 26;
        t = v[5] & !LOW_25_BITS; v[5] ^= t; v[6] += t >> 25;
        t = v[6] & !LOW_26_BITS; v[6] ^= t; v[7] += t >> 26;
        t = v[7] & !LOW_25_BITS; v[7] ^= t; v[8] += t >> 25;
        t = v[8] & !LOW_26_BITS; v[8] ^= t; v[9] += t >> 26;
        t = v[9] & !LOW_26_BITS; v[9] ^= t;

        FieldElement(v)
    }

    /// Add 2*p in limb form, creating slack for one limbwise subtraction
    /// of a carried element.
    #[must_use]
    pub(crate) fn add2p(&self) -> FieldElement {
        let mut v = self.0;
        for i in 0..10 {
            v[i] += TWO_P[i];
        }
        FieldElement(v)
    }

    /// Add 4*p in limb form. Used where 2*p is not enough.
    #[must_use]
    pub(crate) fn add4p(&self) -> FieldElement {
        let mut v = self.0;
        for i in 0..10 {
            v[i] += FOUR_P[i];
        }
        FieldElement(v)
    }

    /// Multiply by the curve constant b = 13318. Output is carried.
    #[must_use]
    pub(crate) fn mul_b(&self) -> FieldElement {
        let mut v = self.0;
        for limb in v.iter_mut() {
            *limb *= B;
        }
        FieldElement(v).carry()
    }

    /// Compute the square of this field element. Output is carried.
    ///
    /// Same pre/postconditions as `mul`; saves roughly a third of the
    /// partial products.
    pub fn square(&self) -> FieldElement {
        let f = &self.0;

        let f19_5 = 19 * f[5];
        let f19_6 = 19 * f[6];
        let f19_7 = 19 * f[7];
        let f19_8 = 19 * f[8];
        let f19_9 = 19 * f[9];

        let f2_0 = 2 * f[0];
        let f2_1 = 2 * f[1];
        let f2_2 = 2 * f[2];
        let f2_3 = 2 * f[3];
        let f2_4 = 2 * f[4];
        let f2_5 = 2 * f[5];
        let f2_6 = 2 * f[6];
        let f2_7 = 2 * f[7];
        let f2_8 = 2 * f[8];
        let f2_9 = 2 * f[9];

        let f4_1 = 2 * f2_1;
        let f4_3 = 2 * f2_3;
        let f4_5 = 2 * f2_5;
        let f4_7 = 2 * f2_7;

        let h0 = f[0]*f[0] + f4_1*f19_9 + f2_2*f19_8 + f4_3*f19_7 + f2_4*f19_6 + f2_5*f19_5;
        let h1 = f2_0*f[1] + f2_2*f19_9 + f2_3*f19_8 + f2_4*f19_7 + f2_5*f19_6;
        let h2 = f2_0*f[2] + f2_1*f[1] + f4_3*f19_9 + f2_4*f19_8 + f4_5*f19_7 + f[6]*f19_6;
        let h3 = f2_0*f[3] + f2_1*f[2] + f2_4*f19_9 + f2_5*f19_8 + f2_6*f19_7;
        let h4 = f2_0*f[4] + f4_1*f[3] + f[2]*f[2] + f4_5*f19_9 + f2_6*f19_8 + f2_7*f19_7;
        let h5 = f2_0*f[5] + f2_1*f[4] + f2_2*f[3] + f2_6*f19_9 + f2_7*f19_8;
        let h6 = f2_0*f[6] + f4_1*f[5] + f2_2*f[4] + f2_3*f[3] + f4_7*f19_9 + f[8]*f19_8;
        let h7 = f2_0*f[7] + f2_1*f[6] + f2_2*f[5] + f2_3*f[4] + f2_8*f19_9;
        let h8 = f2_0*f[8] + f4_1*f[7] + f2_2*f[6] + f4_3*f[5] + f[4]*f[4] + f2_9*f19_9;
        let h9 = f2_0*f[9] + f2_1*f[8] + f2_2*f[7] + f2_3*f[6] + f2_4*f[5];

        FieldElement([h0, h1, h2, h3, h4, h5, h6, h7, h8, h9]).carry()
    }

    /// Raise self to the 2^(2^k)-th power. Requires k > 0.
    #[inline]
    fn pow2k(&self, k: u32) -> FieldElement {
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Multiply through the radix-2^51 kernel: pack both operands into
    /// five limbs, run one 5-limb schoolbook pass, and unpack.
    ///
    /// Congruent mod p to `Mul` (the representative may differ); inputs
    /// must be carried.  This trades the 100 partial products of the
    /// radix-2^25.5 multiply for 25 double-width ones.
    pub fn mul_kernel(&self, rhs: &FieldElement) -> FieldElement {
        use crate::backend::serial::u64::field::FieldElement51;
        let a = FieldElement51::from_field_element(self);
        let b = FieldElement51::from_field_element(rhs);
        a.mul(&b).to_field_element()
    }

    /// Given a field element, compute its inverse as self^(p-2) by a
    /// fixed square-and-multiply chain (Fermat's little theorem).
    ///
    /// The inverse of zero is defined to be zero.
    pub fn invert(&self) -> FieldElement {
        // The bits of p-2 = 2^255 - 21 are 11010111111...11.
        //
        // Each temporary t_i below is self^e_i; squaring shifts e_i left,
        // multiplying t_i by t_j adds e_i + e_j.
        //
        //                                 nonzero bits of e_i
        let t0 = self.square();         // 1
        let t1 = t0.pow2k(2);           // 3
        let t2 = self * &t1;            // 3,0
        let t3 = &t0 * &t2;             // 3,1,0
        let t4 = t3.square();           // 4,2,1
        let t5 = &t2 * &t4;             // 4,3,2,1,0
        let t6 = t5.pow2k(5);           // 9,8,7,6,5
        let t7 = &t6 * &t5;             // 9..0
        let t8 = t7.pow2k(10);          // 19..10
        let t9 = &t8 * &t7;             // 19..0
        let t10 = t9.pow2k(20);         // 39..20
        let t11 = &t10 * &t9;           // 39..0
        let t12 = t11.pow2k(10);        // 49..10
        let t13 = &t12 * &t7;           // 49..0
        let t14 = t13.pow2k(50);        // 99..50
        let t15 = &t14 * &t13;          // 99..0
        let t16 = t15.pow2k(100);       // 199..100
        let t17 = &t16 * &t15;          // 199..0
        let t18 = t17.pow2k(50);        // 249..50
        let t19 = &t18 * &t13;          // 249..0
        let t20 = t19.pow2k(5);         // 254..5
        let t21 = &t20 * &t3;           // 254..5,3,1,0

        t21
    }
}
