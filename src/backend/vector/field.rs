// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! 4-way vectorized radix-2^25.5 field arithmetic.
//!
//! A `FieldElement2625x4` packs four field elements ("lanes") into one
//! buffer of 40 limbs, limb i of lane L at index 4i + L, aligned to the
//! 256-bit vector register width.  Every operation applies the scalar
//! engine's formula to all four lanes in lockstep; lanes never interact.
//! The lane loops are written over the interleaved layout so that the
//! compiler's vector pipeline can batch them; per-lane results are
//! bit-for-bit those of the scalar engine.

use core::ops::{Add, Sub};

use crate::field::{FieldElement, B};

/// Limb values of 2*p resp. 4*p, by nominal limb width; see
/// `field::TWO_P`/`FOUR_P` for the slack convention.
const TWO_P_LIMB: [u64; 3] = [0x07ff_ffda, 0x03ff_fffe, 0x07ff_fffe];
const FOUR_P_LIMB: [u64; 3] = [0x0fff_ffb4, 0x07ff_fffc, 0x0fff_fffc];

/// A vector of four field elements in interleaved limb order.
#[derive(Copy, Clone, Debug)]
#[repr(C, align(32))]
pub(crate) struct FieldElement2625x4(pub(crate) [u64; 40]);

impl FieldElement2625x4 {
    /// Pack four field elements into interleaved form.
    pub(crate) fn new(
        x0: &FieldElement,
        x1: &FieldElement,
        x2: &FieldElement,
        x3: &FieldElement,
    ) -> FieldElement2625x4 {
        let mut v = [0u64; 40];
        for i in 0..10 {
            v[4 * i] = x0.0[i];
            v[4 * i + 1] = x1.0[i];
            v[4 * i + 2] = x2.0[i];
            v[4 * i + 3] = x3.0[i];
        }
        FieldElement2625x4(v)
    }

    /// Unpack one lane.
    pub(crate) fn extract(&self, lane: usize) -> FieldElement {
        debug_assert!(lane < 4);
        let mut t = [0u64; 10];
        for i in 0..10 {
            t[i] = self.0[4 * i + lane];
        }
        FieldElement(t)
    }

    /// Unpack all four lanes.
    pub(crate) fn split(&self) -> [FieldElement; 4] {
        [
            self.extract(0),
            self.extract(1),
            self.extract(2),
            self.extract(3),
        ]
    }

    /// One batched carry step: move the overflow of limb `src` onto limb
    /// `dst` in every lane.
    #[inline(always)]
    fn carry_step(v: &mut [u64; 40], src: usize, dst: usize, bits: u32, mul19: bool) {
        let mask = (1u64 << bits) - 1;
        for l in 0..4 {
            let c = v[4 * src + l] >> bits;
            v[4 * src + l] &= mask;
            v[4 * dst + l] += if mul19 { 19 * c } else { c };
        }
    }

    /// The scalar engine's interleaved two-chain carry, applied to all
    /// four lanes.  Same precondition (every limb < 2^63) and the same
    /// per-lane result as `FieldElement::carry`.
    #[must_use]
    pub(crate) fn carry(&self) -> FieldElement2625x4 {
        let mut v = self.0;
        Self::carry_step(&mut v, 0, 1, 26, false); // Round 1a
        Self::carry_step(&mut v, 5, 6, 25, false); // Round 1b
        Self::carry_step(&mut v, 1, 2, 25, false); // Round 2a
        Self::carry_step(&mut v, 6, 7, 26, false); // Round 2b
        Self::carry_step(&mut v, 2, 3, 26, false); // Round 3a
        Self::carry_step(&mut v, 7, 8, 25, false); // Round 3b
        Self::carry_step(&mut v, 3, 4, 25, false); // Round 4a
        Self::carry_step(&mut v, 8, 9, 26, false); // Round 4b
        Self::carry_step(&mut v, 4, 5, 26, false); // Round 5a
        Self::carry_step(&mut v, 9, 0, 25, true);  // Round 5b
        Self::carry_step(&mut v, 5, 6, 25, false); // Round 6a
        Self::carry_step(&mut v, 0, 1, 26, false); // Round 6b
        FieldElement2625x4(v)
    }

    /// The two-stage carry: the standard chain plus one more rebalancing
    /// round pair, for use where subtraction slack must be flushed before
    /// a dependent multiply.  Value-preserving mod p per lane; bounds at
    /// least as tight as `carry`.
    #[must_use]
    pub(crate) fn carry2(&self) -> FieldElement2625x4 {
        let carried = self.carry();
        let mut v = carried.0;
        Self::carry_step(&mut v, 6, 7, 26, false); // Round 7a
        Self::carry_step(&mut v, 1, 2, 25, false); // Round 7b
        FieldElement2625x4(v)
    }

    /// Add 2*p to every lane.
    #[must_use]
    pub(crate) fn add2p(&self) -> FieldElement2625x4 {
        self.add_p_multiple(&TWO_P_LIMB)
    }

    /// Add 4*p to every lane.
    #[must_use]
    pub(crate) fn add4p(&self) -> FieldElement2625x4 {
        self.add_p_multiple(&FOUR_P_LIMB)
    }

    fn add_p_multiple(&self, limb_consts: &[u64; 3]) -> FieldElement2625x4 {
        let mut v = self.0;
        for l in 0..4 {
            v[l] += limb_consts[0];
        }
        for i in 1..10 {
            let c = if i % 2 == 1 { limb_consts[1] } else { limb_consts[2] };
            for l in 0..4 {
                v[4 * i + l] += c;
            }
        }
        FieldElement2625x4(v)
    }

    /// Multiply every lane by the curve constant b = 13318.
    #[must_use]
    pub(crate) fn mul_b(&self) -> FieldElement2625x4 {
        let mut v = self.0;
        for limb in v.iter_mut() {
            *limb *= B;
        }
        FieldElement2625x4(v).carry()
    }

    /// Lane-batched schoolbook multiplication; per-lane semantics are
    /// those of the scalar `Mul`, same preconditions, carried output.
    pub(crate) fn mul(&self, rhs: &FieldElement2625x4) -> FieldElement2625x4 {
        let f = &self.0;
        let g = &rhs.0;

        // Partial product f_i * g_j lands on limb (i + j) mod 10, scaled
        // by 19 when it wraps past 2^255 and by 2 when both indices are
        // odd (the two half-bits of the 25.5 radix line up).
        let mut h = [0u64; 40];
        for i in 0..10 {
            for j in 0..10 {
                let wraps = i + j >= 10;
                let k = if wraps { i + j - 10 } else { i + j };
                let double = (i % 2 == 1) && (j % 2 == 1);
                for l in 0..4 {
                    let mut fv = f[4 * i + l];
                    if double {
                        fv *= 2;
                    }
                    let mut gv = g[4 * j + l];
                    if wraps {
                        gv *= 19;
                    }
                    h[4 * k + l] += fv * gv;
                }
            }
        }

        FieldElement2625x4(h).carry()
    }

    /// Lane-batched squaring.
    pub(crate) fn square(&self) -> FieldElement2625x4 {
        self.mul(self)
    }
}

impl<'a, 'b> Add<&'b FieldElement2625x4> for &'a FieldElement2625x4 {
    type Output = FieldElement2625x4;
    fn add(self, rhs: &'b FieldElement2625x4) -> FieldElement2625x4 {
        let mut v = self.0;
        for (limb, r) in v.iter_mut().zip(rhs.0.iter()) {
            *limb += r;
        }
        FieldElement2625x4(v)
    }
}

impl<'a, 'b> Sub<&'b FieldElement2625x4> for &'a FieldElement2625x4 {
    type Output = FieldElement2625x4;
    /// Limbwise subtraction; as in the scalar engine, the caller arranges
    /// slack with `add2p`/`add4p` so no limb underflows.
    fn sub(self, rhs: &'b FieldElement2625x4) -> FieldElement2625x4 {
        let mut v = self.0;
        for (limb, r) in v.iter_mut().zip(rhs.0.iter()) {
            debug_assert!(*limb >= *r);
            *limb -= r;
        }
        FieldElement2625x4(v)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn four_elements() -> [FieldElement; 4] {
        [
            FieldElement::from_bytes(&[1u8; 32]),
            FieldElement::from_bytes(&[2u8; 32]),
            FieldElement::from_bytes(&[0xf3u8; 32]),
            FieldElement::from_bytes(&core::array::from_fn(|i| i as u8)),
        ]
    }

    #[test]
    fn buffer_is_vector_aligned() {
        assert!(core::mem::align_of::<FieldElement2625x4>() >= 32);
    }

    #[test]
    fn interleaved_layout() {
        let xs = four_elements();
        let v = FieldElement2625x4::new(&xs[0], &xs[1], &xs[2], &xs[3]);
        for i in 0..10 {
            for l in 0..4 {
                assert_eq!(v.0[4 * i + l], xs[l].0[i]);
            }
        }
    }

    #[test]
    fn pack_unpack_roundtrip() {
        let xs = four_elements();
        let v = FieldElement2625x4::new(&xs[0], &xs[1], &xs[2], &xs[3]);
        for (lane, x) in v.split().iter().zip(xs.iter()) {
            assert_eq!(lane.0, x.0);
        }
    }

    #[test]
    fn lanewise_mul_matches_scalar_engine() {
        let xs = four_elements();
        let ys = [xs[3], xs[2], xs[1], xs[0]];
        let a = FieldElement2625x4::new(&xs[0], &xs[1], &xs[2], &xs[3]);
        let b = FieldElement2625x4::new(&ys[0], &ys[1], &ys[2], &ys[3]);
        let prod = a.mul(&b);
        for l in 0..4 {
            // Bit-for-bit, not just mod p.
            assert_eq!(prod.extract(l).0, (&xs[l] * &ys[l]).0);
        }
    }

    #[test]
    fn lanewise_square_matches_scalar_engine() {
        let xs = four_elements();
        let a = FieldElement2625x4::new(&xs[0], &xs[1], &xs[2], &xs[3]);
        let sq = a.square();
        for l in 0..4 {
            assert_eq!(sq.extract(l).to_bytes(), xs[l].square().to_bytes());
        }
    }

    #[test]
    fn lanewise_carry_matches_scalar_engine() {
        let zero = FieldElement::ZERO;
        let mut loose = FieldElement2625x4::new(&zero, &zero, &zero, &zero);
        for (i, limb) in loose.0.iter_mut().enumerate() {
            *limb = (i as u64).wrapping_mul(0x0123_4567_89ab_cdef) & ((1 << 63) - 1);
        }
        let carried = loose.carry();
        for l in 0..4 {
            assert_eq!(carried.extract(l).0, loose.extract(l).carry().0);
        }
    }

    #[test]
    fn carry2_preserves_value_and_tightens_bounds() {
        let xs = four_elements();
        let a = FieldElement2625x4::new(&xs[0], &xs[1], &xs[2], &xs[3]);
        let slack = &a.add4p() + &a.add2p();
        let flushed = slack.carry2();
        for l in 0..4 {
            assert_eq!(flushed.extract(l).to_bytes(), slack.extract(l).to_bytes());
            for (i, limb) in flushed.extract(l).0.iter().enumerate() {
                let nominal = if i % 2 == 0 { 1u64 << 26 } else { 1 << 25 };
                assert!(*limb < nominal + (1 << 20));
            }
        }
    }

    #[test]
    fn lanes_do_not_interact() {
        let xs = four_elements();
        let zero = FieldElement::ZERO;
        let a = FieldElement2625x4::new(&xs[0], &zero, &xs[2], &zero);
        let sq = a.square();
        assert_eq!(sq.extract(1).to_bytes(), [0u8; 32]);
        assert_eq!(sq.extract(3).to_bytes(), [0u8; 32]);
        assert_eq!(sq.extract(0).to_bytes(), xs[0].square().to_bytes());
    }
}
