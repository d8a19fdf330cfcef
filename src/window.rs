// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Code for fixed-window functionality.

use core::fmt::Debug;

use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::traits::Identity;
use crate::weierstrass::ProjectivePoint;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A lookup table of precomputed multiples of a point \\(P\\), used to
/// compute \\( xP \\) for \\( 0 \leq x \leq 16 \\).
///
/// The computation of \\( xP \\) is done in constant time by the `select`
/// function: an oblivious scan over the whole table combining every entry
/// under an equality-derived mask, never an index into it.
///
/// `LookupTable` deliberately does not implement `Index`, so the table
/// cannot accidentally be used directly.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable([ProjectivePoint; 16]);

impl LookupTable {
    /// Given \\(0 \leq x \leq 16\\), return \\(xP\\) in constant time.
    ///
    /// \\(x = 0\\) yields the identity without touching the table.
    pub fn select(&self, x: i8) -> ProjectivePoint {
        debug_assert!(x >= 0);
        debug_assert!(x <= 16);

        // Set t = 0 * P = identity
        let mut t = ProjectivePoint::identity();
        for j in 1..17 {
            // Copy `points[j-1] == j*P` onto `t` in constant time if `x == j`.
            let c = (x as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.0[j - 1], c);
        }
        // Now t == x * P.

        t
    }
}

impl Debug for LookupTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", self.0)
    }
}

impl<'a> From<&'a ProjectivePoint> for LookupTable {
    /// Construct the table [P, 2P, 3P, ..., 16P].
    fn from(p: &'a ProjectivePoint) -> Self {
        let mut points = [*p; 16];
        for j in 0..15 {
            points[j + 1] = p + &points[j];
        }
        LookupTable(points)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for LookupTable {
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}
