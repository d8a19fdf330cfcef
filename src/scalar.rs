// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! The scalar input to the multiplication.
//!
//! A scalar is an unsigned 256-bit little-endian integer.  It has no
//! arithmetic of its own here: the multiplication engine only ever reads
//! it as a sequence of fixed-width windows.  Values at or above 2^255 are
//! accepted as input, but only values below the group order are
//! meaningful to callers.

use core::fmt::Debug;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A scalar multiplier for a point on the curve.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Scalar {
    /// Construct a scalar from 32 little-endian bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar {
        Scalar { bytes: *bytes }
    }

    /// View this scalar as a byte array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// Split the scalar into 64 radix-16 digits, least significant first:
    ///
    /// ```text
    /// k = k_0 + k_1*16 + k_2*16² + ... + k_63*16^63,  0 ≤ k_i < 16.
    /// ```
    ///
    /// The multiplication engine consumes these most significant first,
    /// one window per four doublings.
    pub(crate) fn as_radix_16(&self) -> [u8; 64] {
        let mut digits = [0u8; 64];
        for i in 0..32 {
            digits[2 * i] = self.bytes[i] & 15;
            digits[2 * i + 1] = self.bytes[i] >> 4;
        }
        digits
    }
}
