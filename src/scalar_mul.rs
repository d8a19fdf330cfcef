// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Constant-time, variable-base scalar multiplication.

use crate::errors::InvalidPointBytes;
use crate::scalar::Scalar;
use crate::traits::{Identity, ValidityCheck};
use crate::weierstrass::ProjectivePoint;
use crate::window::LookupTable;

/// Perform constant-time, fixed-window scalar multiplication.
pub(crate) fn mul(point: &ProjectivePoint, scalar: &Scalar) -> ProjectivePoint {
    debug_assert!(point.is_valid());

    // Construct a lookup table of [P, 2P, 3P, ..., 16P].
    let lookup_table = LookupTable::from(point);
    // Setting s = scalar, compute
    //
    //    s = s_0 + s_1*16^1 + ... + s_63*16^63,
    //
    // with `0 ≤ s_i < 16`, and scan the digits from the most significant
    // end:
    //
    //    s*P = 16*(16*(...(16*(s_63*P) + s_62*P)...) + s_1*P) + s_0*P.
    //
    // Every iteration performs the same work: four complete doublings and
    // one complete addition of the table entry selected by the digit.  The
    // formulas absorb the identity cases, so no digit needs special
    // treatment.
    let scalar_digits = scalar.as_radix_16();

    let mut q = ProjectivePoint::identity();
    for i in (0..64).rev() {
        q = q.double();
        q = q.double();
        q = q.double();
        q = q.double();
        q = &q + &lookup_table.select(scalar_digits[i] as i8);
    }
    q
}

/// Multiply the curve point encoded by `point_bytes` by the scalar encoded
/// by `scalar_bytes`, returning the encoding of the product.
///
/// `point_bytes` is the 64-byte affine encoding x ‖ y (little-endian
/// coordinates); the all-zero encoding denotes the identity.
/// `scalar_bytes` is a 256-bit little-endian integer.
///
/// Input that is neither on the curve nor the identity encoding is
/// rejected before any scalar-dependent work begins.
///
/// ```
/// use curve13318::scalar_mult;
///
/// let k = [0u8; 32];
/// let p = [0u8; 64];
/// assert_eq!(scalar_mult(&k, &p), Ok([0u8; 64]));
/// ```
pub fn scalar_mult(
    scalar_bytes: &[u8; 32],
    point_bytes: &[u8; 64],
) -> Result<[u8; 64], InvalidPointBytes> {
    let (point, valid) = ProjectivePoint::from_bytes(point_bytes);
    if !bool::from(valid) {
        return Err(InvalidPointBytes);
    }

    let scalar = Scalar::from_bytes(scalar_bytes);
    Ok(mul(&point, &scalar).to_bytes())
}
