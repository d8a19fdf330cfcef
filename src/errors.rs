// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Errors surfaced by the byte-level API.

use core::fmt;

/// The 64 input bytes did not encode a point on the curve.
///
/// Returned by [`crate::scalar_mult`] (and by
/// [`crate::weierstrass::ProjectivePoint::from_bytes`] via its validity
/// flag) when the coordinate pair fails the curve equation and is not the
/// all-zero identity encoding.  Rejection happens before any
/// scalar-dependent work.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidPointBytes;

impl fmt::Display for InvalidPointBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point bytes do not satisfy the curve equation")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPointBytes {}
