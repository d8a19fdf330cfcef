// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Group operations on E : y² = x³ - 3x + 13318 over GF(2^255 - 19).
//!
//! Points are kept in projective coordinates (X : Y : Z), affine
//! (X/Z, Y/Z) when Z ≠ 0 and the group identity when Z = 0, with
//! canonical representative (0 : 1 : 0).
//!
//! Addition and doubling use the complete formulas of Renes, Costello and
//! Batina for a = -3 short Weierstrass curves: a single instruction
//! sequence covers P = Q, P = -Q, and either operand being the identity,
//! with no case analysis.  Completeness is what makes the fixed-window
//! multiplication in `scalar_mul` safe to run on secret scalars.
//!
//! The formulas are scheduled at the limb level around the unsigned
//! subtraction discipline of `field`: a multiple of p in limb form is
//! added before every subtraction (2p when the subtrahend is a single
//! carried element, 4p when it is a sum of two), and carries are placed
//! where limbs would otherwise outgrow the multiplication precondition.

use core::ops::Add;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::field::FieldElement51;
use crate::field::FieldElement;
use crate::traits::{Identity, ValidityCheck};

/// A point on Curve13318 in projective coordinates.
#[derive(Copy, Clone)]
pub struct ProjectivePoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

impl core::fmt::Debug for ProjectivePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProjectivePoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?}\n}}",
            &self.X, &self.Y, &self.Z
        )
    }
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ZERO,
        }
    }
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::identity()
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(
        a: &ProjectivePoint,
        b: &ProjectivePoint,
        choice: Choice,
    ) -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    /// Test equality of the represented group elements (not of the
    /// projective representatives) by comparing encodings.
    fn ct_eq(&self, other: &ProjectivePoint) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for ProjectivePoint {}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y.zeroize();
        self.Z.zeroize();
    }
}

impl ValidityCheck for ProjectivePoint {
    /// Check Y²Z = X³ - 3XZ² + b·Z³ (trivially true for Z = 0
    /// representatives of the identity).
    fn is_valid(&self) -> bool {
        let lhs = &self.Y.square() * &self.Z;
        let x_cubed = &self.X.square() * &self.X;
        let z_squared = self.Z.square();
        let bz_cubed = (&z_squared * &self.Z).mul_b();
        let xz2 = &self.X * &z_squared;
        let three_xz2 = (&(&xz2 + &xz2) + &xz2).carry();
        let rhs = (&(&x_cubed + &bz_cubed).add2p() - &three_xz2).carry();
        lhs.ct_eq(&rhs).into()
    }
}

impl ProjectivePoint {
    /// Decode a point from its 64-byte affine encoding x ‖ y
    /// (little-endian coordinates).
    ///
    /// The all-zero encoding decodes to the identity with the validity
    /// flag set.  Any other input is embedded as (x : y : 1) and the flag
    /// reports whether the coordinates satisfy the curve equation; on
    /// failure the embedding is still returned, never silently dropped.
    pub fn from_bytes(bytes: &[u8; 64]) -> (ProjectivePoint, Choice) {
        let mut x_bytes = [0u8; 32];
        let mut y_bytes = [0u8; 32];
        x_bytes.copy_from_slice(&bytes[..32]);
        y_bytes.copy_from_slice(&bytes[32..]);

        let x = FieldElement::from_bytes(&x_bytes);
        let y = FieldElement::from_bytes(&y_bytes);
        let point = ProjectivePoint {
            X: x,
            Y: y,
            Z: FieldElement::ONE,
        };

        // y² == x³ - 3x + b ?
        let y_squared = y.square();
        let x_cubed = &x.square() * &x;
        let three_x = (&(&x + &x) + &x).carry();
        let mut rhs = (&x_cubed.add4p() - &three_x).carry();
        rhs.0[0] += crate::field::B;
        let on_curve = y_squared.ct_eq(&rhs);

        // (0, 0) is not a solution of the curve equation, so the all-zero
        // encoding is free to serve as the identity sentinel.
        let is_identity_encoding = bytes[..].ct_eq(&[0u8; 64][..]);

        let point = ProjectivePoint::conditional_select(
            &point,
            &ProjectivePoint::identity(),
            is_identity_encoding,
        );

        (point, on_curve | is_identity_encoding)
    }

    /// Encode this point to its 64-byte affine encoding.
    ///
    /// One inversion of Z through the radix-2^51 kernel and two
    /// multiplications.  Any representative with Z = 0 encodes to 64 zero
    /// bytes without a branch, because the inverse of zero is zero.
    pub fn to_bytes(&self) -> [u8; 64] {
        let x = FieldElement51::from_field_element(&self.X);
        let y = FieldElement51::from_field_element(&self.Y);
        let z = FieldElement51::from_field_element(&self.Z);

        let z_inverse = z.invert();
        let x_affine = x.mul(&z_inverse);
        let y_affine = y.mul(&z_inverse);

        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&x_affine.to_bytes());
        bytes[32..].copy_from_slice(&y_affine.to_bytes());
        bytes
    }

    /// Compute 2P by the complete doubling formulas.
    ///
    /// Inputs must be carried; outputs are carried.
    pub fn double(&self) -> ProjectivePoint {
        let x = &self.X;
        let y = &self.Y;
        let z = &self.Z;

        let mut t0 = x.square();
        let t1 = y.square();
        let t2 = z.square();
        let mut t3 = x * y;
        t3 = &t3 + &t3;
        let mut z3 = x * z;
        z3 = &z3 + &z3;
        let mut y3 = t2.mul_b();
        y3 = (&y3.add4p() - &z3).carry();
        let mut x3 = &y3 + &y3;
        y3 = (&x3 + &y3).carry();
        x3 = (&t1.add2p() - &y3).carry();
        y3 = &t1 + &y3;
        y3 = &x3 * &y3;
        x3 = &x3 * &t3;
        t3 = &t2 + &t2;
        let t2 = (&t2 + &t3).carry();
        z3 = z3.mul_b();
        z3 = &z3.add2p() - &t2;
        z3 = (&z3.add2p() - &t0).carry();
        t3 = &z3 + &z3;
        z3 = (&z3 + &t3).carry();
        t3 = &t0 + &t0;
        t0 = &t3 + &t0;
        t0 = (&t0.add2p() - &t2).carry();
        t0 = &t0 * &z3;
        y3 = (&y3 + &t0).carry();
        t0 = y * z;
        t0 = &t0 + &t0;
        z3 = &t0 * &z3;
        x3 = (&x3.add2p() - &z3).carry();
        z3 = &t0 * &t1;
        z3 = &z3 + &z3;
        z3 = (&z3 + &z3).carry();

        ProjectivePoint { X: x3, Y: y3, Z: z3 }
    }

    /// Double four independent points in lockstep through the 4-way
    /// lane-batched field engine.
    ///
    /// Lane l of the result is `points[l].double()`; lanes never
    /// interact.  A caller interleaving four scalar multiplications
    /// populates and drains all four lanes itself.
    pub fn double_batch(points: &[ProjectivePoint; 4]) -> [ProjectivePoint; 4] {
        crate::backend::vector::weierstrass::double_batch(points)
    }

    /// Add four pairs of independent points in lockstep through the
    /// 4-way lane-batched field engine.
    ///
    /// Lane l of the result is `lhs[l] + rhs[l]`; lanes never interact.
    pub fn add_batch(
        lhs: &[ProjectivePoint; 4],
        rhs: &[ProjectivePoint; 4],
    ) -> [ProjectivePoint; 4] {
        crate::backend::vector::weierstrass::add_batch(lhs, rhs)
    }
}

impl<'a, 'b> Add<&'b ProjectivePoint> for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    /// Compute P + Q by the complete addition formulas.
    ///
    /// Inputs must be carried; outputs are carried.
    fn add(self, other: &'b ProjectivePoint) -> ProjectivePoint {
        let x1 = &self.X;
        let y1 = &self.Y;
        let z1 = &self.Z;
        let x2 = &other.X;
        let y2 = &other.Y;
        let z2 = &other.Z;

        let mut t0 = x1 * x2;
        let mut t1 = y1 * y2;
        let mut t2 = z1 * z2;
        let mut t3 = x1 + y1;
        let mut t4 = x2 + y2;
        t3 = &t3 * &t4;
        t4 = &t0 + &t1;
        t3 = &t3.add2p() - &t4;
        t4 = y1 + z1;
        let mut x3 = y2 + z2;
        t4 = &t4 * &x3;
        x3 = &t1 + &t2;
        t4 = &t4.add4p() - &x3;
        x3 = x1 + z1;
        let mut y3 = x2 + z2;
        x3 = &x3 * &y3;
        y3 = &t0 + &t2;
        y3 = &x3.add4p() - &y3;
        let mut z3 = t2.mul_b();
        x3 = &y3.add2p() - &z3;
        z3 = &x3 + &x3;
        x3 = (&x3 + &z3).carry();
        let t1_slack = t1.add2p();
        z3 = (&t1_slack - &x3).carry();
        t1 = t1_slack.carry();
        x3 = &t1 + &x3;
        y3 = y3.mul_b();
        t1 = &t2 + &t2;
        t2 = (&t1 + &t2).carry();
        y3 = &y3.add4p() - &t2;
        y3 = (&y3 - &t0).carry();
        t1 = &y3 + &y3;
        y3 = &t1 + &y3;
        t1 = &t0 + &t0;
        t0 = &t1 + &t0;
        t0 = &t0.add2p() - &t2;
        t1 = &t4 * &y3;
        t2 = &t0 * &y3;
        y3 = &x3 * &z3;
        y3 = &y3 + &t2;
        x3 = &x3 * &t3;
        x3 = (&x3.add2p() - &t1).carry();
        z3 = &z3 * &t4;
        t1 = &t3 * &t0;
        z3 = (&z3 + &t1).carry();

        ProjectivePoint {
            X: x3,
            Y: y3.carry(),
            Z: z3,
        }
    }
}

define_add_variants!(
    LHS = ProjectivePoint,
    RHS = ProjectivePoint,
    Output = ProjectivePoint
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::IsIdentity;

    /// The point (5, y) with even y.
    pub(crate) static P_BYTES: [u8; 64] = [
        0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xe2, 0x52, 0x91, 0x94, 0xab, 0x2c, 0x37, 0x47,
        0x4a, 0x92, 0xfe, 0x30, 0xfb, 0x34, 0xb3, 0x62,
        0xc9, 0x99, 0x96, 0xe9, 0x1a, 0xcf, 0xe9, 0xc7,
        0x0e, 0x59, 0x43, 0xd9, 0x26, 0x55, 0x8a, 0x19,
    ];

    /// The point (6, y) with even y.
    pub(crate) static Q_BYTES: [u8; 64] = [
        0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x6c, 0x21, 0xa5, 0xa7, 0xc9, 0xfc, 0x4e, 0xe6,
        0x0e, 0x3d, 0xea, 0x56, 0x2e, 0xcd, 0x7d, 0xac,
        0xce, 0xfc, 0xcc, 0xa0, 0xc9, 0x59, 0x5f, 0xe2,
        0x09, 0xb8, 0x3b, 0x85, 0xcf, 0x62, 0x97, 0x7e,
    ];

    /// P + Q, computed with an independent affine model.
    static P_PLUS_Q_BYTES: [u8; 64] = [
        0xb3, 0x88, 0x58, 0xb4, 0xaa, 0xd3, 0x35, 0x1d,
        0x99, 0x8b, 0x92, 0xdb, 0x63, 0x9b, 0x29, 0xbe,
        0x5e, 0x81, 0xd3, 0x6b, 0x74, 0xbb, 0x50, 0x9d,
        0x41, 0x7e, 0x9a, 0xb9, 0x1f, 0x30, 0x38, 0x5b,
        0xc0, 0xca, 0x02, 0x86, 0xd2, 0x5a, 0xc3, 0x3b,
        0xd6, 0xb3, 0xd8, 0x9d, 0xcf, 0xfd, 0xa8, 0x5c,
        0xa3, 0x81, 0x9f, 0xe3, 0xb9, 0x40, 0x0c, 0xc2,
        0xdb, 0xfd, 0xd6, 0xa7, 0xac, 0x90, 0x22, 0x47,
    ];

    /// 2P, computed with an independent affine model.
    static P_DOUBLED_BYTES: [u8; 64] = [
        0x6a, 0xa9, 0xc5, 0x60, 0x47, 0x38, 0x36, 0xcd,
        0xe1, 0xfb, 0x2d, 0x29, 0x34, 0x64, 0xf6, 0x15,
        0x60, 0x24, 0x3f, 0x94, 0x88, 0x35, 0xaa, 0xe8,
        0x59, 0xe9, 0x7c, 0xe2, 0x1e, 0x27, 0xcb, 0x78,
        0x43, 0xce, 0xe7, 0xec, 0x9e, 0xd9, 0x88, 0xf8,
        0x9f, 0x05, 0x03, 0x05, 0xe3, 0x30, 0xc6, 0x2e,
        0xf8, 0xd3, 0xcd, 0xff, 0x31, 0x7b, 0x9a, 0xe6,
        0xbb, 0xff, 0x87, 0x6b, 0xc5, 0xac, 0x0f, 0x4f,
    ];

    pub(crate) fn decode_valid(bytes: &[u8; 64]) -> ProjectivePoint {
        let (point, valid) = ProjectivePoint::from_bytes(bytes);
        assert!(bool::from(valid));
        point
    }

    #[test]
    fn decode_encode_roundtrip() {
        let p = decode_valid(&P_BYTES);
        assert!(p.is_valid());
        assert_eq!(P_BYTES, p.to_bytes());
    }

    #[test]
    fn decode_rejects_off_curve_point() {
        let mut bad = P_BYTES;
        bad[32] ^= 1;
        let (embedded, valid) = ProjectivePoint::from_bytes(&bad);
        assert!(!bool::from(valid));
        // The attempted embedding is still exposed.
        assert_eq!(bad[..32], embedded.X.to_bytes());
        assert_eq!(bad[32..], embedded.Y.to_bytes());
        assert_eq!(FieldElement::ONE, embedded.Z);
    }

    #[test]
    fn decode_all_zero_is_identity() {
        let (point, valid) = ProjectivePoint::from_bytes(&[0u8; 64]);
        assert!(bool::from(valid));
        assert!(point.is_identity());
        assert_eq!([0u8; 64], point.to_bytes());
    }

    #[test]
    fn add_matches_affine_model() {
        let p = decode_valid(&P_BYTES);
        let q = decode_valid(&Q_BYTES);
        let sum = &p + &q;
        assert!(sum.is_valid());
        assert_eq!(P_PLUS_Q_BYTES, sum.to_bytes());
        assert_eq!(P_PLUS_Q_BYTES, (&q + &p).to_bytes());
    }

    #[test]
    fn double_matches_affine_model() {
        let p = decode_valid(&P_BYTES);
        assert_eq!(P_DOUBLED_BYTES, p.double().to_bytes());
        // Complete formulas: adding a point to itself takes no special
        // path and must agree with doubling.
        assert_eq!(P_DOUBLED_BYTES, (&p + &p).to_bytes());
    }

    #[test]
    fn add_identity_is_noop() {
        let p = decode_valid(&P_BYTES);
        let id = ProjectivePoint::identity();
        assert_eq!(P_BYTES, (&p + &id).to_bytes());
        assert_eq!(P_BYTES, (&id + &p).to_bytes());
        assert!(id.double().is_identity());
        assert!((&id + &id).is_identity());
    }

    #[test]
    fn add_negation_is_identity() {
        let p = decode_valid(&P_BYTES);
        // -P = (x, p - y).
        let mut neg_bytes = P_BYTES;
        let minus_y = &(&FieldElement::ZERO.add2p() - &p.Y).carry();
        neg_bytes[32..].copy_from_slice(&minus_y.to_bytes());
        let neg_p = decode_valid(&neg_bytes);
        assert!((&p + &neg_p).is_identity());
    }

    #[test]
    fn encode_ignores_projective_representative() {
        // Scale (X : Y : Z) by an arbitrary nonzero factor; the encoding
        // must not change.
        let p = decode_valid(&P_BYTES);
        let lambda = FieldElement::from_bytes(&[42u8; 32]);
        let scaled = ProjectivePoint {
            X: &p.X * &lambda,
            Y: &p.Y * &lambda,
            Z: &p.Z * &lambda,
        };
        assert_eq!(P_BYTES, scaled.to_bytes());
    }

    #[test]
    fn conditional_select_points() {
        let p = decode_valid(&P_BYTES);
        let q = decode_valid(&Q_BYTES);
        let sel = ProjectivePoint::conditional_select(&p, &q, 1u8.into());
        assert_eq!(Q_BYTES, sel.to_bytes());
    }
}
