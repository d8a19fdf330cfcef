// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Randomized cross-checks of the byte-level API against an independent
//! arbitrary-precision model of the field and the curve.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use curve13318::scalar_mult;

/// p = 2^255 - 19
fn p() -> BigUint {
    (BigUint::one() << 255) - BigUint::from(19u32)
}

/// b = 13318
fn b() -> BigUint {
    BigUint::from(13318u32)
}

fn modp(x: &BigUint) -> BigUint {
    x % p()
}

fn inv(x: &BigUint) -> BigUint {
    // Fermat: x^(p-2) mod p; maps zero to zero like the implementation.
    x.modpow(&(p() - BigUint::from(2u32)), &p())
}

fn neg(x: &BigUint) -> BigUint {
    modp(&(p() - modp(x)))
}

fn sub(x: &BigUint, y: &BigUint) -> BigUint {
    modp(&(x + neg(y)))
}

/// Affine model points: `None` is the identity.
type ModelPoint = Option<(BigUint, BigUint)>;

fn model_on_curve(x: &BigUint, y: &BigUint) -> bool {
    let lhs = modp(&(y * y));
    let rhs = modp(&(x * x * x + b() + neg(&(x * BigUint::from(3u32)))));
    lhs == rhs
}

fn model_add(p1: &ModelPoint, p2: &ModelPoint) -> ModelPoint {
    let (x1, y1) = match p1 {
        None => return p2.clone(),
        Some(c) => c.clone(),
    };
    let (x2, y2) = match p2 {
        None => return p1.clone(),
        Some(c) => c.clone(),
    };
    let lambda = if x1 == x2 {
        if modp(&(&y1 + &y2)).is_zero() {
            return None;
        }
        // Tangent: (3x² - 3) / 2y
        let num = sub(&(BigUint::from(3u32) * &x1 * &x1), &BigUint::from(3u32));
        modp(&(num * inv(&modp(&(BigUint::from(2u32) * &y1)))))
    } else {
        modp(&(sub(&y2, &y1) * inv(&sub(&x2, &x1))))
    };
    let x3 = sub(&sub(&(&lambda * &lambda), &x1), &x2);
    let y3 = sub(&(&lambda * sub(&x1, &x3)), &y1);
    Some((x3, y3))
}

fn model_scalar_mul(k: &BigUint, point: &ModelPoint) -> ModelPoint {
    let mut acc: ModelPoint = None;
    let mut base = point.clone();
    for i in 0..k.bits() {
        if k.bit(i) {
            acc = model_add(&acc, &base);
        }
        base = model_add(&base, &base);
    }
    acc
}

fn le32(x: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = x.to_bytes_le();
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

fn encode_model(point: &ModelPoint) -> [u8; 64] {
    let mut out = [0u8; 64];
    if let Some((x, y)) = point {
        out[..32].copy_from_slice(&le32(x));
        out[32..].copy_from_slice(&le32(y));
    }
    out
}

/// Sample a random curve point by incrementing x until the right-hand
/// side is a square; p ≡ 5 (mod 8), so candidate roots come from the
/// (p+3)/8 exponent, fixed up by sqrt(-1) when needed.
fn random_model_point(rng: &mut StdRng) -> ModelPoint {
    let mut x = BigUint::from_bytes_le(&rng.gen::<[u8; 32]>()) % p();
    loop {
        let rhs = modp(&(&x * &x * &x + b() + neg(&(&x * BigUint::from(3u32)))));
        let mut y = rhs.modpow(&((p() + BigUint::from(3u32)) >> 3), &p());
        if modp(&(&y * &y)) != rhs {
            let sqrt_m1 =
                BigUint::from(2u32).modpow(&((p() - BigUint::one()) >> 2), &p());
            y = modp(&(y * sqrt_m1));
        }
        if modp(&(&y * &y)) == rhs {
            assert!(model_on_curve(&x, &y));
            return Some((x, y));
        }
        x = modp(&(x + BigUint::one()));
    }
}

#[test]
fn scalar_mult_matches_model_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x13318);

    for _ in 0..8 {
        let point = random_model_point(&mut rng);
        let point_bytes = encode_model(&point);

        let mut scalar_bytes: [u8; 32] = rng.gen();
        scalar_bytes[31] &= 0x7f;
        let k = BigUint::from_bytes_le(&scalar_bytes);

        let expected = encode_model(&model_scalar_mul(&k, &point));
        assert_eq!(Ok(expected), scalar_mult(&scalar_bytes, &point_bytes));
    }
}

#[test]
fn scalar_mult_edge_scalars_match_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let point = random_model_point(&mut rng);
    let point_bytes = encode_model(&point);

    for k in [0u64, 1, 2, 15, 16, 17, 255, 256] {
        let mut scalar_bytes = [0u8; 32];
        scalar_bytes[..8].copy_from_slice(&k.to_le_bytes());
        let expected = encode_model(&model_scalar_mul(&BigUint::from(k), &point));
        assert_eq!(
            Ok(expected),
            scalar_mult(&scalar_bytes, &point_bytes),
            "k = {}",
            k
        );
    }

    // All windows saturated.
    let all_ones = [0xffu8; 32];
    let expected = encode_model(&model_scalar_mul(
        &BigUint::from_bytes_le(&all_ones),
        &point,
    ));
    assert_eq!(Ok(expected), scalar_mult(&all_ones, &point_bytes));
}

#[test]
fn scalar_mult_rejects_random_off_curve_points() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..8 {
        let point = random_model_point(&mut rng);
        let mut bytes = encode_model(&point);
        // Perturb y: the result is (almost surely) off the curve.
        bytes[40] ^= 0x04;
        let (x, _) = point.unwrap();
        let y_perturbed = {
            let mut yb = [0u8; 32];
            yb.copy_from_slice(&bytes[32..]);
            BigUint::from_bytes_le(&yb)
        };
        if model_on_curve(&x, &y_perturbed) || y_perturbed >= p() {
            continue;
        }
        assert!(scalar_mult(&[3u8; 32], &bytes).is_err());
    }
}

#[test]
fn identity_input_yields_identity_for_any_scalar() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..4 {
        let scalar: [u8; 32] = rng.gen();
        assert_eq!(Ok([0u8; 64]), scalar_mult(&scalar, &[0u8; 64]));
    }
}
