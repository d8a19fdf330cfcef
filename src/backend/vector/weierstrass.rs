// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Batched group operations: four independent point additions or
//! doublings in lockstep.
//!
//! These run the same complete-formula schedules as the serial
//! `weierstrass` operations, but with every field operation lane-batched
//! through `FieldElement2625x4`, so one pass through the formula advances
//! four unrelated points at once.  A caller interleaving four scalar
//! multiplications populates and drains the four lanes itself.
//!
//! Where an operand still holds subtraction slack on entry to a dependent
//! multiply, the two-stage `carry2` flushes it; everything else follows
//! the serial schedule, so each lane's output encodes identically to the
//! serial result.

use crate::backend::vector::field::FieldElement2625x4;
use crate::weierstrass::ProjectivePoint;

struct BatchedCoordinates {
    x: FieldElement2625x4,
    y: FieldElement2625x4,
    z: FieldElement2625x4,
}

fn pack(points: &[ProjectivePoint; 4]) -> BatchedCoordinates {
    BatchedCoordinates {
        x: FieldElement2625x4::new(&points[0].X, &points[1].X, &points[2].X, &points[3].X),
        y: FieldElement2625x4::new(&points[0].Y, &points[1].Y, &points[2].Y, &points[3].Y),
        z: FieldElement2625x4::new(&points[0].Z, &points[1].Z, &points[2].Z, &points[3].Z),
    }
}

fn unpack(
    x: &FieldElement2625x4,
    y: &FieldElement2625x4,
    z: &FieldElement2625x4,
) -> [ProjectivePoint; 4] {
    let xs = x.split();
    let ys = y.split();
    let zs = z.split();
    core::array::from_fn(|l| ProjectivePoint {
        X: xs[l],
        Y: ys[l],
        Z: zs[l],
    })
}

/// Double four points at once by the complete doubling formulas.
pub(crate) fn double_batch(points: &[ProjectivePoint; 4]) -> [ProjectivePoint; 4] {
    let p = pack(points);
    let (x, y, z) = (&p.x, &p.y, &p.z);

    let mut t0 = x.square();
    let t1 = y.square();
    let t2 = z.square();
    let mut t3 = x.mul(y);
    t3 = &t3 + &t3;
    let mut z3 = x.mul(z);
    z3 = &z3 + &z3;
    let mut y3 = t2.mul_b();
    y3 = (&y3.add4p() - &z3).carry();
    let mut x3 = &y3 + &y3;
    y3 = (&x3 + &y3).carry();
    x3 = (&t1.add2p() - &y3).carry();
    y3 = &t1 + &y3;
    y3 = x3.mul(&y3);
    x3 = x3.mul(&t3);
    t3 = &t2 + &t2;
    let t2 = (&t2 + &t3).carry();
    z3 = z3.mul_b();
    z3 = &z3.add2p() - &t2;
    z3 = (&z3.add2p() - &t0).carry();
    t3 = &z3 + &z3;
    z3 = (&z3 + &t3).carry();
    t3 = &t0 + &t0;
    t0 = &t3 + &t0;
    t0 = (&t0.add2p() - &t2).carry2();
    t0 = t0.mul(&z3);
    y3 = (&y3 + &t0).carry();
    t0 = y.mul(z);
    t0 = &t0 + &t0;
    z3 = t0.mul(&z3);
    x3 = (&x3.add2p() - &z3).carry();
    z3 = t0.mul(&t1);
    z3 = &z3 + &z3;
    z3 = (&z3 + &z3).carry();

    unpack(&x3, &y3, &z3)
}

/// Add four pairs of points at once by the complete addition formulas.
pub(crate) fn add_batch(
    lhs: &[ProjectivePoint; 4],
    rhs: &[ProjectivePoint; 4],
) -> [ProjectivePoint; 4] {
    let p1 = pack(lhs);
    let p2 = pack(rhs);
    let (x1, y1, z1) = (&p1.x, &p1.y, &p1.z);
    let (x2, y2, z2) = (&p2.x, &p2.y, &p2.z);

    let mut t0 = x1.mul(x2);
    let mut t1 = y1.mul(y2);
    let mut t2 = z1.mul(z2);
    let mut t3 = x1 + y1;
    let mut t4 = x2 + y2;
    t3 = t3.mul(&t4);
    t4 = &t0 + &t1;
    t3 = (&t3.add2p() - &t4).carry2();
    t4 = y1 + z1;
    let mut x3 = y2 + z2;
    t4 = t4.mul(&x3);
    x3 = &t1 + &t2;
    t4 = (&t4.add4p() - &x3).carry2();
    x3 = x1 + z1;
    let mut y3 = x2 + z2;
    x3 = x3.mul(&y3);
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
    t0 = (&t0.add2p() - &t2).carry2();
    t1 = t4.mul(&y3);
    t2 = t0.mul(&y3);
    y3 = x3.mul(&z3);
    y3 = &y3 + &t2;
    x3 = x3.mul(&t3);
    x3 = (&x3.add2p() - &t1).carry();
    z3 = z3.mul(&t4);
    t1 = t3.mul(&t0);
    z3 = (&z3 + &t1).carry();

    unpack(&x3, &y3.carry(), &z3)
}
