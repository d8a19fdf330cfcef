// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Constant-time scalar multiplication on Curve13318.
//!
//! Curve13318 is the prime-order short Weierstrass curve
//!
//! ```text
//! E : y² = x³ - 3x + 13318  over  GF(2²⁵⁵ - 19),
//! ```
//!
//! intended as a building block for higher-level key-agreement and
//! signature protocols.  This crate implements the numeric core only:
//!
//! * field arithmetic in radix 2^25.5 with deferred carry propagation,
//!   plus a 5-limb radix-2^51 multiplication kernel;
//! * complete (exception-free) projective point addition and doubling;
//! * point encoding/decoding with on-curve validation;
//! * fixed-window scalar multiplication backed by an oblivious table
//!   lookup, with a 4-way lane-batched variant of the field layer.
//!
//! All operations on secret data run in constant time: no secret-dependent
//! branches, no secret-dependent table indexing.
//!
//! The byte-level entry point is [`scalar_mult`]:
//!
//! ```
//! use curve13318::scalar_mult;
//!
//! let k = [0u8; 32];           // the scalar, little-endian
//! let p = [0u8; 64];           // x ‖ y, little-endian; all zero = identity
//! let q = scalar_mult(&k, &p).unwrap();
//! assert_eq!(q, [0u8; 64]);    // 0 · identity = identity
//! ```
//!
//! Key generation, randomness, and any protocol built on top of the group
//! operation are deliberately out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(non_snake_case)]

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

// Group operations on the short Weierstrass form of the curve
pub mod weierstrass;

// The scalar input to the multiplication
pub mod scalar;

// External (and internal) traits.
pub mod traits;

// Error types surfaced by the byte-level API
pub mod errors;

// Finite field arithmetic mod p = 2^255 - 19
pub mod field;

// Arithmetic backends (radix-2^51 kernel, lane-batched vectors) live here
pub(crate) mod backend;

// Constant-time lookup tables for windowed scalar multiplication
pub(crate) mod window;

// The fixed-window scalar multiplication driver
pub(crate) mod scalar_mul;

pub use crate::scalar_mul::scalar_mult;
