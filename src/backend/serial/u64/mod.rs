// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! The radix-2^51 field kernel, using 64-bit limbs with 128-bit products.

pub(crate) mod field;
