// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! Serial arithmetic backends, using scalar (non-vectorized) integer ops.

pub(crate) mod u64;
