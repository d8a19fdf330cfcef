// -*- mode: rust; -*-
//
// This file is part of curve13318.
// See LICENSE for licensing information.

//! The 4-way lane-batched backend.
//!
//! Four field elements are packed limb-interleaved into one 40-limb
//! buffer and processed in lockstep, trading instruction-level for
//! data-level parallelism.  The batched group operations process four
//! independent point additions or doublings at once.

pub(crate) mod field;
pub(crate) mod weierstrass;
