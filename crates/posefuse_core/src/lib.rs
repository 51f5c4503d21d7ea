//! Fusion engine for time-varying 3D skeletal pose sequences.
//!
//! Two pose sequences with different joint topologies, frame counts and
//! spatial frames of reference are reconciled onto a canonical 22-joint
//! skeleton and blended at a sweep of mixing ratios:
//!
//! - [`conversions::topology`] maps a 17-joint Human3.6M skeleton onto
//!   the canonical skeleton.
//! - [`conversions::normalize`] recenters and flips a sequence produced
//!   in the synthetic-motion coordinate convention.
//! - [`conversions::resample`] matches the frame counts of the two
//!   sequences with per-joint linear interpolation.
//! - [`blend`] computes one weighted geometric blend per weight pair.
//! - [`pipeline`] orders these steps and runs the weight sweep.
//!
//! All numeric work is pure and in-memory; the only I/O surface is the
//! whole-array `.npy`/`.npz` codec in [`codec`].

pub mod blend;
pub mod codec;
pub mod common;
pub mod conversions;
pub mod error;
pub mod pipeline;
