//! Numeric helpers shared by the posefuse crates.

pub mod numerical;
