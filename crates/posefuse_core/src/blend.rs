//! Weighted geometric blending of two length-matched pose sequences.

use crate::common::sequence::PoseSequence;
use crate::error::{FuseError, Result};
use nalgebra as na;
use ndarray as nd;

/// Mixing ratio `(w_a, w_b)` for one blended output. The weights govern
/// the contribution of the reference sequence vs. the partner sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightPair {
    pub w_a: f64,
    pub w_b: f64,
}

impl WeightPair {
    pub fn new(w_a: f64, w_b: f64) -> Self {
        Self { w_a, w_b }
    }

    /// Lookup key: both weights rounded to two decimals in fixed point,
    /// so `get(0.3, 0.7)` matches the stored pair exactly.
    pub(crate) fn key(&self) -> (i64, i64) {
        (
            (self.w_a * 100.0).round() as i64,
            (self.w_b * 100.0).round() as i64,
        )
    }

    /// File-stem tag, e.g. `wA0.3_wB0.7`.
    pub fn tag(&self) -> String {
        format!("wA{}_wB{}", self.w_a, self.w_b)
    }
}

/// The fixed nine-pair sweep. This is a literal table on purpose:
/// regenerating it from a step size would silently change behaviour the
/// moment someone "cleans up" the range logic.
pub const DEFAULT_WEIGHT_SWEEP: [WeightPair; 9] = [
    WeightPair { w_a: 0.1, w_b: 0.9 },
    WeightPair { w_a: 0.2, w_b: 0.8 },
    WeightPair { w_a: 0.3, w_b: 0.7 },
    WeightPair { w_a: 0.4, w_b: 0.6 },
    WeightPair { w_a: 0.5, w_b: 0.5 },
    WeightPair { w_a: 0.6, w_b: 0.4 },
    WeightPair { w_a: 0.7, w_b: 0.3 },
    WeightPair { w_a: 0.8, w_b: 0.2 },
    WeightPair { w_a: 0.9, w_b: 0.1 },
];

/// Computes one blended sequence from two length- and topology-matched
/// sequences.
///
/// Per frame and per joint: `D = w_a*P_r - w_b*P_s`, `d = |D|`,
/// `u = D/d` (zero when `d` is zero), `P_opt = P_r + alpha*d*u`. When
/// `d != 0` the product `d*u` collapses back to `D`; the guard exists
/// solely so a zero distance yields no displacement instead of a
/// division by zero, and the zero-distance joint stays exactly on the
/// reference.
pub fn blend(
    reference: &PoseSequence,
    partner: &PoseSequence,
    alpha: f64,
    weights: WeightPair,
) -> Result<PoseSequence> {
    let p_r = reference.positions();
    let p_s = partner.positions();
    if p_r.dim() != p_s.dim() {
        return Err(FuseError::ShapeMismatch {
            expected: p_r.shape().to_vec(),
            got: p_s.shape().to_vec(),
        });
    }

    let (frames, joints, _) = p_r.dim();
    let mut out = nd::Array3::<f64>::zeros(p_r.raw_dim());
    for t in 0..frames {
        for j in 0..joints {
            let reference_joint = na::Vector3::new(p_r[[t, j, 0]], p_r[[t, j, 1]], p_r[[t, j, 2]]);
            let partner_joint = na::Vector3::new(p_s[[t, j, 0]], p_s[[t, j, 1]], p_s[[t, j, 2]]);
            let difference = weights.w_a * reference_joint - weights.w_b * partner_joint;
            let distance = difference.norm();
            let direction = if distance == 0.0 {
                na::Vector3::zeros()
            } else {
                difference / distance
            };
            let optimal = reference_joint + alpha * distance * direction;
            out[[t, j, 0]] = optimal.x;
            out[[t, j, 1]] = optimal.y;
            out[[t, j, 2]] = optimal.z;
        }
    }
    Ok(PoseSequence { positions: out })
}
