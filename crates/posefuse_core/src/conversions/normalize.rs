use crate::common::sequence::PoseSequence;
use log::debug;
use nalgebra as na;
use ndarray as nd;
use posefuse_utils::numerical::column_median;

/// Aligns a sequence produced in the synthetic-motion coordinate
/// convention with the real-estimator one: recenter on the first
/// frame's joint median, then rotate 180 degrees about the X axis.
///
/// Applied to exactly one of the two blend inputs (the synthetic one),
/// never to the other.
pub struct SpatialNormalizer {
    rotation: na::Matrix3<f64>,
}

impl SpatialNormalizer {
    pub fn new() -> Self {
        // 180 degrees about X written out as literal sign flips so the
        // transform stays exact instead of picking up sin(pi) noise.
        #[rustfmt::skip]
        let rotation = na::Matrix3::new(
            1.0,  0.0,  0.0,
            0.0, -1.0,  0.0,
            0.0,  0.0, -1.0,
        );
        Self { rotation }
    }

    /// Produces a new recentered and rotated sequence of the same
    /// shape. The reference point is the coordinate-wise median across
    /// the 22 joints of frame 0 only, subtracted from every frame.
    pub fn normalize(&self, seq: &PoseSequence) -> PoseSequence {
        let src = seq.positions();
        let (frames, joints, _) = src.dim();
        let reference = column_median(seq.frame(0));
        debug!(
            "normalizing {frames} frames around frame-0 median ({:.4}, {:.4}, {:.4})",
            reference[0], reference[1], reference[2]
        );

        let mut out = nd::Array3::<f64>::zeros(src.raw_dim());
        for t in 0..frames {
            for j in 0..joints {
                let centered = na::Vector3::new(
                    src[[t, j, 0]] - reference[0],
                    src[[t, j, 1]] - reference[1],
                    src[[t, j, 2]] - reference[2],
                );
                let rotated = self.rotation * centered;
                out[[t, j, 0]] = rotated.x;
                out[[t, j, 1]] = rotated.y;
                out[[t, j, 2]] = rotated.z;
            }
        }
        PoseSequence { positions: out }
    }
}

impl Default for SpatialNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
