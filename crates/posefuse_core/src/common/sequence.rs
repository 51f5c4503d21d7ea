//! Sequence containers for the two skeleton layouts.

use super::skeleton::{NUM_CANONICAL_JOINTS, NUM_COORDS, NUM_SOURCE_JOINTS};
use crate::error::{FuseError, Result};
use ndarray as nd;

/// A motion clip on the canonical 22-joint skeleton.
///
/// Invariant: shape is `(frames, 22, 3)` with `frames >= 1`, enforced
/// at construction. Never ragged, never mutated after creation; every
/// transform produces a new sequence.
#[derive(Clone, Debug)]
pub struct PoseSequence {
    pub(crate) positions: nd::Array3<f64>,
}

impl PoseSequence {
    pub fn new(positions: nd::Array3<f64>) -> Result<Self> {
        let (frames, joints, coords) = positions.dim();
        if (joints, coords) != (NUM_CANONICAL_JOINTS, NUM_COORDS) {
            return Err(FuseError::ShapeMismatch {
                expected: vec![NUM_CANONICAL_JOINTS, NUM_COORDS],
                got: vec![joints, coords],
            });
        }
        if frames == 0 {
            return Err(FuseError::EmptySequence);
        }
        Ok(Self { positions })
    }

    pub fn num_frames(&self) -> usize {
        self.positions.dim().0
    }

    /// Joint positions for one frame, shape `(22, 3)`.
    pub fn frame(&self, idx: usize) -> nd::ArrayView2<f64> {
        self.positions.index_axis(nd::Axis(0), idx)
    }

    pub fn positions(&self) -> &nd::Array3<f64> {
        &self.positions
    }

    pub fn into_positions(self) -> nd::Array3<f64> {
        self.positions
    }
}

/// Raw 17-joint output of a 3D pose estimator, Human3.6M index order.
///
/// Exists only as input to the topology mapper; it is remapped onto the
/// canonical skeleton immediately and never persisted as canonical
/// data.
#[derive(Clone, Debug)]
pub struct RawSkeletonSequence {
    pub(crate) joints: nd::Array3<f64>,
}

impl RawSkeletonSequence {
    pub fn new(joints: nd::Array3<f64>) -> Result<Self> {
        let (frames, num_joints, coords) = joints.dim();
        if (num_joints, coords) != (NUM_SOURCE_JOINTS, NUM_COORDS) {
            return Err(FuseError::ShapeMismatch {
                expected: vec![NUM_SOURCE_JOINTS, NUM_COORDS],
                got: vec![num_joints, coords],
            });
        }
        if frames == 0 {
            return Err(FuseError::EmptySequence);
        }
        Ok(Self { joints })
    }

    pub fn num_frames(&self) -> usize {
        self.joints.dim().0
    }

    pub fn joints(&self) -> &nd::Array3<f64> {
        &self.joints
    }
}
