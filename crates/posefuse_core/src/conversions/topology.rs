use crate::common::{
    sequence::{PoseSequence, RawSkeletonSequence},
    skeleton::{
        H36M_TO_CANONICAL, L_ANKLE, L_FOOT, NECK, NUM_CANONICAL_JOINTS, NUM_COORDS, R_ANKLE,
        R_FOOT, SPINE1, SPINE2, SPINE3,
    },
};
use log::debug;
use ndarray as nd;
use ndarray::s;

/// Remaps a 17-joint Human3.6M skeleton onto the canonical 22-joint
/// skeleton. This is needed because the estimator and the blender use
/// different joint schemas; the correspondence is a fixed index table
/// plus two derived spine joints and two duplicated foot joints.
pub struct TopologyMap;

impl TopologyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn remap(&self, raw: &RawSkeletonSequence) -> PoseSequence {
        let src = raw.joints();
        let frames = src.dim().0;
        debug!("remapping {frames} frames from 17-joint H36M onto the canonical skeleton");
        let mut out = nd::Array3::<f64>::zeros((frames, NUM_CANONICAL_JOINTS, NUM_COORDS));

        for (canonical, source) in H36M_TO_CANONICAL {
            let column = src.slice(s![.., source, ..]);
            out.slice_mut(s![.., canonical, ..]).assign(&column);
        }

        // Spine2 is the midpoint of Spine1 and the direct-mapped Spine3.
        let mut spine2 = out.slice(s![.., SPINE1, ..]).to_owned();
        spine2 += &out.slice(s![.., SPINE3, ..]);
        spine2 /= 2.0;
        out.slice_mut(s![.., SPINE2, ..]).assign(&spine2);

        // Spine3 is the midpoint of the *updated* Spine2 and the neck;
        // it must be computed after the Spine2 write, not from the
        // direct-mapped copy.
        let mut spine3 = spine2;
        spine3 += &out.slice(s![.., NECK, ..]);
        spine3 /= 2.0;
        out.slice_mut(s![.., SPINE3, ..]).assign(&spine3);

        // The feet ride with their ankles: a copy, not an interpolation.
        let left = out.slice(s![.., L_ANKLE, ..]).to_owned();
        out.slice_mut(s![.., L_FOOT, ..]).assign(&left);
        let right = out.slice(s![.., R_ANKLE, ..]).to_owned();
        out.slice_mut(s![.., R_FOOT, ..]).assign(&right);

        PoseSequence { positions: out }
    }
}

impl Default for TopologyMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::skeleton::NUM_SOURCE_JOINTS;
    use ndarray as nd;

    fn raw_ramp(frames: usize) -> RawSkeletonSequence {
        // joint j of frame t sits at (t + j, 2t, -j), distinct everywhere
        let mut arr = nd::Array3::<f64>::zeros((frames, NUM_SOURCE_JOINTS, 3));
        for t in 0..frames {
            for j in 0..NUM_SOURCE_JOINTS {
                arr[[t, j, 0]] = (t + j) as f64;
                arr[[t, j, 1]] = (2 * t) as f64;
                arr[[t, j, 2]] = -(j as f64);
            }
        }
        RawSkeletonSequence::new(arr).unwrap()
    }

    #[test]
    fn output_has_canonical_shape() {
        let mapped = TopologyMap::new().remap(&raw_ramp(6));
        assert_eq!(mapped.positions().dim(), (6, 22, 3));
    }

    #[test]
    fn direct_copies_follow_the_table() {
        let raw = raw_ramp(3);
        let mapped = TopologyMap::new().remap(&raw);
        // Slots recomputed (6, 9) or filled later (10, 11) are covered
        // by the dedicated tests below.
        for (canonical, source) in H36M_TO_CANONICAL {
            if canonical == SPINE2 || canonical == SPINE3 {
                continue;
            }
            for t in 0..3 {
                for c in 0..3 {
                    assert_eq!(
                        mapped.positions()[[t, canonical, c]],
                        raw.joints()[[t, source, c]],
                        "canonical {canonical} should copy source {source}"
                    );
                }
            }
        }
    }

    #[test]
    fn spine_recomputation_is_two_step_and_order_dependent() {
        let raw = raw_ramp(4);
        let mapped = TopologyMap::new().remap(&raw);
        for t in 0..4 {
            for c in 0..3 {
                // Direct-mapped values before recomputation.
                let spine1 = raw.joints()[[t, 7, c]];
                let spine3_copy = raw.joints()[[t, 8, c]];
                let neck = raw.joints()[[t, 8, c]];
                let expected_spine2 = (spine1 + spine3_copy) / 2.0;
                let expected_spine3 = (expected_spine2 + neck) / 2.0;
                assert_eq!(mapped.positions()[[t, SPINE2, c]], expected_spine2);
                assert_eq!(mapped.positions()[[t, SPINE3, c]], expected_spine3);
            }
        }
    }

    #[test]
    fn feet_duplicate_ankles() {
        let raw = raw_ramp(2);
        let mapped = TopologyMap::new().remap(&raw);
        for t in 0..2 {
            for c in 0..3 {
                assert_eq!(
                    mapped.positions()[[t, L_FOOT, c]],
                    mapped.positions()[[t, L_ANKLE, c]]
                );
                assert_eq!(
                    mapped.positions()[[t, R_FOOT, c]],
                    mapped.positions()[[t, R_ANKLE, c]]
                );
            }
        }
    }
}
