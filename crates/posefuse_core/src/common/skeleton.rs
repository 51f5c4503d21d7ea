//! Skeleton layouts and the fixed correspondence between them.

/// Number of joints in the Human3.6M source schema.
pub const NUM_SOURCE_JOINTS: usize = 17;
/// Number of joints in the canonical blending skeleton.
pub const NUM_CANONICAL_JOINTS: usize = 22;
/// Coordinates per joint.
pub const NUM_COORDS: usize = 3;

/// Canonical joint indices referenced by the derivation steps.
pub const SPINE1: usize = 3;
pub const SPINE2: usize = 6;
pub const SPINE3: usize = 9;
pub const L_ANKLE: usize = 7;
pub const R_ANKLE: usize = 8;
pub const L_FOOT: usize = 10;
pub const R_FOOT: usize = 11;
pub const NECK: usize = 12;

/// Direct copy table, `(canonical slot, Human3.6M source index)`.
///
/// Each canonical slot appears at most once; one source index may feed
/// several canonical slots (the H36M neck seeds Spine2, Spine3 and the
/// canonical neck before the spine slots are recomputed). Slots 10 and
/// 11 are absent on purpose: the feet are copied from the ankles after
/// the spine derivation.
pub const H36M_TO_CANONICAL: [(usize, usize); 20] = [
    (0, 0),   // Pelvis
    (1, 4),   // L_Hip
    (2, 1),   // R_Hip
    (3, 7),   // Spine1
    (4, 5),   // L_Knee
    (5, 2),   // R_Knee
    (6, 8),   // Spine2, recomputed afterwards
    (7, 6),   // L_Ankle
    (8, 3),   // R_Ankle
    (9, 8),   // Spine3, recomputed afterwards
    (12, 8),  // Neck
    (13, 11), // L_Collar
    (14, 14), // R_Collar
    (15, 10), // Head
    (16, 11), // L_Shoulder
    (17, 14), // R_Shoulder
    (18, 12), // L_Elbow
    (19, 15), // R_Elbow
    (20, 13), // L_Wrist
    (21, 16), // R_Wrist
];

/// Canonical joint names, index order significant.
pub const JOINT_NAMES: [&str; NUM_CANONICAL_JOINTS] = [
    "Pelvis",
    "L_Hip",
    "R_Hip",
    "Spine1",
    "L_Knee",
    "R_Knee",
    "Spine2",
    "L_Ankle",
    "R_Ankle",
    "Spine3",
    "L_Foot",
    "R_Foot",
    "Neck",
    "L_Collar",
    "R_Collar",
    "Head",
    "L_Shoulder",
    "R_Shoulder",
    "L_Elbow",
    "R_Elbow",
    "L_Wrist",
    "R_Wrist",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derivation_constants_name_the_joints_they_claim() {
        assert_eq!(JOINT_NAMES[SPINE1], "Spine1");
        assert_eq!(JOINT_NAMES[SPINE2], "Spine2");
        assert_eq!(JOINT_NAMES[SPINE3], "Spine3");
        assert_eq!(JOINT_NAMES[NECK], "Neck");
        assert_eq!(JOINT_NAMES[L_ANKLE], "L_Ankle");
        assert_eq!(JOINT_NAMES[R_ANKLE], "R_Ankle");
        assert_eq!(JOINT_NAMES[L_FOOT], "L_Foot");
        assert_eq!(JOINT_NAMES[R_FOOT], "R_Foot");
    }

    #[test]
    fn copy_table_covers_every_canonical_slot_except_the_feet() {
        let mut written = [false; NUM_CANONICAL_JOINTS];
        for (canonical, source) in H36M_TO_CANONICAL {
            assert!(canonical < NUM_CANONICAL_JOINTS);
            assert!(source < NUM_SOURCE_JOINTS);
            assert!(!written[canonical], "canonical slot {canonical} written twice");
            written[canonical] = true;
        }
        for (idx, was_written) in written.iter().enumerate() {
            if idx == L_FOOT || idx == R_FOOT {
                assert!(!was_written, "{} should come from its ankle", JOINT_NAMES[idx]);
            } else {
                assert!(was_written, "{} missing from the copy table", JOINT_NAMES[idx]);
            }
        }
    }
}
