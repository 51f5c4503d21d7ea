//! Whole-array persistence for pose sequences.
//!
//! The engine's only on-disk formats: a `.npy` file holding one
//! `(frames, 22, 3)` array, and a `.npz` container whose named field
//! holds the estimator's `(frames, 17, 3)` output. Arrays are read and
//! written whole; there is no streaming and no partial read.

use crate::common::sequence::{PoseSequence, RawSkeletonSequence};
use crate::error::Result;
use crate::pipeline::BlendSet;
use log::debug;
use ndarray as nd;
use ndarray_npy::{NpzReader, ReadNpyExt, WriteNpyExt};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

/// Field name under which the pose estimator stores its 17-joint track.
pub const DEFAULT_RAW_FIELD: &str = "reconstruction";

/// File stem shared by all blend artifacts; the weight-pair tag is
/// appended per output.
pub const DEFAULT_BLEND_STEM: &str = "_euclidean_distances";

/// Reads a raw estimator sequence from a `.npz` container by field
/// name. Every other field in the container is ignored.
pub fn load_raw_npz(path: impl AsRef<Path>, field: &str) -> Result<RawSkeletonSequence> {
    let mut npz = NpzReader::new(File::open(path.as_ref())?)?;
    debug!("npz fields: {:?}", npz.names()?);
    let joints: nd::Array3<f64> = npz.by_name(field)?;
    RawSkeletonSequence::new(joints)
}

/// Reads a canonical sequence from a whole-array `.npy` file.
pub fn load_sequence_npy(path: impl AsRef<Path>) -> Result<PoseSequence> {
    let positions = nd::Array3::<f64>::read_npy(File::open(path.as_ref())?)?;
    PoseSequence::new(positions)
}

/// Writes a canonical sequence as a whole-array `.npy` file.
pub fn save_sequence_npy(seq: &PoseSequence, path: impl AsRef<Path>) -> Result<()> {
    seq.positions().write_npy(File::create(path.as_ref())?)?;
    Ok(())
}

/// Writes one `.npy` per blend in the set, named
/// `{stem}_wA{a}_wB{b}.npy` so a downstream caller can retrieve a
/// specific blend by its weight pair. Returns the written paths in
/// sweep order.
pub fn save_blend_set(set: &BlendSet, dir: impl AsRef<Path>, stem: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(set.len());
    for (pair, seq) in set.iter() {
        let path = dir.as_ref().join(format!("{stem}_{}.npy", pair.tag()));
        save_sequence_npy(seq, &path)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::WeightPair;
    use crate::common::types::SourceKind;
    use crate::pipeline::{fuse, FusionConfig, FusionInput, InputData};
    use ndarray as nd;
    use ndarray_npy::NpzWriter;
    use pretty_assertions::assert_eq;

    fn varied_positions(frames: usize) -> nd::Array3<f64> {
        let mut arr = nd::Array3::<f64>::zeros((frames, 22, 3));
        for t in 0..frames {
            for j in 0..22 {
                for c in 0..3 {
                    arr[[t, j, c]] = t as f64 + 0.1 * j as f64 + 0.01 * c as f64;
                }
            }
        }
        arr
    }

    #[test]
    fn npy_round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sequence.npy");
        let seq = PoseSequence::new(varied_positions(7)).unwrap();
        save_sequence_npy(&seq, &path).unwrap();
        let loaded = load_sequence_npy(&path).unwrap();
        assert_eq!(loaded.positions(), seq.positions());
    }

    #[test]
    fn npz_field_is_read_and_others_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimator.npz");
        let joints = nd::Array3::<f64>::ones((5, 17, 3));
        let mut npz = NpzWriter::new(File::create(&path).unwrap());
        npz.add_array(DEFAULT_RAW_FIELD, &joints).unwrap();
        npz.add_array("metadata", &nd::Array1::<f64>::zeros(4)).unwrap();
        npz.finish().unwrap();

        let raw = load_raw_npz(&path, DEFAULT_RAW_FIELD).unwrap();
        assert_eq!(raw.joints().dim(), (5, 17, 3));
        assert_eq!(raw.joints()[[0, 0, 0]], 1.0);
    }

    #[test]
    fn blend_set_files_carry_the_pair_tag() {
        let dir = tempfile::tempdir().unwrap();
        let first = FusionInput::new(
            SourceKind::Real,
            InputData::Canonical(PoseSequence::new(varied_positions(4)).unwrap()),
        );
        let second = FusionInput::new(
            SourceKind::Real,
            InputData::Canonical(PoseSequence::new(varied_positions(6)).unwrap()),
        );
        let config = FusionConfig {
            alpha: 0.5,
            sweep: vec![WeightPair::new(0.3, 0.7)],
        };
        let set = fuse(first, second, &config).unwrap();
        let paths = save_blend_set(&set, dir.path(), DEFAULT_BLEND_STEM).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("_euclidean_distances_wA0.3_wB0.7.npy"));
        let reloaded = load_sequence_npy(&paths[0]).unwrap();
        assert_eq!(reloaded.num_frames(), 6);
    }
}
