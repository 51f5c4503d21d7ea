use crate::common::sequence::PoseSequence;
use crate::error::{FuseError, Result};
use log::debug;
use ndarray as nd;
use ndarray::s;
use posefuse_utils::numerical::interp_linear;

/// Resamples a sequence to `target_frames` samples.
///
/// The query timeline is `target_frames` evenly spaced points over the
/// closed interval `[0, T-1]`, so resampling to the original length is
/// the identity and the first/last output frames always coincide with
/// the first/last input frames. Each (joint, axis) track is
/// interpolated independently, exactly how the frame-count matching is
/// defined; a single-frame input degenerates to a constant repeat.
pub fn resample(seq: &PoseSequence, target_frames: usize) -> Result<PoseSequence> {
    if target_frames == 0 {
        return Err(FuseError::EmptySequence);
    }
    let src = seq.positions();
    let (frames, joints, coords) = src.dim();
    debug!("resampling {frames} -> {target_frames} frames");

    let times = nd::Array1::linspace(0.0, (frames - 1) as f64, target_frames);
    let mut out = nd::Array3::<f64>::zeros((target_frames, joints, coords));
    for j in 0..joints {
        for c in 0..coords {
            let track = src.slice(s![.., j, c]);
            for (i, &t) in times.iter().enumerate() {
                out[[i, j, c]] = interp_linear(track, t);
            }
        }
    }
    Ok(PoseSequence { positions: out })
}
