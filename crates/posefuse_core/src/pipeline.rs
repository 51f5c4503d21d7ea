//! Orders the normalize/resample/blend steps and runs the weight sweep.

use crate::blend::{blend, WeightPair, DEFAULT_WEIGHT_SWEEP};
use crate::common::sequence::{PoseSequence, RawSkeletonSequence};
use crate::common::types::SourceKind;
use crate::conversions::{normalize::SpatialNormalizer, resample::resample, topology::TopologyMap};
use crate::error::{FuseError, Result};
use log::{debug, warn};

/// One input to the fusion pipeline: provenance tag plus payload,
/// either raw estimator output (which still needs topology mapping) or
/// an already-canonical sequence.
pub struct FusionInput {
    pub kind: SourceKind,
    pub data: InputData,
}

pub enum InputData {
    Raw(RawSkeletonSequence),
    Canonical(PoseSequence),
}

impl FusionInput {
    pub fn new(kind: SourceKind, data: InputData) -> Self {
        Self { kind, data }
    }

    /// A real source straight out of the 3D pose estimator.
    pub fn real_raw(raw: RawSkeletonSequence) -> Self {
        Self::new(SourceKind::Real, InputData::Raw(raw))
    }

    /// A synthetic source from a text-to-motion generator, already on
    /// the canonical skeleton but in its own coordinate convention.
    pub fn synthetic(seq: PoseSequence) -> Self {
        Self::new(SourceKind::Synthetic, InputData::Canonical(seq))
    }
}

/// Knobs for one fusion run. The sweep defaults to the fixed nine-pair
/// table; callers may supply their own ordered pairs, each weight in
/// [0, 1] (they are not required to sum to 1).
#[derive(Clone, Debug)]
pub struct FusionConfig {
    pub alpha: f64,
    pub sweep: Vec<WeightPair>,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            sweep: DEFAULT_WEIGHT_SWEEP.to_vec(),
        }
    }
}

/// The family of blends produced by one sweep, addressable by weight
/// pair (exact match on the pair rounded to two decimals).
pub struct BlendSet {
    entries: Vec<(WeightPair, PoseSequence)>,
}

impl BlendSet {
    /// Retrieves the blend computed at `(w_a, w_b)`. A miss is an
    /// explicit not-found error, never a fallback blend.
    pub fn get(&self, w_a: f64, w_b: f64) -> Result<&PoseSequence> {
        let key = WeightPair::new(w_a, w_b).key();
        self.entries
            .iter()
            .find(|(pair, _)| pair.key() == key)
            .map(|(_, seq)| seq)
            .ok_or(FuseError::WeightPairNotFound { w_a, w_b })
    }

    pub fn iter(&self) -> impl Iterator<Item = &(WeightPair, PoseSequence)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fuses two tagged inputs into one blend per weight pair.
///
/// Raw payloads are topology-mapped, synthetic sources are spatially
/// normalized, the shorter sequence is resampled to the longer's frame
/// count, and the blender runs once per sweep entry.
///
/// Which sequence anchors the blend (plays `P_r`) mirrors the observed
/// behaviour of the source pipelines rather than a cleaned-up rule:
/// with two real inputs the longer one anchors (ties go to the second),
/// while with a real and a synthetic input the real one always anchors,
/// even when it was the shorter one and got resampled. Since
/// `P_opt = P_r + alpha*D`, the anchor asymmetrically shapes the
/// output; whether the length-dependent choice in the two-real case is
/// intentional is unknown, so it is preserved as-is.
pub fn fuse(first: FusionInput, second: FusionInput, config: &FusionConfig) -> Result<BlendSet> {
    for pair in &config.sweep {
        if !(0.0..=1.0).contains(&pair.w_a) || !(0.0..=1.0).contains(&pair.w_b) {
            warn!("weight pair ({}, {}) is outside [0, 1]", pair.w_a, pair.w_b);
        }
    }

    let first_kind = first.kind;
    let second_kind = second.kind;
    let a = prepare(first)?;
    let b = prepare(second)?;
    debug!(
        "fusing {first_kind} ({} frames) with {second_kind} ({} frames)",
        a.num_frames(),
        b.num_frames()
    );

    // Match frame counts: the shorter sequence is resampled up to the
    // longer one, which passes through untouched.
    let first_is_longer = a.num_frames() > b.num_frames();
    let (longer, matched_shorter) = if first_is_longer {
        let target = a.num_frames();
        (a, resample(&b, target)?)
    } else {
        let target = b.num_frames();
        (b, resample(&a, target)?)
    };

    // Anchor selection, preserved from the source pipelines: a real
    // input always anchors against a synthetic partner; between two
    // inputs of the same kind the longer one anchors.
    let real_vs_synthetic = first_kind != second_kind;
    let (reference, partner) = if real_vs_synthetic {
        let first_is_real = first_kind == SourceKind::Real;
        let real_is_longer = first_is_real == first_is_longer;
        if real_is_longer {
            (&longer, &matched_shorter)
        } else {
            (&matched_shorter, &longer)
        }
    } else {
        (&longer, &matched_shorter)
    };

    let mut entries = Vec::with_capacity(config.sweep.len());
    for pair in &config.sweep {
        let blended = blend(reference, partner, config.alpha, *pair)?;
        entries.push((*pair, blended));
    }
    Ok(BlendSet { entries })
}

fn prepare(input: FusionInput) -> Result<PoseSequence> {
    let seq = match input.data {
        InputData::Raw(raw) => TopologyMap::new().remap(&raw),
        InputData::Canonical(seq) => seq,
    };
    Ok(match input.kind {
        SourceKind::Synthetic => SpatialNormalizer::new().normalize(&seq),
        SourceKind::Real => seq,
    })
}
