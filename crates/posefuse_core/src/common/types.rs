use strum_macros::Display;

/// Provenance of a blend input.
///
/// The tag is the only place where "real vs. synthetic" semantics enter
/// the engine: synthetic sources are produced in a different coordinate
/// convention and get spatially normalized before blending, real
/// sources never are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum SourceKind {
    /// Tracked motion recovered by a video-based 3D pose estimator.
    Real,
    /// Generated motion from a text-to-motion model.
    Synthetic,
}
