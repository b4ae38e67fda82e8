//! Camera poses and the per-frame plan (how much of the curve each frame draws, and from where).

/// Ordered frame specs.
pub mod plan;
/// Camera pose and linear sweep.
pub mod pose;
