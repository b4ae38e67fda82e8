//! The end-to-end animation pipeline.

/// Options, run statistics and the session itself.
pub mod animation;
