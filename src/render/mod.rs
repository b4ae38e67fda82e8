//! Rasterization of curve frames.

/// Frame buffer type and backend trait.
pub mod backend;
/// CPU raster backend (`vello_cpu`).
pub mod cpu;
/// Camera projection into pixel space.
pub mod projection;
