//! Closed-form Lissajous curve and its fixed-step sampling.

/// Curve parameters and closed-form evaluation.
pub mod params;
/// Uniform sampling over one period.
pub mod sample;
