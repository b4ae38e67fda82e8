//! Frame sinks: PNG staging, GIF encoding and an in-memory sink.
//!
//! Sinks consume rendered frames in generation order.

/// Animated GIF output.
pub mod gif;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
/// PNG staging directory.
pub mod stage;
