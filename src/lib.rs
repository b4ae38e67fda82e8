//! Renders a 3-D Lissajous curve being drawn under a sweeping camera, then assembles the frames
//! into a looping animated GIF.
//!
//! The pipeline is linear and single-threaded:
//!
//! - Sample the curve once ([`SampledCurve`])
//! - Plan the frames: growing prefixes under an interpolated camera pose, plus one top-down
//!   frame of the full curve ([`FramePlan`])
//! - Rasterize each frame on the CPU ([`CpuRasterizer`]) and stage it as a PNG ([`FrameStage`])
//! - Replay the staged frames into a [`GifSink`], then remove the staging directory
//!
//! [`AnimationSession`] drives all of it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Camera poses and the frame plan.
pub mod camera;
/// Lissajous curve parameters and sampling.
pub mod curve;
/// Frame sinks.
pub mod encode;
/// CPU rasterization.
pub mod render;
/// The animation pipeline.
pub mod session;

pub use crate::foundation::core::{Canvas, FrameIndex, Point3, Rgba8};
pub use crate::foundation::error::{LissajousError, LissajousResult};

pub use crate::camera::plan::{FrameKind, FramePlan, FrameSpec};
pub use crate::camera::pose::{CameraPose, CameraSweep};
pub use crate::curve::params::CurveParameters;
pub use crate::curve::sample::SampledCurve;
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::stage::{FrameStage, StagedFrame};
pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::{CpuRasterOpts, CpuRasterizer};
pub use crate::session::animation::{AnimationOpts, AnimationSession, RenderStats};
