use crate::camera::plan::{DEFAULT_STEP, FramePlan, FrameSpec};
use crate::camera::pose::{CameraPose, CameraSweep};
use crate::curve::params::CurveParameters;
use crate::curve::sample::{DEFAULT_SAMPLES, SampledCurve};
use crate::encode::gif::{DEFAULT_GIF_NAME, GifSink, GifSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::stage::FrameStage;
use crate::foundation::error::LissajousResult;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::{CpuRasterOpts, CpuRasterizer};
use std::path::{Path, PathBuf};

/// Name of the working subdirectory that holds staged frames during a run.
pub const DEFAULT_FRAMES_DIR: &str = "frames";

/// Everything a run needs. `Default` is the fixed animation: 1000 samples, a frame every 10
/// points, sweep from (30°, −60°) to (90°, 0°), top-down final frame, 50 ms per frame, written
/// to the current directory.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationOpts {
    /// Curve shape.
    pub curve: CurveParameters,
    /// Number of curve samples over one period.
    pub samples: usize,
    /// Prefix growth between frames.
    pub step: usize,
    /// Camera sweep while drawing.
    pub sweep: CameraSweep,
    /// Pose of the closing full-curve frame.
    pub final_pose: CameraPose,
    /// Rasterizer options.
    pub raster: CpuRasterOpts,
    /// GIF output options.
    pub gif: GifSinkOpts,
    /// Working directory for staged frames; removed at the end of the run.
    pub frames_dir: PathBuf,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl AnimationOpts {
    /// Default options with the GIF and the frame directory placed under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            curve: CurveParameters::default(),
            samples: DEFAULT_SAMPLES,
            step: DEFAULT_STEP,
            sweep: CameraSweep::default(),
            final_pose: CameraPose::TOP_DOWN,
            raster: CpuRasterOpts::default(),
            gif: GifSinkOpts::new(dir.join(DEFAULT_GIF_NAME)),
            frames_dir: dir.join(DEFAULT_FRAMES_DIR),
        }
    }
}

/// Outcome of [`AnimationSession::run`] or [`AnimationSession::run_into`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the plan, final frame included.
    pub frames_planned: u64,
    /// Frames rendered and pushed into the sink.
    pub frames_rendered: u64,
    /// Frames encoded into the animation (`run` only).
    pub frames_encoded: u64,
    /// Animation file (`run` only).
    pub out_path: Option<PathBuf>,
}

/// One animation run: the curve is sampled and the frames are planned up front, then frames
/// are rendered one at a time in generation order.
pub struct AnimationSession {
    opts: AnimationOpts,
    curve: SampledCurve,
    plan: FramePlan,
    backend: CpuRasterizer,
}

impl AnimationSession {
    /// Validate options, sample the curve and build the frame plan.
    #[tracing::instrument(skip_all, fields(samples = opts.samples, step = opts.step))]
    pub fn new(opts: AnimationOpts) -> LissajousResult<Self> {
        opts.gif.validate()?;
        let curve = SampledCurve::sample(&opts.curve, opts.samples)?;
        let plan = FramePlan::build(curve.len(), opts.step, &opts.sweep, opts.final_pose)?;
        let backend = CpuRasterizer::new(opts.raster)?;
        tracing::info!(points = curve.len(), frames = plan.len(), "animation planned");
        Ok(Self {
            opts,
            curve,
            plan,
            backend,
        })
    }

    /// Options of this run.
    pub fn opts(&self) -> &AnimationOpts {
        &self.opts
    }

    /// The sampled curve.
    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }

    /// The frame plan.
    pub fn plan(&self) -> &FramePlan {
        &self.plan
    }

    /// Render a single frame.
    pub fn render_frame(&mut self, spec: &FrameSpec) -> LissajousResult<FrameRGBA> {
        self.backend.render_frame(&self.curve, spec)
    }

    /// Render every planned frame into `sink`, in generation order.
    #[tracing::instrument(skip_all, fields(frames = self.plan.len()))]
    pub fn run_into(&mut self, sink: &mut dyn FrameSink) -> LissajousResult<RenderStats> {
        let canvas = self.opts.raster.canvas;
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            frame_count: self.plan.len() as u64,
        })?;

        let mut stats = RenderStats {
            frames_planned: self.plan.len() as u64,
            ..RenderStats::default()
        };
        for spec in self.plan.frames() {
            let frame = self.backend.render_frame(&self.curve, spec)?;
            sink.push_frame(spec.index, &frame)?;
            stats.frames_rendered += 1;
        }
        sink.end()?;
        Ok(stats)
    }

    /// Render, stage to PNG, assemble the GIF and remove the staged frames.
    #[tracing::instrument(skip_all, fields(out = %self.opts.gif.out_path.display()))]
    pub fn run(&mut self) -> LissajousResult<RenderStats> {
        let mut stage = FrameStage::for_plan(&self.opts.frames_dir, &self.plan);
        let mut stats = self.run_into(&mut stage)?;

        let mut gif = GifSink::new(self.opts.gif.clone());
        stage.replay_into(&mut gif)?;
        stage.cleanup()?;

        stats.frames_encoded = gif.frames_written();
        stats.out_path = Some(self.opts.gif.out_path.clone());
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/animation.rs"]
mod tests;
