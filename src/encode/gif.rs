use crate::encode::sink::{FrameSink, SinkConfig, check_order, check_size, ensure_parent_dir};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::backend::FrameRGBA;
use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// File name of the animation written by the default pipeline.
pub const DEFAULT_GIF_NAME: &str = "lissajous_curve_animation.gif";

/// Options for [`GifSink`] output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    /// Display time of every frame, in milliseconds.
    pub frame_delay_ms: u32,
    /// Loop the animation forever.
    pub loop_forever: bool,
    /// NeuQuant sampling speed, `1` (best) to `30` (fastest).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a looping GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            frame_delay_ms: 50,
            loop_forever: true,
            speed: 10,
        }
    }

    /// Check delay and speed.
    pub fn validate(&self) -> LissajousResult<()> {
        if self.frame_delay_ms == 0 {
            return Err(LissajousError::validation("frame_delay_ms must be > 0"));
        }
        if !(1..=30).contains(&self.speed) {
            return Err(LissajousError::validation(format!(
                "gif speed must be in 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Sink that encodes frames into an animated GIF, one GIF frame per pushed frame.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    /// Create a new sink; nothing is written until `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            cfg: None,
            last_idx: None,
            frames_written: 0,
        }
    }

    /// Output options.
    pub fn opts(&self) -> &GifSinkOpts {
        &self.opts
    }

    /// Number of frames encoded since the last `begin`.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        self.opts.validate()?;
        if cfg.width == 0 || cfg.height == 0 {
            return Err(LissajousError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(LissajousError::validation(
                "gif frames are limited to 65535 px per side",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(LissajousError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path)
            .with_context(|| format!("create gif '{}'", self.opts.out_path.display()))?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), self.opts.speed);
        if self.opts.loop_forever {
            encoder.set_repeat(Repeat::Infinite)?;
        }

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| LissajousError::encode("gif sink not started"))?;
        check_order(self.last_idx, idx)?;
        check_size(&cfg, frame)?;
        self.last_idx = Some(idx);

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(LissajousError::encode("gif sink is already finalized"));
        };

        let buf = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
            .ok_or_else(|| LissajousError::encode("frame buffer does not match its size"))?;
        let delay = image::Delay::from_numer_denom_ms(self.opts.frame_delay_ms, 1);
        encoder.encode_frame(image::Frame::from_parts(buf, 0, 0, delay))?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> LissajousResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| LissajousError::encode("gif sink not started"))?;
        // Dropping the encoder writes the GIF trailer.
        drop(encoder);
        if let Some(cfg) = self.cfg.take()
            && cfg.frame_count != self.frames_written
        {
            return Err(LissajousError::encode(format!(
                "gif sink expected {} frames, got {}",
                cfg.frame_count, self.frames_written
            )));
        }
        tracing::info!(
            frames = self.frames_written,
            out = %self.opts.out_path.display(),
            "gif written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
