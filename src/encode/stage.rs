use crate::camera::plan::FramePlan;
use crate::encode::sink::{FrameSink, SinkConfig, check_order, check_size};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::backend::FrameRGBA;
use anyhow::Context as _;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One frame written to the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFrame {
    /// Generation index.
    pub index: FrameIndex,
    /// PNG file holding the frame.
    pub path: PathBuf,
}

/// Sink that writes each frame as `<stem>.png` into a working directory.
///
/// File stems come from the frame plan (`frame_001.png`, ..., `frame_final.png`). The staged
/// frames can be replayed into another sink in generation order, after which
/// [`FrameStage::cleanup`] removes the directory. A stage dropped without cleanup removes what
/// it wrote, best-effort.
pub struct FrameStage {
    dir: PathBuf,
    stems: HashMap<FrameIndex, String>,
    cfg: Option<SinkConfig>,
    staged: Vec<StagedFrame>,
    cleaned: bool,
}

impl FrameStage {
    /// Stage the frames of `plan` into `dir`.
    pub fn for_plan(dir: impl Into<PathBuf>, plan: &FramePlan) -> Self {
        let stems = plan
            .frames()
            .iter()
            .map(|f| (f.index, f.file_stem()))
            .collect();
        Self {
            dir: dir.into(),
            stems,
            cfg: None,
            staged: Vec::new(),
            cleaned: false,
        }
    }

    /// Working directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written so far, in generation order.
    pub fn staged(&self) -> &[StagedFrame] {
        &self.staged
    }

    /// Decode every staged PNG in generation order and push it into `sink`.
    #[tracing::instrument(skip_all, fields(frames = self.staged.len()))]
    pub fn replay_into(&self, sink: &mut dyn FrameSink) -> LissajousResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| LissajousError::encode("frame stage was never started"))?;
        sink.begin(SinkConfig {
            frame_count: self.staged.len() as u64,
            ..cfg
        })?;
        for staged in &self.staged {
            let rgba = image::open(&staged.path)
                .with_context(|| format!("read staged frame '{}'", staged.path.display()))?
                .into_rgba8();
            let (w, h) = rgba.dimensions();
            let frame = FrameRGBA::new(w, h, rgba.into_raw(), false)?.into_premultiplied();
            sink.push_frame(staged.index, &frame)?;
        }
        sink.end()
    }

    /// Remove every file in the working directory, then the directory itself.
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn cleanup(mut self) -> LissajousResult<()> {
        self.cleaned = true;
        if !self.dir.exists() {
            return Ok(());
        }
        let mut removed = 0usize;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("remove staged frame '{}'", path.display()))?;
                removed += 1;
            }
        }
        std::fs::remove_dir(&self.dir)
            .with_context(|| format!("remove frame directory '{}'", self.dir.display()))?;
        tracing::debug!(removed, "frame stage cleaned up");
        Ok(())
    }
}

impl FrameSink for FrameStage {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create frame directory '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.staged.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> LissajousResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| LissajousError::encode("frame stage not started"))?;
        check_order(self.staged.last().map(|s| s.index), idx)?;
        check_size(&cfg, frame)?;

        let stem = self.stems.get(&idx).ok_or_else(|| {
            LissajousError::encode(format!("frame index {} is not in the plan", idx.0))
        })?;
        let path = self.dir.join(format!("{stem}.png"));
        image::save_buffer_with_format(
            &path,
            &frame.to_straight_rgba8(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        self.staged.push(StagedFrame { index: idx, path });
        Ok(())
    }

    fn end(&mut self) -> LissajousResult<()> {
        tracing::debug!(frames = self.staged.len(), dir = %self.dir.display(), "frames staged");
        Ok(())
    }
}

impl Drop for FrameStage {
    fn drop(&mut self) {
        if self.cleaned {
            return;
        }
        for staged in self.staged.drain(..) {
            let _ = std::fs::remove_file(&staged.path);
        }
        if self.cfg.is_some()
            && let Err(e) = std::fs::remove_dir(&self.dir)
        {
            tracing::warn!(dir = %self.dir.display(), error = %e, "frame directory left behind");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/stage.rs"]
mod tests;
