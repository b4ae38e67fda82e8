use crate::camera::pose::{CameraPose, CameraSweep};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LissajousError, LissajousResult};

/// Default prefix growth between consecutive frames.
pub const DEFAULT_STEP: usize = 10;

/// Whether a frame shows the curve being drawn or the finished curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FrameKind {
    /// Partial curve under the sweeping camera.
    Progress,
    /// Full curve under the fixed final pose.
    Final,
}

/// What one output frame draws and from where.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpec {
    /// Position in generation order.
    pub index: FrameIndex,
    /// Number of leading curve points drawn.
    pub prefix_len: usize,
    /// Camera pose for this frame.
    pub pose: CameraPose,
    /// Progress or final frame.
    pub kind: FrameKind,
}

impl FrameSpec {
    /// File stem used when the frame is staged on disk.
    pub fn file_stem(&self) -> String {
        match self.kind {
            FrameKind::Progress => format!("frame_{:03}", self.prefix_len),
            FrameKind::Final => "frame_final".to_string(),
        }
    }
}

/// Ordered frame specs for one animation: progress frames, then one final frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    frames: Vec<FrameSpec>,
}

impl FramePlan {
    /// Plan frames for a curve of `n` points.
    ///
    /// Progress frames draw `i = 1, 1 + step, 1 + 2·step, ...` points (`i <= n`) with the pose
    /// `sweep.pose_at(i, n)`. The final frame draws all `n` points from `final_pose`.
    pub fn build(
        n: usize,
        step: usize,
        sweep: &CameraSweep,
        final_pose: CameraPose,
    ) -> LissajousResult<Self> {
        if n == 0 {
            return Err(LissajousError::validation(
                "frame plan needs at least one curve point",
            ));
        }
        if step == 0 {
            return Err(LissajousError::validation("frame step must be >= 1"));
        }
        sweep.validate()?;
        final_pose.validate()?;

        let mut frames: Vec<FrameSpec> = (1..=n)
            .step_by(step)
            .enumerate()
            .map(|(k, i)| FrameSpec {
                index: FrameIndex(k as u64),
                prefix_len: i,
                pose: sweep.pose_at(i, n),
                kind: FrameKind::Progress,
            })
            .collect();
        frames.push(FrameSpec {
            index: FrameIndex(frames.len() as u64),
            prefix_len: n,
            pose: final_pose,
            kind: FrameKind::Final,
        });

        Ok(Self { frames })
    }

    /// Frames in generation order.
    pub fn frames(&self) -> &[FrameSpec] {
        &self.frames
    }

    /// Total frame count, final frame included.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never `true` for a plan built by [`FramePlan::build`].
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/plan.rs"]
mod tests;
