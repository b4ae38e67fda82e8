use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::lerp;

/// Camera orientation in degrees, using the `view_init(elev, azim)` convention.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    /// Elevation above the xy-plane.
    pub elevation_deg: f64,
    /// Rotation about the z axis.
    pub azimuth_deg: f64,
}

impl CameraPose {
    /// Looking straight down the z axis.
    pub const TOP_DOWN: Self = Self::new(90.0, 0.0);

    /// Construct a pose from elevation and azimuth in degrees.
    pub const fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            elevation_deg,
            azimuth_deg,
        }
    }

    /// Reject non-finite angles.
    pub fn validate(&self) -> LissajousResult<()> {
        if !self.elevation_deg.is_finite() || !self.azimuth_deg.is_finite() {
            return Err(LissajousError::validation(format!(
                "camera pose must be finite, got elevation {} azimuth {}",
                self.elevation_deg, self.azimuth_deg
            )));
        }
        Ok(())
    }
}

/// Linear camera sweep applied while the curve is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraSweep {
    /// Elevation at progress 0 and progress 1.
    pub elevation_deg: (f64, f64),
    /// Azimuth at progress 0 and progress 1.
    pub azimuth_deg: (f64, f64),
}

impl Default for CameraSweep {
    fn default() -> Self {
        Self {
            elevation_deg: (30.0, 90.0),
            azimuth_deg: (-60.0, 0.0),
        }
    }
}

impl CameraSweep {
    /// Reject non-finite endpoints.
    pub fn validate(&self) -> LissajousResult<()> {
        let (e0, e1) = self.elevation_deg;
        let (a0, a1) = self.azimuth_deg;
        if [e0, e1, a0, a1].iter().any(|v| !v.is_finite()) {
            return Err(LissajousError::validation(
                "camera sweep endpoints must be finite",
            ));
        }
        Ok(())
    }

    /// Pose after `i` of `n` points have been drawn (`progress = i / n`).
    pub fn pose_at(&self, i: usize, n: usize) -> CameraPose {
        let progress = if n == 0 { 1.0 } else { i as f64 / n as f64 };
        self.pose_at_progress(progress)
    }

    /// Pose at a progress fraction; values outside `[0, 1]` extrapolate.
    pub fn pose_at_progress(&self, progress: f64) -> CameraPose {
        CameraPose {
            elevation_deg: lerp(self.elevation_deg.0, self.elevation_deg.1, progress),
            azimuth_deg: lerp(self.azimuth_deg.0, self.azimuth_deg.1, progress),
        }
    }
}
