use crate::foundation::core::Point3;
use crate::foundation::error::{LissajousError, LissajousResult};
use std::f64::consts::PI;

/// Amplitudes, angular frequencies and phase offsets of a 3-D Lissajous curve.
///
/// The curve is `x = A·sin(a·t + δx)`, `y = B·sin(b·t + δy)`, `z = C·sin(c·t + δz)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveParameters {
    /// Amplitude along x (`A`).
    pub amp_x: f64,
    /// Amplitude along y (`B`).
    pub amp_y: f64,
    /// Amplitude along z (`C`).
    pub amp_z: f64,
    /// Frequency along x (`a`).
    pub freq_x: f64,
    /// Frequency along y (`b`).
    pub freq_y: f64,
    /// Frequency along z (`c`).
    pub freq_z: f64,
    /// Phase offset along x, radians.
    pub phase_x: f64,
    /// Phase offset along y, radians.
    pub phase_y: f64,
    /// Phase offset along z, radians.
    pub phase_z: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            amp_x: 5.0,
            amp_y: 5.0,
            amp_z: 5.0,
            freq_x: 3.0,
            freq_y: 2.0,
            freq_z: 4.0,
            phase_x: PI / 2.0,
            phase_y: PI / 3.0,
            phase_z: PI / 4.0,
        }
    }
}

impl CurveParameters {
    /// Require finite scalars and non-negative amplitudes.
    pub fn validate(&self) -> LissajousResult<()> {
        let named = [
            ("amp_x", self.amp_x),
            ("amp_y", self.amp_y),
            ("amp_z", self.amp_z),
            ("freq_x", self.freq_x),
            ("freq_y", self.freq_y),
            ("freq_z", self.freq_z),
            ("phase_x", self.phase_x),
            ("phase_y", self.phase_y),
            ("phase_z", self.phase_z),
        ];
        for (name, v) in named {
            if !v.is_finite() {
                return Err(LissajousError::validation(format!(
                    "curve parameter {name} must be finite, got {v}"
                )));
            }
        }
        for (name, v) in &named[..3] {
            if *v < 0.0 {
                return Err(LissajousError::validation(format!(
                    "curve amplitude {name} must be >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Largest of the three amplitudes.
    pub fn max_amplitude(&self) -> f64 {
        self.amp_x.max(self.amp_y).max(self.amp_z)
    }

    /// Radius of the sphere enclosing the `[-A,A]×[-B,B]×[-C,C]` box.
    pub fn bounding_radius(&self) -> f64 {
        (self.amp_x * self.amp_x + self.amp_y * self.amp_y + self.amp_z * self.amp_z).sqrt()
    }

    /// Evaluate the curve at parameter `t`.
    pub fn evaluate(&self, t: f64) -> Point3 {
        Point3::new(
            self.amp_x * (self.freq_x * t + self.phase_x).sin(),
            self.amp_y * (self.freq_y * t + self.phase_y).sin(),
            self.amp_z * (self.freq_z * t + self.phase_z).sin(),
        )
    }
}
