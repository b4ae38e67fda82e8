use crate::curve::params::CurveParameters;
use crate::foundation::core::Point3;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::linspace_at;
use std::f64::consts::TAU;

/// Number of samples taken over one period.
pub const DEFAULT_SAMPLES: usize = 1000;

/// The curve evaluated at `samples` parameter values evenly spaced over `[0, 2π]`.
///
/// Both endpoints are included, so with integer frequencies the last point closes the loop
/// onto the first.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve {
    params: CurveParameters,
    points: Vec<Point3>,
}

impl SampledCurve {
    /// Sample `params` at `samples` evenly spaced parameter values.
    #[tracing::instrument(skip(params))]
    pub fn sample(params: &CurveParameters, samples: usize) -> LissajousResult<Self> {
        params.validate()?;
        if samples == 0 {
            return Err(LissajousError::validation(
                "curve sample count must be >= 1",
            ));
        }

        let points: Vec<Point3> = (0..samples)
            .map(|k| params.evaluate(linspace_at(0.0, TAU, samples, k)))
            .collect();

        tracing::debug!(points = points.len(), "sampled curve");
        Ok(Self {
            params: *params,
            points,
        })
    }

    /// Parameters this curve was sampled from.
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// All sampled points in parameter order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a curve built by [`SampledCurve::sample`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first `n` points (clamped to the curve length).
    pub fn prefix(&self, n: usize) -> &[Point3] {
        &self.points[..n.min(self.points.len())]
    }

    /// Pose-independent radius that encloses every sampled point.
    pub fn bounding_radius(&self) -> f64 {
        self.params.bounding_radius()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sample.rs"]
mod tests;
