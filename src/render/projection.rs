use crate::camera::pose::CameraPose;
use crate::foundation::core::{Canvas, Point, Point3};

/// Orthographic view of curve space for one camera pose.
///
/// The screen basis follows `view_init(elev, azim)`: with the eye at
/// `(cos el·cos az, cos el·sin az, sin el)`, screen-right is `(−sin az, cos az, 0)` and
/// screen-up is the eye direction rotated a quarter turn towards `+z`.
#[derive(Clone, Copy, Debug)]
pub struct ViewProjector {
    right: Point3,
    up: Point3,
    center: Point,
    scale: f64,
}

impl ViewProjector {
    /// Build a projector that maps a sphere of `radius` around the origin into `canvas`, leaving
    /// `margin_px` on the shorter side.
    pub fn new(pose: CameraPose, canvas: Canvas, radius: f64, margin_px: f64) -> Self {
        let el = pose.elevation_deg.to_radians();
        let az = pose.azimuth_deg.to_radians();
        let (sin_el, cos_el) = el.sin_cos();
        let (sin_az, cos_az) = az.sin_cos();

        let half = f64::from(canvas.width.min(canvas.height)) / 2.0;
        let usable = (half - margin_px).max(1.0);
        let scale = if radius > 0.0 { usable / radius } else { 1.0 };

        Self {
            right: Point3::new(-sin_az, cos_az, 0.0),
            up: Point3::new(-sin_el * cos_az, -sin_el * sin_az, cos_el),
            center: Point::new(
                f64::from(canvas.width) / 2.0,
                f64::from(canvas.height) / 2.0,
            ),
            scale,
        }
    }

    /// Pixel position of `p` (y grows downwards).
    pub fn project(&self, p: Point3) -> Point {
        Point::new(
            self.center.x + p.dot(self.right) * self.scale,
            self.center.y - p.dot(self.up) * self.scale,
        )
    }

    /// Pixels per curve unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
