use crate::camera::plan::FrameSpec;
use crate::curve::sample::SampledCurve;
use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::projection::ViewProjector;

/// Output resolution used by [`CpuRasterOpts::default`]: a 10 in square figure at 100 dpi.
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 1000,
    height: 1000,
};

/// A 2 pt line at 100 dpi.
pub const DEFAULT_LINE_WIDTH_PX: f64 = 2.0 * 100.0 / 72.0;

/// Options for the CPU rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CpuRasterOpts {
    /// Output frame size.
    pub canvas: Canvas,
    /// Opaque fill drawn under the curve.
    pub background: Rgba8,
    /// Curve stroke color.
    pub stroke: Rgba8,
    /// Curve stroke width in pixels.
    pub line_width_px: f64,
    /// Space kept between the curve's bounding sphere and the shorter canvas edge.
    pub margin_px: f64,
}

impl Default for CpuRasterOpts {
    fn default() -> Self {
        Self {
            canvas: DEFAULT_CANVAS,
            background: Rgba8::WHITE,
            stroke: Rgba8::BLACK,
            line_width_px: DEFAULT_LINE_WIDTH_PX,
            margin_px: 20.0,
        }
    }
}

impl CpuRasterOpts {
    /// Return options with a different canvas.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Check sizes and widths.
    pub fn validate(&self) -> LissajousResult<()> {
        self.canvas.validate()?;
        if !(self.line_width_px.is_finite() && self.line_width_px > 0.0) {
            return Err(LissajousError::validation(
                "line_width_px must be finite and > 0",
            ));
        }
        if !(self.margin_px.is_finite() && self.margin_px >= 0.0) {
            return Err(LissajousError::validation(
                "margin_px must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// CPU backend powered by `vello_cpu`: strokes the projected curve prefix as one polyline.
pub struct CpuRasterizer {
    opts: CpuRasterOpts,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRasterizer {
    /// Create a rasterizer; fails on invalid options.
    pub fn new(opts: CpuRasterOpts) -> LissajousResult<Self> {
        opts.validate()?;
        let width: u16 = opts
            .canvas
            .width
            .try_into()
            .map_err(|_| LissajousError::render("canvas width exceeds u16"))?;
        let height: u16 = opts
            .canvas
            .height
            .try_into()
            .map_err(|_| LissajousError::render("canvas height exceeds u16"))?;
        Ok(Self {
            opts,
            width,
            height,
            ctx: None,
        })
    }

    /// Options this rasterizer was built with.
    pub fn opts(&self) -> &CpuRasterOpts {
        &self.opts
    }

    fn with_ctx_mut<R>(
        &mut self,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> LissajousResult<R>,
    ) -> LissajousResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuRasterizer {
    fn render_frame(
        &mut self,
        curve: &SampledCurve,
        spec: &FrameSpec,
    ) -> LissajousResult<FrameRGBA> {
        let opts = self.opts;
        let projector = ViewProjector::new(
            spec.pose,
            opts.canvas,
            curve.bounding_radius(),
            opts.margin_px,
        );
        let path = polyline(
            curve
                .prefix(spec.prefix_len)
                .iter()
                .map(|p| projector.project(*p)),
        );

        let (width, height) = (self.width, self.height);
        let data = self.with_ctx_mut(|ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

            ctx.set_paint(color_to_cpu(opts.background));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));

            if let Some(path) = path.as_ref() {
                ctx.set_paint(color_to_cpu(opts.stroke));
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(opts.line_width_px)
                        .with_join(vello_cpu::kurbo::Join::Round)
                        .with_caps(vello_cpu::kurbo::Cap::Round),
                );
                ctx.stroke_path(&bezpath_to_cpu(path));
            }

            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })?;

        tracing::debug!(
            index = spec.index.0,
            prefix = spec.prefix_len,
            elev = spec.pose.elevation_deg,
            azim = spec.pose.azimuth_deg,
            "rendered frame"
        );
        FrameRGBA::new(opts.canvas.width, opts.canvas.height, data, true)
    }
}

/// Open polyline through `points`; `None` when fewer than two points are given.
pub(crate) fn polyline(points: impl IntoIterator<Item = Point>) -> Option<BezPath> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut path = BezPath::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in it {
        path.line_to(p);
        segments += 1;
    }
    (segments > 0).then_some(path)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
