use crate::camera::plan::FrameSpec;
use crate::curve::sample::SampledCurve;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the rasterizer are **premultiplied alpha**; the `premultiplied` flag makes
/// this explicit at sink boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Wrap a buffer, checking it is exactly `width * height * 4` bytes.
    pub fn new(
        width: u32,
        height: u32,
        data: Vec<u8>,
        premultiplied: bool,
    ) -> LissajousResult<Self> {
        let expected = Canvas { width, height }.rgba_len();
        if data.len() != expected {
            return Err(LissajousError::validation(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied,
        })
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut out);
        }
        out
    }

    /// Convert to premultiplied alpha (no-op when already premultiplied).
    pub fn into_premultiplied(mut self) -> Self {
        if !self.premultiplied {
            premultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = true;
        }
        self
    }
}

/// Draws one planned frame of a sampled curve.
pub trait RenderBackend {
    /// Render the prefix of `curve` selected by `spec` under `spec.pose`.
    fn render_frame(
        &mut self,
        curve: &SampledCurve,
        spec: &FrameSpec,
    ) -> LissajousResult<FrameRGBA>;
}
