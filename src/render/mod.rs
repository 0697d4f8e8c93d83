mod primitives;
mod recording_renderer;

pub use primitives::{Color, FontFace, RectPrimitive, TextExtent, TextHAlign};
pub use recording_renderer::{RecordingRenderer, RenderCommand};

use crate::error::ChartResult;

/// Canvas width used when a config does not override it.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;
/// Canvas height used when a config does not override it.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;
/// Output resolution used when a config does not override it.
pub const DEFAULT_DPI: f64 = 92.0;

/// Drawing surface the chart engine talks to.
///
/// Implementations carry mutable font/color state between calls, so one
/// instance must only ever serve one render at a time. Drawing calls cannot
/// fail at this boundary: a backend that hits a drawing error keeps it and
/// reports it from [`Renderer::finalize`].
pub trait Renderer {
    fn set_dpi(&mut self, dpi: f64);

    fn set_font(&mut self, font: &FontFace);

    fn set_font_size(&mut self, size: f64);

    fn set_font_color(&mut self, color: Color);

    /// Measures `text` with the current font and size.
    fn measure_text(&mut self, text: &str) -> TextExtent;

    fn draw_filled_stroked_box(&mut self, rect: RectPrimitive);

    /// Draws `text` with its baseline at `y`, aligned around `x`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, h_align: TextHAlign);

    /// Serializes everything drawn so far into encoded image bytes.
    fn finalize(&mut self) -> ChartResult<Vec<u8>>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
