mod chart_config;
mod chart_style;
mod output_sink;
mod render_pass;
mod validation;

#[cfg(feature = "parallel-render")]
mod batch;

pub use chart_config::{ChartConfig, DEFAULT_DOT_SIZE, DEFAULT_DOT_SPACING, RenderJob};
pub use chart_style::{
    AxisStyle, BackgroundStyle, CellStyle, DEFAULT_AXIS_FONT_SIZE, DEFAULT_STROKE_WIDTH,
    DEFAULT_TEXT_COLOR, TitleStyle,
};
pub use output_sink::{FileSink, ImageSink, MemorySink};
pub use render_pass::{RenderPhase, render_activity_chart};

#[cfg(feature = "parallel-render")]
pub use batch::render_batch;

/// Renders to PNG bytes on a Cairo surface sized from `config.viewport`.
#[cfg(feature = "cairo-backend")]
pub fn render_png(config: &ChartConfig, series: &[u32]) -> crate::ChartResult<Vec<u8>> {
    let mut renderer =
        crate::render::CairoRenderer::with_canvas(config.viewport.width, config.viewport.height)?;
    render_activity_chart(&mut renderer, config, series)
}
