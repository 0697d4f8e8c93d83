use tracing::{debug, trace};

use crate::core::{
    GridGeometry, LayoutRequest, LayoutResult, MONTH_LABELS, WeekdayOffset, cell_position,
    compute_layout, place_month_labels, place_weekday_labels, title_font_size_for,
};
use crate::error::ChartResult;
use crate::render::{FontFace, RectPrimitive, Renderer, TextExtent, TextHAlign};

use super::validation::validate_render_input;
use super::{AxisStyle, ChartConfig, DEFAULT_TEXT_COLOR};

/// Stages of one render, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Validating,
    LayingOut,
    DrawingBackground,
    DrawingTitle,
    DrawingGrid,
    DrawingAxes,
    Finalizing,
    Done,
}

/// Renders `series` (one value per day, oldest first) with `config` and
/// returns the encoded image produced by `renderer`.
///
/// Invalid input is rejected before the renderer sees a single call. Past
/// validation the only failure is the renderer's own finalize step; there is
/// never partial output.
pub fn render_activity_chart<R: Renderer + ?Sized>(
    renderer: &mut R,
    config: &ChartConfig,
    series: &[u32],
) -> ChartResult<Vec<u8>> {
    trace!(phase = ?RenderPhase::Validating, days = series.len(), "render phase");
    let current_day = validate_render_input(config, series)?;
    let pass = RenderPass::new(config, series, current_day);

    trace!(phase = ?RenderPhase::LayingOut, "render phase");
    let layout = pass.lay_out(renderer);

    trace!(phase = ?RenderPhase::DrawingBackground, "render phase");
    pass.draw_background(renderer);

    trace!(phase = ?RenderPhase::DrawingTitle, "render phase");
    pass.draw_title(renderer, &layout);

    trace!(phase = ?RenderPhase::DrawingGrid, "render phase");
    pass.draw_grid(renderer, &layout);

    trace!(phase = ?RenderPhase::DrawingAxes, "render phase");
    pass.draw_axes(renderer, &layout);

    trace!(phase = ?RenderPhase::Finalizing, "render phase");
    let image = renderer.finalize()?;

    debug!(
        phase = ?RenderPhase::Done,
        days = series.len(),
        weeks = layout.num_weeks,
        max_value = ?layout.max_value,
        bytes = image.len(),
        "rendered activity chart"
    );
    Ok(image)
}

/// Validated inputs shared by the drawing stages of one render.
struct RenderPass<'a> {
    config: &'a ChartConfig,
    series: &'a [u32],
    current_day: WeekdayOffset,
    geometry: GridGeometry,
    font: FontFace,
    title_font_size: f64,
}

impl<'a> RenderPass<'a> {
    fn new(config: &'a ChartConfig, series: &'a [u32], current_day: WeekdayOffset) -> Self {
        Self {
            config,
            series,
            current_day,
            geometry: GridGeometry::new(config.dot_size, config.dot_spacing),
            font: config.effective_font(),
            title_font_size: config
                .title_style
                .font_size
                .unwrap_or_else(|| title_font_size_for(config.viewport)),
        }
    }

    fn lay_out<R: Renderer + ?Sized>(&self, renderer: &mut R) -> LayoutResult {
        renderer.set_dpi(self.config.dpi);
        renderer.set_font(&self.font);
        renderer.set_font_size(self.title_font_size);
        let title_extent = renderer.measure_text(&self.config.title);

        let request = LayoutRequest {
            viewport: self.config.viewport,
            title_extent,
            title_top_padding: self.config.title_style.padding_top,
            geometry: self.geometry,
            current_day: self.current_day,
        };
        compute_layout(&request, self.series)
    }

    fn draw_background<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let background = self.config.background;
        let viewport = self.config.viewport;
        renderer.draw_filled_stroked_box(
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                background.fill_color,
            )
            .with_stroke(background.stroke_color, background.stroke_width),
        );
    }

    fn draw_title<R: Renderer + ?Sized>(&self, renderer: &mut R, layout: &LayoutResult) {
        let style = self.config.title_style;
        if !style.show || self.config.title.is_empty() {
            return;
        }

        renderer.set_font(&self.font);
        renderer.set_font_color(style.font_color.unwrap_or(DEFAULT_TEXT_COLOR));
        renderer.set_font_size(self.title_font_size);
        renderer.draw_text(
            &self.config.title,
            layout.title_x,
            layout.title_y,
            TextHAlign::Left,
        );
    }

    fn draw_grid<R: Renderer + ?Sized>(&self, renderer: &mut R, layout: &LayoutResult) {
        let palette = &self.config.palette;
        let cell_style = self.config.cell_style;
        let size = self.geometry.dot_size;

        for (index, value) in self.series.iter().copied().enumerate() {
            let cell = cell_position(
                index,
                self.current_day,
                layout.num_weeks,
                self.config.left_to_right,
            );
            let (x, y) = layout.cell_origin(self.geometry, cell);
            let fill = palette.color_for(value, layout.max_value);
            renderer.draw_filled_stroked_box(
                RectPrimitive::new(x, y, size, size, fill)
                    .with_stroke(cell_style.stroke_color.unwrap_or(fill), cell_style.stroke_width),
            );
        }
    }

    fn draw_axes<R: Renderer + ?Sized>(&self, renderer: &mut R, layout: &LayoutResult) {
        if self.config.x_axis.show {
            self.apply_axis_font(renderer, self.config.x_axis);
            let extents: Vec<TextExtent> = MONTH_LABELS
                .iter()
                .map(|label| renderer.measure_text(label))
                .collect();
            let placements = place_month_labels(layout, &extents);
            for (label, placement) in MONTH_LABELS.iter().zip(placements) {
                renderer.draw_text(label, placement.x, placement.y, TextHAlign::Left);
            }
        }

        if self.config.y_axis.show {
            self.apply_axis_font(renderer, self.config.y_axis);
            let labels = &self.config.weekday_labels;
            let extents: Vec<Option<TextExtent>> = labels
                .iter()
                .map(|label| {
                    if label.is_empty() {
                        None
                    } else {
                        Some(renderer.measure_text(label))
                    }
                })
                .collect();
            for (row, placement) in place_weekday_labels(layout, self.geometry, &extents) {
                renderer.draw_text(&labels[row], placement.x, placement.y, TextHAlign::Left);
            }
        }
    }

    fn apply_axis_font<R: Renderer + ?Sized>(&self, renderer: &mut R, style: AxisStyle) {
        renderer.set_font(&self.font);
        renderer.set_font_size(style.font_size);
        renderer.set_font_color(style.font_color.unwrap_or(DEFAULT_TEXT_COLOR));
    }
}
