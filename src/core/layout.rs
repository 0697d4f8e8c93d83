use crate::core::grid::{CellPosition, week_count};
use crate::core::types::{DAYS_PER_WEEK, GridGeometry, Viewport, WeekdayOffset};
use crate::render::TextExtent;

/// Space reserved above the title baseline box when no padding is configured.
pub const DEFAULT_TITLE_TOP_PADDING: f64 = 10.0;

/// Geometry derived for exactly one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub title_x: f64,
    pub title_y: f64,
    pub chart_x: f64,
    pub chart_y: f64,
    pub chart_width: f64,
    pub chart_height: f64,
    pub num_weeks: usize,
    /// Largest series value, `None` when every day is zero.
    pub max_value: Option<u32>,
}

impl LayoutResult {
    /// Top-left pixel corner of a grid cell.
    #[must_use]
    pub fn cell_origin(&self, geometry: GridGeometry, cell: CellPosition) -> (f64, f64) {
        let pitch = geometry.pitch();
        (
            self.chart_x + cell.column as f64 * pitch,
            self.chart_y + cell.row as f64 * pitch,
        )
    }

    /// Top pixel of grid row `row`.
    #[must_use]
    pub fn row_top(&self, geometry: GridGeometry, row: usize) -> f64 {
        self.chart_y + row as f64 * geometry.pitch()
    }
}

/// Inputs of [`compute_layout`] that do not come from the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub viewport: Viewport,
    /// Title extent measured with the title font and size.
    pub title_extent: TextExtent,
    pub title_top_padding: f64,
    pub geometry: GridGeometry,
    pub current_day: WeekdayOffset,
}

/// Computes title anchor, chart origin/size, week count and series maximum.
///
/// The title is centered horizontally with its baseline below the top
/// padding. The grid is centered horizontally and placed at
/// `(height - title_y - chart_height) / 2` vertically. Centering offsets are
/// floored to whole pixels so cell edges stay on the pixel grid.
#[must_use]
pub fn compute_layout(request: &LayoutRequest, series: &[u32]) -> LayoutResult {
    let canvas_width = f64::from(request.viewport.width);
    let canvas_height = f64::from(request.viewport.height);

    let title_x = ((canvas_width - request.title_extent.width) / 2.0).floor();
    let title_y = request.title_top_padding + request.title_extent.height;

    let num_weeks = week_count(series.len(), request.current_day);
    let chart_width = request.geometry.span(num_weeks);
    let chart_height = request.geometry.span(DAYS_PER_WEEK);

    let chart_x = ((canvas_width - chart_width) / 2.0).floor();
    let chart_y = ((canvas_height - title_y - chart_height) / 2.0).floor();

    LayoutResult {
        title_x,
        title_y,
        chart_x,
        chart_y,
        chart_width,
        chart_height,
        num_weeks,
        max_value: observed_max(series),
    }
}

/// Largest value of the series, or `None` when it holds no activity at all.
#[must_use]
pub fn observed_max(series: &[u32]) -> Option<u32> {
    series.iter().copied().max().filter(|max| *max > 0)
}

/// Title font size picked from the smaller canvas dimension.
///
/// Discrete legibility steps: >=2048 -> 48, >=1024 -> 24, >=512 -> 18,
/// >=256 -> 12, otherwise 10.
#[must_use]
pub fn title_font_size_for(viewport: Viewport) -> f64 {
    match viewport.min_dimension() {
        2048.. => 48.0,
        1024.. => 24.0,
        512.. => 18.0,
        256.. => 12.0,
        _ => 10.0,
    }
}
