//! Month (x-axis) and weekday (y-axis) label placement.
//!
//! Month labels are spread evenly across the grid width and are not tied to
//! the calendar months the series actually covers.

use crate::core::layout::LayoutResult;
use crate::core::types::{DAYS_PER_WEEK, GridGeometry};
use crate::render::TextExtent;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday annotations by row, starting with Sunday. Empty rows are skipped.
pub const DEFAULT_WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// Gap between the grid and its axis labels.
pub const AXIS_GUTTER: f64 = 5.0;

/// Anchor of one label, `y` being the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
}

/// Left-edge x of each month label.
///
/// The space the labels leave free is split into equal gaps:
/// `gap = (chart_width - sum(widths)) / (count - 1)`.
#[must_use]
pub fn month_label_xs(chart_x: f64, chart_width: f64, widths: &[f64]) -> Vec<f64> {
    let total: f64 = widths.iter().sum();
    let gap = if widths.len() > 1 {
        (chart_width - total) / (widths.len() - 1) as f64
    } else {
        0.0
    };

    let mut x = chart_x;
    widths
        .iter()
        .map(|width| {
            let left = x;
            x += width + gap;
            left
        })
        .collect()
}

/// Baseline shared by all month labels, just below the grid.
#[must_use]
pub fn month_label_baseline(layout: &LayoutResult, label_height: f64) -> f64 {
    layout.chart_y + layout.chart_height + AXIS_GUTTER + label_height
}

/// Places the month labels below the grid.
#[must_use]
pub fn place_month_labels(layout: &LayoutResult, extents: &[TextExtent]) -> Vec<LabelPlacement> {
    let widths: Vec<f64> = extents.iter().map(|extent| extent.width).collect();
    let label_height = extents
        .iter()
        .map(|extent| extent.height)
        .fold(0.0, f64::max);
    let y = month_label_baseline(layout, label_height);

    month_label_xs(layout.chart_x, layout.chart_width, &widths)
        .into_iter()
        .map(|x| LabelPlacement { x, y })
        .collect()
}

/// Places weekday labels left of the grid, one per non-empty row label.
///
/// `extents[row]` is `None` for rows whose label is empty. All labels share
/// `x = chart_x - max_width - gutter`; each baseline sits one label height
/// below its row top.
#[must_use]
pub fn place_weekday_labels(
    layout: &LayoutResult,
    geometry: GridGeometry,
    extents: &[Option<TextExtent>],
) -> Vec<(usize, LabelPlacement)> {
    let max_width = extents
        .iter()
        .flatten()
        .map(|extent| extent.width)
        .fold(0.0, f64::max);
    let x = layout.chart_x - max_width - AXIS_GUTTER;

    extents
        .iter()
        .copied()
        .enumerate()
        .take(DAYS_PER_WEEK)
        .filter_map(|(row, extent)| {
            extent.map(|extent| {
                let y = layout.row_top(geometry, row) + extent.height;
                (row, LabelPlacement { x, y })
            })
        })
        .collect()
}
