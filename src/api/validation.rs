use crate::core::WeekdayOffset;
use crate::error::{ChartError, ChartResult};

use super::{AxisStyle, ChartConfig};

/// Rejects every input the render pass cannot draw, before any renderer call.
pub(super) fn validate_render_input(
    config: &ChartConfig,
    series: &[u32],
) -> ChartResult<WeekdayOffset> {
    if series.is_empty() {
        return Err(ChartError::InvalidInput(
            "series must contain at least one day of activity".to_owned(),
        ));
    }
    let current_day = WeekdayOffset::new(config.current_day)?;

    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidInput(format!(
            "canvas size must be > 0, got {}x{}",
            config.viewport.width, config.viewport.height
        )));
    }
    if !config.dpi.is_finite() || config.dpi <= 0.0 {
        return Err(ChartError::InvalidInput("dpi must be finite and > 0".to_owned()));
    }
    if config.dot_size == 0 {
        return Err(ChartError::InvalidInput("dot size must be > 0".to_owned()));
    }

    if let Some(font_size) = config.title_style.font_size {
        validate_font_size(font_size, "title")?;
    }
    if let Some(color) = config.title_style.font_color {
        color.validate()?;
    }
    if !config.title_style.padding_top.is_finite() {
        return Err(ChartError::InvalidInput("title padding must be finite".to_owned()));
    }

    validate_axis_style(config.x_axis, "x-axis")?;
    validate_axis_style(config.y_axis, "y-axis")?;

    config.background.fill_color.validate()?;
    config.background.stroke_color.validate()?;
    validate_stroke_width(config.background.stroke_width, "background")?;
    if let Some(color) = config.cell_style.stroke_color {
        color.validate()?;
    }
    validate_stroke_width(config.cell_style.stroke_width, "cell")?;

    Ok(current_day)
}

fn validate_axis_style(style: AxisStyle, axis: &str) -> ChartResult<()> {
    validate_font_size(style.font_size, axis)?;
    if let Some(color) = style.font_color {
        color.validate()?;
    }
    Ok(())
}

fn validate_font_size(font_size: f64, owner: &str) -> ChartResult<()> {
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{owner} font size must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_stroke_width(width: f64, owner: &str) -> ChartResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{owner} stroke width must be finite and >= 0"
        )));
    }
    Ok(())
}
