use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_TITLE_TOP_PADDING;
use crate::render::Color;

/// Default color for title and axis text (`#333333`).
pub const DEFAULT_TEXT_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);

/// Default stroke width for the background frame and the cells.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Default axis label size.
pub const DEFAULT_AXIS_FONT_SIZE: f64 = 10.0;

/// Title text style. Unset fields fall back to the computed defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    #[serde(default = "default_show")]
    pub show: bool,
    /// Overrides the size picked from the canvas dimensions.
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_color: Option<Color>,
    #[serde(default = "default_title_top_padding")]
    pub padding_top: f64,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            show: true,
            font_size: None,
            font_color: None,
            padding_top: DEFAULT_TITLE_TOP_PADDING,
        }
    }
}

/// Style of one label axis (months below the grid, weekdays left of it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    #[serde(default = "default_show")]
    pub show: bool,
    #[serde(default = "default_axis_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub font_color: Option<Color>,
}

impl AxisStyle {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: false,
            ..Self::default()
        }
    }
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            show: true,
            font_size: DEFAULT_AXIS_FONT_SIZE,
            font_color: None,
        }
    }
}

/// Full-canvas background box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    #[serde(default = "default_background_color")]
    pub fill_color: Color,
    #[serde(default = "default_background_color")]
    pub stroke_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            fill_color: Color::WHITE,
            stroke_color: Color::WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Outline of every grid cell. Without a stroke color the outline reuses the
/// cell's fill color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(default)]
    pub stroke_color: Option<Color>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            stroke_color: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

fn default_show() -> bool {
    true
}

fn default_title_top_padding() -> f64 {
    DEFAULT_TITLE_TOP_PADDING
}

fn default_axis_font_size() -> f64 {
    DEFAULT_AXIS_FONT_SIZE
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}
