use serde::{Deserialize, Serialize};

use crate::core::{DAYS_PER_WEEK, DEFAULT_WEEKDAY_LABELS, SwatchPalette, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DPI, FontFace};

use super::{AxisStyle, BackgroundStyle, CellStyle, TitleStyle};

pub const DEFAULT_DOT_SIZE: u32 = 16;
pub const DEFAULT_DOT_SPACING: u32 = 2;

/// Everything one activity-chart render needs besides the series.
///
/// Axes and the weekday offset are plain fields with defaults, so a single
/// config covers charts with or without axes and with or without an offset.
/// The type is serializable so callers can keep chart setups in JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default = "default_dot_size")]
    pub dot_size: u32,
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: u32,
    /// Weekday row (0 = Sunday) of the first series entry. Must be in `[0, 6]`.
    #[serde(default)]
    pub current_day: u8,
    /// Week-columns grow left to right when set, right to left otherwise.
    #[serde(default = "default_left_to_right")]
    pub left_to_right: bool,
    #[serde(default)]
    pub font: Option<FontFace>,
    #[serde(default)]
    pub palette: SwatchPalette,
    #[serde(default)]
    pub title_style: TitleStyle,
    #[serde(default)]
    pub background: BackgroundStyle,
    #[serde(default)]
    pub cell_style: CellStyle,
    #[serde(default)]
    pub x_axis: AxisStyle,
    #[serde(default)]
    pub y_axis: AxisStyle,
    #[serde(default = "default_weekday_labels")]
    pub weekday_labels: [String; DAYS_PER_WEEK],
}

impl ChartConfig {
    /// Creates a config with default canvas, grid and styling.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            viewport: default_viewport(),
            dpi: default_dpi(),
            dot_size: DEFAULT_DOT_SIZE,
            dot_spacing: DEFAULT_DOT_SPACING,
            current_day: 0,
            left_to_right: true,
            font: None,
            palette: SwatchPalette::default(),
            title_style: TitleStyle::default(),
            background: BackgroundStyle::default(),
            cell_style: CellStyle::default(),
            x_axis: AxisStyle::default(),
            y_axis: AxisStyle::default(),
            weekday_labels: default_weekday_labels(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets dot size and the gap between neighbouring dots.
    #[must_use]
    pub fn with_dots(mut self, dot_size: u32, dot_spacing: u32) -> Self {
        self.dot_size = dot_size;
        self.dot_spacing = dot_spacing;
        self
    }

    #[must_use]
    pub fn with_current_day(mut self, current_day: u8) -> Self {
        self.current_day = current_day;
        self
    }

    #[must_use]
    pub fn with_left_to_right(mut self, left_to_right: bool) -> Self {
        self.left_to_right = left_to_right;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontFace) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: SwatchPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_title_style(mut self, style: TitleStyle) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn with_background(mut self, style: BackgroundStyle) -> Self {
        self.background = style;
        self
    }

    #[must_use]
    pub fn with_cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = style;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, style: AxisStyle) -> Self {
        self.x_axis = style;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, style: AxisStyle) -> Self {
        self.y_axis = style;
        self
    }

    /// Hides both label axes.
    #[must_use]
    pub fn without_axes(self) -> Self {
        self.with_x_axis(AxisStyle::hidden())
            .with_y_axis(AxisStyle::hidden())
    }

    #[must_use]
    pub fn with_weekday_labels(mut self, labels: [String; DAYS_PER_WEEK]) -> Self {
        self.weekday_labels = labels;
        self
    }

    /// Font used for every text run.
    #[must_use]
    pub fn effective_font(&self) -> FontFace {
        self.font.clone().unwrap_or_default()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidInput(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse config: {e}")))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A config paired with the series it should draw, as read from job files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderJob {
    #[serde(default)]
    pub config: ChartConfig,
    pub series: Vec<u32>,
}

impl RenderJob {
    #[must_use]
    pub fn new(config: ChartConfig, series: Vec<u32>) -> Self {
        Self { config, series }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse render job: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
}

fn default_dpi() -> f64 {
    DEFAULT_DPI
}

fn default_dot_size() -> u32 {
    DEFAULT_DOT_SIZE
}

fn default_dot_spacing() -> u32 {
    DEFAULT_DOT_SPACING
}

fn default_left_to_right() -> bool {
    true
}

fn default_weekday_labels() -> [String; DAYS_PER_WEEK] {
    DEFAULT_WEEKDAY_LABELS.map(str::to_owned)
}
