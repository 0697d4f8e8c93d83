pub mod axis_labels;
pub mod daily_activity;
pub mod grid;
pub mod layout;
pub mod palette;
pub mod types;

pub use axis_labels::{
    AXIS_GUTTER, DEFAULT_WEEKDAY_LABELS, LabelPlacement, MONTH_LABELS, month_label_xs,
    place_month_labels, place_weekday_labels,
};
pub use daily_activity::{DEFAULT_WINDOW_DAYS, DailyActivity, current_day_for};
pub use grid::{CellPosition, cell_position, week_count};
pub use layout::{
    DEFAULT_TITLE_TOP_PADDING, LayoutRequest, LayoutResult, compute_layout, observed_max,
    title_font_size_for,
};
pub use palette::{EMPTY_SWATCH, SwatchPalette, bucket_index};
pub use types::{DAYS_PER_WEEK, GridGeometry, Viewport, WeekdayOffset};
