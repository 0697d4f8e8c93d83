use crate::core::types::{DAYS_PER_WEEK, WeekdayOffset};

/// Number of week-columns needed for `series_len` days starting on row
/// `current_day`.
///
/// The first `current_day` rows of week 0 stay empty, so the offset is folded
/// into the count instead of padding the series.
#[must_use]
pub fn week_count(series_len: usize, current_day: WeekdayOffset) -> usize {
    (series_len + current_day.get()).div_ceil(DAYS_PER_WEEK)
}

/// Grid slot of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub column: usize,
    pub row: usize,
}

/// Places day `index` (0 = oldest) on the grid.
///
/// With `left_to_right == false` the column is mirrored so the newest week
/// lands on the left; rows are never mirrored.
#[must_use]
pub fn cell_position(
    index: usize,
    current_day: WeekdayOffset,
    num_weeks: usize,
    left_to_right: bool,
) -> CellPosition {
    let offset = index + current_day.get();
    let row = offset % DAYS_PER_WEEK;
    let column = offset / DAYS_PER_WEEK;
    let column = if left_to_right {
        column
    } else {
        num_weeks.saturating_sub(1).saturating_sub(column)
    };
    CellPosition { column, row }
}
