use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rows in every week-column.
pub const DAYS_PER_WEEK: usize = 7;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn min_dimension(self) -> u32 {
        self.width.min(self.height)
    }
}

/// Weekday row (0 = Sunday .. 6 = Saturday) of the first series entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct WeekdayOffset(u8);

impl WeekdayOffset {
    pub fn new(day: u8) -> ChartResult<Self> {
        if usize::from(day) >= DAYS_PER_WEEK {
            return Err(ChartError::InvalidInput(format!(
                "current day must be in [0, 6], got {day}"
            )));
        }
        Ok(Self(day))
    }

    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        self.0
    }
}

/// Dot size and spacing shared by every cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub dot_size: f64,
    pub dot_spacing: f64,
}

impl GridGeometry {
    #[must_use]
    pub fn new(dot_size: u32, dot_spacing: u32) -> Self {
        Self {
            dot_size: f64::from(dot_size),
            dot_spacing: f64::from(dot_spacing),
        }
    }

    /// Distance between the origins of two neighbouring cells.
    #[must_use]
    pub fn pitch(self) -> f64 {
        self.dot_size + self.dot_spacing
    }

    /// Pixel length covered by `count` cells and the gaps between them.
    #[must_use]
    pub fn span(self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f64;
        count * self.dot_size + (count - 1.0) * self.dot_spacing
    }
}
