use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Swatch index reserved for days without activity.
pub const EMPTY_SWATCH: usize = 0;

/// Ordered color ramp used to paint cells.
///
/// Index 0 is the "no activity" color; indices `1..len` form an ascending
/// intensity ramp. A palette always holds at least two swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct SwatchPalette {
    swatches: Vec<Color>,
}

impl SwatchPalette {
    pub fn new(swatches: Vec<Color>) -> ChartResult<Self> {
        if swatches.len() < 2 {
            return Err(ChartError::InvalidInput(format!(
                "palette needs at least 2 swatches, got {}",
                swatches.len()
            )));
        }
        for swatch in &swatches {
            swatch.validate()?;
        }
        Ok(Self { swatches })
    }

    /// Neutral gray followed by four increasingly saturated greens.
    #[must_use]
    pub fn greens() -> Self {
        Self {
            swatches: vec![
                Color::rgb8(0xeb, 0xed, 0xf0),
                Color::rgb8(0xc6, 0xe4, 0x8b),
                Color::rgb8(0x7b, 0xc9, 0x6f),
                Color::rgb8(0x23, 0x9a, 0x3b),
                Color::rgb8(0x19, 0x61, 0x27),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    #[must_use]
    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Swatch index for `value` given the series' observed maximum.
    ///
    /// `max_value == None` marks an all-zero series: every value maps to the
    /// empty swatch and the bucket formula is never evaluated.
    #[must_use]
    pub fn swatch_index(&self, value: u32, max_value: Option<u32>) -> usize {
        match max_value {
            Some(max_value) if max_value > 0 && value > 0 => {
                bucket_index(value, max_value, self.swatches.len())
            }
            _ => EMPTY_SWATCH,
        }
    }

    #[must_use]
    pub fn color_for(&self, value: u32, max_value: Option<u32>) -> Color {
        self.swatches[self.swatch_index(value, max_value)]
    }
}

impl Default for SwatchPalette {
    fn default() -> Self {
        Self::greens()
    }
}

impl TryFrom<Vec<Color>> for SwatchPalette {
    type Error = ChartError;

    fn try_from(swatches: Vec<Color>) -> ChartResult<Self> {
        Self::new(swatches)
    }
}

impl From<SwatchPalette> for Vec<Color> {
    fn from(palette: SwatchPalette) -> Self {
        palette.swatches
    }
}

/// Linear bucket for a positive value:
/// `floor((value - 1) * (swatch_count - 1) / max_value) + 1`, clamped to
/// `[1, swatch_count - 1]`. Values at or above `max_value` always take the
/// last swatch, which the formula alone misses when `max_value` is smaller
/// than the ramp.
///
/// Callers handle `value == 0` and `max_value == 0` before calling; both map
/// to the empty swatch.
#[must_use]
pub fn bucket_index(value: u32, max_value: u32, swatch_count: usize) -> usize {
    debug_assert!(value > 0 && max_value > 0 && swatch_count >= 2);
    let ramp = swatch_count.saturating_sub(1).max(1);
    if value >= max_value {
        return ramp;
    }
    let scaled = u64::from(value - 1) * ramp as u64 / u64::from(max_value);
    let bucket = usize::try_from(scaled).unwrap_or(usize::MAX).saturating_add(1);
    bucket.clamp(1, ramp)
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_SWATCH, SwatchPalette, bucket_index};
    use crate::render::Color;

    #[test]
    fn zero_always_maps_to_empty_swatch() {
        let palette = SwatchPalette::greens();
        assert_eq!(palette.swatch_index(0, Some(9)), EMPTY_SWATCH);
        assert_eq!(palette.swatch_index(0, None), EMPTY_SWATCH);
    }

    #[test]
    fn all_zero_series_never_reaches_bucket_formula() {
        let palette = SwatchPalette::greens();
        assert_eq!(palette.swatch_index(0, Some(0)), EMPTY_SWATCH);
        assert_eq!(palette.swatch_index(3, Some(0)), EMPTY_SWATCH);
        assert_eq!(palette.color_for(0, None), palette.swatches()[0]);
    }

    #[test]
    fn four_swatch_scenario_matches_documented_buckets() {
        assert_eq!(bucket_index(3, 5, 4), 2);
        assert_eq!(bucket_index(5, 5, 4), 3);
        assert_eq!(bucket_index(1, 5, 4), 1);
    }

    #[test]
    fn values_above_maximum_clamp_to_last_swatch() {
        assert_eq!(bucket_index(50, 5, 5), 4);
    }

    #[test]
    fn small_maximum_still_reaches_last_swatch() {
        assert_eq!(bucket_index(1, 2, 5), 1);
        assert_eq!(bucket_index(2, 2, 5), 4);
        assert_eq!(bucket_index(1, 1, 5), 4);
    }

    #[test]
    fn two_swatch_palette_paints_every_positive_value_the_same() {
        for value in 1..=10 {
            assert_eq!(bucket_index(value, 10, 2), 1);
        }
    }

    #[test]
    fn palette_requires_two_swatches() {
        assert!(SwatchPalette::new(vec![Color::WHITE]).is_err());
        assert!(SwatchPalette::new(vec![Color::WHITE, Color::rgb(0.0, 0.5, 0.0)]).is_ok());
    }

    #[test]
    fn palette_deserializes_from_hex_list() {
        let palette: SwatchPalette =
            serde_json::from_str(r##"["#ffffff", "#00ff00", "#008800"]"##).expect("palette");
        assert_eq!(palette.len(), 3);
        assert!(serde_json::from_str::<SwatchPalette>(r##"["#ffffff"]"##).is_err());
    }
}
