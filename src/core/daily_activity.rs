use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::core::types::WeekdayOffset;
use crate::error::{ChartError, ChartResult};

/// Window used by the activity chart when the caller does not pick one.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// Per-day event counts for a window ending today, oldest day first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyActivity {
    counts: Vec<u32>,
    first_day: NaiveDate,
}

impl DailyActivity {
    /// Buckets event timestamps by UTC calendar day, counting back from the
    /// date of `now`.
    ///
    /// Days follow calendar dates rather than 24-hour spans, so every count
    /// lands on the weekday row of the date it happened on. Timestamps in the
    /// future count as today; events `num_days` or more days old fall outside
    /// the window and are dropped.
    pub fn from_timestamps<I>(
        now: DateTime<Utc>,
        timestamps: I,
        num_days: usize,
    ) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        if num_days == 0 {
            return Err(ChartError::InvalidInput(
                "activity window must cover at least one day".to_owned(),
            ));
        }
        let too_long = || ChartError::InvalidInput("activity window is too long".to_owned());
        let span = i64::try_from(num_days - 1).map_err(|_| too_long())?;
        let today = now.date_naive();
        let first_day = Duration::try_days(span)
            .and_then(|span| today.checked_sub_signed(span))
            .ok_or_else(too_long)?;

        let mut counts = vec![0u32; num_days];
        for timestamp in timestamps {
            let days_ago = (today - timestamp.date_naive()).num_days().max(0);
            let Ok(days_ago) = usize::try_from(days_ago) else {
                continue;
            };
            if days_ago >= num_days {
                continue;
            }
            let slot = &mut counts[num_days - 1 - days_ago];
            *slot = slot.saturating_add(1);
        }

        Ok(Self { counts, first_day })
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }

    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Weekday row of the oldest day in the window.
    #[must_use]
    pub fn current_day(&self) -> WeekdayOffset {
        current_day_for(self.first_day)
    }

    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.counts.iter().any(|count| *count > 0)
    }
}

/// Sunday-based weekday row of `date`.
#[must_use]
pub fn current_day_for(date: NaiveDate) -> WeekdayOffset {
    // num_days_from_sunday() is always in 0..=6.
    let day = u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or_default();
    WeekdayOffset::new(day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    use super::{DailyActivity, current_day_for};

    fn no_events() -> Vec<chrono::DateTime<Utc>> {
        Vec::new()
    }

    #[test]
    fn events_are_counted_oldest_first() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let events = [
            now,
            now - Duration::hours(3),
            now - Duration::days(1),
            now - Duration::days(4),
        ];
        let activity = DailyActivity::from_timestamps(now, events, 5).expect("activity");
        assert_eq!(activity.counts(), &[1, 0, 0, 1, 2]);
        assert_eq!(activity.first_day(), NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
    }

    #[test]
    fn future_events_count_as_today_and_old_events_drop() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let events = [now + Duration::hours(2), now - Duration::days(30)];
        let activity = DailyActivity::from_timestamps(now, events, 30).expect("activity");
        assert_eq!(activity.counts().iter().sum::<u32>(), 1);
        assert_eq!(activity.counts()[29], 1);
    }

    #[test]
    fn empty_window_is_rejected() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert!(DailyActivity::from_timestamps(now, no_events(), 0).is_err());
    }

    #[test]
    fn oversized_window_is_rejected_without_panicking() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert!(DailyActivity::from_timestamps(now, no_events(), 1usize << 40).is_err());
        assert!(DailyActivity::from_timestamps(now, no_events(), usize::MAX).is_err());
    }

    #[test]
    fn events_bucket_by_calendar_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        // Under 24 hours ago but on the previous date.
        let yesterday_afternoon = Utc.with_ymd_and_hms(2024, 3, 9, 13, 0, 0).unwrap();
        let late_two_days_ago = Utc.with_ymd_and_hms(2024, 3, 8, 23, 59, 0).unwrap();
        let activity =
            DailyActivity::from_timestamps(now, [yesterday_afternoon, late_two_days_ago], 3)
                .expect("activity");
        assert_eq!(activity.counts(), &[1, 1, 0]);
        assert_eq!(activity.current_day().get(), 5);
    }

    #[test]
    fn quiet_window_reports_no_activity() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let activity = DailyActivity::from_timestamps(now, no_events(), 7).expect("activity");
        assert!(!activity.has_activity());
    }

    #[test]
    fn weekday_rows_start_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(current_day_for(sunday).get(), 0);
        assert_eq!(current_day_for(sunday + Duration::days(3)).get(), 3);
    }
}
