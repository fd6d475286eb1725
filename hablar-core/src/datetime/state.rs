//! Accumulator shared by the date and time passes

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// A calendar date named in the text ("15 de mayo", "mayo 15 2025")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFragment {
    /// 1-based
    pub month: u32,
    pub day: u32,
    pub year: Option<i32>,
}

impl DateFragment {
    /// Concrete date relative to `midnight`
    ///
    /// Without a year the date is placed in the reference year when it is
    /// still ahead, otherwise in the following year.
    pub fn resolve(&self, midnight: NaiveDateTime) -> Option<NaiveDate> {
        if let Some(year) = self.year {
            return NaiveDate::from_ymd_opt(year, self.month, self.day);
        }

        let current = midnight.year();
        match NaiveDate::from_ymd_opt(current, self.month, self.day) {
            Some(date) if midnight < date.and_time(NaiveTime::MIN) => Some(date),
            _ => NaiveDate::from_ymd_opt(current + 1, self.month, self.day),
        }
    }
}

/// Everything the rules learned about the phrase
#[derive(Debug, Clone)]
pub struct ExtractionState {
    pub reference: NaiveDateTime,

    pub day_offset: i64,
    pub month_offset: i64,
    pub year_offset: i64,
    pub hour_offset: i64,
    pub minute_offset: i64,
    pub second_offset: i64,

    /// Clock time as (hour, minute); hour 24 rolls into the next day
    pub absolute_time: Option<(u32, u32)>,
    pub date_fragment: Option<DateFragment>,

    pub date_specified: bool,
    pub time_specified: bool,
    /// Set by "desde", "a partir de", ... once an anchor was read
    pub from_anchor: bool,
    pub relative_day_seen: bool,
    /// Last time-of-day word seen in the date pass ("tarde", "noche")
    pub time_qualifier: Option<String>,
}

impl ExtractionState {
    pub fn new(reference: NaiveDateTime) -> Self {
        Self {
            reference,
            day_offset: 0,
            month_offset: 0,
            year_offset: 0,
            hour_offset: 0,
            minute_offset: 0,
            second_offset: 0,
            absolute_time: None,
            date_fragment: None,
            date_specified: false,
            time_specified: false,
            from_anchor: false,
            relative_day_seen: false,
            time_qualifier: None,
        }
    }

    /// Whether any rule produced something to resolve
    pub fn found(&self) -> bool {
        self.date_specified
            || self.time_specified
            || self.date_fragment.is_some()
            || self.absolute_time.is_some()
            || [
                self.day_offset,
                self.month_offset,
                self.year_offset,
                self.hour_offset,
                self.minute_offset,
                self.second_offset,
            ]
            .iter()
            .any(|offset| *offset != 0)
    }

    /// Days from the reference to the next `weekday` (Monday = 0), in [0, 7)
    pub fn days_until(&self, weekday: usize) -> i64 {
        let today = i64::from(self.reference.weekday().num_days_from_sunday());
        (weekday as i64 + 1 - today).rem_euclid(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn test_fragment_without_year() {
        let fragment = DateFragment {
            month: 5,
            day: 15,
            year: None,
        };
        assert_eq!(
            fragment.resolve(midnight(2024, 3, 1)),
            NaiveDate::from_ymd_opt(2024, 5, 15)
        );
        assert_eq!(
            fragment.resolve(midnight(2024, 5, 15)),
            NaiveDate::from_ymd_opt(2025, 5, 15)
        );
        assert_eq!(
            fragment.resolve(midnight(2024, 6, 1)),
            NaiveDate::from_ymd_opt(2025, 5, 15)
        );
    }

    #[test]
    fn test_fragment_with_year_and_invalid_day() {
        let fragment = DateFragment {
            month: 2,
            day: 30,
            year: Some(2024),
        };
        assert_eq!(fragment.resolve(midnight(2024, 1, 1)), None);
    }

    #[test]
    fn test_days_until() {
        // 2024-03-06 is a Wednesday
        let state = ExtractionState::new(midnight(2024, 3, 6));
        assert_eq!(state.days_until(0), 5);
        assert_eq!(state.days_until(2), 0);
        assert_eq!(state.days_until(4), 2);
        assert_eq!(state.days_until(6), 4);
        assert!(!state.found());
    }
}
