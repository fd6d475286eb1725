//! Turn the accumulated state into a timestamp

use chrono::{NaiveDateTime, NaiveTime};

use crate::common::add_calendar_offset;
use crate::datetime::state::ExtractionState;

/// Resolve `state` against its reference
///
/// Everything is measured from the reference's midnight: the named date
/// first, then the calendar offsets, the clock time and finally the clock
/// offsets. Returns `None` only when the arithmetic leaves chrono's range.
pub fn resolve(state: &ExtractionState) -> Option<NaiveDateTime> {
    let midnight = state.reference.date().and_time(NaiveTime::MIN);
    let mut result = midnight;

    if let Some(fragment) = state.date_fragment {
        match fragment.resolve(midnight) {
            Some(date) => result = date.and_time(NaiveTime::MIN),
            None => log::warn!(
                "ignoring invalid date {}/{} (year {:?})",
                fragment.day,
                fragment.month,
                fragment.year
            ),
        }
    }

    result = add_calendar_offset(
        result,
        state.year_offset,
        state.month_offset,
        state.day_offset,
        0,
        0,
        0,
    )?;

    if let Some((hour, minute)) = state.absolute_time {
        result = add_calendar_offset(result, 0, 0, 0, i64::from(hour), i64::from(minute), 0)?;
        let clock_set = hour != 0 || minute != 0;
        if clock_set
            && state.date_fragment.is_none()
            && !state.date_specified
            && state.reference > result
        {
            log::trace!("{result} already passed, moving to the next day");
            result = add_calendar_offset(result, 0, 0, 1, 0, 0, 0)?;
        }
    }

    add_calendar_offset(
        result,
        0,
        0,
        0,
        state.hour_offset,
        state.minute_offset,
        state.second_offset,
    )
}
