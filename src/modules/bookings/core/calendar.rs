// Business calendar: opening hours, open weekdays and the start-time grid.
//
// Purpose
// - Configuration the slot generator and booking policy read; never mutated at runtime.
//
// Responsibilities
// - Validate that hours are ordered and every candidate start lies inside them.
// - Keep candidate start times sorted and unique.

use crate::shared::core::primitives::{SessionLength, TimeOfDay};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("closing time {close} must be after opening time {open}")]
    InvertedHours { open: TimeOfDay, close: TimeOfDay },

    #[error("slot step must be a positive number of minutes")]
    ZeroStep,

    #[error("candidate start {0} lies outside business hours")]
    CandidateOutsideHours(TimeOfDay),

    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
    pub open_days: HashSet<Weekday>,
    pub candidate_start_times: Vec<TimeOfDay>,
}

impl BusinessCalendar {
    pub fn new(
        open_time: TimeOfDay,
        close_time: TimeOfDay,
        open_days: impl IntoIterator<Item = Weekday>,
        mut candidate_start_times: Vec<TimeOfDay>,
    ) -> Result<Self, CalendarError> {
        if close_time <= open_time {
            return Err(CalendarError::InvertedHours {
                open: open_time,
                close: close_time,
            });
        }
        candidate_start_times.sort();
        candidate_start_times.dedup();
        if let Some(outside) = candidate_start_times
            .iter()
            .find(|start| **start < open_time || **start >= close_time)
        {
            return Err(CalendarError::CandidateOutsideHours(*outside));
        }
        Ok(Self {
            open_time,
            close_time,
            open_days: open_days.into_iter().collect(),
            candidate_start_times,
        })
    }

    /// Regular grid from opening time every `step_minutes`, up to and including
    /// `last_start` (defaults to one step before closing).
    pub fn with_grid(
        open_time: TimeOfDay,
        close_time: TimeOfDay,
        open_days: impl IntoIterator<Item = Weekday>,
        step_minutes: u32,
        last_start: Option<TimeOfDay>,
    ) -> Result<Self, CalendarError> {
        if step_minutes == 0 {
            return Err(CalendarError::ZeroStep);
        }
        let last = last_start
            .map(TimeOfDay::minutes)
            .unwrap_or_else(|| close_time.minutes().saturating_sub(step_minutes));
        let grid = (open_time.minutes()..=last)
            .step_by(step_minutes as usize)
            .filter_map(|minute| TimeOfDay::from_minutes(minute).ok())
            .collect();
        Self::new(open_time, close_time, open_days, grid)
    }

    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.open_days.contains(&date.weekday())
    }

    pub fn is_candidate(&self, start: TimeOfDay) -> bool {
        self.candidate_start_times.binary_search(&start).is_ok()
    }

    /// A session must finish by closing time; finishing exactly at closing is fine.
    pub fn fits_before_close(&self, start: TimeOfDay, duration: SessionLength) -> bool {
        start.minutes() + duration.minutes() <= self.close_time.minutes()
    }
}

impl Default for BusinessCalendar {
    /// 12:00 to 22:00 every day, starts every 30 minutes, last start 21:00.
    fn default() -> Self {
        let open = TimeOfDay::at(12, 0);
        let close = TimeOfDay::at(22, 0);
        let grid = (open.minutes()..=TimeOfDay::at(21, 0).minutes())
            .step_by(30)
            .filter_map(|minute| TimeOfDay::from_minutes(minute).ok())
            .collect();
        Self {
            open_time: open,
            close_time: close,
            open_days: ALL_WEEKDAYS.into_iter().collect(),
            candidate_start_times: grid,
        }
    }
}

/// Parse a comma separated weekday list such as `mon,tue,sat` or `monday, friday`.
pub fn parse_weekdays(raw: &str) -> Result<HashSet<Weekday>, CalendarError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Weekday::from_str(part).map_err(|_| CalendarError::UnknownWeekday(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod calendar_tests {
    use super::*;
    use crate::tests::fixtures::reservations::{date, hours, time};
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_default_half_hour_grid() {
        let calendar = BusinessCalendar::default();
        assert_eq!(calendar.candidate_start_times.len(), 19);
        assert_eq!(calendar.candidate_start_times.first(), Some(&time("12:00")));
        assert_eq!(calendar.candidate_start_times.last(), Some(&time("21:00")));
        assert_eq!(calendar.open_days.len(), 7);
    }

    #[rstest]
    fn it_should_match_the_default_when_built_from_a_grid() {
        let calendar = BusinessCalendar::with_grid(
            time("12:00"),
            time("22:00"),
            ALL_WEEKDAYS,
            30,
            Some(time("21:00")),
        )
        .unwrap();
        assert_eq!(calendar, BusinessCalendar::default());
    }

    #[rstest]
    fn it_should_default_the_last_start_to_one_step_before_closing() {
        let calendar =
            BusinessCalendar::with_grid(time("09:00"), time("11:00"), [Weekday::Mon], 60, None).unwrap();
        assert_eq!(calendar.candidate_start_times, vec![time("09:00"), time("10:00")]);
    }

    #[rstest]
    fn it_should_fit_sessions_ending_at_midnight() {
        let calendar = BusinessCalendar::with_grid(
            time("18:00"),
            TimeOfDay::END_OF_DAY,
            ALL_WEEKDAYS,
            30,
            None,
        )
        .unwrap();
        assert_eq!(calendar.candidate_start_times.last(), Some(&time("23:30")));
        assert!(calendar.fits_before_close(time("22:00"), hours(2.0)));
        assert!(!calendar.fits_before_close(time("22:30"), hours(2.0)));
    }

    #[rstest]
    fn it_should_reject_inverted_hours() {
        let result = BusinessCalendar::new(time("22:00"), time("12:00"), ALL_WEEKDAYS, vec![]);
        assert_eq!(
            result,
            Err(CalendarError::InvertedHours {
                open: time("22:00"),
                close: time("12:00"),
            })
        );
    }

    #[rstest]
    fn it_should_reject_candidates_outside_business_hours() {
        let result = BusinessCalendar::new(
            time("12:00"),
            time("22:00"),
            ALL_WEEKDAYS,
            vec![time("12:00"), time("11:30")],
        );
        assert_eq!(result, Err(CalendarError::CandidateOutsideHours(time("11:30"))));
    }

    #[rstest]
    fn it_should_reject_a_zero_step() {
        let result = BusinessCalendar::with_grid(time("12:00"), time("22:00"), ALL_WEEKDAYS, 0, None);
        assert_eq!(result, Err(CalendarError::ZeroStep));
    }

    #[rstest]
    fn it_should_sort_and_deduplicate_candidates() {
        let calendar = BusinessCalendar::new(
            time("12:00"),
            time("22:00"),
            ALL_WEEKDAYS,
            vec![time("15:00"), time("12:00"), time("15:00")],
        )
        .unwrap();
        assert_eq!(calendar.candidate_start_times, vec![time("12:00"), time("15:00")]);
        assert!(calendar.is_candidate(time("15:00")));
        assert!(!calendar.is_candidate(time("15:30")));
    }

    #[rstest]
    fn it_should_know_which_days_are_open() {
        let calendar = BusinessCalendar::new(
            time("12:00"),
            time("22:00"),
            [Weekday::Sat, Weekday::Sun],
            vec![time("12:00")],
        )
        .unwrap();
        // 2025-03-01 is a Saturday
        assert!(calendar.is_open_on(date("2025-03-01")));
        assert!(!calendar.is_open_on(date("2025-03-03")));
    }

    #[rstest]
    #[case("21:00", 1.0, true)]
    #[case("19:30", 2.5, true)]
    #[case("21:30", 1.0, false)]
    fn it_should_require_sessions_to_end_by_closing(
        #[case] start: &str,
        #[case] length: f64,
        #[case] fits: bool,
    ) {
        let calendar = BusinessCalendar::default();
        assert_eq!(calendar.fits_before_close(time(start), hours(length)), fits);
    }

    #[rstest]
    fn it_should_parse_weekday_lists() {
        let days = parse_weekdays("mon, Tuesday,sat").unwrap();
        assert_eq!(days, HashSet::from([Weekday::Mon, Weekday::Tue, Weekday::Sat]));
        assert_eq!(
            parse_weekdays("mon,funday"),
            Err(CalendarError::UnknownWeekday("funday".into()))
        );
    }
}
