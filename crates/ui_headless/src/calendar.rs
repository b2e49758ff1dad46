//! Calendar grid generation and date-range selection.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Days between `date`'s weekday and `first_day_of_week`, going backward.
fn days_since_week_start(date: NaiveDate, first_day_of_week: Weekday) -> u64 {
    let offset = 7 + date.weekday().num_days_from_monday() as i64
        - first_day_of_week.num_days_from_monday() as i64;
    (offset % 7) as u64
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    date.checked_sub_days(Days::new(days_since_week_start(date, first_day_of_week)))
        .unwrap_or(date)
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    start_of_week(date, first_day_of_week)
        .checked_add_days(Days::new(6))
        .unwrap_or(date)
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    shift_month(start_of_month(date), 1)
        .pred_opt()
        .unwrap_or(date)
}

/// Moves `date` by `months` (negative moves back), clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Whether `a` and `b` fall in the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Weeks (rows of seven days) covering the month of `month`.
///
/// Leading and trailing days of adjacent months fill the first and last week. With
/// `consistent_weeks` the grid is always six weeks tall so the calendar height never jumps.
pub fn month_days(
    month: NaiveDate,
    first_day_of_week: Weekday,
    consistent_weeks: bool,
) -> Vec<Vec<NaiveDate>> {
    let first = start_of_week(start_of_month(month), first_day_of_week);
    let last = end_of_week(end_of_month(month), first_day_of_week);
    let mut days: Vec<NaiveDate> = first.iter_days().take_while(|day| *day <= last).collect();

    if consistent_weeks {
        while days.len() < 42 {
            match days.last().and_then(|day| day.succ_opt()) {
                Some(next) => days.push(next),
                None => break,
            }
        }
    }

    days.chunks(7).map(<[NaiveDate]>::to_vec).collect()
}

/// Weekdays in display order starting from `first_day_of_week`.
pub fn weekday_order(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut days = [first_day_of_week; 7];
    for index in 1..7 {
        days[index] = days[index - 1].succ();
    }
    days
}

/// Short weekday labels (`Mo`, `Tu`, ...) in display order.
pub fn weekday_labels(first_day_of_week: Weekday) -> [&'static str; 7] {
    weekday_order(first_day_of_week).map(|day| match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    })
}

/// First days of the twelve months of `year`.
pub fn year_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// First and last year of the decade containing `year` (`2024` → `2020..=2029`).
pub fn decade_range(year: i32) -> (i32, i32) {
    let start = year - year.rem_euclid(10);
    (start, start + 9)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Optional inclusive bounds on selectable dates.
pub struct DateBounds {
    /// Earliest selectable date.
    pub min: Option<NaiveDate>,
    /// Latest selectable date.
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Whether `date` is inside the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }

    /// Whether `date` is outside the bounds.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        !self.contains(date)
    }

    /// Whether any day of `month` is selectable; drives the previous/next month controls.
    pub fn month_has_selectable_day(&self, month: NaiveDate) -> bool {
        let first = start_of_month(month);
        let last = end_of_month(month);
        self.min.map_or(true, |min| last >= min) && self.max.map_or(true, |max| first <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Two-click date-range selection.
pub enum DateRangeSelection {
    /// Nothing picked.
    #[default]
    Empty,
    /// First date picked, waiting for the second.
    Start(NaiveDate),
    /// Both ends picked, `start <= end`.
    Complete {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },
}

impl DateRangeSelection {
    /// Applies a click on `date`.
    ///
    /// Picking after a complete range starts over. Clicking the pending start again completes a
    /// single-day range when `allow_single_date` is set, and clears the selection otherwise.
    pub fn pick(self, date: NaiveDate, allow_single_date: bool) -> Self {
        match self {
            Self::Empty | Self::Complete { .. } => Self::Start(date),
            Self::Start(start) if start == date => {
                if allow_single_date {
                    Self::Complete {
                        start: date,
                        end: date,
                    }
                } else {
                    Self::Empty
                }
            }
            Self::Start(start) => Self::Complete {
                start: start.min(date),
                end: start.max(date),
            },
        }
    }

    /// Both ends, when complete.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::Complete { start, end } => Some((start, end)),
            _ => None,
        }
    }

    /// Whether `date` is an endpoint of the selection.
    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::Start(start) => start == date,
            Self::Complete { start, end } => start == date || end == date,
        }
    }

    /// Whether `date` falls strictly between the endpoints, or between the pending start and the
    /// hovered day while the second end is still being chosen.
    pub fn is_in_range(&self, date: NaiveDate, hovered: Option<NaiveDate>) -> bool {
        let (start, end) = match (*self, hovered) {
            (Self::Complete { start, end }, _) => (start, end),
            (Self::Start(start), Some(hovered)) => (start.min(hovered), start.max(hovered)),
            _ => return false,
        };
        date > start && date < end
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn week_bounds_follow_first_weekday() {
        let wednesday = date(2024, 5, 15);
        assert_eq!(start_of_week(wednesday, Weekday::Mon), date(2024, 5, 13));
        assert_eq!(end_of_week(wednesday, Weekday::Mon), date(2024, 5, 19));
        assert_eq!(start_of_week(wednesday, Weekday::Sun), date(2024, 5, 12));
        assert_eq!(start_of_week(date(2024, 5, 12), Weekday::Sun), date(2024, 5, 12));
    }

    #[test]
    fn month_grid_pads_with_adjacent_months() {
        // February 2024 starts on a Thursday and has 29 days.
        let weeks = month_days(date(2024, 2, 10), Weekday::Mon, false);
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|week| week.len() == 7));
        assert_eq!(weeks[0][0], date(2024, 1, 29));
        assert_eq!(weeks[4][6], date(2024, 3, 3));
        assert_eq!(weeks[0][3], date(2024, 2, 1));
    }

    #[test]
    fn consistent_weeks_always_yield_six_rows() {
        // February 2021 fits exactly four Monday-first weeks.
        let compact = month_days(date(2021, 2, 1), Weekday::Mon, false);
        assert_eq!(compact.len(), 4);

        let consistent = month_days(date(2021, 2, 1), Weekday::Mon, true);
        assert_eq!(consistent.len(), 6);
        assert_eq!(consistent[5][6], date(2021, 3, 14));
    }

    #[test]
    fn month_shifting_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2024, 12, 5), 1), date(2025, 1, 5));
        assert_eq!(end_of_month(date(2023, 2, 11)), date(2023, 2, 28));
        assert!(is_same_month(date(2024, 2, 1), date(2024, 2, 29)));
        assert!(!is_same_month(date(2024, 2, 1), date(2023, 2, 1)));
    }

    #[test]
    fn weekday_labels_rotate() {
        assert_eq!(weekday_labels(Weekday::Sun)[0], "Su");
        assert_eq!(weekday_labels(Weekday::Sun)[6], "Sa");
        assert_eq!(weekday_labels(Weekday::Mon), ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
    }

    #[test]
    fn decade_and_year_helpers() {
        assert_eq!(decade_range(2024), (2020, 2029));
        assert_eq!(decade_range(2030), (2030, 2039));
        assert_eq!(decade_range(-5), (-10, -1));
        assert_eq!(year_months(2024).len(), 12);
        assert_eq!(year_months(2024)[11], date(2024, 12, 1));
    }

    #[test]
    fn bounds_disable_outside_dates() {
        let bounds = DateBounds {
            min: Some(date(2024, 5, 10)),
            max: Some(date(2024, 6, 5)),
        };
        assert!(bounds.is_disabled(date(2024, 5, 9)));
        assert!(bounds.contains(date(2024, 5, 10)));
        assert!(bounds.contains(date(2024, 6, 5)));
        assert!(bounds.is_disabled(date(2024, 6, 6)));
        assert!(bounds.month_has_selectable_day(date(2024, 6, 20)));
        assert!(!bounds.month_has_selectable_day(date(2024, 7, 1)));
        assert!(DateBounds::default().contains(date(1999, 1, 1)));
    }

    #[test]
    fn range_selection_orders_and_restarts() {
        let first = date(2024, 5, 20);
        let second = date(2024, 5, 12);

        let selection = DateRangeSelection::default().pick(first, false);
        assert_eq!(selection, DateRangeSelection::Start(first));
        assert!(selection.is_in_range(date(2024, 5, 15), Some(second)));

        let selection = selection.pick(second, false);
        assert_eq!(selection.bounds(), Some((second, first)));
        assert!(selection.is_endpoint(first));
        assert!(selection.is_in_range(date(2024, 5, 13), None));
        assert!(!selection.is_in_range(first, None));

        let restarted = selection.pick(date(2024, 6, 1), false);
        assert_eq!(restarted, DateRangeSelection::Start(date(2024, 6, 1)));
    }

    #[test]
    fn same_day_pick_respects_single_date_flag() {
        let day = date(2024, 5, 20);
        let pending = DateRangeSelection::Start(day);
        assert_eq!(pending.pick(day, false), DateRangeSelection::Empty);
        assert_eq!(pending.pick(day, true).bounds(), Some((day, day)));
    }
}
