//!
//! Calendar math for the date-picker.
//!
//! [month_grid] expands one month to complete display weeks,
//! padded with days of the previous/next month. The rest are
//! small date predicates used throughout the crate.
//!

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// One month expanded to complete display weeks.
///
/// Every week has exactly 7 consecutive days. The first cell
/// falls on the week-start weekday on or before the 1st, the
/// last cell is 6 days after the week-start on or before the
/// last day of the month. Days outside the month are padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    week_start: Weekday,
    weeks: Vec<[NaiveDate; 7]>,
}

impl MonthGrid {
    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Week-start convention used for the layout.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Display weeks, 4..=6 of them.
    pub fn weeks(&self) -> &[[NaiveDate; 7]] {
        &self.weeks
    }

    /// Nr of display weeks.
    pub fn week_len(&self) -> usize {
        self.weeks.len()
    }

    /// Day for a flat cell index, row-major.
    pub fn day(&self, n: usize) -> Option<NaiveDate> {
        self.weeks.get(n / 7).map(|week| week[n % 7])
    }

    /// Is the date a padding day of the neighbouring months?
    pub fn is_padding(&self, date: NaiveDate) -> bool {
        !is_same_month(date, self.month)
    }
}

/// Build the display grid for the month containing `month`.
///
/// The result is deterministic for a given month and week-start.
pub fn month_grid(month: NaiveDate, week_start: Weekday) -> MonthGrid {
    let month = first_day_of_month(month);
    let last = last_day_of_month(month);

    let mut day = month.week(week_start).first_day();
    let mut weeks = Vec::with_capacity(6);
    while day <= last {
        let mut week = [day; 7];
        for cell in week.iter_mut() {
            *cell = day;
            day = day + Days::new(1);
        }
        weeks.push(week);
    }

    MonthGrid {
        month,
        week_start,
        weeks,
    }
}

/// Nr of display weeks for the month containing `month`.
pub fn count_weeks(month: NaiveDate, week_start: Weekday) -> usize {
    let first = first_day_of_month(month).week(week_start).first_day();
    let last = last_day_of_month(month);
    (last.signed_duration_since(first).num_days() / 7 + 1) as usize
}

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("date")
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1) - Days::new(1)
}

/// Same calendar day?
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Same month of the same year?
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Closed interval check, both ends inclusive.
pub fn is_within(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

/// Outside the optional min/max bounds?
pub fn is_outside_bounds(
    date: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> bool {
    if let Some(min) = min {
        if date < min {
            return true;
        }
    }
    if let Some(max) = max {
        if date > max {
            return true;
        }
    }
    false
}
