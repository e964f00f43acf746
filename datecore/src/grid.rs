//! Month grid math.
//!
//! Everything here is pure: "today" comes in as an argument, so the grid for
//! a given anchor, today and policy is always the same sequence of cells.
//! Weeks start on Sunday, matching the Su..Sa header row the picker draws.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Cells per grid row. Grids always cover whole weeks.
pub const DAYS_PER_WEEK: usize = 7;

/// What day cells borrowed from adjacent months do when clicked.
///
/// The grid always shows leading/trailing days so every row is complete;
/// this decides whether they are interactive. `Selectable` cells select like
/// any other day (the state then navigates to their month). `Inert` cells
/// are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    #[default]
    Selectable,
    Inert,
}

/// One cell of a month grid.
///
/// Rebuilt from scratch every time the grid is computed; compare cells by
/// date, never by position or identity.
#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day-of-month component of `date`, 1-31.
    pub day_number: u32,
    /// False for cells borrowed from the previous or next month.
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub selectable: bool,
}

// Cell equality is date equality: the flags are derived and day_number is a
// component of the date itself.
impl PartialEq for DayCell {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for DayCell {}

/// Today in the host's local time zone.
pub fn current_day() -> NaiveDate {
    Local::now().date_naive()
}

/// True when both dates fall on the same calendar day.
/// `NaiveDate` carries no time of day, so plain equality is day granularity.
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// True when both dates fall in the same month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First day of the anchor's month.
pub fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

/// Number of days in the anchor's month.
pub fn month_length(anchor: NaiveDate) -> u32 {
    let next_first = if anchor.month() == 12 {
        NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
    };
    next_first
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Anchor one month later. Day-of-month clamps to the target month's length
/// (Jan 31 -> Feb 28, or Feb 29 in a leap year).
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_add_months(Months::new(1)).unwrap_or(anchor)
}

/// Anchor one month earlier, with the same day clamping.
pub fn previous_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor)
}

/// Build the grid of day cells for the anchor's month.
///
/// Enough leading days from the previous month to reach back to a Sunday,
/// every day of the anchor month, then trailing days from the next month to
/// fill the last row. Length is always a multiple of 7; five or six rows
/// depending on month length and starting weekday.
pub fn month_grid(anchor: NaiveDate, today: NaiveDate, policy: PaddingPolicy) -> Vec<DayCell> {
    let first = first_of_month(anchor);
    let lead = first.weekday().num_days_from_sunday() as usize;
    let total = lead + month_length(anchor) as usize;
    let rows = (total + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK;

    let mut cells = Vec::with_capacity(rows * DAYS_PER_WEEK);
    let mut cursor = back_days(first, lead);
    for _ in 0..rows * DAYS_PER_WEEK {
        let in_month = same_month(cursor, anchor);
        cells.push(DayCell {
            date: cursor,
            day_number: cursor.day(),
            in_displayed_month: in_month,
            is_today: same_day(cursor, today),
            selectable: in_month || policy == PaddingPolicy::Selectable,
        });
        cursor = cursor.succ_opt().unwrap_or(cursor);
    }
    cells
}

// Step back n days; used to reach the Sunday on or before the 1st.
fn back_days(date: NaiveDate, n: usize) -> NaiveDate {
    let mut d = date;
    for _ in 0..n {
        d = d.pred_opt().unwrap_or(d);
    }
    d
}
