use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A calendar month of a specific year, used as a grouping key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize)]
pub struct YearMonth(pub i32, pub u32);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self(year, month)
    }
    pub fn year(self) -> i32 {
        self.0
    }
    pub fn month(self) -> u32 {
        self.1
    }
    pub fn of(datetime: NaiveDateTime) -> Self {
        Self(datetime.year(), datetime.month())
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0, self.1)
    }
}

/// Inclusive range of whole years.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, datetime: &NaiveDateTime) -> bool {
        (self.start..=self.end).contains(&datetime.year())
    }

    /// First and last instant of the range, `None` if the years are out of chrono's range.
    pub fn datetime_bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = NaiveDate::from_ymd_opt(self.start, 1, 1)?.and_hms_opt(0, 0, 0)?;
        let end = NaiveDate::from_ymd_opt(self.end, 12, 31)?.and_hms_opt(23, 59, 59)?;
        Some((start, end))
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((start, end): (i32, i32)) -> Self {
        Self::new(start, end)
    }
}
