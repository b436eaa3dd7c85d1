//! Calendar month value type.
//!
//! # Invariants
//! - `month` is always within `1..=12`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearMonthError {
    InvalidMonth(u32),
}

impl Display for YearMonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be within 1..=12, got {month}"),
        }
    }
}

impl Error for YearMonthError {}

/// A `(year, month)` pair identifying one calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of this month; `None` only outside chrono's supported range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::{YearMonth, YearMonthError};
    use chrono::NaiveDate;

    #[test]
    fn new_rejects_out_of_range_month() {
        assert_eq!(YearMonth::new(2024, 0), Err(YearMonthError::InvalidMonth(0)));
        assert_eq!(YearMonth::new(2024, 13), Err(YearMonthError::InvalidMonth(13)));
    }

    #[test]
    fn navigation_wraps_year_boundaries() {
        let december = YearMonth::new(2024, 12).unwrap();
        assert_eq!(december.next(), YearMonth::new(2025, 1).unwrap());
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn contains_and_first_day_agree() {
        let march = YearMonth::new(2024, 3).unwrap();
        let first = march.first_day().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(march.contains(first));
        assert!(!march.contains(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert_eq!(march.to_string(), "2024-03");
    }
}
