//! Derived age computation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule used to decide whether this year's birthday has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgePolicy {
    /// Compares the ordinal day-of-year of today and the birth date.
    ///
    /// Off by one around Feb 29 in leap years: a birthday on Mar 1 of a
    /// leap year has ordinal 61, which a non-leap year never reaches on
    /// Mar 1.
    #[default]
    DayOfYear,
    /// Compares (month, day) pairs; exact for every calendar date.
    Calendar,
}

impl AgePolicy {
    /// Computes the age in whole years of someone born on `dob` as of `today`.
    ///
    /// Dates of birth in the future yield a negative age; nothing clamps it.
    #[must_use]
    pub fn age_on(self, dob: NaiveDate, today: NaiveDate) -> i32 {
        let years = today.year() - dob.year();
        let birthday_pending = match self {
            Self::DayOfYear => today.ordinal() < dob.ordinal(),
            Self::Calendar => (today.month(), today.day()) < (dob.month(), dob.day()),
        };
        if birthday_pending {
            years - 1
        } else {
            years
        }
    }
}

impl fmt::Display for AgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayOfYear => write!(f, "day_of_year"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}
