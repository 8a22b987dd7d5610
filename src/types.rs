use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two calendar systems this crate converts between.
/// A closed set: every date value carries exactly one of these tags,
/// and the tag decides which leap rule governs its month lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Calendar {
    /// The Julian calendar: a leap day every fourth year, no exceptions.
    #[display(fmt = "Julian")]
    Julian,
    /// The Gregorian calendar: century years are leap only when divisible
    /// by 400.
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl Calendar {
    /// Applies this system's leap rule to `year`.
    ///
    /// Years use astronomical numbering (0 = 1 BC, -1 = 2 BC, ...), which
    /// keeps the plain remainder tests correct for years before the era.
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Julian => year % LEAP_YEAR_CYCLE == 0,
            Self::Gregorian => {
                (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
                    || year % GREGORIAN_CYCLE == 0
            }
        }
    }

    /// Number of days in the given month of the given year under this
    /// system's leap rule.
    pub const fn month_length(self, year: i32, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    }
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Julian" => Ok(Self::Julian),
            "Gregorian" => Ok(Self::Gregorian),
            _ => Err(DateError::InvalidFormat(s.to_owned())),
        }
    }
}
