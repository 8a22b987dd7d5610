mod consts;
mod date;
mod numeral;
mod prelude;
mod roman;
mod types;

pub use consts::*;
pub use date::{GregorianDate, JulianDate};
pub use numeral::{parse_roman_numeral, to_roman_numeral};
pub use roman::{Anchor, RomanDate};
pub use types::Calendar;

use std::fmt;

/// Error type for date construction, calendar conversion and Roman
/// notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the month's length for that calendar year.
    #[error("Month {month} doesn't have a day {day}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Civil date earlier than Julian day zero.
    #[error("Date {year}-{month:02}-{day:02} precedes the Julian day epoch")]
    BeforeEpoch { year: i32, month: u8, day: u8 },

    /// Julian day number not on the supported span.
    #[error("Julian day number {0} is outside the supported range")]
    UnsupportedJulianDay(String),

    /// Year with no Roman numeral form (zero or negative).
    #[error("Year {0} cannot be written in Roman numerals")]
    InvalidYear(i32),

    /// Malformed or non-canonical Roman numeral.
    #[error("Invalid Roman numeral: {0}")]
    InvalidNumeral(String),

    /// Countdown tag outside the written repertoire.
    #[error("Unknown day tag: {0}")]
    UnknownDayTag(String),

    /// Anchor abbreviation other than `Kal.`, `Non.` or `Id.`.
    #[error("Unknown anchor day: {0}")]
    UnknownAnchor(String),

    /// Month abbreviation outside the Latin vocabulary.
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// Well-formed notation that resolves to no legal day.
    #[error("Notation {0} doesn't resolve to a legal date")]
    InconsistentNotation(String),

    /// Input that doesn't match the expected textual shape.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Common interface of the calendar representations in this crate.
///
/// Implementors are concrete civil dates that can place themselves on the
/// Julian day line and restate themselves in either calendar. Years follow
/// astronomical numbering, so 1 BC is year 0 and 2 BC is year -1.
pub trait HistoricalDate: fmt::Display {
    /// The calendar this date is reckoned in.
    fn calendar(&self) -> Calendar;

    /// Astronomical year number.
    fn year(&self) -> i32;

    /// Month of year (1-12).
    fn month(&self) -> u8;

    /// Day of month (1-31).
    fn day(&self) -> u8;

    /// Julian day number at midnight, always ending in .5.
    fn julian_day_number(&self) -> f64;

    /// This date restated in the Julian calendar.
    fn to_julian(&self) -> JulianDate;

    /// This date restated in the Gregorian calendar.
    fn to_gregorian(&self) -> GregorianDate;

    /// Whether this date's year is a leap year in its own calendar.
    fn is_leap_year(&self) -> bool {
        self.calendar().is_leap_year(self.year())
    }

    /// Days in the given month under this date's calendar.
    fn month_length(&self, year: i32, month: u8) -> u8 {
        self.calendar().month_length(year, month)
    }
}
