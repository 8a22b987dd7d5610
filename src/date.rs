use crate::consts::{DATE_SEPARATOR, FEBRUARY, MAX_JULIAN_DAY, MAX_MONTH, MIN_JULIAN_DAY};
use crate::types::Calendar;
use crate::{DateError, HistoricalDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A date in the (proleptic) Julian calendar.
///
/// Immutable value type. Construction validates that the day exists in its
/// month under the Julian leap rule and that the date falls inside the
/// supported span, so every conversion on a constructed value is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// A date in the (proleptic) Gregorian calendar.
///
/// Same value semantics as [`JulianDate`]; the two types differ only in the
/// leap rule used for validation and in the correction term of the day-number
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JulianDate {
    /// Creates a date, validating the civil triple against the Julian
    /// calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` if the
    /// triple names no real day, and `DateError::BeforeEpoch` or
    /// `DateError::UnsupportedJulianDay` if the date falls outside the
    /// supported span.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        validate_civil(year, month, day, Calendar::Julian)?;
        Ok(Self { year, month, day })
    }

    /// Reads the date back from its Julian day number.
    ///
    /// The derived triple passes through [`JulianDate::new`], so the
    /// construction invariant cannot be bypassed this way.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedJulianDay` if `jdn` is not finite or
    /// lies outside the supported span.
    pub fn from_julian_day_number(jdn: f64) -> Result<Self, DateError> {
        check_julian_day(jdn)?;
        let (year, month, day) = from_julian_day(jdn, Calendar::Julian);
        Self::new(year, month, day)
    }

    /// Year component (astronomical numbering: 0 = 1 BC, -1 = 2 BC, ...)
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day component (1-31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The astronomical day number of this date, a half-integer denoting the
    /// midnight that opens the civil day (day numbers run noon to noon).
    pub fn julian_day_number(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day, Calendar::Julian)
    }

    /// The same day expressed in the Gregorian calendar, by way of the day
    /// number.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_validated_julian_day(self.julian_day_number())
    }

    /// Identity; pairs with [`GregorianDate::to_julian`].
    pub const fn to_julian(&self) -> Self {
        *self
    }

    // Decomposition for a day number already on the supported span. Such a
    // number always yields a real civil triple; debug builds re-check it.
    fn from_validated_julian_day(jdn: f64) -> Self {
        let (year, month, day) = from_julian_day(jdn, Calendar::Julian);
        debug_assert!(validate_civil(year, month, day, Calendar::Julian).is_ok());
        Self { year, month, day }
    }
}

impl GregorianDate {
    /// Creates a date, validating the civil triple against the Gregorian
    /// calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` if the
    /// triple names no real day, and `DateError::BeforeEpoch` or
    /// `DateError::UnsupportedJulianDay` if the date falls outside the
    /// supported span.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        validate_civil(year, month, day, Calendar::Gregorian)?;
        Ok(Self { year, month, day })
    }

    /// Reads the date back from its Julian day number.
    ///
    /// The derived triple passes through [`GregorianDate::new`], so the
    /// construction invariant cannot be bypassed this way.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedJulianDay` if `jdn` is not finite or
    /// lies outside the supported span.
    pub fn from_julian_day_number(jdn: f64) -> Result<Self, DateError> {
        check_julian_day(jdn)?;
        let (year, month, day) = from_julian_day(jdn, Calendar::Gregorian);
        Self::new(year, month, day)
    }

    /// Year component (astronomical numbering: 0 = 1 BC, -1 = 2 BC, ...)
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day component (1-31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The astronomical day number of this date, a half-integer denoting the
    /// midnight that opens the civil day (day numbers run noon to noon).
    pub fn julian_day_number(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day, Calendar::Gregorian)
    }

    /// The same day expressed in the Julian calendar, by way of the day
    /// number.
    pub fn to_julian(&self) -> JulianDate {
        JulianDate::from_validated_julian_day(self.julian_day_number())
    }

    /// Identity; pairs with [`JulianDate::to_gregorian`].
    pub const fn to_gregorian(&self) -> Self {
        *self
    }

    // Decomposition for a day number already on the supported span. Such a
    // number always yields a real civil triple; debug builds re-check it.
    fn from_validated_julian_day(jdn: f64) -> Self {
        let (year, month, day) = from_julian_day(jdn, Calendar::Gregorian);
        debug_assert!(validate_civil(year, month, day, Calendar::Gregorian).is_ok());
        Self { year, month, day }
    }
}

// --- day-number arithmetic shared by both calendars ---

// Algorithm as given in Meeus, Astronomical Algorithms, Chapter 7. January
// and February are shifted into the previous year so the leap day lands at
// the end of the shifted year; the Gregorian branch adds the century
// correction computed on the shifted year. Floor, not truncation: the
// correction term goes negative for years before the era.
fn to_julian_day(year: i32, month: u8, day: u8, calendar: Calendar) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);
    if month <= FEBRUARY {
        y -= 1.0;
        m += 12.0;
    }

    let mut jdn = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
        + f64::from(day)
        - 1524.5;
    if matches!(calendar, Calendar::Gregorian) {
        let century = (y / 100.0).floor();
        jdn += 2.0 - century + (century / 4.0).floor();
    }
    jdn
}

// Inverse of `to_julian_day`. Total over the supported span; for a day
// number obtained from a valid date it always reproduces that date's civil
// triple.
fn from_julian_day(jdn: f64, calendar: Calendar) -> (i32, u8, u8) {
    let z = (jdn + 0.5).floor();
    let a = match calendar {
        Calendar::Julian => z,
        Calendar::Gregorian => {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        }
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u8, day as u8)
}

fn validate_civil(year: i32, month: u8, day: u8, calendar: Calendar) -> Result<(), DateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month));
    }
    if day == 0 || day > calendar.month_length(year, month) {
        return Err(DateError::InvalidDay { year, month, day });
    }

    let jdn = to_julian_day(year, month, day, calendar);
    if jdn < MIN_JULIAN_DAY {
        return Err(DateError::BeforeEpoch { year, month, day });
    }
    if jdn > MAX_JULIAN_DAY {
        return Err(DateError::UnsupportedJulianDay(jdn.to_string()));
    }
    Ok(())
}

fn check_julian_day(jdn: f64) -> Result<(), DateError> {
    if !jdn.is_finite() || jdn < MIN_JULIAN_DAY || jdn > MAX_JULIAN_DAY {
        return Err(DateError::UnsupportedJulianDay(jdn.to_string()));
    }
    Ok(())
}

// --- string codec shared by both calendars ---

/// Splits off and checks an optional trailing `(Julian)` / `(Gregorian)`
/// label, then parses the `year-month-day` body.
fn parse_labeled(s: &str, expected: Calendar) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    let body = match trimmed.rsplit_once(' ') {
        Some((body, label)) if label.starts_with('(') && label.ends_with(')') => {
            let calendar: Calendar = label[1..label.len() - 1].parse()?;
            if calendar != expected {
                return Err(DateError::InvalidFormat(s.to_owned()));
            }
            body.trim_end()
        }
        _ => trimmed,
    };
    parse_civil(body)
}

fn parse_civil(body: &str) -> Result<(i32, u8, u8), DateError> {
    // A leading minus belongs to the year, not to the separators.
    let (negative, rest) = match body.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, body),
    };

    let parts: Vec<&str> = rest.split(DATE_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(body.to_owned()));
    }

    let year = parse_i32(parts[0])?;
    let month = parse_u8(parts[1])?;
    let day = parse_u8(parts[2])?;
    Ok((if negative { -year } else { year }, month, day))
}

/// Helper to parse i32 with an `InvalidFormat` error
fn parse_i32(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with an `InvalidFormat` error
fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({})",
            self.year,
            self.month,
            self.day,
            Calendar::Julian
        )
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({})",
            self.year,
            self.month,
            self.day,
            Calendar::Gregorian
        )
    }
}

impl FromStr for JulianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_labeled(s, Calendar::Julian)?;
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_labeled(s, Calendar::Gregorian)?;
        Self::new(year, month, day)
    }
}

impl HistoricalDate for JulianDate {
    fn calendar(&self) -> Calendar {
        Calendar::Julian
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn julian_day_number(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day, Calendar::Julian)
    }

    fn to_julian(&self) -> JulianDate {
        *self
    }

    fn to_gregorian(&self) -> GregorianDate {
        JulianDate::to_gregorian(self)
    }
}

impl HistoricalDate for GregorianDate {
    fn calendar(&self) -> Calendar {
        Calendar::Gregorian
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn julian_day_number(&self) -> f64 {
        to_julian_day(self.year, self.month, self.day, Calendar::Gregorian)
    }

    fn to_julian(&self) -> JulianDate {
        GregorianDate::to_julian(self)
    }

    fn to_gregorian(&self) -> GregorianDate {
        *self
    }
}

impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
