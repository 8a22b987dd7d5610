use crate::consts::{
    ANTE_DIEM, DECEMBER, IDES_DAY, JANUARY, JULY, LONG_IDES_DAY, LONG_NONES_DAY, MARCH,
    MAX_COUNTDOWN, MAY, MIN_COUNTDOWN, MONTH_ABBREVIATIONS, NONES_DAY, OCTOBER,
};
use crate::date::{GregorianDate, JulianDate};
use crate::numeral;
use crate::types::Calendar;
use crate::{DateError, HistoricalDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three fixed days of the Roman month from which every other day is
/// counted down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// First day of the month.
    Kalends,
    /// The 5th, or the 7th in March, May, July and October.
    Nones,
    /// The 13th, or the 15th in March, May, July and October.
    Ides,
}

impl Anchor {
    /// Latin abbreviation used in the written notation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kalends => "Kal.",
            Self::Nones => "Non.",
            Self::Ides => "Id.",
        }
    }

    /// Civil day this anchor falls on in the given month.
    pub(crate) const fn day_in(self, month: u8) -> u8 {
        match self {
            Self::Kalends => 1,
            Self::Nones => nones_day(month),
            Self::Ides => ides_day(month),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Anchor {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kal." => Ok(Self::Kalends),
            "Non." => Ok(Self::Nones),
            "Id." => Ok(Self::Ides),
            _ => Err(DateError::UnknownAnchor(s.to_owned())),
        }
    }
}

/// A civil day written the Roman way: an inclusive countdown toward one of
/// the three anchor days, the anchor's month name, and the year in Roman
/// numerals.
///
/// The underlying reckoning is the proleptic Julian calendar, the system the
/// notation was used with historically; in a Julian leap year the countdown
/// to the Kalends of March simply stretches by the intercalated day. Days
/// after the Ides name the *following* month (whose Kalends they count down
/// to) while the year numeral stays with the civil date, so December 30
/// writes as `a.d.III.Kal.Jan.` of the old year.
///
/// Values are immutable, carry their civil [`JulianDate`], and order
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanDate {
    date: JulianDate,
    anchor: Anchor,
    countdown: u8,
}

impl RomanDate {
    /// Encodes the given civil day, month and year (Julian reckoning).
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for years before 1, which have no
    /// numeral form, and the usual construction errors for a triple that
    /// names no real Julian date.
    pub fn from_civil(day: u8, month: u8, year: i32) -> Result<Self, DateError> {
        if year < 1 {
            return Err(DateError::InvalidYear(year));
        }
        let date = JulianDate::new(year, month, day)?;
        Ok(Self::encode(date))
    }

    /// Encodes any calendar date by way of its Julian civil form.
    ///
    /// # Errors
    /// Same conditions as [`RomanDate::from_civil`].
    pub fn from_date(date: &impl HistoricalDate) -> Result<Self, DateError> {
        let julian = date.to_julian();
        Self::from_civil(julian.day(), julian.month(), julian.year())
    }

    /// Decodes the four written parts of a Roman date.
    ///
    /// `rtag` is the countdown (`""` on an anchor day, else `a.d.II.`
    /// through `a.d.XIX.`), `rtxt` the anchor abbreviation, `rmonat` the
    /// Latin month abbreviation and `year` the year numeral. Notation is
    /// canonicalized: a nonstandard countdown that still resolves to a legal
    /// day (such as `a.d.XVII.Kal.Mart.` in a common year, which lands on
    /// the Ides of February) yields that day's standard form.
    ///
    /// # Errors
    /// Returns `DateError::UnknownDayTag` / `UnknownAnchor` / `UnknownMonth`
    /// / `InvalidNumeral` for parts outside the closed vocabularies, and
    /// `DateError::InconsistentNotation` when the countdown resolves to no
    /// legal day.
    pub fn from_tags(rtag: &str, rtxt: &str, rmonat: &str, year: &str) -> Result<Self, DateError> {
        let countdown = parse_countdown(rtag)?;
        let anchor: Anchor = rtxt.parse()?;
        let named_month = parse_month_abbreviation(rmonat)?;
        let year = numeral::parse_roman_numeral(year)?;

        let (month, day) = match anchor {
            Anchor::Kalends if countdown > 1 => {
                // Counting down to next month's Kalends: the notation names
                // the following month, the date lives in the previous one.
                let month = if named_month == JANUARY {
                    DECEMBER
                } else {
                    named_month - 1
                };
                let length = Calendar::Julian.month_length(year, month);
                (month, i32::from(length) - i32::from(countdown) + 2)
            }
            _ => {
                let anchor_day = anchor.day_in(named_month);
                (named_month, i32::from(anchor_day) - i32::from(countdown) + 1)
            }
        };
        if day < 1 {
            return Err(DateError::InconsistentNotation(format!(
                "{rtag}{rtxt}{rmonat}"
            )));
        }
        Self::from_civil(day as u8, month, year)
    }

    /// Civil day of month (1-31).
    #[inline]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Civil month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    /// Civil year (always >= 1).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// The anchor day the notation counts down to.
    #[inline]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The civil date this notation resolves to.
    #[inline]
    pub const fn to_date(&self) -> JulianDate {
        self.date
    }

    /// Countdown tag, e.g. `a.d.VI.`; empty on the anchor day itself.
    pub fn rtag(&self) -> String {
        if self.countdown == 1 {
            String::new()
        } else {
            format!("{}{}.", ANTE_DIEM, numeral::render(i32::from(self.countdown)))
        }
    }

    /// Anchor abbreviation, e.g. `Id.`.
    pub const fn rtxt(&self) -> &'static str {
        self.anchor.abbreviation()
    }

    /// Month abbreviation as written, e.g. `Sept.`. Past the Ides this is
    /// the *following* month, whose Kalends the tag counts down to.
    pub fn rmonat(&self) -> &'static str {
        MONTH_ABBREVIATIONS[self.named_month() as usize]
    }

    /// Year written as an upper-case Roman numeral, e.g. `MMXVII`.
    pub fn year_numeral(&self) -> String {
        numeral::render(self.date.year())
    }

    fn encode(date: JulianDate) -> Self {
        let day = date.day();
        let month = date.month();
        let nones = nones_day(month);
        let ides = ides_day(month);

        let (anchor, countdown) = if day == 1 {
            (Anchor::Kalends, 1)
        } else if day <= nones {
            (Anchor::Nones, nones - day + 1)
        } else if day <= ides {
            (Anchor::Ides, ides - day + 1)
        } else {
            let length = Calendar::Julian.month_length(date.year(), month);
            (Anchor::Kalends, length - day + 2)
        };
        Self {
            date,
            anchor,
            countdown,
        }
    }

    fn named_month(&self) -> u8 {
        if matches!(self.anchor, Anchor::Kalends) && self.countdown > 1 {
            if self.date.month() == DECEMBER {
                JANUARY
            } else {
                self.date.month() + 1
            }
        } else {
            self.date.month()
        }
    }
}

fn parse_countdown(rtag: &str) -> Result<u8, DateError> {
    if rtag.is_empty() {
        return Ok(1);
    }
    let tag_numeral = rtag
        .strip_prefix(ANTE_DIEM)
        .and_then(|rest| rest.strip_suffix('.'))
        .ok_or_else(|| DateError::UnknownDayTag(rtag.to_owned()))?;
    let value = numeral::parse_roman_numeral(tag_numeral)
        .map_err(|_| DateError::UnknownDayTag(rtag.to_owned()))?;
    if !(i32::from(MIN_COUNTDOWN)..=i32::from(MAX_COUNTDOWN)).contains(&value) {
        return Err(DateError::UnknownDayTag(rtag.to_owned()));
    }
    Ok(value as u8)
}

fn parse_month_abbreviation(rmonat: &str) -> Result<u8, DateError> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbreviation| !abbreviation.is_empty() && *abbreviation == rmonat)
        .map(|index| index as u8)
        .ok_or_else(|| DateError::UnknownMonth(rmonat.to_owned()))
}

/// March, May, July and October put the Nones on the 7th and the Ides on
/// the 15th; every other month uses the 5th and the 13th.
const fn has_late_anchors(month: u8) -> bool {
    matches!(month, MARCH | MAY | JULY | OCTOBER)
}

const fn nones_day(month: u8) -> u8 {
    if has_late_anchors(month) {
        LONG_NONES_DAY
    } else {
        NONES_DAY
    }
}

const fn ides_day(month: u8) -> u8 {
    if has_late_anchors(month) {
        LONG_IDES_DAY
    } else {
        IDES_DAY
    }
}

impl fmt::Display for RomanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {}",
            self.rtag(),
            self.rtxt(),
            self.rmonat(),
            self.year_numeral()
        )
    }
}

impl FromStr for RomanDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (tags, year) = trimmed
            .rsplit_once(' ')
            .ok_or_else(|| DateError::InvalidFormat(s.to_owned()))?;

        let (rtag, rest) = match tags.strip_prefix(ANTE_DIEM) {
            Some(after) => {
                let dot = after
                    .find('.')
                    .ok_or_else(|| DateError::InvalidFormat(s.to_owned()))?;
                tags.split_at(ANTE_DIEM.len() + dot + 1)
            }
            None => ("", tags),
        };
        let (rtxt, rmonat) = [Anchor::Kalends, Anchor::Nones, Anchor::Ides]
            .iter()
            .find_map(|anchor| {
                rest.strip_prefix(anchor.abbreviation())
                    .map(|month| (anchor.abbreviation(), month))
            })
            .ok_or_else(|| DateError::UnknownAnchor(rest.to_owned()))?;

        Self::from_tags(rtag, rtxt, rmonat, year)
    }
}

impl HistoricalDate for RomanDate {
    fn calendar(&self) -> Calendar {
        Calendar::Julian
    }

    fn year(&self) -> i32 {
        self.date.year()
    }

    fn month(&self) -> u8 {
        self.date.month()
    }

    fn day(&self) -> u8 {
        self.date.day()
    }

    fn julian_day_number(&self) -> f64 {
        self.date.julian_day_number()
    }

    fn to_julian(&self) -> JulianDate {
        self.date
    }

    fn to_gregorian(&self) -> GregorianDate {
        self.date.to_gregorian()
    }
}

impl Serialize for RomanDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RomanDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotationCase {
        day: u8,
        month: u8,
        year: i32,
        rtag: &'static str,
        rtxt: &'static str,
        rmonat: &'static str,
        numeral: &'static str,
    }

    fn notation_cases() -> [NotationCase; 6] {
        [
            NotationCase {
                day: 5,
                month: 6,
                year: 2018,
                rtag: "",
                rtxt: "Non.",
                rmonat: "Jun.",
                numeral: "MMXVIII",
            },
            NotationCase {
                day: 8,
                month: 9,
                year: 2017,
                rtag: "a.d.VI.",
                rtxt: "Id.",
                rmonat: "Sept.",
                numeral: "MMXVII",
            },
            NotationCase {
                day: 27,
                month: 2,
                year: 1987,
                rtag: "a.d.III.",
                rtxt: "Kal.",
                rmonat: "Mart.",
                numeral: "MCMLXXXVII",
            },
            NotationCase {
                day: 10,
                month: 12,
                year: 1815,
                rtag: "a.d.IV.",
                rtxt: "Id.",
                rmonat: "Dec.",
                numeral: "MDCCCXV",
            },
            NotationCase {
                day: 17,
                month: 5,
                year: 1792,
                rtag: "a.d.XVI.",
                rtxt: "Kal.",
                rmonat: "Jun.",
                numeral: "MDCCXCII",
            },
            NotationCase {
                day: 18,
                month: 3,
                year: 1634,
                rtag: "a.d.XV.",
                rtxt: "Kal.",
                rmonat: "Apr.",
                numeral: "MDCXXXIV",
            },
        ]
    }

    #[test]
    fn test_encode_notation_cases() {
        for case in &notation_cases() {
            let roman = RomanDate::from_civil(case.day, case.month, case.year).unwrap();
            assert_eq!(roman.rtag(), case.rtag, "rtag of {}", roman.to_date());
            assert_eq!(roman.rtxt(), case.rtxt, "rtxt of {}", roman.to_date());
            assert_eq!(roman.rmonat(), case.rmonat, "rmonat of {}", roman.to_date());
            assert_eq!(
                roman.year_numeral(),
                case.numeral,
                "numeral of {}",
                roman.to_date()
            );
            assert_eq!(
                roman.to_string(),
                format!("{}{}{} {}", case.rtag, case.rtxt, case.rmonat, case.numeral)
            );
        }
    }

    #[test]
    fn test_decode_notation_cases() {
        for case in &notation_cases() {
            let roman =
                RomanDate::from_tags(case.rtag, case.rtxt, case.rmonat, case.numeral).unwrap();
            assert_eq!(roman.day(), case.day);
            assert_eq!(roman.month(), case.month);
            assert_eq!(roman.year(), case.year);
            assert_eq!(
                roman,
                RomanDate::from_civil(case.day, case.month, case.year).unwrap()
            );
        }
    }

    #[test]
    fn test_anchor_days_have_empty_tag() {
        // Kalends of January
        let roman = RomanDate::from_civil(1, 1, 2018).unwrap();
        assert_eq!(roman.to_string(), "Kal.Jan. MMXVIII");
        assert_eq!(roman.anchor(), Anchor::Kalends);

        // Nones and Ides in a short-anchor month
        assert_eq!(
            RomanDate::from_civil(5, 6, 2018).unwrap().to_string(),
            "Non.Jun. MMXVIII"
        );
        assert_eq!(
            RomanDate::from_civil(13, 6, 2018).unwrap().to_string(),
            "Id.Jun. MMXVIII"
        );

        // March places them late
        assert_eq!(
            RomanDate::from_civil(7, 3, 2018).unwrap().to_string(),
            "Non.Mart. MMXVIII"
        );
        assert_eq!(
            RomanDate::from_civil(15, 3, 2018).unwrap().to_string(),
            "Id.Mart. MMXVIII"
        );
    }

    #[test]
    fn test_countdown_is_inclusive() {
        // June 3rd: three days counting both ends, 3rd-4th-5th.
        let roman = RomanDate::from_civil(3, 6, 2018).unwrap();
        assert_eq!(roman.to_string(), "a.d.III.Non.Jun. MMXVIII");

        // September 8th to the Ides on the 13th: six days inclusive.
        let roman = RomanDate::from_civil(8, 9, 2017).unwrap();
        assert_eq!(roman.anchor(), Anchor::Ides);
        assert_eq!(roman.rtag(), "a.d.VI.");
    }

    #[test]
    fn test_longest_countdown() {
        // The 14th of a 31-day month with early anchors is the farthest
        // day from its Kalends: XIX.
        let roman = RomanDate::from_civil(14, 1, 2018).unwrap();
        assert_eq!(roman.to_string(), "a.d.XIX.Kal.Feb. MMXVIII");

        let roman = RomanDate::from_civil(14, 8, 2018).unwrap();
        assert_eq!(roman.to_string(), "a.d.XIX.Kal.Sept. MMXVIII");
    }

    #[test]
    fn test_kalends_wrap_keeps_civil_year() {
        let roman = RomanDate::from_civil(30, 12, 2017).unwrap();
        assert_eq!(roman.to_string(), "a.d.III.Kal.Jan. MMXVII");

        let roman = RomanDate::from_civil(31, 12, 2017).unwrap();
        assert_eq!(roman.to_string(), "a.d.II.Kal.Jan. MMXVII");

        // And back: the numeral still names December's year.
        let decoded = RomanDate::from_tags("a.d.III.", "Kal.", "Jan.", "MMXVII").unwrap();
        assert_eq!(decoded.to_date(), JulianDate::new(2017, 12, 30).unwrap());
    }

    #[test]
    fn test_leap_february_stretches_the_countdown() {
        // 1900 is a Julian leap year: February 24th sits seven inclusive
        // days before the Kalends of March instead of six.
        let leap = RomanDate::from_civil(24, 2, 1900).unwrap();
        assert_eq!(leap.to_string(), "a.d.VII.Kal.Mart. MCM");

        let common = RomanDate::from_civil(24, 2, 1901).unwrap();
        assert_eq!(common.to_string(), "a.d.VI.Kal.Mart. MCMI");

        // The intercalated day itself.
        let bissextile = RomanDate::from_civil(29, 2, 1900).unwrap();
        assert_eq!(bissextile.to_string(), "a.d.II.Kal.Mart. MCM");

        let decoded = RomanDate::from_tags("a.d.VII.", "Kal.", "Mart.", "MCM").unwrap();
        assert_eq!(decoded.to_date(), JulianDate::new(1900, 2, 24).unwrap());
    }

    #[test]
    fn test_decode_canonicalizes_resolvable_notation() {
        // In a common year a XVII-day countdown to the Kalends of March
        // lands on February 13th, which is the Ides.
        let roman = RomanDate::from_tags("a.d.XVII.", "Kal.", "Mart.", "MMXXI").unwrap();
        assert_eq!(roman.to_date(), JulianDate::new(2021, 2, 13).unwrap());
        assert_eq!(roman.to_string(), "Id.Feb. MMXXI");

        // A V-day countdown to the Nones of June lands on the Kalends.
        let roman = RomanDate::from_tags("a.d.V.", "Non.", "Jun.", "MMXVIII").unwrap();
        assert_eq!(roman.to_date(), JulianDate::new(2018, 6, 1).unwrap());
        assert_eq!(roman.to_string(), "Kal.Jun. MMXVIII");
    }

    #[test]
    fn test_decode_rejects_unknown_parts() {
        let result = RomanDate::from_tags("a.d.I.", "Id.", "Sept.", "MMXVII");
        assert!(matches!(result, Err(DateError::UnknownDayTag(_))));

        let result = RomanDate::from_tags("a.d.XX.", "Kal.", "Mart.", "MMXVII");
        assert!(matches!(result, Err(DateError::UnknownDayTag(_))));

        let result = RomanDate::from_tags("ad.VI.", "Id.", "Sept.", "MMXVII");
        assert!(matches!(result, Err(DateError::UnknownDayTag(_))));

        let result = RomanDate::from_tags("a.d.VI.", "Cal.", "Sept.", "MMXVII");
        assert!(matches!(result, Err(DateError::UnknownAnchor(_))));

        let result = RomanDate::from_tags("a.d.VI.", "Id.", "Januar.", "MMXVII");
        assert!(matches!(result, Err(DateError::UnknownMonth(_))));

        let result = RomanDate::from_tags("a.d.VI.", "Id.", "Sept.", "IIII");
        assert!(matches!(result, Err(DateError::InvalidNumeral(_))));
    }

    #[test]
    fn test_decode_rejects_unresolvable_countdown() {
        // Six days before the Nones of June would be day zero.
        let result = RomanDate::from_tags("a.d.VI.", "Non.", "Jun.", "MMXVIII");
        assert!(matches!(result, Err(DateError::InconsistentNotation(_))));

        let result = RomanDate::from_tags("a.d.XIX.", "Id.", "Sept.", "MMXVII");
        assert!(matches!(result, Err(DateError::InconsistentNotation(_))));
    }

    #[test]
    fn test_from_civil_rejects() {
        // No Roman numeral can write year zero or earlier.
        assert!(matches!(
            RomanDate::from_civil(1, 1, 0),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            RomanDate::from_civil(15, 3, -44),
            Err(DateError::InvalidYear(-44))
        ));

        assert!(matches!(
            RomanDate::from_civil(30, 2, 2018),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            RomanDate::from_civil(1, 13, 2018),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_from_date_converts_first() {
        // Gregorian June 18th 2018 is Julian June 5th, the Nones.
        let gregorian = GregorianDate::new(2018, 6, 18).unwrap();
        let roman = RomanDate::from_date(&gregorian).unwrap();
        assert_eq!(roman.to_string(), "Non.Jun. MMXVIII");

        let julian = JulianDate::new(2018, 6, 5).unwrap();
        assert_eq!(RomanDate::from_date(&julian).unwrap(), roman);
    }

    #[test]
    fn test_historical_date_impl() {
        let roman = RomanDate::from_civil(8, 9, 2017).unwrap();
        assert_eq!(roman.calendar(), Calendar::Julian);
        assert_eq!(
            HistoricalDate::julian_day_number(&roman),
            roman.to_date().julian_day_number()
        );
        assert_eq!(roman.to_julian(), JulianDate::new(2017, 9, 8).unwrap());
        assert_eq!(
            HistoricalDate::to_gregorian(&roman),
            GregorianDate::new(2017, 9, 21).unwrap()
        );
    }

    #[test]
    fn test_from_str_round_trip() {
        for text in [
            "Non.Jun. MMXVIII",
            "a.d.VI.Id.Sept. MMXVII",
            "a.d.III.Kal.Mart. MCMLXXXVII",
            "a.d.XVI.Kal.Jun. MDCCXCII",
            "Kal.Jan. I",
        ] {
            let roman = text.parse::<RomanDate>().unwrap();
            assert_eq!(roman.to_string(), text, "round trip of {text}");
        }
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        for text in [
            "",
            "MMXVII",
            "VI.Id.Sept. MMXVII",
            "a.d.VI.Id.Sept.MMXVII",
            "Id.September MMXVII",
            "a.dVI.Id.Sept. MMXVII",
        ] {
            assert!(text.parse::<RomanDate>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let kalends = RomanDate::from_civil(1, 1, 2018).unwrap();
        let nones = RomanDate::from_civil(5, 6, 2018).unwrap();
        let wrapped = RomanDate::from_civil(30, 12, 2018).unwrap();
        assert!(kalends < nones);
        assert!(nones < wrapped);

        let earlier_year = RomanDate::from_civil(31, 12, 2017).unwrap();
        assert!(earlier_year < kalends);
    }

    #[test]
    fn test_serde_string_format() {
        let roman = RomanDate::from_civil(8, 9, 2017).unwrap();
        let json = serde_json::to_string(&roman).unwrap();
        assert_eq!(json, r#""a.d.VI.Id.Sept. MMXVII""#);

        let parsed: RomanDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, roman);

        let result: Result<RomanDate, _> = serde_json::from_str(r#""a.d.XX.Kal.Mart. MMXVII""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_anchor_parsing() {
        assert_eq!("Kal.".parse::<Anchor>().unwrap(), Anchor::Kalends);
        assert_eq!("Non.".parse::<Anchor>().unwrap(), Anchor::Nones);
        assert_eq!("Id.".parse::<Anchor>().unwrap(), Anchor::Ides);
        assert!(matches!(
            "Kal".parse::<Anchor>(),
            Err(DateError::UnknownAnchor(_))
        ));
        assert_eq!(Anchor::Ides.to_string(), "Id.");
    }

    #[test]
    fn test_anchor_serde_round_trip() {
        let json = serde_json::to_string(&Anchor::Ides).unwrap();
        assert_eq!(json, r#""Ides""#);

        let parsed: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Anchor::Ides);

        let result: Result<Anchor, _> = serde_json::from_str(r#""Id.""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_from_1400_to_present() {
        // Every single day from Julian 1400-01-01 until the Gregorian year
        // 2026: encode, decode from the written tags, and reparse the
        // display form.
        let mut date = JulianDate::new(1400, 1, 1).unwrap();
        loop {
            let roman = RomanDate::from_date(&date).unwrap();
            let decoded = RomanDate::from_tags(
                &roman.rtag(),
                roman.rtxt(),
                roman.rmonat(),
                &roman.year_numeral(),
            )
            .unwrap();
            assert_eq!(decoded, roman, "tags of {date}");
            assert_eq!(decoded.to_date(), date);

            let reparsed: RomanDate = roman.to_string().parse().unwrap();
            assert_eq!(reparsed, roman, "display of {date}");

            if date.to_gregorian().year() >= 2026 {
                break;
            }
            date = JulianDate::from_julian_day_number(date.julian_day_number() + 1.0).unwrap();
        }
    }
}
