/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for May
pub const MAY: u8 = 5;
/// Month number for July
pub const JULY: u8 = 7;
/// Month number for October
pub const OCTOBER: u8 = 10;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the calendar's leap rule)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not Gregorian leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Smallest supported Julian day number: the midnight opening 1 January
/// 4713 BC of the Julian reckoning (day numbers run noon to noon, so the
/// civil day spans `n - 0.5` to `n + 0.5`)
pub const MIN_JULIAN_DAY: f64 = -0.5;

/// Largest supported Julian day number (2^31 - 0.5, about 5.8 million years
/// in); below this bound every term of the conversion arithmetic stays
/// exactly representable in `f64`
pub const MAX_JULIAN_DAY: f64 = 2_147_483_647.5;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Latin month abbreviations as written in Roman dates
/// (index 0 is unused, months are 1-indexed)
pub const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", // index 0 unused (months are 1-indexed)
    "Jan.", "Feb.", "Mart.", "Apr.", "Mai.", "Jun.", "Jul.", "Aug.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

/// Prefix of the Roman countdown tag ("ante diem")
pub(crate) const ANTE_DIEM: &str = "a.d.";

/// Day of the Nones in most months
pub(crate) const NONES_DAY: u8 = 5;
/// Day of the Nones in March, May, July and October
pub(crate) const LONG_NONES_DAY: u8 = 7;
/// Day of the Ides in most months
pub(crate) const IDES_DAY: u8 = 13;
/// Day of the Ides in March, May, July and October
pub(crate) const LONG_IDES_DAY: u8 = 15;

/// Shortest countdown a day tag can carry ("a.d.II.")
pub(crate) const MIN_COUNTDOWN: u8 = 2;
/// Longest countdown a day tag can carry ("a.d.XIX.", the 14th of a 31-day
/// month counting down to the next Kalends)
pub(crate) const MAX_COUNTDOWN: u8 = 19;

/// Roman numeral tokens in descending order of value, subtractive pairs
/// included, shared by the greedy renderer and parser
pub(crate) const NUMERAL_TOKENS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];
