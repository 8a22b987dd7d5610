use crate::DateError;
use crate::consts::NUMERAL_TOKENS;

/// Renders a positive value as an upper-case Roman numeral.
///
/// Values of 4000 and above repeat `M`, which is how year numerals were
/// written before the bar notation existed.
///
/// # Errors
/// Returns `DateError::InvalidYear` for zero or negative values, which have
/// no Roman numeral form.
pub fn to_roman_numeral(value: i32) -> Result<String, DateError> {
    if value < 1 {
        return Err(DateError::InvalidYear(value));
    }
    Ok(render(value))
}

/// Parses a canonical upper-case Roman numeral.
///
/// Parsing is strict: the greedy token scan must consume the whole input and
/// re-rendering the value must reproduce it exactly, so non-canonical forms
/// like `IIII` or `VX` are rejected along with lower-case and empty input.
///
/// # Errors
/// Returns `DateError::InvalidNumeral` for anything but a canonical numeral.
pub fn parse_roman_numeral(text: &str) -> Result<i32, DateError> {
    if text.is_empty() {
        return Err(DateError::InvalidNumeral(text.to_owned()));
    }

    let mut remaining = text;
    let mut value: i32 = 0;
    for (weight, token) in NUMERAL_TOKENS {
        while let Some(rest) = remaining.strip_prefix(token) {
            value = value
                .checked_add(weight)
                .ok_or_else(|| DateError::InvalidNumeral(text.to_owned()))?;
            remaining = rest;
        }
    }

    if !remaining.is_empty() || render(value) != text {
        return Err(DateError::InvalidNumeral(text.to_owned()));
    }
    Ok(value)
}

/// Greedy table renderer. Callers guarantee `value >= 1`.
pub(crate) fn render(value: i32) -> String {
    debug_assert!(value >= 1);

    let mut remaining = value;
    let mut out = String::new();
    for (weight, token) in NUMERAL_TOKENS {
        while remaining >= weight {
            out.push_str(token);
            remaining -= weight;
        }
    }
    out
}
