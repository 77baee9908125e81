//! Numeric renderers: magnitude-scaled numbers, currency, ratios, durations.
//!
//! These are the pure building blocks behind the transform-based registry
//! defaults. Each converts one number (or time-of-day) into a canonical
//! short string and never fails on finite input.

use crate::value::TimeOfDay;

/// Magnitude suffixes for thousands scaling.
const SUFFIXES: [&str; 6] = ["", "K", "M", "B", "T", "P"];

/// Scales a number by factors of 1000 and appends a magnitude suffix.
///
/// Values beyond the suffix table clamp to `"P"` rather than failing: the
/// division loop stops at the last entry and the mantissa is allowed to
/// exceed 1000.
///
/// # Example
///
/// ```
/// use readout_format::scale_number;
///
/// assert_eq!(scale_number(999.0, 2), "999.00");
/// assert_eq!(scale_number(1000.0, 2), "1.00K");
/// assert_eq!(scale_number(1_250_000.0, 2), "1.25M");
/// ```
pub fn scale_number(value: f64, decimal_places: usize) -> String {
    let mut num = value;
    let mut magnitude = 0;
    while num.abs() >= 1000.0 && magnitude < SUFFIXES.len() - 1 {
        magnitude += 1;
        num /= 1000.0;
    }
    format!("{:.*}{}", decimal_places, num, SUFFIXES[magnitude])
}

/// Scales a dollar amount: [`scale_number`] with a `$` prefix.
///
/// # Example
///
/// ```
/// use readout_format::scale_dollars;
///
/// assert_eq!(scale_dollars(1_250_000.0, 2), "$1.25M");
/// ```
pub fn scale_dollars(value: f64, decimal_places: usize) -> String {
    format!("${}", scale_number(value, decimal_places))
}

/// Renders a ratio as a multiple, e.g. `2.50x`.
///
/// Ratios smaller than 0.005 in magnitude render as `-`, the conventional
/// "not meaningful" marker in report columns.
///
/// # Example
///
/// ```
/// use readout_format::as_multiple;
///
/// assert_eq!(as_multiple(2.5), "2.50x");
/// assert_eq!(as_multiple(0.001), "-");
/// ```
pub fn as_multiple(value: f64) -> String {
    if value.abs() < 0.005 {
        "-".to_string()
    } else {
        format!("{:.2}x", value)
    }
}

/// Converts a minute count to `MM:SS`.
///
/// The minute field widens past two digits instead of wrapping, and
/// negative durations render the absolute value behind a leading `-`.
///
/// # Example
///
/// ```
/// use readout_format::format_minutes;
///
/// assert_eq!(format_minutes(5.5), "05:30");
/// assert_eq!(format_minutes(120.5), "120:30");
/// assert_eq!(format_minutes(-5.5), "-05:30");
/// ```
pub fn format_minutes(value: f64) -> String {
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    let abs = value.abs();
    let minutes = abs.floor() as u64;
    let seconds = ((abs * 60.0) % 60.0) as u64;
    format!("{}{:02}:{:02}", sign, minutes, seconds)
}

/// Renders the minute and second components of a time-of-day as `MM:SS`.
pub fn format_clock(time: TimeOfDay) -> String {
    format!("{:02}:{:02}", time.minute, time.second)
}
