//! Runtime value types handed to format functions.
//!
//! The [`Scalar`] enum represents the raw value a caller wants rendered for
//! display. Format functions accept `&Scalar` so a single derived callable
//! can take numbers, text, or a time-of-day without generics at the call
//! site.

use std::fmt;

/// A wall-clock time of day, used by the minutes rule.
///
/// Only the minute and second components participate in formatting; the hour
/// is carried so values constructed from real clock readings stay faithful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour component (0-23).
    pub hour: u8,
    /// Minute component (0-59).
    pub minute: u8,
    /// Second component (0-59).
    pub second: u8,
}

impl TimeOfDay {
    /// Creates a time-of-day from its components.
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Runtime value passed to a format function.
///
/// # Example
///
/// ```
/// use readout_format::Scalar;
///
/// let v: Scalar = 1250.0.into();
/// assert!(v.is_number());
/// assert_eq!(v.as_f64(), Some(1250.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Absent value.
    Null,
    /// Floating-point number.
    Float(f64),
    /// Integer number.
    Int(i64),
    /// Text value.
    Str(String),
    /// Time-of-day value.
    Time(TimeOfDay),
}

impl Scalar {
    /// Returns `true` if this value short-circuits to the null fallback.
    ///
    /// Null-equivalent inputs are `Null`, the empty string, and NaN.
    pub fn is_null_like(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Str(s) => s.is_empty(),
            Scalar::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Returns `true` if this is a `Float` or `Int` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Float(_) | Scalar::Int(_))
    }

    /// Extracts the numeric value, widening integers to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the time-of-day value, if present.
    pub fn as_time(&self) -> Option<TimeOfDay> {
        match self {
            Scalar::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Float(_) => "float",
            Scalar::Int(_) => "int",
            Scalar::Str(_) => "string",
            Scalar::Time(_) => "time",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Str(s) => f.write_str(s),
            Scalar::Time(t) => write!(f, "{}", t),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<TimeOfDay> for Scalar {
    fn from(v: TimeOfDay) -> Self {
        Scalar::Time(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_like_variants() {
        assert!(Scalar::Null.is_null_like());
        assert!(Scalar::Str(String::new()).is_null_like());
        assert!(Scalar::Float(f64::NAN).is_null_like());
    }

    #[test]
    fn test_not_null_like() {
        assert!(!Scalar::Float(0.0).is_null_like());
        assert!(!Scalar::Int(0).is_null_like());
        assert!(!Scalar::Str("x".into()).is_null_like());
        assert!(!Scalar::Time(TimeOfDay::new(0, 0, 0)).is_null_like());
    }

    #[test]
    fn test_as_f64_widens_int() {
        assert_eq!(Scalar::Int(42).as_f64(), Some(42.0));
        assert_eq!(Scalar::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Scalar::Str("42".into()).as_f64(), None);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::Int(7).to_string(), "7");
        assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
        assert_eq!(Scalar::Str("abc".into()).to_string(), "abc");
        assert_eq!(
            Scalar::Time(TimeOfDay::new(9, 5, 30)).to_string(),
            "09:05:30"
        );
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Scalar::from(1.5), Scalar::Float(1.5));
        assert_eq!(Scalar::from(3i64), Scalar::Int(3));
        assert_eq!(Scalar::from("hi"), Scalar::Str("hi".into()));
    }
}
