//! Time-of-day values read from opening-hours text.
//!
//! Opening hours are written by hand, so the accepted form is loose:
//! `9.00`, `09:00` and `11.30am` are all read. Only the hour and minute are
//! kept.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// Error returned when a time token is shaped like a time but is not one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A minute-precision time of day.
///
/// # Examples
///
/// ```
/// use foodbank_finder::domain::ClockTime;
///
/// assert!(ClockTime::looks_like_time("9.00"));
/// assert!(!ClockTime::looks_like_time("to"));
///
/// let t = ClockTime::parse_token("9.00").unwrap();
/// assert_eq!(t.to_string(), "09:00");
/// assert_eq!(ClockTime::parse_token("14:30").unwrap(), ClockTime::new(14, 30).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build from hour and minute, `None` when either is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Whether a token has the shape of a time: one or more digits, one
    /// separator that is not a digit, then two digits.
    ///
    /// Anything after the two minute digits is ignored.
    pub fn looks_like_time(token: &str) -> bool {
        split_token(token).is_some()
    }

    /// Read a time token such as `11.00`, `9:30` or `1.30pm`.
    ///
    /// Fails when the token is not time-shaped, when the separator is not
    /// `.` or `:`, or when the hour or minute is out of range. A trailing
    /// am/pm marker is not interpreted.
    pub fn parse_token(token: &str) -> Result<Self, InvalidClockTime> {
        let (hour_digits, separator, minute_digits) =
            split_token(token).ok_or_else(|| InvalidClockTime::new("expected H.MM or HH:MM"))?;

        if separator != '.' && separator != ':' {
            return Err(InvalidClockTime::new("separator must be '.' or ':'"));
        }

        if hour_digits.len() > 2 {
            return Err(InvalidClockTime::new("hour must be one or two digits"));
        }

        let hour: u32 = hour_digits
            .parse()
            .map_err(|_| InvalidClockTime::new("invalid hour digits"))?;
        let minute: u32 = minute_digits
            .parse()
            .map_err(|_| InvalidClockTime::new("invalid minute digits"))?;

        if hour > 23 {
            return Err(InvalidClockTime::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(InvalidClockTime::new("minute must be 0-59"));
        }

        ClockTime::new(hour, minute).ok_or_else(|| InvalidClockTime::new("invalid time"))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        self.0.num_seconds_from_midnight() as i64
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

/// Split a token into (hour digits, separator, minute digits).
fn split_token(token: &str) -> Option<(&str, char, &str)> {
    let hour_len = token.bytes().take_while(u8::is_ascii_digit).count();
    if hour_len == 0 {
        return None;
    }

    let rest = &token[hour_len..];
    let separator = rest.chars().next()?;
    let after = &rest[separator.len_utf8()..];

    let minutes = after.get(..2)?;
    if !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((&token[..hour_len], separator, minutes))
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // Truncate to the minute.
        ClockTime(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
