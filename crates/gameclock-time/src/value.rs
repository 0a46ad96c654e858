use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Remaining time on one side of a game clock.
///
/// Ordering compares total remaining time. The floor is [`ClockTime::ZERO`];
/// [`decrement`](ClockTime::decrement) never goes below it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u32,
    seconds: u8,
}

impl ClockTime {
    /// The expired clock, `0:00`.
    pub const ZERO: ClockTime = ClockTime { minutes: 0, seconds: 0 };

    /// Text shown in place of a time value that could not be parsed.
    pub const FALLBACK_TEXT: &'static str = "--:--";

    /// Builds a value from its fields. Seconds must be in `0..=59`.
    pub fn new(minutes: u32, seconds: u8) -> Result<Self, ParseError> {
        if seconds > 59 {
            return Err(ParseError::new(format!("seconds out of range: {seconds}"), 1));
        }
        Ok(Self { minutes, seconds })
    }

    /// Builds a value from a total number of seconds.
    ///
    /// Minutes saturate at `u32::MAX`.
    pub fn from_secs(total: u64) -> Self {
        let minutes = u32::try_from(total / 60).unwrap_or(u32::MAX);
        Self { minutes, seconds: (total % 60) as u8 }
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    #[inline]
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    /// Total remaining time in seconds.
    #[inline]
    pub fn as_secs(self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// `true` once the clock has reached `0:00`.
    #[inline]
    pub fn is_expired(self) -> bool {
        self == Self::ZERO
    }

    /// One second earlier, floored at `0:00`.
    ///
    /// `0:00` is absorbing: decrementing it yields `0:00` again.
    #[must_use]
    pub fn decrement(self) -> Self {
        match (self.minutes, self.seconds) {
            (0, 0) => Self::ZERO,
            (m, 0) => Self { minutes: m - 1, seconds: 59 },
            (m, s) => Self { minutes: m, seconds: s - 1 },
        }
    }
}

impl fmt::Display for ClockTime {
    /// Minutes at their natural width, seconds always two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((min_text, sec_text)) = s.split_once(':') else {
            return Err(ParseError::new(format!("expected `M:SS`, found {s:?}"), 1));
        };
        let sec_col = min_text.chars().count() + 2;

        let minutes: u32 = parse_field(min_text, "minutes", 1)?;
        let seconds: u32 = parse_field(sec_text, "seconds", sec_col)?;
        if seconds > 59 {
            return Err(ParseError::new(format!("seconds out of range: {seconds}"), sec_col));
        }

        Ok(Self { minutes, seconds: seconds as u8 })
    }
}

/// Parses one non-empty run of ASCII digits. `col` is where the field starts.
fn parse_field(text: &str, what: &str, col: usize) -> Result<u32, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(format!("missing {what}"), col));
    }
    if let Some((i, c)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        let offset = text[..i].chars().count();
        return Err(ParseError::new(format!("unexpected {c:?} in {what}"), col + offset));
    }
    text.parse()
        .map_err(|_| ParseError::new(format!("{what} too large: {text}"), col))
}
