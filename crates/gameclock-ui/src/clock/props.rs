use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// One of the two participants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The opponent.
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a turn indicator other than `white` / `black`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSide(pub String);

impl fmt::Display for UnknownSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown side {:?} (expected \"white\" or \"black\")", self.0)
    }
}

impl std::error::Error for UnknownSide {}

impl FromStr for Side {
    type Err = UnknownSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Side::White),
            "black" => Ok(Side::Black),
            _ => Err(UnknownSide(s.to_string())),
        }
    }
}

/// Inputs supplied by the host application.
///
/// # Example
/// ```rust,ignore
/// ClockProps::new("5:00")
///     .white("Ann")
///     .black("Bob")
///     .current_turn(Side::White)
///     .run(true)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockProps {
    /// Whose clock is running. Read on every update.
    pub current_turn: Side,
    /// Starting value for both clocks (`"M:SS"`). Only read at mount.
    pub time_format: String,
    /// Ticking is armed iff `true`.
    pub run: bool,
    pub white: String,
    pub black: String,
    /// Tick period; the post-switch grace delay is half of it.
    pub tick_period: Duration,
}

impl ClockProps {
    /// White to move, not running, default names, 1 s ticks.
    pub fn new(time_format: impl Into<String>) -> Self {
        Self {
            current_turn: Side::White,
            time_format: time_format.into(),
            run: false,
            white: "White".to_string(),
            black: "Black".to_string(),
            tick_period: Duration::from_secs(1),
        }
    }

    pub fn current_turn(mut self, v: Side) -> Self { self.current_turn = v; self }
    pub fn run(mut self, v: bool) -> Self { self.run = v; self }
    pub fn white(mut self, v: impl Into<String>) -> Self { self.white = v.into(); self }
    pub fn black(mut self, v: impl Into<String>) -> Self { self.black = v.into(); self }
    pub fn tick_period(mut self, v: Duration) -> Self { self.tick_period = v; self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("White".parse::<Side>().unwrap(), Side::White);
        assert_eq!("black".parse::<Side>().unwrap(), Side::Black);
        assert!("red".parse::<Side>().is_err());
    }

    #[test]
    fn other_flips() {
        assert_eq!(Side::White.other(), Side::Black);
        assert_eq!(Side::Black.other().other(), Side::Black);
    }
}
