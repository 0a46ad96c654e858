//! Countdown time values for the game clock.
//!
//! This crate is intentionally dependency-free: it only knows how to read,
//! write and step a `"M:SS"` countdown. Everything that schedules or renders
//! clocks lives in `gameclock-engine` / `gameclock-ui`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value`] | `ClockTime` |
//! | [`error`] | `ParseError` |
//!
//! # Quick start
//!
//! ```rust
//! use gameclock_time::{decrement, ClockTime};
//!
//! assert_eq!(decrement("2:00").unwrap(), "1:59");
//! assert_eq!(decrement("0:00").unwrap(), "0:00");
//!
//! let t: ClockTime = "10:00".parse().unwrap();
//! assert_eq!(t.decrement().to_string(), "9:59");
//! ```

pub mod error;
pub mod value;

pub use error::ParseError;
pub use value::ClockTime;

/// Steps a `"M:SS"` string one second back, floored at `"0:00"`.
///
/// Fails when the input is not of the form `integer:integer` with seconds in
/// `0..=59`.
pub fn decrement(time: &str) -> Result<String, ParseError> {
    let value: ClockTime = time.parse()?;
    Ok(value.decrement().to_string())
}

#[cfg(test)]
mod decrement_tests {
    use super::*;

    fn ok(input: &str, expected: &str) { assert_eq!(decrement(input).unwrap(), expected); }
    fn err(input: &str) { decrement(input).unwrap_err(); }

    #[test] fn seconds_step() { ok("2:05", "2:04"); }
    #[test] fn minute_rollover() { ok("2:00", "1:59"); }
    #[test] fn last_second() { ok("0:01", "0:00"); }
    #[test] fn multi_digit_minutes_shrink() { ok("10:00", "9:59"); }
    #[test] fn floor() { ok("0:00", "0:00"); }
    #[test] fn unpadded_seconds_input() { ok("1:5", "1:04"); }
    #[test] fn long_game() { ok("90:30", "90:29"); }

    #[test]
    fn floor_is_idempotent() {
        let mut s = String::from("0:00");
        for _ in 0..10 {
            s = decrement(&s).unwrap();
        }
        assert_eq!(s, "0:00");
    }

    #[test] fn err_missing_colon() { err("500"); }
    #[test] fn err_empty() { err(""); }
    #[test] fn err_empty_minutes() { err(":30"); }
    #[test] fn err_empty_seconds() { err("5:"); }
    #[test] fn err_non_numeric() { err("ab:cd"); }
    #[test] fn err_negative() { err("-1:00"); }
    #[test] fn err_sign() { err("+1:00"); }
    #[test] fn err_extra_field() { err("1:00:00"); }
    #[test] fn err_seconds_over_59() { err("1:60"); }
    #[test] fn err_whitespace() { err(" 1:00"); }
    #[test] fn err_minutes_overflow() { err("99999999999:00"); }
}
