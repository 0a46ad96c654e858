use std::fmt;

/// A malformed countdown time string.
///
/// Produced when the input is not of the form `integer:integer` with seconds
/// in `0..=59`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based column of the offending field or character.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock time parse error at column {}: {}", self.col, self.message)
    }
}

impl std::error::Error for ParseError {}
